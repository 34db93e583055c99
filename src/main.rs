fn main() {
    devprompt::app::cli::run();
}
