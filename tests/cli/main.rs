#[path = "../harness/mod.rs"]
mod harness;

mod catalog;
mod compose;
mod history;
mod progress;
