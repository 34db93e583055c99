pub mod answers_file;
pub mod compose;
pub mod copy;
pub mod enhance;
pub mod export;
pub mod history;
