//! devprompt: compose structured AI coding prompts from a guided questionnaire.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use domain::{
    AnswerSet, AppConfig, AppError, Catalog, HistoryEntry, Identity, Labels, OTHER_KEY,
    StackMode, Step, StepCompletion, compose, step_completion,
};
