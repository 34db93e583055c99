pub mod answers;
pub mod catalog;
pub mod completion;
pub mod composer;
pub mod configuration;
pub mod error;
pub mod history;
pub mod identity;

pub use answers::{AnswerSet, OTHER_KEY, StackMode};
pub use catalog::{Catalog, Labels};
pub use completion::{Step, StepCompletion, step_completion};
pub use composer::{Fragment, SectionId, build_document, compose};
pub use configuration::{AppConfig, CatalogConfig, EnhancerConfig, HistoryConfig};
pub use error::AppError;
pub use history::HistoryEntry;
pub use identity::Identity;
