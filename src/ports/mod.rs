mod catalog_source;
mod clipboard_writer;
mod history_store;
mod identity_provider;
mod prompt_enhancer;

pub use catalog_source::CatalogSource;
pub use clipboard_writer::ClipboardWriter;
pub use history_store::HistoryStore;
pub use identity_provider::IdentityProvider;
pub use prompt_enhancer::{EnhanceRequest, PromptEnhancer};
