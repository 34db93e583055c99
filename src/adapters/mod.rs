pub mod catalog_embedded;
pub mod clipboard_arboard;
pub mod enhancer_http;
pub mod history_filesystem;
pub mod identity_config;

pub use catalog_embedded::{EmbeddedCatalog, FileCatalog};
pub use clipboard_arboard::ArboardClipboard;
pub use enhancer_http::HttpPromptEnhancer;
pub use history_filesystem::FilesystemHistoryStore;
pub use identity_config::ConfigIdentityProvider;
