pub mod cli;
pub mod config;
pub mod draft;
pub mod generator;
pub mod i18n;
pub mod ideas;
pub mod llm;
pub mod publisher;
pub mod wp;

// Re-export commonly used types
pub use config::Config;
pub use draft::Draft;
pub use ideas::Idea;
