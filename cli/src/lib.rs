pub mod args;
pub mod colors;
pub mod display;
pub mod loader;
pub mod resolve;
pub mod search;

// Re-export commonly used items
pub use args::Args;
pub use colors::ColorScheme;
pub use loader::load_dataset;
pub use resolve::resolve_person;
pub use search::{SearchRequest, SearchResult, create_search_request};
