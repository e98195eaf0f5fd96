pub mod dataset;
pub mod frontier;
pub mod node;
pub mod search;
pub mod string_normalization;

// Re-export commonly used items
pub use dataset::{Dataset, Event, Link, Person};
pub use frontier::{Frontier, FrontierError, QueueFrontier};
pub use node::PathNode;
pub use search::{Bfs, PathStep, SearchOutcome, bfs_find_path};
pub use string_normalization::clean_str;
