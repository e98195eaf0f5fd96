mod engine;

use std::time::Instant;

pub use engine::Bfs;

use crate::dataset::{Dataset, Event, Person};
use crate::frontier::QueueFrontier;

/// One element of a reconstructed path: the person reached and the event
/// connecting them to the previous element (`None` for the start person).
pub type PathStep = (Person, Option<Event>);

/// (path ordered start -> goal inclusive, people explored, elapsed
/// seconds). An empty path means the two people are not connected.
pub type SearchOutcome = (Vec<PathStep>, usize, f64);

/// Runs a breadth-first search between two people over the loaded dataset.
pub fn bfs_find_path(start: &Person, goal: &Person, dataset: &Dataset) -> SearchOutcome {
    let search_timer = Instant::now();

    let mut engine = Bfs::new(start.clone(), goal.clone(), dataset, QueueFrontier::new());
    let path = engine.run();

    let elapsed_time = search_timer.elapsed().as_secs_f64();
    (path, engine.explored_count(), elapsed_time)
}
