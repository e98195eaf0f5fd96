use std::collections::VecDeque;
use std::rc::Rc;

use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::node::PathNode;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FrontierError {
    /// A non-root node missing its connecting event, or a root carrying
    /// one. Only a construction bug upstream can produce this.
    #[error("malformed node for '{person_id}': parent and connecting event must appear together")]
    InvalidNode { person_id: String },
}

/// Ordered collection of discovered-but-not-yet-expanded nodes. The
/// removal order is the policy: the engine only sees this trait, so a LIFO
/// or priority implementation turns the same loop into depth-first or
/// best-first search.
pub trait Frontier {
    /// Appends a node, rejecting structurally malformed ones.
    fn add(&mut self, node: Rc<PathNode>) -> Result<(), FrontierError>;

    /// True iff a node with this person id is already pending. Callers
    /// check this before adding; the frontier itself does not deduplicate.
    fn contains(&self, person_id: &str) -> bool;

    /// Removes and returns the next node by this frontier's policy, or
    /// `None` when empty.
    fn remove(&mut self) -> Option<Rc<PathNode>>;

    fn is_empty(&self) -> bool;
}

/// FIFO frontier: insertion order is removal order, which makes the engine
/// breadth-first and its result shortest in edges. Membership is tracked
/// in a hash set keyed by person id alongside the queue, so `contains`
/// stays cheap without touching the removal order.
#[derive(Default)]
pub struct QueueFrontier {
    queue: VecDeque<Rc<PathNode>>,
    pending: FxHashSet<String>,
}

impl QueueFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for QueueFrontier {
    fn add(&mut self, node: Rc<PathNode>) -> Result<(), FrontierError> {
        if node.parent.is_some() != node.via_event.is_some() {
            return Err(FrontierError::InvalidNode {
                person_id: node.person.id.clone(),
            });
        }
        self.pending.insert(node.person.id.clone());
        self.queue.push_back(node);
        Ok(())
    }

    fn contains(&self, person_id: &str) -> bool {
        self.pending.contains(person_id)
    }

    fn remove(&mut self) -> Option<Rc<PathNode>> {
        let node = self.queue.pop_front()?;
        self.pending.remove(&node.person.id);
        Some(node)
    }

    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
