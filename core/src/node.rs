use std::rc::Rc;

use crate::dataset::{Event, Person};

/// One step of a candidate path: the person reached, a back-link to the
/// node it was expanded from, and the event that produced the edge. The
/// node owns its event; the parent is shared, since the frontier and the
/// final path can both retain the same ancestor. Parent links always point
/// at a strictly earlier exploration step, so the structure is a tree
/// rooted at the start person, never a cycle.
#[derive(Debug, Clone)]
pub struct PathNode {
    pub person: Person,
    pub parent: Option<Rc<PathNode>>,
    pub via_event: Option<Event>,
}

impl PathNode {
    /// The start of a search: no parent, no connecting event.
    pub fn root(person: Person) -> Self {
        Self {
            person,
            parent: None,
            via_event: None,
        }
    }

    /// A person reached from `parent` through the shared `via_event`.
    pub fn step(person: Person, parent: Rc<PathNode>, via_event: Event) -> Self {
        Self {
            person,
            parent: Some(parent),
            via_event: Some(via_event),
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}
