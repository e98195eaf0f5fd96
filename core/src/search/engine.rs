use std::rc::Rc;

use rustc_hash::FxHashSet;

use crate::dataset::{Dataset, Person};
use crate::frontier::Frontier;
use crate::node::PathNode;

use super::PathStep;

/// Breadth-first engine over the bipartite people/events graph. Generic in
/// the frontier so a different removal policy changes the traversal order
/// without touching the loop.
pub struct Bfs<'a, F: Frontier> {
    start: Person,
    goal: Person,
    dataset: &'a Dataset,
    frontier: F,
    explored: FxHashSet<String>,
}

impl<'a, F: Frontier> Bfs<'a, F> {
    pub fn new(start: Person, goal: Person, dataset: &'a Dataset, frontier: F) -> Self {
        Self {
            start,
            goal,
            dataset,
            frontier,
            explored: FxHashSet::default(),
        }
    }

    /// People dequeued and expanded so far.
    pub fn explored_count(&self) -> usize {
        self.explored.len()
    }

    /// Runs the search to completion. Returns the path ordered start ->
    /// goal inclusive, or an empty path when the goal is unreachable.
    pub fn run(&mut self) -> Vec<PathStep> {
        let root = Rc::new(PathNode::root(self.start.clone()));

        // The root itself can be the goal.
        if self.is_goal(&root) {
            return vec![(root.person.clone(), None)];
        }

        self.frontier
            .add(Rc::clone(&root))
            .expect("Root node should be well-formed");

        while let Some(current) = self.frontier.remove() {
            if self.explored.contains(&current.person.id) {
                // Stale: enqueued from a second parent before its first
                // dequeue. Skip and keep looping.
                continue;
            }

            if self.is_goal(&current) {
                return reconstruct_path(&current);
            }

            self.explored.insert(current.person.id.clone());
            self.expand(&current);
        }

        // Frontier exhausted: not connected. An outcome, not an error.
        Vec::new()
    }

    fn is_goal(&self, node: &PathNode) -> bool {
        node.person.id == self.goal.id
    }

    /// Enqueues every co-appearing person reachable from `node` through
    /// one shared event.
    fn expand(&mut self, node: &Rc<PathNode>) {
        let dataset = self.dataset;

        for event in dataset.events_of(&node.person.id) {
            for co_person in dataset.cast_of(&event.id) {
                if co_person.id == node.person.id || co_person.id == self.start.id {
                    continue;
                }
                if self.explored.contains(&co_person.id) || self.frontier.contains(&co_person.id) {
                    continue;
                }
                // Nobody appears in an event predating their birth;
                // unknown years (0, birth or event) are never filtered.
                if co_person.birth_year != 0
                    && event.year != 0
                    && event.year <= co_person.birth_year
                {
                    continue;
                }

                let candidate = PathNode::step(co_person.clone(), Rc::clone(node), event.clone());
                self.frontier
                    .add(Rc::new(candidate))
                    .expect("Expanded nodes should be well-formed");
            }
        }
    }
}

/// Walks parent links goal -> root, then reverses into start -> goal order
/// with each person paired to the event connecting it to its predecessor.
fn reconstruct_path(goal_node: &Rc<PathNode>) -> Vec<PathStep> {
    let mut path = Vec::new();
    let mut current = Some(goal_node);

    while let Some(node) = current {
        path.push((node.person.clone(), node.via_event.clone()));
        current = node.parent.as_ref();
    }

    path.reverse();
    path
}
