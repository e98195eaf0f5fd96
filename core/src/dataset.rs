use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::string_normalization::clean_str;

/// A person vertex of the bipartite graph. `birth_year == 0` means the
/// birth year is unknown; the plausibility rules never filter against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub name: String,
    pub birth_year: i32,
}

/// An event vertex (a film, in the reference dataset).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub year: i32,
}

/// One person-appeared-in-event edge. Many-to-many, no uniqueness beyond
/// the pair itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub person_id: String,
    pub event_id: String,
}

type PersonLookup = FxHashMap<String, Person>;
type EventLookup = FxHashMap<String, Event>;
type NameLookup = FxHashMap<String, Vec<String>>;

/// Read-only view of the loaded graph: person and event lookups plus the
/// edge list. Built once before a search; the only mutation afterwards is
/// the single pre-search pruning pass.
#[derive(Debug)]
pub struct Dataset {
    people: PersonLookup,
    events: EventLookup,
    links: Vec<Link>,
    name_lookup: NameLookup,
}

impl Dataset {
    pub fn new(people: Vec<Person>, events: Vec<Event>, links: Vec<Link>) -> Self {
        let mut name_lookup: NameLookup = FxHashMap::default();
        for person in &people {
            name_lookup
                .entry(clean_str(&person.name))
                .or_default()
                .push(person.id.clone());
        }

        let people = people.into_iter().map(|p| (p.id.clone(), p)).collect();
        let events = events.into_iter().map(|e| (e.id.clone(), e)).collect();

        Self {
            people,
            events,
            links,
            name_lookup,
        }
    }

    pub fn person(&self, id: &str) -> Option<&Person> {
        self.people.get(id)
    }

    pub fn event(&self, id: &str) -> Option<&Event> {
        self.events.get(id)
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn people_count(&self) -> usize {
        self.people.len()
    }

    pub fn events_count(&self) -> usize {
        self.events.len()
    }

    /// Ids of every person whose normalized name matches `name`. Names are
    /// not unique, so this can return more than one candidate.
    pub fn candidates_for_name(&self, name: &str) -> &[String] {
        self.name_lookup
            .get(&clean_str(name))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Events the given person appears in, one per matching link.
    pub fn events_of<'a>(&'a self, person_id: &'a str) -> impl Iterator<Item = &'a Event> + 'a {
        self.links
            .iter()
            .filter(move |link| link.person_id == person_id)
            .filter_map(|link| self.events.get(&link.event_id))
    }

    /// People appearing in the given event, one per matching link.
    pub fn cast_of<'a>(&'a self, event_id: &'a str) -> impl Iterator<Item = &'a Person> + 'a {
        self.links
            .iter()
            .filter(move |link| link.event_id == event_id)
            .filter_map(|link| self.people.get(&link.person_id))
    }

    /// Drops every link whose event is not strictly after the later of the
    /// two endpoints' birth years: no event predating both lifetimes can
    /// sit on a valid connecting path. Runs once, before the engine is
    /// constructed. Unknown years (0, birth or event) never prune; links
    /// to unknown events are dropped. Returns the number of links removed.
    pub fn prune_implausible_links(&mut self, start: &Person, goal: &Person) -> usize {
        let cutoff = start.birth_year.max(goal.birth_year);
        let before = self.links.len();

        let events = &self.events;
        self.links.retain(|link| match events.get(&link.event_id) {
            Some(event) => event.year == 0 || event.year > cutoff,
            None => false,
        });

        before - self.links.len()
    }
}
