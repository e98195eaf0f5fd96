use degrees_core::{Dataset, Event, Link, Person};

fn person(id: &str, name: &str, birth_year: i32) -> Person {
    Person {
        id: id.to_string(),
        name: name.to_string(),
        birth_year,
    }
}

fn event(id: &str, title: &str, year: i32) -> Event {
    Event {
        id: id.to_string(),
        title: title.to_string(),
        year,
    }
}

fn link(person_id: &str, event_id: &str) -> Link {
    Link {
        person_id: person_id.to_string(),
        event_id: event_id.to_string(),
    }
}

fn fixture_dataset() -> Dataset {
    Dataset::new(
        vec![
            person("a", "Person A", 1970),
            person("b", "Person B", 1965),
            person("c", "Person C", 1980),
        ],
        vec![
            event("m0", "Event M0", 1960),
            event("m", "Event M", 1990),
            event("n", "Event N", 1995),
        ],
        vec![
            link("a", "m0"),
            link("b", "m0"),
            link("a", "m"),
            link("b", "m"),
            link("b", "n"),
            link("c", "n"),
        ],
    )
}

#[test]
fn test_lookups_by_id() {
    let dataset = fixture_dataset();

    assert_eq!(dataset.person("a").unwrap().name, "Person A");
    assert_eq!(dataset.event("n").unwrap().year, 1995);
    assert!(dataset.person("nobody").is_none());
    assert_eq!(dataset.people_count(), 3);
    assert_eq!(dataset.events_count(), 3);
}

#[test]
fn test_events_of_and_cast_of() {
    let dataset = fixture_dataset();

    let mut events: Vec<&str> = dataset.events_of("b").map(|e| e.id.as_str()).collect();
    events.sort();
    assert_eq!(events, ["m", "m0", "n"]);

    let mut cast: Vec<&str> = dataset.cast_of("m").map(|p| p.id.as_str()).collect();
    cast.sort();
    assert_eq!(cast, ["a", "b"]);
}

#[test]
fn test_name_lookup_is_normalized() {
    let dataset = Dataset::new(
        vec![person("1", "Chloë  Grace Moretz", 1997)],
        vec![],
        vec![],
    );

    assert_eq!(dataset.candidates_for_name("chloe grace moretz"), ["1"]);
    assert_eq!(dataset.candidates_for_name(" CHLOE grace  MORETZ "), ["1"]);
    assert!(dataset.candidates_for_name("someone else").is_empty());
}

#[test]
fn test_duplicate_names_return_all_candidates() {
    let dataset = Dataset::new(
        vec![person("1", "Emma Stone", 1988), person("2", "Emma Stone", 1950)],
        vec![],
        vec![],
    );

    assert_eq!(dataset.candidates_for_name("emma stone").len(), 2);
}

#[test]
fn test_prune_drops_links_at_or_before_the_later_birth_year() {
    let mut dataset = fixture_dataset();
    let start = dataset.person("a").unwrap().clone(); // 1970
    let goal = dataset.person("c").unwrap().clone(); // 1980

    let pruned = dataset.prune_implausible_links(&start, &goal);

    // m0 (1960) predates both births; its two links go.
    assert_eq!(pruned, 2);
    let cutoff = start.birth_year.max(goal.birth_year);
    for link in dataset.links() {
        assert!(dataset.event(&link.event_id).unwrap().year > cutoff);
    }
}

#[test]
fn test_prune_drops_links_to_unknown_events() {
    let mut dataset = Dataset::new(
        vec![person("a", "Person A", 1970), person("b", "Person B", 1965)],
        vec![event("m", "Event M", 1990)],
        vec![link("a", "m"), link("b", "m"), link("a", "ghost")],
    );
    let start = dataset.person("a").unwrap().clone();
    let goal = dataset.person("b").unwrap().clone();

    let pruned = dataset.prune_implausible_links(&start, &goal);

    assert_eq!(pruned, 1);
    assert_eq!(dataset.links().len(), 2);
}

#[test]
fn test_prune_keeps_links_to_unknown_year_events() {
    let mut dataset = Dataset::new(
        vec![person("a", "Person A", 1970), person("b", "Person B", 1965)],
        vec![event("m", "Event M", 0)],
        vec![link("a", "m"), link("b", "m")],
    );
    let start = dataset.person("a").unwrap().clone();
    let goal = dataset.person("b").unwrap().clone();

    assert_eq!(dataset.prune_implausible_links(&start, &goal), 0);
    assert_eq!(dataset.links().len(), 2);
}

#[test]
fn test_prune_with_unknown_birth_years_keeps_everything_real() {
    let mut dataset = Dataset::new(
        vec![person("a", "Person A", 0), person("b", "Person B", 0)],
        vec![event("m", "Event M", 1925)],
        vec![link("a", "m"), link("b", "m")],
    );
    let start = dataset.person("a").unwrap().clone();
    let goal = dataset.person("b").unwrap().clone();

    assert_eq!(dataset.prune_implausible_links(&start, &goal), 0);
    assert_eq!(dataset.links().len(), 2);
}
