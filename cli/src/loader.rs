use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use degrees_core::{Dataset, Event, Link, Person};
use log::{debug, warn};
use rustc_hash::FxHashSet;
use serde::Deserialize;

#[derive(Deserialize)]
struct PersonRecord {
    id: String,
    name: String,
    #[serde(default)]
    birth: String,
}

#[derive(Deserialize)]
struct MovieRecord {
    id: String,
    title: String,
    #[serde(default)]
    year: String,
}

#[derive(Deserialize)]
struct StarRecord {
    person_id: String,
    movie_id: String,
}

/// Loads the three-file CSV dataset from `dir` into in-memory lookups.
/// Blank or unparsable year fields become 0 ("unknown"); star rows
/// pointing at unknown people or movies are dropped with a warning.
pub fn load_dataset(dir: &Path) -> Result<Dataset> {
    let people = load_people(&dir.join("people.csv"))?;
    let events = load_movies(&dir.join("movies.csv"))?;
    let links = load_stars(&dir.join("stars.csv"), &people, &events)?;

    debug!(
        "loaded {} people, {} movies, {} star records",
        people.len(),
        events.len(),
        links.len()
    );

    Ok(Dataset::new(people, events, links))
}

fn load_people(path: &Path) -> Result<Vec<Person>> {
    let mut reader = csv_reader(path)?;
    let mut people = Vec::new();

    for record in reader.deserialize() {
        let record: PersonRecord =
            record.with_context(|| format!("malformed row in {}", path.display()))?;
        people.push(Person {
            id: record.id,
            name: record.name,
            birth_year: parse_year(&record.birth),
        });
    }

    Ok(people)
}

fn load_movies(path: &Path) -> Result<Vec<Event>> {
    let mut reader = csv_reader(path)?;
    let mut movies = Vec::new();

    for record in reader.deserialize() {
        let record: MovieRecord =
            record.with_context(|| format!("malformed row in {}", path.display()))?;
        movies.push(Event {
            id: record.id,
            title: record.title,
            year: parse_year(&record.year),
        });
    }

    Ok(movies)
}

fn load_stars(path: &Path, people: &[Person], events: &[Event]) -> Result<Vec<Link>> {
    let person_ids: FxHashSet<&str> = people.iter().map(|p| p.id.as_str()).collect();
    let event_ids: FxHashSet<&str> = events.iter().map(|e| e.id.as_str()).collect();

    let mut reader = csv_reader(path)?;
    let mut links = Vec::new();

    for record in reader.deserialize() {
        let record: StarRecord =
            record.with_context(|| format!("malformed row in {}", path.display()))?;

        if !person_ids.contains(record.person_id.as_str())
            || !event_ids.contains(record.movie_id.as_str())
        {
            warn!(
                "dropping star record {}/{}: unknown id",
                record.person_id, record.movie_id
            );
            continue;
        }

        links.push(Link {
            person_id: record.person_id,
            event_id: record.movie_id,
        });
    }

    Ok(links)
}

fn csv_reader(path: &Path) -> Result<csv::Reader<File>> {
    let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    Ok(csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(file))
}

fn parse_year(raw: &str) -> i32 {
    raw.trim().parse().unwrap_or(0)
}
