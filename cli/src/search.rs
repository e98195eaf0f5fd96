use anyhow::{Context, Result};
use degrees_core::{Dataset, PathStep, Person};

use crate::args::Args;
use crate::resolve::resolve_person;

pub struct SearchRequest {
    pub start: Person,
    pub goal: Person,
    pub args: Args,
}

pub struct SearchResult {
    pub path: Vec<PathStep>,
    pub people_explored: usize,
    pub search_duration: f64,
    pub start_name: String,
    pub goal_name: String,
    pub display_options: Args,
}

pub fn create_search_request(args: Args, dataset: &Dataset) -> Result<SearchRequest> {
    let start_id = resolve_person(&args.person1, dataset)?;
    let goal_id = resolve_person(&args.person2, dataset)?;

    let start = dataset
        .person(&start_id)
        .cloned()
        .context("resolver returned an unknown person id")?;
    let goal = dataset
        .person(&goal_id)
        .cloned()
        .context("resolver returned an unknown person id")?;

    Ok(SearchRequest { start, goal, args })
}
