use anyhow::Result;
use clap::Parser;
use degrees::args::Args;
use degrees::colors::ColorScheme;
use degrees::display::{display_search_info, display_search_results};
use degrees::loader::load_dataset;
use degrees::search::{SearchResult, create_search_request};
use degrees_core::bfs_find_path;
use log::debug;

fn main() {
    env_logger::init();

    if let Err(error) = run() {
        eprintln!("❌ Error: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    let colors = ColorScheme::new(!args.no_color);

    let mut dataset = load_dataset(&args.data)?;
    let request = create_search_request(args, &dataset)?;

    display_search_info(&request, &colors);

    // Dataset-level pruning happens once, before the engine exists.
    let pruned = dataset.prune_implausible_links(&request.start, &request.goal);
    debug!("pruned {pruned} implausible links before the search");

    let (path, people_explored, search_duration) =
        bfs_find_path(&request.start, &request.goal, &dataset);

    let result = SearchResult {
        path,
        people_explored,
        search_duration,
        start_name: request.start.name.clone(),
        goal_name: request.goal.name.clone(),
        display_options: request.args,
    };
    display_search_results(result, &colors);

    Ok(())
}
