use degrees_core::PathStep;

use crate::args::Args;
use crate::colors::ColorScheme;
use crate::search::{SearchRequest, SearchResult};

pub fn display_search_info(request: &SearchRequest, colors: &ColorScheme) {
    if request.args.quiet {
        return;
    }

    println!(
        "🎬 Finding connection from {} to {}",
        colors.person_name(&format!("\"{}\"", request.start.name)),
        colors.person_name(&format!("\"{}\"", request.goal.name))
    );

    if request.args.verbose {
        println!("⚙️  Using breadth-first search (shortest chain of shared films)");
    }

    println!("🔍 Searching...");
}

pub fn display_search_results(result: SearchResult, colors: &ColorScheme) {
    let is_verbose = result.display_options.verbose;

    if is_verbose {
        println!("\n---\n");
    }

    if result.path.is_empty() {
        println!(
            "{} {} and {}",
            colors.error("❌ No connection found between"),
            colors.person_name(&format!("\"{}\"", result.start_name)),
            colors.person_name(&format!("\"{}\"", result.goal_name))
        );
    } else {
        display_connection(&result.path, &result.display_options, colors);
    }

    if is_verbose {
        display_search_statistics(result.people_explored, result.search_duration, colors);
    }
}

fn display_connection(path: &[PathStep], display_options: &Args, colors: &ColorScheme) {
    let degrees = path.len() - 1;
    println!(
        "{} {} degrees of separation",
        colors.success("✅"),
        colors.number(&degrees.to_string())
    );

    // Path flow first
    let path_flow = path
        .iter()
        .map(|(person, _)| {
            colors
                .person_name(&format!("\"{}\"", person.name))
                .to_string()
        })
        .collect::<Vec<_>>()
        .join(" → ");
    println!("{}", path_flow);

    // Detailed list only if not in quiet mode
    if !display_options.quiet {
        println!();
        for (step_index, window) in path.windows(2).enumerate() {
            let (previous, _) = &window[0];
            let (person, via_event) = &window[1];
            let step_number = format!("{}.", step_index + 1);

            let event = via_event
                .as_ref()
                .expect("every non-root path step carries its connecting event");

            let mut formatted_line = format!(
                "{:2} {} and {} starred in {} ({})",
                colors.step_number(&step_number),
                colors.person_name(&format!("\"{}\"", previous.name)),
                colors.person_name(&format!("\"{}\"", person.name)),
                colors.movie_title(&format!("\"{}\"", event.title)),
                colors.number(&event.year.to_string())
            );

            if display_options.show_ids {
                formatted_line.push_str(&format!(
                    " {}",
                    colors.id(&format!("[{} via {}]", person.id, event.id))
                ));
            }

            println!("{}", formatted_line);
        }
    }
}

fn display_search_statistics(people_explored: usize, search_duration: f64, colors: &ColorScheme) {
    println!("\n---\n");
    println!(
        "{} Explored {} people in {} sec",
        colors.stats("📊"),
        colors.number(&people_explored.to_string()),
        colors.number(&format!("{:.3}", search_duration))
    );
}
