use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "degrees")]
#[command(about = "Find how many degrees of separation connect two people through shared films")]
pub struct Args {
    /// Name of the person to start from
    pub person1: String,

    /// Name of the person to reach
    pub person2: String,

    /// Directory containing people.csv, movies.csv and stars.csv
    #[arg(short, long, value_name = "DIR", default_value = "data/small")]
    pub data: PathBuf,

    /// Show person and movie ids in the output
    #[arg(short = 'i', long)]
    pub show_ids: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose mode - show search info and statistics
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode - only show the path flow
    #[arg(short, long)]
    pub quiet: bool,
}
