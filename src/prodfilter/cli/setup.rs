use clap::{Parser, Subcommand};
use prodfilter::model::{Color, Size};

#[derive(Parser, Debug)]
#[command(name = "prodfilter", version)]
#[command(about = "Filter a product catalog with composable specifications", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the walkthrough queries against the sample catalog
    Demo,

    /// List products matching all given criteria
    #[command(alias = "ls")]
    List {
        /// Only products of this color (repeatable)
        #[arg(long = "color", value_name = "COLOR")]
        colors: Vec<Color>,

        /// Only products of this size (repeatable)
        #[arg(long = "size", value_name = "SIZE")]
        sizes: Vec<Size>,

        /// Extra criteria as attr=value (e.g. color=green size=large)
        criteria: Vec<String>,
    },
}
