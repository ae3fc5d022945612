//! Command implementations for the SpaceX launch dashboard CLI.
//!
//! Each subcommand loads the dataset from disk and runs the same pure chart
//! functions the dashboard uses, printing the result instead of drawing it.

use clap::Subcommand;
use spacex_launch::LaunchDataset;

pub mod chart;
pub mod summary;

/// Default location of the launch records, relative to the workspace root.
pub const DEFAULT_CSV: &str = "fixtures/spacex_launch_dash.csv";

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Print record count, payload bounds and per-site launch totals
    Summary {
        /// Path to the launch records CSV
        #[arg(short = 'c', long, default_value = DEFAULT_CSV)]
        csv: String,
    },

    /// Print the success pie chart spec as JSON
    Pie {
        /// Path to the launch records CSV
        #[arg(short = 'c', long, default_value = DEFAULT_CSV)]
        csv: String,

        /// Launch site, or ALL for every site
        #[arg(short = 's', long, default_value = "ALL")]
        site: String,
    },

    /// Print the payload/outcome scatter chart spec as JSON
    Scatter {
        /// Path to the launch records CSV
        #[arg(short = 'c', long, default_value = DEFAULT_CSV)]
        csv: String,

        /// Launch site, or ALL for every site
        #[arg(short = 's', long, default_value = "ALL")]
        site: String,

        /// Lower payload bound in kg (defaults to the dataset minimum)
        #[arg(long, allow_negative_numbers = true)]
        low: Option<f64>,

        /// Upper payload bound in kg (defaults to the dataset maximum)
        #[arg(long, allow_negative_numbers = true)]
        high: Option<f64>,
    },
}

fn load(csv: &str) -> anyhow::Result<LaunchDataset> {
    Ok(LaunchDataset::from_path(csv)?)
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Summary { csv } => {
            let dataset = load(&csv)?;
            print!("{}", summary::summary_report(&dataset));
            Ok(())
        }
        Command::Pie { csv, site } => {
            let dataset = load(&csv)?;
            println!("{}", chart::pie_json(&dataset, &site)?);
            Ok(())
        }
        Command::Scatter {
            csv,
            site,
            low,
            high,
        } => {
            let dataset = load(&csv)?;
            println!("{}", chart::scatter_json(&dataset, &site, low, high)?);
            Ok(())
        }
    }
}
