//! Census Tidy CLI
//!
//! ```bash
//! census-tidy cso      # cso_by_county.csv -> processed_cso_data.csv
//! census-tidy nisra    # print the header rows of nisra_2011.csv and nisra_2021.csv
//! ```
//!
//! Both commands read fixed file names from the working directory.

use census_tidy::logs::log_error;
use census_tidy::{run_cso, run_nisra, CsoOptions, NisraOptions};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "census-tidy")]
#[command(about = "Reshape Irish-speaker census extracts into tidy data", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Transform cso_by_county.csv into processed_cso_data.csv
    Cso,

    /// Print the header rows of nisra_2011.csv and nisra_2021.csv
    Nisra,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Cso => cmd_cso(),
        Commands::Nisra => cmd_nisra(),
    };

    if let Err(e) = result {
        log_error(format!("Error: {}", e));
        std::process::exit(1);
    }
}

fn cmd_cso() -> Result<(), Box<dyn std::error::Error>> {
    let summary = run_cso(&CsoOptions::default())?;

    eprintln!(
        "\n✨ Done! {} counties → {} rows in {}",
        summary.csv_info.row_count - summary.aggregate_rows,
        summary.records_written,
        summary.output.display()
    );
    Ok(())
}

fn cmd_nisra() -> Result<(), Box<dyn std::error::Error>> {
    run_nisra(&NisraOptions::default(), |report| println!("{}", report.render()))?;
    Ok(())
}
