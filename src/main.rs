//! Movie Insights - command line entry point

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use movie_insights::config::DEFAULT_TOP_N;
use movie_insights::data::DataProfile;
use movie_insights::{logging, AnalysisReport, Pipeline, ReportExporter, RunSettings};
use std::path::PathBuf;
use tracing::error;

#[derive(Parser)]
#[command(name = "movie_insights")]
#[command(version)]
#[command(about = "Clean and analyze the TMDB movie dataset", long_about = None)]
struct Cli {
    #[arg(long, global = true, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, global = true, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Clean the dataset, run every analysis and write the report
    Run {
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        #[arg(short = 'n', long, default_value_t = DEFAULT_TOP_N)]
        top_n: usize,

        #[arg(short, long, value_name = "DIR", default_value = "./report")]
        output: PathBuf,

        /// Write single-line JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show general properties of the raw dataset
    Profile {
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init_logger(cli.color, cli.verbose);

    if let Err(e) = execute(cli.command) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn execute(command: Commands) -> Result<()> {
    match command {
        Commands::Run {
            input,
            top_n,
            output,
            compact,
        } => {
            let settings = RunSettings::new(input, output)
                .with_top_n(top_n)
                .with_pretty_json(!compact);
            let report = Pipeline::run(&settings)
                .with_context(|| format!("Analysis of {} failed", settings.input.display()))?;

            let exporter = ReportExporter::new(&settings.output_dir, settings.pretty_json)?;
            let manifest = exporter
                .export(&report)
                .context("Failed to write report")?;

            print_summary(&report);
            println!(
                "\nWrote {} files to {}",
                manifest.files.len(),
                manifest.output_dir.display()
            );
        }
        Commands::Profile { input } => {
            let profile = Pipeline::profile(&input)
                .with_context(|| format!("Failed to profile {}", input.display()))?;
            print_profile(&profile);
        }
    }
    Ok(())
}

fn print_profile(profile: &DataProfile) {
    println!("Rows: {}", profile.rows);
    println!("Duplicate rows: {}", profile.duplicate_rows);
    println!("Numeric columns: {}", profile.numeric_columns().join(", "));
    println!("{:<24} {:<10} {:>8}", "column", "dtype", "nulls");
    for column in &profile.columns {
        println!(
            "{:<24} {:<10} {:>8}",
            column.name, column.dtype, column.null_count
        );
    }
}

fn print_summary(report: &AnalysisReport) {
    let cleaning = &report.cleaning;
    println!(
        "Rows: {} raw -> {} cleaned ({} duplicates, {} missing or zero)",
        cleaning.raw_rows, cleaning.cleaned_rows, cleaning.duplicate_rows, cleaning.rows_with_missing
    );

    let extremes = &report.profit_extremes;
    println!(
        "Most profit:  {} ({}) {:.0}",
        extremes.most.original_title, extremes.most.release_year, extremes.most.profit
    );
    println!(
        "Least profit: {} ({}) {:.0}",
        extremes.least.original_title, extremes.least.release_year, extremes.least.profit
    );

    println!("\nTop {} by profit:", report.top_n);
    for (rank, movie) in report.top_profit.iter().enumerate() {
        println!("{:>3}. {:<40} {:>16.0}", rank + 1, movie.title, movie.profit);
    }

    println!("\nTop {} directors by popularity:", report.top_n);
    for (rank, director) in report.director_popularity.iter().enumerate() {
        println!(
            "{:>3}. {:<40} {:>10.2}",
            rank + 1,
            director.director,
            director.popularity
        );
    }

    if let Some(genre) = report.genre_frequency.first() {
        println!("\nMost common genre: {} ({} movies)", genre.token, genre.count);
    }
    if let Some(company) = report.production_company_frequency.first() {
        println!(
            "Most prolific company: {} ({} movies)",
            company.token, company.count
        );
    }
}
