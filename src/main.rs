mod acronyms;
mod batch;
mod error;
mod scraper;
mod settings;
mod wiki;

use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};
use tracing::info;

use crate::scraper::{format_expansions, render_sections, AcronymScraper};
use crate::settings::Settings;
use crate::wiki::client::WikiClient;

#[derive(Parser)]
#[command(
    name = "wiki_acronyms",
    about = "Medical acronym expansions from Wikipedia disambiguation pages"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up every acronym above the count threshold and write a JSON file
    Batch {
        /// Tab-separated ACRONYM<TAB>COUNT file
        #[arg(short, long, default_value = "abbreviation_counts.txt")]
        input: PathBuf,
        /// Keep acronyms seen more than this many times
        #[arg(short, long, default_value = "1", allow_negative_numbers = true)]
        threshold: i64,
        /// Output JSON path
        #[arg(short, long, default_value = "abbreviations.json")]
        output: PathBuf,
    },
    /// Print the medical expansions for one acronym
    Lookup { acronym: String },
    /// Print the section outline of an acronym's disambiguation page
    Sections { acronym: String },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let settings = Settings::load()?;
    info!(api_url = %settings.api_url, "Using MediaWiki endpoint");
    let client = WikiClient::new(&settings)?;

    match cli.command {
        Commands::Batch {
            input,
            threshold,
            output,
        } => {
            let abbreviations = acronyms::load_abbreviations(&input, threshold)?;
            println!(
                "Looking up {} acronyms with count > {}...",
                abbreviations.len(),
                threshold
            );
            let (expansions, summary) = batch::run_batch(&client, &abbreviations);
            batch::write_expansions(&output, &expansions)?;
            println!(
                "Done: {} of {} acronyms expanded -> {}",
                summary.expanded,
                summary.total,
                output.display()
            );
        }
        Commands::Lookup { acronym } => {
            let mut scraper = AcronymScraper::new(&client);
            scraper.load_page(&acronym)?;
            match scraper.medical_expansions()? {
                Some(lines) => {
                    for line in format_expansions(lines) {
                        println!("{}", line);
                    }
                }
                None => println!("No medical section found for {}.", acronym),
            }
        }
        Commands::Sections { acronym } => {
            let mut scraper = AcronymScraper::new(&client);
            let page = scraper.load_page(&acronym)?;
            println!("{}", page.title);
            if !page.summary.is_empty() {
                println!("{}", page.summary);
            }
            print!("{}", render_sections(&page.sections));
        }
    }

    info!("Finished in {:.1}s", t0.elapsed().as_secs_f64());
    Ok(())
}
