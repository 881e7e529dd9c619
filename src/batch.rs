use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use crate::error::ScrapeError;
use crate::scraper::{format_expansions, AcronymScraper};
use crate::wiki::PageLookup;

pub type ExpansionResult = BTreeMap<String, Vec<String>>;

/// What happened to one acronym.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Expanded(Vec<String>),
    NoMedicalSection,
    NotFound,
    Failed(String),
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub expanded: usize,
    pub no_medical: usize,
    pub not_found: usize,
    pub failed: usize,
}

impl BatchSummary {
    fn record(&mut self, outcome: &LookupOutcome) {
        self.total += 1;
        match outcome {
            LookupOutcome::Expanded(_) => self.expanded += 1,
            LookupOutcome::NoMedicalSection => self.no_medical += 1,
            LookupOutcome::NotFound => self.not_found += 1,
            LookupOutcome::Failed(_) => self.failed += 1,
        }
    }
}

/// Load the acronym's disambiguation page and extract its medical lines.
pub fn lookup_acronym<L: PageLookup + ?Sized>(
    scraper: &mut AcronymScraper<'_, L>,
    acronym: &str,
) -> LookupOutcome {
    let loaded = scraper.load_page(acronym).map(|_| ());
    let result = loaded.and_then(|()| scraper.medical_expansions());
    match result {
        Ok(Some(lines)) => LookupOutcome::Expanded(format_expansions(lines)),
        Ok(None) => LookupOutcome::NoMedicalSection,
        Err(ScrapeError::PageNotFound(_)) => LookupOutcome::NotFound,
        Err(e) => LookupOutcome::Failed(e.to_string()),
    }
}

/// Look up every acronym in order. Per-acronym failures are skipped.
pub fn run_batch<L: PageLookup + ?Sized>(
    lookup: &L,
    acronyms: &[String],
) -> (ExpansionResult, BatchSummary) {
    let mut scraper = AcronymScraper::new(lookup);
    let mut expansions = ExpansionResult::new();
    let mut summary = BatchSummary::default();

    let pb = ProgressBar::new(acronyms.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} ({per_sec}, eta {eta}) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> "),
    );

    for acronym in acronyms {
        pb.set_message(acronym.clone());
        let outcome = lookup_acronym(&mut scraper, acronym);
        summary.record(&outcome);
        match outcome {
            LookupOutcome::Expanded(lines) => {
                expansions.insert(acronym.clone(), lines);
            }
            LookupOutcome::NoMedicalSection => debug!("{}: no medical section", acronym),
            LookupOutcome::NotFound => debug!("{}: no disambiguation page", acronym),
            LookupOutcome::Failed(e) => debug!("{}: skipped after error: {}", acronym, e),
        }
        pb.inc(1);
    }

    pb.finish_and_clear();
    info!(
        "Looked up {} acronyms ({} expanded, {} without medical section, {} not found, {} errors)",
        summary.total, summary.expanded, summary.no_medical, summary.not_found, summary.failed
    );
    (expansions, summary)
}

pub fn write_expansions(path: &Path, expansions: &ExpansionResult) -> Result<()> {
    let json = serde_json::to_string(expansions)?;
    std::fs::write(path, json).with_context(|| format!("Failed to write {:?}", path))?;
    info!("Wrote {} acronyms to {:?}", expansions.len(), path);
    Ok(())
}

// ── Tests ──
