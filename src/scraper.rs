use std::collections::VecDeque;

use tracing::debug;

use crate::error::{Result, ScrapeError};
use crate::wiki::{Page, PageLookup, Section};

const MEDICAL_TERM_CUES: &[&str] = &[
    "medical",
    "medicine",
    "biological",
    "biology",
    "scientific",
    "science",
];
const DISAMBIGUATION_PAGE_SUFFIX: &str = "_(disambiguation)";

/// True if the title contains any medical cue, case-insensitively.
pub fn is_medical_section(title: &str) -> bool {
    let lower = title.to_lowercase();
    MEDICAL_TERM_CUES.iter().any(|cue| lower.contains(cue))
}

/// Walk the outline and return the lines of the first medical leaf section.
///
/// Sections are taken from the back of the queue; the children of a medical
/// section are pushed onto the front, left to right. Non-medical sections are
/// dropped together with their subtrees.
pub fn find_medical_expansions(sections: &[Section]) -> Option<Vec<String>> {
    let mut to_scan: VecDeque<&Section> = sections.iter().collect();
    while let Some(section) = to_scan.pop_back() {
        if !is_medical_section(&section.title) {
            continue;
        }
        if section.children.is_empty() {
            debug!("Medical leaf section: {}", section.title);
            return Some(section.text.split('\n').map(str::to_string).collect());
        }
        for child in &section.children {
            to_scan.push_front(child);
        }
    }
    None
}

/// Hook for splitting expansions from their definitions. Currently returns
/// the lines untouched.
pub fn format_expansions(expansions: Vec<String>) -> Vec<String> {
    expansions
}

/// Render the outline one section per line, `*` repeated per nesting level.
pub fn render_sections(sections: &[Section]) -> String {
    let mut out = String::new();
    render_into(sections, 0, &mut out);
    out
}

fn render_into(sections: &[Section], level: usize, out: &mut String) {
    for section in sections {
        let preview: String = section.text.chars().take(40).collect();
        out.push_str(&format!(
            "{}: {} - {}\n",
            "*".repeat(level + 1),
            section.title,
            preview
        ));
        render_into(&section.children, level + 1, out);
    }
}

/// Holds the currently loaded disambiguation page for one lookup handle.
pub struct AcronymScraper<'a, L: PageLookup + ?Sized> {
    lookup: &'a L,
    page: Option<Page>,
}

impl<'a, L: PageLookup + ?Sized> AcronymScraper<'a, L> {
    pub fn new(lookup: &'a L) -> Self {
        AcronymScraper { lookup, page: None }
    }

    /// Load `<query>_(disambiguation)`. Fails with `PageNotFound` if it does not exist.
    pub fn load_page(&mut self, query: &str) -> Result<&Page> {
        let title = format!("{}{}", query, DISAMBIGUATION_PAGE_SUFFIX);
        let page = self.lookup.page(&title)?;
        let exists = page.exists();
        // Keep the page even when missing, as the lookup returned it.
        let page = self.page.insert(page);
        if !exists {
            return Err(ScrapeError::PageNotFound(query.to_string()));
        }
        Ok(page)
    }

    pub fn medical_expansions(&self) -> Result<Option<Vec<String>>> {
        let page = self.page.as_ref().ok_or(ScrapeError::UninitializedState)?;
        Ok(find_medical_expansions(&page.sections))
    }
}

// ── Tests ──
