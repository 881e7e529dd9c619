use std::sync::LazyLock;

use regex::Regex;

use super::Section;

static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\n\n) *(={2,}) (.*?) (={2,}) *\n").unwrap());

/// Page extract split into the lead text and the heading tree.
#[derive(Debug, Default)]
pub struct Outline {
    pub summary: String,
    pub sections: Vec<Section>,
}

/// Build the section tree from a plain-text extract with wiki-style headings
/// (`== Title ==`). Level is the count of `=` minus one. A heading must start
/// the extract or follow a blank line.
pub fn build_outline(extract: &str) -> Outline {
    let mut outline = Outline::default();
    // Open headings, innermost last.
    let mut stack: Vec<(usize, Section)> = Vec::new();
    let mut prev_end: Option<usize> = None;

    for caps in HEADING_RE.captures_iter(extract) {
        let whole = caps.get(0).unwrap();
        match prev_end {
            None => outline.summary = extract[..whole.start()].trim().to_string(),
            Some(end) => {
                if let Some((_, open)) = stack.last_mut() {
                    open.text = extract[end..whole.start()].trim().to_string();
                }
            }
        }

        let level = caps[1].len() - 1;
        while stack.last().is_some_and(|(l, _)| *l >= level) {
            close_top(&mut stack, &mut outline.sections);
        }
        stack.push((level, Section::new(caps[2].trim(), "")));
        prev_end = Some(whole.end());
    }

    match prev_end {
        None => outline.summary = extract.trim().to_string(),
        Some(end) => {
            if let Some((_, open)) = stack.last_mut() {
                open.text = extract[end..].trim().to_string();
            }
        }
    }
    while !stack.is_empty() {
        close_top(&mut stack, &mut outline.sections);
    }

    outline
}

fn close_top(stack: &mut Vec<(usize, Section)>, roots: &mut Vec<Section>) {
    if let Some((_, section)) = stack.pop() {
        match stack.last_mut() {
            Some((_, parent)) => parent.children.push(section),
            None => roots.push(section),
        }
    }
}

// ── Tests ──
