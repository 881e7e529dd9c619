use std::path::Path;

use anyhow::{bail, Context, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcronymRecord {
    pub acronym: String,
    pub count: i64,
}

/// Parse `ACRONYM<TAB>COUNT` lines. Blank lines are skipped.
pub fn parse_records(text: &str) -> Result<Vec<AcronymRecord>> {
    let mut records = Vec::new();
    for (i, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let mut fields = line.split('\t');
        let acronym = fields.next().unwrap_or_default();
        let Some(count) = fields.next() else {
            bail!("line {}: expected ACRONYM<TAB>COUNT, got {:?}", i + 1, line);
        };
        let count: i64 = count
            .trim()
            .parse()
            .with_context(|| format!("line {}: invalid count {:?}", i + 1, count))?;
        records.push(AcronymRecord {
            acronym: acronym.to_string(),
            count,
        });
    }
    Ok(records)
}

/// Acronyms seen strictly more than `threshold` times, in file order.
pub fn filter_by_threshold(records: Vec<AcronymRecord>, threshold: i64) -> Vec<String> {
    records
        .into_iter()
        .filter(|r| r.count > threshold)
        .map(|r| r.acronym)
        .collect()
}

pub fn load_abbreviations(path: &Path, threshold: i64) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {:?}", path))?;
    let records = parse_records(&text).with_context(|| format!("Failed to parse {:?}", path))?;
    Ok(filter_by_threshold(records, threshold))
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn threshold_is_strict() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "AA\t5\nBB\t1\nCC\t2\n").unwrap();
        let kept = load_abbreviations(file.path(), 2).unwrap();
        assert_eq!(kept, vec!["AA".to_string()]);
    }

    #[test]
    fn file_order_preserved() {
        let records = parse_records("PT\t40\nCA\t12\nMI\t30").unwrap();
        assert_eq!(filter_by_threshold(records, 1), vec!["PT", "CA", "MI"]);
    }

    #[test]
    fn crlf_and_blank_lines() {
        let records = parse_records("AA\t3\r\n\r\nBB\t4\r\n").unwrap();
        assert_eq!(
            records,
            vec![
                AcronymRecord { acronym: "AA".into(), count: 3 },
                AcronymRecord { acronym: "BB".into(), count: 4 },
            ]
        );
    }

    #[test]
    fn missing_count_is_error() {
        let err = parse_records("AA\t3\nBB\n").unwrap_err();
        assert!(err.to_string().contains("line 2"), "{}", err);
    }

    #[test]
    fn negative_count_is_filtered_not_rejected() {
        let records = parse_records("AA\t-3\nBB\t4\n").unwrap();
        assert_eq!(records[0].count, -3);
        assert_eq!(filter_by_threshold(records, 1), vec!["BB"]);
    }

    #[test]
    fn negative_threshold_keeps_zero_counts() {
        let records = parse_records("AA\t0\nBB\t-1\n").unwrap();
        assert_eq!(filter_by_threshold(records, -1), vec!["AA"]);
    }

    #[test]
    fn non_numeric_count_is_error() {
        assert!(parse_records("AA\tmany\n").is_err());
    }

    #[test]
    fn missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_abbreviations(&dir.path().join("nope.txt"), 1).is_err());
    }
}
