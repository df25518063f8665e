//! Run a TOML corpus of `input → expected` cases through the engine.

use std::collections::BTreeMap;
use std::fs;

use serde::{Deserialize, Serialize};

use tamil_core::convert::convert_text;
use tamil_core::mapping::MappingTable;

#[derive(Debug, Deserialize)]
pub struct AccuracyCorpus {
    pub cases: Vec<AccuracyCase>,
}

#[derive(Debug, Deserialize)]
pub struct AccuracyCase {
    pub input: String,
    pub expected: String,
    pub category: String,
    #[serde(default)]
    pub skip: bool,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AccuracyResult {
    pub input: String,
    pub expected: String,
    pub actual: String,
    pub status: AccuracyStatus,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccuracyStatus {
    Pass,
    Fail,
    Skip,
}

#[derive(Debug, Serialize)]
pub struct AccuracySummary {
    pub total: usize,
    pub pass: usize,
    pub fail: usize,
    pub skip: usize,
    pub pass_rate: String,
}

#[derive(Debug, Serialize)]
pub struct AccuracyReport {
    pub results: Vec<AccuracyResult>,
    pub summary: AccuracySummary,
}

pub fn parse_corpus(content: &str) -> Result<AccuracyCorpus, toml::de::Error> {
    toml::from_str(content)
}

/// Convert every case (skipped ones excluded) and tally the outcome.
pub fn run_corpus(table: &MappingTable, cases: &[&AccuracyCase]) -> AccuracyReport {
    let results: Vec<AccuracyResult> = cases
        .iter()
        .map(|case| {
            let (actual, status) = if case.skip {
                (String::new(), AccuracyStatus::Skip)
            } else {
                let actual = convert_text(table, &case.input, true).text;
                let status = if actual == case.expected {
                    AccuracyStatus::Pass
                } else {
                    AccuracyStatus::Fail
                };
                (actual, status)
            };
            AccuracyResult {
                input: case.input.clone(),
                expected: case.expected.clone(),
                actual,
                status,
                category: case.category.clone(),
                note: case.note.clone(),
            }
        })
        .collect();

    let count = |s: AccuracyStatus| results.iter().filter(|r| r.status == s).count();
    let (pass, fail, skip) = (
        count(AccuracyStatus::Pass),
        count(AccuracyStatus::Fail),
        count(AccuracyStatus::Skip),
    );
    let tested = results.len() - skip;
    let rate = if tested > 0 {
        pass as f64 / tested as f64 * 100.0
    } else {
        0.0
    };
    let summary = AccuracySummary {
        total: results.len(),
        pass,
        fail,
        skip,
        pass_rate: format!("{:.1}%", rate),
    };
    AccuracyReport { results, summary }
}

pub fn accuracy_cmd(
    table: &MappingTable,
    corpus_file: &str,
    category: Option<&str>,
    verbose: bool,
    json: bool,
) {
    let content = die!(
        fs::read_to_string(corpus_file),
        "Failed to read corpus file {corpus_file}: {}"
    );
    let corpus = die!(parse_corpus(&content), "Failed to parse corpus TOML: {}");

    let cases: Vec<&AccuracyCase> = corpus
        .cases
        .iter()
        .filter(|c| category.map_or(true, |cat| c.category == cat))
        .collect();
    if cases.is_empty() {
        eprintln!("No cases match the given filters");
        std::process::exit(1);
    }

    let report = run_corpus(table, &cases);

    if json {
        println!(
            "{}",
            die!(
                serde_json::to_string_pretty(&report),
                "JSON serialization failed: {}"
            )
        );
    } else {
        print!("{}", format_report(&report, verbose));
    }

    if report.summary.fail > 0 {
        std::process::exit(1);
    }
}

/// Text report grouped by category. Passing cases only appear with `verbose`.
pub fn format_report(report: &AccuracyReport, verbose: bool) -> String {
    let mut grouped: BTreeMap<&str, Vec<&AccuracyResult>> = BTreeMap::new();
    for r in &report.results {
        grouped.entry(&r.category).or_default().push(r);
    }

    let mut out = String::new();
    for (cat, group) in &grouped {
        out.push_str(&format!("\n=== {} ({} cases) ===\n", cat, group.len()));
        for r in group {
            match r.status {
                AccuracyStatus::Pass if verbose => {
                    out.push_str(&format!("  \u{2713} {} \u{2192} {}\n", r.input, r.expected));
                }
                AccuracyStatus::Pass => {}
                AccuracyStatus::Fail => {
                    out.push_str(&format!(
                        "  \u{2717} {} \u{2192} {} (got: {})\n",
                        r.input, r.expected, r.actual
                    ));
                }
                AccuracyStatus::Skip => {
                    let reason = r.note.as_deref().unwrap_or("known failure");
                    out.push_str(&format!("  - {} [skip: {}]\n", r.input, reason));
                }
            }
        }
    }

    let s = &report.summary;
    out.push_str("\n=== Summary ===\n");
    out.push_str(&format!("  Total:     {}\n", s.total));
    out.push_str(&format!("  Pass:      {:>3}\n", s.pass));
    out.push_str(&format!("  Fail:      {:>3}\n", s.fail));
    out.push_str(&format!("  Skip:      {:>3}\n", s.skip));
    out.push_str(&format!(
        "  Pass rate: {} ({}/{})\n",
        s.pass_rate,
        s.pass,
        s.total - s.skip
    ));
    out
}
