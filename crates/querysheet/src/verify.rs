//! Checking snippets against their annotations.

use serde::Serialize;
use tracing::{info, warn};

use crate::catalog::{Section, Snippet};

/// Result of running one snippet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub section: Section,
    pub name: &'static str,
    pub expected: &'static str,
    pub actual: String,
    pub passed: bool,
}

/// Aggregate over a verification run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub reports: Vec<Report>,
}

impl Summary {
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &Report> {
        self.reports.iter().filter(|report| !report.passed)
    }
}

/// Runs a snippet and compares its rendered outcome with the annotation.
pub fn check(snippet: &Snippet) -> Report {
    let actual = snippet.run().to_string();
    let passed = actual == snippet.expected;
    if !passed {
        warn!(
            section = %snippet.section,
            snippet = snippet.name,
            expected = snippet.expected,
            actual = %actual,
            "snippet disagrees with its annotation"
        );
    }
    Report {
        section: snippet.section,
        name: snippet.name,
        expected: snippet.expected,
        actual,
        passed,
    }
}

pub fn verify<'a, I>(snippets: I) -> Summary
where
    I: IntoIterator<Item = &'a Snippet>,
{
    let reports: Vec<Report> = snippets.into_iter().map(check).collect();
    let passed = reports.iter().filter(|report| report.passed).count();
    let summary = Summary {
        total: reports.len(),
        passed,
        failed: reports.len() - passed,
        reports,
    };
    info!(
        total = summary.total,
        passed = summary.passed,
        failed = summary.failed,
        "verification finished"
    );
    summary
}
