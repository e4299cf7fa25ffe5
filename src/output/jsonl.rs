#![forbid(unsafe_code)]

//! JSONL output formatter for machine-readable output
//!
//! Outputs one JSON object per line:
//! 1. One step record per reduction, in order (only with steps enabled)
//! 2. One result record

use crate::euclid::Reduction;
use crate::output::GcdOutcome;
use serde::Serialize;

/// JSONL output formatter
///
/// Formats a computed outcome as JSON Lines (one JSON object per line).
pub struct JsonlFormatter {
    show_steps: bool,
}

impl JsonlFormatter {
    /// Creates a new JsonlFormatter
    pub fn new(show_steps: bool) -> Self {
        JsonlFormatter { show_steps }
    }

    /// Format the outcome as JSONL
    pub fn format(&self, outcome: &GcdOutcome) -> String {
        let mut output = String::new();

        if self.show_steps {
            for (index, step) in outcome.steps.iter().enumerate() {
                let record = StepRecord {
                    record_type: "step",
                    index,
                    reduction: *step,
                };
                if let Ok(json) = serde_json::to_string(&record) {
                    output.push_str(&json);
                    output.push('\n');
                }
            }
        }

        let result = ResultRecord {
            record_type: "result",
            a: outcome.a,
            b: outcome.b,
            gcd: outcome.gcd,
            reductions: outcome.steps.len(),
        };
        if let Ok(json) = serde_json::to_string(&result) {
            output.push_str(&json);
            output.push('\n');
        }

        output
    }
}

impl Default for JsonlFormatter {
    fn default() -> Self {
        Self::new(false)
    }
}

/// Step record for JSONL output
#[derive(Debug, Serialize)]
struct StepRecord {
    #[serde(rename = "type")]
    record_type: &'static str,
    index: usize,
    #[serde(flatten)]
    reduction: Reduction,
}

/// Result record for JSONL output
#[derive(Debug, Serialize)]
struct ResultRecord {
    #[serde(rename = "type")]
    record_type: &'static str,
    a: i32,
    b: i32,
    gcd: i32,
    reductions: usize,
}
