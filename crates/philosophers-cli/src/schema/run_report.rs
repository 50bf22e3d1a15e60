use std::path::PathBuf;

use chrono::{DateTime, Utc};
use philosophers_agent::{BatchSummary, FeedbackAdapter, Philosopher};
use serde::Serialize;

/// JSON report written by `run --summary`.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub seed: u64,
    pub adapter: String,
    #[serde(flatten)]
    pub summary: BatchSummary,
    pub agents: [AgentReport; 2],
    pub finished_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AgentReport {
    pub name: String,
    pub rule_file: PathBuf,
    pub output_file: PathBuf,
    pub rule_count: usize,
    /// `None` for an empty rule file.
    pub weights: Option<WeightReport>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct WeightReport {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl AgentReport {
    pub fn new<A>(agent: &Philosopher<A>, rule_file: PathBuf, output_file: PathBuf) -> Self
    where
        A: FeedbackAdapter,
    {
        let rules = agent.rules();
        Self {
            name: agent.name().to_owned(),
            rule_file,
            output_file,
            rule_count: rules.len(),
            weights: rules.weight_stats().map(|s| WeightReport {
                min: s.min,
                max: s.max,
                mean: s.mean,
            }),
        }
    }
}
