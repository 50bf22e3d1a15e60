use std::path::PathBuf;

use tracing::{info, warn};

use crate::util;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct ProcessRulesArg {
    /// Rule file to check
    #[arg(long)]
    filename: PathBuf,
}

/// Loads and validates a rule file without modifying it.
pub(crate) fn run(arg: &ProcessRulesArg) -> anyhow::Result<()> {
    let ProcessRulesArg { filename } = arg;
    let rules = util::read_rule_file(filename)?;
    match rules.weight_stats() {
        Some(stats) => info!(
            path = %filename.display(),
            rules = stats.count,
            min = stats.min,
            max = stats.max,
            mean = stats.mean,
            "rule file weights"
        ),
        None => warn!(path = %filename.display(), "rule file is empty"),
    }
    Ok(())
}
