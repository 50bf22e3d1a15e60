use std::path::{Path, PathBuf};

use chrono::Utc;
use philosophers_agent::{
    BatchSummary, BoundedFeedbackAdapter, FeedbackAdapter, PLAYER_ONE_NAME, PLAYER_TWO_NAME,
    Philosopher, run_batch,
};
use tracing::{info, warn};

use crate::{
    schema::run_report::{AgentReport, RunReport},
    util,
};

/// Weight bound used by `--adapter bounded`.
const WEIGHT_BOUND: f64 = 1000.0;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr, derive_more::Display)]
pub enum AdapterKind {
    /// Unbounded +1 / -1 / -100 feedback
    #[default]
    Default,
    /// Same deltas, weights clamped to ±`WEIGHT_BOUND`
    Bounded,
}

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct RunArg {
    /// Number of games to play
    #[arg(long)]
    pub(super) count: usize,
    /// Rule file for player one
    #[arg(long)]
    pub(super) rule_file1: PathBuf,
    /// Rule file for player two
    #[arg(long)]
    pub(super) rule_file2: PathBuf,
    /// Weight feedback strategy
    #[arg(long, default_value = "default")]
    pub(super) adapter: AdapterKind,
    /// Write a JSON run report to this path
    #[arg(long)]
    pub(super) summary: Option<PathBuf>,
}

pub(crate) fn run(arg: &RunArg, seed: u64) -> anyhow::Result<()> {
    let RunArg {
        count,
        rule_file1,
        rule_file2,
        adapter,
        summary,
    } = arg;

    let rules1 = util::read_rule_file(rule_file1)?;
    let rules2 = util::read_rule_file(rule_file2)?;
    for (path, rules) in [(rule_file1, &rules1), (rule_file2, &rules2)] {
        if rules.is_empty() {
            warn!(path = %path.display(), "rule file is empty, agent will never move");
        }
    }

    let (batch, agents) = match adapter {
        AdapterKind::Default => play_and_save(
            *count,
            Philosopher::new(PLAYER_ONE_NAME, rules1),
            Philosopher::new(PLAYER_TWO_NAME, rules2),
            [rule_file1, rule_file2],
        )?,
        AdapterKind::Bounded => {
            let bounded = BoundedFeedbackAdapter::symmetric(WEIGHT_BOUND);
            play_and_save(
                *count,
                Philosopher::with_adapter(PLAYER_ONE_NAME, rules1, bounded),
                Philosopher::with_adapter(PLAYER_TWO_NAME, rules2, bounded),
                [rule_file1, rule_file2],
            )?
        }
    };

    info!(
        games = batch.games,
        player_one_wins = batch.player_one_wins,
        player_two_wins = batch.player_two_wins,
        draws = batch.draws,
        "batch finished"
    );

    if let Some(path) = summary {
        let report = RunReport {
            seed,
            adapter: adapter.to_string(),
            summary: batch,
            agents,
            finished_at: Utc::now(),
        };
        util::save_json(&report, path)?;
        info!(path = %path.display(), "saved run report");
    }

    Ok(())
}

/// Plays the batch, then writes each agent's adapted rules next to its input file.
fn play_and_save<A>(
    count: usize,
    mut player_one: Philosopher<A>,
    mut player_two: Philosopher<A>,
    rule_files: [&PathBuf; 2],
) -> anyhow::Result<(BatchSummary, [AgentReport; 2])>
where
    A: FeedbackAdapter,
{
    info!(
        count,
        player_one = player_one.name(),
        player_two = player_two.name(),
        adapter = ?player_one.adapter(),
        "playing games"
    );
    let batch = run_batch(count, &mut player_one, &mut player_two);

    let [file1, file2] = rule_files;
    Ok((
        batch,
        [save_agent(&player_one, file1)?, save_agent(&player_two, file2)?],
    ))
}

fn save_agent<A>(agent: &Philosopher<A>, rule_file: &Path) -> anyhow::Result<AgentReport>
where
    A: FeedbackAdapter,
{
    let output_file = util::adapted_rule_path(rule_file);
    util::write_rule_file(&output_file, agent.rules())?;
    let report = AgentReport::new(agent, rule_file.to_owned(), output_file);
    if let Some(weights) = &report.weights {
        info!(
            agent = agent.name(),
            rules = report.rule_count,
            min = weights.min,
            max = weights.max,
            mean = weights.mean,
            "adapted weights"
        );
    }
    Ok(report)
}
