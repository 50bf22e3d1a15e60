use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing::info;

use self::{gen_rules::GenRulesArg, process_rules::ProcessRulesArg, run::RunArg};

mod gen_rules;
mod process_rules;
mod run;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Seed for random rule generation [default: derived from the current time]
    #[arg(long, global = true)]
    seed: Option<u64>,
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play games between two rule files and write back the adapted weights
    Run(#[clap(flatten)] RunArg),
    /// Generate a file of random rules
    GenRules(#[clap(flatten)] GenRulesArg),
    /// Validate a rule file and report its weight statistics
    ProcessRules(#[clap(flatten)] ProcessRulesArg),
}

fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| {
        let now = Utc::now();
        now.timestamp_nanos_opt()
            .unwrap_or_else(|| now.timestamp())
            .unsigned_abs()
    })
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    let seed = resolve_seed(args.seed);
    info!(seed, "starting");
    match args.mode {
        Mode::Run(arg) => run::run(&arg, seed)?,
        Mode::GenRules(arg) => gen_rules::run(&arg, seed)?,
        Mode::ProcessRules(arg) => process_rules::run(&arg)?,
    }
    Ok(())
}
