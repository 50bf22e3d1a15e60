use std::path::PathBuf;

use philosophers_engine::RuleSet;
use rand::SeedableRng as _;
use rand_pcg::Pcg32;
use tracing::info;

use crate::util;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct GenRulesArg {
    /// Number of rules to generate
    #[arg(long)]
    count: usize,
    /// Output rule file path
    #[arg(long)]
    filename: PathBuf,
}

pub(crate) fn run(arg: &GenRulesArg, seed: u64) -> anyhow::Result<()> {
    let GenRulesArg { count, filename } = arg;
    let mut rng = Pcg32::seed_from_u64(seed);
    let rules = RuleSet::random(&mut rng, *count);
    util::write_rule_file(filename, &rules)?;
    info!(count, path = %filename.display(), "generated random rules");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_gen_rules_is_deterministic_per_seed() {
        let dir = util::test_dir("gen-rules");
        let paths = ["a.txt", "b.txt", "c.txt"].map(|n| dir.join(n));
        for (path, seed) in paths.iter().zip([11, 11, 12]) {
            let arg = GenRulesArg {
                count: 50,
                filename: path.clone(),
            };
            run(&arg, seed).unwrap();
        }
        let [a, b, c] = paths.each_ref().map(|p| fs::read_to_string(p).unwrap());
        assert_eq!(a, b);
        assert_ne!(a, c);

        let rules = util::read_rule_file(&paths[0]).unwrap();
        assert_eq!(rules.len(), 50);
        assert!(rules.iter().all(|r| r.weight == 0.0));
    }

    #[test]
    fn test_gen_zero_rules_writes_empty_file() {
        let path = util::test_dir("gen-rules-empty").join("empty.txt");
        let arg = GenRulesArg {
            count: 0,
            filename: path.clone(),
        };
        run(&arg, 0).unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "");
    }
}
