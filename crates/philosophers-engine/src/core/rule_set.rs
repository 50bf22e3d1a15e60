use std::io::{self, BufRead, Write};

use rand::Rng;

use super::rule::{ParseRuleError, Rule};

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ReadRuleSetError {
    #[display("failed to read rule file: {_0}")]
    Io(io::Error),
    #[display("malformed rule at line {line}: {source}")]
    Parse { line: usize, source: ParseRuleError },
}

impl From<io::Error> for ReadRuleSetError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// An ordered list of rules.
///
/// Order is the agent's priority: the first matching rule wins. The list is
/// never sorted or reordered; it is written back in the order it was read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

/// Summary of the weights in a [`RuleSet`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightStats {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl RuleSet {
    #[must_use]
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Generates `count` uniformly random rules, all with weight `0.0`.
    pub fn random<R>(rng: &mut R, count: usize) -> Self
    where
        R: Rng + ?Sized,
    {
        let rules = (0..count).map(|_| rng.random()).collect();
        Self { rules }
    }

    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn rules_mut(&mut self) -> &mut [Rule] {
        &mut self.rules
    }

    #[must_use]
    pub fn into_rules(self) -> Vec<Rule> {
        self.rules
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> + '_ {
        self.rules.iter()
    }

    /// Parses one rule per line.
    ///
    /// The first malformed line aborts the whole load. A trailing `\r` is
    /// stripped from each line.
    pub fn read_from<R>(reader: R) -> Result<Self, ReadRuleSetError>
    where
        R: BufRead,
    {
        let mut rules = vec![];
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.strip_suffix('\r').unwrap_or(&line);
            let rule = line
                .parse()
                .map_err(|source| ReadRuleSetError::Parse { line: i + 1, source })?;
            rules.push(rule);
        }
        Ok(Self { rules })
    }

    /// Writes one line per rule, each terminated by `\n`.
    pub fn write_to<W>(&self, mut writer: W) -> io::Result<()>
    where
        W: Write,
    {
        for rule in &self.rules {
            writeln!(writer, "{rule}")?;
        }
        writer.flush()
    }

    /// Returns `None` for an empty rule set.
    #[must_use]
    pub fn weight_stats(&self) -> Option<WeightStats> {
        let first = self.rules.first()?.weight;
        let (min, max, sum) = self.rules.iter().fold((first, first, 0.0), |(min, max, sum), r| {
            (f64::min(min, r.weight), f64::max(max, r.weight), sum + r.weight)
        });
        #[expect(clippy::cast_precision_loss)]
        let mean = sum / self.rules.len() as f64;
        Some(WeightStats {
            count: self.rules.len(),
            min,
            max,
            mean,
        })
    }
}

impl From<Vec<Rule>> for RuleSet {
    fn from(rules: Vec<Rule>) -> Self {
        Self::new(rules)
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
