use std::{
    ffi::OsString,
    fs::File,
    io::{BufReader, BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context;
use philosophers_engine::RuleSet;
use tracing::info;

/// Suffix appended to a rule file's name when writing its adapted weights.
pub const ADAPTED_RULE_SUFFIX: &str = ".new";

/// Returns `path` with [`ADAPTED_RULE_SUFFIX`] appended to its file name.
pub fn adapted_rule_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(ADAPTED_RULE_SUFFIX);
    PathBuf::from(name)
}

/// Reads and parses a rule file.
///
/// # Errors
///
/// Returns error if the file cannot be opened or any line is malformed
pub fn read_rule_file(path: &Path) -> anyhow::Result<RuleSet> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open rule file: {}", path.display()))?;
    let rules = RuleSet::read_from(BufReader::new(file))
        .with_context(|| format!("Failed to load rule file: {}", path.display()))?;
    info!(path = %path.display(), rules = rules.len(), "loaded rule file");
    Ok(rules)
}

/// Writes a rule set, replacing any existing file at `path`.
///
/// # Errors
///
/// Returns error if the file cannot be created or written
pub fn write_rule_file(path: &Path, rules: &RuleSet) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create rule file: {}", path.display()))?;
    rules
        .write_to(BufWriter::new(file))
        .with_context(|| format!("Failed to write rule file: {}", path.display()))?;
    info!(path = %path.display(), rules = rules.len(), "wrote rule file");
    Ok(())
}

/// Writes `value` as pretty-printed JSON followed by a newline.
///
/// # Errors
///
/// Returns error if the file cannot be created or written
pub fn save_json<T>(value: &T, path: &Path) -> anyhow::Result<()>
where
    T: serde::Serialize,
{
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)
        .with_context(|| format!("Failed to write JSON to {}", path.display()))?;
    writeln!(writer)
        .and_then(|()| writer.flush())
        .with_context(|| format!("Failed to flush output to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn test_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("philosophers-{}-{name}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}
