/// Result-log discovery
///
/// This module handles:
/// - Scanning the results directory for the two result-log filename patterns
/// - Deriving each file's configuration vector from its name
/// - Re-encoding a vector into the filename it came from
use crate::matrix;
use crate::types::{ConfigVector, LogKind};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// All result logs end with this suffix; the matrix name sits between the
/// kind prefix and it.
pub const LOG_SUFFIX: &str = ".log.json";

/// Filename prefix for one log kind.
pub fn file_prefix(kind: LogKind) -> &'static str {
    match kind {
        LogKind::Build => "build-results-",
        LogKind::Test => "test-results-",
    }
}

/// A result log found on disk, with the matrix cell its name encodes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFile {
    pub path: PathBuf,
    pub kind: LogKind,
    pub config: ConfigVector,
}

/// Scan a directory for result logs.
///
/// Files that match neither pattern are ignored. A missing or unreadable
/// directory yields no files, matching glob semantics: an empty run is a
/// successful run with nothing to report.
pub fn find_log_files(dir: &Path) -> Result<Vec<LogFile>, String> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            debug!("Cannot read {}: {}", dir.display(), e);
            return Ok(Vec::new());
        }
    };

    let mut found = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| format!("Failed to scan {}: {}", dir.display(), e))?;
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        if let Some((kind, config)) = match_log_name(name)? {
            found.push(LogFile { path: entry.path(), kind, config });
        }
    }

    // Directory iteration order is platform-defined; sort for stable output.
    found.sort_by(|a, b| a.path.cmp(&b.path));
    debug!("Matched {} result logs in {}", found.len(), dir.display());
    Ok(found)
}

/// Match one filename against both log patterns.
fn match_log_name(name: &str) -> Result<Option<(LogKind, ConfigVector)>, String> {
    for kind in [LogKind::Build, LogKind::Test] {
        if let Some(matrix_name) = name
            .strip_prefix(file_prefix(kind))
            .and_then(|rest| rest.strip_suffix(LOG_SUFFIX))
        {
            let config = config_from_matrix_name(kind, matrix_name)
                .map_err(|e| format!("Result log '{}': {}", name, e))?;
            return Ok(Some((kind, config)));
        }
    }
    Ok(None)
}

/// Derive the configuration vector from the matrix-name part of a filename.
///
/// Components are split on `-`; redundant `latest` components (as in
/// `windows-latest`) are dropped. The remaining components must line up with
/// the axis schema for the kind, or the filename is rejected.
pub fn config_from_matrix_name(kind: LogKind, matrix_name: &str) -> Result<ConfigVector, String> {
    let values: Vec<String> = matrix_name
        .split('-')
        .filter(|component| !component.is_empty() && *component != "latest")
        .map(str::to_string)
        .collect();

    let axes = matrix::axes(kind);
    if values.len() != axes.len() {
        let names: Vec<&str> = axes.iter().map(|axis| axis.name).collect();
        return Err(format!(
            "matrix name '{}' has {} component(s), expected {} ({})",
            matrix_name,
            values.len(),
            axes.len(),
            names.join(", ")
        ));
    }
    Ok(ConfigVector::new(values))
}

/// The filename a configuration vector came from.
pub fn file_name_for(kind: LogKind, config: &ConfigVector) -> String {
    format!("{}{}{}", file_prefix(kind), config.values.join("-"), LOG_SUFFIX)
}
