//! Case configuration: which restart dumps to load and how.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use wt_grid::{GridDescription, GridSet};

use crate::error::{AppError, AppResult};

fn yes() -> bool {
    true
}

/// Switches controlling how much of each well is reconstructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadOptions {
    /// When false every well is loaded as a normal well.
    #[serde(default = "yes")]
    pub load_segments: bool,
    #[serde(default = "yes")]
    pub load_branches: bool,
    /// Abort a report on the first inconsistent well instead of skipping it.
    #[serde(default = "yes")]
    pub strict: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            load_segments: true,
            load_branches: true,
            strict: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseConfig {
    pub name: String,
    /// Restart report dumps (JSON), relative to the config file.
    pub reports: Vec<PathBuf>,
    /// Grid description file (JSON or YAML list of grids).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid: Option<PathBuf>,
    #[serde(default)]
    pub options: LoadOptions,
}

impl CaseConfig {
    /// Rebase relative paths onto `dir`.
    pub fn resolve_paths(&mut self, dir: &Path) {
        for report in &mut self.reports {
            if report.is_relative() {
                *report = dir.join(&*report);
            }
        }
        if let Some(grid) = &mut self.grid
            && grid.is_relative()
        {
            *grid = dir.join(&*grid);
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

fn read(what: &'static str, path: &Path) -> AppResult<String> {
    std::fs::read_to_string(path).map_err(|source| AppError::FileRead {
        what,
        path: path.to_path_buf(),
        source,
    })
}

/// Parse a case config from YAML text.
pub fn parse_case(text: &str) -> AppResult<CaseConfig> {
    serde_yaml::from_str(text)
        .map_err(|e| AppError::Config(format!("Failed to parse case YAML: {}", e)))
}

/// Load and validate a case file. JSON is accepted by extension.
pub fn load_case(path: &Path) -> AppResult<CaseConfig> {
    let content = read("case", path)?;
    let mut config = if is_json(path) {
        serde_json::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse case JSON: {}", e)))?
    } else {
        parse_case(&content)?
    };
    validate_case(&config)?;
    if let Some(dir) = path.parent() {
        config.resolve_paths(dir);
    }
    Ok(config)
}

pub fn validate_case(config: &CaseConfig) -> AppResult<()> {
    if config.name.trim().is_empty() {
        return Err(AppError::Validation("Case name must not be empty".to_string()));
    }
    if config.reports.is_empty() {
        return Err(AppError::Validation(format!(
            "Case '{}' must list at least one restart report",
            config.name
        )));
    }
    let mut seen = HashSet::new();
    for report in &config.reports {
        if !seen.insert(report) {
            return Err(AppError::Validation(format!(
                "Report {} listed twice",
                report.display()
            )));
        }
    }
    Ok(())
}

/// Load a grid description file into a grid set.
pub fn load_grids(path: &Path) -> AppResult<GridSet> {
    let content = read("grid", path)?;
    let descriptions: Vec<GridDescription> = if is_json(path) {
        serde_json::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse grid JSON: {}", e)))?
    } else {
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse grid YAML: {}", e)))?
    };
    Ok(GridSet::from_descriptions(&descriptions)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_default_to_full_strict_load() {
        let config = parse_case("name: demo\nreports: [r1.json, r2.json]\n").unwrap();
        assert_eq!(config.options, LoadOptions::default());
        assert!(config.grid.is_none());
        validate_case(&config).unwrap();
    }

    #[test]
    fn partial_options_keep_other_defaults() {
        let config = parse_case(
            "name: demo\nreports: [r1.json]\ngrid: grid.yaml\noptions:\n  strict: false\n",
        )
        .unwrap();
        assert!(!config.options.strict);
        assert!(config.options.load_segments);
        assert!(config.options.load_branches);
        assert_eq!(config.grid, Some(PathBuf::from("grid.yaml")));
    }

    #[test]
    fn rejects_empty_and_duplicate_report_lists() {
        let empty = parse_case("name: demo\nreports: []\n").unwrap();
        assert!(matches!(validate_case(&empty), Err(AppError::Validation(_))));

        let dup = parse_case("name: demo\nreports: [a.json, a.json]\n").unwrap();
        assert!(matches!(validate_case(&dup), Err(AppError::Validation(_))));
    }

    #[test]
    fn relative_paths_follow_the_case_file() {
        let mut config = parse_case("name: demo\nreports: [r1.json, /abs/r2.json]\ngrid: g.yaml\n")
            .unwrap();
        config.resolve_paths(Path::new("/cases/demo"));
        assert_eq!(config.reports[0], PathBuf::from("/cases/demo/r1.json"));
        assert_eq!(config.reports[1], PathBuf::from("/abs/r2.json"));
        assert_eq!(config.grid, Some(PathBuf::from("/cases/demo/g.yaml")));
    }

    #[test]
    fn malformed_yaml_is_a_config_error() {
        assert!(matches!(parse_case("name: [unterminated"), Err(AppError::Config(_))));
    }
}
