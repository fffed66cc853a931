//! Planner configuration loader.

use std::path::Path;

use planner_core::PlannerConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for planner configuration from RON files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a RON file.
    ///
    /// Omitted fields keep their defaults. The parsed configuration is
    /// validated before it is returned.
    pub fn load(path: &Path) -> LoadResult<PlannerConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from RON text.
    pub fn parse(content: &str) -> LoadResult<PlannerConfig> {
        let config: PlannerConfig = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config RON: {}", e))?;
        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid planner config: {}", e))?;

        Ok(config)
    }

    /// The configuration shipped with the crate.
    pub fn bundled() -> LoadResult<PlannerConfig> {
        Self::parse(include_str!("../../data/config/default.ron"))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn bundled_config_matches_defaults() {
        let config = ConfigLoader::bundled().expect("bundled config should parse");
        assert_eq!(config, PlannerConfig::default());
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let config = ConfigLoader::parse("(hazard_threshold: 3, iteration: (discount: 0.9))")
            .expect("partial config should parse");

        assert_eq!(config.hazard_threshold, 3);
        assert_eq!(config.iteration.discount, 0.9);
        assert_eq!(config.iteration.tolerance, 0.08);
        assert_eq!(config.rewards, PlannerConfig::default().rewards);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = ConfigLoader::parse("(iteration: (discount: 1.5))").unwrap_err();
        assert!(err.to_string().contains("discount"));
    }

    #[test]
    fn load_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "(edible_threshold: 20)").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.edible_threshold, 20);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = ConfigLoader::load(Path::new("/nonexistent/planner.ron")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/planner.ron"));
    }
}
