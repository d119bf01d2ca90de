use super::error::Error;
use crate::codec;
use crate::codec::Schedule;
use crate::Width;
use std::path::Path;
use std::path::PathBuf;

/// One configuration struct instead of nine drifting driver scripts.
///
/// Everything the run needs is named here: where the records live, which
/// column is the label, how many centers to expect, the bit allotments,
/// and the two encoding flags. Serializes as JSON so a run is reproducible
/// from a single file.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Config {
    /// comma-separated dataset on disk
    pub dataset: PathBuf,
    /// label column stripped before clustering, if any
    pub label: Option<String>,
    /// number of centers the oracle must produce
    pub clusters: usize,
    /// bit allotment per remaining column, in dataset column order
    pub widths: Vec<Width>,
    /// emit each record back-to-front (the hardware-facing layout)
    pub reverse: bool,
    /// z-score the frame before the oracle sees it
    pub standardize: bool,
    /// packed record file; logs only when absent
    pub output: Option<PathBuf>,
}

impl Config {
    /// read a run configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self, Error> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
    /// The checked schedule this configuration describes, in output order.
    /// A reversed run flips the schedule here and the values at encode
    /// time, so the two sequences stay index-aligned by construction.
    pub fn schedule(&self) -> Result<Schedule, codec::Error> {
        let schedule = Schedule::try_from(self.widths.clone())?;
        match self.reverse {
            true => Ok(schedule.reversed()),
            false => Ok(schedule),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset: PathBuf::from("Mental_Health_Cleaned.csv"),
            label: Some(crate::SURVEY_LABEL.to_string()),
            clusters: crate::SURVEY_CLUSTER_COUNT,
            widths: crate::SURVEY_SCHEDULE.to_vec(),
            reverse: false,
            standardize: false,
            output: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_the_survey_run() {
        let config = Config::default();
        assert_eq!(config.clusters, 14);
        assert_eq!(config.widths.len(), 17);
        assert_eq!(config.label.as_deref(), Some("MH1"));
    }

    #[test]
    fn reverse_flips_the_schedule_too() {
        let config = Config {
            reverse: true,
            ..Config::default()
        };
        let forward = Config::default().schedule().unwrap();
        assert_eq!(config.schedule().unwrap(), forward.reversed());
    }

    /// Serialize a config
    /// Load from disk
    /// Clean up
    #[test]
    fn persistence() {
        let path = PathBuf::from("config.json.test");
        let config = Config {
            reverse: true,
            standardize: true,
            ..Config::default()
        };
        std::fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();
        let loaded = Config::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded.dataset, config.dataset);
        assert_eq!(loaded.widths, config.widths);
        assert!(loaded.reverse);
        assert!(loaded.standardize);
    }
}
