//! Core type aliases, traits, and constants for surveybits.
//!
//! The pipeline turns one tabular survey dataset into cluster centroids
//! and fixed-width binary row representations for a downstream bit-packed
//! consumer. Clustering itself lives behind the `cluster::Oracle` seam.

pub mod cli;
pub mod cluster;
pub mod codec;
pub mod data;
pub mod pipeline;
pub mod sink;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// One categorical/ordinal survey field value.
pub type Value = u32;
/// Bits allotted to a single field.
pub type Width = usize;
/// Feature-space coordinate after numeric parsing or standardization.
pub type Scalar = f32;
/// Distances between rows and centroids.
pub type Energy = f32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for tests and benches.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// SURVEY DATASET PARAMETERS
// Field widths and oracle provenance for the mental-health survey records.
// ============================================================================
/// Bit allotment per survey field, in column order of the cleaned dataset.
pub const SURVEY_SCHEDULE: [Width; 17] = [4, 3, 3, 3, 2, 1, 1, 1, 1, 1, 4, 3, 2, 3, 3, 2, 2];
/// Label column stripped from the survey dataset before clustering.
pub const SURVEY_LABEL: &str = "MH1";
/// Number of clusters the survey oracle is expected to produce.
pub const SURVEY_CLUSTER_COUNT: usize = 14;
/// Seed the external clustering oracle was run with.
pub const ORACLE_SEED: u64 = 43;
/// Iteration cap the external clustering oracle was run with.
pub const ORACLE_MAX_ITERATIONS: usize = 500;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// A struct to track and display progress of a long-running operation.
pub struct Progress {
    total: usize,
    check: usize,
    ticks: usize,
    begin: std::time::Instant,
    delta: std::time::Instant,
}

impl Progress {
    /// ticker over `total` items, logging roughly `n` times along the way
    pub fn new(total: usize, n: usize) -> Self {
        let check = (total / n).max(1);
        let now = std::time::Instant::now();
        Self {
            total,
            check,
            ticks: 0,
            begin: now,
            delta: now,
        }
    }
    pub fn tick(&mut self) {
        self.ticks += 1;
        if self.ticks % self.check == 0 {
            let now = std::time::Instant::now();
            let total_t = now.duration_since(self.begin);
            let delta_t = now.duration_since(self.delta);
            self.delta = now;
            log::info!(
                "progress: {:8.0?} {:>10} {:6.2}%   mean {:6.0}   last {:6.0}",
                total_t,
                self.ticks,
                self.ticks as f32 / self.total as f32 * 100f32,
                self.ticks as f32 / total_t.as_secs_f32(),
                self.check as f32 / delta_t.as_secs_f32(),
            );
        }
    }
}
