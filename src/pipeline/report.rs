/// What one pipeline run did and how long each stage took.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Report {
    /// records encoded
    pub rows: usize,
    /// feature columns after the label drop
    pub columns: usize,
    /// centers the oracle produced
    pub clusters: usize,
    /// records assigned to each center, index-aligned
    pub populations: Vec<usize>,
    /// wall time loading and reshaping the frame
    pub load_ms: u64,
    /// wall time obtaining centers and assigning rows
    pub cluster_ms: u64,
    /// wall time encoding and emitting rows
    pub encode_ms: u64,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{:<16}{:>8}", "rows", self.rows)?;
        writeln!(f, "{:<16}{:>8}", "columns", self.columns)?;
        writeln!(f, "{:<16}{:>8}", "clusters", self.clusters)?;
        writeln!(f, "{:<16}{:>6}ms", "load", self.load_ms)?;
        writeln!(f, "{:<16}{:>6}ms", "cluster", self.cluster_ms)?;
        write!(f, "{:<16}{:>6}ms", "encode", self.encode_ms)
    }
}
