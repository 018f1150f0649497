use std::path::PathBuf;
use std::time::Duration;

use crate::profile::steps::LoadStep;

#[derive(Debug, Clone)]
pub struct PatchStats {
    pub plan: PathBuf,
    pub steps: Vec<LoadStep>,
    pub total_duration_seconds: u64,
    pub hold_fields: usize,
    pub bytes_written: usize,
    pub dry_run: bool,
    pub elapsed: Duration,
}

impl PatchStats {
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn peak_load(&self) -> u64 {
        self.steps.last().map(|s| s.to).unwrap_or_default()
    }
}
