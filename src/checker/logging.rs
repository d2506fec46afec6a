use log::info;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Run-level logging for the site checker
pub struct CheckLogger {
    start_time: Instant,
    operation_timers: HashMap<String, Instant>,
    stats: CheckStats,
}

/// Statistics collected over one run
#[derive(Debug, Default)]
pub struct CheckStats {
    pub total_operations: usize,
    pub successful_operations: usize,
    pub failed_operations: usize,
}

impl CheckLogger {
    /// Create a new check logger
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            operation_timers: HashMap::new(),
            stats: CheckStats::default(),
        }
    }

    /// Start timing an operation
    pub fn start_operation(&mut self, operation_name: &str) {
        self.operation_timers
            .insert(operation_name.to_string(), Instant::now());
        info!("Checking {}", operation_name);
    }

    /// End timing an operation and log the duration
    pub fn end_operation(&mut self, operation_name: &str, success: bool) {
        if let Some(start_time) = self.operation_timers.remove(operation_name) {
            let duration = start_time.elapsed();
            let outcome = if success { "succeeded" } else { "failed" };

            info!("{} check {} after {:?}", operation_name, outcome, duration);

            self.stats.total_operations += 1;
            if success {
                self.stats.successful_operations += 1;
            } else {
                self.stats.failed_operations += 1;
            }
        }
    }

    /// Get current run statistics
    pub fn get_stats(&self) -> &CheckStats {
        &self.stats
    }

    /// Get total elapsed time since logger creation
    pub fn get_total_elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Log final summary
    pub fn log_final_summary(&self) {
        info!("🏁 Check completed in {:?}", self.get_total_elapsed());
        info!(
            "📊 Fetches: {} total, {} succeeded, {} failed",
            self.stats.total_operations,
            self.stats.successful_operations,
            self.stats.failed_operations
        );
    }
}

impl Default for CheckLogger {
    fn default() -> Self {
        Self::new()
    }
}
