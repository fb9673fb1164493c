//! Parallel execution heuristics
//!
//! Rolling evaluation is embarrassingly parallel per output position, but
//! the coordination overhead only pays off above a hardware-dependent input
//! size. This module decides when to take the rayon path based on:
//! - Available CPU cores
//! - Sequence length
//! - User override via the WINDROW_PARALLEL_THRESHOLD environment variable
//!
//! Only compiled when the `parallel` feature is enabled. The parallel path
//! must be observationally identical to the sequential one, fill behavior
//! included.

use std::sync::OnceLock;

/// Global parallel configuration, initialized once on first access
static PARALLEL_CONFIG: OnceLock<ParallelConfig> = OnceLock::new();

/// Configuration for parallel execution decisions
#[derive(Debug, Clone)]
pub struct ParallelConfig {
    /// Number of threads available (from rayon)
    pub num_threads: usize,
    /// Minimum sequence length before rolling evaluation parallelizes
    pub rolling_threshold: usize,
}

impl ParallelConfig {
    /// Get or initialize the global parallel configuration
    pub fn global() -> &'static ParallelConfig {
        PARALLEL_CONFIG.get_or_init(Self::detect)
    }

    /// Detect hardware capabilities and create appropriate configuration
    fn detect() -> Self {
        let num_threads = rayon::current_num_threads();

        let rolling_threshold = match std::env::var("WINDROW_PARALLEL_THRESHOLD") {
            Ok(threshold_str) => Self::parse_threshold_override(&threshold_str),
            Err(_) => Self::threshold_for_hardware(num_threads),
        };

        ParallelConfig { num_threads, rolling_threshold }
    }

    /// Parse WINDROW_PARALLEL_THRESHOLD
    ///
    /// Supports:
    /// - Numbers: "5000" -> custom threshold
    /// - "max" or "disabled" -> effectively disable parallelism
    fn parse_threshold_override(threshold_str: &str) -> usize {
        let threshold_str = threshold_str.trim().to_lowercase();

        if threshold_str == "max" || threshold_str == "disabled" {
            usize::MAX
        } else if let Ok(threshold) = threshold_str.parse::<usize>() {
            threshold
        } else {
            // Invalid value, fall back to auto-detection
            Self::threshold_for_hardware(rayon::current_num_threads())
        }
    }

    /// Determine the appropriate threshold for a hardware tier
    fn threshold_for_hardware(num_threads: usize) -> usize {
        match num_threads {
            // Single core: never parallelize
            1 => usize::MAX,
            // 2-3 cores: conservative, coordination overhead dominates
            2..=3 => 50_000,
            // 4-7 cores: moderate
            4..=7 => 20_000,
            // 8+ cores: per-position aggregation amortizes early
            _ => 8_000,
        }
    }

    /// Check if rolling evaluation should take the parallel path
    pub fn should_parallelize_rolling(&self, len: usize) -> bool {
        len >= self.rolling_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hardware_detection() {
        let config = ParallelConfig::detect();
        assert!(config.num_threads >= 1);
    }

    #[test]
    fn test_threshold_override_custom_value() {
        assert_eq!(ParallelConfig::parse_threshold_override("5000"), 5000);
    }

    #[test]
    fn test_threshold_override_max() {
        assert_eq!(ParallelConfig::parse_threshold_override("max"), usize::MAX);
    }

    #[test]
    fn test_threshold_override_disabled() {
        assert_eq!(ParallelConfig::parse_threshold_override("disabled"), usize::MAX);
    }

    #[test]
    fn test_single_core_never_parallelizes() {
        assert_eq!(ParallelConfig::threshold_for_hardware(1), usize::MAX);
    }

    #[test]
    fn test_threshold_tiers_decrease_with_cores() {
        let two = ParallelConfig::threshold_for_hardware(2);
        let four = ParallelConfig::threshold_for_hardware(4);
        let eight = ParallelConfig::threshold_for_hardware(8);
        assert!(two > four);
        assert!(four > eight);
    }

    #[test]
    fn test_should_parallelize_rolling() {
        let config = ParallelConfig { num_threads: 8, rolling_threshold: 8_000 };

        assert!(!config.should_parallelize_rolling(500));
        assert!(config.should_parallelize_rolling(8_000));
        assert!(config.should_parallelize_rolling(100_000));
    }

    #[test]
    fn test_invalid_threshold_override_falls_back_to_auto() {
        let threshold = ParallelConfig::parse_threshold_override("invalid");
        let auto = ParallelConfig::threshold_for_hardware(rayon::current_num_threads());
        assert_eq!(threshold, auto);
    }
}
