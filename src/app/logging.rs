//! Progress logging utilities.

use log::info;
use std::time::Instant;

/// Logs how many input entries a subcommand has finished and at what rate.
///
/// # Arguments
///
/// * `label` - What was processed ("domains", "URLs")
/// * `start_time` - The start time of processing
/// * `completed` - Number of entries finished so far
pub fn log_progress(label: &str, start_time: Instant, completed: usize) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let rate = if elapsed_secs > 0.0 {
        completed as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Processed {} {} in {:.2} seconds (~{:.2} {}/sec)",
        completed, label, elapsed_secs, rate, label
    );
}
