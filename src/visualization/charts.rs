use colored::Colorize;

use super::tables::{section_title, NO_DATA};
use crate::analysis::HourlyDistribution;

/// Format a text-based histogram of trip starts per hour as a string.
pub fn format_hourly_histogram(dist: &HourlyDistribution) -> String {
    let mut output = section_title("Trip Starts by Hour", 60);

    if dist.buckets.is_empty() {
        output.push_str(NO_DATA);
        return output;
    }

    let peak = dist.peak();
    let bar_width = 40;

    output.push_str(&format!("  {:>6}  {:>8}  Distribution\n", "Hour", "Trips"));
    output.push_str(&format!("  {}\n", "-".repeat(60)));

    for bucket in &dist.buckets {
        let bar_len = if peak > 0 {
            ((bucket.trips as f64 / peak as f64) * bar_width as f64).round() as usize
        } else {
            0
        };

        let bar = "\u{2588}".repeat(bar_len);

        output.push_str(&format!(
            "  {:>3}:00  {:>8}  {}\n",
            bucket.hour,
            bucket.trips,
            bar.green()
        ));
    }

    output.push('\n');
    output
}
