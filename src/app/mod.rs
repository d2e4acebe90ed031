//! User-facing output for the CLI.

use crate::run::ConversionReport;

/// One-line summary of a finished run.
pub fn format_summary(report: &ConversionReport) -> String {
    let stats = &report.stats;
    format!(
        "✅ Converted {} row{} ({} distance{} and {} reading{} changed unit) in {:.3}s",
        stats.rows,
        plural(stats.rows),
        stats.distances_converted,
        plural(stats.distances_converted),
        stats.readings_converted,
        plural(stats.readings_converted),
        report.elapsed_seconds
    )
}

/// Prints the run summary and where the output was written.
pub fn print_conversion_summary(report: &ConversionReport) {
    println!("{}", format_summary(report));
    println!("Results saved in {}", report.output.display());
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
