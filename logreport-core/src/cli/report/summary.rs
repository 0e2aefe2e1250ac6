use crate::cli::report::run::ReportSummary;
use owo_colors::OwoColorize;

pub fn print_summary(summary: &ReportSummary) {
    let ok = "✔".green();

    println!("{ok} Report written to {}", summary.index.display().bold());
    println!(
        "{ok} {} requests over {} days ({} bytes)",
        summary.total_hits, summary.days, summary.total_bytes
    );
    println!(
        "{ok} {} lines read, {} skipped",
        summary.ingest.lines_read, summary.ingest.lines_skipped
    );
    println!(
        "{ok} {} places from {} addresses",
        summary.places, summary.enrichment.resolved
    );

    let dropped = summary.enrichment.invalid_address + summary.enrichment.lookup_failed;
    if dropped > 0 {
        println!(
            "{} {} addresses could not be located",
            "!".yellow(),
            dropped
        );
    }
}
