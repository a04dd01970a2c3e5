//! Text rendering of job records for the terminal.

use std::fmt::Write;

use jobtrack_core::JobRecord;

/// Placeholder for a missing or unparseable application date.
const UNKNOWN_DATE: &str = "unknown date";

/// Header line above a listing.
pub fn summary_line(count: usize) -> String {
    format!("Showing {count} applications")
}

/// Multi-line block describing one record.
pub fn record_block(record: &JobRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} | {}", record.company, record.role);
    let _ = writeln!(out, "  status: {}", record.status);
    let _ = writeln!(
        out,
        "  date:   {}",
        record.display_date().as_deref().unwrap_or(UNKNOWN_DATE)
    );
    let _ = writeln!(out, "  id:     {}", record.id);
    if let Some(url) = record.link_url() {
        let _ = writeln!(out, "  link:   {url}");
    }
    out
}

/// Full listing: summary line followed by one block per record.
pub fn listing(records: &[&JobRecord]) -> String {
    let mut out = summary_line(records.len());
    out.push('\n');
    for record in records {
        out.push('\n');
        out.push_str(&record_block(record));
    }
    out
}
