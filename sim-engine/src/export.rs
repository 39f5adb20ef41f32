//! Report JSON export
//!
//! Serializes a finished report for the presentation layer. The engine
//! itself never touches the filesystem during a simulation; the file writer
//! exists for callers that want to hand a report to another process.

use types::report::SimulationReport;

/// Serialize a report as pretty JSON.
pub fn report_json(report: &SimulationReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_default()
}

/// Parse a report back from its JSON projection.
pub fn import_report(json: &str) -> Result<SimulationReport, serde_json::Error> {
    serde_json::from_str(json)
}

/// Write a report's JSON projection to a file path.
pub fn write_to_file(report: &SimulationReport, path: &str) -> std::io::Result<()> {
    std::fs::write(path, report_json(report))
}
