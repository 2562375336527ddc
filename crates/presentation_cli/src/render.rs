//! Output rendering for command results
//!
//! Text output uses the stable level identifiers; JSON output uses the
//! same identifiers through serde.

use std::fmt::Display;

use application::ComfortReport;
use serde::Serialize;
use serde_json::json;

/// Render a full comfort report
pub fn report(report: &ComfortReport, as_json: bool) -> serde_json::Result<String> {
    if as_json {
        return serde_json::to_string_pretty(report);
    }

    let wind = report.wind.beaufort_number().map_or_else(
        || report.wind.to_string(),
        |beaufort| format!("{} (Beaufort {beaufort})", report.wind),
    );

    Ok(format!(
        "temperature: {}\nwind: {wind}\ndewpoint: {}\nderived index: {}",
        report.temperature, report.dewpoint, report.derived_index
    ))
}

/// Render a single derived index value
pub fn index(name: &str, value: i32, as_json: bool) -> serde_json::Result<String> {
    if as_json {
        serde_json::to_string_pretty(&json!({ name: value }))
    } else {
        Ok(format!("{name}: {value}"))
    }
}

/// Render a single comfort level
pub fn level<L>(name: &str, level: &L, as_json: bool) -> serde_json::Result<String>
where
    L: Serialize + Display,
{
    if as_json {
        serde_json::to_string_pretty(&json!({ name: level }))
    } else {
        Ok(format!("{name}: {level}"))
    }
}
