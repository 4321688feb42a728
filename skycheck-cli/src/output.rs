use chrono::Local;
use skycheck_core::WeatherReport;
use std::fmt::Write;

/// Plain-text rendering of a report, one field per line, advice last.
pub fn render_report(report: &WeatherReport) -> String {
    let obs = &report.observation;
    let mut out = String::new();

    let _ = writeln!(out, "{} Location: {}", report.icon.glyph(), obs.location());
    let _ = writeln!(
        out,
        "Temperature: {} {}",
        obs.temperature(),
        obs.unit().temperature_symbol()
    );
    let _ = writeln!(out, "Humidity: {} %", obs.humidity());
    let _ = writeln!(out, "Wind Speed: {} {}", obs.wind_speed(), report.wind_unit);
    let _ = writeln!(out, "Conditions: {}", obs.conditions());
    let _ = writeln!(
        out,
        "Updated: {}",
        report.fetched_at.with_timezone(&Local).format("%Y-%m-%d %H:%M")
    );
    out.push('\n');
    out.push_str(report.advice);

    out
}
