use chrono::{DateTime, Local};

pub fn format_kg(value: u32) -> String {
    format!("{value} kg")
}

/// Percentages keep one decimal, dropping it when the value is whole.
pub fn format_percent(value: f64) -> String {
    format!("{}%", format_decimal(value))
}

pub fn format_celsius(value: f64) -> String {
    format!("{}°C", format_decimal(value))
}

pub fn format_ph(value: f64) -> String {
    format!("{value:.1}")
}

pub fn format_ntu(value: u32) -> String {
    format!("{value} NTU")
}

pub fn format_flow(value: f64) -> String {
    format!("{} m/s", format_decimal(value))
}

pub fn format_humidity(value: u32) -> String {
    format!("{value}%")
}

pub fn display_update_time(datetime: DateTime<Local>) -> String {
    format!("Updated at {}", datetime.format("%H:%M"))
}

fn format_decimal(value: f64) -> String {
    let formatted = format!("{value:.1}");
    match formatted.strip_suffix(".0") {
        Some(whole) => whole.to_string(),
        None => formatted,
    }
}
