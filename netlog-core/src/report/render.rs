use crate::report::types::TrafficReport;
use crate::traffic::DeviceSpeed;
use owo_colors::OwoColorize;
use std::io::{self, Write};

const UNITS: &[&str] = &["B/s", "KiB/s", "MiB/s", "GiB/s"];

/// Formats a bytes/second figure with a binary unit, e.g. `1.5 KiB/s`.
pub fn format_speed(bytes_per_sec: f32) -> String {
    let mut value = bytes_per_sec.max(0.0);
    let mut unit = 0;

    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    format!("{value:.1} {}", UNITS[unit])
}

pub fn render_dashboard(report: &TrafficReport) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{}\n\
         ==============\n\
         Upload: {} | Download: {}\n\n",
        "netlog traffic".bold(),
        format_speed(report.speed.upload).green(),
        format_speed(report.speed.download).green(),
    ));

    render_section(&mut out, "Upload", &report.upload);
    render_section(&mut out, "Download", &report.download);

    out.push_str(&format!(
        "Updated {}\n",
        report.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    out
}

fn render_section(out: &mut String, title: &str, devices: &[DeviceSpeed]) {
    out.push_str(&format!("{} ({} devices)\n", title.bold(), devices.len()));

    if devices.is_empty() {
        out.push_str("  <no traffic yet>\n\n");
        return;
    }

    for d in devices {
        out.push_str(&format!(
            "  {:<16} {:>14}\n",
            d.address.to_string(),
            format_speed(d.speed)
        ));
    }
    out.push('\n');
}

pub fn redraw(output: &str) {
    print!("\x1b[2J\x1b[H");
    println!("{output}");
    let _ = io::stdout().flush();
}

pub fn hide_cursor() {
    print!("\x1b[?25l");
    let _ = io::stdout().flush();
}

pub fn show_cursor() {
    print!("\x1b[?25h");
    let _ = io::stdout().flush();
}
