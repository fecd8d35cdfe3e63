//! Terminal output utilities.
//!
//! Turns a [`Report`] into aligned lines; printing is left to the caller.

use super::report::Report;
use colored::Colorize;
use itertools::Itertools;

const LABEL_WIDTH: usize = 16;
/// Longest address text (a full IPv6 address) plus its quotes.
const ADDRESS_WIDTH: usize = 41;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

fn line(label: &str, value: impl ToString) -> String {
    let width = LABEL_WIDTH;
    format!("{label:>width$}: {}", value.to_string())
}

/// Lines describing `report`, set flags highlighted.
pub fn render_report(report: &Report) -> Vec<String> {
    let mut lines = vec![
        line("address", format_field(report.address, ADDRESS_WIDTH).bold()),
        line("version", format!("IPv{}", report.version)),
        line("binary", format!("0x{}", report.binary)),
    ];
    if let Some(expanded) = &report.expanded {
        lines.push(line("expanded", expanded));
    }
    if let Some(embedded) = &report.embedded_ipv4 {
        lines.push(line("embedded ipv4", format_field(embedded, ADDRESS_WIDTH)));
    }
    let set = report
        .flags
        .iter()
        .filter(|flag| flag.value)
        .map(|flag| flag.name.green().to_string())
        .join(", ");
    lines.push(line("flags", if set.is_empty() { "-".to_string() } else { set }));

    if let (Some(cidr), Some(network), Some(broadcast)) =
        (report.cidr, &report.network, &report.broadcast)
    {
        lines.push(line("network", format!("{network}/{cidr}")));
        lines.push(line("broadcast", format_field(broadcast, ADDRESS_WIDTH)));
    }
    if let Some(other) = &report.other {
        match report.common_cidr {
            Some(len) => lines.push(line("common cidr", format!("/{len} with {other}"))),
            None => lines.push(line("common cidr", format!("none with {other}").red())),
        }
        if let (Some(cidr), Some(in_range)) = (report.cidr, report.in_range) {
            let verdict = if in_range {
                "in range".green()
            } else {
                "not in range".red()
            };
            lines.push(line("range", format!("{other} {verdict} /{cidr}")));
        }
    }
    lines
}
