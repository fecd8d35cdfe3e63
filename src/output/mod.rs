//! Rendering of addresses.
//!
//! - [`text`] - dotted-decimal and colon-hex notation
//! - [`report`] - per-address summary used by the `ipinfo` binary
//! - [`terminal`] - aligned, coloured terminal lines for a report

pub mod report;
pub mod terminal;
pub mod text;

pub use report::{build_report, Flag, Report};
pub use terminal::{format_field, render_report};
pub use text::{compressed_address, dot_address, expanded_address};
