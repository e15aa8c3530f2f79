//! # Invoice Export
//!
//! Exporting happens in two steps:
//!
//! 1. [`layout::InvoiceLayout::build`] turns a snapshot of items into an ordered list of
//!    styled lines: sender details, the `RECHNUNG` title with the export date, the
//!    column header, one row per item and the grand total.
//! 2. [`pdf::render_pdf`] places those lines on a single A4 page using the builtin PDF
//!    fonts, and [`pdf::write_pdf`] stores the bytes.
//!
//! The layout is plain data, so it can also be rendered as text for previews and tests.

pub mod layout;
pub mod pdf;

pub use layout::{InvoiceLayout, InvoiceLine, ItemRow};
pub use pdf::{render_pdf, write_pdf};
