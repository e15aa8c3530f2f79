use super::layout::{InvoiceLayout, InvoiceLine};
use crate::error::{BillzError, Result};
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};
use uuid::Uuid;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 20.0;
const PT_TO_MM: f32 = 0.3528;
const LINE_SPACING: f32 = 1.35;

const TITLE_SIZE: f32 = 18.0;
const TEXT_SIZE: f32 = 11.0;
const SMALL_SIZE: f32 = 10.0;

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    mono: IndirectFontRef,
}

/// Renders the layout onto a single A4 page and returns the PDF bytes.
pub fn render_pdf(layout: &InvoiceLayout, title: &str) -> Result<Vec<u8>> {
    let (doc, page, layer) = PdfDocument::new(
        title,
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Invoice",
    );
    let layer = doc.get_page(page).get_layer(layer);

    let fonts = Fonts {
        regular: doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(pdf_error)?,
        bold: doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(pdf_error)?,
        mono: doc
            .add_builtin_font(BuiltinFont::Courier)
            .map_err(pdf_error)?,
    };

    let mut y = PAGE_HEIGHT_MM - MARGIN_MM;
    for (n, line) in layout.lines.iter().enumerate() {
        let (font, size) = match line {
            InvoiceLine::Title(_) => (&fonts.bold, TITLE_SIZE),
            InvoiceLine::Heading(_) | InvoiceLine::Total(_) => (&fonts.bold, TEXT_SIZE),
            InvoiceLine::Row(_) => (&fonts.mono, SMALL_SIZE),
            InvoiceLine::Sender(_) => (&fonts.regular, SMALL_SIZE),
            _ => (&fonts.regular, TEXT_SIZE),
        };

        y -= size * PT_TO_MM * LINE_SPACING;
        if y < MARGIN_MM {
            warn!(
                dropped = layout.lines.len() - n,
                "invoice does not fit on one page, truncating"
            );
            break;
        }

        let text = match line {
            InvoiceLine::Row(row) => row.format_with(pdf_text),
            other => pdf_text(&other.text()),
        };
        if !text.is_empty() {
            layer.use_text(text, size, Mm(MARGIN_MM), Mm(y), font);
        }
    }

    let bytes = doc.save_to_bytes().map_err(pdf_error)?;
    debug!(bytes = bytes.len(), "invoice rendered");
    Ok(bytes)
}

/// Writes `bytes` to `path` through a temporary sibling so a failed export
/// never leaves a truncated file behind.
pub fn write_pdf(bytes: &[u8], path: &Path) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| BillzError::Export(format!("{} is not a file path", path.display())))?;
    let tmp = dir.join(format!(".{}-{}.tmp", file_name, Uuid::new_v4()));

    let outcome = fs::write(&tmp, bytes).and_then(|_| fs::rename(&tmp, path));
    if let Err(e) = outcome {
        let _ = fs::remove_file(&tmp);
        return Err(BillzError::Export(format!(
            "could not write {}: {}",
            path.display(),
            e
        )));
    }
    Ok(())
}

/// The builtin PDF fonts only cover plain Latin text.
fn pdf_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            ' '..='~' => out.push(c),
            'ä' => out.push_str("ae"),
            'ö' => out.push_str("oe"),
            'ü' => out.push_str("ue"),
            'Ä' => out.push_str("Ae"),
            'Ö' => out.push_str("Oe"),
            'Ü' => out.push_str("Ue"),
            'ß' => out.push_str("ss"),
            '€' => out.push_str("EUR"),
            '…' => out.push_str("..."),
            _ => out.push('?'),
        }
    }
    out
}

fn pdf_error(e: printpdf::Error) -> BillzError {
    BillzError::Export(format!("PDF rendering failed: {}", e))
}
