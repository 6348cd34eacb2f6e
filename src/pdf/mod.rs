//! PDF rendering of tax invoices.
//!
//! Draws the same [`layout`](crate::core::layout) as the plain-text print
//! onto A4 pages using the standard Helvetica fonts, so no font files are
//! embedded. A long item table continues on further pages.

mod canvas;

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};

use crate::core::{GstError, Invoice, InvoiceDocument, PartyBlock, layout};
use canvas::{Canvas, Font, MARGIN, PAGE_HEIGHT, PAGE_WIDTH, text_width, wrap};

const LINE: i64 = 14;
const ROW: i64 = 18;
const PANEL_HEADING: i64 = 14;
const PANEL_LINE: i64 = 12;

/// Render an invoice as PDF bytes.
pub fn to_pdf(invoice: &Invoice) -> Result<Vec<u8>, GstError> {
    let document = layout(invoice);
    let pages = draw(&document);
    let bytes = assemble(pages)?;

    tracing::debug!(
        invoice = invoice.invoice_number.as_deref().unwrap_or("<unnumbered>"),
        bytes = bytes.len(),
        "rendered invoice PDF"
    );
    Ok(bytes)
}

/// Download name for an invoice's PDF: `invoice-<number>.pdf`.
pub fn pdf_filename(invoice: &Invoice) -> String {
    let number = invoice
        .invoice_number
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or("draft");
    let safe: String = number
        .chars()
        .map(|c| if c == '/' || c == '\\' { '-' } else { c })
        .collect();
    format!("invoice-{safe}.pdf")
}

fn draw(doc: &InvoiceDocument) -> Vec<Vec<Operation>> {
    let mut canvas = Canvas::new(doc.footer);
    let right = PAGE_WIDTH - MARGIN;

    // Title block
    canvas.text_center(canvas.y, Font::Bold, 15, &doc.heading);
    canvas.y -= 20;
    canvas.text_center(canvas.y, Font::Bold, 11, doc.title);
    canvas.y -= 18;
    canvas.text_right(right, canvas.y, Font::Bold, 10, &doc.number_line);
    canvas.y -= 10;
    canvas.rule(canvas.y);
    canvas.y -= 18;

    draw_parties(&mut canvas, doc);

    if let Some(place) = &doc.place_of_supply {
        canvas.text(MARGIN, canvas.y, Font::Regular, 9, &format!("Place of Supply: {place}"));
        canvas.y -= LINE;
    }
    canvas.y -= 6;

    draw_table(&mut canvas, doc);

    // Totals, right-aligned under the table
    canvas.ensure_space(LINE * (doc.totals.len() as i64 + 2));
    let last = doc.totals.len().saturating_sub(1);
    for (i, (label, value)) in doc.totals.iter().enumerate() {
        let font = if i == last { Font::Bold } else { Font::Regular };
        canvas.text_right(right - 90, canvas.y, font, 10, &format!("{label}:"));
        canvas.text_right(right, canvas.y, font, 10, &format!("Rs. {value}"));
        canvas.y -= LINE;
    }
    canvas.y -= 4;

    let words = wrap(&format!("Amount in Words: {}", doc.amount_in_words), 90);
    canvas.ensure_space(LINE * words.len() as i64);
    for line in &words {
        canvas.text(MARGIN, canvas.y, Font::Bold, 9, line);
        canvas.y -= LINE;
    }
    canvas.y -= 8;

    draw_box(&mut canvas, "Bank Details:", &doc.bank_details, "");
    draw_box(&mut canvas, "Terms & Conditions:", &doc.terms, "• ");

    canvas.finish()
}

fn draw_parties(canvas: &mut Canvas, doc: &InvoiceDocument) {
    let half = canvas.content_width() / 2;
    let columns: Vec<(i64, &str, Vec<String>)> = [(&doc.seller, MARGIN), (&doc.buyer, MARGIN + half)]
        .into_iter()
        .map(|(block, x): (&PartyBlock, i64)| {
            let lines: Vec<String> = block.lines().iter().flat_map(|line| wrap(line, 48)).collect();
            (x, block.heading, lines)
        })
        .collect();
    draw_panel(canvas, &columns, 14);
}

/// Column widths in points; the description column takes what is left.
fn column_widths(columns: &[&str], total: i64) -> Vec<i64> {
    let fixed: Vec<Option<i64>> = columns
        .iter()
        .map(|c| match *c {
            "Sr." => Some(30),
            "Item Description" => None,
            "HSN" => Some(55),
            "Qty" => Some(40),
            "Rate" | "IGST" => Some(55),
            _ => Some(65),
        })
        .collect();
    let used: i64 = fixed.iter().flatten().sum();
    fixed
        .into_iter()
        .map(|w| w.unwrap_or((total - used).max(60)))
        .collect()
}

fn draw_table(canvas: &mut Canvas, doc: &InvoiceDocument) {
    let widths = column_widths(&doc.columns, canvas.content_width());
    let mut lefts = Vec::with_capacity(widths.len());
    let mut x = MARGIN;
    for w in &widths {
        lefts.push(x);
        x += w;
    }

    canvas.ensure_space(ROW * 2);
    draw_header(canvas, &doc.columns, &lefts, &widths);

    for row in &doc.rows {
        let page_before = canvas.y;
        canvas.ensure_space(ROW);
        if canvas.y > page_before {
            draw_header(canvas, &doc.columns, &lefts, &widths);
        }
        for (i, cell) in row.iter().enumerate() {
            let cell = fit(cell, widths[i] - 8, 9);
            draw_cell(canvas, i, lefts[i], widths[i], Font::Regular, &cell);
        }
        canvas.rule(canvas.y - 5);
        canvas.y -= ROW;
    }
    canvas.y -= 8;
}

fn draw_header(canvas: &mut Canvas, columns: &[&str], lefts: &[i64], widths: &[i64]) {
    let width = canvas.content_width();
    canvas.fill_rect(MARGIN, canvas.y - 5, width, ROW, Object::Real(0.94));
    for (i, column) in columns.iter().enumerate() {
        draw_cell(canvas, i, lefts[i], widths[i], Font::Bold, column);
    }
    canvas.y -= ROW;
}

fn draw_cell(canvas: &mut Canvas, index: usize, left: i64, width: i64, font: Font, text: &str) {
    let y = canvas.y;
    if index > 2 {
        canvas.text_right(left + width - 4, y, font, 9, text);
    } else {
        canvas.text(left + 4, y, font, 9, text);
    }
}

/// Truncate `text` with ".." so it fits `width` points.
fn fit(text: &str, width: i64, size: i64) -> String {
    if text_width(text, size) <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().collect();
    while !out.is_empty() && text_width(&out, size) + text_width("..", size) > width {
        out.pop();
    }
    out.push_str("..");
    out
}

fn draw_box(canvas: &mut Canvas, heading: &str, lines: &[String], bullet: &str) {
    let lines: Vec<String> = lines
        .iter()
        .flat_map(|line| wrap(&format!("{bullet}{line}"), 100))
        .collect();
    draw_panel(canvas, &[(MARGIN, heading, lines)], 16);
}

/// Shaded panel of side-by-side columns, each a bold heading over small
/// lines. A panel longer than the page continues on the next one with its
/// headings repeated.
fn draw_panel(canvas: &mut Canvas, columns: &[(i64, &str, Vec<String>)], gap_after: i64) {
    let rows = columns.iter().map(|(_, _, lines)| lines.len()).max().unwrap_or(0);
    canvas.keep_together(panel_height(rows));

    let mut start = 0;
    loop {
        canvas.ensure_space(PANEL_HEADING + PANEL_LINE + 10);
        let fits = ((canvas.room() - PANEL_HEADING) / PANEL_LINE + 1).max(1) as usize;
        let count = fits.min(rows - start);

        let top = canvas.y + 12;
        let height = panel_height(count);
        let width = canvas.content_width();
        canvas.fill_rect(MARGIN, top - height, width, height, Object::Real(0.97));
        for (x, heading, lines) in columns {
            canvas.text(x + 6, canvas.y, Font::Bold, 10, heading);
            let mut y = canvas.y - PANEL_HEADING;
            for line in lines.iter().skip(start).take(count) {
                canvas.text(x + 6, y, Font::Regular, 8, line);
                y -= PANEL_LINE;
            }
        }

        start += count;
        if start >= rows {
            canvas.y = top - height - gap_after;
            return;
        }
        canvas.new_page();
    }
}

fn panel_height(rows: usize) -> i64 {
    (rows as i64 + 1) * PANEL_LINE + 10
}

fn assemble(pages: Vec<Vec<Operation>>) -> Result<Vec<u8>, GstError> {
    let mut doc = Document::with_version("1.5");

    let pages_id = doc.new_object_id();
    let regular_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let bold_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => Object::Reference(regular_id),
            "F2" => Object::Reference(bold_id),
        },
    });

    let mut kids = Vec::with_capacity(pages.len());
    for operations in pages {
        let content = Content { operations };
        let encoded = content
            .encode()
            .map_err(|e| GstError::Render(format!("failed to encode page content: {e}")))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => Object::Reference(pages_id),
            "Contents" => Object::Reference(content_id),
        });
        kids.push(Object::Reference(page_id));
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => Object::Reference(resources_id),
            "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));
    doc.compress();

    let mut output = Vec::new();
    doc.save_to(&mut output)
        .map_err(|e| GstError::Render(format!("failed to save PDF: {e}")))?;
    Ok(output)
}
