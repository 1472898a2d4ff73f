use std::io::Cursor;

use docx_rs::{
    AlignmentType, BreakType, Docx, PageMargin, Paragraph, Pic, Run, RunFonts, Style, StyleType,
    Table, TableCell, TableRow,
};
use image::ImageFormat;

use crate::error::ExportError;
use crate::styles::DocumentStyles;

const TWIPS_PER_INCH: f64 = 1440.0;

/// Printed logo width: 140pt in EMU. Height follows the aspect ratio.
const LOGO_WIDTH_EMU: u32 = 140 * 12_700;

/// Generate a DOCX document from rendered Markdown-ish template output.
///
/// The `rendered` content uses a simple subset:
/// - `# Heading` → DOCX Heading 1
/// - `## Heading` → DOCX Heading 2
/// - `### Heading` → DOCX Heading 3
/// - `- item` → bullet list item (prefixed with bullet character)
/// - `**bold**` → bold run
/// - `| a | b |` → table row; consecutive rows form one table, the first
///   row is the header. `|---|---|` separator rows are skipped.
/// - `---` or `***` → page break
/// - `\text` → normal paragraph holding `text` verbatim, markers included
/// - Everything else → normal paragraph
///
/// A `logo` (PNG or JPEG bytes) is placed centred above the content.
pub fn generate_docx(
    rendered: &str,
    styles: &DocumentStyles,
    logo: Option<&[u8]>,
) -> Result<Vec<u8>, ExportError> {
    let margin = (styles.margin_inches * TWIPS_PER_INCH).round() as i32;

    let mut docx = Docx::new()
        .page_margin(
            PageMargin::new()
                .top(margin)
                .bottom(margin)
                .left(margin)
                .right(margin),
        )
        .add_style(heading_style("Heading1", "heading 1", styles.heading1_size, styles))
        .add_style(heading_style("Heading2", "heading 2", styles.heading2_size, styles))
        .add_style(heading_style("Heading3", "heading 3", styles.heading3_size, styles));

    if let Some(bytes) = logo {
        docx = docx.add_paragraph(
            Paragraph::new()
                .align(AlignmentType::Center)
                .add_run(Run::new().add_image(logo_picture(bytes)?)),
        );
    }

    let mut table_rows: Vec<Vec<String>> = Vec::new();

    for line in rendered.lines() {
        let trimmed = line.trim();

        if let Some(text) = trimmed.strip_prefix('\\') {
            if !table_rows.is_empty() {
                docx = docx.add_table(build_table(&table_rows, styles));
                table_rows.clear();
            }
            docx = docx.add_paragraph(literal_paragraph(text, styles));
            continue;
        }

        if let Some(cells) = table_cells(trimmed) {
            if !is_separator_row(&cells) {
                table_rows.push(cells);
            }
            continue;
        }
        if !table_rows.is_empty() {
            docx = docx.add_table(build_table(&table_rows, styles));
            table_rows.clear();
        }

        if trimmed.is_empty() {
            docx = docx.add_paragraph(Paragraph::new());
        } else if let Some(text) = trimmed.strip_prefix("### ") {
            docx = docx.add_paragraph(heading_paragraph(text, "Heading3"));
        } else if let Some(text) = trimmed.strip_prefix("## ") {
            docx = docx.add_paragraph(heading_paragraph(text, "Heading2"));
        } else if let Some(text) = trimmed.strip_prefix("# ") {
            docx = docx.add_paragraph(heading_paragraph(text, "Heading1"));
        } else if let Some(text) = trimmed.strip_prefix("- ") {
            docx = docx.add_paragraph(bullet_paragraph(text, styles));
        } else if trimmed == "---" || trimmed == "***" {
            docx = docx.add_paragraph(
                Paragraph::new().add_run(Run::new().add_break(BreakType::Page)),
            );
        } else {
            docx = docx.add_paragraph(body_paragraph(trimmed, styles));
        }
    }

    if !table_rows.is_empty() {
        docx = docx.add_table(build_table(&table_rows, styles));
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    Ok(buf.into_inner())
}

/// Validate the logo before handing it to docx-rs, which panics on bytes it
/// cannot decode.
fn logo_picture(bytes: &[u8]) -> Result<Pic, ExportError> {
    let format = image::guess_format(bytes).map_err(|e| ExportError::Logo(e.to_string()))?;
    if !matches!(format, ImageFormat::Png | ImageFormat::Jpeg) {
        return Err(ExportError::Logo(format!(
            "unsupported image format {format:?}, expected PNG or JPEG"
        )));
    }
    let decoded = image::load_from_memory_with_format(bytes, format)
        .map_err(|e| ExportError::Logo(e.to_string()))?;

    let width = decoded.width().max(1);
    let height = u64::from(LOGO_WIDTH_EMU) * u64::from(decoded.height()) / u64::from(width);
    let height = u32::try_from(height).unwrap_or(u32::MAX);
    Ok(Pic::new(bytes).size(LOGO_WIDTH_EMU, height))
}

fn heading_style(style_id: &str, name: &str, size_pt: usize, styles: &DocumentStyles) -> Style {
    Style::new(style_id, StyleType::Paragraph)
        .name(name)
        .bold()
        .fonts(RunFonts::new().ascii(&styles.heading_font))
        .size(size_pt * 2) // OOXML uses half-points
}

fn heading_paragraph(text: &str, style_id: &str) -> Paragraph {
    Paragraph::new()
        .style(style_id)
        .add_run(Run::new().add_text(text))
}

fn bullet_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    let mut para = Paragraph::new()
        .align(AlignmentType::Left)
        .add_run(body_run("\u{2022} ", styles));

    for run in parse_inline(text, styles) {
        para = para.add_run(run);
    }

    para
}

fn body_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    let mut para = Paragraph::new().align(AlignmentType::Left);
    for run in parse_inline(text, styles) {
        para = para.add_run(run);
    }
    para
}

fn literal_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    Paragraph::new()
        .align(AlignmentType::Left)
        .add_run(body_run(text, styles))
}

/// Split `| a | b |` into its cell texts. `None` if the line is not a row.
fn table_cells(line: &str) -> Option<Vec<String>> {
    let inner = line.strip_prefix('|')?.strip_suffix('|')?;
    Some(inner.split('|').map(|c| c.trim().to_string()).collect())
}

fn is_separator_row(cells: &[String]) -> bool {
    cells
        .iter()
        .all(|c| !c.is_empty() && c.chars().all(|ch| ch == '-' || ch == ':'))
}

fn build_table(rows: &[Vec<String>], styles: &DocumentStyles) -> Table {
    let table_rows = rows
        .iter()
        .enumerate()
        .map(|(i, cells)| {
            let header = i == 0;
            TableRow::new(
                cells
                    .iter()
                    .map(|text| {
                        let mut run = body_run(text, styles);
                        if header {
                            run = run.bold();
                        }
                        TableCell::new().add_paragraph(Paragraph::new().add_run(run))
                    })
                    .collect(),
            )
        })
        .collect();

    Table::new(table_rows)
}

fn body_run(text: &str, styles: &DocumentStyles) -> Run {
    Run::new()
        .add_text(text)
        .size(styles.body_size * 2)
        .fonts(RunFonts::new().ascii(&styles.body_font))
}

/// Parse simple inline formatting: **bold** segments.
fn parse_inline(text: &str, styles: &DocumentStyles) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut remaining = text;

    while let Some(start) = remaining.find("**") {
        let before = &remaining[..start];
        if !before.is_empty() {
            runs.push(body_run(before, styles));
        }

        let after_start = &remaining[start + 2..];
        if let Some(end) = after_start.find("**") {
            runs.push(body_run(&after_start[..end], styles).bold());
            remaining = &after_start[end + 2..];
        } else {
            // No closing **, treat rest as normal text
            runs.push(body_run(remaining, styles));
            return runs;
        }
    }

    if !remaining.is_empty() {
        runs.push(body_run(remaining, styles));
    }

    runs
}
