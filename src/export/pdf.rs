use super::report::MonthReport;
use pdf_writer::{Content, Name, Pdf, Rect, Ref};
use std::fs::File;
use std::io::Write;
use std::path::Path;

const PAGE_WIDTH: f32 = 595.0; // A4 portrait, points
const PAGE_HEIGHT: f32 = 842.0;
const MARGIN: f32 = 50.0;
const ROW_HEIGHT: f32 = 20.0;

const BODY_SIZE: f32 = 10.0;
const HEADER_SIZE: f32 = 11.0;
const TITLE_SIZE: f32 = 14.0;

/// Tabular PDF renderer for the monthly attendance sheet.
pub struct PdfSheet {
    pdf: Pdf,
    catalog_id: Ref,
    tree_id: Ref,
    font_id: Ref,
    page_ids: Vec<Ref>,
    next_id: i32,
}

impl PdfSheet {
    fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let tree_id = Ref::new(2);
        let font_id = Ref::new(3);

        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));

        Self {
            pdf,
            catalog_id,
            tree_id,
            font_id,
            page_ids: Vec::new(),
            next_id: 4,
        }
    }

    fn alloc_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// Register a page object and return the content stream id to fill.
    fn open_page(&mut self) -> Ref {
        let page_id = self.alloc_ref();
        let content_id = self.alloc_ref();
        self.page_ids.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.tree_id)
            .media_box(Rect::new(0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT))
            .contents(content_id);
        page.resources().fonts().pair(Name(b"F1"), self.font_id);

        content_id
    }

    fn close_page(&mut self, content_id: Ref, content: Content) {
        self.pdf.stream(content_id, &content.finish());
    }

    fn text(&self, content: &mut Content, x: f32, y: f32, size: f32, s: &str) {
        content.begin_text();
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(pdf_writer::Str(s.as_bytes()));
        content.end_text();
    }

    fn cell_border(&self, content: &mut Content, x: f32, y: f32, w: f32) {
        content.save_state();
        content.set_stroke_rgb(0.65, 0.65, 0.65);
        content.rect(x, y, w, ROW_HEIGHT);
        content.stroke();
        content.restore_state();
    }

    fn shade_row(&self, content: &mut Content, y: f32, width: f32, gray: f32) {
        content.save_state();
        content.set_fill_rgb(gray, gray, gray);
        content.rect(MARGIN, y, width, ROW_HEIGHT);
        content.fill_nonzero();
        content.restore_state();
    }

    fn row(&self, content: &mut Content, y: f32, widths: &[f32], cells: &[String], size: f32) {
        let mut x = MARGIN;
        for (cell, w) in cells.iter().zip(widths) {
            self.text(content, x + 4.0, y + 5.0, size, cell);
            self.cell_border(content, x, y, *w);
            x += w;
        }
    }

    fn save(mut self, path: &Path) -> std::io::Result<()> {
        self.pdf.catalog(self.catalog_id).pages(self.tree_id);

        let mut tree = self.pdf.pages(self.tree_id);
        tree.count(self.page_ids.len() as i32);
        tree.kids(self.page_ids.clone());
        drop(tree);

        let bytes = self.pdf.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}

/// Column widths estimated from content length, scaled down to fit the
/// printable width when needed.
fn column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<f32> {
    let mut widths: Vec<f32> = headers.iter().map(|h| h.len() as f32 * 6.5).collect();
    for row in rows {
        for (cell, w) in row.iter().zip(widths.iter_mut()) {
            *w = (cell.len() as f32 * 6.2).max(*w);
        }
    }

    let total: f32 = widths.iter().sum();
    let printable = PAGE_WIDTH - 2.0 * MARGIN;
    if total > printable {
        let scale = printable / total;
        for w in &mut widths {
            *w *= scale;
        }
    }
    widths
}

/// Render the monthly attendance report as a multipage PDF table, with
/// the summary block under the table on the last page.
pub fn write_pdf(path: &Path, report: &MonthReport) -> std::io::Result<()> {
    let headers = [
        "Day", "Date", "Wd", "Morning", "Afternoon", "Absence", "Total", "Signed",
    ];
    let rows: Vec<Vec<String>> = report
        .rows
        .iter()
        .map(|r| {
            vec![
                r.day.to_string(),
                r.date.clone(),
                r.weekday.clone(),
                r.morning.clone(),
                r.afternoon.clone(),
                r.absence.clone(),
                r.total.clone(),
                if r.signed { "x".to_string() } else { String::new() },
            ]
        })
        .collect();

    let title = report.title();
    let widths = column_widths(&headers, &rows);
    let table_width: f32 = widths.iter().sum();
    let header_row: Vec<String> = headers.iter().map(|s| s.to_string()).collect();

    let mut sheet = PdfSheet::new();
    let mut remaining: &[Vec<String>] = &rows;
    let mut page_no = 1;

    loop {
        let content_id = sheet.open_page();
        let mut content = Content::new();

        sheet.text(&mut content, MARGIN, PAGE_HEIGHT - MARGIN + 15.0, TITLE_SIZE, &title);
        sheet.text(
            &mut content,
            PAGE_WIDTH - MARGIN - 60.0,
            MARGIN - 35.0,
            BODY_SIZE,
            &format!("Page {}", page_no),
        );

        let mut y = PAGE_HEIGHT - MARGIN - 30.0;
        sheet.shade_row(&mut content, y, table_width, 0.86);
        sheet.row(&mut content, y, &widths, &header_row, HEADER_SIZE);
        y -= ROW_HEIGHT;

        let mut consumed = 0;
        for (i, row) in remaining.iter().enumerate() {
            if y - ROW_HEIGHT < MARGIN {
                break;
            }
            if i % 2 == 0 {
                sheet.shade_row(&mut content, y, table_width, 0.96);
            }
            sheet.row(&mut content, y, &widths, row, BODY_SIZE);
            y -= ROW_HEIGHT;
            consumed += 1;
        }
        remaining = &remaining[consumed..];

        if remaining.is_empty() {
            y -= ROW_HEIGHT;
            for line in report.footer_lines() {
                if y < MARGIN {
                    break;
                }
                sheet.text(&mut content, MARGIN, y, HEADER_SIZE, &line);
                y -= ROW_HEIGHT * 0.8;
            }
            sheet.close_page(content_id, content);
            break;
        }

        sheet.close_page(content_id, content);
        page_no += 1;
    }

    sheet.save(path)
}
