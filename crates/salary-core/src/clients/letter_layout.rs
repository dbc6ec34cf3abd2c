//! Page layout for the salary regulation letter
//!
//! Layout is computed into a flat list of positioned text runs before any
//! PDF object exists, so pagination and wrapping can be checked on their own.
//! Coordinates are millimetres measured from the top-left corner of the page.

use super::text_metrics::{text_width_mm, to_win_ansi_text, wrap_text, FontStyle, PT_TO_MM};
use crate::constants::LETTER_TITLE;
use salary_types::LetterFields;

pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;
pub const MARGIN_MM: f32 = 20.0;
/// Content never extends below `PAGE_HEIGHT_MM - PAGE_BREAK_MM`
pub const PAGE_BREAK_MM: f32 = 20.0;

const BODY_SIZE: f32 = 12.0;
const HEADING_SIZE: f32 = 14.0;
const TITLE_SIZE: f32 = 18.0;
const LINE_HEIGHT: f32 = 7.0;
const TITLE_HEIGHT: f32 = 15.0;
const BULLET_INDENT: f32 = 10.0;

const INTRO: &str = "Lønreguleringen 2025 for HK medarbejdere er nu afsluttet, og i dette brev kan du læse om hvad det betyder for dig.";
const AGREEMENT_HEADING: &str = "Regulering i henhold til overenskomst";
const AGREEMENT_TEXT: &str = "Følgende regulering er fastlagt i overenskomsten med virkning 1. maj 2025:";
const INDIVIDUAL_HEADING: &str = "Individuel lønregulering";
const PAYMENT_TEXT: &str = "Denne individuelle regulering vil finde sted ved lønudbetalingen ultimo juni måned 2025.";
const CLOSING: &str = "Med venlig hilsen";

/// One piece of text at a fixed position
#[derive(Debug, Clone, PartialEq)]
pub struct TextOp {
    /// Zero-based page index
    pub page: usize,
    pub x_mm: f32,
    /// Baseline distance from the top edge
    pub baseline_mm: f32,
    pub style: FontStyle,
    pub size_pt: f32,
    pub text: String,
}

#[derive(Debug, Clone, Default)]
pub struct LetterLayout {
    pub ops: Vec<TextOp>,
    pub page_count: usize,
}

impl LetterLayout {
    /// All text of one page in drawing order, joined with spaces
    pub fn page_text(&self, page: usize) -> String {
        self.ops
            .iter()
            .filter(|op| op.page == page)
            .map(|op| op.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A style switch inside a flowing paragraph
#[derive(Debug, Clone)]
pub struct Run {
    pub style: FontStyle,
    pub text: String,
}

impl Run {
    pub fn regular(text: impl Into<String>) -> Self {
        Self { style: FontStyle::Regular, text: text.into() }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self { style: FontStyle::Bold, text: text.into() }
    }
}

/// Cursor-based writer with automatic page breaks
pub struct LayoutCursor {
    ops: Vec<TextOp>,
    page: usize,
    x: f32,
    y: f32,
    style: FontStyle,
    size: f32,
}

impl Default for LayoutCursor {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutCursor {
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            page: 0,
            x: MARGIN_MM,
            y: MARGIN_MM,
            style: FontStyle::Regular,
            size: BODY_SIZE,
        }
    }

    pub fn set_font(&mut self, style: FontStyle, size_pt: f32) {
        self.style = style;
        self.size = size_pt;
    }

    /// Move to the left margin, `h` millimetres further down
    pub fn ln(&mut self, h: f32) {
        self.x = MARGIN_MM;
        self.y += h;
    }

    pub fn indent(&mut self, dx: f32) {
        self.x += dx;
    }

    /// Single line centred between the margins
    pub fn centered_line(&mut self, h: f32, text: &str) {
        self.ensure_room(h);
        let width = text_width_mm(text, self.style, self.size);
        let x = MARGIN_MM + (content_width() - width).max(0.0) / 2.0;
        self.push(x, h, text, self.style);
        self.ln(h);
    }

    /// Wrapped paragraph starting at the current x; every line keeps that x
    pub fn paragraph(&mut self, h: f32, text: &str) {
        let left = self.x;
        let width = PAGE_WIDTH_MM - MARGIN_MM - left;
        for line in wrap_text(text, self.style, self.size, width) {
            self.ensure_room(h);
            self.push(left, h, &line, self.style);
            self.y += h;
        }
        self.x = MARGIN_MM;
    }

    /// Flow mixed-style runs word by word. The cursor stays on the last line,
    /// so follow with `ln`.
    pub fn flow(&mut self, h: f32, runs: &[Run]) {
        let right = PAGE_WIDTH_MM - MARGIN_MM;
        let size = self.size;

        for (style, word, spaced) in split_runs(runs) {
            let width = text_width_mm(&word, style, size);
            let space = if spaced && self.x > MARGIN_MM {
                text_width_mm(" ", style, size)
            } else {
                0.0
            };

            if self.x > MARGIN_MM && self.x + space + width > right {
                self.ln(h);
            } else {
                self.x += space;
            }

            self.ensure_room(h);
            self.push(self.x, h, &word, style);
            self.x += width;
        }
    }

    pub fn finish(self) -> LetterLayout {
        LetterLayout {
            page_count: self.page + 1,
            ops: self.ops,
        }
    }

    fn ensure_room(&mut self, h: f32) {
        if self.y + h > PAGE_HEIGHT_MM - PAGE_BREAK_MM {
            self.page += 1;
            self.y = MARGIN_MM;
        }
    }

    fn push(&mut self, x: f32, h: f32, text: &str, style: FontStyle) {
        // Vertically centre the glyphs in the cell
        let baseline = self.y + h / 2.0 + 0.3 * self.size * PT_TO_MM;
        self.ops.push(TextOp {
            page: self.page,
            x_mm: x,
            baseline_mm: baseline,
            style,
            size_pt: self.size,
            text: to_win_ansi_text(text).into_owned(),
        });
    }
}

fn content_width() -> f32 {
    PAGE_WIDTH_MM - 2.0 * MARGIN_MM
}

/// (style, word, preceded by whitespace)
fn split_runs(runs: &[Run]) -> Vec<(FontStyle, String, bool)> {
    let mut words = Vec::new();
    let mut space_pending = false;

    for run in runs {
        for (i, piece) in run.text.split(' ').enumerate() {
            if i > 0 {
                space_pending = true;
            }
            if piece.is_empty() {
                continue;
            }
            words.push((run.style, piece.to_string(), space_pending));
            space_pending = false;
        }
    }
    words
}

/// Lay out the complete letter for one employee
pub fn layout_letter(fields: &LetterFields, sender: &str) -> LetterLayout {
    let mut cursor = LayoutCursor::new();

    cursor.set_font(FontStyle::Bold, TITLE_SIZE);
    cursor.centered_line(TITLE_HEIGHT, LETTER_TITLE);
    cursor.ln(5.0);

    cursor.set_font(FontStyle::Regular, BODY_SIZE);
    cursor.paragraph(LINE_HEIGHT, &format!("Kære {}", fields.full_name()));
    cursor.ln(3.0);
    cursor.paragraph(LINE_HEIGHT, INTRO);
    cursor.ln(5.0);

    cursor.set_font(FontStyle::Bold, HEADING_SIZE);
    cursor.paragraph(LINE_HEIGHT, AGREEMENT_HEADING);
    cursor.ln(2.0);

    cursor.set_font(FontStyle::Regular, BODY_SIZE);
    cursor.paragraph(LINE_HEIGHT, AGREEMENT_TEXT);
    cursor.ln(2.0);

    cursor.indent(BULLET_INDENT);
    cursor.paragraph(
        LINE_HEIGHT,
        &format!("• Forhøjelse af pensionsbidrag med {}%", fields.pension_increase),
    );
    cursor.ln(5.0);

    cursor.set_font(FontStyle::Bold, HEADING_SIZE);
    cursor.paragraph(LINE_HEIGHT, INDIVIDUAL_HEADING);
    cursor.ln(2.0);

    cursor.set_font(FontStyle::Regular, BODY_SIZE);
    cursor.paragraph(
        LINE_HEIGHT,
        &format!(
            "Din nærmeste leder har besluttet, at du ud over den nævnte stigning i overenskomsten også skal have en individuel lønregulering gældende pr. {}.",
            fields.effective_date
        ),
    );
    cursor.ln(5.0);

    cursor.flow(
        LINE_HEIGHT,
        &[
            Run::regular("Din basisløn er blevet reguleret til "),
            Run::bold(format!("{} kr.", fields.new_base_salary)),
            Run::regular(" og din nye bruttoløn udgør nu "),
            Run::bold(format!("{} kr.", fields.new_gross_salary)),
            Run::regular(format!(
                " Den individuelle lønregulering på din bruttoløn er {} kr., svarende til en stigning på {}%.",
                fields.individual_adjustment, fields.percentage_increase
            )),
        ],
    );
    cursor.ln(10.0);

    cursor.paragraph(
        LINE_HEIGHT,
        &format!("Din nye løn er med tilbagevirkende kraft fra den {}.", fields.effective_date),
    );
    cursor.ln(3.0);
    cursor.paragraph(LINE_HEIGHT, PAYMENT_TEXT);
    cursor.ln(10.0);

    cursor.paragraph(LINE_HEIGHT, CLOSING);
    cursor.ln(1.0);
    cursor.set_font(FontStyle::Bold, BODY_SIZE);
    cursor.paragraph(LINE_HEIGHT, sender);

    cursor.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> LetterFields {
        LetterFields {
            identifier: "150392-4821".to_string(),
            first_name: "Lærke".to_string(),
            last_name: "Østergaard".to_string(),
            base_salary: "30000.00".to_string(),
            new_base_salary: "30750.00".to_string(),
            gross_salary: "36000.00".to_string(),
            new_gross_salary: "36900.00".to_string(),
            individual_adjustment: "750.00".to_string(),
            percentage_increase: "2.50".to_string(),
            effective_date: "1. marts 2025".to_string(),
            pension_increase: "1.00".to_string(),
            letter_type: None,
        }
    }

    #[test]
    fn test_standard_letter_fits_one_page() {
        let layout = layout_letter(&fields(), "HR Services & Compensation");
        assert_eq!(layout.page_count, 1);
        assert!(layout.ops.iter().all(|op| op.page == 0));
    }

    #[test]
    fn test_section_order() {
        let text = layout_letter(&fields(), "HR Services & Compensation").page_text(0);
        let positions: Vec<usize> = [
            "Lønregulering 2025",
            "Kære Lærke Østergaard",
            "Regulering i henhold til overenskomst",
            "• Forhøjelse af pensionsbidrag med 1.00%",
            "Individuel lønregulering",
            "30750.00",
            "36900.00",
            "tilbagevirkende",
            "ultimo juni",
            "Med venlig hilsen",
            "HR Services & Compensation",
        ]
        .iter()
        .map(|needle| text.find(needle).unwrap_or_else(|| panic!("missing {needle}")))
        .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
    }

    #[test]
    fn test_title_is_centered_and_bold() {
        let layout = layout_letter(&fields(), "HR");
        let title = &layout.ops[0];
        assert_eq!(title.text, "Lønregulering 2025");
        assert_eq!(title.style, FontStyle::Bold);
        assert_eq!(title.size_pt, TITLE_SIZE);

        let width = text_width_mm(&title.text, FontStyle::Bold, TITLE_SIZE);
        let left_gap = title.x_mm - MARGIN_MM;
        let right_gap = PAGE_WIDTH_MM - MARGIN_MM - (title.x_mm + width);
        assert!((left_gap - right_gap).abs() < 0.01);
    }

    #[test]
    fn test_salary_figures_are_bold_runs() {
        let layout = layout_letter(&fields(), "HR");
        let bold: Vec<&str> = layout
            .ops
            .iter()
            .filter(|op| op.style == FontStyle::Bold && op.size_pt == BODY_SIZE)
            .map(|op| op.text.as_str())
            .collect();
        assert_eq!(bold, vec!["30750.00", "kr.", "36900.00", "kr.", "HR"]);
    }

    #[test]
    fn test_bullet_is_indented() {
        let layout = layout_letter(&fields(), "HR");
        let bullet = layout
            .ops
            .iter()
            .find(|op| op.text.starts_with('•'))
            .expect("bullet line");
        assert_eq!(bullet.x_mm, MARGIN_MM + BULLET_INDENT);
    }

    #[test]
    fn test_text_stays_inside_margins() {
        let layout = layout_letter(&fields(), "HR Services & Compensation");
        for op in &layout.ops {
            let width = text_width_mm(&op.text, op.style, op.size_pt);
            assert!(op.x_mm >= MARGIN_MM);
            assert!(op.x_mm + width <= PAGE_WIDTH_MM - MARGIN_MM + 0.01, "{op:?}");
            assert!(op.baseline_mm <= PAGE_HEIGHT_MM - PAGE_BREAK_MM);
        }
    }

    #[test]
    fn test_long_content_breaks_pages() {
        let mut long = fields();
        long.effective_date = "1. marts 2025 ".repeat(300);
        let layout = layout_letter(&long, "HR");

        assert!(layout.page_count > 1);
        for op in &layout.ops {
            assert!(op.baseline_mm > MARGIN_MM);
            assert!(op.baseline_mm <= PAGE_HEIGHT_MM - PAGE_BREAK_MM);
        }
        assert!(layout.page_text(layout.page_count - 1).ends_with("HR"));
    }

    #[test]
    fn test_unencodable_names_are_replaced() {
        let mut f = fields();
        f.first_name = "Łucja".to_string();
        let text = layout_letter(&f, "HR").page_text(0);
        assert!(text.contains("Kære ?ucja Østergaard"));
    }

    #[test]
    fn test_split_runs_keeps_boundaries() {
        let words = split_runs(&[Run::regular("til "), Run::bold("100.00 kr."), Run::regular(" og")]);
        let spaced: Vec<(String, bool)> = words.into_iter().map(|(_, w, s)| (w, s)).collect();
        assert_eq!(
            spaced,
            vec![
                ("til".to_string(), false),
                ("100.00".to_string(), true),
                ("kr.".to_string(), true),
                ("og".to_string(), true),
            ]
        );
    }
}
