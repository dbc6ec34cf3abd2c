//! PDF letter renderer backed by printpdf's built-in Helvetica fonts
//!
//! printpdf writes the document information strings as raw UTF-8, which
//! viewers read as PDFDocEncoding. After serialization the `/Info` entries
//! are rewritten with lopdf as UTF-16BE text strings.

use super::letter_layout::{layout_letter, LetterLayout, PAGE_HEIGHT_MM, PAGE_WIDTH_MM};
use super::text_metrics::FontStyle;
use crate::config::LetterConfig;
use crate::constants::{LETTER_KEYWORDS, LETTER_TITLE};
use crate::error::{Result, SalaryError};
use crate::workflow::traits::DocumentRenderer;
use lopdf::{Dictionary, Object, StringFormat};
use printpdf::{
    BuiltinFont, CustomPdfConformance, IndirectFontRef, Mm, PdfConformance, PdfDocument,
    PdfDocumentReference, PdfLayerReference,
};
use salary_types::LetterFields;
use std::fmt::Debug;

const LAYER_NAME: &str = "Layer 1";

#[derive(Debug, Clone)]
pub struct PdfLetterRenderer {
    sender: String,
    creator: String,
}

impl Default for PdfLetterRenderer {
    fn default() -> Self {
        Self::new(&LetterConfig::default())
    }
}

impl PdfLetterRenderer {
    pub fn new(config: &LetterConfig) -> Self {
        Self {
            sender: config.sender.clone(),
            creator: config.creator.clone(),
        }
    }

    pub fn layout(&self, fields: &LetterFields) -> LetterLayout {
        layout_letter(fields, &self.sender)
    }

    fn new_document(&self, title: &str) -> (PdfDocumentReference, PdfLayerReference) {
        let (doc, page, layer) =
            PdfDocument::new(title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), LAYER_NAME);

        let doc = doc
            .with_conformance(PdfConformance::Custom(CustomPdfConformance {
                requires_icc_profile: false,
                requires_xmp_metadata: false,
                ..Default::default()
            }))
            .with_author(self.sender.clone())
            .with_subject(LETTER_TITLE)
            .with_creator(self.creator.clone())
            .with_keywords(vec![LETTER_KEYWORDS]);

        let layer = doc.get_page(page).get_layer(layer);
        (doc, layer)
    }

    /// Text entries of the document information dictionary
    fn document_info<'a>(&'a self, title: &'a str) -> [(&'static str, &'a str); 5] {
        [
            ("Title", title),
            ("Author", self.sender.as_str()),
            ("Subject", LETTER_TITLE),
            ("Creator", self.creator.as_str()),
            ("Keywords", LETTER_KEYWORDS),
        ]
    }
}

impl DocumentRenderer for PdfLetterRenderer {
    fn render(&self, fields: &LetterFields) -> Result<Vec<u8>> {
        let layout = self.layout(fields);
        let title = letter_title(fields);
        let (doc, first_layer) = self.new_document(&title);

        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| render_error("load Helvetica", e))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| render_error("load Helvetica-Bold", e))?;

        let mut layers = vec![first_layer];
        for _ in 1..layout.page_count {
            let (page, layer) = doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), LAYER_NAME);
            layers.push(doc.get_page(page).get_layer(layer));
        }

        for op in &layout.ops {
            let layer = layers
                .get(op.page)
                .ok_or_else(|| SalaryError::Render(format!("layout refers to missing page {}", op.page)))?;
            let font: &IndirectFontRef = match op.style {
                FontStyle::Regular => &regular,
                FontStyle::Bold => &bold,
            };
            layer.use_text(
                op.text.as_str(),
                op.size_pt,
                Mm(op.x_mm),
                Mm(PAGE_HEIGHT_MM - op.baseline_mm),
                font,
            );
        }

        log::debug!(
            "Rendered letter for {} ({} page(s), {} text runs)",
            fields.identifier,
            layout.page_count,
            layout.ops.len()
        );

        let bytes = doc
            .save_to_bytes()
            .map_err(|e| render_error("serialize document", e))?;
        rewrite_document_info(&bytes, &self.document_info(&title))
    }
}

/// `Lønregulering 2025 – First Last`
pub fn letter_title(fields: &LetterFields) -> String {
    format!("{} – {}", LETTER_TITLE, fields.full_name())
}

/// Encode `text` as a PDF text string: a `FE FF` byte order mark followed by UTF-16BE
pub fn pdf_text_string(text: &str) -> Vec<u8> {
    let mut encoded = Vec::with_capacity(2 + text.len() * 2);
    encoded.extend_from_slice(&[0xFE, 0xFF]);
    encoded.extend(text.encode_utf16().flat_map(u16::to_be_bytes));
    encoded
}

/// Replace the given `/Info` entries of a serialized PDF with UTF-16BE text strings
fn rewrite_document_info(pdf: &[u8], entries: &[(&str, &str)]) -> Result<Vec<u8>> {
    let mut document = lopdf::Document::load_mem(pdf).map_err(|e| render_error("reload document", e))?;

    let existing = document.trailer.get(b"Info").and_then(Object::as_reference);
    let info_id = match existing {
        Ok(id) => id,
        Err(_) => {
            let id = document.add_object(Dictionary::new());
            document.trailer.set("Info", id);
            id
        }
    };

    let info = document
        .get_object_mut(info_id)
        .and_then(Object::as_dict_mut)
        .map_err(|e| render_error("open document information", e))?;
    for (key, value) in entries {
        info.set(*key, Object::String(pdf_text_string(value), StringFormat::Hexadecimal));
    }

    let mut out = Vec::with_capacity(pdf.len());
    document
        .save_to(&mut out)
        .map_err(|e| render_error("write document information", e))?;
    Ok(out)
}

fn render_error<E: Debug>(action: &str, err: E) -> SalaryError {
    SalaryError::Render(format!("Failed to {}: {:?}", action, err))
}
