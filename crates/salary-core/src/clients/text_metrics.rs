//! Helvetica text measurement and WinAnsi (CP-1252) text translation
//!
//! The built-in PDF fonts only cover CP-1252, so every string is translated
//! before it reaches the document and measured with the standard Helvetica
//! advance widths (1/1000 em).

use std::borrow::Cow;

pub const PT_TO_MM: f32 = 25.4 / 72.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontStyle {
    Regular,
    Bold,
}

/// Advance widths for ' ' (0x20) through '~' (0x7E)
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    278, 278, 584, 584, 584, 556, 1015, // ':'..'@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N'..'Z'
    278, 278, 278, 469, 556, 333, // '['..'`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // 'a'..'m'
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // 'n'..'z'
    334, 260, 334, 584, // '{'..'~'
];

const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];

/// CP-1252 code points 0x80-0x9F that are not Latin-1
const WIN_ANSI_EXTRAS: &str = "€‚ƒ„…†‡ˆ‰Š‹ŒŽ‘’“”•–—˜™š›œžŸ";

pub fn char_width(c: char, style: FontStyle) -> u16 {
    if (' '..='~').contains(&c) {
        let index = c as usize - 0x20;
        return match style {
            FontStyle::Regular => HELVETICA_WIDTHS[index],
            FontStyle::Bold => HELVETICA_BOLD_WIDTHS[index],
        };
    }

    match (c, style) {
        ('æ', _) => 889,
        ('Æ', _) | ('—', _) => 1000,
        ('ø', _) => 611,
        ('Ø', _) => 778,
        ('Å', FontStyle::Regular) => 667,
        ('Å', FontStyle::Bold) => 722,
        ('•', _) => 350,
        ('–', _) => 556,
        _ => 556,
    }
}

/// Rendered width in millimetres
pub fn text_width_mm(text: &str, style: FontStyle, size_pt: f32) -> f32 {
    let units: u32 = text.chars().map(|c| u32::from(char_width(c, style))).sum();
    units as f32 / 1000.0 * size_pt * PT_TO_MM
}

pub fn is_win_ansi(c: char) -> bool {
    matches!(c as u32, 0x20..=0x7E | 0xA0..=0xFF) || WIN_ANSI_EXTRAS.contains(c)
}

/// Replace every character CP-1252 cannot encode with `?`
pub fn to_win_ansi_text(text: &str) -> Cow<'_, str> {
    if text.chars().all(is_win_ansi) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.chars().map(|c| if is_win_ansi(c) { c } else { '?' }).collect())
}

/// Greedy word wrap. A single word wider than `max_width_mm` gets a line of its own.
pub fn wrap_text(text: &str, style: FontStyle, size_pt: f32, max_width_mm: f32) -> Vec<String> {
    let space = text_width_mm(" ", style, size_pt);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0;

    for word in text.split_whitespace() {
        let width = text_width_mm(word, style, size_pt);
        if current.is_empty() {
            current.push_str(word);
            current_width = width;
        } else if current_width + space + width <= max_width_mm {
            current.push(' ');
            current.push_str(word);
            current_width += space + width;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = width;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
