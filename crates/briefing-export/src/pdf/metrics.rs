//! Advance widths for the three standard Type1 fonts the PDF backend uses,
//! and the WinAnsi encoding their text is written in.

use briefing_core::theme::Typeface;

/// Helvetica widths for U+0020..=U+007E, in 1/1000 em.
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0'..'?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P'..'_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`'..'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 'p'..'~'
];

/// Helvetica-Bold widths for U+0020..=U+007E, in 1/1000 em.
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, // '0'..'?'
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, // 'P'..'_'
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, // '`'..'o'
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, // 'p'..'~'
];

const COURIER: u16 = 600;

/// PDF base font name for a typeface.
pub fn base_font(face: Typeface) -> &'static [u8] {
    match face {
        Typeface::Sans => b"Helvetica",
        Typeface::SansBold => b"Helvetica-Bold",
        Typeface::Mono => b"Courier",
    }
}

/// Advance width of `ch` in 1/1000 em. Characters WinAnsi cannot encode
/// are measured as the `?` they will be written as.
pub fn char_width(face: Typeface, ch: char) -> u16 {
    if face == Typeface::Mono {
        return COURIER;
    }
    let bold = face == Typeface::SansBold;
    match ch {
        ' '..='~' => {
            let idx = ch as usize - 0x20;
            if bold { HELVETICA_BOLD[idx] } else { HELVETICA[idx] }
        }
        '\u{2022}' => 350,
        '\u{2013}' => 556,
        '\u{2014}' | '\u{2026}' => 1000,
        '\u{2018}' | '\u{2019}' => {
            if bold { 278 } else { 222 }
        }
        '\u{201C}' | '\u{201D}' => {
            if bold { 500 } else { 333 }
        }
        '\u{00A0}' => 278,
        '\u{00A1}'..='\u{00FF}' => 556,
        _ => char_width(face, '?'),
    }
}

/// Width of `text` set in `face` at `size` points.
pub fn text_width(face: Typeface, text: &str, size: f32) -> f32 {
    let units: u32 = text.chars().map(|c| u32::from(char_width(face, c))).sum();
    units as f32 * size / 1000.0
}

/// Encode `text` as WinAnsi bytes for a `Tj` operand.
pub fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| match ch {
            ' '..='~' => ch as u8,
            '\u{00A0}'..='\u{00FF}' => ch as u32 as u8,
            '\u{2026}' => 0x85,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            '\u{2022}' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            _ => b'?',
        })
        .collect()
}
