//! Character-level normalization shared by the notation decoders.
//!
//! All helpers work on `char`s. The catalog mixes full-width and half-width
//! forms freely, and every glyph in the vocabulary is multi-byte in UTF-8.

/// Half-width space, ideographic space, and tab.
pub(crate) fn is_space(ch: char) -> bool {
    matches!(ch, ' ' | '\u{3000}' | '\t')
}

/// Folds the full-width ASCII block (`！`..`～`) to ASCII.
pub(crate) fn fold_fullwidth(ch: char) -> char {
    match ch {
        '\u{FF01}'..='\u{FF5E}' => char::from_u32(u32::from(ch) - 0xFEE0).unwrap_or(ch),
        _ => ch,
    }
}

/// Dash-like separators, including the tilde forms used for ranges.
///
/// Expects input already passed through [`fold_fullwidth`].
pub(crate) fn is_dash(ch: char) -> bool {
    matches!(
        ch,
        '-' | 'ー' | '‐' | '‑' | '−' | '–' | '—' | '~' | '〜'
    )
}

/// Middle dots used to join weekdays or year endpoints.
pub(crate) fn is_middle_dot(ch: char) -> bool {
    matches!(ch, '・' | '･' | '·')
}

/// Expects input already passed through [`fold_fullwidth`].
pub(crate) fn is_comma(ch: char) -> bool {
    matches!(ch, ',' | '、')
}
