/// First code point of the CJK Unified Ideographs block.
pub const CJK_UNIFIED_START: char = '\u{4E00}';

/// Last code point of the CJK Unified Ideographs block.
pub const CJK_UNIFIED_END: char = '\u{9FFF}';

/// Check whether a character lies in the CJK Unified Ideographs block.
///
/// Only U+4E00..=U+9FFF is covered. Extension blocks (U+3400..=U+4DBF,
/// U+20000 and above) and CJK punctuation are not treated as ideographs.
pub fn is_cjk_ideograph(c: char) -> bool {
    (CJK_UNIFIED_START..=CJK_UNIFIED_END).contains(&c)
}

/// Check whether any character of `s` is a CJK ideograph
pub fn contains_cjk(s: &str) -> bool {
    s.chars().any(is_cjk_ideograph)
}
