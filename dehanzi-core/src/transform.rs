use crate::classify::{contains_cjk, is_cjk_ideograph};

/// Characters that are reserved in common path syntax and get replaced by `_`
pub const RESERVED_CHARS: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// Substitute used for reserved characters
pub const RESERVED_SUBSTITUTE: char = '_';

/// Prefix of the generated name used when nothing printable is left
pub const FALLBACK_PREFIX: &str = "image_";

/// Split a file name into its base name and extension.
///
/// The split happens at the last dot. Names made only of leading dots plus a
/// suffix (`.jpg`, `..png`) have no extension, like hidden files elsewhere.
pub fn split_name(file_name: &str) -> (&str, Option<&str>) {
    match file_name.rsplit_once('.') {
        Some((base, ext)) if !base.trim_start_matches('.').is_empty() => (base, Some(ext)),
        _ => (file_name, None),
    }
}

/// Replace every CJK ideograph in `base` with `replacement`.
///
/// Each ideograph is substituted on its own, so a run of three ideographs
/// with replacement `-` becomes `---`.
pub fn replace_cjk(base: &str, replacement: &str) -> String {
    let mut out = String::with_capacity(base.len());
    for c in base.chars() {
        if is_cjk_ideograph(c) {
            out.push_str(replacement);
        } else {
            out.push(c);
        }
    }
    out
}

/// Generated base name for the `n`th successful rename of a run (1-based)
pub fn fallback_name(n: usize) -> String {
    format!("{FALLBACK_PREFIX}{n}")
}

/// Replace characters that are unsafe in file names with `_`
pub fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| {
            if RESERVED_CHARS.contains(&c) {
                RESERVED_SUBSTITUTE
            } else {
                c
            }
        })
        .collect()
}

/// Build the new base name for `base`, or `None` if it has no CJK ideographs.
///
/// `successes` is the number of files renamed so far in the run; it numbers
/// the fallback name when the substitution leaves only whitespace.
pub fn candidate_base(base: &str, replacement: &str, successes: usize) -> Option<String> {
    if !contains_cjk(base) {
        return None;
    }

    let mut candidate = replace_cjk(base, replacement);
    if candidate.trim().is_empty() {
        candidate = fallback_name(successes + 1);
    }

    Some(sanitize(&candidate))
}
