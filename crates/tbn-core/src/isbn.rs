//! ISBN cleanup shared by manual entry, imports and barcode capture.
//!
//! A decoded barcode is treated exactly like typed input: everything except
//! ASCII digits and the `X` check character is stripped.

/// Strip an ISBN down to digits and `X` (a lowercase `x` is upper-cased).
#[must_use]
pub fn clean_isbn(raw: &str) -> String {
    raw.chars()
        .filter_map(|c| match c {
            '0'..='9' | 'X' => Some(c),
            'x' => Some('X'),
            _ => None,
        })
        .collect()
}

/// Like [`clean_isbn`], but `None` when nothing usable remains.
#[must_use]
pub fn clean_optional_isbn(raw: Option<&str>) -> Option<String> {
    raw.map(clean_isbn).filter(|isbn| !isbn.is_empty())
}
