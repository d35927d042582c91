//! Place string normalization
//!
//! Every strategy matches on the key produced here:
//! 1. lowercase
//! 2. diacritics folded to base Latin letters (ß -> ss, æ -> ae, ...)
//! 3. internal whitespace collapsed
//! 4. leading/trailing list punctuation and brackets stripped
//!
//! Internal commas are kept; they separate the levels of a hierarchical
//! place ("kilbrittain, co. cork, ireland").

use regex::Regex;

lazy_static::lazy_static! {
    static ref WHITESPACE_RE: Regex = Regex::new(r"\s+").unwrap();
    static ref EDGE_PUNCT_RE: Regex =
        Regex::new(r#"^[\s,.;:!?"'()\[\]\-]+|[\s,.;:!?"'()\[\]\-]+$"#).unwrap();
    static ref TOKEN_SPLIT_RE: Regex = Regex::new(r"[^\p{L}\p{N}]+").unwrap();
}

/// Canonical matching key for a raw place string.
pub fn normalize_place(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let folded = fold_diacritics(&lowered);
    let collapsed = WHITESPACE_RE.replace_all(folded.trim(), " ");
    EDGE_PUNCT_RE.replace_all(&collapsed, "").into_owned()
}

/// Fold accented Latin letters to their base form.
///
/// Expects lowercase input. Combining marks are dropped.
pub fn fold_diacritics(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => out.push('a'),
            'æ' => out.push_str("ae"),
            'ç' | 'ć' | 'ĉ' | 'ċ' | 'č' => out.push('c'),
            'ď' | 'đ' | 'ð' => out.push('d'),
            'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => out.push('e'),
            'ĝ' | 'ğ' | 'ġ' | 'ģ' => out.push('g'),
            'ĥ' | 'ħ' => out.push('h'),
            'ì' | 'í' | 'î' | 'ï' | 'ĩ' | 'ī' | 'ĭ' | 'į' | 'ı' => out.push('i'),
            'ĵ' => out.push('j'),
            'ķ' => out.push('k'),
            'ĺ' | 'ļ' | 'ľ' | 'ŀ' | 'ł' => out.push('l'),
            'ñ' | 'ń' | 'ņ' | 'ň' => out.push('n'),
            'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ŏ' | 'ő' => out.push('o'),
            'œ' => out.push_str("oe"),
            'ŕ' | 'ŗ' | 'ř' => out.push('r'),
            'ś' | 'ŝ' | 'ş' | 'š' | 'ș' => out.push('s'),
            'ß' => out.push_str("ss"),
            'ţ' | 'ť' | 'ŧ' | 'ț' => out.push('t'),
            'þ' => out.push_str("th"),
            'ù' | 'ú' | 'û' | 'ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => out.push('u'),
            'ŵ' => out.push('w'),
            'ý' | 'ÿ' | 'ŷ' => out.push('y'),
            'ź' | 'ż' | 'ž' => out.push('z'),
            '\u{0300}'..='\u{036f}' => {}
            _ => out.push(c),
        }
    }
    out
}

/// Alphanumeric tokens of a normalized string.
pub fn tokens(normalized: &str) -> Vec<&str> {
    TOKEN_SPLIT_RE
        .split(normalized)
        .filter(|t| !t.is_empty())
        .collect()
}

/// Tokens joined by single spaces; used for token-boundary containment.
pub fn token_key(normalized: &str) -> String {
    tokens(normalized).join(" ")
}

/// Final comma-separated level of a hierarchical place, if there is more than one level.
pub fn last_segment(normalized: &str) -> Option<String> {
    let (_, last) = normalized.rsplit_once(',')?;
    let segment = EDGE_PUNCT_RE.replace_all(last.trim(), "").into_owned();
    if segment.is_empty() {
        None
    } else {
        Some(segment)
    }
}

/// Whether `needle` occurs in `haystack` on token boundaries.
///
/// Both arguments are token keys.
pub fn contains_tokens(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() || needle.len() > haystack.len() {
        return false;
    }
    haystack == needle
        || haystack.starts_with(&format!("{} ", needle))
        || haystack.ends_with(&format!(" {}", needle))
        || haystack.contains(&format!(" {} ", needle))
}
