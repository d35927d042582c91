//! Edit-distance similarity

/// Normalized similarity: `1 - distance / max(len(a), len(b))`.
pub fn similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let distance = levenshtein_distance(a, b);
    let max_len = a.chars().count().max(b.chars().count());

    1.0 - (distance as f64 / max_len as f64)
}

/// Highest similarity `a` and `b` could reach given only their lengths.
///
/// Lets the fuzzy matcher skip names that cannot clear its floor.
pub fn similarity_upper_bound(a_len: usize, b_len: usize) -> f64 {
    let max_len = a_len.max(b_len);
    if max_len == 0 {
        return 1.0;
    }
    a_len.min(b_len) as f64 / max_len as f64
}

/// Levenshtein distance over chars, two-row table.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let a_len = a_chars.len();
    let b_len = b_chars.len();

    if a_len == 0 {
        return b_len;
    }
    if b_len == 0 {
        return a_len;
    }

    let mut prev: Vec<usize> = (0..=b_len).collect();
    let mut curr = vec![0; b_len + 1];

    for i in 1..=a_len {
        curr[0] = i;
        for j in 1..=b_len {
            let cost = if a_chars[i - 1] == b_chars[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1)
                .min(curr[j - 1] + 1)
                .min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_len]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("", "abc"), 3);
        assert_eq!(levenshtein_distance("abc", ""), 3);
        assert_eq!(levenshtein_distance("abc", "abc"), 0);
        assert_eq!(levenshtein_distance("abc", "abd"), 1);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("irland", "ireland"), 1);
    }

    #[test]
    fn test_similarity() {
        assert!((similarity("france", "france") - 1.0).abs() < 1e-9);
        assert!((similarity("irland", "ireland") - (1.0 - 1.0 / 7.0)).abs() < 1e-9);
        assert!(similarity("germny", "germany") > 0.8);
        assert!(similarity("xyzzyplace123", "france") < 0.5);
        assert_eq!(similarity("", "france"), 0.0);
    }

    #[test]
    fn test_upper_bound_is_an_upper_bound() {
        let pairs = [("irland", "ireland"), ("de", "germany"), ("spain", "spain")];
        for (a, b) in pairs {
            let bound = similarity_upper_bound(a.chars().count(), b.chars().count());
            assert!(similarity(a, b) <= bound + 1e-9, "{} vs {}", a, b);
        }
    }
}
