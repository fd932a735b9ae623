//! Nucleotide allele checks shared by the positional grammars.

/// True when `s`, trimmed, is exactly one of `A`, `C`, `G`, `T` (any case).
///
/// # Examples
///
/// ```
/// use ferro_input::allele::is_allele;
///
/// assert!(is_allele(" g"));
/// assert!(!is_allele("N"));
/// assert!(!is_allele("AC"));
/// ```
pub fn is_allele(s: &str) -> bool {
    matches!(s.trim().as_bytes(), [b] if is_base(*b))
}

/// Same as [`is_allele`] for an optional token; `None` is not an allele.
pub fn is_allele_opt(s: Option<&str>) -> bool {
    s.is_some_and(is_allele)
}

/// True when `s`, trimmed, is exactly `X/Y` with both sides valid alleles.
///
/// Inner whitespace is rejected, so `"a / c"` is not a pair.
pub fn is_ref_alt_pair(s: &str) -> bool {
    split_ref_alt_pair(s).is_some()
}

/// Split a ref/alt pair token into upper-cased alleles.
pub fn split_ref_alt_pair(s: &str) -> Option<(String, String)> {
    match s.trim().as_bytes() {
        [r, b'/', a] if is_base(*r) && is_base(*a) => Some((
            char::from(r.to_ascii_uppercase()).to_string(),
            char::from(a.to_ascii_uppercase()).to_string(),
        )),
        _ => None,
    }
}

/// True for a non-empty run of `A`, `C`, `G`, `T`, `N` (any case).
///
/// Used for VCF REF/ALT columns, which may carry more than one base.
pub fn is_nucleotide_sequence(s: &str) -> bool {
    !s.is_empty()
        && s
            .bytes()
            .all(|b| is_base(b) || b.eq_ignore_ascii_case(&b'N'))
}

/// Upper-case a validated allele.
pub fn normalize_allele(s: &str) -> String {
    s.trim().to_ascii_uppercase()
}

fn is_base(b: u8) -> bool {
    matches!(b.to_ascii_uppercase(), b'A' | b'C' | b'G' | b'T')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_allele() {
        for s in ["A", "c", " g", "T "] {
            assert!(is_allele(s), "{s:?}");
        }
        for s in ["B", "z", " e", "m ", "", "  ", "AC", "N", "/"] {
            assert!(!is_allele(s), "{s:?}");
        }
        assert!(!is_allele_opt(None));
        assert!(is_allele_opt(Some("t")));
    }

    #[test]
    fn test_is_ref_alt_pair() {
        for s in ["A/C", "c/t", " g/a", "T/T "] {
            assert!(is_ref_alt_pair(s), "{s:?}");
        }
        for s in ["AC", "K/B", "N/A", "a / c", "A/", "/C", "AA/C", "A//C", ""] {
            assert!(!is_ref_alt_pair(s), "{s:?}");
        }
    }

    #[test]
    fn test_split_ref_alt_pair_uppercases() {
        assert_eq!(
            split_ref_alt_pair(" c/t"),
            Some(("C".to_string(), "T".to_string()))
        );
        assert_eq!(split_ref_alt_pair("N/A"), None);
    }

    #[test]
    fn test_is_nucleotide_sequence() {
        assert!(is_nucleotide_sequence("A"));
        assert!(is_nucleotide_sequence("ACGTN"));
        assert!(is_nucleotide_sequence("acgt"));
        assert!(!is_nucleotide_sequence(""));
        assert!(!is_nucleotide_sequence("C/T"));
        assert!(!is_nucleotide_sequence("."));
        assert!(!is_nucleotide_sequence("<DEL>"));
    }
}
