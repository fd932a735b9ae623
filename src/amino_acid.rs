//! Amino acid codes used by the protein grammars.

use serde::Serialize;
use std::fmt;

/// Amino acid, including stop (`Ter`) and unknown (`Xaa`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AminoAcid {
    Ala,
    Arg,
    Asn,
    Asp,
    Cys,
    Gln,
    Glu,
    Gly,
    His,
    Ile,
    Leu,
    Lys,
    Met,
    Phe,
    Pro,
    Pyl,
    Sec,
    Ser,
    Thr,
    Trp,
    Tyr,
    Val,
    Ter,
    Xaa,
}

// (amino acid, one-letter, three-letter)
const CODES: [(AminoAcid, char, &str); 24] = [
    (AminoAcid::Ala, 'A', "Ala"),
    (AminoAcid::Arg, 'R', "Arg"),
    (AminoAcid::Asn, 'N', "Asn"),
    (AminoAcid::Asp, 'D', "Asp"),
    (AminoAcid::Cys, 'C', "Cys"),
    (AminoAcid::Gln, 'Q', "Gln"),
    (AminoAcid::Glu, 'E', "Glu"),
    (AminoAcid::Gly, 'G', "Gly"),
    (AminoAcid::His, 'H', "His"),
    (AminoAcid::Ile, 'I', "Ile"),
    (AminoAcid::Leu, 'L', "Leu"),
    (AminoAcid::Lys, 'K', "Lys"),
    (AminoAcid::Met, 'M', "Met"),
    (AminoAcid::Phe, 'F', "Phe"),
    (AminoAcid::Pro, 'P', "Pro"),
    (AminoAcid::Pyl, 'O', "Pyl"),
    (AminoAcid::Sec, 'U', "Sec"),
    (AminoAcid::Ser, 'S', "Ser"),
    (AminoAcid::Thr, 'T', "Thr"),
    (AminoAcid::Trp, 'W', "Trp"),
    (AminoAcid::Tyr, 'Y', "Tyr"),
    (AminoAcid::Val, 'V', "Val"),
    (AminoAcid::Ter, '*', "Ter"),
    (AminoAcid::Xaa, 'X', "Xaa"),
];

impl AminoAcid {
    /// Parse a one-letter code. Only upper case is accepted.
    pub fn from_one_letter(c: char) -> Option<Self> {
        CODES
            .iter()
            .find(|(_, one, _)| *one == c)
            .map(|(aa, _, _)| *aa)
    }

    /// Parse a three-letter code, ignoring case (`Ala`, `ALA`, `ala`).
    pub fn from_three_letter(s: &str) -> Option<Self> {
        CODES
            .iter()
            .find(|(_, _, three)| three.eq_ignore_ascii_case(s))
            .map(|(aa, _, _)| *aa)
    }

    /// Parse either a one- or three-letter code.
    pub fn parse(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_one_letter(c),
            _ if s.len() == 3 => Self::from_three_letter(s),
            _ => None,
        }
    }

    pub fn to_one_letter(&self) -> char {
        self.entry().1
    }

    pub fn to_three_letter(&self) -> &'static str {
        self.entry().2
    }

    fn entry(&self) -> &'static (AminoAcid, char, &'static str) {
        // CODES is declared in variant order
        &CODES[*self as usize]
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_three_letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_matches_variant_order() {
        for (i, (aa, _, _)) in CODES.iter().enumerate() {
            assert_eq!(*aa as usize, i);
        }
    }

    #[test]
    fn test_one_letter() {
        assert_eq!(AminoAcid::from_one_letter('V'), Some(AminoAcid::Val));
        assert_eq!(AminoAcid::from_one_letter('*'), Some(AminoAcid::Ter));
        assert_eq!(AminoAcid::from_one_letter('v'), None);
        assert_eq!(AminoAcid::from_one_letter('B'), None);
        assert_eq!(AminoAcid::Trp.to_one_letter(), 'W');
    }

    #[test]
    fn test_three_letter() {
        assert_eq!(AminoAcid::from_three_letter("Pro"), Some(AminoAcid::Pro));
        assert_eq!(AminoAcid::from_three_letter("GLU"), Some(AminoAcid::Glu));
        assert_eq!(AminoAcid::from_three_letter("ter"), Some(AminoAcid::Ter));
        assert_eq!(AminoAcid::from_three_letter("Foo"), None);
        assert_eq!(AminoAcid::Sec.to_three_letter(), "Sec");
    }

    #[test]
    fn test_parse_either_form() {
        assert_eq!(AminoAcid::parse("A"), Some(AminoAcid::Ala));
        assert_eq!(AminoAcid::parse("Ala"), Some(AminoAcid::Ala));
        assert_eq!(AminoAcid::parse("Al"), None);
        assert_eq!(AminoAcid::parse(""), None);
        assert_eq!(AminoAcid::parse("Alan"), None);
    }
}
