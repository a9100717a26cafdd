use bimap::BiMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// ALU control field of a computation instruction.
///
/// Codes are the 7 bits `a c1 c2 c3 c4 c5 c6`; `a` selects `M` instead of `A`
/// as the second operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Comp {
    Zero,
    One,
    MinusOne,
    D,
    A,
    M,
    NotD,
    NotA,
    NotM,
    NegD,
    NegA,
    NegM,
    DPlusOne,
    APlusOne,
    MPlusOne,
    DMinusOne,
    AMinusOne,
    MMinusOne,
    DPlusA,
    DPlusM,
    DMinusA,
    DMinusM,
    AMinusD,
    MMinusD,
    DAndA,
    DAndM,
    DOrA,
    DOrM,
}

static COMP_TABLE: Lazy<Vec<(Comp, &'static str, u8)>> = Lazy::new(|| {
    use Comp::*;
    vec![
        (Zero, "0", 0b0101010),
        (One, "1", 0b0111111),
        (MinusOne, "-1", 0b0111010),
        (D, "D", 0b0001100),
        (A, "A", 0b0110000),
        (M, "M", 0b1110000),
        (NotD, "!D", 0b0001101),
        (NotA, "!A", 0b0110001),
        (NotM, "!M", 0b1110001),
        (NegD, "-D", 0b0001111),
        (NegA, "-A", 0b0110011),
        (NegM, "-M", 0b1110011),
        (DPlusOne, "D+1", 0b0011111),
        (APlusOne, "A+1", 0b0110111),
        (MPlusOne, "M+1", 0b1110111),
        (DMinusOne, "D-1", 0b0001110),
        (AMinusOne, "A-1", 0b0110010),
        (MMinusOne, "M-1", 0b1110010),
        (DPlusA, "D+A", 0b0000010),
        (DPlusM, "D+M", 0b1000010),
        (DMinusA, "D-A", 0b0010011),
        (DMinusM, "D-M", 0b1010011),
        (AMinusD, "A-D", 0b0000111),
        (MMinusD, "M-D", 0b1000111),
        (DAndA, "D&A", 0b0000000),
        (DAndM, "D&M", 0b1000000),
        (DOrA, "D|A", 0b0010101),
        (DOrM, "D|M", 0b1010101),
    ]
});

static COMP_STR: Lazy<BiMap<Comp, &'static str>> = Lazy::new(|| {
    let mut map = BiMap::new();
    for (comp, name, _) in COMP_TABLE.iter() {
        map.insert(*comp, *name);
    }
    map
});

static COMP_BIN: Lazy<BiMap<Comp, u8>> = Lazy::new(|| {
    let mut map = BiMap::new();
    for (comp, _, bits) in COMP_TABLE.iter() {
        map.insert(*comp, *bits);
    }
    map
});

impl Comp {
    pub fn parse(s: &str) -> Option<Comp> {
        COMP_STR.get_by_right(s).copied()
    }

    pub fn from_bits(bits: u8) -> Option<Comp> {
        COMP_BIN.get_by_right(&bits).copied()
    }

    pub fn mnemonic(&self) -> &'static str {
        COMP_STR.get_by_left(self).copied().unwrap_or("?")
    }

    pub fn bits(&self) -> u8 {
        COMP_BIN.get_by_left(self).copied().unwrap_or(0)
    }

    /// Reads `M` (the memory word at `A`).
    pub fn uses_m(&self) -> bool {
        self.bits() & 0b1000000 != 0
    }

    /// ALU model. All arithmetic wraps at 16 bits.
    pub fn eval(&self, d: u16, a: u16, m: u16) -> u16 {
        use Comp::*;
        match self {
            Zero => 0,
            One => 1,
            MinusOne => 0xFFFF,
            D => d,
            A => a,
            M => m,
            NotD => !d,
            NotA => !a,
            NotM => !m,
            NegD => d.wrapping_neg(),
            NegA => a.wrapping_neg(),
            NegM => m.wrapping_neg(),
            DPlusOne => d.wrapping_add(1),
            APlusOne => a.wrapping_add(1),
            MPlusOne => m.wrapping_add(1),
            DMinusOne => d.wrapping_sub(1),
            AMinusOne => a.wrapping_sub(1),
            MMinusOne => m.wrapping_sub(1),
            DPlusA => d.wrapping_add(a),
            DPlusM => d.wrapping_add(m),
            DMinusA => d.wrapping_sub(a),
            DMinusM => d.wrapping_sub(m),
            AMinusD => a.wrapping_sub(d),
            MMinusD => m.wrapping_sub(d),
            DAndA => d & a,
            DAndM => d & m,
            DOrA => d | a,
            DOrM => d | m,
        }
    }
}

impl std::fmt::Display for Comp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mnemonic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_variant_is_in_both_tables() {
        assert_eq!(Comp::iter().count(), 28);
        for comp in Comp::iter() {
            assert_eq!(Comp::parse(comp.mnemonic()), Some(comp));
            assert_eq!(Comp::from_bits(comp.bits()), Some(comp));
        }
    }

    #[test]
    fn codes() {
        assert_eq!(Comp::parse("0").map(|c| c.bits()), Some(0b0101010));
        assert_eq!(Comp::parse("D|M").map(|c| c.bits()), Some(0b1010101));
        assert_eq!(Comp::parse("M-D").map(|c| c.bits()), Some(0b1000111));
        assert_eq!(Comp::parse("D%A"), None);
        assert_eq!(Comp::parse("A+D"), None);
    }

    #[test]
    fn m_operand() {
        assert!(Comp::M.uses_m());
        assert!(Comp::DOrM.uses_m());
        assert!(!Comp::DPlusA.uses_m());
        assert!(!Comp::Zero.uses_m());
    }

    #[test]
    fn eval() {
        assert_eq!(Comp::DPlusA.eval(7, 8, 0), 15);
        assert_eq!(Comp::DMinusA.eval(3, 5, 0), 0xFFFE);
        assert_eq!(Comp::NegM.eval(0, 0, 1), 0xFFFF);
        assert_eq!(Comp::NotD.eval(0, 0, 0), 0xFFFF);
        assert_eq!(Comp::MPlusOne.eval(0, 0, 0xFFFF), 0);
        assert_eq!(Comp::DAndM.eval(0b1100, 0, 0b1010), 0b1000);
        assert_eq!(Comp::DOrA.eval(0b1100, 0b1010, 0), 0b1110);
    }
}
