use num_enum::{FromPrimitive, IntoPrimitive};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Jump field: bit 2 = out < 0, bit 1 = out == 0, bit 0 = out > 0.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Default,
    FromPrimitive,
    IntoPrimitive,
    EnumString,
    Display,
    EnumIter,
)]
#[repr(u8)]
pub enum Jump {
    #[default]
    #[strum(serialize = "null")]
    Null,
    JGT,
    JEQ,
    JGE,
    JLT,
    JNE,
    JLE,
    JMP,
}

impl Jump {
    pub fn parse(s: &str) -> Option<Self> {
        s.parse::<Self>().ok()
    }

    pub fn bits(self) -> u8 {
        self.into()
    }

    /// Whether the jump is taken for an ALU output, read as signed.
    pub fn taken(self, out: u16) -> bool {
        let out = out as i16;
        let bits = self.bits();
        (bits & 0b100 != 0 && out < 0)
            || (bits & 0b010 != 0 && out == 0)
            || (bits & 0b001 != 0 && out > 0)
    }
}

#[test]
fn test() {
    assert_eq!(Jump::parse("null"), Some(Jump::Null));
    assert_eq!(Jump::parse("JLE").map(Jump::bits), Some(0b110));
    assert_eq!(Jump::parse("jmp"), None);
    assert!(Jump::JMP.taken(0) && Jump::JMP.taken(1) && Jump::JMP.taken(0xFFFF));
    assert!(!Jump::Null.taken(0));
    assert!(Jump::JLT.taken(0x8000) && !Jump::JLT.taken(0x7FFF));
    assert!(Jump::JGE.taken(0) && !Jump::JGE.taken(0xFFFF));
    assert!(Jump::JNE.taken(3) && !Jump::JNE.taken(0));
}
