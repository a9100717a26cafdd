use num_enum::{FromPrimitive, IntoPrimitive};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Destination field: bit 2 = A, bit 1 = D, bit 0 = M.
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
pub enum Dest {
    #[default]
    #[strum(serialize = "null")]
    Null,
    M,
    D,
    MD,
    A,
    AM,
    AD,
    AMD,
}

impl Dest {
    pub fn parse(s: &str) -> Option<Self> {
        s.parse::<Self>().ok()
    }

    pub fn bits(self) -> u8 {
        self.into()
    }

    pub fn writes_a(self) -> bool {
        self.bits() & 0b100 != 0
    }

    pub fn writes_d(self) -> bool {
        self.bits() & 0b010 != 0
    }

    pub fn writes_m(self) -> bool {
        self.bits() & 0b001 != 0
    }
}

#[test]
fn test() {
    assert_eq!(Dest::parse("null"), Some(Dest::Null));
    assert_eq!(Dest::parse("AMD").map(Dest::bits), Some(0b111));
    assert_eq!(Dest::parse("MD").map(Dest::bits), Some(0b011));
    assert_eq!(Dest::parse("DM"), None);
    assert_eq!(Dest::from(0b101), Dest::AM);
    assert!(Dest::AM.writes_a() && Dest::AM.writes_m() && !Dest::AM.writes_d());
    assert_eq!(Dest::Null.to_string(), "null");
}
