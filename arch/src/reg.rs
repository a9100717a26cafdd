use num_enum::IntoPrimitive;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Virtual registers kept in the lowest RAM words.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    IntoPrimitive,
    EnumString,
    Display,
    EnumIter,
)]
#[repr(u16)]
pub enum Reg {
    SP = 0,
    LCL = 1,
    ARG = 2,
    THIS = 3,
    THAT = 4,
}

impl Reg {
    pub fn parse(s: &str) -> Result<Self, String> {
        s.parse::<Self>().map_err(|_| format!("Unknown reg name: {s}"))
    }

    pub fn addr(self) -> u16 {
        self.into()
    }
}

#[test]
fn test() {
    assert_eq!(Reg::parse("LCL"), Ok(Reg::LCL));
    assert_eq!(Reg::THAT.addr(), 4);
    assert_eq!(Reg::SP.to_string(), "SP");
    assert!(Reg::parse("lcl").is_err());
}
