use crate::{alu::Comp, dest::Dest, jump::Jump, mem::ADDR_MASK};

use color_print::cformat;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inst {
    /// `@value`
    A(u16),
    /// `dest=comp;jump`
    C(Dest, Comp, Jump),
}

impl Inst {
    const C_PREFIX: u16 = 0b111 << 13;

    pub fn to_bin(self) -> u16 {
        match self {
            Inst::A(value) => value & ADDR_MASK,
            Inst::C(dest, comp, jump) => {
                Self::C_PREFIX
                    | (comp.bits() as u16) << 6
                    | (dest.bits() as u16) << 3
                    | jump.bits() as u16
            }
        }
    }

    pub fn from_bin(bin: u16) -> Result<Inst, String> {
        if bin & 0x8000 == 0 {
            return Ok(Inst::A(bin));
        }
        if bin & Self::C_PREFIX != Self::C_PREFIX {
            return Err(format!("Undefined Inst: {:016b}", bin));
        }
        let comp = Comp::from_bits(((bin >> 6) & 0x7F) as u8)
            .ok_or_else(|| format!("Undefined Comp: {:016b}", bin))?;
        let dest = Dest::from(((bin >> 3) & 0b111) as u8);
        let jump = Jump::from((bin & 0b111) as u8);
        Ok(Inst::C(dest, comp, jump))
    }
}

impl std::fmt::Display for Inst {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Inst::A(value) => write!(f, "@{}", value),
            Inst::C(dest, comp, jump) => {
                if *dest != Dest::Null {
                    write!(f, "{}=", dest)?;
                }
                write!(f, "{}", comp)?;
                if *jump != Jump::Null {
                    write!(f, ";{}", jump)?;
                }
                Ok(())
            }
        }
    }
}

impl Inst {
    pub fn cformat(&self) -> String {
        match self {
            Inst::A(value) => cformat!("<r>@</><y>{}</>", value),
            Inst::C(dest, comp, jump) => {
                let dest = match dest {
                    Dest::Null => String::new(),
                    d => format!("{}=", d),
                };
                let jump = match jump {
                    Jump::Null => String::new(),
                    j => format!(";{}", j),
                };
                cformat!("<b>{}</><r>{}</><g>{}</>", dest, comp, jump)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    macro_rules! test_bin {
        ($($name:ident: $inst:expr => $bin:expr,)*) => {
            $(
                #[test]
                fn $name() {
                    let inst = $inst;
                    assert_eq!(inst.to_bin(), $bin);
                    assert_eq!(Inst::from_bin($bin), Ok(inst));
                }
            )*
        }
    }

    test_bin! {
        test_a_zero: Inst::A(0) => 0x0000,
        test_a_two: Inst::A(2) => 0x0002,
        test_a_max: Inst::A(32767) => 0x7FFF,
        test_d_eq_a: Inst::C(Dest::D, Comp::A, Jump::Null) => 0xEC10,
        test_d_eq_d_plus_a: Inst::C(Dest::D, Comp::DPlusA, Jump::Null) => 0xE090,
        test_m_eq_d: Inst::C(Dest::M, Comp::D, Jump::Null) => 0xE308,
        test_am_eq_m_minus_1: Inst::C(Dest::AM, Comp::MMinusOne, Jump::Null) => 0xFCA8,
        test_zero_jmp: Inst::C(Dest::Null, Comp::Zero, Jump::JMP) => 0xEA87,
        test_d_jeq: Inst::C(Dest::Null, Comp::D, Jump::JEQ) => 0xE302,
    }

    #[test]
    fn address_is_masked_to_15_bits() {
        assert_eq!(Inst::A(0xFFFF).to_bin(), 0x7FFF);
        assert_eq!(Inst::A(0x8005).to_bin(), 0x0005);
        for n in [0u16, 1, 255, 16384, 24576, 32767] {
            let bin = Inst::A(n).to_bin();
            assert_eq!(bin & 0x8000, 0);
            assert_eq!(bin & 0x7FFF, n);
        }
    }

    #[test]
    fn computation_decodes_to_same_fields() {
        for comp in Comp::iter() {
            for dest in Dest::iter() {
                for jump in Jump::iter() {
                    let inst = Inst::C(dest, comp, jump);
                    let bin = inst.to_bin();
                    assert_eq!(bin >> 13, 0b111);
                    assert_eq!(Inst::from_bin(bin), Ok(inst));
                }
            }
        }
    }

    #[test]
    fn rejects_undefined_words() {
        // 10x prefix
        assert!(Inst::from_bin(0b1000_0000_0000_0000).is_err());
        // comp 1111111 is not in the table
        assert!(Inst::from_bin(0b1111_1111_1100_0000).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(Inst::A(17).to_string(), "@17");
        assert_eq!(Inst::C(Dest::D, Comp::DPlusA, Jump::Null).to_string(), "D=D+A");
        assert_eq!(Inst::C(Dest::Null, Comp::Zero, Jump::JMP).to_string(), "0;JMP");
        assert_eq!(Inst::C(Dest::AMD, Comp::MMinusOne, Jump::JNE).to_string(), "AMD=M-1;JNE");
    }
}
