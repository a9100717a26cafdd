use arch::{alu::Comp, dest::Dest, inst::Inst, jump::Jump};

use crate::error::Error;
use crate::parser::parse_numeral;

/// Encode one resolved instruction, `@<numeral>` or `dest=comp;jump`.
pub fn encode(inst: &str) -> Result<u16, Error> {
    match inst.strip_prefix('@') {
        Some(operand) => encode_addr(operand),
        None => encode_comp(inst),
    }
}

pub fn encode_addr(operand: &str) -> Result<u16, Error> {
    let value = parse_numeral(operand)?;
    Ok(Inst::A(value).to_bin())
}

pub fn encode_comp(inst: &str) -> Result<u16, Error> {
    let (dest, rest) = match inst.split_once('=') {
        Some((dest, rest)) => (dest, rest),
        None => ("null", inst),
    };
    let (comp, jump) = match rest.split_once(';') {
        Some((comp, jump)) => (comp, jump),
        None => (rest, "null"),
    };

    let comp = Comp::parse(comp).ok_or_else(|| Error::UnknownComp {
        comp: comp.to_string(),
        inst: inst.to_string(),
    })?;
    let dest = Dest::parse(dest).ok_or_else(|| Error::UnknownDest {
        dest: dest.to_string(),
        inst: inst.to_string(),
    })?;
    let jump = Jump::parse(jump).ok_or_else(|| Error::UnknownJump {
        jump: jump.to_string(),
        inst: inst.to_string(),
    })?;
    Ok(Inst::C(dest, comp, jump).to_bin())
}
