use arch::mem::{POINTER_BASE, R13, STATIC_BASE, TEMP_BASE};
use arch::reg::Reg;

use super::{lines, push_d};
use crate::command::{MemSegment, Segment};

/// Where a segment lives: at a fixed address, or behind a base register.
enum Base {
    Direct(u16),
    Indirect(Reg),
}

fn base(seg: MemSegment) -> Base {
    match seg {
        MemSegment::Static => Base::Direct(STATIC_BASE),
        MemSegment::Pointer => Base::Direct(POINTER_BASE),
        MemSegment::Temp => Base::Direct(TEMP_BASE),
        MemSegment::Local => Base::Indirect(Reg::LCL),
        MemSegment::Argument => Base::Indirect(Reg::ARG),
        MemSegment::This => Base::Indirect(Reg::THIS),
        MemSegment::That => Base::Indirect(Reg::THAT),
    }
}

pub fn push(seg: Segment, idx: u16) -> Vec<String> {
    let mut code = match seg.memory().map(base) {
        None => vec![format!("@{}", idx), "D=A".to_string()],
        Some(Base::Direct(addr)) => vec![format!("@{}", addr + idx), "D=M".to_string()],
        Some(Base::Indirect(reg)) => {
            let mut code = vec![format!("@{}", idx), "D=A".to_string(), format!("@{}", reg)];
            code.extend(lines(&["A=D+M", "D=M"]));
            code
        }
    };
    code.extend(push_d());
    code
}

pub fn pop(seg: MemSegment, idx: u16) -> Vec<String> {
    match base(seg) {
        Base::Direct(addr) => {
            let mut code = lines(&["@SP", "AM=M-1", "D=M"]);
            code.push(format!("@{}", addr + idx));
            code.push("M=D".to_string());
            code
        }
        Base::Indirect(reg) => {
            let mut code = vec![format!("@{}", idx), "D=A".to_string(), format!("@{}", reg)];
            code.push("D=D+M".to_string());
            code.push(format!("@R{}", R13));
            code.push("M=D".to_string());
            code.extend(lines(&["@SP", "AM=M-1", "D=M"]));
            code.push(format!("@R{}", R13));
            code.extend(lines(&["A=M", "M=D"]));
            code
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! template {
        ($($name:ident: $code:expr => [$($line:expr),* $(,)?],)*) => {
            $(
                #[test]
                fn $name() {
                    assert_eq!($code, vec![$($line),*]);
                }
            )*
        }
    }

    template! {
        push_constant: push(Segment::Constant, 7) =>
            ["@7", "D=A", "@SP", "A=M", "M=D", "@SP", "M=M+1"],
        push_local: push(Segment::Local, 2) =>
            ["@2", "D=A", "@LCL", "A=D+M", "D=M", "@SP", "A=M", "M=D", "@SP", "M=M+1"],
        push_that: push(Segment::That, 0) =>
            ["@0", "D=A", "@THAT", "A=D+M", "D=M", "@SP", "A=M", "M=D", "@SP", "M=M+1"],
        push_static: push(Segment::Static, 3) =>
            ["@19", "D=M", "@SP", "A=M", "M=D", "@SP", "M=M+1"],
        push_pointer: push(Segment::Pointer, 1) =>
            ["@4", "D=M", "@SP", "A=M", "M=D", "@SP", "M=M+1"],
        push_temp: push(Segment::Temp, 6) =>
            ["@11", "D=M", "@SP", "A=M", "M=D", "@SP", "M=M+1"],
        pop_argument: pop(MemSegment::Argument, 1) =>
            ["@1", "D=A", "@ARG", "D=D+M", "@R13", "M=D",
             "@SP", "AM=M-1", "D=M", "@R13", "A=M", "M=D"],
        pop_this: pop(MemSegment::This, 4) =>
            ["@4", "D=A", "@THIS", "D=D+M", "@R13", "M=D",
             "@SP", "AM=M-1", "D=M", "@R13", "A=M", "M=D"],
        pop_temp: pop(MemSegment::Temp, 0) =>
            ["@SP", "AM=M-1", "D=M", "@5", "M=D"],
        pop_pointer: pop(MemSegment::Pointer, 0) =>
            ["@SP", "AM=M-1", "D=M", "@3", "M=D"],
        pop_static: pop(MemSegment::Static, 239) =>
            ["@SP", "AM=M-1", "D=M", "@255", "M=D"],
    }
}
