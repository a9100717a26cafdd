use arch::reg::Reg;

use super::{lines, push_d, Counters};

/// Caller state saved below a callee's locals, bottom to top after the
/// return address.
const SAVED: [Reg; 4] = [Reg::LCL, Reg::ARG, Reg::THIS, Reg::THAT];

/// Words between the arguments and the callee's locals.
const FRAME_SIZE: u16 = 5;

pub fn function(name: &str, n_locals: u16) -> Vec<String> {
    let mut code = vec![format!("({})", name)];
    for _ in 0..n_locals {
        code.extend(lines(&["@SP", "A=M", "M=0", "@SP", "M=M+1"]));
    }
    code
}

pub fn call(name: &str, n_args: u16, counters: &mut Counters) -> Vec<String> {
    let ret = format!("{}$ret.{}", name, counters.call);
    counters.call += 1;

    let mut code = vec![format!("@{}", ret), "D=A".to_string()];
    code.extend(push_d());
    for reg in SAVED {
        code.push(format!("@{}", reg));
        code.push("D=M".to_string());
        code.extend(push_d());
    }

    // ARG = SP - n - 5; LCL = SP
    code.extend(lines(&["@SP", "D=M"]));
    code.push(format!("@{}", n_args));
    code.push("D=D-A".to_string());
    code.push(format!("@{}", FRAME_SIZE));
    code.extend(lines(&["D=D-A", "@ARG", "M=D", "@SP", "D=M", "@LCL", "M=D"]));

    code.push(format!("@{}", name));
    code.push("0;JMP".to_string());
    code.push(format!("({})", ret));
    code
}

/// R13 holds the frame end, R14 the return address. The return address is
/// read before the return value overwrites arg 0, which is the same word
/// when the callee takes no arguments.
pub fn ret() -> Vec<String> {
    let mut code = lines(&["@LCL", "D=M", "@R13", "M=D"]);
    code.push(format!("@{}", FRAME_SIZE));
    code.extend(lines(&["A=D-A", "D=M", "@R14", "M=D"]));
    code.extend(lines(&["@SP", "AM=M-1", "D=M", "@ARG", "A=M", "M=D"]));
    code.extend(lines(&["@ARG", "D=M+1", "@SP", "M=D"]));
    for reg in SAVED.iter().rev() {
        code.extend(lines(&["@R13", "AM=M-1", "D=M"]));
        code.push(format!("@{}", reg));
        code.push("M=D".to_string());
    }
    code.extend(lines(&["@R14", "A=M", "0;JMP"]));
    code
}
