use super::{lines, Counters};
use crate::command::ArithOp;

pub fn arith(op: ArithOp, counters: &mut Counters) -> Vec<String> {
    match op {
        ArithOp::Add => binary("M=D+M"),
        ArithOp::Sub => binary("M=M-D"),
        ArithOp::And => binary("M=D&M"),
        ArithOp::Or => binary("M=D|M"),
        ArithOp::Neg => unary("M=-M"),
        ArithOp::Not => unary("M=!M"),
        ArithOp::Eq => compare("EQ", "JEQ", next(&mut counters.eq)),
        ArithOp::Gt => compare("GT", "JGT", next(&mut counters.gt)),
        ArithOp::Lt => compare("LT", "JLT", next(&mut counters.lt)),
    }
}

fn next(counter: &mut usize) -> usize {
    let n = *counter;
    *counter += 1;
    n
}

/// Pop y into D, then combine into x in place.
fn binary(op: &str) -> Vec<String> {
    lines(&["@SP", "AM=M-1", "D=M", "A=A-1", op])
}

fn unary(op: &str) -> Vec<String> {
    lines(&["@SP", "A=M-1", op])
}

/// Replace x and y with -1 if `x - y` satisfies `jump`, else 0.
fn compare(prefix: &str, jump: &str, n: usize) -> Vec<String> {
    let on_true = format!("{}_TRUE{}", prefix, n);
    let end = format!("{}_END{}", prefix, n);
    let mut code = lines(&["@SP", "AM=M-1", "D=M", "A=A-1", "D=M-D"]);
    code.push(format!("@{}", on_true));
    code.push(format!("D;{}", jump));
    code.extend(lines(&["@SP", "A=M-1", "M=0"]));
    code.push(format!("@{}", end));
    code.push("0;JMP".to_string());
    code.push(format!("({})", on_true));
    code.extend(lines(&["@SP", "A=M-1", "M=-1"]));
    code.push(format!("({})", end));
    code
}
