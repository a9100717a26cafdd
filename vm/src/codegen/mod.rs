//! Assembly templates for each VM command.
//!
//! Every generator is a pure function of its command and the counters; the
//! only state carried between commands is [`Counters`].

mod arith;
mod flow;
mod frame;
mod segment;

use crate::command::Command;

/// Per-run counters for generated labels. Labels drawn from the same
/// counter never repeat within one run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Counters {
    pub eq: usize,
    pub gt: usize,
    pub lt: usize,
    pub call: usize,
}

pub fn generate(cmd: &Command, counters: &mut Counters) -> Vec<String> {
    match cmd {
        Command::Arith(op) => arith::arith(*op, counters),
        Command::Push(seg, idx) => segment::push(*seg, *idx),
        Command::Pop(seg, idx) => segment::pop(*seg, *idx),
        Command::Label(name) => flow::label(name),
        Command::Goto(name) => flow::goto(name),
        Command::IfGoto(name) => flow::if_goto(name),
        Command::Function(name, n_locals) => frame::function(name, *n_locals),
        Command::Call(name, n_args) => frame::call(name, *n_args, counters),
        Command::Return => frame::ret(),
    }
}

/// `*SP = D; SP++`
fn push_d() -> Vec<String> {
    lines(&["@SP", "A=M", "M=D", "@SP", "M=M+1"])
}

fn lines(code: &[&str]) -> Vec<String> {
    code.iter().map(|line| line.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::ArithOp;

    #[test]
    fn counters_advance_per_kind() {
        let mut counters = Counters::default();
        generate(&Command::Arith(ArithOp::Eq), &mut counters);
        generate(&Command::Arith(ArithOp::Eq), &mut counters);
        generate(&Command::Arith(ArithOp::Lt), &mut counters);
        generate(&Command::Call("f".to_string(), 0), &mut counters);
        generate(&Command::Arith(ArithOp::Add), &mut counters);
        generate(&Command::Return, &mut counters);
        assert_eq!(
            counters,
            Counters {
                eq: 2,
                gt: 0,
                lt: 1,
                call: 1
            }
        );
    }

    #[test]
    fn push_d_template() {
        assert_eq!(push_d(), vec!["@SP", "A=M", "M=D", "@SP", "M=M+1"]);
    }
}
