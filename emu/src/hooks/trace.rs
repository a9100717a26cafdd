use arch::inst::Inst;
use color_print::cprintln;

use super::Hook;
use crate::model::State;

/// Prints every executed instruction.
pub struct Trace;

impl Hook for Trace {
    fn init(&mut self, state: State) -> State {
        println!(" * Trace");
        state
    }
    fn exec(&mut self, time: u64, addr: u16, code: u16, state: State) -> State {
        match Inst::from_bin(code) {
            Ok(inst) => cprintln!(
                "[{:0>6}] <blue>{:0>4X}</> : {:0>4X} {}",
                time,
                addr,
                code,
                inst.cformat()
            ),
            Err(msg) => cprintln!("[{:0>6}] <blue>{:0>4X}</> : <red>{}</>", time, addr, msg),
        }
        state
    }
}
