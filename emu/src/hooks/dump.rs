use arch::mem::STACK_BASE;
use arch::reg::Reg;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;

use crate::model::State;

use super::Hook;

/// Prints machine state when given addresses are executed.
///
/// The YAML file maps instruction addresses to what to print:
///
/// ```yaml
/// 17:
///   stack: true
///   heap: [16, 17]
/// ```
#[derive(Debug)]
pub struct Dump {
    file: Option<String>,
    all: bool,
    list: List,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct List(pub HashMap<u16, Config>);

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub stack: bool,
    #[serde(default)]
    pub heap: Vec<u16>,
}

impl Dump {
    pub fn arg(file: Option<String>, all: bool) -> Result<Self, String> {
        let list = match &file {
            Some(fname) => {
                let reader = File::open(fname)
                    .map(BufReader::new)
                    .map_err(|err| format!("Failed to open file: {}: {}", fname, err))?;
                serde_yaml::from_reader(reader)
                    .map_err(|err| format!("Invalid dump config {}: {}", fname, err))?
            }
            None => List::default(),
        };
        Ok(Self { file, all, list })
    }

    pub fn with_list(list: List, all: bool) -> Self {
        Self {
            file: None,
            all,
            list,
        }
    }

    fn get(&self, pc: u16) -> Option<&Config> {
        self.list.0.get(&pc)
    }
}

impl Hook for Dump {
    fn init(&mut self, state: State) -> State {
        if self.all {
            println!(" * Dump all");
        }
        if let Some(fname) = &self.file {
            println!(" * Dump[{}] {:?}", self.list.0.len(), fname);
        }
        state
    }
    fn exec(&mut self, _time: u64, addr: u16, _code: u16, cpu: State) -> State {
        if let Some(cfg) = self.get(addr) {
            print_reg(&cpu);
            if cfg.stack {
                print_stack(&cpu);
            }
            print_heap(&cpu, &cfg.heap);
        } else if self.all {
            print_reg(&cpu);
        }
        cpu
    }
}

pub fn print_reg(cpu: &State) {
    println!(" +-----------+-----------+-----------+");
    println!(
        " |  A: {:0>4X} |  D: {:0>4X} | PC: {:0>4X} |",
        cpu.a(),
        cpu.d(),
        cpu.pc()
    );
    println!(
        " | SP: {:0>4X} | LCL: {:0>4X} | ARG: {:0>4X} |",
        cpu.get(Reg::SP),
        cpu.get(Reg::LCL),
        cpu.get(Reg::ARG)
    );
    println!(
        " | THIS: {:0>4X} | THAT: {:0>4X} |",
        cpu.get(Reg::THIS),
        cpu.get(Reg::THAT)
    );
    println!(" +-----------+-----------+-----------+");
}

/// Words from the stack base up to SP.
pub fn print_stack(cpu: &State) {
    let sp = cpu.get(Reg::SP);
    for addr in STACK_BASE..sp.max(STACK_BASE) {
        println!(" | {:0>4X} : {:0>4X}                      |", addr, cpu.get(addr));
    }
    println!(" +-----------------------------------+");
}

pub fn print_heap(cpu: &State, addrs: &[u16]) {
    for addr in addrs {
        println!(" | {:0>4X} : {:0>4X}                      |", addr, cpu.get(*addr));
    }
    println!(" +-----------------------------------+");
}
