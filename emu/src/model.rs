use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use arch::inst::Inst;
use arch::mem::{ADDR_MASK, RAM_SIZE, ROM_SIZE};

pub struct State {
    rom: Vec<u16>,
    ram: Vec<u16>,
    /// Number of loaded instructions.
    len: usize,
    a: u16,
    d: u16,
    pc: u16,
    halted: bool,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

// Memory access
impl State {
    pub fn get(&self, addr: impl Into<u16>) -> u16 {
        self.ram[(addr.into() & ADDR_MASK) as usize]
    }

    pub fn set(&mut self, addr: impl Into<u16>, val: u16) {
        self.ram[(addr.into() & ADDR_MASK) as usize] = val;
    }

    pub fn a(&self) -> u16 {
        self.a
    }

    pub fn d(&self) -> u16 {
        self.d
    }

    pub fn pc(&self) -> u16 {
        self.pc
    }

    pub fn inst(&self, addr: u16) -> u16 {
        self.rom[(addr & ADDR_MASK) as usize]
    }
}

impl State {
    pub fn new() -> Self {
        State {
            rom: vec![0; ROM_SIZE],
            ram: vec![0; RAM_SIZE],
            len: 0,
            a: 0,
            d: 0,
            pc: 0,
            halted: false,
        }
    }

    /// Halted on an idle loop, or ran past the loaded program.
    pub fn is_terminated(&self) -> bool {
        self.halted || self.pc as usize >= self.len
    }

    pub fn load_rom(&mut self, words: &[u16]) -> Result<(), String> {
        if words.len() > ROM_SIZE {
            return Err(format!("Program too large: {} words", words.len()));
        }
        self.rom[..words.len()].copy_from_slice(words);
        self.len = words.len();
        Ok(())
    }

    /// `.hack` files hold one binary word per line, anything else is read as
    /// little-endian words.
    pub fn load_rom_file(&mut self, fname: &str) -> io::Result<()> {
        let mut file = File::open(fname)?;
        let mut buf = vec![];
        file.read_to_end(&mut buf)?;

        let is_text = Path::new(fname).extension().is_some_and(|ext| ext == "hack");
        let words = if is_text {
            parse_hack(&String::from_utf8_lossy(&buf))?
        } else {
            buf.chunks(2)
                .map(|pair| u16::from_le_bytes([pair[0], *pair.get(1).unwrap_or(&0)]))
                .collect()
        };
        self.load_rom(&words)
            .map_err(|msg| io::Error::new(io::ErrorKind::InvalidData, msg))
    }

    /// Execute one instruction. Returns the address and word executed.
    pub fn exec(&mut self, _time: u64) -> Result<(u16, u16), String> {
        let pc = self.pc;
        let bin = self.inst(pc);
        match Inst::from_bin(bin)? {
            Inst::A(value) => {
                self.a = value;
                self.pc = pc.wrapping_add(1);
            }
            Inst::C(dest, comp, jump) => {
                let addr = self.a;
                let out = comp.eval(self.d, addr, self.get(addr));
                if dest.writes_m() {
                    self.set(addr, out);
                }
                if dest.writes_a() {
                    self.a = out;
                }
                if dest.writes_d() {
                    self.d = out;
                }
                if jump.taken(out) {
                    self.halted = dest.bits() == 0 && self.is_idle_loop(pc, addr);
                    self.pc = addr;
                } else {
                    self.pc = pc.wrapping_add(1);
                }
            }
        }
        Ok((pc, bin))
    }

    /// A side-effect free jump to itself, or to the `@target` right before it.
    fn is_idle_loop(&self, pc: u16, target: u16) -> bool {
        target == pc || (target.wrapping_add(1) == pc && self.inst(target) == target)
    }
}

fn parse_hack(text: &str) -> io::Result<Vec<u16>> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            u16::from_str_radix(line, 2).map_err(|_| {
                io::Error::new(io::ErrorKind::InvalidData, format!("Invalid word: {}", line))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use arch::reg::Reg;

    fn run(words: &[u16], steps: usize) -> State {
        let mut state = State::new();
        assert!(state.load_rom(words).is_ok());
        for time in 0..steps {
            if state.is_terminated() {
                break;
            }
            assert!(state.exec(time as u64).is_ok());
        }
        state
    }

    #[test]
    fn address_then_compute() {
        // @7 D=A @3 D=D+A @0 M=D
        let state = run(&[7, 0xEC10, 3, 0xE090, 0, 0xE308], 100);
        assert_eq!(state.get(Reg::SP), 10);
        assert_eq!(state.d(), 10);
        assert!(state.is_terminated());
    }

    #[test]
    fn memory_operand_reads_old_a() {
        let mut state = State::new();
        state.set(5u16, 9);
        // @5 AM=M-1
        assert!(state.load_rom(&[5, 0xFCA8]).is_ok());
        assert!(state.exec(0).is_ok());
        assert!(state.exec(1).is_ok());
        assert_eq!(state.get(5u16), 8);
        assert_eq!(state.a(), 8);
    }

    #[test]
    fn halts_on_end_loop() {
        // @0 D=A (END) @2 0;JMP
        let state = run(&[0, 0xEC10, 2, 0xEA87], 1000);
        assert!(state.is_terminated());
        assert_eq!(state.pc(), 2);
    }

    #[test]
    fn conditional_jump() {
        // @1 D=-A @6 D;JLT @9 D=A (6) @4 M=D
        let prog = [1, 0xECD0, 6, 0xE304, 9, 0xEC10, 4, 0xE308];
        let state = run(&prog, 100);
        assert_eq!(state.get(4u16), 0xFFFF);
    }

    #[test]
    fn rejects_undefined_word() {
        let mut state = State::new();
        assert!(state.load_rom(&[0x8000]).is_ok());
        assert!(state.exec(0).is_err());
    }

    #[test]
    fn hack_text() {
        assert_eq!(
            parse_hack("0000000000000111\n1110110000010000\n\n").ok(),
            Some(vec![7, 0xEC10])
        );
        assert!(parse_hack("0000000000000112\n").is_err());
    }
}
