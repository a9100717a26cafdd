use arch::mem::{KBD, SCREEN, VAR_BASE};
use arch::reg::Reg;
use indexmap::IndexMap;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Predefined,
    Label,
    Variable,
}

/// Name -> address bindings of one assembler run.
///
/// Entries are only ever appended: once bound, a name keeps its address for
/// the rest of the run.
#[derive(Debug)]
pub struct SymbolTable {
    symbols: IndexMap<String, (Kind, u16)>,
    next_var: u16,
}

impl SymbolTable {
    /// `legacy_sp` leaves `SP` out of the predefined names, so that it is
    /// bound like any other variable.
    pub fn new(legacy_sp: bool) -> Self {
        let mut table = SymbolTable {
            symbols: IndexMap::new(),
            next_var: VAR_BASE,
        };
        let regs = [Reg::SP, Reg::LCL, Reg::ARG, Reg::THIS, Reg::THAT];
        for reg in regs {
            if legacy_sp && reg == Reg::SP {
                continue;
            }
            table.predefine(&reg.to_string(), reg.addr());
        }
        table.predefine("SCREEN", SCREEN);
        table.predefine("KBD", KBD);
        table
    }

    fn predefine(&mut self, name: &str, addr: u16) {
        self.symbols.insert(name.to_string(), (Kind::Predefined, addr));
    }

    pub fn define_label(&mut self, name: &str, pc: u16) -> Result<(), Error> {
        if self.symbols.contains_key(name) {
            return Err(Error::RedefinedLabel(name.to_string()));
        }
        self.symbols.insert(name.to_string(), (Kind::Label, pc));
        Ok(())
    }

    /// Bind `name` to the next free variable slot unless it is already known.
    pub fn bind_variable(&mut self, name: &str) -> Result<u16, Error> {
        if let Some(addr) = self.get_val(name) {
            return Ok(addr);
        }
        if self.next_var >= SCREEN {
            return Err(Error::OutOfVariables(name.to_string()));
        }
        let addr = self.next_var;
        self.symbols.insert(name.to_string(), (Kind::Variable, addr));
        self.next_var += 1;
        Ok(addr)
    }

    pub fn get(&self, name: &str) -> Option<&(Kind, u16)> {
        self.symbols.get(name)
    }

    pub fn get_val(&self, name: &str) -> Option<u16> {
        self.symbols.get(name).map(|(_, addr)| *addr)
    }

    /// Bindings in the order they were made.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Kind, u16)> {
        self.symbols
            .iter()
            .map(|(name, (kind, addr))| (name.as_str(), *kind, *addr))
    }
}
