use arch::mem::ROM_SIZE;
use indexmap::IndexSet;

use crate::encoder;
use crate::error::Error;
use crate::parser::{split_comment, Imm, Stmt};
use crate::program::{Listed, Program};
use crate::symbol::SymbolTable;

#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    /// Treat `SP` as an ordinary variable instead of the reserved address 0.
    pub legacy_sp: bool,
}

/// Assemble a whole source text. Every call is an independent run.
pub fn assemble(source: &str, config: &Config) -> Result<Program, Error> {
    Assembler::new(config).run(source)
}

/// Run context: owns the symbol table for the duration of one source.
pub struct Assembler {
    symbols: SymbolTable,
}

impl Assembler {
    pub fn new(config: &Config) -> Self {
        Assembler {
            symbols: SymbolTable::new(config.legacy_sp),
        }
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn run(mut self, source: &str) -> Result<Program, Error> {
        let mut listing = self.find_pass(source)?;
        self.replace_pass(&mut listing)?;
        let words = Self::encode_pass(&listing)?;
        Ok(Program { words, listing })
    }

    /// Parse every line, bind labels to the index of the next instruction,
    /// then bind the remaining symbolic references as variables in the order
    /// they were first seen.
    pub fn find_pass(&mut self, source: &str) -> Result<Vec<Listed>, Error> {
        let mut listing = vec![];
        let mut refs: IndexSet<String> = IndexSet::new();
        let mut pc: usize = 0;

        for (idx, raw) in source.lines().enumerate() {
            let (code, comment) = split_comment(raw);
            let stmt = Stmt::parse(&code).map_err(|err| err.at(idx, raw))?;

            let addr = match &stmt {
                Some(Stmt::Label(name)) => {
                    self.symbols
                        .define_label(name, pc as u16)
                        .map_err(|err| err.at(idx, raw))?;
                    None
                }
                Some(inst) => {
                    if let Stmt::Addr(Imm::Symbol(name)) = inst {
                        refs.insert(name.clone());
                    }
                    if pc >= ROM_SIZE {
                        return Err(Error::ProgramTooLarge(pc + 1).at(idx, raw));
                    }
                    pc += 1;
                    Some((pc - 1) as u16)
                }
                None => None,
            };

            listing.push(Listed {
                line: idx,
                pc: addr,
                stmt,
                comment,
                text: raw.to_string(),
            });
        }

        for name in &refs {
            self.symbols.bind_variable(name)?;
        }
        Ok(listing)
    }

    /// Rewrite every symbolic address to its numeral.
    pub fn replace_pass(&self, listing: &mut [Listed]) -> Result<(), Error> {
        for listed in listing.iter_mut() {
            if let Some(Stmt::Addr(Imm::Symbol(name))) = &listed.stmt {
                let addr = self.symbols.get_val(name).ok_or_else(|| {
                    Error::UndefinedSymbol(name.clone()).at(listed.line, &listed.text)
                })?;
                listed.stmt = Some(Stmt::Addr(Imm::Literal(addr)));
            }
        }
        Ok(())
    }

    pub fn encode_pass(listing: &[Listed]) -> Result<Vec<u16>, Error> {
        listing
            .iter()
            .filter_map(|listed| match &listed.stmt {
                Some(stmt) if stmt.is_inst() => Some((listed, stmt)),
                _ => None,
            })
            .map(|(listed, stmt)| {
                encoder::encode(&stmt.to_string())
                    .map_err(|err| err.at(listed.line, &listed.text))
            })
            .collect()
    }
}
