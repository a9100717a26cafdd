use serde::{Deserialize, Serialize};

use crate::parser::Stmt;

/// One source line as seen by the assembler.
#[derive(Debug, Clone)]
pub struct Listed {
    /// 0-based source line
    pub line: usize,
    /// Instruction address, for lines that occupy one
    pub pc: Option<u16>,
    pub stmt: Option<Stmt>,
    pub comment: Option<String>,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Little-endian 16-bit words
    #[default]
    Bin,
    /// One line of 16 binary digits per word
    Hack,
}

impl Format {
    pub fn extension(self) -> &'static str {
        match self {
            Format::Bin => "bin",
            Format::Hack => "hack",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Program {
    pub words: Vec<u16>,
    pub listing: Vec<Listed>,
}

impl Program {
    pub fn to_le_bytes(&self) -> Vec<u8> {
        self.words.iter().flat_map(|word| word.to_le_bytes()).collect()
    }

    pub fn to_hack(&self) -> String {
        self.words
            .iter()
            .map(|word| format!("{:016b}\n", word))
            .collect()
    }

    pub fn to_format(&self, format: Format) -> Vec<u8> {
        match format {
            Format::Bin => self.to_le_bytes(),
            Format::Hack => self.to_hack().into_bytes(),
        }
    }
}
