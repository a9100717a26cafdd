use color_print::cprintln;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Cannot parse `{0}` as numeral")]
    ParseNumeral(String),

    #[error("Invalid symbol: `{0}`")]
    InvalidSymbol(String),

    #[error("Malformed label definition: `{0}`")]
    MalformedLabel(String),

    #[error("Re-defined label: `{0}`")]
    RedefinedLabel(String),

    #[error("Undefined symbol: `{0}`")]
    UndefinedSymbol(String),

    #[error("Invalid computation `{comp}` in `{inst}`")]
    UnknownComp { comp: String, inst: String },

    #[error("Invalid destination `{dest}` in `{inst}`")]
    UnknownDest { dest: String, inst: String },

    #[error("Invalid jump `{jump}` in `{inst}`")]
    UnknownJump { jump: String, inst: String },

    #[error("Program does not fit in instruction memory ({0} instructions)")]
    ProgramTooLarge(usize),

    #[error("No free variable slot for `{0}`")]
    OutOfVariables(String),

    #[error("line {}: {source}", .line + 1)]
    Line {
        line: usize,
        text: String,
        #[source]
        source: Box<Error>,
    },

    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),
}

impl Error {
    pub fn at(self, line: usize, text: &str) -> Self {
        match self {
            Error::Line { .. } => self,
            err => Error::Line {
                line,
                text: text.to_string(),
                source: Box::new(err),
            },
        }
    }

    /// The error without its line context.
    pub fn kind(&self) -> &Error {
        match self {
            Error::Line { source, .. } => source.kind(),
            err => err,
        }
    }

    /// Print error with diagnostic information showing file location and line content
    pub fn print_diag(&self, file: &str) {
        match self {
            Error::Line { line, text, source } => {
                cprintln!("<red,bold>error</>: {}", source);
                let line_num = line + 1;
                cprintln!("     <blue>--></> <underline>{}:{}</>", file, line_num);
                cprintln!("      <blue>|</>");
                cprintln!(" <blue>{:>4} |</> {}", line_num, text);
                cprintln!("      <blue>|</>");
            }
            err => {
                cprintln!("<red,bold>error</>: {}", err);
                cprintln!("     <blue>--></> <underline>{}</>", file);
            }
        }
    }
}
