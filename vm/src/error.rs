use color_print::cprintln;
use thiserror::Error;

use crate::command::Segment;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown command: `{0}`")]
    UnknownCommand(String),

    #[error("More argument required for `{0}`")]
    MissingArgument(String),

    #[error("Too many arguments for `{0}`")]
    TooManyArguments(String),

    #[error("Cannot parse `{0}` as count")]
    ParseCount(String),

    #[error("Unknown segment: `{0}`")]
    UnknownSegment(String),

    #[error("Cannot pop into the constant segment")]
    PopConstant,

    #[error("Index {1} is out of range for segment `{0}`")]
    IndexOutOfRange(Segment, u16),

    #[error("Invalid label: `{0}`")]
    InvalidLabel(String),

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

    pub fn kind(&self) -> &Error {
        match self {
            Error::Line { source, .. } => source.kind(),
            err => err,
        }
    }

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
