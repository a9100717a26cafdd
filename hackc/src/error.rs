use color_print::cprintln;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Asm(#[from] hackasm::Error),

    #[error(transparent)]
    Vm(#[from] hackvm::Error),

    #[error("No {0} stage is available")]
    UnsupportedStage(String),

    #[error("Unknown file extension: `{0}`")]
    UnknownExtension(String),

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),
}

impl Error {
    /// Print error with diagnostic information. `file` is the input the
    /// failing stage was reading.
    pub fn print_diag(&self, file: &str) {
        match self {
            Error::Asm(err) => err.print_diag(file),
            Error::Vm(err) => err.print_diag(file),
            err => {
                cprintln!("<red,bold>error</>: {}", err);
                cprintln!("     <blue>--></> <underline>{}</>", file);
            }
        }
    }
}
