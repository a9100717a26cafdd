pub mod assembler;
pub mod dump;
pub mod encoder;
pub mod error;
pub mod parser;
pub mod program;
pub mod symbol;

pub use assembler::{assemble, Assembler, Config};
pub use error::Error;
pub use program::{Format, Program};
