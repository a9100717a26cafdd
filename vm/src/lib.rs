pub mod codegen;
pub mod command;
pub mod error;
pub mod translator;

pub use command::{ArithOp, Command, MemSegment, Segment};
pub use error::Error;
pub use translator::{translate, Config, Translator};
