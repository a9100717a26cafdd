pub mod config;
pub mod error;
pub mod pipeline;

pub use config::Config;
pub use error::Error;
pub use pipeline::{process, process_all, Artifacts, Stage};
