use arch::mem::STACK_BASE;

use crate::codegen::{self, Counters};
use crate::command::Command;
use crate::error::Error;

#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    /// Prefix the output with `SP = 256; call Sys.init 0`.
    pub bootstrap: bool,
    /// Emit each VM line as a comment before its code.
    pub annotate: bool,
}

/// Translate a whole VM source into assembly text. Every call is an
/// independent run.
pub fn translate(source: &str, config: &Config) -> Result<String, Error> {
    Translator::new(*config).run(source)
}

/// Run context: owns the label counters for the duration of one source.
pub struct Translator {
    config: Config,
    counters: Counters,
    output: Vec<String>,
}

impl Translator {
    pub fn new(config: Config) -> Self {
        Translator {
            config,
            counters: Counters::default(),
            output: vec![],
        }
    }

    pub fn counters(&self) -> &Counters {
        &self.counters
    }

    pub fn run(mut self, source: &str) -> Result<String, Error> {
        if self.config.bootstrap {
            self.bootstrap();
        }
        for (idx, raw) in source.lines().enumerate() {
            self.line(raw).map_err(|err| err.at(idx, raw))?;
        }
        let mut text = self.output.join("\n");
        if !text.is_empty() {
            text.push('\n');
        }
        Ok(text)
    }

    /// Translate one line, appending its code.
    pub fn line(&mut self, raw: &str) -> Result<(), Error> {
        let Some(cmd) = Command::parse(raw)? else {
            return Ok(());
        };
        if self.config.annotate {
            self.emit(format!("// {}", cmd));
        }
        self.command(&cmd);
        Ok(())
    }

    fn command(&mut self, cmd: &Command) {
        let code = codegen::generate(cmd, &mut self.counters);
        self.output.extend(code);
    }

    fn bootstrap(&mut self) {
        if self.config.annotate {
            self.emit("// bootstrap".to_string());
        }
        self.emit(format!("@{}", STACK_BASE));
        for line in ["D=A", "@SP", "M=D"] {
            self.emit(line.to_string());
        }
        self.command(&Command::Call("Sys.init".to_string(), 0));
    }

    fn emit(&mut self, line: String) {
        self.output.push(line);
    }
}
