use std::path::PathBuf;

use hackasm::Format;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Pipeline options, read from YAML:
///
/// ```yaml
/// out_dir: build
/// format: hack
/// bootstrap: true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub out_dir: PathBuf,
    pub format: Format,
    pub legacy_sp: bool,
    pub bootstrap: bool,
    pub annotate: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            out_dir: PathBuf::from("out"),
            format: Format::default(),
            legacy_sp: false,
            bootstrap: false,
            annotate: false,
        }
    }
}

impl Config {
    pub fn from_yaml(text: &str) -> Result<Self, Error> {
        serde_yaml::from_str::<Option<Config>>(text)
            .map(Option::unwrap_or_default)
            .map_err(|err| Error::Config(err.to_string()))
    }

    pub fn load(path: &str) -> Result<Self, Error> {
        let text =
            std::fs::read_to_string(path).map_err(|err| Error::FileOpen(path.to_string(), err))?;
        Self::from_yaml(&text)
    }

    pub fn asm(&self) -> hackasm::Config {
        hackasm::Config {
            legacy_sp: self.legacy_sp,
        }
    }

    pub fn vm(&self) -> hackvm::Config {
        hackvm::Config {
            bootstrap: self.bootstrap,
            annotate: self.annotate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::from_yaml("").ok();
        assert_eq!(config, Some(Config::default()));
        assert_eq!(Config::default().out_dir, PathBuf::from("out"));
        assert_eq!(Config::default().format, Format::Bin);
    }

    #[test]
    fn partial_file() {
        let config = Config::from_yaml("out_dir: build\nformat: hack\nbootstrap: true\n").ok();
        assert_eq!(
            config,
            Some(Config {
                out_dir: PathBuf::from("build"),
                format: Format::Hack,
                bootstrap: true,
                ..Config::default()
            })
        );
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(matches!(
            Config::from_yaml("outdir: build\n"),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            Config::from_yaml("format: exe\n"),
            Err(Error::Config(_))
        ));
    }
}
