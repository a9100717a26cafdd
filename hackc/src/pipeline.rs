use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Compile,
    Translate,
    Assemble,
}

impl Stage {
    pub fn from_path(path: &Path) -> Result<Stage, Error> {
        let ext = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");
        match ext {
            "jack" => Ok(Stage::Compile),
            "vm" => Ok(Stage::Translate),
            "asm" => Ok(Stage::Assemble),
            _ => Err(Error::UnknownExtension(path.display().to_string())),
        }
    }
}

/// Files written for one input, in the order they were produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    pub files: Vec<PathBuf>,
    pub words: usize,
}

/// Run the stages for one input file, feeding each output into the next stage.
///
/// Nothing is written unless every stage succeeds. On failure, outputs left
/// by an earlier run for the same input are removed.
pub fn process(path: &Path, config: &Config) -> Result<Artifacts, Error> {
    let stage = Stage::from_path(path)?;
    if stage == Stage::Compile {
        return Err(Error::UnsupportedStage("jack front end".to_string()));
    }

    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_default();
    let asm_out = config.out_dir.join(format!("{}.asm", stem));
    let bin_out = config
        .out_dir
        .join(format!("{}.{}", stem, config.format.extension()));
    let outputs = match stage {
        Stage::Translate => vec![asm_out, bin_out],
        _ => vec![bin_out],
    };

    let built = build(path, stage, config);
    let result = built.and_then(|contents| {
        fs::create_dir_all(&config.out_dir)
            .map_err(|err| Error::FileWrite(config.out_dir.display().to_string(), err))?;
        let words = contents.words;
        let parts = contents.asm.into_iter().chain([contents.bin]);
        for (out, data) in outputs.iter().zip(parts) {
            write(out, &data)?;
        }
        Ok(Artifacts {
            files: outputs.clone(),
            words,
        })
    });
    if result.is_err() {
        clear(&outputs);
    }
    result
}

/// One result per input, in order. A failing file does not stop the others.
pub fn process_all<P: AsRef<Path>>(
    paths: &[P],
    config: &Config,
) -> Vec<(PathBuf, Result<Artifacts, Error>)> {
    paths
        .iter()
        .map(|path| {
            let path = path.as_ref();
            (path.to_path_buf(), process(path, config))
        })
        .collect()
}

/// Output contents of every stage, held until all of them succeed.
struct Built {
    asm: Option<Vec<u8>>,
    bin: Vec<u8>,
    words: usize,
}

fn build(path: &Path, stage: Stage, config: &Config) -> Result<Built, Error> {
    let source = read(path)?;
    let (asm, text) = match stage {
        Stage::Translate => {
            let asm = hackvm::translate(&source, &config.vm())?;
            (Some(asm.clone().into_bytes()), asm)
        }
        _ => (None, source),
    };
    let program = hackasm::assemble(&text, &config.asm())?;
    Ok(Built {
        asm,
        bin: program.to_format(config.format),
        words: program.words.len(),
    })
}

fn clear(outputs: &[PathBuf]) {
    for out in outputs {
        if out.exists() {
            let _ = fs::remove_file(out);
        }
    }
}

fn read(path: &Path) -> Result<String, Error> {
    fs::read_to_string(path).map_err(|err| Error::FileOpen(path.display().to_string(), err))
}

fn write(path: &Path, contents: &[u8]) -> Result<(), Error> {
    fs::write(path, contents).map_err(|err| Error::FileWrite(path.display().to_string(), err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_by_extension() {
        let stage = |p: &str| Stage::from_path(Path::new(p)).ok();
        assert_eq!(stage("Main.jack"), Some(Stage::Compile));
        assert_eq!(stage("dir/Main.vm"), Some(Stage::Translate));
        assert_eq!(stage("Prog.asm"), Some(Stage::Assemble));
        assert_eq!(stage("Prog.hack"), None);
        assert_eq!(stage("Makefile"), None);
    }

    #[test]
    fn jack_is_unsupported() {
        let config = Config::default();
        assert!(matches!(
            process(Path::new("Main.jack"), &config),
            Err(Error::UnsupportedStage(_))
        ));
    }

    #[test]
    fn batch_continues_after_failure() {
        let config = Config::default();
        let results = process_all(&["Main.jack", "notes.txt"], &config);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].0, PathBuf::from("Main.jack"));
        assert!(matches!(results[0].1, Err(Error::UnsupportedStage(_))));
        assert!(matches!(results[1].1, Err(Error::UnknownExtension(_))));
    }

    #[test]
    fn missing_input() {
        let config = Config::default();
        assert!(matches!(
            process(Path::new("no/such/file.asm"), &config),
            Err(Error::FileOpen(..))
        ));
    }
}
