use std::path::PathBuf;
use std::process::ExitCode;

use color_print::cprintln;
use hackasm::Format;
use hackc::{process_all, Config};

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {author}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(author, version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input files (.vm or .asm)
    #[clap(required = true, num_args = 1..)]
    input: Vec<String>,

    /// YAML config file
    #[clap(short, long)]
    config: Option<String>,

    /// Output directory
    #[clap(short, long)]
    out_dir: Option<PathBuf>,

    /// Output format
    #[clap(short, long, value_enum)]
    format: Option<Format>,

    /// Bind `SP` as an ordinary variable
    #[clap(long)]
    legacy_sp: bool,

    /// Set up the stack and call `Sys.init` first
    #[clap(long)]
    bootstrap: bool,

    /// Write each VM command as a comment above its code
    #[clap(long)]
    annotate: bool,
}

impl Args {
    /// Config file values, overridden by flags given on the command line.
    fn config(&self) -> Result<Config, hackc::Error> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        if let Some(out_dir) = &self.out_dir {
            config.out_dir = out_dir.clone();
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        config.legacy_sp |= self.legacy_sp;
        config.bootstrap |= self.bootstrap;
        config.annotate |= self.annotate;
        Ok(config)
    }
}

fn main() -> ExitCode {
    use clap::Parser;

    let args: Args = Args::parse();
    println!("Hack Build");

    let config = match args.config() {
        Ok(config) => config,
        Err(err) => {
            err.print_diag(args.config.as_deref().unwrap_or(""));
            return ExitCode::FAILURE;
        }
    };

    let results = process_all(args.input.as_slice(), &config);
    let mut failed = 0;
    for (idx, (path, result)) in results.iter().enumerate() {
        let path = path.display().to_string();
        println!("{}. {}", idx + 1, path);
        println!("  < {}", path);
        match result {
            Ok(artifacts) => {
                for file in &artifacts.files {
                    println!("  > {}", file.display());
                }
                cprintln!("  <green>ok</> ({} words)", artifacts.words);
            }
            Err(err) => {
                err.print_diag(&path);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        cprintln!("<red,bold>{}</> of {} files failed", failed, args.input.len());
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
