use std::path::Path;
use std::process::ExitCode;

use color_print::cprintln;
use hackvm::{translate, Config, Error};

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
    /// Input files
    #[clap(default_value = "main.vm", num_args = 1..)]
    input: Vec<String>,

    /// Output file (only with a single input)
    #[clap(short, long)]
    output: Option<String>,

    /// Set up the stack and call `Sys.init` first
    #[clap(long)]
    bootstrap: bool,

    /// Write each VM command as a comment above its code
    #[clap(long)]
    annotate: bool,
}

fn main() -> ExitCode {
    use clap::Parser;

    let args: Args = Args::parse();
    println!("Hack VM Translator");

    if args.output.is_some() && args.input.len() > 1 {
        cprintln!("<red,bold>error</>: --output needs exactly one input file");
        return ExitCode::FAILURE;
    }

    let config = Config {
        bootstrap: args.bootstrap,
        annotate: args.annotate,
    };
    let mut failed = 0;
    for path in &args.input {
        let output = match &args.output {
            Some(output) => output.clone(),
            None => Path::new(path)
                .with_extension("asm")
                .to_string_lossy()
                .to_string(),
        };
        if let Err(err) = run(path, &output, &config) {
            err.print_diag(path);
            failed += 1;
        }
    }

    if failed > 0 {
        cprintln!("<red,bold>{}</> of {} files failed", failed, args.input.len());
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn run(path: &str, output: &str, config: &Config) -> Result<(), Error> {
    println!("  < {}", path);
    let source =
        std::fs::read_to_string(path).map_err(|err| Error::FileOpen(path.to_string(), err))?;
    let asm = translate(&source, config)?;

    println!("  > {} ({} lines)", output, asm.lines().count());
    std::fs::write(output, asm).map_err(|err| Error::FileWrite(output.to_string(), err))?;
    Ok(())
}
