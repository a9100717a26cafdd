use std::path::Path;
use std::process::ExitCode;

use color_print::cprintln;
use hackasm::{assemble, dump, Config, Error, Format};

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
    #[clap(default_value = "main.asm", num_args = 1..)]
    input: Vec<String>,

    /// Output file (only with a single input)
    #[clap(short, long)]
    output: Option<String>,

    /// Output format
    #[clap(short, long, value_enum, default_value_t = Format::Bin)]
    format: Format,

    /// Bind `SP` as an ordinary variable, as older outputs of this tool expect
    #[clap(long)]
    legacy_sp: bool,

    /// Dump the resolved listing
    #[clap(short, long)]
    dump: bool,
}

fn main() -> ExitCode {
    use clap::Parser;

    let args: Args = Args::parse();
    println!("Hack Assembler");

    if args.output.is_some() && args.input.len() > 1 {
        cprintln!("<red,bold>error</>: --output needs exactly one input file");
        return ExitCode::FAILURE;
    }

    let config = Config {
        legacy_sp: args.legacy_sp,
    };
    let mut failed = 0;
    for path in &args.input {
        let output = match &args.output {
            Some(output) => output.clone(),
            None => Path::new(path)
                .with_extension(args.format.extension())
                .to_string_lossy()
                .to_string(),
        };
        if let Err(err) = run(path, &output, &config, &args) {
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

fn run(path: &str, output: &str, config: &Config, args: &Args) -> Result<(), Error> {
    println!("  < {}", path);
    let source =
        std::fs::read_to_string(path).map_err(|err| Error::FileOpen(path.to_string(), err))?;
    let program = assemble(&source, config)?;

    println!("  > {} ({} words)", output, program.words.len());
    std::fs::write(output, program.to_format(args.format))
        .map_err(|err| Error::FileWrite(output.to_string(), err))?;

    if args.dump {
        dump::print_dump(path, &program);
    }
    Ok(())
}
