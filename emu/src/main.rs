use std::process::ExitCode;

use clap::Parser;
use color_print::cprintln;

use hackemu::hooks::{dump, dump::Dump, trace::Trace, Hook};
use hackemu::model::State;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Emulator for the Hack 16-bit architecture")]
struct Args {
    #[arg(short = 't', long)]
    tmax: Option<u64>,

    #[arg(short, long)]
    dump_cfg: Option<String>,

    #[arg(short = 'a', long)]
    dump_all: bool,

    /// Print every executed instruction
    #[arg(short, long)]
    verbose: bool,

    /// Initial RAM value, as `ADDR=VAL`
    #[arg(long = "set", value_parser = parse_set)]
    set: Vec<(u16, u16)>,

    #[arg(default_value = "main.bin")]
    input_file: String,
}

fn parse_set(s: &str) -> Result<(u16, u16), String> {
    let (addr, val) = s
        .split_once('=')
        .ok_or_else(|| format!("Expected ADDR=VAL: {}", s))?;
    let num = |s: &str| {
        s.trim()
            .parse::<i32>()
            .ok()
            .filter(|n| (-0x8000..=0xFFFF).contains(n))
            .map(|n| n as u16)
            .ok_or_else(|| format!("Cannot parse `{}` as numeral", s))
    };
    Ok((num(addr)?, num(val)?))
}

fn main() -> ExitCode {
    let args = Args::parse();
    println!("Hack Emulator");

    println!("+-----------------------------------+");
    println!("| {:<33} |", args.input_file);
    println!("+-----------------------------------+");

    // ------------------------------------------------------------------------
    // Initialize state machine model
    let mut state = State::new();
    if let Err(err) = state.load_rom_file(&args.input_file) {
        cprintln!("<red,bold>error</>: {}: {}", args.input_file, err);
        return ExitCode::FAILURE;
    }
    for (addr, val) in &args.set {
        state.set(*addr, *val);
    }

    // ------------------------------------------------------------------------
    // Initialize hooks
    println!("[INIT]");
    let dump = match Dump::arg(args.dump_cfg, args.dump_all) {
        Ok(dump) => dump,
        Err(msg) => {
            cprintln!("<red,bold>error</>: {}", msg);
            return ExitCode::FAILURE;
        }
    };
    let mut hooks: Vec<Box<dyn Hook>> = vec![Box::new(dump)];
    if args.verbose {
        hooks.push(Box::new(Trace));
    }

    // ------------------------------------------------------------------------
    // Main loop
    match hackemu::run(state, &mut hooks, args.tmax) {
        Ok((state, time)) => {
            println!("[EXIT] {} steps", time);
            dump::print_reg(&state);
            println!("=====================================");
            ExitCode::SUCCESS
        }
        Err(msg) => {
            cprintln!("<red,bold>error</>: {}", msg);
            ExitCode::FAILURE
        }
    }
}
