//! Interactive line-oriented shell for the 65C02 core: load a raw binary
//! image, inspect and poke registers and bus memory, and single-step.
//! Contains no emulation logic of its own — everything here calls
//! straight into `cpu_65c02::Cpu`'s public surface.

mod command;
mod error;
mod shell;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use cpu_65c02::{Cpu, Ram};
use error::DebuggerError;

/// A line-oriented debugger for the 65C02 CPU core.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Raw binary image loaded into the bus starting at address 0.
    image: PathBuf,

    /// Call Reset() once the image is loaded, so PC starts at the vector
    /// the image provides, instead of at address 0.
    #[arg(long)]
    reset: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), DebuggerError> {
    let bytes = std::fs::read(&cli.image)?;
    let mut ram = Ram::new();
    ram.load(&bytes);

    let mut cpu = Cpu::new(Box::new(ram));
    if cli.reset {
        cpu.reset();
    }

    shell::run(&mut cpu)?;
    Ok(())
}
