use colored::*;
use std::io::{self, BufRead, Write};

use cpu_65c02::Cpu;

use crate::command;

/// The line-oriented REPL: read a command, execute it against `cpu`, print
/// either its output or an `Error: ...` diagnostic, repeat. A malformed
/// line never panics and never mutates `cpu`.
pub fn run(cpu: &mut Cpu) -> io::Result<()> {
    let stdin = io::stdin();
    loop {
        print!("{} ", ">".dimmed());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF (e.g. piped input) ends the session like `exit`.
            return Ok(());
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match command::parse(line) {
            Ok(parsed) => match command::execute(parsed, cpu) {
                Ok(true) => {}
                Ok(false) => return Ok(()),
                Err(err) => println!("{} {}", "Error:".red(), err),
            },
            Err(err) => println!("{} {}", "Error:".red(), err),
        }
    }
}
