use colored::*;
use std::path::PathBuf;

use cpu_65c02::{Bus, Cpu, Ram};

use crate::error::DebuggerError;

/// One line of shell input, already split into a verb and its arguments.
/// `execute` is where state actually changes; `parse` never touches the
/// CPU, so a malformed command is guaranteed to leave it untouched.
pub enum Command {
    PrintRegisters,
    PrintByte(u16),
    PrintRange(u16, u16),
    SetRegister(Register, u32),
    SetBus(u16, u8),
    Step(usize),
    Load(PathBuf),
    Help,
    Exit,
}

#[derive(Clone, Copy)]
pub enum Register {
    A,
    X,
    Y,
    P,
    Pc,
    Sp,
}

pub fn parse(line: &str) -> Result<Command, DebuggerError> {
    let words: Vec<&str> = line.split_whitespace().collect();
    match words.as_slice() {
        ["print", "registers"] => Ok(Command::PrintRegisters),
        ["print", "bus", addr] => Ok(Command::PrintByte(parse_u16("print", addr)?)),
        ["print", "bus", low, high] => {
            let low = parse_u16("print", low)?;
            let high = parse_u16("print", high)?;
            Ok(Command::PrintRange(low, high))
        }
        ["set", "bus", addr, value] => {
            let addr = parse_u16("set", addr)?;
            let value = parse_u8("set", value)?;
            Ok(Command::SetBus(addr, value))
        }
        ["set", register, value] => {
            let register = parse_register(register)?;
            let value = parse_hex("set", value)?;
            Ok(Command::SetRegister(register, value))
        }
        ["step"] => Ok(Command::Step(1)),
        ["step", n] => {
            let n = n
                .parse::<usize>()
                .map_err(|_| DebuggerError::Parse(format!("step: '{n}' is not a count")))?;
            Ok(Command::Step(n))
        }
        ["load", path] => Ok(Command::Load(PathBuf::from(path))),
        ["help"] => Ok(Command::Help),
        ["exit"] => Ok(Command::Exit),
        [] => Err(DebuggerError::Parse(String::new())),
        [verb, ..] => Err(DebuggerError::Parse(format!("{verb}: unknown command"))),
    }
}

fn parse_register(name: &str) -> Result<Register, DebuggerError> {
    match name {
        "a" => Ok(Register::A),
        "x" => Ok(Register::X),
        "y" => Ok(Register::Y),
        "p" => Ok(Register::P),
        "pc" => Ok(Register::Pc),
        "sp" => Ok(Register::Sp),
        other => Err(DebuggerError::Parse(format!(
            "set: '{other}' is not a register (expected a, x, y, p, pc, or sp)"
        ))),
    }
}

fn parse_hex(command: &str, text: &str) -> Result<u32, DebuggerError> {
    u32::from_str_radix(text.trim_start_matches("0x"), 16)
        .map_err(|_| DebuggerError::Parse(format!("{command}: '{text}' is not a hex value")))
}

fn parse_u16(command: &str, text: &str) -> Result<u16, DebuggerError> {
    let value = parse_hex(command, text)?;
    u16::try_from(value)
        .map_err(|_| DebuggerError::Parse(format!("{command}: '{text}' does not fit in 16 bits")))
}

fn parse_u8(command: &str, text: &str) -> Result<u8, DebuggerError> {
    let value = parse_hex(command, text)?;
    u8::try_from(value)
        .map_err(|_| DebuggerError::Parse(format!("{command}: '{text}' does not fit in 8 bits")))
}

/// Runs a parsed command against `cpu`. The only failure mode here is a
/// bus write rejected while stepping or poking memory; parse errors never
/// reach this far.
pub fn execute(command: Command, cpu: &mut Cpu) -> Result<bool, DebuggerError> {
    match command {
        Command::PrintRegisters => {
            print_registers(cpu);
            Ok(true)
        }
        Command::PrintByte(addr) => {
            print_bytes(cpu, addr, addr);
            Ok(true)
        }
        Command::PrintRange(low, high) => {
            print_bytes(cpu, low, high);
            Ok(true)
        }
        Command::SetRegister(register, value) => {
            set_register(cpu, register, value)?;
            Ok(true)
        }
        Command::SetBus(addr, value) => {
            cpu.bus.write(addr, value)?;
            Ok(true)
        }
        Command::Step(n) => {
            for _ in 0..n {
                cpu.execute()?;
            }
            Ok(true)
        }
        Command::Load(path) => {
            let bytes = std::fs::read(&path)?;
            let mut ram = Ram::new();
            ram.load(&bytes);
            cpu.bus = Box::new(ram);
            Ok(true)
        }
        Command::Help => {
            print_help();
            Ok(true)
        }
        Command::Exit => Ok(false),
    }
}

fn set_register(cpu: &mut Cpu, register: Register, value: u32) -> Result<(), DebuggerError> {
    match register {
        Register::A => cpu.registers.a = require_u8("set", value)?,
        Register::X => cpu.registers.x = require_u8("set", value)?,
        Register::Y => cpu.registers.y = require_u8("set", value)?,
        Register::P => cpu.registers.p = require_u8("set", value)?,
        Register::Sp => cpu.registers.s = require_u8("set", value)?,
        Register::Pc => cpu.registers.pc = require_u16("set", value)?,
    }
    Ok(())
}

fn require_u8(command: &str, value: u32) -> Result<u8, DebuggerError> {
    u8::try_from(value)
        .map_err(|_| DebuggerError::Parse(format!("{command}: {value:#x} does not fit in 8 bits")))
}

fn require_u16(command: &str, value: u32) -> Result<u16, DebuggerError> {
    u16::try_from(value).map_err(|_| {
        DebuggerError::Parse(format!("{command}: {value:#x} does not fit in 16 bits"))
    })
}

fn print_registers(cpu: &Cpu) {
    let r = &cpu.registers;
    println!("{}  {:#04X}", "A ".bold(), r.a);
    println!("{}  {:#04X}", "X ".bold(), r.x);
    println!("{}  {:#04X}", "Y ".bold(), r.y);
    println!(
        "{}  {:08b} {}",
        "P ".bold(),
        r.p,
        "(NV-BDIZC)".dimmed()
    );
    println!(
        "{}  {:#04X} {}",
        "S ".bold(),
        r.s,
        format!("(stack at {:#06X})", 0x0100u16 + r.s as u16).dimmed()
    );
    println!("{} {:#06X}", "PC".bold(), r.pc);
}

fn print_bytes(cpu: &Cpu, low: u16, high: u16) {
    for addr in low..=high {
        println!("{}  {:02X}", format!("{addr:#06X}").dimmed(), cpu.bus.read(addr));
        if addr == u16::MAX {
            break;
        }
    }
}

fn print_help() {
    println!("print registers              dump A, X, Y, P, S, PC");
    println!("print bus <addr>             dump one byte");
    println!("print bus <low> <high>       dump an inclusive address range");
    println!("set (a|x|y|p|pc|sp) <value>  write a register (hex)");
    println!("set bus <addr> <value>       write one byte through the bus (hex)");
    println!("step [n]                     execute one or n instructions");
    println!("load <path>                  replace the bus with a fresh image");
    println!("help                         show this message");
    println!("exit                         leave the shell");
}

#[cfg(test)]
mod test {
    use super::*;
    use cpu_65c02::Ram;

    fn cpu() -> Cpu {
        Cpu::new(Box::new(Ram::new()))
    }

    #[test]
    fn set_pc_then_step_runs_the_new_instruction() {
        let mut cpu = cpu();
        cpu.bus.write(0x0200, 0xA9).unwrap();
        cpu.bus.write(0x0201, 0x7F).unwrap();

        execute(parse("set pc 0200").unwrap(), &mut cpu).unwrap();
        assert_eq!(cpu.registers.pc, 0x0200);

        execute(parse("step").unwrap(), &mut cpu).unwrap();
        assert_eq!(cpu.registers.a, 0x7F);
        assert_eq!(cpu.registers.pc, 0x0202);
    }

    #[test]
    fn step_n_runs_n_instructions() {
        let mut cpu = cpu();
        cpu.bus.write(0x0000, 0xE8).unwrap(); // INX
        cpu.bus.write(0x0001, 0xE8).unwrap();
        cpu.bus.write(0x0002, 0xE8).unwrap();

        execute(parse("step 3").unwrap(), &mut cpu).unwrap();
        assert_eq!(cpu.registers.x, 3);
    }

    #[test]
    fn set_bus_writes_through_the_bus() {
        let mut cpu = cpu();
        execute(parse("set bus 0010 2a").unwrap(), &mut cpu).unwrap();
        assert_eq!(cpu.bus.read(0x0010), 0x2A);
    }

    #[test]
    fn unknown_command_is_an_error_and_does_not_panic() {
        let err = parse("frobnicate").unwrap_err();
        assert!(err.to_string().contains("unknown command"));
    }

    #[test]
    fn malformed_hex_argument_is_an_error_and_leaves_cpu_untouched() {
        let mut cpu = cpu();
        let a_before = cpu.registers.a;
        let result = parse("set a zz").and_then(|cmd| execute(cmd, &mut cpu));
        assert!(result.is_err());
        assert_eq!(cpu.registers.a, a_before);
    }

    #[test]
    fn exit_returns_false() {
        let mut cpu = cpu();
        assert!(!execute(parse("exit").unwrap(), &mut cpu).unwrap());
    }

    #[test]
    fn load_replaces_the_bus_with_the_given_image() {
        let mut cpu = cpu();
        let dir = std::env::temp_dir();
        let path = dir.join("debugger_test_image.bin");
        std::fs::write(&path, [0xA9, 0x11]).unwrap();

        execute(parse(&format!("load {}", path.display())).unwrap(), &mut cpu).unwrap();
        assert_eq!(cpu.bus.read(0), 0xA9);
        assert_eq!(cpu.bus.read(1), 0x11);

        std::fs::remove_file(&path).unwrap();
    }
}
