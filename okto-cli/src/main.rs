//! Entrypoint for CLI
mod clock;
mod font;
mod terminal;

use std::{env, error::Error, fs};

use log::{error, info};
use okto::{
    constants::{MEM_START, TIMER_FREQUENCY},
    prelude::*,
    IMPL_VERSION,
};

use crate::{clock::FrameClock, font::FONT_TABLE, terminal::Terminal};

static USAGE: &str = r#"
usage: okto CMD FILE [OPTIONS]

commands:
    run     Run the target ROM file
    dis     Disassemble the target ROM into readable mnemonics

options:
    --ips N     Instructions executed per second (default 420)
    --seed N    Seed the random number source for reproducible runs

examples:
    okto run breakout.ch8
    okto run breakout.ch8 --ips 700
    okto dis breakout.ch8
"#;

/// Instructions per second, at 7 steps per 60 Hz frame.
const DEFAULT_IPS: u64 = 420;

fn run_rom(filepath: &str, ips: u64, seed: Option<u64>) -> OktoResult<()> {
    let rom = fs::read(filepath)?;
    info!("loaded {} bytes from {}", rom.len(), filepath);

    let mut machine = Machine::new(MachineConf { rng_seed: seed });
    machine.reset(&rom)?;
    machine.load_font(&FONT_TABLE)?;

    let steps_per_frame = (ips / TIMER_FREQUENCY).max(1) as usize;
    let mut clock = FrameClock::new();
    let mut term = Terminal::setup()?;

    'frames: while term.is_running() {
        term.pump_input(&mut machine)?;

        for _ in 0..steps_per_frame {
            match machine.step() {
                Ok(Flow::KeyWait) => break, // idle until the next frame's input
                Ok(_) => {}
                Err(err) => {
                    // Recoverable for the machine, but without a debugger
                    // attached there is nothing useful to resume into.
                    error!("halted at {:#05X}: {err}", machine.pc());
                    break 'frames;
                }
            }
        }

        machine.tick_timers();
        term.render(&machine)?;
        clock.wait();
    }

    drop(term);
    println!("{}", machine.dump_display()?);

    Ok(())
}

fn disassemble(filepath: &str) -> OktoResult<()> {
    let rom = fs::read(filepath)?;

    for (i, pair) in rom.chunks(2).enumerate() {
        let addr = MEM_START + i * 2;
        match *pair {
            [a, b] => {
                let word = u16::from_be_bytes([a, b]);
                match Instruction::decode(word) {
                    Some(instr) => println!("{addr:04X}: {word:04X}  {instr}"),
                    None => println!("{addr:04X}: {word:04X}  .word"),
                }
            }
            // Trailing byte of an odd-sized ROM.
            [a] => println!("{addr:04X}: {a:02X}    .byte"),
            _ => unreachable!(),
        }
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Warn)
        .env()
        .init()
        .unwrap();

    match parse_args() {
        Some(Cmd::Run {
            filepath,
            ips,
            seed,
        }) => run_rom(&filepath, ips, seed)?,
        Some(Cmd::Dis { filepath }) => disassemble(&filepath)?,
        None => {
            print_usage();
            // FreeBSD EX_USAGE (64)
            std::process::exit(64)
        }
    }

    Ok(())
}

enum Cmd {
    /// Run file
    Run {
        filepath: String,
        ips: u64,
        seed: Option<u64>,
    },
    /// Disassemble
    Dis { filepath: String },
}

fn parse_args() -> Option<Cmd> {
    let mut args = env::args().skip(1);

    let cmd = args.next()?;
    let filepath = args.next()?;

    match cmd.as_str() {
        "run" => {
            let mut ips = DEFAULT_IPS;
            let mut seed = None;
            while let Some(flag) = args.next() {
                match flag.as_str() {
                    "--ips" => ips = args.next()?.parse().ok()?,
                    "--seed" => seed = Some(args.next()?.parse().ok()?),
                    _ => return None,
                }
            }
            Some(Cmd::Run {
                filepath,
                ips,
                seed,
            })
        }
        "dis" => Some(Cmd::Dis { filepath }),
        _ => None,
    }
}

fn print_usage() {
    println!("okto v{IMPL_VERSION}");
    println!("{USAGE}");
}
