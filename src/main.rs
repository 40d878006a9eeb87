// Tiger Backend
//! Top Level Environment
//!
//! Reads canonical tree IR, selects instructions, allocates registers and
//! writes the result.

#[allow(clippy::all, unused_imports)]
mod tir;

mod args;
mod asm;
mod codegen;
mod emit;
mod frame;
mod lex;
mod parse;
mod regalloc;
mod registers;
mod temp;
mod tree;
mod utils;

use std::thread;
use std::time;

use anyhow::{Context, Result};

use crate::args::{AllocConfig, Config, EmitTarget};
use crate::asm::Instr;
use crate::frame::Frame;
use crate::parse::parser;
use crate::regalloc::{Allocation, FlowGraph, InterferenceGraph, Liveness, RegAllocator};
use crate::registers::{MachineDesc, TargetSpec, X86_64};
use crate::temp::{Label, Namer, TempMap};
use crate::tree::Proc;

// Helper macro to time evaluating an expression (like a function call.)
macro_rules! time {
  ( $x:expr ) => {{
    let t1 = time::SystemTime::now();
    let result = $x;
    (result, t1.elapsed().unwrap_or_default())
  }};
}

fn load_target(path: &str) -> Result<MachineDesc> {
  let text = std::fs::read_to_string(path).with_context(|| format!("Cannot read target {}", path))?;
  MachineDesc::from_spec(&TargetSpec::from_toml(&text)?)
}

/// Print live-out sets and the interference graph of the first round.
fn dump_liveness(name: &Label, instrs: &[Instr], machine: &MachineDesc) -> Result<()> {
  let flow = FlowGraph::build(instrs)?;
  let liveness = Liveness::analyze(&flow)?;
  let ig = InterferenceGraph::build(&flow, &liveness, machine);
  let mut names = TempMap::new();
  for r in machine.registers() {
    if let Some(n) = machine.asm_name(r) {
      names.insert(r, n);
    }
  }
  println!("Liveness of {} ({} passes):", name, liveness.passes());
  print!("{}", liveness.dump(&names));
  println!("Interference of {}:", name);
  print!("{}", ig.dump(machine, &names));
  Ok(())
}

/// Select instructions for one procedure and allocate its registers.
fn compile_proc(
  proc: Proc,
  cfg: &Config,
  machine: &MachineDesc,
  alloc_config: &AllocConfig,
  namer: &mut Namer,
) -> Result<(Vec<Instr>, Allocation)> {
  let mut frame = Frame::new(proc.name.clone(), proc.locals_size, machine);
  let body = frame.save_callee_saves(proc.body, machine, namer);
  let instrs = codegen::munch_proc(body, &mut frame, machine, namer)?;

  if cfg.dump_assem {
    println!("Function: {}", frame.name());
    for instr in &instrs {
      println!("{}", instr);
    }
  }
  if cfg.dump_liveness {
    dump_liveness(frame.name(), &instrs, machine)?;
  }

  let selected = instrs.clone();
  let alloc = RegAllocator::new(machine, alloc_config).allocate(instrs, frame, namer)?;
  log::debug!(
    "{}: {} rounds, {} spilled",
    alloc.frame.name(),
    alloc.rounds,
    alloc.spilled.len()
  );
  Ok((selected, alloc))
}

fn run(cfg: Config) -> i32 {
  let target;
  let machine: &MachineDesc = match cfg.target.as_deref() {
    Some(path) => match load_target(path) {
      Ok(m) => {
        target = m;
        &target
      }
      Err(e) => {
        eprintln!("{:#}", e);
        return 1;
      }
    },
    None => &X86_64,
  };
  let alloc_config = match AllocConfig::from_file(cfg.alloc_config.as_deref()) {
    Ok(c) => c,
    Err(e) => {
      eprintln!("{:#}", e);
      return 1;
    }
  };

  let filename = match cfg.file.as_deref() {
    Some(f) => f,
    None => return 1,
  };
  let (program, parse_time) = time!(parser::parse(filename, machine));
  let procs = match program {
    Err(e) => {
      eprintln!("{:#}", e);
      return 1; // Parse failed!
    }
    Ok(procs) => procs,
  };

  if cfg.dump_tree {
    for proc in &procs {
      println!("{}", proc);
    }
  }

  // one namer for the whole file, so temps are never reused
  let mut namer = Namer::new().resume_after(procs.iter().filter_map(Proc::max_temp).max());
  let mut selected = vec![];
  let mut allocs = vec![];
  let mut failed = false;
  let (_, alloc_time) = time!(for proc in procs {
    let name = proc.name.clone();
    match compile_proc(proc, &cfg, machine, &alloc_config, &mut namer) {
      Ok((instrs, alloc)) => {
        selected.push((name, instrs));
        allocs.push(alloc);
      }
      Err(e) => {
        eprintln!("{}: {:#}", name, e);
        failed = true;
      }
    }
  });
  if failed {
    return 1;
  }

  if cfg.verbose {
    println!("Parse time: {} us", parse_time.as_micros());
    println!("Codegen and allocation: {} us", alloc_time.as_micros());
  }

  let text = match cfg.emit {
    EmitTarget::Abstract => emit::return_abs(&selected),
    EmitTarget::X86 => emit::return_x86(&allocs),
    EmitTarget::Json => emit::return_json(&allocs),
  };
  match text.and_then(|t| emit::emit(&t, cfg.output.as_deref())) {
    Ok(()) => 0,
    Err(e) => {
      eprintln!("{:#}", e);
      1
    }
  }
}

fn main() {
  let cfg = match args::parse_args() {
    Ok(cfg) => cfg,
    Err(e) => {
      eprintln!("{:#}", e);
      std::process::exit(1);
    }
  };

  // Large stack for deeply nested trees.
  let child = thread::Builder::new()
    .stack_size(128 * 1024 * 1024)
    .spawn(move || {
      // make envlogger stdout
      env_logger::builder()
        .target(env_logger::Target::Stdout)
        .format_timestamp(None)
        .init();
      run(cfg)
    });
  let code = match child {
    Ok(handle) => handle.join().unwrap_or(101),
    Err(e) => {
      eprintln!("Couldn't spawn compiler thread: {}", e);
      1
    }
  };
  // Return the value from the child thread as the return value of the compiler.
  std::process::exit(code);
}
