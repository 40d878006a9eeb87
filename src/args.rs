// Tiger Backend
//! Parse command line arguments
//! A hand-rolled parser is good enough for the handful of flags we take.

use std::env;

use anyhow::{anyhow, bail, Context, Result};
use serde::Deserialize;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EmitTarget {
  /// Selected instructions before allocation, temps by number.
  Abstract,
  /// Allocated x86-64 assembly.
  X86,
  /// A JSON allocation report.
  Json,
}

/// Configuration options for this compiler run.
pub struct Config {
  pub verbose: bool,
  pub dump_tree: bool,
  pub dump_assem: bool,
  pub dump_liveness: bool,

  pub emit: EmitTarget,
  /// Target description; the built-in x86-64 file when absent.
  pub target: Option<String>,
  /// Allocator options; defaults when absent.
  pub alloc_config: Option<String>,
  pub output: Option<String>,
  pub file: Option<String>,
}

/// Configuration options for the register allocator.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AllocConfig {
  pub coalescing: bool,
  /// Check worklist and move-bucket invariants after every transition.
  pub check_invariants: bool,
  pub eliminate_redundant_moves: bool,
}

impl Default for AllocConfig {
  fn default() -> Self {
    AllocConfig {
      coalescing: true,
      check_invariants: false,
      eliminate_redundant_moves: true,
    }
  }
}

impl AllocConfig {
  pub fn from_toml(text: &str) -> Result<Self> {
    toml::from_str(text).map_err(|e| anyhow!("Bad allocator options: {}", e))
  }

  pub fn from_file(path: Option<&str>) -> Result<Self> {
    match path {
      Some(path) => {
        let text = std::fs::read_to_string(path)
          .with_context(|| format!("Cannot read allocator options {}", path))?;
        Self::from_toml(&text)
      }
      None => Ok(AllocConfig::default()),
    }
  }
}

impl Config {
  /// Set your defaults here!
  fn default() -> Self {
    Config {
      verbose: false,       // Print phase timings
      dump_tree: false,     // Print the parsed IR
      dump_assem: false,    // Print the selected abstract assembly.
      dump_liveness: false, // Print live sets and the interference graph.

      emit: EmitTarget::X86, // Type of output
      target: None,          // Register file description
      alloc_config: None,    // Allocator options
      output: None,          // Output file, stdout when absent
      file: None,            // IR file to compile.
    }
  }
}

/// Parses command line input into a configuration.
pub fn parse_args() -> Result<Config> {
  let args: Vec<String> = env::args().skip(1).collect();
  parse_args_from(&args)
}

fn value_of<'a>(args: &'a [String], index: usize, flag: &str) -> Result<&'a str> {
  args
    .get(index + 1)
    .map(|s| s.as_str())
    .ok_or_else(|| anyhow!("Expected a value after {}", flag))
}

pub fn parse_args_from(args: &[String]) -> Result<Config> {
  let mut config = Config::default();
  let mut index = 0;
  while index < args.len() {
    match args[index].as_str() {
      "-v" | "--verbose" => config.verbose = true,
      "--dump-tree" => config.dump_tree = true,
      "--dump-assem" => config.dump_assem = true,
      "--dump-liveness" => config.dump_liveness = true,
      "-e" | "--emit" => {
        config.emit = match value_of(args, index, "--emit")? {
          "abs" => EmitTarget::Abstract,
          "asm" | "x86-64" => EmitTarget::X86,
          "json" => EmitTarget::Json,
          other => bail!("Unknown emit type : {}", other),
        };
        index += 1;
      }
      "--target" => {
        config.target = Some(value_of(args, index, "--target")?.to_string());
        index += 1;
      }
      "--config" => {
        config.alloc_config = Some(value_of(args, index, "--config")?.to_string());
        index += 1;
      }
      "-o" => {
        config.output = Some(value_of(args, index, "-o")?.to_string());
        index += 1;
      }
      flag if flag.starts_with('-') => bail!("Unknown option {}", flag),
      file => config.file = Some(file.to_string()),
    };
    index += 1;
  }

  if config.file.is_none() {
    bail!("Expected file input");
  }

  Ok(config)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn args(s: &str) -> Vec<String> {
    s.split_whitespace().map(|a| a.to_string()).collect()
  }

  #[test]
  fn test_flags() {
    let config =
      parse_args_from(&args("--emit json --dump-assem -o out.json --target toy.toml f.tir")).unwrap();
    assert_eq!(config.emit, EmitTarget::Json);
    assert!(config.dump_assem);
    assert!(!config.dump_tree);
    assert_eq!(config.output.as_deref(), Some("out.json"));
    assert_eq!(config.target.as_deref(), Some("toy.toml"));
    assert_eq!(config.file.as_deref(), Some("f.tir"));
  }

  #[test]
  fn test_bad_arguments() {
    assert!(parse_args_from(&args("--emit")).is_err());
    assert!(parse_args_from(&args("--emit wasm f.tir")).is_err());
    assert!(parse_args_from(&args("--frobnicate f.tir")).is_err());
    assert!(parse_args_from(&args("-v")).is_err());
  }

  #[test]
  fn test_alloc_config_defaults() {
    let config = AllocConfig::from_toml("check_invariants = true").unwrap();
    assert!(config.coalescing);
    assert!(config.check_invariants);
    assert!(config.eliminate_redundant_moves);
    assert!(AllocConfig::from_toml("colouring = 3").is_err());
    assert!(AllocConfig::from_file(None).unwrap().coalescing);
  }
}
