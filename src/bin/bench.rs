//! Command-line entry point for the sort benchmark.
//!
//! With no arguments, both random generators run at every size. With
//! `--1|--2|--3 <file>`, the named file supplies the data and the flag
//! caps the sizes (`--1` small only, `--2` small and medium, `--3` all).

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use mksort::harness::{ALL_RUNNERS, DataGenerator, DataSize, run_sorts};

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let (generators, sizes) = if args.is_empty() {
        (
            vec![DataGenerator::Random, DataGenerator::PseudoWords],
            DataSize::ALL.to_vec(),
        )
    } else if args.len() == 2 {
        let sizes = match args[0].as_str() {
            "--1" => vec![DataSize::Small],
            "--2" => vec![DataSize::Small, DataSize::Medium],
            "--3" => DataSize::ALL.to_vec(),
            _ => {
                eprintln!("First argument must be size (--1, --2, or --3)");
                return ExitCode::FAILURE;
            }
        };
        let path = PathBuf::from(&args[1]);
        if let Err(err) = std::fs::File::open(&path) {
            eprintln!("File '{}' not found! ({err})", path.display());
            return ExitCode::FAILURE;
        }
        (vec![DataGenerator::File(path)], sizes)
    } else {
        eprintln!("Please provide two arguments: --1|--2|--3 <filename>");
        return ExitCode::FAILURE;
    };

    run_sorts(&generators, &ALL_RUNNERS, &sizes);
    ExitCode::SUCCESS
}
