#![forbid(unsafe_code)]

use std::env;

use jobdeck_storage::{JobBoard, LocalStore};
use jobdeck_tools::cli::execute_command;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

fn run() -> Result<(), String> {
    let args: Vec<String> = env::args().skip(1).collect();
    let mut board = JobBoard::new(LocalStore::default_local());
    let output = execute_command(&mut board, &args)?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
