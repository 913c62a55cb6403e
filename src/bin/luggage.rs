use std::env;
use std::error;
use std::fs;
use std::io::{self, Read};
use std::process;

use luggage::solve;

const DEFAULT_START: &str = "shiny gold";

fn main() {
    let mut args = env::args();
    let prog_name = args.next().unwrap_or_else(|| "luggage".to_string());
    let args: Vec<_> = args.collect();

    let (path, start) = match args.as_slice() {
        [] => (None, DEFAULT_START),
        [path] => (Some(path.as_str()), DEFAULT_START),
        [path, start] => (Some(path.as_str()), start.as_str()),
        _ => {
            eprint_usage(&prog_name);
            process::exit(1);
        }
    };

    match run(path, start) {
        Ok((ancestors, nested)) => {
            println!("{}", ancestors);
            println!("{}", nested);
        }
        Err(err) => {
            eprintln!("{}: {}", prog_name, err);
            process::exit(1);
        }
    }
}

fn run(path: Option<&str>, start: &str) -> Result<(usize, u64), Box<dyn error::Error>> {
    let input = match path {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            input
        }
    };
    Ok(solve(&input, start)?)
}

fn eprint_usage(prog_name: &str) {
    eprintln!(
        "usage: `{} [<input-file>] [<start-label>]`\nwith no <input-file>, rules are read from stdin",
        prog_name
    );
}
