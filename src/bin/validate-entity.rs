use std::fs;
use std::process;

use arrrg::CommandLine;
use arrrg_derive::CommandLine;

use cqrsgen::EntityParser;

#[derive(CommandLine, Default, PartialEq, Eq)]
struct Options {
    #[arrrg(flag, "Enable verbose output showing pass/fail for each file")]
    verbose: bool,
}

fn main() {
    let (options, free) =
        Options::from_command_line("USAGE: validate-entity [--verbose] <file>...");

    if free.is_empty() {
        process::exit(1);
    }

    let mut all_valid = true;

    for path in &free {
        let valid = match fs::read_to_string(path) {
            Ok(content) => EntityParser::parse(&content).is_ok(),
            Err(_) => false,
        };

        if options.verbose {
            println!("{} {}", path, if valid { "pass" } else { "fail" });
        }
        all_valid &= valid;
    }

    if all_valid {
        process::exit(0);
    } else {
        process::exit(1);
    }
}
