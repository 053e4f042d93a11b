use std::io::{self, Read};
use std::process;

use arrrg::CommandLine;
use arrrg_derive::CommandLine;

use cqrsgen::{EntityParser, cli_utils};

#[derive(CommandLine, Default, PartialEq, Eq)]
struct Options {
    #[arrrg(flag, "Print JSON instead of YAML")]
    json: bool,
}

fn main() {
    let (options, _) = Options::from_command_line("USAGE: entity2yaml [--json] < class.cs");

    let mut input = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input) {
        eprintln!("Failed to read stdin: {}", e);
        process::exit(1);
    }

    let entity = match EntityParser::parse(&input) {
        Ok(entity) => entity,
        Err(e) => {
            eprintln!("Failed to parse entity: {}", e);
            process::exit(1);
        }
    };

    let printed = if options.json {
        cli_utils::print_json(&entity).map_err(|e| e.to_string())
    } else {
        cli_utils::print_yaml(&entity).map_err(|e| e.to_string())
    };
    if let Err(e) = printed {
        cli_utils::exit_with_error(&format!("Failed to serialize entity: {}", e));
    }
}
