use std::io;

use arrrg::CommandLine;
use arrrg_derive::CommandLine;

use cqrsgen::{
    Overrides, cli_utils,
    commands::{self, Prompter},
};

#[derive(CommandLine, Default, PartialEq, Eq)]
struct Options {
    #[arrrg(optional, "Solution name used for namespaces and folders (default: SCT)")]
    solution_name: String,
    #[arrrg(optional, "Read the entity class definition from this file")]
    input: String,
    #[arrrg(optional, "Base directory for generated files (default: current directory)")]
    output_path: String,
    #[arrrg(optional, "Append a JSONL generation log to this file")]
    log: String,
    #[arrrg(flag, "Render and list the files without writing them")]
    dry_run: bool,
}

const USAGE: &str = r#"Usage: cqrsgen [options]

Options:
  --solution-name <name>   Solution name used for namespaces and folders (default: SCT)
  --input <file>           Read the entity class definition from this file
  --output-path <dir>      Base directory for generated files (default: current directory)
  --log <file>             Append a JSONL generation log to this file
  --dry-run                Render and list the files without writing them

Anything not given as an option is asked for interactively."#;

fn main() {
    let (options, free) = Options::from_command_line("USAGE: cqrsgen [options]");

    if !free.is_empty() {
        cli_utils::exit_with_usage_error(
            &format!("Unexpected argument '{}'", free[0]),
            USAGE,
        );
    }

    let overrides = Overrides {
        solution_name: options.solution_name,
        input: options.input,
        output_path: options.output_path,
        log: options.log,
        dry_run: options.dry_run,
    };

    println!("CQRS Generator");
    println!("--------------");

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    match commands::run(&overrides, &mut prompter) {
        Ok(summary) => {
            if summary.config.dry_run {
                println!();
                for written in &summary.written {
                    println!("{}", written.path.display());
                }
                cli_utils::print_success(&format!(
                    "\nDry run: {} files would be written under {}",
                    summary.written.len(),
                    summary.root.display()
                ));
            } else {
                cli_utils::print_success(&format!(
                    "\nCQRS components generated successfully! ({} files under {})",
                    summary.written.len(),
                    summary.root.display()
                ));
            }
        }
        Err(e) => {
            println!();
            commands::report_error(&e);
        }
    }
}
