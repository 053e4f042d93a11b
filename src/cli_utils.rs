use std::process;

/// Exits the program with an error message
pub fn exit_with_error(message: &str) -> ! {
    eprintln!("Error: {}", message);
    process::exit(1);
}

/// Exits the program with an error message and usage information
pub fn exit_with_usage_error(message: &str, usage: &str) -> ! {
    eprintln!("Error: {}", message);
    eprintln!("{}", usage);
    process::exit(1);
}

/// Reports an error and an optional hint without exiting
pub fn print_error(message: &str, usage_hint: Option<&str>) {
    eprintln!("Error: {}", message);
    if let Some(hint) = usage_hint {
        eprintln!("{}", hint);
    }
}

/// Prints a formatted success message
pub fn print_success(message: &str) {
    println!("{}", message);
}

/// Prints formatted JSON with proper indentation
pub fn print_json<T>(value: &T) -> Result<(), serde_json::Error>
where
    T: serde::Serialize,
{
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Prints a value as YAML
pub fn print_yaml<T>(value: &T) -> Result<(), serde_yml::Error>
where
    T: serde::Serialize,
{
    print!("{}", serde_yml::to_string(value)?);
    Ok(())
}
