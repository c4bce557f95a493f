use clap::Parser;

/// Live table of the jobs running on an ALCF machine, refreshed every few seconds.
#[derive(Debug, Clone, PartialEq, Parser)]
#[command(version, about)]
pub struct Args {
    /// Machine to watch, as it appears in the status URL (e.g. `mira`)
    #[arg(value_parser = parse_machine)]
    pub machine: String,
}

/// The name ends up as a path segment of the status URL.
fn parse_machine(input: &str) -> Result<String, String> {
    let machine = input.trim();
    if machine.is_empty() {
        return Err("machine name must not be empty".to_owned());
    }
    if machine.contains(&['/', '?', '#'][..]) {
        return Err(format!("`{machine}` is not a machine name"));
    }
    Ok(machine.to_owned())
}
