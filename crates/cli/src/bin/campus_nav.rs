use anyhow::Result;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    campus_nav_cli::main_entry()
}
