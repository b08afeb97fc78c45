use clap::Parser;
use pantry::cli::{execute_command, Cli};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = execute_command(cli) {
        eprintln!("pantry: {}", e);
        std::process::exit(1);
    }
}
