// Fmtlog - Formatters logging facility control
use clap::Parser;
use fmtlog::cli::args::Args;
use fmtlog::cli::commands::execute_command;

fn main() {
    let args = Args::parse();

    if let Err(e) = execute_command(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
