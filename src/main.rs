use std::process::ExitCode;

use clap::Parser;

mod cli;
mod prompt;
mod render;
mod version_info;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = cli::Cli::parse();
    let stdin = std::io::stdin();
    match cli.run(&mut stdin.lock(), &mut std::io::stdout()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
