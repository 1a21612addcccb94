use clap::Parser;
use openrouter_probe::cli::{Cli, Commands};
use openrouter_probe::{compare, logging, paragraphs, runner, samples, Config, HttpTransport};
use std::io::{self, Write};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> openrouter_probe::Result<()> {
    let stdout = io::stdout();
    match cli.command() {
        Commands::Send => {
            let config = Config::from_env_with(cli.env_file.as_deref())?;
            let transport = HttpTransport::new()?;
            runner::send(&config, transport, stdout.lock()).await?;
        }
        Commands::Compare(args) => {
            let mut out = stdout.lock();
            compare::compare_strings(
                &mut out,
                samples::CAPTURED_A,
                samples::CAPTURED_B,
                !args.no_whitespace,
            )?;
        }
        Commands::Paragraphs => {
            let mut out = stdout.lock();
            writeln!(out, "{}", paragraphs::format_paragraphs(samples::QUOTED_COMPLETION))?;
        }
    }
    Ok(())
}
