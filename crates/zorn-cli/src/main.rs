//! Zorn CLI - Command-line interface for painting note sequences
//!
//! This binary loads a note list and render configuration, then renders
//! frames, dumps draw intents, or reports analysis and validation results.

mod cli_args;

use clap::Parser;
use std::process::ExitCode;

use cli_args::{Cli, Commands, InputArgs};
use zorn_cli::commands;
use zorn_cli::commands::render::RenderOptions;
use zorn_cli::input::{load_input, RunInput};

fn load(input: &InputArgs) -> anyhow::Result<RunInput> {
    load_input(&input.notes, input.config.as_deref(), &input.to_overrides())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render {
            input,
            out,
            start,
            end,
            jobs,
        } => load(&input).and_then(|run_input| {
            let options = RenderOptions { start, end, jobs };
            commands::render::run(run_input, &out, &options)
        }),
        Commands::Frame { input, index, out } => {
            load(&input).and_then(|run_input| commands::frame::run(run_input, index, &out))
        }
        Commands::Intents {
            input,
            index,
            output,
            pretty,
        } => load(&input).and_then(|run_input| {
            commands::intents::run(run_input, index, output.as_deref(), pretty)
        }),
        Commands::Analyze {
            input,
            output,
            json,
        } => load(&input)
            .and_then(|run_input| commands::analyze::run(run_input, output.as_deref(), json)),
        Commands::Validate { input } => {
            load(&input).and_then(|run_input| commands::validate::run(run_input, &input.notes))
        }
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
