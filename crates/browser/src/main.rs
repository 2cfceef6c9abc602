mod commands;
mod config;
mod render;
mod utils;

use anyhow::{Context, Result};
use catalog::controller::{CatalogController, Command, View};
use clap::Parser;
use commands::{HELP, Input, parse_input};
use config::{Args, BrowserConfig};
use log::{debug, error, info};
use render::{OutputFormat, RenderError};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Stdout};
use utils::shutdown::shutdown_signal;

const PROMPT: &str = "course> ";

async fn emit(stdout: &mut Stdout, text: &str) -> Result<()> {
    stdout.write_all(text.as_bytes()).await?;
    if !text.ends_with('\n') {
        stdout.write_all(b"\n").await?;
    }
    stdout.flush().await?;
    Ok(())
}

async fn emit_rendered(stdout: &mut Stdout, rendered: Result<String, RenderError>) -> Result<()> {
    match rendered {
        Ok(text) => emit(stdout, &text).await,
        Err(e) => {
            error!("{e}");
            Ok(())
        }
    }
}

/// Applies the configured sort, file and selections, in that order
async fn startup(controller: &mut CatalogController, config: &BrowserConfig) -> View {
    controller.dispatch(Command::SetSort(config.sort_key));

    if let Some(file) = &config.file {
        controller.load_file(file).await;
    }

    for (field, value) in &config.selections {
        controller.dispatch(Command::SetFilter {
            field: *field,
            value: value.clone(),
        });
    }

    controller.view()
}

async fn run_loop(
    controller: &mut CatalogController,
    format: OutputFormat,
    stdout: &mut Stdout,
) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        stdout.write_all(PROMPT.as_bytes()).await?;
        stdout.flush().await?;

        let line = tokio::select! {
            line = lines.next_line() => line.context("Failed to read from stdin")?,
            _ = &mut shutdown => {
                info!("Shutdown signal received");
                break;
            }
        };
        // End of input
        let Some(line) = line else {
            stdout.write_all(b"\n").await?;
            break;
        };

        let input = match parse_input(&line) {
            Ok(input) => input,
            Err(e) => {
                eprintln!("{e}");
                continue;
            }
        };
        debug!("Input: {input:?}");

        match input {
            Input::Catalog(command) => {
                let view = controller.dispatch(command);
                emit_rendered(stdout, format.render_view(&view)).await?;
            }
            Input::Load(path) => {
                let view = controller.load_file(&path).await;
                emit_rendered(stdout, format.render_view(&view)).await?;
            }
            Input::Facets => {
                emit_rendered(stdout, format.render_facets(&controller.view())).await?;
            }
            Input::Show => {
                emit_rendered(stdout, format.render_view(&controller.view())).await?;
            }
            Input::Help => emit(stdout, HELP).await?,
            Input::Quit => break,
            Input::Empty => {}
        }
    }

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = BrowserConfig::from(Args::parse());
    debug!("Configuration: {config:?}");

    let mut controller = CatalogController::new();
    let mut stdout = tokio::io::stdout();

    let view = startup(&mut controller, &config).await;
    emit_rendered(&mut stdout, config.format.render_view(&view)).await?;

    if config.batch {
        return Ok(());
    }

    emit(&mut stdout, "Type 'help' for a list of commands.").await?;
    run_loop(&mut controller, config.format, &mut stdout).await
}
