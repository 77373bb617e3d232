//! # Gim Main Entry Point

use std::fs::OpenOptions;
use std::process::ExitCode;
use std::sync::Mutex;

use gim::cmd_args::CommandLineArgs;
use gim::repl::io::terminal::terminal_viewport;
use gim::repl::io::{TerminalEventStream, TerminalRenderStream};
use gim::{config, source_file, AppController, EditorState, ExitStatus, StartupError};
use tracing_subscriber::{fmt::time::ChronoLocal, EnvFilter};

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing_subscriber();

    let status = match start().await {
        Ok(status) => status,
        Err(e) => match e.downcast::<StartupError>() {
            Ok(startup) => {
                tracing::error!("startup failed: {startup}");
                println!("{startup}");
                startup.exit_status()
            }
            Err(e) => {
                tracing::error!("editor failed: {e:#}");
                eprintln!("Gim: Error: {e:#}");
                ExitStatus::Error
            }
        },
    };

    tracing::info!(?status, "exiting");
    status.into()
}

async fn start() -> anyhow::Result<ExitStatus> {
    if !atty::is(atty::Stream::Stdin) {
        return Err(StartupError::NotATerminal.into());
    }

    let cmd_args = CommandLineArgs::parse();
    let path = cmd_args.file()?;
    let lines = source_file::load_lines(path)?;
    terminal_viewport().map_err(StartupError::Viewport)?;

    let event_stream = TerminalEventStream::spawn()?;
    let mut controller = AppController::with_io_streams(
        EditorState::from_lines(lines),
        event_stream,
        TerminalRenderStream::new(),
    )?;
    controller.run().await
}

/// Log to the file named by `GIM_LOG_FILE`; stdout belongs to the editor
fn init_tracing_subscriber() {
    let Some(path) = config::get_log_file() else {
        return;
    };
    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Gim: Warning: cannot open log file {path}: {e}");
            return;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config::get_log_filter()))
        .with_timer(ChronoLocal::rfc_3339())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
}
