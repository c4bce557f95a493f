mod cli;
mod config;
mod fetch;
mod poll;
mod render;

use std::{
    io::{self, Write as _},
    process::ExitCode,
};

use chrono::Local;
use clap::Parser as _;
use color_eyre::{
    eyre::{Report, WrapErr as _},
    Result,
};
use gronk_data::Snapshot;
use tokio::{signal, sync::mpsc};
use tracing::{error, info, Level};

use cli::Args;
use config::Settings;
use fetch::HttpSource;
use poll::Poller;

#[tokio::main]
async fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version end up here too
            if let Err(print_err) = e.print() {
                // help goes to stdout, so stderr can still say why it is missing; a usage error
                // that can't reach stderr is left to the exit code
                if !e.use_stderr() {
                    eprintln!("error: printing to stdout: {print_err}");
                }
            }
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let settings = match Settings::new().wrap_err("loading configuration") {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("error: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = register_logging(settings.log_level) {
        eprintln!("error: {e:#}");
        return ExitCode::FAILURE;
    }

    match watch(&args.machine, &settings).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            oops(&e);
            ExitCode::FAILURE
        }
    }
}

/// The failure line belongs on stdout, next to the table. When stdout is what broke (a closed
/// pipe, say) it goes to stderr instead.
fn oops(e: &Report) {
    if let Err(write_err) = writeln!(io::stdout(), "Oops!: {e:#}") {
        error!(%write_err, "could not write to stdout");
        eprintln!("Oops!: {e:#}");
    }
}

/// Logs go to stderr, stdout belongs to the table.
fn register_logging(level: Level) -> Result<()> {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_ansi(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber).wrap_err("setting default subscriber failed")
}

/// Renders snapshots until the poller fails or we get interrupted.
async fn watch(machine: &str, settings: &Settings) -> Result<()> {
    let source = HttpSource::new(&settings.host, machine, settings.request_timeout())
        .wrap_err("building HTTP client")?;
    info!(url = source.url(), interval = ?settings.interval(), "watching");

    let (handoff, mut snapshots) = mpsc::channel(1);
    let poller = tokio::spawn(
        Poller::new(source, settings.interval())
            .fixed_rate(settings.fixed_rate)
            .run(handoff),
    );

    let interrupt = signal::ctrl_c();
    tokio::pin!(interrupt);
    let mut stdout = io::stdout();

    loop {
        tokio::select! {
            received = snapshots.recv() => match received {
                Some(mut snapshot) => {
                    if let Err(e) = present(&mut stdout, machine, &mut snapshot) {
                        poller.abort();
                        return Err(Report::new(e).wrap_err("writing to the terminal"));
                    }
                }
                // sender dropped: the poller has returned
                None => break,
            },
            interrupted = &mut interrupt => {
                poller.abort();
                interrupted.wrap_err("listening for Ctrl-C")?;
                info!("interrupted, shutting down");
                return Ok(());
            }
        }
    }

    poller
        .await
        .wrap_err("poller task died")?
        .wrap_err("fetching job data")
}

/// One frame per write so the terminal never shows half a table.
fn present(stdout: &mut io::Stdout, machine: &str, snapshot: &mut Snapshot) -> io::Result<()> {
    let mut frame = Vec::new();
    render::render(&mut frame, machine, snapshot, &Local)?;

    let mut stdout = stdout.lock();
    stdout.write_all(&frame)?;
    stdout.flush()
}
