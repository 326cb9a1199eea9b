//! `ariss-clock` - AOS/LOS countdown clock for ARISS school contacts

use clap::Parser;

use ariss_clock::cli::args::Cli;
use ariss_clock::cli::commands;
use ariss_clock::error::ExitCode;
use ariss_clock::observability::init_logging;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if !cli.quiet {
        init_logging(cli.log_format, cli.verbose, cli.color);
    }

    // The run loop handles the first Ctrl+C itself; a second one, or
    // SIGTERM, ends the process immediately.
    tokio::spawn(async {
        #[cfg(unix)]
        let mut sigterm = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to register SIGTERM handler");

        #[cfg(unix)]
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {}
            _ = sigterm.recv() => std::process::exit(ExitCode::TERMINATED),
        }
        #[cfg(not(unix))]
        let _ = tokio::signal::ctrl_c().await;

        let _ = tokio::signal::ctrl_c().await;
        std::process::exit(ExitCode::INTERRUPTED);
    });

    match commands::dispatch(cli).await {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
