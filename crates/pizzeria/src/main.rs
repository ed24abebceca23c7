//! Pizzeria entry point.

use std::process::ExitCode;

use pizzeria::config::Config;

fn main() -> ExitCode {
    // 1. Load configuration and initialize tracing
    let config = Config::from_env();
    pizzeria::init_tracing(&config);

    // 2. Place orders, one ticket per line on stdout
    let stdout = std::io::stdout();
    match pizzeria::run(&config, &mut stdout.lock()) {
        Ok(summary) => {
            tracing::info!(region = %summary.region, "pizzeria closed");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "pizzeria failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
