//! Box office binary
//!
//! Runs a single purchase through the logging payment and seat collaborators.

use box_office::{BoxOfficeConfig, BoxOfficeError, PurchaseOrder, USAGE, render_plan, settle};
use cinema_tickets_core::{PurchaseEnvironment, TicketServiceImpl};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    let config = BoxOfficeConfig::from_env();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(config.ansi)
                .with_writer(std::io::stderr),
        )
        .init();

    tracing::debug!(?config, "Configuration loaded");

    let service = TicketServiceImpl::new(PurchaseEnvironment::logging());

    let result = PurchaseOrder::from_args(std::env::args().skip(1))
        .and_then(|order| settle(&service, &order))
        .and_then(|plan| render_plan(&plan));

    match result {
        Ok(rendered) => {
            println!("{rendered}");
            ExitCode::SUCCESS
        },
        Err(error) => {
            tracing::error!(%error, "Purchase failed");
            eprintln!("{error}");
            if matches!(error, BoxOfficeError::Usage(_)) {
                eprintln!("{USAGE}");
            }
            ExitCode::from(error.exit_code())
        },
    }
}
