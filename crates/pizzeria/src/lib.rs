//! Command-line pizzeria.
//!
//! Opens the regional store named in the configuration, places each
//! configured order through it, and writes one JSON ticket per boxed pizza.
//! Labels the store does not recognize are logged and skipped.

pub mod config;
pub mod error;

use std::io::Write;

use common::Region;
use domain::{DomainError, OrderError, OrderTicket, PizzaStore, for_region};
use tracing::Subscriber;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use config::{Config, LogFormat};
use error::AppError;

/// Outcome of a pizzeria run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub region: Region,
    pub placed: Vec<OrderTicket>,
    pub rejected: Vec<String>,
}

/// Builds the tracing subscriber described by `config`, writing to `writer`.
pub fn subscriber<W>(config: &Config, writer: W) -> impl Subscriber + Send + Sync + use<W>
where
    W: for<'w> MakeWriter<'w> + Clone + Send + Sync + 'static,
{
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let json = config.log_format == LogFormat::Json;

    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| tracing_subscriber::fmt::layer().json().with_writer(writer.clone())))
        .with((!json).then(|| tracing_subscriber::fmt::layer().with_writer(writer)))
}

/// Installs the global tracing subscriber. Logs go to stderr so stdout
/// carries only tickets.
pub fn init_tracing(config: &Config) {
    subscriber(config, std::io::stderr).init();
}

/// Resolves the configured region to its store.
pub fn open_store(config: &Config) -> Result<Box<dyn PizzaStore>, AppError> {
    let region: Region = config.region.parse().map_err(DomainError::from)?;
    Ok(for_region(region))
}

/// Places every configured order, writing a JSON line per ticket to `out`.
#[tracing::instrument(skip_all, fields(region = %config.region))]
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<RunSummary, AppError> {
    let store = open_store(config)?;
    let mut summary = RunSummary {
        region: store.region(),
        placed: Vec::new(),
        rejected: Vec::new(),
    };

    for label in &config.orders {
        match store.order_pizza(label) {
            Ok(order) => {
                let ticket = order.ticket();
                serde_json::to_writer(&mut *out, &ticket)?;
                writeln!(out)?;
                summary.placed.push(ticket);
            }
            Err(OrderError::UnknownPizza { requested, .. }) => {
                tracing::warn!(pizza = %requested, "skipping order for unknown pizza");
                summary.rejected.push(requested);
            }
            Err(err) => return Err(DomainError::from(err).into()),
        }
    }

    tracing::info!(
        placed = summary.placed.len(),
        rejected = summary.rejected.len(),
        "all orders handled"
    );
    Ok(summary)
}
