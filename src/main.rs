use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kanban_board::api::BoardState;
use kanban_board::config::Config;
use kanban_board::replay::{self, Replay};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,kanban_board=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Arc::new(Config::from_env());
    tracing::info!(
        slot_bias = config.slot_bias,
        seed_defaults = config.seed_defaults,
        "Starting kanban replay v{}",
        env!("CARGO_PKG_VERSION")
    );

    let events = match std::env::args().nth(1) {
        Some(path) => {
            let file = File::open(&path).with_context(|| format!("opening event script {}", path))?;
            replay::load_events(BufReader::new(file))
                .with_context(|| format!("parsing event script {}", path))?
        }
        None => replay::load_events(io::stdin().lock()).context("parsing events from stdin")?,
    };
    tracing::info!(count = events.len(), "Loaded events");

    let mut replay = Replay::new(BoardState::new(config));
    let records = replay.run(events);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for record in &records {
        serde_json::to_writer(&mut out, record).context("writing event record")?;
        writeln!(out)?;
    }
    serde_json::to_writer_pretty(&mut out, &replay.board()).context("writing board")?;
    writeln!(out)?;
    out.flush()?;

    tracing::info!(cards = replay.state().board.len(), "Replay finished");
    Ok(())
}
