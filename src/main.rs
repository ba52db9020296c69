use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use unify_core::{Config, RejectedPayload};

#[derive(Parser)]
#[command(name = "unify", about = "Map schema-less event records onto one canonical event shape")]
struct Cli {
    /// JSON-lines input, one event record per line.
    #[arg(default_value = "events.jsonl")]
    input: PathBuf,
    /// Where to write unified events (overrides `output.unified_path`).
    #[arg(long)]
    out: Option<PathBuf>,
    /// Where to write rejected records (overrides `output.rejected_path`).
    #[arg(long)]
    rejected_out: Option<PathBuf>,
    /// Config file to use instead of ~/.config/unify/config.toml.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Map records on all cores once field categories are frozen.
    #[arg(long)]
    parallel: bool,
    /// Keep or drop the original payload of rejected records (retain|drop).
    #[arg(long)]
    rejected_payload: Option<RejectedPayload>,
    /// Write tagged outcomes to stdout as JSON lines instead of files.
    #[arg(long)]
    stream: bool,
    /// Write compact instead of pretty-printed JSON files.
    #[arg(long)]
    compact: bool,
    /// Log at debug level to stderr.
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(if cli.debug { "debug" } else { "warn" })
            }),
        )
        .init();

    tracing::info!(input = %cli.input.display(), "starting run");

    let mut config = Config::load(cli.config.as_deref()).context("loading configuration")?;
    if cli.parallel {
        config.mapping.parallel = true;
    }
    if let Some(policy) = cli.rejected_payload {
        config.mapping.rejected_payload = policy;
    }
    if cli.compact {
        config.output.pretty = false;
    }
    if let Some(out) = cli.out {
        config.output.unified_path = out;
    }
    if let Some(out) = cli.rejected_out {
        config.output.rejected_path = out;
    }

    let output = unify::unify_file(&cli.input, &config.mapping)
        .with_context(|| format!("processing {}", cli.input.display()))?;

    if cli.stream {
        let stdout = std::io::stdout().lock();
        unify_io::writer::write_outcomes_jsonl(stdout, &output.outcomes)
            .context("writing outcome stream")?;
        eprintln!("{}", unify_io::Report::from_output(&output));
        return Ok(());
    }

    println!("{}", unify_io::Report::from_output(&output));

    let events: Vec<_> = output.unified().collect();
    unify_io::writer::write_unified(&config.output.unified_path, &events, config.output.pretty)
        .context("writing unified events")?;
    println!(
        "\nSaved {} events to {}",
        events.len(),
        config.output.unified_path.display()
    );

    let rejected: Vec<_> = output.rejected().collect();
    if unify_io::writer::write_rejected(&config.output.rejected_path, &rejected, config.output.pretty)
        .context("writing rejected records")?
    {
        println!(
            "Saved {} invalid events to {}",
            rejected.len(),
            config.output.rejected_path.display()
        );
    }

    Ok(())
}
