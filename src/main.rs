//! Factory-sim binary for exercising the selectors from the command line.

use std::sync::Arc;

use clap::{Parser, Subcommand};
use factory_sim::traits::Result;
use factory_sim::validation::{validate_picture_trace, validate_transport_trace};
use factory_sim::{
    CameraMaker, Catalog, LogSink, MemorySink, SharedSink, StdoutSink, TransportFactory,
    TransportKind,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "factory-sim")]
#[command(about = "Build simulated cameras and vehicles through their factories")]
struct Cli {
    /// Capture the trace and validate it before printing
    #[arg(long, global = true)]
    check: bool,

    /// Print trace lines as-is on stdout instead of logging them
    #[arg(long, global = true)]
    plain: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a vehicle and travel with it
    Transport {
        /// CAR, BOAT or PLANE (case-insensitive)
        key: String,
    },
    /// Build a camera and take a picture
    Camera {
        /// Maker name (case-insensitive)
        maker: String,
        /// Extra `[[camera]]` records as an inline TOML document
        #[arg(long)]
        catalog_toml: Option<String>,
    },
    /// List every recognized key
    List,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let output = if cli.plain {
        StdoutSink::shared()
    } else {
        LogSink::shared()
    };
    let check = cli.check;

    match cli.command {
        Commands::Transport { key } => {
            let kind = key.parse::<TransportKind>()?;
            traced(
                check,
                &output,
                |sink| {
                    TransportFactory::create(kind, sink).travel();
                    Ok(())
                },
                |lines| validate_transport_trace(lines, kind),
            )
        }
        Commands::Camera {
            maker,
            catalog_toml,
        } => {
            let mut catalog = Catalog::builtin();
            if let Some(document) = catalog_toml {
                catalog.extend(Catalog::from_toml_str(&document)?)?;
            }
            traced(
                check,
                &output,
                |sink| {
                    catalog.build(&maker, sink)?.take_picture();
                    Ok(())
                },
                validate_picture_trace,
            )
        }
        Commands::List => {
            let transports: Vec<&str> = TransportKind::ALL
                .into_iter()
                .map(TransportKind::as_str)
                .collect();
            let makers: Vec<&str> = CameraMaker::ALL
                .into_iter()
                .map(CameraMaker::as_str)
                .collect();
            println!("transports: {}", transports.join(", "));
            println!("cameras: {}", makers.join(", "));
            Ok(())
        }
    }
}

/// Run `action` against `output`, or against a recording sink whose lines
/// are validated with `validate` and then replayed into `output`.
fn traced<A, C>(check: bool, output: &SharedSink, action: A, validate: C) -> Result<()>
where
    A: FnOnce(SharedSink) -> Result<()>,
    C: FnOnce(&[String]) -> Result<()>,
{
    if !check {
        return action(Arc::clone(output));
    }

    let recorder = MemorySink::new();
    action(Arc::<MemorySink>::clone(&recorder))?;

    let lines = recorder.lines();
    validate(&lines)?;
    for line in &lines {
        output.emit(line);
    }
    tracing::info!(lines = lines.len(), "trace validated");
    Ok(())
}
