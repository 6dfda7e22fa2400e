use std::process::ExitCode;

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use ulid_bindata::BinaryUlid;

/// Decodes ULIDs into binary values for database queries.
#[derive(Debug, Parser)]
#[command(version, about)]
struct CliArgs {
    /// How to render each decoded ULID.
    #[arg(short, long, value_enum, default_value_t = Format::Bindata)]
    format: Format,
    /// ULIDs in canonical uppercase form.
    #[arg(required = true)]
    ulids: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// `{"_id": BinData(0, '<base64>')}`
    Bindata,
    /// `{"$binary": {"base64": "<base64>", "subType": "00"}}`, pretty-printed
    ExtendedJson,
    /// Standard Base64 of the 16 bytes
    Base64,
    /// Lowercase hex of the 16 bytes
    Hex,
}

fn setup_logging() {
    let dirs = "warn";

    let main_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(dirs)))
        .with(main_layer)
        .init();
}

fn render(ulid: BinaryUlid, format: Format) -> anyhow::Result<String> {
    Ok(match format {
        Format::Bindata => ulid.to_bindata_literal(),
        Format::ExtendedJson => ulid.to_extended_json()?,
        Format::Base64 => ulid.to_base64(),
        Format::Hex => hex::encode(ulid.as_bytes()),
    })
}

/// Formats the whole error chain on one line, the decoder's message last.
fn report(error: &anyhow::Error) -> String {
    format!("{error:#}")
}

fn run(args: &CliArgs) -> anyhow::Result<()> {
    for text in &args.ulids {
        let ulid: BinaryUlid = text.parse().with_context(|| format!("cannot decode ULID {text:?}"))?;

        tracing::debug!(
            ulid = %text,
            timestamp = ulid.timestamp(),
            randomness = %format!("{:020X}", ulid.randomness()),
            "decoded ULID"
        );

        println!("{}", render(ulid, args.format)?);
    }

    Ok(())
}

fn main() -> ExitCode {
    setup_logging();

    let args = CliArgs::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let message = report(&error);
            tracing::debug!(error = %message, "decoding failed");
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}
