//! quizcard - compose a quiz card image and its answer-reveal sidecar

use anyhow::Context;
use clap::Parser;
use quizcard::{
    compose_card, load_record, resolve_background, resolve_fonts, write_outputs, Settings,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "quizcard",
    version,
    about = "Compose a quiz card image from a question record"
)]
struct Cli {
    /// Question record JSON; the built-in sample is used when omitted
    #[arg(long, value_name = "FILE")]
    question: Option<PathBuf>,

    /// Settings JSON
    #[arg(long, value_name = "FILE", default_value = "settings.json")]
    settings: PathBuf,

    /// Card image path, overriding the settings file
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Background image, overriding the settings file
    #[arg(long, value_name = "FILE")]
    background: Option<PathBuf>,
}

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut settings = Settings::load(&cli.settings);
    if let Some(output) = cli.output {
        settings.output.image = output;
    }
    if let Some(background) = cli.background {
        settings.background = background;
    }

    let record = load_record(cli.question.as_deref());
    let fonts = resolve_fonts(&settings);
    let background = resolve_background(&settings);

    tracing::info!("Composing card");
    let card = compose_card(&record, &fonts, &background, &settings)
        .context("card could not be painted; no image produced")?;

    write_outputs(&card, &record, &settings.output)?;
    Ok(())
}
