use std::{path::PathBuf, process::ExitCode, time::Duration};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use console::style;

use capsule_core::{ChatCompletions, Config, Outcome, Pipeline, Provider, YoutubeCaptions};

mod logging;

/// CLI wrapper for Provider enum (needed for clap ValueEnum)
#[derive(Clone, Default, ValueEnum)]
enum CliProvider {
    #[default]
    Openai,
    Grok,
    Gemini,
}

impl From<CliProvider> for Provider {
    fn from(cli: CliProvider) -> Self {
        match cli {
            CliProvider::Openai => Provider::Openai,
            CliProvider::Grok => Provider::Grok,
            CliProvider::Gemini => Provider::Gemini,
        }
    }
}

#[derive(Parser)]
#[command(name = "capsule")]
#[command(about = "Fetch the English captions of a YouTube video and summarize them with AI")]
struct Cli {
    /// JSON config file with `videoUrl` and `apikey`
    #[arg(short, long, default_value = Config::DEFAULT_PATH)]
    config: PathBuf,

    /// AI provider for the summary
    #[arg(short, long, default_value = "openai")]
    provider: CliProvider,

    /// Model to use instead of the provider's default
    #[arg(short, long)]
    model: Option<String>,

    /// Timeout in seconds for each network request
    #[arg(short, long, default_value_t = 60, value_parser = clap::value_parser!(u64).range(1..))]
    timeout: u64,

    /// Log request details
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let provider: Provider = cli.provider.into();
    let timeout = Duration::from_secs(cli.timeout);

    println!(
        "\n{}  {}\n",
        style("capsule").cyan().bold(),
        style("Caption Summarizer").dim()
    );

    let config = Config::load(&cli.config);

    let mut completions = ChatCompletions::new(provider, timeout)?;
    if let Some(model) = cli.model {
        completions = completions.with_model(model);
    }
    let pipeline = Pipeline::new(YoutubeCaptions::new(timeout)?, completions);

    let outcome = pipeline.run(&config).await;

    match &outcome {
        Outcome::Summarized(summary) => {
            println!("{}", style("─".repeat(60)).dim());
            println!("{} {}", style("Summary:").green().bold(), summary);
        }
        other => println!("{} {}", style("✗").red().bold(), other.message()),
    }

    Ok(ExitCode::from(outcome.exit_code()))
}
