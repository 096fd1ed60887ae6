use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use oldfr_ipa::io::format_syllables;
use oldfr_ipa::{
    FinalRulesConfig, HumanTranscription, MachineTranscription, PipelineConfig, Transcriber,
    read_utterances,
};

#[derive(Parser)]
#[command(name = "oldfr-ipa")]
#[command(author, version, about = "Old French to IPA transcription", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Where the text comes from
#[derive(Args)]
struct Source {
    /// Text to transcribe
    #[arg(short, long, conflicts_with = "input")]
    text: Option<String>,

    /// Input text file, one utterance per line
    #[arg(short, long)]
    input: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transcribe Old French text to IPA
    Transcribe {
        #[command(flatten)]
        source: Source,

        /// Output file for machine-readable transcription (JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output file for human-readable transcription (text)
        #[arg(long)]
        human_readable: Option<PathBuf>,

        /// Omit the outer `~ … ~` boundary markers
        #[arg(long)]
        no_wrap: bool,

        /// Words with at most this many base letters lose their stress mark
        #[arg(long, default_value = "2")]
        max_unstressed_len: usize,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show the syllable structure and stress of each word
    Analyze {
        #[command(flatten)]
        source: Source,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Transcribe {
            source,
            output,
            human_readable,
            no_wrap,
            max_unstressed_len,
            verbose,
        } => {
            setup_logging(verbose);
            let config = PipelineConfig {
                wrap_boundaries: !no_wrap,
                final_rules: FinalRulesConfig { max_unstressed_len },
            };
            transcribe_text(source, output, human_readable, config)
        }
        Commands::Analyze { source, verbose } => {
            setup_logging(verbose);
            analyze_text(source)
        }
    }
}

fn setup_logging(verbose: bool) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(log_filter(verbose, rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

/// `RUST_LOG` wins when set and valid; `--verbose` only picks the fallback level
fn log_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::default().add_directive(level.into()))
}

fn load_utterances(source: Source) -> Result<Vec<String>> {
    match (source.text, source.input) {
        (Some(text), _) => Ok(vec![text]),
        (None, Some(path)) => {
            info!("Loading text from {:?}", path);
            read_utterances(&path).context("Failed to read input text")
        }
        (None, None) => bail!("Either --text or --input is required"),
    }
}

fn transcribe_text(
    source: Source,
    output: Option<PathBuf>,
    human_readable: Option<PathBuf>,
    config: PipelineConfig,
) -> Result<()> {
    let utterances = load_utterances(source)?;
    let transcriber = Transcriber::new(config);

    let transcriptions: Vec<_> = utterances.iter().map(|u| transcriber.run(u)).collect();
    info!("Transcribed {} utterances", transcriptions.len());

    match &output {
        Some(path) => {
            MachineTranscription::new(&transcriptions)
                .write_json(path)
                .context("Failed to write machine transcription")?;
            info!("Output written to {:?}", path);
        }
        None => {
            for transcription in &transcriptions {
                println!("{}", transcription.output);
            }
        }
    }

    if let Some(path) = human_readable {
        HumanTranscription::new(&transcriptions)
            .write_file(&path)
            .context("Failed to write human-readable transcription")?;
        info!("Human-readable output written to {:?}", path);
    }

    Ok(())
}

fn analyze_text(source: Source) -> Result<()> {
    let utterances = load_utterances(source)?;
    let transcriber = Transcriber::default();

    for utterance in &utterances {
        let transcription = transcriber.run(utterance);

        println!("Utterance: {}", transcription.input);
        println!("Normalized: {}", transcription.normalized.trim());
        println!("IPA: {}", transcription.output);
        println!();

        for word in &transcription.words {
            let stress = match word.stress.index() {
                Some(index) => format!("syllable {}", index + 1),
                None => "none".to_string(),
            };
            println!("  {}", word.source);
            println!("    marked:    {}", word.marked);
            println!(
                "    syllables: {} ({})",
                format_syllables(&word.syllables, word.stress),
                word.syllables.len()
            );
            println!("    stress:    {}", stress);
            println!("    ipa:       {}", word.ipa);
        }
        println!();
    }

    Ok(())
}
