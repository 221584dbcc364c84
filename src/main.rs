//! Calculus Tutor - answer introductory calculus questions from the command line.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use calculus_tutor::config::{SegmenterKind, TutorConfig};
use calculus_tutor::knowledge::{builtin, KnowledgeBase, KnowledgeFile};
use calculus_tutor::matching::{DictionarySegmenter, Matcher, Segmenter, WordSegmenter};
use calculus_tutor::render::{self, OutputFormat};

type BoxedSegmenter = Box<dyn Segmenter + Send + Sync>;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SegmenterArg {
    Word,
    Dictionary,
}

impl From<SegmenterArg> for SegmenterKind {
    fn from(arg: SegmenterArg) -> Self {
        match arg {
            SegmenterArg::Word => SegmenterKind::Word,
            SegmenterArg::Dictionary => SegmenterKind::Dictionary,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Parser)]
#[command(
    name = "calculus-tutor",
    about = "Answer introductory calculus questions from a fixed knowledge base",
    version
)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a TOML config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Knowledge file to answer from instead of the built-in dataset.
    #[arg(long, global = true)]
    knowledge_base: Option<PathBuf>,

    /// How questions are split into tokens.
    #[arg(long, value_enum, global = true)]
    segmenter: Option<SegmenterArg>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer a single question.
    Ask {
        /// The question, e.g. "What is a derivative?"
        question: Vec<String>,
        /// Output format.
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,
    },
    /// Answer questions read line by line from stdin until a blank line.
    Chat {
        /// Output format.
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,
    },
    /// List the available topics in matching order.
    Topics,
    /// Write the active knowledge base to a versioned knowledge file.
    Export {
        /// Destination path; must not exist.
        path: PathBuf,
    },
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn load_knowledge(config: &TutorConfig) -> Result<KnowledgeBase, String> {
    match &config.knowledge_base {
        Some(path) => KnowledgeFile::load(path)
            .map_err(|e| format!("Failed to load knowledge file {}: {e}", path.display())),
        None => {
            tracing::debug!("Using built-in calculus knowledge base");
            Ok(builtin::calculus())
        }
    }
}

fn make_segmenter(kind: SegmenterKind, knowledge: &KnowledgeBase) -> BoxedSegmenter {
    match kind {
        SegmenterKind::Word => Box::new(WordSegmenter),
        SegmenterKind::Dictionary => Box::new(DictionarySegmenter::for_knowledge_base(knowledge)),
    }
}

fn print_answer(
    matcher: &Matcher<BoxedSegmenter>,
    question: Option<&str>,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<(), String> {
    let answer = matcher.resolve(question);
    tracing::info!(
        topic = answer.topic.as_ref().map(|t| t.as_str()).unwrap_or("<fallback>"),
        "Answered question"
    );
    let rendered = render::render(&answer, format).map_err(|e| format!("Failed to render answer: {e}"))?;
    writeln!(out, "{rendered}").map_err(|e| format!("Failed to write answer: {e}"))
}

fn run(cli: Cli) -> Result<(), String> {
    let mut config = TutorConfig::load(cli.config.as_deref()).map_err(|e| e.to_string())?;
    if let Some(path) = cli.knowledge_base {
        config.knowledge_base = Some(path);
    }
    if let Some(segmenter) = cli.segmenter {
        config.segmenter = segmenter.into();
    }

    let knowledge = Arc::new(load_knowledge(&config)?);
    let segmenter = make_segmenter(config.segmenter, &knowledge);
    let matcher = Matcher::new(Arc::clone(&knowledge), segmenter);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Ask { question, format } => {
            let format = format.map_or(config.format, Into::into);
            let question = (!question.is_empty()).then(|| question.join(" "));
            print_answer(&matcher, question.as_deref(), format, &mut out)
        }
        Commands::Chat { format } => {
            let format = format.map_or(config.format, Into::into);
            for line in io::stdin().lock().lines() {
                let line = line.map_err(|e| format!("Failed to read question: {e}"))?;
                if line.trim().is_empty() {
                    break;
                }
                print_answer(&matcher, Some(&line), format, &mut out)?;
            }
            Ok(())
        }
        Commands::Topics => {
            for (key, record) in knowledge.topics() {
                writeln!(out, "{key}\t{}", record.title).map_err(|e| e.to_string())?;
            }
            Ok(())
        }
        Commands::Export { path } => KnowledgeFile::from_knowledge_base(&knowledge)
            .write(&path)
            .map_err(|e| format!("Failed to export knowledge base: {e}")),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "calculus-tutor failed");
            ExitCode::FAILURE
        }
    }
}
