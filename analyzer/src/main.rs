use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use docsim_analyzer::config::CorpusOptions;
use docsim_analyzer::report::{render, ComparisonReport, CorpusReport};
use docsim_core::{SimilarityMode, DEFAULT_THRESHOLD};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "analyzer")]
#[command(about = "Turn a document corpus into TF-IDF vectors and compare documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct CorpusArgs {
    /// Input path (file or directory)
    #[arg(long)]
    input: PathBuf,
    /// File of whitespace-separated stopwords (built-in English list when omitted)
    #[arg(long)]
    stopwords: Option<PathBuf>,
    /// File of whitespace-separated punctuation markers to strip (built-in list when omitted)
    #[arg(long)]
    punctuation: Option<PathBuf>,
    /// Count stopwords like any other token
    #[arg(long, default_value_t = false)]
    keep_stopwords: bool,
    /// Keep the original letter case
    #[arg(long, default_value_t = false)]
    no_lowercase: bool,
}

impl From<CorpusArgs> for CorpusOptions {
    fn from(args: CorpusArgs) -> Self {
        Self {
            input: args.input,
            stopwords: args.stopwords,
            punctuation: args.punctuation,
            keep_stopwords: args.keep_stopwords,
            lowercase: !args.no_lowercase,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print per-document term statistics as JSON
    Report {
        #[command(flatten)]
        corpus: CorpusArgs,
        /// Include the dense TF-IDF vector of every document
        #[arg(long, default_value_t = false)]
        vectors: bool,
    },
    /// Score every document pair and flag related ones
    Compare {
        #[command(flatten)]
        corpus: CorpusArgs,
        /// dense (TF-IDF cosine) or sparse (shared-term cosine minus overlap penalty)
        #[arg(long, default_value_t = SimilarityMode::Dense)]
        mode: SimilarityMode,
        /// Minimum score for a pair to count as related
        #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
        threshold: f64,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(std::io::stderr).init();
    let cli = Cli::parse();

    let output = match cli.command {
        Commands::Report { corpus, vectors } => {
            let corpus = CorpusOptions::from(corpus).load_corpus()?;
            render(&CorpusReport::build(&corpus, vectors)?)?
        }
        Commands::Compare { corpus, mode, threshold } => {
            let corpus = CorpusOptions::from(corpus).load_corpus()?;
            render(&ComparisonReport::build(&corpus, mode, threshold)?)?
        }
    };
    println!("{output}");
    Ok(())
}
