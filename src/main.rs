use std::{
    fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::{debug, info, LevelFilter};
use log4rs::{
    append::console::{ConsoleAppender, Target},
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    Config,
};
use serde::Serialize;
use text_vectorizer::{CountVectorizer, TfidfVectorizer, VectorizerParams};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Bag-of-words counts
    Count,
    /// Rounded TF-IDF weights
    Tfidf,
}

/// Vectorize a corpus, one document per line.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    #[arg(long, value_enum, default_value = "tfidf")]
    mode: Mode,
    /// Corpus file; stdin when absent
    #[arg(long)]
    input: Option<PathBuf>,
    /// JSON file with vectorizer params
    #[arg(long)]
    config: Option<PathBuf>,
    /// Overrides `decimals` from the config
    #[arg(long)]
    decimals: Option<u32>,
    /// Write the fitted state (CBOR) to this file, tfidf mode only
    #[arg(long)]
    save_state: Option<PathBuf>,
    #[arg(long)]
    pretty: bool,
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,
}

#[derive(Debug, Serialize)]
struct Output<M> {
    features: Vec<String>,
    matrix: M,
    #[serde(skip_serializing_if = "Option::is_none")]
    idf: Option<Vec<f64>>,
}

fn configure_logging(level: LevelFilter) -> anyhow::Result<()> {
    let console = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{l} - {d} - {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(console)))
        .build(Root::builder().appender("stderr").build(level))
        .context("invalid logging config")?;
    log4rs::init_config(config).context("failed to initialise logging")?;
    Ok(())
}

fn load_params(args: &Args) -> anyhow::Result<VectorizerParams> {
    let mut params = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("invalid config {}", path.display()))?
        }
        None => VectorizerParams::default(),
    };
    if let Some(decimals) = args.decimals {
        params = params.with_decimals(decimals);
    }
    Ok(params)
}

fn read_corpus(input: Option<&Path>) -> anyhow::Result<Vec<String>> {
    let text = match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read corpus {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read corpus from stdin")?;
            buf
        }
    };
    Ok(text.lines().map(str::to_string).collect())
}

fn write_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if pretty {
        serde_json::to_writer_pretty(&mut out, value)?;
    } else {
        serde_json::to_writer(&mut out, value)?;
    }
    writeln!(out)?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    configure_logging(args.log_level)?;

    let params = load_params(&args)?;
    let corpus = read_corpus(args.input.as_deref())?;
    info!("Loaded {} documents", corpus.len());
    debug!("Params: {:?}", params);

    match args.mode {
        Mode::Count => {
            let mut vectorizer = CountVectorizer::with_fit_mode(params.fit_mode());
            let matrix = vectorizer.fit_transform(&corpus);
            write_json(
                &Output {
                    features: vectorizer.get_feature_names(),
                    matrix,
                    idf: None,
                },
                args.pretty,
            )?;
        }
        Mode::Tfidf => {
            let mut vectorizer = TfidfVectorizer::with_params(params);
            let matrix = vectorizer
                .fit_transform(&corpus)
                .context("failed to compute TF-IDF")?;
            if let Some(path) = &args.save_state {
                let bytes = vectorizer.to_cbor()?;
                fs::write(path, bytes)
                    .with_context(|| format!("failed to write state {}", path.display()))?;
                info!("Saved fitted state to {}", path.display());
            }
            write_json(
                &Output {
                    features: vectorizer.get_feature_names(),
                    matrix,
                    idf: Some(vectorizer.idf().to_vec()),
                },
                args.pretty,
            )?;
        }
    }
    Ok(())
}
