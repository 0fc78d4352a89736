use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use rkyv::ser::{serializers::AllocSerializer, Serializer};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tessera_protocol::FeatureAxes;
use tessera_token::{EnrichedToken, TokenRecord};

#[derive(Parser)]
#[command(author, version, about = "Encodes and compares Tessera tokens")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Re-encode a JSON array of tokens as JSON records or an rkyv archive
    Encode {
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,

        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,

        /// Record fields to leave out of JSON output
        #[arg(short, long, value_delimiter = ',')]
        exclude: Vec<String>,
    },
    /// Compare two tokens of a JSON array along one feature
    Match {
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        #[arg(long)]
        left: usize,

        #[arg(long)]
        right: usize,

        #[arg(short, long, default_value = "lemmata + semantic")]
        feature: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Rkyv,
}

fn load_tokens(path: &Path) -> anyhow::Result<Vec<EnrichedToken>> {
    println!("📖 Reading tokens from {:?}...", path);
    let input_data = fs::read_to_string(path)?;
    let values: Vec<Value> = serde_json::from_str(&input_data)?;

    values
        .into_iter()
        .enumerate()
        .map(|(i, value)| {
            EnrichedToken::json_decode(value).with_context(|| format!("token #{} is malformed", i))
        })
        .collect()
}

fn encode(input: &Path, output: &Path, format: Format, exclude: &[String]) -> anyhow::Result<()> {
    let tokens = load_tokens(input)?;
    println!("⚙️  Encoding {} tokens...", tokens.len());

    let bytes = match format {
        Format::Json => {
            let exclude: Vec<&str> = exclude.iter().map(String::as_str).collect();
            let encoded = tokens
                .iter()
                .map(|t| t.json_encode(&exclude))
                .collect::<Result<Vec<_>, _>>()?;
            serde_json::to_vec_pretty(&encoded)?
        }
        Format::Rkyv => {
            if !exclude.is_empty() {
                bail!("--exclude only applies to JSON output");
            }
            let records = tokens
                .iter()
                .map(EnrichedToken::to_record)
                .collect::<Result<Vec<TokenRecord>, _>>()?;

            let mut serializer = AllocSerializer::<256>::default();
            serializer
                .serialize_value(&records)
                .map_err(|e| anyhow::anyhow!("rkyv serialization failed: {:?}", e))?;
            serializer.into_serializer().into_inner().to_vec()
        }
    };

    fs::write(output, bytes)?;
    println!("✅ Success! Encoded tokens written to {:?}", output);
    Ok(())
}

fn compare(input: &Path, left: usize, right: usize, feature: &str) -> anyhow::Result<()> {
    let tokens = load_tokens(input)?;
    let lookup = |i: usize| {
        tokens
            .get(i)
            .with_context(|| format!("no token #{} ({} loaded)", i, tokens.len()))
    };
    let (a, b) = (lookup(left)?, lookup(right)?);

    if !FeatureAxes::is_known_name(feature) {
        eprintln!("⚠️  Unrecognized feature {:?}, comparing lemmata + semantic", feature);
    }

    let matched = a.match_feature(b, feature)?;
    println!(
        "{:?} ~ {:?} on {:?}: {}",
        a.display.as_deref().unwrap_or("?"),
        b.display.as_deref().unwrap_or("?"),
        feature,
        if matched { "match" } else { "no match" }
    );
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Encode { input, output, format, exclude } => encode(&input, &output, format, &exclude),
        Command::Match { input, left, right, feature } => compare(&input, left, right, &feature),
    }
}
