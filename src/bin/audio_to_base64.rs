//! Encodes an audio file as base64 for manual calls to `POST /detect`.

use std::path::{Path, PathBuf};

use anyhow::Context;
use base64::{Engine as _, engine::general_purpose};
use clap::Parser;
use serde_json::json;

use voice_detect::domain::{AudioFormat, Language};

#[derive(Debug, Parser)]
#[command(name = "audio-to-base64", version, about)]
struct Args {
    /// Audio file to encode.
    file: PathBuf,

    /// Do not write `<file>.base64.txt` next to the input.
    #[arg(long)]
    no_save: bool,

    /// Print a complete `/detect` request body instead of the bare base64 text.
    #[arg(long, requires = "language")]
    payload: bool,

    /// Language for `--payload` (tamil, english, hindi, malayalam, telugu).
    #[arg(long)]
    language: Option<String>,

    /// Audio format for `--payload`; guessed from the file extension when omitted.
    #[arg(long)]
    format: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let audio = std::fs::read(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let encoded = general_purpose::STANDARD.encode(&audio);

    eprintln!("Encoded: {}", args.file.display());
    eprintln!("File size: {} bytes", audio.len());
    eprintln!("Base64 length: {} characters", encoded.len());

    if args.payload {
        let body = detect_payload(&args, encoded.clone())?;
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        println!("{}", encoded);
    }

    if !args.no_save {
        let output = output_path(&args.file);
        std::fs::write(&output, &encoded)
            .with_context(|| format!("failed to write {}", output.display()))?;
        eprintln!("Saved to: {}", output.display());
    }

    Ok(())
}

fn detect_payload(args: &Args, encoded: String) -> anyhow::Result<serde_json::Value> {
    let language: Language = args
        .language
        .as_deref()
        .unwrap_or_default()
        .parse()
        .map_err(anyhow::Error::msg)?;

    let format = match args.format.as_deref() {
        Some(raw) => raw.parse::<AudioFormat>().map_err(anyhow::Error::msg)?,
        None => args
            .file
            .extension()
            .and_then(|e| e.to_str())
            .and_then(AudioFormat::from_extension)
            .unwrap_or_default(),
    };

    Ok(json!({
        "language": language.as_str(),
        "audioFormat": format.as_str(),
        "audioBase64": encoded,
    }))
}

fn output_path(input: &Path) -> PathBuf {
    let mut name = input.as_os_str().to_owned();
    name.push(".base64.txt");
    PathBuf::from(name)
}
