//! ANSI Lens runner
//!
//! Reads text containing escape sequences from a file, an argument or
//! stdin, and prints the decoded tokens.
//!
//! # Usage
//!
//! ```bash
//! # Explain a string, one line per token
//! ansi-lens --input '\e[1;31mError\e[0m'
//!
//! # Token list as JSON
//! ansi-lens --format json captured.log
//!
//! # Styled HTML preview
//! some-command | ansi-lens --format html > preview.html
//! ```

use std::fmt::Write as _;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ansi_lens::config::{CliArgs, Config, OutputFormat};
use ansi_lens::{render_html, tokenize, Error, PartStatus, Result, Token, TokenKind};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = CliArgs::parse();

    match run(&args) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("ansi-lens: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs) -> Result<String> {
    let config = Config::load_with_args(args)?;
    let palette = config.palette()?;
    let input = read_input(args)?;

    let tokens = tokenize(&input);
    tracing::debug!(tokens = tokens.len(), format = ?config.format, "decoded input");

    let output = match config.format {
        OutputFormat::Text => render_text(&tokens),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&tokens)?;
            json.push('\n');
            json
        }
        OutputFormat::Html => {
            let mut html = render_html(&tokens, &palette);
            html.push('\n');
            html
        }
    };
    Ok(output)
}

fn read_input(args: &CliArgs) -> Result<String> {
    if let Some(text) = &args.input {
        return Ok(text.clone());
    }

    match &args.file {
        Some(path) => {
            let bytes = std::fs::read(path).map_err(|source| Error::Io {
                path: path.clone(),
                source,
            })?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
        None => {
            let mut data = Vec::new();
            io::stdin()
                .read_to_end(&mut data)
                .map_err(|source| Error::Io {
                    path: PathBuf::from("<stdin>"),
                    source,
                })?;
            Ok(String::from_utf8_lossy(&data).into_owned())
        }
    }
}

/// One line per token; escape tokens list their parts underneath
fn render_text(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        let raw = token.raw.escape_debug();
        let id = token.id.to_string();
        let range = format!("{}..{}", token.span.start, token.span.end);
        match &token.kind {
            TokenKind::Text => {
                let _ = writeln!(out, "{id:<5} {:<8} {range:<10} \"{raw}\"", "text");
            }
            TokenKind::Escape(seq) => {
                let _ = writeln!(
                    out,
                    "{id:<5} {:<8} {range:<10} \"{raw}\"  {}",
                    seq.category, seq.summary
                );
                for part in &seq.parts {
                    let marker = match part.status() {
                        PartStatus::Valid => ' ',
                        PartStatus::Error => '!',
                    };
                    let _ = writeln!(
                        out,
                        "      {marker} {:<6} {}",
                        part.label().escape_debug().to_string(),
                        part.description()
                    );
                }
            }
        }
    }
    out
}
