//! Tokens command implementation.
//!
//! Prints the token stream of one source file.

use std::io::Write;
use std::path::PathBuf;

use brsc_lex::{scan, scan_recovering, Token};
use brsc_util::Handler;
use tracing::{debug, info};

use crate::commands::common::{read_source, render_diagnostics, token_line, OutputFormat, TokenRecord};
use crate::error::{BrstError, Result};

/// Arguments for the tokens command.
#[derive(Debug, Clone)]
pub struct TokensArgs {
    /// File to scan.
    pub path: PathBuf,
    /// How to print the tokens.
    pub format: OutputFormat,
    /// Report every lexical error instead of stopping at the first.
    pub recover: bool,
}

/// Run the tokens command, printing to stdout.
pub fn run_tokens(args: TokensArgs) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_tokens(&args, &mut out)
}

/// Scan the file named in `args` and write its tokens to `out`.
///
/// In recovering mode the tokens are written even when errors were found;
/// the diagnostics go to stderr and the command still fails.
pub fn write_tokens(args: &TokensArgs, out: &mut impl Write) -> Result<()> {
    let source = read_source(&args.path)?;
    debug!(path = %args.path.display(), recover = args.recover, "scanning file");

    if !args.recover {
        let tokens = scan(&source).map_err(|source| BrstError::Lex {
            path: args.path.clone(),
            source,
        })?;
        return print_tokens(&tokens, args.format, out);
    }

    let handler = Handler::new();
    let tokens = scan_recovering(&source, &handler);
    print_tokens(&tokens, args.format, out)?;

    if handler.has_errors() {
        let diagnostics = handler.into_diagnostics();
        eprint!("{}", render_diagnostics(&args.path, &source, &diagnostics));
        return Err(BrstError::Validation(format!(
            "{} lexical error(s) in {}",
            diagnostics.len(),
            args.path.display()
        )));
    }

    info!(tokens = tokens.len(), "done");
    Ok(())
}

fn print_tokens(tokens: &[Token], format: OutputFormat, out: &mut impl Write) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for token in tokens {
                writeln!(out, "{}", token_line(token))?;
            }
        },
        OutputFormat::Json => {
            let records: Vec<TokenRecord<'_>> = tokens.iter().map(TokenRecord::from).collect();
            serde_json::to_writer_pretty(&mut *out, &records)?;
            writeln!(out)?;
        },
    }
    Ok(())
}
