use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use monolith_lexer::{dump, SourceFile};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "monolith-lex")]
#[command(about = "Dump the token stream of a Monolith source file")]
#[command(version)]
struct Cli {
    /// Input .mon file
    #[arg(default_value = "input.mon")]
    input: PathBuf,

    /// File the token dump is written to (truncated)
    #[arg(default_value = "output.lex")]
    output: PathBuf,

    /// Write the dump to stdout instead of the output file
    #[arg(long)]
    stdout: bool,
}

/// Scanned cleanly.
const EXIT_CLEAN: u8 = 0;
/// Dump written, but lexical diagnostics were recorded.
const EXIT_DIAGNOSTICS: u8 = 1;
/// Input unreadable or misencoded, or output not writable.
const EXIT_FATAL: u8 = 2;

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    ExitCode::from(run(&cli))
}

/// Scan the input, write the dump and return the exit status.
fn run(cli: &Cli) -> u8 {
    let (dump, mut status) = match SourceFile::read(&cli.input) {
        Ok(file) => {
            let lexed = file.scan();
            info!(
                path = %file.path().display(),
                tokens = lexed.tokens.len(),
                diagnostics = lexed.diagnostics.len(),
                "scanned"
            );
            let status = if lexed.passed() {
                EXIT_CLEAN
            } else {
                EXIT_DIAGNOSTICS
            };
            (dump::render(file.path(), &lexed), status)
        }
        Err(e) => {
            error!(path = %e.path().display(), offset = ?e.offset(), "{e}");
            (dump::render_source_error(&e), EXIT_FATAL)
        }
    };

    if let Err(e) = write_dump(cli, &dump) {
        let target = if cli.stdout { Path::new("<stdout>") } else { cli.output.as_path() };
        error!(path = %target.display(), "could not write dump: {e}");
        status = EXIT_FATAL;
    }

    status
}

fn write_dump(cli: &Cli, dump: &str) -> std::io::Result<()> {
    if cli.stdout {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(dump.as_bytes())?;
        stdout.flush()
    } else {
        std::fs::write(&cli.output, dump)
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}
