use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};

use zeek_cut::cli::Cli;
use zeek_cut::config::Config;
use zeek_cut::error::CutError;
use zeek_cut::logging::init_tracing;

fn main() -> ExitCode {
    // Reset SIGPIPE to default behavior so upstream writers get a clean
    // SIGPIPE signal instead of a BrokenPipeError when zeek-cut exits early.
    reset_sigpipe();

    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "zeek-cut", &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    init_tracing();

    let config = match Config::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("zeek-cut: {e}");
            return ExitCode::from(1);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());

    let result = zeek_cut::run(stdin.lock(), &mut writer, &config);
    // Whatever was extracted before a fatal header error still goes out.
    let flushed = writer.flush().map_err(CutError::from);

    match result.and(flushed) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CutError::Io(e)) if e.kind() == io::ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("zeek-cut: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

/// Reset SIGPIPE to the default (terminate) behavior.
///
/// By default, Rust ignores SIGPIPE to surface `BrokenPipe` I/O errors.
/// For a CLI filter like `zeek-cut`, restoring `SIG_DFL` lets the OS end
/// the process quietly when the reader goes away.
#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn reset_sigpipe() {}
