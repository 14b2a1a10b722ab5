//! `ppp`: runs the c-reduction driver against one or more binary character
//! matrix files and reports, per file, either the reducing sequence found or
//! the reason none was.

use std::{
    io::Write,
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::Context;
use colored::Colorize;
use itertools::Itertools;
use reduction::{Config, FixedChoice, MatrixVerifier, SourceOracle, Strategy, Verifier};
use structopt::StructOpt;

mod oracle;

use oracle::StdinOracle;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "ppp",
    about = "Computes a c-reduction of one or more red-black graphs read from binary character \
              matrix files."
)]
struct Opt {
    /// Enable operation tracing to standard output
    #[structopt(short, long)]
    verbose: bool,

    /// Explore all safe sources, backtracking on a dead end
    #[structopt(short = "x", long)]
    exponential: bool,

    /// Prompt for which safe source/chain to realize at each branch point
    #[structopt(short, long)]
    interactive: bool,

    /// Matrix files to reduce
    #[structopt(name = "FILE", parse(from_os_str))]
    files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    let opt = Opt::from_args();

    let level = if opt.verbose {
        log::LevelFilter::Trace
    } else {
        log::LevelFilter::Warn
    };
    simple_logger::SimpleLogger::new()
        .with_level(level)
        .init()
        .expect("logger is only ever initialized once");

    if opt.exponential && opt.interactive {
        eprintln!("{}", "-x/--exponential and -i/--interactive are mutually exclusive".red());
        return ExitCode::from(1);
    }
    if opt.files.is_empty() {
        eprintln!("no input files given");
        eprintln!("usage: ppp [OPTIONS] FILE...");
        return ExitCode::from(1);
    }

    let mut any_failed = false;
    for file in &opt.files {
        let display = file.display().to_string();
        match reduce_file(file, &opt) {
            Ok(sequence) => {
                let rendered = sequence.iter().map(ToString::to_string).join(" ");
                println!("{}", format!("Ok ({display}) < {rendered} >").green());
            }
            Err(e) => {
                // `{:#}` renders the full `anyhow` context chain (e.g. "no c-reduction found: no
                // safe source or chain remains...") rather than just the outermost message.
                println!("{}", format!("No ({display}) {e:#}").red());
                any_failed = true;
            }
        }
    }

    if any_failed {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}

/// Parses, reduces and verifies a single matrix file, returning the signed-character sequence or
/// the reason (parse failure, exhausted search, failed verification) that none was found.
///
/// Each stage is wrapped with [`anyhow::Context`] so the rendered `No (<file>) <reason>` line (see
/// `main`) carries the actual cause rather than a generic failure message.
fn reduce_file(path: &Path, opt: &Opt) -> anyhow::Result<Vec<rbg::SignedChar>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("could not read {}", path.display()))?;
    let matrix = rbg::Matrix::parse(&text).context("malformed matrix")?;
    let graph = matrix.to_graph();

    let strategy = if opt.exponential {
        Strategy::Exponential
    } else if opt.interactive {
        Strategy::Interactive
    } else {
        Strategy::Standard
    };
    let config = Config { strategy };

    let mut fixed_oracle = FixedChoice(0);
    let mut stdin_oracle = StdinOracle::new(path.display().to_string());
    let oracle: &mut dyn SourceOracle = if opt.interactive {
        &mut stdin_oracle
    } else {
        &mut fixed_oracle
    };

    let sequence = reduction::reduce(&graph, &config, oracle).context("no c-reduction found")?;

    anyhow::ensure!(
        MatrixVerifier.verify(&graph, &sequence),
        "verifier rejected the produced sequence: replaying it did not empty the graph"
    );

    log::info!(
        "{}: verified reduction of {} signed character(s)",
        path.display(),
        sequence.len()
    );
    Ok(sequence)
}

/// Flushes stdout; used by [`oracle::StdinOracle`] between printing a prompt and reading a line.
pub(crate) fn flush_stdout() {
    std::io::stdout().flush().ok();
}
