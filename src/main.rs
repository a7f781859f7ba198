use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;
mod detect;
mod error;
mod manifest;
mod patch;
mod upsert;
mod util;

use cli::RootArgs;
use error::PatchError;
use patch::{patch_file, PatchOptions, PatchOutcome, Recommendations};

fn main() -> ExitCode {
    let args = RootArgs::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = err
                .downcast_ref::<PatchError>()
                .map_or(1, PatchError::exit_code);
            ExitCode::from(code)
        }
    }
}

/// Logs go to stderr so stdout carries only the result line.
fn init_tracing(verbose: bool) {
    let fallback = if verbose { "pkgjson_patch=debug" } else { "off" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &RootArgs) -> Result<()> {
    let path = util::absolute_path(&args.path)?;
    let options = PatchOptions {
        force: args.force,
        framework: args.nextjs.as_override(),
    };
    let PatchOutcome { changed, warnings } =
        patch_file(&path, options, &Recommendations::default())?;

    for warning in &warnings {
        eprintln!("Warning: {warning}");
    }
    if changed {
        println!("Updated: {}", path.display());
    } else {
        println!("No changes: {}", path.display());
    }
    Ok(())
}
