//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `recon` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Dispatch to the selected subcommand
//!
//! Results go to stdout; logs go to stderr.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use recon::config::CRT_SH_URL;
use recon::initialization::init_logger_with;
use recon::{run_cname, run_crt, run_headers, run_massdns, Cli, Command, CrtQuery};

async fn dispatch(command: Command) -> Result<()> {
    let mut stdout = std::io::stdout();
    match command {
        Command::Cname(opt) => {
            let report = run_cname(&opt.into(), &mut stdout).await?;
            log::info!(
                "✅ {} of {} domain{} have a CNAME chain ({:.1}s)",
                report.domains_with_chains,
                report.total_domains,
                if report.total_domains == 1 { "" } else { "s" },
                report.elapsed_seconds
            );
        }
        Command::Headers(opt) => {
            let report = run_headers(&opt.into(), &mut stdout).await?;
            log::info!(
                "✅ Fetched headers for {} of {} entries ({} failed, {} skipped) in {:.1}s",
                report.fetched,
                report.total_entries,
                report.failed,
                report.skipped,
                report.elapsed_seconds
            );
        }
        Command::Massdns(opt) => {
            run_massdns(&opt.input_file, opt.output.as_deref(), &mut stdout).await?;
        }
        Command::Crt(opt) => {
            let query = CrtQuery::from_opt(&opt)
                .context("Specify a domain with -d or an organization with --org")?;
            run_crt(&query, opt.output.as_deref(), CRT_SH_URL, &mut stdout).await?;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logger_with(cli.log_level.clone().into(), cli.log_format.clone())
        .context("Failed to initialize logger")?;

    if let Err(e) = dispatch(cli.command).await {
        eprintln!("recon error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}
