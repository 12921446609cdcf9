mod deliver;
mod fetch;
mod parser;
mod site;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::warn;

use parser::Parsed;
use site::SiteConfig;

#[derive(Parser)]
#[command(
    name = "gmoj_grabber",
    about = "FortunaOJ problem grabber: extracts sample tests from gmoj.net problem pages"
)]
struct Cli {
    /// Site configuration JSON (hostname map + URL patterns); built-in
    /// FortunaOJ table if omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse saved problem-page HTML files and print task JSON
    Parse {
        /// HTML files, one problem page each
        files: Vec<PathBuf>,
        /// Problem URL recorded in the task (also picks the site code)
        #[arg(short, long)]
        url: Option<String>,
    },
    /// Fetch problem pages, parse them, and deliver tasks to a local listener
    Run {
        /// Problem page URLs
        urls: Vec<String>,
        /// Local judge-tool port to POST tasks to
        #[arg(short, long, default_value = "10043")]
        port: u16,
        /// Print tasks to stdout instead of POSTing
        #[arg(long)]
        stdout: bool,
    },
    /// Print the URL match patterns of the configured site
    Patterns,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let site = match &cli.config {
        Some(path) => SiteConfig::load(path)?,
        None => SiteConfig::fortuna(),
    };

    let result = match cli.command {
        Commands::Parse { files, url } => cmd_parse(&site, &files, url.as_deref()),
        Commands::Run { urls, port, stdout } => cmd_run(&site, &urls, port, stdout).await,
        Commands::Patterns => {
            for pattern in &site.patterns {
                println!("{pattern}");
            }
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }

    result
}

fn cmd_parse(site: &SiteConfig, files: &[PathBuf], url: Option<&str>) -> Result<()> {
    use indicatif::{ProgressBar, ProgressStyle};
    use rayon::prelude::*;

    if files.is_empty() {
        anyhow::bail!("No input files given");
    }

    let pb = if files.len() > 1 {
        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len}")
                .unwrap()
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let results: Vec<Result<Parsed>> = files
        .par_iter()
        .map(|path| {
            let html = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let parsed = parser::parse_problem(site, url.unwrap_or(""), &html);
            if let Some(pb) = &pb {
                pb.inc(1);
            }
            Ok(parsed)
        })
        .collect();

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    for result in results {
        let parsed = result?;
        report(&parsed);
        println!("{}", serde_json::to_string_pretty(&parsed.task)?);
    }

    Ok(())
}

async fn cmd_run(site: &SiteConfig, urls: &[String], port: u16, stdout: bool) -> Result<()> {
    if urls.is_empty() {
        anyhow::bail!("No URLs given");
    }

    let client = reqwest::Client::new();

    for url in urls {
        if !site.matches_url(url) {
            warn!("{} does not match the configured problem patterns", url);
        }

        let html = fetch::fetch_page(&client, url).await?;
        let parsed = parser::parse_problem(site, url, &html);
        report(&parsed);

        if stdout {
            println!("{}", serde_json::to_string_pretty(&parsed.task)?);
        } else {
            deliver::send_task(&client, port, &parsed.task).await?;
        }

        println!("{}: {} sample tests", parsed.task.name, parsed.task.tests.len());
    }

    Ok(())
}

fn report(parsed: &Parsed) {
    for diagnostic in &parsed.diagnostics {
        warn!("{}", diagnostic);
    }
    if parsed.download_advisory {
        warn!("This page links a sample archive; don't forget to download it");
    }
}
