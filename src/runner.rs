use anyhow::Result;

use crate::cli::Cli;
use crtsh_finder::render::{render_json, render_text, OutputFormat};
use crtsh_finder::{classify, decode, fetch, http};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_usage() {
    println!("Error: a domain is required");
    println!("Usage: crtsh-finder -d domain.com [-o output.txt] [-t timeout] [-f format] [-w] [-n]");
}

pub async fn run_from_cli(cli: Cli) -> Result<()> {
    // Keep external crates (reqwest/hyper) quiet unless explicitly asked for.
    use tracing_subscriber::EnvFilter;
    let crate_level = if cli.debug { "debug" } else { "error" };
    let filter_str = format!("crtsh_finder={crate_level},reqwest=warn,hyper=warn,h2=warn");
    let env_filter = EnvFilter::try_new(&filter_str).unwrap_or_else(|_| EnvFilter::new(crate_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_ansi(true)
        .with_target(false)
        .init();

    if cli.version {
        println!("crtsh-finder version {VERSION}");
        return Ok(());
    }

    let Some(domain) = cli.domain.as_deref() else {
        print_usage();
        std::process::exit(1);
    };

    if !cli.silent {
        println!("Searching crt.sh for: {domain}");
    }

    let client = http::build_client(cli.timeout)?;
    let body = fetch::fetch(&client, domain).await?;
    let certs = decode::decode(&body)?;
    let mut results = classify::classify(&certs);

    // -w wins when both filter flags are given.
    if cli.wildcards_only {
        results.subdomains.clear();
    } else if cli.subdomains_only {
        results.wildcards.clear();
    }

    match cli.format {
        OutputFormat::Json => render_json(&results, cli.output.as_deref()),
        OutputFormat::Text => render_text(&results, cli.output.as_deref(), cli.silent),
    }

    Ok(())
}
