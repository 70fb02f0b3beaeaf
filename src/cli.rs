use std::path::PathBuf;

use crtsh_finder::render::OutputFormat;

#[derive(clap::Parser, Debug)]
#[command(name = "crtsh-finder", about = "Find subdomains via crt.sh certificate transparency logs", disable_version_flag = true)]
pub struct Cli {
    /// Domain to search (e.g. example.com)
    #[arg(short = 'd', long)]
    pub domain: Option<String>,

    /// Output file (optional)
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print version and exit
    #[arg(short = 'v', long, default_value_t = false)]
    pub version: bool,

    /// Request timeout in seconds
    #[arg(short = 't', long, default_value_t = 30_u64)]
    pub timeout: u64,

    /// Silent mode (results only, no headings or progress line)
    #[arg(short = 's', long, default_value_t = false)]
    pub silent: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Show wildcard entries only
    #[arg(short = 'w', long, default_value_t = false)]
    pub wildcards_only: bool,

    /// Show plain subdomains only (ignored when -w is also set)
    #[arg(short = 'n', long, default_value_t = false)]
    pub subdomains_only: bool,

    /// Enable detailed debug logging
    #[arg(long, default_value_t = false)]
    pub debug: bool,
}
