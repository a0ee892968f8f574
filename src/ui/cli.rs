// Command-line interface definitions and parsing for xlsx-linkcheck

use crate::config::CliConfig;
use crate::core::constants::output_formats;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    // Probe Options
    /// Timeout per HEAD request in seconds (default: 5)
    #[arg(
        short = 't',
        long,
        global = true,
        value_name = "SECONDS",
        help_heading = "Probe Options"
    )]
    pub timeout: Option<u64>,

    /// Redirects followed per request (default: 10, 0 disables)
    #[arg(long, global = true, value_name = "COUNT", help_heading = "Probe Options")]
    pub max_redirects: Option<usize>,

    /// How often a paused scan checks for resume, in ms (default: 1000)
    #[arg(long, global = true, value_name = "MS", help_heading = "Probe Options")]
    pub poll_interval: Option<u64>,

    // Output & Verbosity
    /// Suppress progress output
    #[arg(short = 'q', long, global = true, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, global = true, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    /// Output format (default: text)
    #[arg(long, global = true, value_name = "FORMAT", value_parser = output_formats::ALL, help_heading = "Output & Verbosity")]
    pub format: Option<String>,

    /// Disable progress bars
    #[arg(long, global = true, help_heading = "Output & Verbosity")]
    pub no_progress: bool,

    // Network & Security
    /// Custom User-Agent header
    #[arg(long, global = true, value_name = "AGENT", help_heading = "Network & Security")]
    pub user_agent: Option<String>,

    /// HTTP/HTTPS proxy URL
    #[arg(long, global = true, value_name = "URL", help_heading = "Network & Security")]
    pub proxy: Option<String>,

    /// Skip SSL certificate verification
    #[arg(long, global = true, help_heading = "Network & Security")]
    pub insecure: bool,

    // Configuration
    /// Use specific config file
    #[arg(long, global = true, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, global = true, help_heading = "Configuration")]
    pub no_config: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check every link in a column and append a "Link Status" column
    Scan {
        /// Workbook to check (.xlsx)
        file: String,

        /// Worksheet holding the links
        #[arg(short = 's', long, value_name = "NAME")]
        sheet: String,

        /// Column holding the links, as a letter (B) or 1-based index (2)
        #[arg(short = 'c', long, value_name = "COLUMN")]
        column: String,
    },
    /// List the worksheets of a workbook
    Sheets {
        /// Workbook to inspect (.xlsx)
        file: String,
    },
    /// List the columns of a worksheet with their headers
    Columns {
        /// Workbook to inspect (.xlsx)
        file: String,

        /// Worksheet to inspect
        #[arg(short = 's', long, value_name = "NAME")]
        sheet: String,
    },
    /// Generate shell completions
    #[command(name = "completion-generate", arg_required_else_help = true)]
    CompletionGenerate {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Collect the configuration-relevant flags.
///
/// Values are not range-checked here; the merged [`Config`](crate::Config)
/// is validated once file and flag values have been combined.
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    CliConfig {
        timeout: cli.timeout,
        max_redirects: cli.max_redirects,
        pause_poll_interval: cli.poll_interval,
        quiet: cli.quiet,
        verbose: cli.verbose,
        output_format: cli.format.clone(),
        no_progress: cli.no_progress,
        user_agent: cli.user_agent.clone(),
        proxy: cli.proxy.clone(),
        skip_ssl_verification: cli.insecure,
        config_file: cli.config.clone(),
        no_config: cli.no_config,
    }
}
