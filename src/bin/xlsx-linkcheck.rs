use clap::{CommandFactory, Parser};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinHandle;

use std::sync::Arc;

use xlsx_linkcheck::config::{CliConfig, Config};
use xlsx_linkcheck::core::constants::output_formats;
use xlsx_linkcheck::reporting::logging;
use xlsx_linkcheck::scan::{ScanCommand, ScanControl, ScanEvent, ScanOutcome, ScanSummary, Scanner};
use xlsx_linkcheck::ui::color::{stdin_is_terminal, stdout_is_terminal};
use xlsx_linkcheck::ui::output;
use xlsx_linkcheck::ui::{Cli, Commands, ProgressReporter, cli_to_config, print_completions};
use xlsx_linkcheck::workbook::{list_columns, list_sheets};
use xlsx_linkcheck::ScanRequest;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Handle completion commands first
    if let Commands::CompletionGenerate { shell } = cli.command {
        let mut app = Cli::command();
        print_completions(shell, &mut app);
        std::process::exit(0);
    }

    // Exit from inside the runtime: a pending stdin read would otherwise
    // hold up runtime shutdown until the user presses enter
    match run(&cli).await {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

async fn run(cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let cli_config = cli_to_config(cli);
    let config = load_and_merge_config(&cli_config)?;

    let output_settings = setup_output_settings(&cli_config, &config);
    logging::init_logger(output_settings.verbose, output_settings.quiet);

    match &cli.command {
        Commands::Sheets { file } => {
            let sheets = list_sheets(file)?;
            println!(
                "{}",
                output::render_sheets(&sheets, &output_settings.output_format)
            );
            Ok(0)
        }
        Commands::Columns { file, sheet } => {
            let columns = list_columns(file, sheet)?;
            println!(
                "{}",
                output::render_columns(&columns, &output_settings.output_format)
            );
            Ok(0)
        }
        Commands::Scan {
            file,
            sheet,
            column,
        } => {
            let request = ScanRequest::parse(file, sheet, column)?;
            run_scan(request, &config, &output_settings).await
        }
        Commands::CompletionGenerate { .. } => Ok(0),
    }
}

/// Load configuration from file or standard locations and merge with CLI config
fn load_and_merge_config(cli_config: &CliConfig) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file).inspect_err(|e| {
            logging::log_error(
                &format!("Could not load config file '{config_file}'"),
                Some(e),
            );
        })?
    } else {
        Config::load_from_standard_locations()
    };

    // Merge CLI arguments with configuration (CLI takes precedence)
    config.merge_with_cli(cli_config);
    config.validate()?;
    Ok(config)
}

/// Settings for output formatting and display
struct OutputSettings {
    quiet: bool,
    verbose: bool,
    output_format: String,
    show_progress: bool,
}

impl OutputSettings {
    fn should_show_config_info(&self) -> bool {
        self.verbose && !self.quiet && self.output_format == output_formats::TEXT
    }

    fn is_text(&self) -> bool {
        self.output_format == output_formats::TEXT
    }
}

fn setup_output_settings(cli_config: &CliConfig, config: &Config) -> OutputSettings {
    let quiet = cli_config.quiet;
    let verbose = config.verbose.unwrap_or(false);
    let output_format = config
        .output_format
        .as_deref()
        .unwrap_or(output_formats::DEFAULT)
        .to_string();
    let show_progress = !quiet && !cli_config.no_progress && stdout_is_terminal();

    OutputSettings {
        quiet,
        verbose,
        output_format,
        show_progress,
    }
}

async fn run_scan(
    request: ScanRequest,
    config: &Config,
    output_settings: &OutputSettings,
) -> Result<i32, Box<dyn std::error::Error>> {
    logging::log_config_info(config);
    if output_settings.should_show_config_info() {
        output::display_config_info(config);
    }

    let scanner = Scanner::from_config(config)?;
    let mut handle = scanner.start(request);
    let commands = spawn_command_reader(handle.control());

    let mut progress =
        ProgressReporter::new(output_settings.show_progress && output_settings.is_text());
    if progress.is_enabled() && stdin_is_terminal() {
        progress.log_info("Type p + Enter to pause, r to resume, c to cancel");
    }

    while let Some(event) = handle.next_event().await {
        match &event {
            ScanEvent::Started { total } => progress.start(*total),
            ScanEvent::ProgressUpdated(snapshot) => progress.update(snapshot),
            ScanEvent::Paused => progress.paused(),
            ScanEvent::Resumed => progress.resumed(),
            ScanEvent::Completed(summary) | ScanEvent::Canceled(summary) => {
                progress.finish(summary)
            }
            ScanEvent::Failed { message } => progress.abandon(message),
            ScanEvent::ConnectionLost | ScanEvent::ConnectionRestored => {}
        }
        if event.is_terminal() {
            break;
        }
    }

    let summary = handle.wait().await?;
    commands.abort();

    output::display_summary(
        &summary,
        &output_settings.output_format,
        output_settings.quiet,
    );
    Ok(determine_exit_code(&summary))
}

/// Forward single-letter commands typed on stdin to the running scan.
fn spawn_command_reader(control: Arc<ScanControl>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            match parse_command(&line) {
                Some(command) => control.apply(command),
                None if line.trim().is_empty() => {}
                None => logging::log_warning(&format!("Unknown command '{}'", line.trim())),
            }
            if control.is_canceled() {
                break;
            }
        }
    })
}

fn parse_command(line: &str) -> Option<ScanCommand> {
    match line.trim().to_ascii_lowercase().as_str() {
        "p" | "pause" => Some(ScanCommand::Pause),
        "r" | "resume" => Some(ScanCommand::Resume),
        "c" | "cancel" | "q" => Some(ScanCommand::Cancel),
        _ => None,
    }
}

fn determine_exit_code(summary: &ScanSummary) -> i32 {
    match summary.outcome {
        ScanOutcome::Completed | ScanOutcome::Canceled => 0,
        ScanOutcome::Failed => 1,
    }
}
