use clap::Parser;
use env_logger::Env;
use rnmap::options::with_cancellation;
use rnmap::{cli::Cli, config::ScanProfile, display::DisplayManager, CancellationToken, Scanner, ScanError};
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(log_level))
        .format_timestamp_secs()
        .init();

    let display = DisplayManager::with_quiet(cli.quiet);

    if !cli.quiet {
        display.print_banner("Authorized testing only");
        display.print_warning("Ensure you have proper permission before scanning any networks.");
        println!();
    }

    let mut profile = if let Some(config_path) = &cli.config {
        match ScanProfile::load_from_file(&config_path.to_string_lossy()) {
            Ok(profile) => {
                if !cli.quiet {
                    display.print_success(&format!("Loaded profile from {}", config_path.display()));
                }
                profile
            }
            Err(e) => {
                display.print_error(&format!("Failed to load profile {}: {}", config_path.display(), e));
                process::exit(2);
            }
        }
    } else {
        ScanProfile::default()
    };

    // Command line flags replace the profile's choice for options that
    // may only be given once.
    if cli.ports.is_some() {
        profile.ports = None;
    }
    if cli.timing.is_some() {
        profile.timing = None;
    }

    let mut options = profile.into_options();
    options.extend(cli.scan_options());

    // Ctrl-C cancels the scan, which kills nmap's process group.
    let cancel = CancellationToken::new();
    let interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            interrupt.cancel();
        }
    });
    options.push(with_cancellation(cancel));

    let scanner = match Scanner::new(options) {
        Ok(scanner) => scanner,
        Err(e) => {
            display.print_error(&format!("Invalid scan options: {}", e));
            process::exit(2);
        }
    };

    if cli.verbose > 0 {
        display.print_command(&scanner.command_line());
    }

    match scanner.run().await {
        Ok(run) => display.print_run(&run),
        Err(ScanError::Timeout) => {
            display.print_error("Scan interrupted or did not finish before the timeout");
            process::exit(124);
        }
        Err(e) => {
            display.print_error(&e.to_string());
            process::exit(1);
        }
    }
}
