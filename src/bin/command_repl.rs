use anyhow::Context;
use clap::Parser;
use fleet_command::utils::{logger, validation::Validate};
use fleet_command::{interpret, TomlConfig};
use std::io::{BufRead, Write};

#[derive(Parser)]
#[command(name = "command_repl")]
#[command(about = "Type fleet commands and see the replies the backend would send")]
struct Args {
    /// Path to TOML configuration file; the demo fleet is used when omitted
    #[arg(short, long)]
    config: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let config = match &args.config {
        Some(path) => TomlConfig::from_file(path)
            .with_context(|| format!("Failed to load config file '{}'", path))?,
        None => TomlConfig::default(),
    };
    config.validate().context("Configuration validation failed")?;

    let mut fleet = config.build_fleet();
    println!("🚚 {} vehicle(s) loaded. Type a command, :vehicles, or :quit.", fleet.vehicle_count());

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let mut line = String::new();
    loop {
        print!("> ");
        stdout.flush().context("Failed to flush stdout")?;

        line.clear();
        if stdin
            .lock()
            .read_line(&mut line)
            .context("Failed to read from stdin")?
            == 0
        {
            break;
        }

        match line.trim() {
            "" => continue,
            ":quit" | ":q" => break,
            ":vehicles" => match serde_json::to_string_pretty(&fleet.listing()) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    tracing::warn!("Failed to render vehicles: {}", e);
                    eprintln!("❌ Could not render the vehicle list: {}", e);
                }
            },
            transcript => {
                let outcome = interpret(&mut fleet, transcript);
                println!("{}", outcome.output);
                if let Some(highlight) = outcome.highlight {
                    tracing::debug!(
                        "Highlight: {} ({}, {})",
                        highlight.name,
                        highlight.vehicle.lat,
                        highlight.vehicle.lng
                    );
                }
            }
        }
    }

    Ok(())
}
