//! Command handlers

use std::io::{self, Write};
use std::path::Path;

use crate::cli::{Cli, Commands};
use crate::console::{ConsoleConfirm, ConsoleInput};
use crate::logging;
use dealer_app::config::Config;
use dealer_app::Session;
use dealer_domain::repository::VehicleRepository;
use dealer_store::{sample_vehicles, Inventory};
use dealer_types::{OutputFormat, Result};
use tracing::{debug, info, warn};

/// Main menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Add,
    List,
    Search,
    ModifyMileage,
    Delete,
    Show,
    Exit,
}

impl MenuChoice {
    fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::List),
            "3" => Some(Self::Search),
            "4" => Some(Self::ModifyMileage),
            "5" => Some(Self::Delete),
            "6" => Some(Self::Show),
            "0" => Some(Self::Exit),
            _ => None,
        }
    }
}

const MENU: &str = "\
================ DEALERSHIP ================
1. Add vehicle
2. List vehicles
3. Search vehicle
4. Modify mileage
5. Delete vehicle
6. Show full vehicle
0. Exit
============================================";

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    execute_at(cli, &Config::config_path()?)
}

/// Execute CLI command against the config file at `config_path`
fn execute_at(cli: Cli, config_path: &Path) -> Result<()> {
    let loaded = Config::load_from(config_path);
    let log_level = loaded
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| Config::default().log_level);
    logging::init(&log_level, cli.verbose);

    match cli.command {
        Some(Commands::Config {
            show,
            set_output,
            set_log_level,
            set_sample_data,
            reset,
        }) => {
            // The config command must still work on a broken file so it can repair it.
            let config = loaded.unwrap_or_else(|e| {
                warn!(path = %config_path.display(), error = %e, "ignoring unreadable config");
                Config::default()
            });
            let changes = ConfigChanges {
                show,
                set_output,
                set_log_level,
                set_sample_data,
                reset,
            };
            cmd_config(config, config_path, changes)
        }
        command => {
            let config = loaded?;
            let output_format = cli.format.unwrap_or(config.output_format);
            let sample = matches!(command, Some(Commands::Run { sample: true }));
            cmd_run(&config, sample, output_format)
        }
    }
}

fn cmd_run(config: &Config, sample: bool, output_format: OutputFormat) -> Result<()> {
    let mut inventory = if sample || config.sample_data {
        Inventory::with_vehicles(sample_vehicles())?
    } else {
        Inventory::new()
    };
    info!(
        vehicles = inventory.count(),
        capacity = inventory.capacity(),
        "inventory ready"
    );

    let mut input = ConsoleInput;
    let mut confirm = ConsoleConfirm;
    let mut stdout = io::stdout();
    let mut session =
        Session::new(&mut inventory, &mut input, &mut confirm, &mut stdout).with_format(output_format);

    loop {
        println!("{}", MENU);
        let line = session.prompt("Choose an option:")?;
        let Some(choice) = MenuChoice::parse(&line) else {
            println!("Invalid option: {:?}", line);
            continue;
        };
        debug!(?choice, "menu choice");

        match choice {
            MenuChoice::Add => {
                session.register_vehicle()?;
            }
            MenuChoice::List => {
                session.list_vehicles()?;
            }
            MenuChoice::Search => {
                let plate = session.prompt("Enter the license plate of the vehicle to search:")?;
                session.search(&plate)?;
            }
            MenuChoice::ModifyMileage => {
                let plate = session.prompt("Enter the license plate of the vehicle:")?;
                let mileage = session.prompt_mileage("Enter the new mileage:")?;
                session.modify_mileage(&plate, mileage)?;
            }
            MenuChoice::Delete => {
                let plate = session.prompt("Enter the license plate of the vehicle to delete:")?;
                session.delete(&plate)?;
            }
            MenuChoice::Show => {
                let plate = session.prompt("Enter the license plate of the vehicle:")?;
                session.show_vehicle(&plate)?;
            }
            MenuChoice::Exit => {
                println!("Goodbye.");
                break;
            }
        }
        io::stdout().flush()?;
    }

    Ok(())
}

/// Requested edits from the `config` subcommand
struct ConfigChanges {
    show: bool,
    set_output: Option<OutputFormat>,
    set_log_level: Option<String>,
    set_sample_data: Option<bool>,
    reset: bool,
}

fn cmd_config(mut config: Config, config_path: &Path, changes: ConfigChanges) -> Result<()> {
    if changes.reset {
        config = Config::default();
        config.save_to(config_path)?;
        println!("Configuration reset to defaults.");
        return Ok(());
    }

    let mut changed = false;

    if let Some(format) = changes.set_output {
        config.output_format = format;
        println!("Output format set to: {}", format);
        changed = true;
    }

    if let Some(level) = changes.set_log_level {
        println!("Log level set to: {}", level);
        config.log_level = level;
        changed = true;
    }

    if let Some(sample) = changes.set_sample_data {
        config.sample_data = sample;
        println!("Sample data set to: {}", sample);
        changed = true;
    }

    if changed {
        config.save_to(config_path)?;
    }

    if changes.show || !changed {
        println!("{}", config);
    }

    Ok(())
}
