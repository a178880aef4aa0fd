//! Board Layout Panel - CLI entry point
//!
//! This binary provides the command-line interface for the layout
//! configuration panel: the TUI itself, preset inspection, and
//! configuration file management.

use board_layout_panel::config::{default, loader::ConfigLoader, xdg};
use board_layout_panel::panel::{PanelState, SharedPanel};
use board_layout_panel::tui::app::App;
use board_layout_panel::{logging, presets, LayoutName, Side};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

/// Board layout configuration panel
#[derive(Parser)]
#[command(name = "blp")]
#[command(version, about = "Board layout configuration panel")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the blp CLI
#[derive(Subcommand)]
enum Commands {
    /// Launch the terminal user interface
    Tui {
        /// Configuration file path (defaults to the XDG location)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Initial layout, overriding the configuration file
        #[arg(long)]
        layout: Option<LayoutName>,

        /// Bottom side, overriding the configuration file
        #[arg(long)]
        side: Option<Side>,
    },

    /// Inspect built-in layout presets
    Presets {
        #[command(subcommand)]
        action: PresetsAction,
    },

    /// Manage configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Actions for the `presets` subcommand.
#[derive(Subcommand)]
enum PresetsAction {
    /// List all layout names
    List,
    /// Print the diagrams of one preset
    Show {
        /// Layout name (standard, hole, closeup, marathon, double,
        /// secret_passage, custom)
        name: LayoutName,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

/// Actions for the `config` subcommand.
#[derive(Subcommand)]
enum ConfigAction {
    /// Create default configuration file
    Init {
        /// Overwrite existing configuration (creates backup)
        #[arg(long)]
        force: bool,
    },
    /// Show configuration file path
    Path,
    /// Validate configuration file
    Validate,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Tui {
            config,
            layout,
            side,
        } => run_tui_command(config, layout, side),
        Commands::Presets { action } => match action {
            PresetsAction::List => {
                for name in LayoutName::ALL {
                    println!("{}", name);
                }
                ExitCode::SUCCESS
            }
            PresetsAction::Show { name, format } => run_presets_show(name, &format),
        },
        Commands::Config { action } => {
            let result = match action {
                ConfigAction::Init { force } => match default::create_default_config(force) {
                    Ok(path) => {
                        println!("Created configuration at {}", path.display());
                        Ok(())
                    }
                    Err(e) => Err(e),
                },
                ConfigAction::Path => {
                    println!("{}", xdg::config_path().display());
                    Ok(())
                }
                ConfigAction::Validate => match ConfigLoader::load_default() {
                    Ok(config) => {
                        println!("Configuration is valid");
                        println!("{config:#?}");
                        Ok(())
                    }
                    Err(e) => Err(e),
                },
            };
            if let Err(e) = result {
                eprintln!("Config error: {e}");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
    }
}

/// Loads configuration, applies CLI overrides, and runs the TUI.
fn run_tui_command(
    config_path: Option<PathBuf>,
    layout: Option<LayoutName>,
    side: Option<Side>,
) -> ExitCode {
    let config = match config_path {
        Some(path) => ConfigLoader::load_from_path(&path),
        None => ConfigLoader::load_default(),
    };
    let config = match config {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {e}");
            return ExitCode::FAILURE;
        }
    };

    logging::init(&config.log);

    let tick_rate = match config.tui.tick_rate() {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Config error: {e}");
            return ExitCode::FAILURE;
        }
    };
    let driver_poll = if config.driver.enabled {
        match config.driver.poll_interval() {
            Ok(d) => Some(d),
            Err(e) => {
                eprintln!("Config error: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        None
    };

    let initial = layout.unwrap_or(config.panel.initial_layout);
    let bottom = side.unwrap_or(config.panel.bottom_side);
    let panel = SharedPanel::new(PanelState::new(initial, bottom));

    let rt = tokio::runtime::Runtime::new().expect("failed to create tokio runtime for TUI");
    if let Err(e) = rt.block_on(async {
        let mut app = App::new(panel, tick_rate, driver_poll);
        app.run().await
    }) {
        eprintln!("TUI error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

/// Prints one preset's diagrams in text or JSON form.
fn run_presets_show(name: LayoutName, format: &str) -> ExitCode {
    match format {
        "text" => {
            println!("# placement");
            println!("{}", presets::placement(name));
            println!();
            println!("# promotion");
            println!("{}", presets::promotion(name));
            ExitCode::SUCCESS
        }
        "json" => {
            let value = serde_json::json!({
                "name": name,
                "placement": presets::placement(name),
                "promotion": presets::promotion(name),
            });
            println!("{}", value);
            ExitCode::SUCCESS
        }
        other => {
            eprintln!("Error: unknown format '{}', expected 'text' or 'json'", other);
            ExitCode::FAILURE
        }
    }
}
