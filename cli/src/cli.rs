// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use farmcal_core::{APP_NAME, Config as CoreConfig, FarmCalendar, ViewMode};
use futures::{FutureExt, future::BoxFuture};
use tracing_subscriber::EnvFilter;

use crate::cmd_categories::CmdCategories;
use crate::cmd_event::{CmdEventAdd, CmdEventDelete, CmdEventDone, CmdEventEdit};
use crate::cmd_view::CmdView;
use crate::config::{Config, parse_config};

/// Run the farmcal command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    };
    Ok(())
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Plan, filter and review farm activities on a calendar.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // allow default to month view
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $FARMCAL_CONFIG, then \
$XDG_CONFIG_HOME/farmcal/config.toml on Linux and MacOS, %APPDATA%/farmcal/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommands(CmdView::commands())
            .subcommand(CmdEventAdd::command())
            .subcommand(CmdEventEdit::command())
            .subcommand(CmdEventDone::command())
            .subcommand(CmdEventDelete::command())
            .subcommand(CmdCategories::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdView::MONTH, matches)) => View(CmdView::from(ViewMode::Month, matches)),
            Some((CmdView::WEEK, matches)) => View(CmdView::from(ViewMode::Week, matches)),
            Some((CmdView::DAY, matches)) => View(CmdView::from(ViewMode::Day, matches)),
            Some((CmdView::AGENDA, matches)) => View(CmdView::from(ViewMode::Agenda, matches)),
            Some((CmdEventAdd::NAME, matches)) => Add(CmdEventAdd::from(matches)),
            Some((CmdEventEdit::NAME, matches)) => Edit(CmdEventEdit::from(matches)),
            Some((CmdEventDone::NAME, matches)) => Done(CmdEventDone::from(matches)),
            Some((CmdEventDelete::NAME, matches)) => Delete(CmdEventDelete::from(matches)),
            Some((CmdCategories::NAME, matches)) => Categories(CmdCategories::from(matches)),
            None => View(CmdView::month()),
            Some((name, _)) => return Err(format!("Unknown command: {name}").into()),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Render a calendar view
    View(CmdView),

    /// Add an event
    Add(CmdEventAdd),

    /// Edit an event
    Edit(CmdEventEdit),

    /// Toggle the completion of events
    Done(CmdEventDone),

    /// Delete events
    Delete(CmdEventDelete),

    /// List categories
    Categories(CmdCategories),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        tracing::debug!("parsing configuration...");
        let (core, cli) = parse_config(config).await?;
        match self.with_config(&cli) {
            View(a)   => Self::run_with(core, |x| a.run(x).boxed()).await,
            Add(a)    => Self::run_with(core, |x| a.run(x).boxed()).await,
            Edit(a)   => Self::run_with(core, |x| a.run(x).boxed()).await,
            Done(a)   => Self::run_with(core, |x| a.run(x).boxed()).await,
            Delete(a) => Self::run_with(core, |x| a.run(x).boxed()).await,
            Categories(a) => a.run(),
        }
    }

    /// Applies the defaults of the `[cli]` table.
    fn with_config(mut self, config: &Config) -> Self {
        use Commands::*;
        match &mut self {
            View(a) => a.verbose |= config.verbose,
            Add(a) => a.verbose |= config.verbose,
            Edit(a) => a.verbose |= config.verbose,
            Done(a) => a.verbose |= config.verbose,
            Delete(a) => a.verbose |= config.verbose,
            Categories(_) => {}
        }
        self
    }

    async fn run_with<F>(config: CoreConfig, f: F) -> Result<(), Box<dyn Error>>
    where
        F: for<'a> FnOnce(&'a mut FarmCalendar) -> BoxFuture<'a, Result<(), Box<dyn Error>>>,
    {
        let mut calendar = FarmCalendar::new(config).await?;
        f(&mut calendar).await
    }
}
