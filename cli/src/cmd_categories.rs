// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io};

use clap::{ArgMatches, Command};
use colored::Color;
use farmcal_core::Category;

use crate::arg::CommonArgs;
use crate::event_formatter::hex_color;
use crate::table::{Column, PaddingDirection, Table};
use crate::util::OutputFormat;

/// List the categories an event can carry.
#[derive(Debug, Clone, Copy)]
pub struct CmdCategories {
    pub output_format: OutputFormat,
}

impl CmdCategories {
    pub const NAME: &str = "categories";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("List the activity categories")
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing categories...");
        self.write_to(&mut io::stdout())?;
        Ok(())
    }

    pub fn write_to(self, w: &mut impl io::Write) -> Result<(), Box<dyn Error>> {
        let categories = Category::known();
        match self.output_format {
            OutputFormat::Json => {
                let list: Vec<_> = categories
                    .iter()
                    .map(|c| {
                        serde_json::json!({
                            "key": c.key(),
                            "label": c.label(),
                            "icon": c.icon(),
                            "color": c.color(),
                        })
                    })
                    .collect();
                writeln!(w, "{}", serde_json::to_string_pretty(&list)?)?;
            }
            OutputFormat::Table => {
                let table = Table {
                    columns: &CategoryColumn::ALL,
                    separator: "  ",
                    padding: true,
                    data: &categories,
                };
                table.write_to(w)?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
enum CategoryColumn {
    Key,
    Label,
    Color,
}

impl CategoryColumn {
    const ALL: [CategoryColumn; 3] = [Self::Key, Self::Label, Self::Color];
}

impl Column<Category> for CategoryColumn {
    fn format(&self, data: &Category) -> String {
        match self {
            Self::Key => data.key().unwrap_or_default().to_string(),
            Self::Label => data.label().to_string(),
            Self::Color => format!("● {}", data.color()),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        PaddingDirection::Left
    }

    fn get_color(&self, data: &Category) -> Option<Color> {
        match self {
            Self::Color | Self::Label => hex_color(data.color()),
            Self::Key => None,
        }
    }
}
