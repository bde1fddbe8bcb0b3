// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line interface of farmcal.

mod arg;
mod calendar_formatter;
mod cli;
mod cmd_categories;
mod cmd_event;
mod cmd_view;
mod config;
mod event_formatter;
mod table;
mod util;

pub use crate::cli::{Cli, Commands, run};
pub use crate::config::Config;
