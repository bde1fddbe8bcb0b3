// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{io, marker::PhantomData};

use colored::{Color, Colorize};
use unicode_width::UnicodeWidthStr;

pub struct Table<'a, T, C: Column<T>> {
    pub columns: &'a [C],
    pub separator: &'a str,
    pub padding: bool,
    pub data: &'a [T],
}

impl<'a, T, C: Column<T>> Table<'a, T, C> {
    pub fn write_to(&self, w: &mut impl io::Write) -> io::Result<()> {
        if self.columns.is_empty() {
            return Ok(());
        }

        let table: Vec<Vec<String>> = self
            .data
            .iter()
            .map(|row| self.columns.iter().map(|col| col.format(row)).collect())
            .collect();

        let columns = self.compute_columns(&table);

        for (cells, row) in table.into_iter().zip(self.data) {
            for (j, (col, cell)) in columns.iter().zip(cells).enumerate() {
                let cell = col.stylize_cell(row, cell);
                write!(w, "{cell}")?;

                if j < columns.len() - 1 {
                    write!(w, "{}", self.separator)?;
                } else {
                    writeln!(w)?;
                }
            }
        }

        Ok(())
    }

    fn compute_columns(&self, table: &[Vec<String>]) -> Vec<ColumnStylizer<'a, T, C>> {
        let max_lengths = (self.padding && !table.is_empty()).then(|| get_column_max_width(table));

        let mut columns = Vec::with_capacity(self.columns.len());
        for (i, col) in self.columns.iter().enumerate() {
            let padding_direction = col.padding_direction();

            let is_last = i == self.columns.len() - 1;
            let padding = if max_lengths.is_none()
                || (is_last && padding_direction == PaddingDirection::Left)
            {
                None // Last column does not need padding if it's left-aligned
            } else {
                Some((max_lengths.as_ref().map_or(0, |m| m[i]), padding_direction))
            };

            columns.push(ColumnStylizer {
                config: col,
                padding,
                _marker: PhantomData,
            });
        }
        columns
    }
}

pub trait Column<T> {
    fn format(&self, data: &T) -> String;
    fn padding_direction(&self) -> PaddingDirection;
    fn get_color(&self, data: &T) -> Option<Color>;
}

#[derive(Debug, Clone)]
struct ColumnStylizer<'a, T, C: Column<T>> {
    config: &'a C,
    /// padding width and direction
    padding: Option<(usize, PaddingDirection)>,
    _marker: PhantomData<T>,
}

impl<T, C: Column<T>> ColumnStylizer<'_, T, C> {
    pub fn stylize_cell(&self, data: &T, cell: String) -> String {
        let cell = match self.padding {
            Some((width, direction)) => pad(&cell, width, direction),
            None => cell,
        };

        self.colorize_cell(data, cell)
    }

    fn colorize_cell(&self, data: &T, cell: String) -> String {
        match self.config.get_color(data) {
            Some(color) => cell.color(color).to_string(),
            _ => cell,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingDirection {
    Left,
    Right,
}

/// Pads by display width, so wide characters line up.
pub fn pad(cell: &str, width: usize, direction: PaddingDirection) -> String {
    let fill = " ".repeat(width.saturating_sub(cell.width()));
    match direction {
        PaddingDirection::Left => format!("{cell}{fill}"),
        PaddingDirection::Right => format!("{fill}{cell}"),
    }
}

fn get_column_max_width(table: &[Vec<String>]) -> Vec<usize> {
    let mut max_width = vec![0; table[0].len()];
    for row in table {
        for (i, cell) in row.iter().enumerate() {
            let width = cell.width();
            if width > max_width[i] {
                max_width[i] = width;
            }
        }
    }
    max_width
}
