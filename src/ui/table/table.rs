//! Responsive tables.
//!
//! A table is a header row followed by one row per item. Columns are
//! as wide as their widest cell; when the table overflows the
//! terminal, shrinkable cells are cut with an ellipsis.

use anyhow::{Context, Result};
use log::trace;
use termcolor::{Color, ColorSpec};
use terminal_size::terminal_size;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::printer::{Print, PrintTableOpts, WriteColor};

/// Width used when the terminal size cannot be determined.
pub const DEFAULT_TERM_WIDTH: usize = 80;

/// Minimum width of a shrunk cell.
pub const MAX_SHRINK_WIDTH: usize = 5;

/// Background of shaded cells (read emails).
pub const SHADE_COLOR: u8 = 238;

/// Foreground of column separators and rules.
pub const DIM_COLOR: u8 = 8;

#[derive(Debug, Default)]
pub struct Cell {
    style: ColorSpec,
    value: String,
    shrinkable: bool,
}

impl Cell {
    pub fn new<T: AsRef<str>>(value: T) -> Self {
        // line breaks, tabs and variation selectors would break the
        // column alignment
        let value = value
            .as_ref()
            .replace(['\r', '\n', '\t', '\u{fe0e}', '\u{fe0f}'], "");

        Self {
            value,
            ..Self::default()
        }
    }

    pub fn unicode_width(&self) -> usize {
        UnicodeWidthStr::width(self.value.as_str())
    }

    /// Let the cell shrink when the table overflows.
    pub fn shrinkable(mut self) -> Self {
        self.shrinkable = true;
        self
    }

    pub fn is_shrinkable(&self) -> bool {
        self.shrinkable
    }

    pub fn bold(mut self) -> Self {
        self.style.set_bold(true);
        self
    }

    pub fn bold_if(self, predicate: bool) -> Self {
        if predicate {
            self.bold()
        } else {
            self
        }
    }

    /// Apply the grey background when the predicate holds.
    pub fn shaded_if(mut self, predicate: bool) -> Self {
        if predicate {
            self.style.set_bg(Some(Color::Ansi256(SHADE_COLOR)));
        }
        self
    }

    pub fn underline(mut self) -> Self {
        self.style.set_underline(true);
        self
    }

    pub fn fg(mut self, color: Color) -> Self {
        self.style.set_fg(Some(color));
        self
    }

    pub fn dimmed(self) -> Self {
        self.fg(Color::Ansi256(DIM_COLOR))
    }

    /// Pad the value to the given width plus one trailing space. A
    /// wider value is cut and ends with an ellipsis.
    fn fit(&mut self, width: usize) {
        let mut len = self.unicode_width();

        if len > width {
            let mut value = String::new();
            len = 0;

            for c in self.value.chars() {
                let char_width = c.width().unwrap_or(0);
                if len + char_width >= width {
                    break;
                }
                len += char_width;
                value.push(c);
            }

            value.push('…');
            len += 1;
            trace!("shrunk value: {value}");
            self.value = value;
        }

        self.value.push_str(&" ".repeat(width + 1 - len));
    }
}

impl Print for Cell {
    fn print(&self, writer: &mut dyn WriteColor) -> Result<()> {
        writer
            .set_color(&self.style)
            .with_context(|| format!(r#"cannot apply colors to cell "{}""#, self.value))?;

        write!(writer, "{}", self.value)
            .with_context(|| format!(r#"cannot print cell "{}""#, self.value))?;
        Ok(writer.reset()?)
    }
}

#[derive(Debug, Default)]
pub struct Row(pub Vec<Cell>);

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cell(mut self, cell: Cell) -> Self {
        self.0.push(cell);
        self
    }
}

/// The widest cell of each column.
fn column_widths(rows: &[Row]) -> Vec<usize> {
    let mut widths: Vec<usize> = Vec::new();

    for row in rows {
        for (i, cell) in row.0.iter().enumerate() {
            match widths.get_mut(i) {
                Some(width) => *width = (*width).max(cell.unicode_width()),
                None => widths.push(cell.unicode_width()),
            }
        }
    }

    widths
}

/// The width of a shrinkable column once the table lost `overflow`
/// columns.
fn shrunk_width(width: usize, overflow: usize) -> usize {
    if overflow + MAX_SHRINK_WIDTH < width {
        width - overflow
    } else {
        MAX_SHRINK_WIDTH
    }
}

pub trait Table
where
    Self: Sized,
{
    fn head() -> Row;

    fn row(&self) -> Row;

    /// Print the header then one row per item, within the given max
    /// width or the terminal width.
    fn print(writer: &mut dyn WriteColor, items: &[Self], opts: PrintTableOpts) -> Result<()> {
        let max_width = opts
            .max_width
            .or_else(|| terminal_size().map(|(w, _)| w.0 as usize))
            .unwrap_or(DEFAULT_TERM_WIDTH);

        let mut rows = vec![Self::head()];
        rows.extend(items.iter().map(Self::row));

        let widths = column_widths(&rows);
        // every cell is followed by a space, columns are separated by
        // a bar
        let table_width = widths.iter().sum::<usize>() + (widths.len() * 2).saturating_sub(1);
        let overflow = table_width.saturating_sub(max_width);
        trace!("column widths: {widths:?}, table width: {table_width}, overflow: {overflow}");

        for row in rows {
            for (i, mut cell) in row.0.into_iter().enumerate() {
                if i > 0 {
                    Cell::new("│").dimmed().print(writer)?;
                }

                let width = if overflow > 0 && cell.is_shrinkable() {
                    shrunk_width(widths[i], overflow)
                } else {
                    widths[i]
                };

                cell.fit(width);
                cell.print(writer)?;
            }
            writeln!(writer)?;
        }

        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::io;
    use termcolor::ColorSpec;

    use super::*;

    /// In-memory writer used to assert printed output.
    #[derive(Debug, Default)]
    pub(crate) struct StringWriter {
        pub(crate) content: String,
    }

    impl io::Write for StringWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.content.push_str(&String::from_utf8_lossy(buf));
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl termcolor::WriteColor for StringWriter {
        fn supports_color(&self) -> bool {
            false
        }

        fn set_color(&mut self, _spec: &ColorSpec) -> io::Result<()> {
            io::Result::Ok(())
        }

        fn reset(&mut self) -> io::Result<()> {
            io::Result::Ok(())
        }
    }

    impl WriteColor for StringWriter {}

    struct Row3 {
        key: &'static str,
        subject: &'static str,
        date: &'static str,
    }

    impl Table for Row3 {
        fn head() -> Row {
            Row::new()
                .cell(Cell::new("KEY"))
                .cell(Cell::new("SUBJECT").shrinkable())
                .cell(Cell::new("DATE"))
        }

        fn row(&self) -> Row {
            Row::new()
                .cell(Cell::new(self.key))
                .cell(Cell::new(self.subject).shrinkable())
                .cell(Cell::new(self.date))
        }
    }

    fn print(items: &[Row3], max_width: usize) -> String {
        let mut writer = StringWriter::default();
        let opts = PrintTableOpts {
            max_width: Some(max_width),
        };
        Table::print(&mut writer, items, opts).unwrap();
        writer.content
    }

    #[test]
    fn pads_cells_to_widest_value() {
        let items = [
            Row3 { key: "o1", subject: "Hi", date: "t" },
            Row3 { key: "o22", subject: "Lunch", date: "tt" },
        ];

        let expected = concat![
            "KEY │SUBJECT │DATE \n",
            "o1  │Hi      │t    \n",
            "o22 │Lunch   │tt   \n",
        ];
        assert_eq!(expected, print(&items, 80));
    }

    #[test]
    fn shrinks_overflowing_cells() {
        let items = [
            Row3 { key: "o1", subject: "short", date: "d" },
            Row3 { key: "o2", subject: "a much longer subject", date: "d" },
        ];

        let expected = concat![
            "KEY │SUBJECT       │DATE \n",
            "o1  │short         │d    \n",
            "o2  │a much longe… │d    \n",
        ];
        assert_eq!(expected, print(&items, 25));
    }

    #[test]
    fn never_shrinks_cells_below_min_width() {
        let items = [
            Row3 { key: "o1", subject: "short", date: "d" },
            Row3 { key: "o2", subject: "a much longer subject", date: "d" },
        ];

        let expected = concat![
            "KEY │SUBJ… │DATE \n",
            "o1  │short │d    \n",
            "o2  │a mu… │d    \n",
        ];
        assert_eq!(expected, print(&items, 10));
    }

    #[test]
    fn strips_line_breaks_from_cells() {
        assert_eq!("ab", Cell::new("a\r\n\tb").value);
    }
}
