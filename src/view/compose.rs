//! Compose module.

use anyhow::Result;
use serde::Serialize;

use crate::{
    email::Draft,
    printer::{Print, WriteColor},
    ui::Cell,
};

/// The compose panel.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct ComposeView {
    pub draft: Draft,
}

impl ComposeView {
    /// The compose panel with all fields cleared.
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn new(draft: Draft) -> Self {
        Self { draft }
    }
}

impl Print for ComposeView {
    fn print(&self, writer: &mut dyn WriteColor) -> Result<()> {
        let fields = [
            ("To", &self.draft.recipients),
            ("Subject", &self.draft.subject),
        ];

        for (name, value) in fields {
            Cell::new(format!("{name}:")).bold().print(writer)?;
            writeln!(writer, " {value}")?;
        }

        Cell::new("─".repeat(40)).dimmed().print(writer)?;
        writeln!(writer)?;
        writeln!(writer, "{}", self.draft.body)?;

        Ok(writer.reset()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::table::tests::StringWriter;

    #[test]
    fn clear_fields() {
        let view = ComposeView::blank();
        assert_eq!(Draft::default(), view.draft);
    }

    #[test]
    fn print_fields() {
        let view = ComposeView::new(Draft {
            recipients: "b@x.com".into(),
            subject: "S".into(),
            body: "B".into(),
        });
        let mut writer = StringWriter::default();
        view.print(&mut writer).unwrap();

        let expected = format!("To: b@x.com\nSubject: S\n{}\nB\n", "─".repeat(40));
        assert_eq!(expected, writer.content);
    }
}
