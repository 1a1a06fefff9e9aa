use clap::ValueEnum;
use termcolor::ColorChoice;

/// Represents the available output formats.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, ValueEnum)]
pub enum OutputFmt {
    #[default]
    Plain,
    Json,
}

/// Represents the available color modes.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, ValueEnum)]
pub enum ColorFmt {
    Never,
    Always,
    Ansi,
    #[default]
    Auto,
}

impl From<ColorFmt> for ColorChoice {
    fn from(fmt: ColorFmt) -> Self {
        match fmt {
            ColorFmt::Never => Self::Never,
            ColorFmt::Always => Self::Always,
            ColorFmt::Ansi => Self::AlwaysAnsi,
            ColorFmt::Auto => Self::Auto,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_output_fmt_ignoring_case() {
        assert_eq!(Ok(OutputFmt::Json), OutputFmt::from_str("JSON", true));
        assert_eq!(Ok(OutputFmt::Plain), OutputFmt::from_str("plain", true));
        assert!(OutputFmt::from_str("html", true).is_err());
    }

    #[test]
    fn color_fmt_into_color_choice() {
        assert_eq!(ColorChoice::AlwaysAnsi, ColorChoice::from(ColorFmt::Ansi));
        assert_eq!(ColorChoice::Auto, ColorChoice::from(ColorFmt::default()));
    }
}
