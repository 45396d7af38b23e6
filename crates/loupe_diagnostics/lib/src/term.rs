//! Terminal back-end for emitting reports.

use std::io::Write;
use std::str::FromStr;

use anstream::ColorChoice;
use loupe_span::files::Sources;

mod config;
mod render;

pub use self::config::{Charset, RenderConfig, Styles};
pub use self::render::{render, render_with};

use crate::report::Report;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ColorArg(pub ColorChoice);

impl ColorArg {
    pub const VARIANTS: &'static [&'static str] = &["auto", "always", "ansi", "never"];
}

impl FromStr for ColorArg {
    type Err = &'static str;

    fn from_str(src: &str) -> Result<ColorArg, &'static str> {
        match src {
            _ if src.eq_ignore_ascii_case("auto") => Ok(ColorArg(ColorChoice::Auto)),
            _ if src.eq_ignore_ascii_case("always") => Ok(ColorArg(ColorChoice::Always)),
            _ if src.eq_ignore_ascii_case("ansi") => Ok(ColorArg(ColorChoice::AlwaysAnsi)),
            _ if src.eq_ignore_ascii_case("never") => Ok(ColorArg(ColorChoice::Never)),
            _ => Err("valid values: auto, always, ansi, never"),
        }
    }
}

impl From<ColorArg> for ColorChoice {
    fn from(arg: ColorArg) -> ColorChoice {
        arg.0
    }
}

/// Renders one report and writes it to `writer`, stripping styles when
/// `colors` is off.
pub fn emit<S: Sources>(
    writer: &mut dyn Write,
    config: &RenderConfig,
    sources: &S,
    report: &Report,
    colors: bool,
) -> std::io::Result<()> {
    let mut doc = render_with(report, sources, config);
    if !colors {
        doc.strip_styles();
    }
    doc.print(writer)
}

#[cfg(test)]
mod tests {
    use loupe_span::files::SourceMap;
    use loupe_span::position::Position;

    use super::*;
    use crate::report::Marker;

    #[test]
    fn emit_strips_styles_when_colors_are_off() {
        let mut sources = SourceMap::new();
        let file = sources.add("test.zc", "let x := 1");
        let report = Report::error()
            .with_message("boom")
            .with_marker(Position::new(file, 1, 5, 1, 6), Marker::primary("here"));
        let config = RenderConfig::default();

        let mut colorless = Vec::new();
        emit(&mut colorless, &config, &sources, &report, false).unwrap();
        let mut colorful = Vec::new();
        emit(&mut colorful, &config, &sources, &report, true).unwrap();

        assert!(!colorless.contains(&b'\x1b'));
        assert!(colorful.contains(&b'\x1b'));
    }

    #[test]
    fn color_arg_parses_case_insensitively() {
        assert_eq!("auto".parse(), Ok(ColorArg(ColorChoice::Auto)));
        assert_eq!("ALWAYS".parse(), Ok(ColorArg(ColorChoice::Always)));
        assert_eq!("Ansi".parse(), Ok(ColorArg(ColorChoice::AlwaysAnsi)));
        assert_eq!("never".parse(), Ok(ColorArg(ColorChoice::Never)));
        assert!("sometimes".parse::<ColorArg>().is_err());
    }
}
