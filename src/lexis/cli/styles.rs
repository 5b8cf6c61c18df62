//! Styles for the lexis CLI.
//!
//! Templates only ever name semantic styles (`headword`, `time`, ...). The mapping from those
//! names to actual colors and decorations lives here, so the look can change without touching
//! templates or rendering code.
//!
//! A style name that is not registered is rendered with a `(!?)` prefix, which makes typos in
//! templates visible both in colored and in plain output.
use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

/// Style identifiers shared between templates and renderers.
pub mod names {
    pub const MUTED: &str = "muted";
    pub const FAINT: &str = "faint";
    pub const ERROR: &str = "error";
    pub const WARNING: &str = "warning";
    pub const SUCCESS: &str = "success";
    pub const INFO: &str = "info";
    pub const TIME: &str = "time";
    pub const LIST_INDEX: &str = "list-index";
    pub const HEADWORD: &str = "headword";
    pub const TRANSLATION: &str = "translation";
    pub const POS: &str = "pos";
    pub const TAG: &str = "tag";
    pub const LABEL: &str = "label";
    pub const CATEGORY: &str = "category";
    pub const CATEGORY_ACTIVE: &str = "category-active";
    pub const EMPTY: &str = "empty";
}

/// A named collection of console styles.
#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named style, returning the theme for chaining.
    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    /// Applies the named style, or only checks the name when `use_color` is off.
    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.apply_to(text).force_styling(true).to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }
}

pub static LEXIS_THEME: Lazy<Theme> = Lazy::new(build_theme);

fn build_theme() -> Theme {
    let muted = Style::new().color256(246);
    let faint = Style::new().color256(242);
    let accent = Style::new().color256(220);

    Theme::new()
        .add(names::MUTED, muted.clone())
        .add(names::FAINT, faint.clone())
        .add(names::ERROR, Style::new().red().bold())
        .add(names::WARNING, Style::new().yellow().bold())
        .add(names::SUCCESS, Style::new().green())
        .add(names::INFO, muted.clone())
        .add(names::TIME, muted.clone().italic())
        .add(names::LIST_INDEX, accent.clone())
        .add(names::HEADWORD, Style::new().bold())
        .add(names::TRANSLATION, Style::new().cyan())
        .add(names::POS, faint.clone().italic())
        .add(names::TAG, Style::new().magenta())
        .add(names::LABEL, muted)
        .add(names::CATEGORY, faint)
        .add(names::CATEGORY_ACTIVE, accent.bold().underlined())
        .add(names::EMPTY, Style::new().dim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_output_has_no_escape_codes() {
        assert_eq!(LEXIS_THEME.apply(names::HEADWORD, "casa", false), "casa");
    }

    #[test]
    fn colored_output_wraps_text() {
        let styled = LEXIS_THEME.apply(names::SUCCESS, "ok", true);
        assert!(styled.contains("ok"));
        assert!(styled.contains('\u{1b}'));
    }

    #[test]
    fn unknown_style_is_flagged() {
        assert_eq!(LEXIS_THEME.apply("typo", "x", false), "(!?) x");
        assert!(LEXIS_THEME.apply("typo", "x", true).starts_with(MISSING_STYLE_INDICATOR));
    }
}
