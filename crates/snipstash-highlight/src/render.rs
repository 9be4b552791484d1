//! Classed-HTML rendering over syntect's default syntax and theme sets.

use syntect::highlighting::ThemeSet;
use syntect::html::{ClassStyle, ClassedHTMLGenerator, css_for_theme_with_class_style};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use crate::error::HighlightError;

/// Theme applied when a request does not name one.
pub const DEFAULT_THEME: &str = "base16-ocean.dark";

const CLASS_STYLE: ClassStyle = ClassStyle::Spaced;

/// Markup produced for one snippet: class-annotated HTML plus the CSS that
/// styles those classes for the requested theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlighted {
    pub html: String,
    pub css: String,
}

/// Owns the loaded syntax and theme sets. Constructed once at startup and
/// shared through server state; loading the default sets is too expensive to
/// repeat per request.
pub struct Highlighter {
    syntaxes: SyntaxSet,
    themes: ThemeSet,
}

impl Highlighter {
    pub fn new() -> Self {
        Self {
            syntaxes: SyntaxSet::load_defaults_newlines(),
            themes: ThemeSet::load_defaults(),
        }
    }

    /// Names of every available theme, sorted.
    pub fn themes(&self) -> Vec<String> {
        self.themes.themes.keys().cloned().collect()
    }

    /// Render `code` as classed HTML for `language`, with CSS for `theme`.
    ///
    /// `language` is resolved as a grammar name or file extension. Fails
    /// without partial output when the grammar or the theme is unknown.
    pub fn highlight(
        &self,
        code: &str,
        language: &str,
        theme: &str,
    ) -> Result<Highlighted, HighlightError> {
        let syntax = self
            .syntaxes
            .find_syntax_by_token(language)
            .ok_or_else(|| HighlightError::UnsupportedLanguage(language.to_string()))?;
        let theme = self
            .themes
            .themes
            .get(theme)
            .ok_or_else(|| HighlightError::UnsupportedTheme(theme.to_string()))?;

        let mut generator =
            ClassedHTMLGenerator::new_with_class_style(syntax, &self.syntaxes, CLASS_STYLE);
        for line in LinesWithEndings::from(code) {
            generator.parse_html_for_line_which_includes_newline(line)?;
        }
        let html = format!(
            "<pre class=\"highlight\"><code>{}</code></pre>\n",
            generator.finalize()
        );

        let css = css_for_theme_with_class_style(theme, CLASS_STYLE)?;

        Ok(Highlighted { html, css })
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}
