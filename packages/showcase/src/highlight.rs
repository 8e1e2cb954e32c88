//! Syntax highlighting for story source snippets

use anyhow::{Context, Result};
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

const FALLBACK_THEME: &str = "InspiredGitHub";

pub struct Highlighter {
    syntaxes: SyntaxSet,
    theme: Theme,
}

impl Highlighter {
    /// Load the bundled syntaxes and the named theme.
    ///
    /// Unknown theme names fall back to `InspiredGitHub`.
    pub fn new(theme_name: &str) -> Result<Self> {
        let mut themes = ThemeSet::load_defaults().themes;

        let theme = match themes.remove(theme_name) {
            Some(theme) => theme,
            None => {
                tracing::warn!(
                    "Highlight theme not found: {}, using {}",
                    theme_name,
                    FALLBACK_THEME
                );
                themes
                    .remove(FALLBACK_THEME)
                    .context("bundled highlight themes are missing")?
            }
        };

        Ok(Self {
            syntaxes: SyntaxSet::load_defaults_newlines(),
            theme,
        })
    }

    /// Highlight an HTML snippet into a styled `<pre>` block.
    pub fn html(&self, code: &str) -> Result<String> {
        let syntax = self
            .syntaxes
            .find_syntax_by_extension("html")
            .unwrap_or_else(|| self.syntaxes.find_syntax_plain_text());

        highlighted_html_for_string(code, &self.syntaxes, syntax, &self.theme)
            .context("highlighting source snippet")
    }
}

/// Break markup after each tag close so snippets read one element per line.
pub fn pretty_markup(html: &str) -> String {
    html.replace("><", ">\n<")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_html() {
        let highlighter = Highlighter::new("InspiredGitHub").unwrap();
        let output = highlighter.html("<button class=\"x\">Go</button>\n").unwrap();

        assert!(output.starts_with("<pre"));
        assert!(output.contains("button"));
        assert!(!output.contains("<button"));
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        assert!(Highlighter::new("no-such-theme").is_ok());
    }

    #[test]
    fn test_pretty_markup() {
        assert_eq!(
            pretty_markup("<button><span></span>Go</button>"),
            "<button>\n<span>\n</span>Go</button>"
        );
    }
}
