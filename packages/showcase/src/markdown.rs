//! Markdown rendering for story and component descriptions

use pulldown_cmark::{html, Options, Parser};

/// Render CommonMark with tables and strikethrough to HTML.
pub fn render(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(text, options);
    let mut output = String::with_capacity(text.len() * 2);
    html::push_html(&mut output, parser);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_markup() {
        let html = render("Use **one** primary button and `h-8` icons.");
        assert!(html.contains("<strong>one</strong>"));
        assert!(html.contains("<code>h-8</code>"));
        assert!(html.starts_with("<p>"));
    }

    #[test]
    fn test_raw_text_is_escaped_in_code() {
        let html = render("`<button>`");
        assert!(html.contains("&lt;button&gt;"));
    }
}
