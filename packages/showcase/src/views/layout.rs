//! Page shell shared by every view

use maud::{html, Markup, DOCTYPE};

use super::ViewContext;

/// Nesting of a page below the site root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Depth {
    Root,
    Nested,
}

impl Depth {
    /// Relative prefix that leads back to the site root.
    pub fn root_prefix(&self) -> &'static str {
        match self {
            Depth::Root => "",
            Depth::Nested => "../",
        }
    }
}

/// Href of the stylesheet as seen from a page at `depth`.
pub fn stylesheet_href(href: &str, depth: Depth) -> String {
    if href.starts_with('/') || href.contains("://") {
        href.to_string()
    } else {
        format!("{}{}", depth.root_prefix(), href)
    }
}

/// Wrap `body` in a full HTML document.
pub fn page(cx: &ViewContext, title: &str, depth: Depth, body: Markup) -> Markup {
    let lang = cx.i18n.locale().split('_').next().unwrap_or("en");

    html! {
        (DOCTYPE)
        html lang=(lang) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                link rel="stylesheet" href=(stylesheet_href(&cx.config.stylesheet, depth));
            }
            body { (body) }
        }
    }
}

/// A preview canvas around rendered markup.
pub fn canvas(content: Markup) -> Markup {
    html! {
        div class="flex items-center justify-center gap-4 p-8 border rounded-md" { (content) }
    }
}

/// Section heading inside a page.
pub fn section_title(title: &str) -> Markup {
    html! {
        h2 class="text-2xl font-bold mt-8 mb-4" { (title) }
    }
}
