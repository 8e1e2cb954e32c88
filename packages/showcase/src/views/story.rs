//! Single-story page

use anyhow::Result;
use button_core::Story;
use maud::{html, Markup};

use super::docs::story_section;
use super::layout::{self, Depth};
use super::ViewContext;

pub fn render(cx: &ViewContext, story: &Story) -> Result<Markup> {
    let component = cx.i18n.t("docs.title");
    let section = story_section(cx, story, Depth::Nested)?;

    let body = html! {
        main class="max-w-3xl mx-auto p-8" {
            p {
                a href=(format!("../button.html#{}", story.id)) {
                    (cx.i18n.format("docs.back", &[("component", component.as_str())]))
                }
            }
            (section)
        }
    };

    let title = format!("{} / {}", component, story.name);
    Ok(layout::page(cx, &title, Depth::Nested, body))
}
