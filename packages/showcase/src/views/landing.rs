//! Landing page

use maud::{html, Markup};

use super::layout::{self, Depth};
use super::ViewContext;

pub fn render(cx: &ViewContext) -> Markup {
    let title = cx
        .config
        .title
        .clone()
        .unwrap_or_else(|| cx.i18n.t("landing.title"));
    let subtitle = cx
        .config
        .subtitle
        .clone()
        .unwrap_or_else(|| cx.i18n.t("landing.subtitle"));

    let body = html! {
        main class="flex items-center justify-center min-h-screen bg-white" {
            div class="text-center" {
                h1 class="text-5xl font-bold text-gray-900 mb-4" { (title) }
                p class="text-xl text-gray-600" { (subtitle) }
                p class="mt-8" {
                    a href="button.html" { (cx.i18n.t("landing.browse")) }
                }
            }
        }
    };

    layout::page(cx, &title, Depth::Root, body)
}
