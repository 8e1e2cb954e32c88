//! Button documentation page
//!
//! One canvas per story with its description, resolution and source, then
//! the controls table and the variant and size matrix.

use anyhow::Result;
use button_core::{
    button_arg_types, list_stories, variant_size_matrix, Control, Resolution, Story, Variant,
};
use maud::{html, Markup, PreEscaped, Render};

use super::layout::{self, Depth};
use super::ViewContext;
use crate::highlight::pretty_markup;
use crate::markdown;

const COMPONENT_DOCS: &str = "\
A button with three variants and three sizes.

- `isLoading` shows a spinner in place of the left icon, hides the right icon and disables the button.
- `disabled` and `isLoading` always win over `showAsHover`.
- `showAsHover` renders the hover look statically, for reviewing designs.
- `className` is applied after every other class.
";

pub fn render(cx: &ViewContext) -> Result<Markup> {
    let sections = list_stories()
        .iter()
        .map(|story| story_section(cx, story, Depth::Root))
        .collect::<Result<Vec<_>>>()?;

    let body = html! {
        main class="max-w-5xl mx-auto p-8" {
            p { a href="index.html" { "←" } }
            h1 class="text-3xl font-bold mb-4" { (cx.i18n.t("docs.title")) }
            (PreEscaped(markdown::render(COMPONENT_DOCS)))

            (layout::section_title(&cx.i18n.t("docs.stories")))
            @for section in sections {
                (section)
            }

            (controls_table(cx))
            (matrix(cx))
        }
    };

    Ok(layout::page(cx, &cx.i18n.t("docs.title"), Depth::Root, body))
}

/// Canvas, description, resolution and source for one story.
pub fn story_section(cx: &ViewContext, story: &Story, depth: Depth) -> Result<Markup> {
    let button = story.button();
    let source = cx
        .highlighter
        .html(&format!("{}\n", pretty_markup(&button.to_html())))?;

    Ok(html! {
        section id=(story.id) class="mb-8" {
            h3 class="text-xl font-bold mb-2" {
                @match depth {
                    Depth::Root => {
                        a href=(format!("stories/{}.html", story.id)) { (story.name) }
                    },
                    Depth::Nested => { (story.name) },
                }
            }
            (PreEscaped(markdown::render(&story.description)))
            (layout::canvas(button.render()))
            (resolution_table(cx, &story.resolution(), &story.class_name))
            details {
                summary { (cx.i18n.t("docs.source")) }
                (PreEscaped(source))
            }
        }
    })
}

fn resolution_table(cx: &ViewContext, resolution: &Resolution, overrides: &str) -> Markup {
    let rows = [
        ("table.state", resolution.state.as_str().to_string()),
        ("table.classes", resolution.class_list(overrides)),
        ("table.left_slot", resolution.left_slot.as_str().to_string()),
        ("table.right_slot", resolution.right_slot.as_str().to_string()),
        ("table.disabled", resolution.is_native_disabled.to_string()),
    ];

    html! {
        table class="text-sm" {
            caption { (cx.i18n.t("docs.resolution")) }
            tbody {
                @for (key, value) in &rows {
                    tr {
                        th { (cx.i18n.t(key)) }
                        td { code { (value) } }
                    }
                }
            }
        }
    }
}

fn control_label(control: &Control) -> String {
    match control {
        Control::Select { options } => format!("select: {}", options.join(" | ")),
        Control::Boolean => "boolean".to_string(),
        Control::Text => "text".to_string(),
    }
}

fn controls_table(cx: &ViewContext) -> Markup {
    html! {
        (layout::section_title(&cx.i18n.t("docs.controls")))
        table class="text-sm" {
            thead {
                tr {
                    th { (cx.i18n.t("table.name")) }
                    th { (cx.i18n.t("table.description")) }
                    th { (cx.i18n.t("table.control")) }
                    th { (cx.i18n.t("table.default")) }
                }
            }
            tbody {
                @for arg in button_arg_types() {
                    tr {
                        td { code { (arg.name) } }
                        td { (arg.description) }
                        td { (control_label(&arg.control)) }
                        td { (arg.default) }
                    }
                }
            }
        }
    }
}

fn matrix(cx: &ViewContext) -> Markup {
    let stories = variant_size_matrix();

    html! {
        (layout::section_title(&cx.i18n.t("docs.matrix")))
        @for variant in Variant::ALL {
            h3 class="text-lg mb-2" { (variant.label()) }
            (layout::canvas(html! {
                @for story in stories.iter().filter(|story| story.props.variant == variant) {
                    (story.button())
                }
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_label() {
        assert_eq!(control_label(&Control::Boolean), "boolean");
        assert_eq!(
            control_label(&Control::Select {
                options: vec!["sm".to_string(), "md".to_string()]
            }),
            "select: sm | md"
        );
    }
}
