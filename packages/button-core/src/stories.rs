//! Built-in Button stories and their controls.
//!
//! A story is a named, documented configuration of the Button. The showcase
//! renders each one on a canvas; the CLI lists them.

use crate::render::Button;
use crate::resolver::{ButtonProps, Resolution};
use crate::types::{Size, Variant};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

const ARROW_LEFT: &str = r#"<svg viewBox="0 0 20 20" fill="currentColor" aria-hidden="true"><path d="M12.7 4.3a1 1 0 010 1.4L8.4 10l4.3 4.3a1 1 0 01-1.4 1.4l-5-5a1 1 0 010-1.4l5-5a1 1 0 011.4 0z"/></svg>"#;
const ARROW_RIGHT: &str = r#"<svg viewBox="0 0 20 20" fill="currentColor" aria-hidden="true"><path d="M7.3 4.3a1 1 0 011.4 0l5 5a1 1 0 010 1.4l-5 5a1 1 0 01-1.4-1.4l4.3-4.3-4.3-4.3a1 1 0 010-1.4z"/></svg>"#;

/// A documented Button configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    /// Stable identifier, also the page name
    pub id: String,
    /// Display name
    pub name: String,
    /// Markdown description
    pub description: String,
    pub props: ButtonProps,
    /// Plain-text button label
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right_icon: Option<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub class_name: String,
}

impl Story {
    fn new(id: &str, name: &str, description: &str, props: ButtonProps) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            props,
            label: "Button".to_string(),
            left_icon: None,
            right_icon: None,
            class_name: String::new(),
        }
    }

    fn label(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }

    fn left_icon(mut self, icon: &str) -> Self {
        self.left_icon = Some(icon.to_string());
        self
    }

    fn right_icon(mut self, icon: &str) -> Self {
        self.right_icon = Some(icon.to_string());
        self
    }

    /// The element this story renders.
    pub fn button(&self) -> Button {
        let mut button = Button::with_label(&self.label)
            .props(self.props)
            .class_name(self.class_name.clone());
        if let Some(icon) = &self.left_icon {
            button = button.left_icon(icon.clone());
        }
        if let Some(icon) = &self.right_icon {
            button = button.right_icon(icon.clone());
        }
        button
    }

    pub fn resolution(&self) -> Resolution {
        self.button().resolution()
    }

    pub fn to_html(&self) -> String {
        self.button().to_html()
    }
}

/// Built-in stories, in documentation order.
pub static BUTTON_STORIES: LazyLock<Vec<Story>> = LazyLock::new(|| {
    vec![
        Story::new(
            "primary",
            "Primary",
            "The main call to action. Use **one** primary button per view.",
            ButtonProps::new(),
        ),
        Story::new(
            "secondary",
            "Secondary",
            "Supporting actions that sit next to a primary button.",
            ButtonProps::new().variant(Variant::Secondary),
        ),
        Story::new(
            "tertiary",
            "Tertiary",
            "Low-emphasis actions. Only the text color changes on hover.",
            ButtonProps::new().variant(Variant::Tertiary),
        ),
        Story::new(
            "small",
            "Small",
            "Compact size for dense layouts: `h-8` with `w-4 h-4` icons.",
            ButtonProps::new().size(Size::Sm),
        ),
        Story::new(
            "large",
            "Large",
            "Prominent size: `h-11` with a wider `gap-2` between icon and label.",
            ButtonProps::new().size(Size::Lg),
        ),
        Story::new(
            "disabled",
            "Disabled",
            "Sets the native `disabled` attribute. The disabled look wins over every other state.",
            ButtonProps::new().disabled(true),
        ),
        Story::new(
            "loading",
            "Loading",
            "Shows a spinner in the left slot and disables the button while work is in flight.",
            ButtonProps::new().loading(true),
        )
        .label("Saving"),
        Story::new(
            "hover",
            "Hover",
            "Renders the hover look permanently so it can be reviewed without a pointer.",
            ButtonProps::new().show_as_hover(true),
        ),
        Story::new(
            "with-left-icon",
            "With Left Icon",
            "An icon before the label, sized to match the button.",
            ButtonProps::new(),
        )
        .label("Back")
        .left_icon(ARROW_LEFT),
        Story::new(
            "with-right-icon",
            "With Right Icon",
            "An icon after the label.",
            ButtonProps::new().variant(Variant::Secondary),
        )
        .label("Next")
        .right_icon(ARROW_RIGHT),
        Story::new(
            "with-both-icons",
            "With Both Icons",
            "Icons on both sides of the label.",
            ButtonProps::new().variant(Variant::Tertiary),
        )
        .left_icon(ARROW_LEFT)
        .right_icon(ARROW_RIGHT),
        Story::new(
            "loading-with-icons",
            "Loading With Icons",
            "While loading, the spinner replaces the left icon and the right icon is hidden.",
            ButtonProps::new().size(Size::Lg).loading(true),
        )
        .label("Uploading")
        .left_icon(ARROW_LEFT)
        .right_icon(ARROW_RIGHT),
    ]
});

/// List all built-in stories.
pub fn list_stories() -> Vec<Story> {
    BUTTON_STORIES.clone()
}

/// Get a story by ID, ignoring case.
pub fn get_story(id: &str) -> Option<Story> {
    BUTTON_STORIES
        .iter()
        .find(|story| story.id.eq_ignore_ascii_case(id.trim()))
        .cloned()
}

/// Get all story IDs.
pub fn story_ids() -> Vec<String> {
    BUTTON_STORIES.iter().map(|story| story.id.clone()).collect()
}

/// One interactive story per variant and size, labelled by size.
pub fn variant_size_matrix() -> Vec<Story> {
    Variant::ALL
        .into_iter()
        .flat_map(|variant| {
            Size::ALL.into_iter().map(move |size| {
                Story::new(
                    &format!("{}-{}", variant.as_str(), size.as_str()),
                    &format!("{} {}", variant.label(), size.label()),
                    "",
                    ButtonProps::new().variant(variant).size(size),
                )
                .label(size.label())
            })
        })
        .collect()
}

/// Kind of input used to edit one Button arg.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Control {
    Select { options: Vec<String> },
    Boolean,
    Text,
}

/// Control descriptor for one Button arg.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgType {
    pub name: String,
    pub description: String,
    pub control: Control,
    /// Default value as displayed, empty when there is none
    pub default: String,
}

impl ArgType {
    fn new(name: &str, description: &str, control: Control, default: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            control,
            default: default.to_string(),
        }
    }
}

/// Controls for every Button input.
pub fn button_arg_types() -> Vec<ArgType> {
    vec![
        ArgType::new(
            "variant",
            "Visual style family",
            Control::Select {
                options: Variant::ALL.iter().map(|v| v.as_str().to_string()).collect(),
            },
            Variant::default().as_str(),
        ),
        ArgType::new(
            "size",
            "Spacing, type scale and icon size",
            Control::Select {
                options: Size::ALL.iter().map(|s| s.as_str().to_string()).collect(),
            },
            Size::default().as_str(),
        ),
        ArgType::new("disabled", "Disable the button", Control::Boolean, "false"),
        ArgType::new(
            "isLoading",
            "Show loading spinner and disable button",
            Control::Boolean,
            "false",
        ),
        ArgType::new(
            "showAsHover",
            "Show button in permanent hover state (for docs)",
            Control::Boolean,
            "false",
        ),
        ArgType::new("leftIcon", "Icon to display on the left", Control::Text, ""),
        ArgType::new("rightIcon", "Icon to display on the right", Control::Text, ""),
        ArgType::new("className", "Extra classes, applied last", Control::Text, ""),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slot::{LeftSlot, RightSlot};
    use crate::state::RenderState;
    use std::collections::HashSet;

    #[test]
    fn test_list_stories() {
        let stories = list_stories();
        assert_eq!(stories.len(), 12);
        assert_eq!(stories[0].id, "primary");
    }

    #[test]
    fn test_story_ids_unique() {
        let ids = story_ids();
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(ids.len(), unique.len());
    }

    #[test]
    fn test_get_story() {
        let story = get_story("Loading").unwrap();
        assert_eq!(story.resolution().state, RenderState::DisabledOrLoading);
        assert!(get_story("danger").is_none());
    }

    #[test]
    fn test_loading_with_icons_story() {
        let story = get_story("loading-with-icons").unwrap();
        let resolution = story.resolution();

        assert_eq!(resolution.left_slot, LeftSlot::Spinner);
        assert_eq!(resolution.right_slot, RightSlot::Empty);
        assert!(story.to_html().contains(">Uploading</button>"));
    }

    #[test]
    fn test_hover_story() {
        let story = get_story("hover").unwrap();
        assert_eq!(story.resolution().state, RenderState::ForcedHover);
    }

    #[test]
    fn test_variant_size_matrix() {
        let matrix = variant_size_matrix();
        assert_eq!(matrix.len(), 9);
        assert_eq!(matrix[0].id, "primary-sm");
        assert_eq!(matrix[8].id, "tertiary-lg");
        assert!(matrix
            .iter()
            .all(|story| story.resolution().state == RenderState::Normal));
    }

    #[test]
    fn test_arg_types() {
        let args = button_arg_types();
        let variant = args.iter().find(|arg| arg.name == "variant").unwrap();

        assert_eq!(variant.default, "primary");
        assert_eq!(
            variant.control,
            Control::Select {
                options: vec![
                    "primary".to_string(),
                    "secondary".to_string(),
                    "tertiary".to_string()
                ]
            }
        );
        assert_eq!(args.len(), 8);
    }

    #[test]
    fn test_story_fields_match_arg_names() {
        let story = Story {
            class_name: "w-full".to_string(),
            ..get_story("loading-with-icons").unwrap()
        };
        let json = serde_json::to_value(&story).unwrap();
        let props = json["props"].as_object().unwrap();

        for arg in button_arg_types() {
            let present = props.contains_key(&arg.name) || json.get(&arg.name).is_some();
            assert!(present, "no story field for {}", arg.name);
        }
        assert_eq!(props["isLoading"], true);
        assert_eq!(props["showAsHover"], false);
    }

    #[test]
    fn test_story_json() {
        let story = get_story("with-right-icon").unwrap();
        let json = serde_json::to_value(&story).unwrap();

        assert_eq!(json["props"]["variant"], "secondary");
        assert!(json.get("rightIcon").is_some());
        assert!(json.get("leftIcon").is_none());
        assert!(json.get("className").is_none());

        let back: Story = serde_json::from_value(json).unwrap();
        assert_eq!(back, story);
    }
}
