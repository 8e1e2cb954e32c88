//! `<button>` markup built from a resolution.

use crate::resolver::{ButtonProps, Resolution};
use crate::slot::{LeftSlot, RightSlot};
use crate::types::{Size, Variant};
use crate::{Error, Result};
use maud::{html, Markup, PreEscaped, Render};

/// Attributes owned by the button itself.
const RESERVED_ATTRIBUTES: [&str; 2] = ["class", "disabled"];

const SPINNER_PATH: &str = "M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z";

/// Whether `name` is a well-formed HTML attribute name.
fn is_valid_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && name.chars().all(|c| {
            !c.is_whitespace()
                && !c.is_control()
                && !matches!(c, '"' | '\'' | '<' | '>' | '/' | '=')
        })
}

/// A renderable button.
///
/// Children and icons are trusted markup; use [`Button::with_label`] for
/// plain text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Button {
    pub props: ButtonProps,
    pub children: String,
    pub left_icon: Option<String>,
    pub right_icon: Option<String>,
    /// Caller classes, appended after every resolved class
    pub class_name: String,
    attributes: Vec<(String, String)>,
}

impl Button {
    /// Create a primary, medium button around `children` markup.
    pub fn new(children: impl Into<String>) -> Self {
        Self {
            children: children.into(),
            ..Default::default()
        }
    }

    /// Create a button whose content is escaped plain text.
    pub fn with_label(label: &str) -> Self {
        Self::new(html! { (label) }.into_string())
    }

    pub fn primary(label: &str) -> Self {
        Self::with_label(label).variant(Variant::Primary)
    }

    pub fn secondary(label: &str) -> Self {
        Self::with_label(label).variant(Variant::Secondary)
    }

    pub fn tertiary(label: &str) -> Self {
        Self::with_label(label).variant(Variant::Tertiary)
    }

    pub fn props(mut self, props: ButtonProps) -> Self {
        self.props = props;
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.props.variant = variant;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.props.size = size;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.props.disabled = disabled;
        self
    }

    pub fn loading(mut self, is_loading: bool) -> Self {
        self.props.is_loading = is_loading;
        self
    }

    pub fn show_as_hover(mut self, show_as_hover: bool) -> Self {
        self.props.show_as_hover = show_as_hover;
        self
    }

    pub fn left_icon(mut self, icon: impl Into<String>) -> Self {
        self.left_icon = Some(icon.into());
        self
    }

    pub fn right_icon(mut self, icon: impl Into<String>) -> Self {
        self.right_icon = Some(icon.into());
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    /// Pass a native attribute (`type`, `aria-*`, `onclick`, ...) through unchanged.
    ///
    /// Names must be well-formed; `class` and `disabled` are derived from the
    /// props and rejected here.
    pub fn attribute(mut self, name: &str, value: impl Into<String>) -> Result<Self> {
        if !is_valid_attribute_name(name) {
            return Err(Error::InvalidAttribute(name.to_string()));
        }
        if RESERVED_ATTRIBUTES
            .iter()
            .any(|reserved| reserved.eq_ignore_ascii_case(name))
        {
            return Err(Error::ReservedAttribute(name.to_string()));
        }
        self.attributes.push((name.to_string(), value.into()));
        Ok(self)
    }

    /// Passthrough attributes in insertion order.
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn resolution(&self) -> Resolution {
        self.props
            .resolve(self.left_icon.is_some(), self.right_icon.is_some())
    }

    /// Render the element.
    pub fn to_html(&self) -> String {
        self.render().into_string()
    }

    fn left_slot(&self, resolution: &Resolution) -> Markup {
        match (
            resolution.left_slot,
            resolution.left_slot_classes(),
            &self.left_icon,
        ) {
            (LeftSlot::Spinner, Some(classes), _) => spinner(&classes),
            (LeftSlot::Icon, Some(classes), Some(icon)) => icon_wrapper(&classes, icon),
            _ => html! {},
        }
    }

    fn right_slot(&self, resolution: &Resolution) -> Markup {
        match (
            resolution.right_slot,
            resolution.right_slot_classes(),
            &self.right_icon,
        ) {
            (RightSlot::Icon, Some(classes), Some(icon)) => icon_wrapper(&classes, icon),
            _ => html! {},
        }
    }
}

impl Render for Button {
    fn render_to(&self, buffer: &mut String) {
        let resolution = self.resolution();

        // html! only takes static attribute names, so the open tag is written
        // here from validated names and escaped values.
        buffer.push_str("<button class=\"");
        resolution.class_list(&self.class_name).render_to(buffer);
        buffer.push('"');
        if resolution.is_native_disabled {
            buffer.push_str(" disabled");
        }
        for (name, value) in &self.attributes {
            buffer.push(' ');
            buffer.push_str(name);
            buffer.push_str("=\"");
            value.render_to(buffer);
            buffer.push('"');
        }
        buffer.push('>');

        html! {
            (self.left_slot(&resolution))
            (PreEscaped(self.children.as_str()))
            (self.right_slot(&resolution))
        }
        .render_to(buffer);

        buffer.push_str("</button>");
    }
}

fn spinner(classes: &str) -> Markup {
    html! {
        svg class=(classes) xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" {
            circle class="opacity-25" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4" {}
            path class="opacity-75" fill="currentColor" d=(SPINNER_PATH) {}
        }
    }
}

fn icon_wrapper(classes: &str, icon: &str) -> Markup {
    html! {
        span class=(classes) { (PreEscaped(icon)) }
    }
}
