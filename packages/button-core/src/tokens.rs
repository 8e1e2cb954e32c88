//! Static style-token tables.
//!
//! The class strings are opaque identifiers defined by the design-token
//! stylesheet. Every table is an exhaustive `match`, so adding a variant or a
//! size without its tokens does not compile.

use crate::types::{Size, Variant};
use serde::Serialize;

/// Layout classes shared by every button.
pub const LAYOUT_CLASSES: &str = "inline-flex items-center justify-center font-regular border";

/// Wrapper classes for a caller-supplied icon, before the icon size.
pub const ICON_WRAPPER_CLASSES: &str = "inline-flex shrink-0";

/// Spinner animation class, before the icon size.
pub const SPINNER_CLASSES: &str = "animate-spin";

/// Class strings for one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StyleTokenSet {
    /// Resting look
    pub base: &'static str,
    /// `hover:` pseudo-class look, applied by the browser on pointer hover
    pub hover: &'static str,
    /// Hover look applied statically, for previews
    pub hover_static: &'static str,
    /// Disabled and loading look
    pub disabled: &'static str,
}

const PRIMARY: StyleTokenSet = StyleTokenSet {
    base: "bg-button-primary-fill text-button-primary-text border border-button-primary-stroke",
    hover: "hover:bg-button-primary-fill-hover hover:border-button-primary-stroke-hover",
    hover_static:
        "bg-button-primary-fill-hover border-button-primary-stroke-hover text-button-primary-text",
    disabled: "bg-button-primary-fill-disabled border-button-primary-stroke-disabled text-button-primary-text cursor-not-allowed",
};

const SECONDARY: StyleTokenSet = StyleTokenSet {
    base: "bg-button-secondary-fill text-button-secondary-text border border-button-secondary-stroke",
    hover: "hover:bg-button-secondary-fill-hover hover:border-button-secondary-stroke-hover",
    hover_static: "bg-button-secondary-fill-hover border-button-secondary-stroke-hover text-button-secondary-text",
    disabled: "bg-button-secondary-fill-disabled border-button-secondary-stroke-disabled text-button-secondary-text-disabled cursor-not-allowed",
};

const TERTIARY: StyleTokenSet = StyleTokenSet {
    base: "bg-button-tertiary-fill text-button-tertiary-text border border-button-tertiary-stroke",
    hover: "hover:text-button-tertiary-text-hover border border-button-tertiary-stroke",
    hover_static: "text-button-tertiary-text-hover border border-button-tertiary-stroke",
    disabled: "text-button-tertiary-text-disabled cursor-not-allowed border border-button-tertiary-stroke",
};

impl Variant {
    /// Style tokens for this variant.
    pub fn tokens(&self) -> &'static StyleTokenSet {
        match self {
            Variant::Primary => &PRIMARY,
            Variant::Secondary => &SECONDARY,
            Variant::Tertiary => &TERTIARY,
        }
    }
}

impl Size {
    /// Padding, type scale, line height, radius and height.
    pub fn classes(&self) -> &'static str {
        match self {
            Size::Sm => "px-sm py-xs text-xs leading-5 rounded-sm h-8",
            Size::Md => "px-md py-xs text-sm leading-6 rounded-md h-9",
            Size::Lg => "px-md py-sm text-base leading-7 rounded-md h-11",
        }
    }

    /// Pixel size of icons and the spinner.
    pub fn icon_classes(&self) -> &'static str {
        match self {
            Size::Sm => "w-4 h-4",
            Size::Md | Size::Lg => "w-5 h-5",
        }
    }

    /// Gap between icons and the label.
    pub fn gap_classes(&self) -> &'static str {
        match self {
            Size::Sm => "gap-1",
            Size::Md => "gap-1.5",
            Size::Lg => "gap-2",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_variant_has_tokens() {
        for variant in Variant::ALL {
            let tokens = variant.tokens();
            assert!(!tokens.base.is_empty());
            assert!(!tokens.hover.is_empty());
            assert!(!tokens.hover_static.is_empty());
            assert!(!tokens.disabled.is_empty());
        }
    }

    #[test]
    fn test_tokens_are_variant_specific() {
        for variant in Variant::ALL {
            let tokens = variant.tokens();
            let needle = format!("button-{}-", variant.as_str());
            assert!(tokens.base.contains(&needle));
            assert!(tokens.disabled.contains(&needle));
            assert!(tokens.disabled.contains("cursor-not-allowed"));
        }
    }

    #[test]
    fn test_hover_tokens_use_pseudo_class() {
        assert!(Variant::Primary
            .tokens()
            .hover
            .split_whitespace()
            .all(|class| class.starts_with("hover:")));
        assert!(!Variant::Primary.tokens().hover_static.contains("hover:"));
    }

    #[test]
    fn test_every_size_has_tokens() {
        for size in Size::ALL {
            assert!(!size.classes().is_empty());
            assert!(!size.icon_classes().is_empty());
            assert!(size.gap_classes().starts_with("gap-"));
        }
    }

    #[test]
    fn test_size_heights() {
        assert!(Size::Sm.classes().ends_with("h-8"));
        assert!(Size::Md.classes().ends_with("h-9"));
        assert!(Size::Lg.classes().ends_with("h-11"));
        assert_eq!(Size::Md.icon_classes(), Size::Lg.icon_classes());
    }
}
