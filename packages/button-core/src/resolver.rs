//! Button state resolution.
//!
//! [`resolve`] is a pure function of its inputs and the static token tables.
//! The same inputs always produce the same [`Resolution`].

use crate::slot::{LeftSlot, RightSlot};
use crate::state::RenderState;
use crate::tokens::LAYOUT_CLASSES;
use crate::types::{Size, Variant};
use serde::{Deserialize, Serialize};

/// Style inputs of a button. Every field has a safe default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ButtonProps {
    pub variant: Variant,
    pub size: Size,
    pub disabled: bool,
    /// Shows the spinner and disables the button
    pub is_loading: bool,
    /// Renders the hover look permanently, for documentation
    pub show_as_hover: bool,
}

impl ButtonProps {
    pub const fn new() -> Self {
        Self {
            variant: Variant::Primary,
            size: Size::Md,
            disabled: false,
            is_loading: false,
            show_as_hover: false,
        }
    }

    pub const fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub const fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub const fn loading(mut self, is_loading: bool) -> Self {
        self.is_loading = is_loading;
        self
    }

    pub const fn show_as_hover(mut self, show_as_hover: bool) -> Self {
        self.show_as_hover = show_as_hover;
        self
    }

    /// Resolve these props given which icons the caller supplied.
    pub fn resolve(&self, has_left_icon: bool, has_right_icon: bool) -> Resolution {
        resolve(
            self.variant,
            self.size,
            self.disabled,
            self.is_loading,
            self.show_as_hover,
            has_left_icon,
            has_right_icon,
        )
    }
}

/// Output of one resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Which exclusive state won
    pub state: RenderState,
    /// Variant tokens for that state
    pub state_classes: String,
    /// Padding, type scale, radius and height
    pub size_classes: &'static str,
    /// Gap between slots and label
    pub gap_classes: &'static str,
    /// Size of icons and the spinner
    pub icon_size_classes: &'static str,
    pub left_slot: LeftSlot,
    pub right_slot: RightSlot,
    /// Applied as the native `disabled` attribute
    pub is_native_disabled: bool,
}

impl Resolution {
    /// The full class attribute.
    ///
    /// Order is layout, size, gap, state, then `overrides`. Overrides come last
    /// so that they win by source order in the stylesheet cascade. Empty
    /// segments are skipped.
    pub fn class_list(&self, overrides: &str) -> String {
        [
            LAYOUT_CLASSES,
            self.size_classes,
            self.gap_classes,
            self.state_classes.as_str(),
            overrides.trim(),
        ]
        .iter()
        .filter(|segment| !segment.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
    }

    /// Classes of the left slot element, if it renders.
    pub fn left_slot_classes(&self) -> Option<String> {
        self.left_slot.classes(self.icon_size_classes)
    }

    /// Classes of the right slot element, if it renders.
    pub fn right_slot_classes(&self) -> Option<String> {
        self.right_slot.classes(self.icon_size_classes)
    }
}

/// Resolve a button's render state, classes and slots.
///
/// # Arguments
///
/// * `variant` - Style family
/// * `size` - Spacing and icon scale
/// * `disabled` - Caller-requested disabled state
/// * `is_loading` - Loading state; disables the button and shows the spinner
/// * `show_as_hover` - Static hover preview
/// * `has_left_icon` - Whether a left icon was supplied
/// * `has_right_icon` - Whether a right icon was supplied
///
/// # Example
///
/// ```rust
/// use button_core::{resolve, RenderState, Size, Variant};
///
/// let resolution = resolve(Variant::Secondary, Size::Sm, true, false, true, false, false);
///
/// assert_eq!(resolution.state, RenderState::DisabledOrLoading);
/// assert_eq!(resolution.state_classes, Variant::Secondary.tokens().disabled);
/// assert!(resolution.is_native_disabled);
/// ```
pub fn resolve(
    variant: Variant,
    size: Size,
    disabled: bool,
    is_loading: bool,
    show_as_hover: bool,
    has_left_icon: bool,
    has_right_icon: bool,
) -> Resolution {
    let state = RenderState::from_flags(disabled, is_loading, show_as_hover);

    Resolution {
        state,
        state_classes: state.classes(variant),
        size_classes: size.classes(),
        gap_classes: size.gap_classes(),
        icon_size_classes: size.icon_classes(),
        left_slot: LeftSlot::resolve(is_loading, has_left_icon),
        right_slot: RightSlot::resolve(is_loading, has_right_icon),
        is_native_disabled: state.is_native_disabled(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every input combination, 288 in total.
    fn all_inputs() -> Vec<(Variant, Size, [bool; 5])> {
        let mut inputs = Vec::new();
        for variant in Variant::ALL {
            for size in Size::ALL {
                for bits in 0u8..32 {
                    let flags = [0, 1, 2, 3, 4].map(|i| bits & (1 << i) != 0);
                    inputs.push((variant, size, flags));
                }
            }
        }
        inputs
    }

    fn run(variant: Variant, size: Size, f: [bool; 5]) -> Resolution {
        resolve(variant, size, f[0], f[1], f[2], f[3], f[4])
    }

    #[test]
    fn test_tables_complete() {
        for (variant, size, flags) in all_inputs() {
            let r = run(variant, size, flags);
            assert!(!r.state_classes.is_empty());
            assert!(!r.size_classes.is_empty());
            assert!(!r.gap_classes.is_empty());
            assert!(!r.icon_size_classes.is_empty());
        }
        assert_eq!(all_inputs().len(), 288);
    }

    #[test]
    fn test_disabled_always_wins() {
        for (variant, size, flags) in all_inputs() {
            let [disabled, loading, ..] = flags;
            if disabled || loading {
                let r = run(variant, size, flags);
                assert_eq!(r.state, RenderState::DisabledOrLoading);
                assert_eq!(r.state_classes, variant.tokens().disabled);
                assert!(r.is_native_disabled);
            }
        }
    }

    #[test]
    fn test_hover_static_exclusive() {
        for variant in Variant::ALL {
            let r = resolve(variant, Size::Md, false, false, true, false, false);
            let tokens = variant.tokens();
            assert_eq!(r.state, RenderState::ForcedHover);
            assert_eq!(r.state_classes, tokens.hover_static);
            assert_ne!(r.state_classes, format!("{} {}", tokens.base, tokens.hover));
            assert!(!r.is_native_disabled);
        }
    }

    #[test]
    fn test_loading_controls_slots() {
        for (variant, size, flags) in all_inputs() {
            let [_, loading, _, left, right] = flags;
            let r = run(variant, size, flags);
            if loading {
                assert_eq!(r.left_slot, LeftSlot::Spinner);
                assert_eq!(r.right_slot, RightSlot::Empty);
            } else {
                assert_eq!(r.left_slot == LeftSlot::Icon, left);
                assert_eq!(r.right_slot == RightSlot::Icon, right);
            }
        }
    }

    #[test]
    fn test_idempotent() {
        for (variant, size, flags) in all_inputs() {
            let first = run(variant, size, flags);
            let second = run(variant, size, flags);
            assert_eq!(first, second);
            assert_eq!(first.class_list("w-full"), second.class_list("w-full"));
        }
    }

    #[test]
    fn test_primary_md_default() {
        let r = ButtonProps::default().resolve(false, false);
        let tokens = Variant::Primary.tokens();

        assert_eq!(r.state, RenderState::Normal);
        assert_eq!(r.state_classes, format!("{} {}", tokens.base, tokens.hover));
        assert_eq!(r.size_classes, "px-md py-xs text-sm leading-6 rounded-md h-9");
        assert_eq!(r.left_slot, LeftSlot::Empty);
        assert_eq!(r.right_slot, RightSlot::Empty);
        assert!(!r.is_native_disabled);
    }

    #[test]
    fn test_secondary_sm_disabled() {
        let r = resolve(Variant::Secondary, Size::Sm, true, false, false, false, false);
        assert_eq!(r.state_classes, Variant::Secondary.tokens().disabled);
        assert!(r.is_native_disabled);
        assert_eq!(r.gap_classes, "gap-1");
        assert_eq!(r.icon_size_classes, "w-4 h-4");
    }

    #[test]
    fn test_tertiary_lg_loading_with_icons() {
        let props = ButtonProps::new()
            .variant(Variant::Tertiary)
            .size(Size::Lg)
            .loading(true);
        let r = props.resolve(true, true);

        assert_eq!(r.left_slot, LeftSlot::Spinner);
        assert_eq!(r.right_slot, RightSlot::Empty);
        assert!(r.is_native_disabled);
        assert_eq!(r.left_slot_classes().as_deref(), Some("animate-spin w-5 h-5"));
        assert!(r.right_slot_classes().is_none());
    }

    #[test]
    fn test_class_list_order() {
        let r = resolve(Variant::Primary, Size::Lg, false, false, true, false, false);
        let classes = r.class_list("w-full");

        let layout = classes.find("inline-flex").unwrap();
        let size = classes.find("px-md py-sm").unwrap();
        let gap = classes.find("gap-2").unwrap();
        let state = classes.find(Variant::Primary.tokens().hover_static).unwrap();
        let overrides = classes.rfind("w-full").unwrap();

        assert!(layout < size && size < gap && gap < state && state < overrides);
        assert!(classes.ends_with("w-full"));
    }

    #[test]
    fn test_class_list_without_overrides() {
        let r = ButtonProps::new().resolve(false, false);
        let classes = r.class_list("   ");
        assert!(!classes.ends_with(' '));
        assert!(classes.starts_with(LAYOUT_CLASSES));
    }

    #[test]
    fn test_props_deserialize_defaults() {
        let props: ButtonProps = serde_json::from_str(r#"{"variant":"secondary"}"#).unwrap();
        assert_eq!(props, ButtonProps::new().variant(Variant::Secondary));

        let props: ButtonProps =
            serde_json::from_str(r#"{"isLoading":true,"showAsHover":true}"#).unwrap();
        assert!(props.is_loading && props.show_as_hover);
        assert_eq!(props.resolve(false, false).state, RenderState::DisabledOrLoading);
    }
}
