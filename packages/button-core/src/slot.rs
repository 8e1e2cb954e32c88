//! Left and right decoration slots.

use crate::tokens::{ICON_WRAPPER_CLASSES, SPINNER_CLASSES};
use serde::{Deserialize, Serialize};

/// Occupant of the slot before the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeftSlot {
    Spinner,
    Icon,
    Empty,
}

impl LeftSlot {
    /// Spinner beats a supplied icon while loading.
    pub fn resolve(is_loading: bool, has_left_icon: bool) -> Self {
        if is_loading {
            LeftSlot::Spinner
        } else if has_left_icon {
            LeftSlot::Icon
        } else {
            LeftSlot::Empty
        }
    }

    /// Classes of the slot element, `None` when nothing renders.
    pub fn classes(&self, icon_size: &str) -> Option<String> {
        match self {
            LeftSlot::Spinner => Some(format!("{SPINNER_CLASSES} {icon_size}")),
            LeftSlot::Icon => Some(format!("{ICON_WRAPPER_CLASSES} {icon_size}")),
            LeftSlot::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, LeftSlot::Empty)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LeftSlot::Spinner => "spinner",
            LeftSlot::Icon => "icon",
            LeftSlot::Empty => "empty",
        }
    }
}

/// Occupant of the slot after the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RightSlot {
    Icon,
    Empty,
}

impl RightSlot {
    /// Loading suppresses the right icon outright.
    pub fn resolve(is_loading: bool, has_right_icon: bool) -> Self {
        if has_right_icon && !is_loading {
            RightSlot::Icon
        } else {
            RightSlot::Empty
        }
    }

    pub fn classes(&self, icon_size: &str) -> Option<String> {
        match self {
            RightSlot::Icon => Some(format!("{ICON_WRAPPER_CLASSES} {icon_size}")),
            RightSlot::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, RightSlot::Empty)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RightSlot::Icon => "icon",
            RightSlot::Empty => "empty",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_slot_priority() {
        assert_eq!(LeftSlot::resolve(true, true), LeftSlot::Spinner);
        assert_eq!(LeftSlot::resolve(true, false), LeftSlot::Spinner);
        assert_eq!(LeftSlot::resolve(false, true), LeftSlot::Icon);
        assert_eq!(LeftSlot::resolve(false, false), LeftSlot::Empty);
    }

    #[test]
    fn test_right_slot_suppressed_while_loading() {
        assert_eq!(RightSlot::resolve(true, true), RightSlot::Empty);
        assert_eq!(RightSlot::resolve(false, true), RightSlot::Icon);
        assert_eq!(RightSlot::resolve(false, false), RightSlot::Empty);
    }

    #[test]
    fn test_slot_classes() {
        assert_eq!(
            LeftSlot::Spinner.classes("w-4 h-4").as_deref(),
            Some("animate-spin w-4 h-4")
        );
        assert_eq!(
            LeftSlot::Icon.classes("w-5 h-5"),
            RightSlot::Icon.classes("w-5 h-5")
        );
        assert!(LeftSlot::Empty.classes("w-5 h-5").is_none());
        assert!(RightSlot::Empty.classes("w-5 h-5").is_none());
    }
}
