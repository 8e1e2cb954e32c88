//! Exclusive render states.

use crate::types::Variant;
use serde::{Deserialize, Serialize};

/// The visual condition of one render.
///
/// States are listed in priority order. `from_flags` is total: every flag
/// combination maps to exactly one state, and nothing is remembered between
/// renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderState {
    /// Disabled or loading; always wins.
    DisabledOrLoading,
    /// Hover look forced on for previews.
    ForcedHover,
    /// Interactive; hover is left to the pointer.
    Normal,
}

impl RenderState {
    pub fn from_flags(disabled: bool, is_loading: bool, show_as_hover: bool) -> Self {
        if disabled || is_loading {
            RenderState::DisabledOrLoading
        } else if show_as_hover {
            RenderState::ForcedHover
        } else {
            RenderState::Normal
        }
    }

    /// State classes for `variant` in this state.
    pub fn classes(&self, variant: Variant) -> String {
        let tokens = variant.tokens();
        match self {
            RenderState::DisabledOrLoading => tokens.disabled.to_string(),
            RenderState::ForcedHover => tokens.hover_static.to_string(),
            RenderState::Normal => format!("{} {}", tokens.base, tokens.hover),
        }
    }

    /// Whether the underlying element gets the native `disabled` attribute.
    pub fn is_native_disabled(&self) -> bool {
        matches!(self, RenderState::DisabledOrLoading)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RenderState::DisabledOrLoading => "disabled-or-loading",
            RenderState::ForcedHover => "forced-hover",
            RenderState::Normal => "normal",
        }
    }
}
