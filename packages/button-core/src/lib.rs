//! Button Core - State resolution for the showcase Button component.
//!
//! This crate provides everything the Button needs short of a DOM:
//!
//! - **Types**: Closed `Variant` and `Size` enumerations
//! - **Tokens**: Static variant and size lookup tables
//! - **Resolution**: The pure mapping from props to render state, classes and slots
//! - **Rendering**: `<button>` markup built from a resolution
//! - **Stories**: Documented configurations shown by the showcase
//!
//! # Example
//!
//! ```rust
//! use button_core::{resolve, LeftSlot, RenderState, Size, Variant};
//!
//! let resolution = resolve(Variant::Tertiary, Size::Lg, false, true, false, true, true);
//!
//! assert_eq!(resolution.state, RenderState::DisabledOrLoading);
//! assert_eq!(resolution.left_slot, LeftSlot::Spinner);
//! assert!(resolution.right_slot.is_empty());
//! assert!(resolution.is_native_disabled);
//! ```

pub mod render;
pub mod resolver;
pub mod slot;
pub mod state;
pub mod stories;
pub mod tokens;
pub mod types;

// Re-export commonly used types
pub use types::{ApiResponse, Size, Variant};

// Re-export main functionality
pub use render::Button;
pub use resolver::{resolve, ButtonProps, Resolution};
pub use slot::{LeftSlot, RightSlot};
pub use state::RenderState;
pub use stories::{
    button_arg_types, get_story, list_stories, story_ids, variant_size_matrix, ArgType, Control,
    Story, BUTTON_STORIES,
};
pub use tokens::StyleTokenSet;

/// Error types for button-core operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown variant: {0} (expected primary, secondary or tertiary)")]
    UnknownVariant(String),

    #[error("Unknown size: {0} (expected sm, md or lg)")]
    UnknownSize(String),

    #[error("Unknown story: {0}")]
    UnknownStory(String),

    #[error("Invalid attribute name: {0:?}")]
    InvalidAttribute(String),

    #[error("Reserved attribute: {0} is set by the button itself")]
    ReservedAttribute(String),
}

/// Result type for button-core operations.
pub type Result<T> = std::result::Result<T, Error>;
