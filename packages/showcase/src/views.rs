//! Page views for the Button showcase

pub mod docs;
pub mod landing;
pub mod layout;
pub mod story;

use crate::config::ShowcaseConfig;
use crate::highlight::Highlighter;
use crate::i18n::I18n;

/// Shared inputs of every view.
pub struct ViewContext<'a> {
    pub config: &'a ShowcaseConfig,
    pub i18n: &'a I18n,
    pub highlighter: &'a Highlighter,
}
