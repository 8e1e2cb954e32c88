//! Core value types for the Button component.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Visual style family of the button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Primary,
    Secondary,
    Tertiary,
}

impl Variant {
    /// Every variant, in documentation order.
    pub const ALL: [Variant; 3] = [Variant::Primary, Variant::Secondary, Variant::Tertiary];

    /// Lowercase identifier used in CLI flags, config and story args.
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Primary => "primary",
            Variant::Secondary => "secondary",
            Variant::Tertiary => "tertiary",
        }
    }

    /// Human-readable name.
    pub fn label(&self) -> &'static str {
        match self {
            Variant::Primary => "Primary",
            Variant::Secondary => "Secondary",
            Variant::Tertiary => "Tertiary",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "primary" => Ok(Variant::Primary),
            "secondary" => Ok(Variant::Secondary),
            "tertiary" => Ok(Variant::Tertiary),
            _ => Err(Error::UnknownVariant(s.to_string())),
        }
    }
}

/// Button size, selecting spacing, icon-size and gap tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Sm,
    #[default]
    Md,
    Lg,
}

impl Size {
    /// Every size, smallest first.
    pub const ALL: [Size; 3] = [Size::Sm, Size::Md, Size::Lg];

    pub fn as_str(&self) -> &'static str {
        match self {
            Size::Sm => "sm",
            Size::Md => "md",
            Size::Lg => "lg",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Size::Sm => "Small",
            Size::Md => "Medium",
            Size::Lg => "Large",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Size {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "sm" => Ok(Size::Sm),
            "md" => Ok(Size::Md),
            "lg" => Ok(Size::Lg),
            _ => Err(Error::UnknownSize(s.to_string())),
        }
    }
}

/// API response wrapper for CLI output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }

    /// Create an error response.
    pub fn err(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    /// Pretty-printed JSON for stdout.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(Variant::default(), Variant::Primary);
        assert_eq!(Size::default(), Size::Md);
    }

    #[test]
    fn test_variant_from_str() {
        assert_eq!("secondary".parse::<Variant>().unwrap(), Variant::Secondary);
        assert_eq!(" Tertiary ".parse::<Variant>().unwrap(), Variant::Tertiary);

        let err = "danger".parse::<Variant>();
        assert!(matches!(err, Err(Error::UnknownVariant(ref v)) if v == "danger"));
    }

    #[test]
    fn test_size_from_str() {
        for size in Size::ALL {
            assert_eq!(size.as_str().parse::<Size>().unwrap(), size);
        }
        assert!(matches!("xl".parse::<Size>(), Err(Error::UnknownSize(_))));
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Variant::Tertiary).unwrap(), "\"tertiary\"");
        assert_eq!(serde_json::from_str::<Size>("\"lg\"").unwrap(), Size::Lg);
    }

    #[test]
    fn test_api_response() {
        let response: ApiResponse<String> = ApiResponse::ok("test".to_string());
        assert!(response.ok);
        assert_eq!(response.data, Some("test".to_string()));

        let err_response: ApiResponse<String> = ApiResponse::err("error");
        assert!(!err_response.ok);
        assert_eq!(err_response.error, Some("error".to_string()));

        let json = err_response.to_json_pretty().unwrap();
        assert!(!json.contains("\"data\""));
    }
}
