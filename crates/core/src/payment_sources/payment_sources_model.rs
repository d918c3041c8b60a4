//! Payment source domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::constants::PAYMENT_SOURCE_COLORS;
use crate::{Error, Result};

/// A named card or account expenses can be tagged with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSource {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub color: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPaymentSource {
    pub name: String,
    pub color: String,
}

impl NewPaymentSource {
    pub fn normalized(self) -> Result<Self> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(Error::invalid("Source name is required."));
        }
        let color = self.color.trim().to_uppercase();
        if !PAYMENT_SOURCE_COLORS.contains(&color.as_str()) {
            return Err(Error::invalid("Invalid color."));
        }
        Ok(Self { name, color })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_accepts_palette_colors() {
        let source = NewPaymentSource {
            name: " Amex ".into(),
            color: "#8b5cf6".into(),
        }
        .normalized()
        .unwrap();
        assert_eq!(source.name, "Amex");
        assert_eq!(source.color, "#8B5CF6");
    }

    #[test]
    fn test_normalized_rejects_unknown_color_and_blank_name() {
        let err = NewPaymentSource {
            name: "Amex".into(),
            color: "#000000".into(),
        }
        .normalized()
        .unwrap_err();
        assert_eq!(err.to_string(), "Invalid color.");

        let err = NewPaymentSource {
            name: "  ".into(),
            color: "#8B5CF6".into(),
        }
        .normalized()
        .unwrap_err();
        assert_eq!(err.to_string(), "Source name is required.");
    }
}
