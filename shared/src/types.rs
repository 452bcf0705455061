//! Common types used across the panel

use serde::{Deserialize, Serialize};

/// Value of the "Seleccione..." entry that heads every selector
pub const UNSELECTED: i64 = 0;

/// Label of the "nothing selected" selector entry
pub const UNSELECTED_LABEL: &str = "Seleccione...";

/// One entry of a dropdown selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: i64,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: i64, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }

    /// The leading "Seleccione..." entry
    pub fn unselected() -> Self {
        Self::new(UNSELECTED, UNSELECTED_LABEL)
    }
}

/// Display name of a catalog entry, `#<id>` when it has none
pub fn display_name(id: i64, name: Option<&str>) -> String {
    match name {
        Some(name) => name.to_string(),
        None => format!("#{}", id),
    }
}

/// Localized yes/no
pub fn yes_no(value: bool) -> &'static str {
    if value {
        "Sí"
    } else {
        "No"
    }
}

/// Prompt shown before soft-deleting an offer
pub const DELETE_CONFIRMATION: &str = "¿Eliminar oferta? (eliminación lógica)";
