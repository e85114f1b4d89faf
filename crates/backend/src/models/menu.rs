//! Static menu reference data.

use pizza_stand_core::MenuItemId;
use serde::{Deserialize, Serialize};

/// An item on the static menu.
///
/// Prices are fractional bitcoin, serialized as plain JSON numbers - the
/// checkout page sums and renders them directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub title: String,
    pub image: String,
    pub price: f64,
    pub description: String,
}

impl MenuItem {
    /// Build a menu item from its parts.
    #[must_use]
    pub fn new(id: MenuItemId, title: &str, image: &str, price: f64, description: &str) -> Self {
        Self {
            id,
            title: title.to_owned(),
            image: image.to_owned(),
            price,
            description: description.to_owned(),
        }
    }
}
