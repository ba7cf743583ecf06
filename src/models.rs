//! Menu Models
//!
//! Data structures matching the embedded menu configuration.

use serde::{Deserialize, Serialize};

use crate::menu::{CURRENCY, PLACEHOLDER_IMAGE};

/// A single purchasable menu entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl MenuItem {
    /// Image reference, or the bundled placeholder when none is set
    pub fn image_or_placeholder(&self) -> &str {
        if self.image.is_empty() {
            PLACEHOLDER_IMAGE
        } else {
            &self.image
        }
    }

    /// Price with exactly two decimals and the currency suffix, e.g. "102.00ETB"
    pub fn display_price(&self) -> String {
        format!("{:.2}{}", self.price, CURRENCY)
    }
}

/// Menu panel category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Hot,
    Cold,
    Food,
}

impl Category {
    /// All categories in tab order
    pub const ALL: [Category; 3] = [Category::Hot, Category::Cold, Category::Food];

    /// Tab label
    pub fn label(self) -> &'static str {
        match self {
            Category::Hot => "Hot Drinks",
            Category::Cold => "Cold Drinks",
            Category::Food => "Food",
        }
    }
}
