//! Menu Configuration
//!
//! The four menu sections as immutable configuration, embedded at
//! compile time and parsed once at startup.

use serde::{Deserialize, Serialize};

use crate::models::{Category, MenuItem};

/// Bundled fallback for items without an image reference
pub const PLACEHOLDER_IMAGE: &str = "public/placeholder.svg";

/// Currency suffix appended to every displayed price
pub const CURRENCY: &str = "ETB";

static MENU_JSON: &str = include_str!("../menu.json");

/// The full menu: three tab sections plus the featured showcase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Menu {
    pub hot_drinks: Vec<MenuItem>,
    pub cold_drinks: Vec<MenuItem>,
    pub food_items: Vec<MenuItem>,
    pub featured_items: Vec<MenuItem>,
}

impl Menu {
    /// Items shown in one tab panel
    pub fn items(&self, category: Category) -> &[MenuItem] {
        match category {
            Category::Hot => &self.hot_drinks,
            Category::Cold => &self.cold_drinks,
            Category::Food => &self.food_items,
        }
    }
}

/// Parse the embedded menu configuration
pub fn load() -> Menu {
    serde_json::from_str(MENU_JSON).expect("embedded menu.json should be valid")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn embedded_menu_parses_with_expected_section_sizes() {
        let menu = load();
        assert_eq!(menu.hot_drinks.len(), 7);
        assert_eq!(menu.cold_drinks.len(), 6);
        assert_eq!(menu.food_items.len(), 6);
        assert_eq!(menu.featured_items.len(), 4);
    }

    #[test]
    fn item_names_are_unique_within_each_section() {
        let menu = load();
        for category in Category::ALL {
            let items = menu.items(category);
            let names: HashSet<&str> = items.iter().map(|i| i.name.as_str()).collect();
            assert_eq!(names.len(), items.len());
        }
        let featured: HashSet<&str> =
            menu.featured_items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(featured.len(), menu.featured_items.len());
    }

    #[test]
    fn prices_are_non_negative() {
        let menu = load();
        let all = menu
            .hot_drinks
            .iter()
            .chain(&menu.cold_drinks)
            .chain(&menu.food_items)
            .chain(&menu.featured_items);
        for item in all {
            assert!(item.price >= 0.0, "{} has a negative price", item.name);
        }
    }

    #[test]
    fn each_category_maps_to_its_own_section() {
        let menu = load();
        assert_eq!(menu.items(Category::Hot), &menu.hot_drinks[..]);
        assert_eq!(menu.items(Category::Cold), &menu.cold_drinks[..]);
        assert_eq!(menu.items(Category::Food), &menu.food_items[..]);
    }

    #[test]
    fn featured_items_are_not_reachable_through_any_category() {
        let menu = load();
        for category in Category::ALL {
            for item in menu.items(category) {
                assert!(menu.featured_items.iter().all(|f| f.name != item.name));
            }
        }
    }

    #[test]
    fn avocado_toast_tags_keep_their_order() {
        let menu = load();
        let toast = menu
            .food_items
            .iter()
            .find(|i| i.name == "Avocado Toast")
            .unwrap();
        assert_eq!(toast.tags, ["Vegetarian", "Breakfast"]);
    }

    #[test]
    fn placeholder_items_fall_back_to_the_bundled_reference() {
        let menu = load();
        let iced_latte = menu
            .cold_drinks
            .iter()
            .find(|i| i.name == "Iced Latte")
            .unwrap();
        assert_eq!(iced_latte.image_or_placeholder(), PLACEHOLDER_IMAGE);

        let espresso = menu
            .hot_drinks
            .iter()
            .find(|i| i.name == "Classic Espresso")
            .unwrap();
        assert_eq!(espresso.image_or_placeholder(), "public/cappuccino.jpg");
    }
}
