//! Menu Card Component
//!
//! Compact card for one menu item in the category grid.

use leptos::prelude::*;

use crate::models::MenuItem;

/// Compact menu item card
#[component]
pub fn MenuCard(item: MenuItem) -> impl IntoView {
    let image = item.image_or_placeholder().to_string();
    let price = item.display_price();
    let name = item.name.clone();
    let tags = item.tags.clone();

    view! {
        <div class="menu-card">
            <div class="menu-card-thumb">
                <img src=image alt=name.clone() />
            </div>
            <div class="menu-card-body">
                <div class="menu-card-top">
                    <h3 class="menu-card-name">{name}</h3>
                    <span class="price-pill">{price}</span>
                </div>
                <p class="menu-card-description">{item.description}</p>
                // Badges keep the configured tag order
                <For
                    each=move || tags.clone()
                    key=|tag| tag.clone()
                    children=move |tag| {
                        view! { <span class="tag-badge">{tag}</span> }
                    }
                />
            </div>
        </div>
    }
}
