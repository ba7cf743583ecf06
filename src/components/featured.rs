//! Featured Section Component
//!
//! Always-visible showcase of curated items, independent of the
//! active category tab.

use leptos::prelude::*;

use crate::models::MenuItem;

/// Large showcase card for one featured item
#[component]
fn FeaturedCard(item: MenuItem) -> impl IntoView {
    let image = item.image_or_placeholder().to_string();
    let price = item.display_price();
    let name = item.name.clone();

    view! {
        <div class="featured-card">
            <div class="featured-card-image">
                <img src=image alt=name.clone() />
            </div>
            <div class="featured-card-body">
                <h3 class="featured-card-name">{name}</h3>
                <p class="featured-card-description">{item.description}</p>
                <span class="featured-card-price">{price}</span>
            </div>
        </div>
    }
}

/// Featured showcase section
#[component]
pub fn FeaturedSection(items: Vec<MenuItem>) -> impl IntoView {
    view! {
        <section class="featured-section">
            <h2>"Featured Drinks"</h2>
            <div class="featured-grid">
                <For
                    each=move || items.clone()
                    key=|item| item.name.clone()
                    children=move |item| {
                        view! { <FeaturedCard item=item /> }
                    }
                />
            </div>
        </section>
    }
}
