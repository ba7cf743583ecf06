//! Tomoca Menu Frontend App
//!
//! Top-level component: theme flag, menu configuration, page layout.

use leptos::prelude::*;

use crate::components::{FeaturedSection, Footer, Header, MenuTabs};
use crate::menu;
use crate::theme;

#[component]
pub fn App() -> impl IntoView {
    // Immutable configuration, loaded once at startup
    let menu = menu::load();
    web_sys::console::log_1(
        &format!(
            "[APP] Loaded menu: {} hot, {} cold, {} food, {} featured",
            menu.hot_drinks.len(),
            menu.cold_drinks.len(),
            menu.food_items.len(),
            menu.featured_items.len()
        )
        .into(),
    );

    // Theme flag, owned here and passed down as value + writer
    let (dark, set_dark) = signal(false);

    // Keep the document-level style scope in sync with the flag
    Effect::new(move |_| theme::apply(dark.get()));

    let featured = menu.featured_items.clone();

    view! {
        <div class="page">
            <Header dark=dark set_dark=set_dark />

            <main class="container">
                // Hero
                <div class="hero">
                    <span class="hero-mark">"☕"</span>
                    <h1>"Modern Coffee Experience"</h1>
                    <p class="hero-tagline">
                        "Discover our carefully curated selection of premium coffees and delightful treats."
                    </p>
                </div>

                <MenuTabs menu=menu />

                <FeaturedSection items=featured />
            </main>

            <Footer />
        </div>
    }
}
