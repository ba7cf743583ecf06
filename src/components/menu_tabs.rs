//! Menu Tabs Component
//!
//! Tab bar for the three menu categories plus the active panel grid.

use leptos::prelude::*;

use crate::components::MenuCard;
use crate::menu::Menu;
use crate::models::Category;

/// Category tab bar with the active item grid
#[component]
pub fn MenuTabs(menu: Menu) -> impl IntoView {
    // Active panel, local to the tab selector
    let (active, set_active) = signal(Category::Hot);

    // Only the selected panel's items are rendered
    let panel_items = move || menu.items(active.get()).to_vec();

    view! {
        <div class="menu-tabs">
            <div class="menu-tab-bar">
                {Category::ALL.iter().map(|&category| {
                    let is_active = move || active.get() == category;
                    view! {
                        <button
                            class=move || if is_active() { "menu-tab active" } else { "menu-tab" }
                            on:click=move |_| set_active.set(category)
                        >
                            {category.label()}
                        </button>
                    }
                }).collect_view()}
            </div>

            <div class="menu-grid">
                <For
                    each=panel_items
                    key=|item| item.name.clone()
                    children=move |item| {
                        view! { <MenuCard item=item /> }
                    }
                />
            </div>
        </div>
    }
}
