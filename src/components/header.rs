//! Site Header Component
//!
//! Sticky header with the brand mark and the theme toggle button.

use leptos::prelude::*;

use crate::theme;

/// Site header with theme toggle
#[component]
pub fn Header(
    dark: ReadSignal<bool>,
    set_dark: WriteSignal<bool>,
) -> impl IntoView {
    // Flip the theme flag; the style scope follows via the app effect
    let toggle_theme = move |_| {
        set_dark.set(theme::toggle(dark.get()));
    };

    view! {
        <header class="site-header">
            <a class="brand" href="#">
                <span class="brand-mark">"☕"</span>
                <span class="brand-name">"TOMOCA"</span>
            </a>
            <button
                class="theme-toggle-btn"
                title=move || if dark.get() { "Switch to light mode" } else { "Switch to dark mode" }
                on:click=toggle_theme
            >
                {move || if dark.get() { "☀" } else { "🌙" }}
            </button>
        </header>
    }
}
