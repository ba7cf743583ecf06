//! Theme Controller
//!
//! Dark/light style scope synchronization on the document element.

/// Class token carried by the document element while dark mode is active
pub const DARK_CLASS: &str = "dark";

/// Flip the theme flag
pub fn toggle(current: bool) -> bool {
    !current
}

/// Synchronize the document-level style scope with the flag.
///
/// Adds the dark class token when `dark` is true, removes it otherwise.
/// No-op when no document is available.
pub fn apply(dark: bool) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        let classes = root.class_list();
        let _ = if dark {
            classes.add_1(DARK_CLASS)
        } else {
            classes.remove_1(DARK_CLASS)
        };
    }
}
