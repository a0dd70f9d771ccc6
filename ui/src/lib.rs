//! Shared UI crate for Modelbench. State, chart logic and every view live
//! here; the platform crates only launch it.

pub mod compare;
pub mod core;
pub mod i18n;
pub mod results;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;
}

mod theme;
pub use theme::{Theme, THEME_CSS_INLINE};

#[cfg(test)]
mod tests {
    mod i18n_completeness;
}
