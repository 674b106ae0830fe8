// User interface components
pub mod app;
pub mod burger_view;
pub mod config;
pub mod styles;
pub mod ui_panels;
pub mod ui_text;
pub mod utils;

// Re-export main app
pub use app::BurgerBuilderApp;
pub use config::UI_CONFIG;
