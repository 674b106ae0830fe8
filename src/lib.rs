// Core modules
pub mod config;
pub mod domain;
pub mod ui;

// Re-export commonly used types
pub use domain::{Catalog, IngredientDef, OrderSummary, QuantityMap, expanded_sequence, total_price};
pub use ui::BurgerBuilderApp;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(long, short, default_value_t = false)]
    pub verbose: bool,
}

/// Mounts the burger builder screen.
/// This is the public API for both the WASM and the native entry points.
pub fn run_app(cc: &eframe::CreationContext) -> Box<dyn eframe::App> {
    Box::new(ui::BurgerBuilderApp::new(cc))
}
