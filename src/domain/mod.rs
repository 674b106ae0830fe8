// Core burger types and the pure derivations over them
pub mod catalog;
pub mod order;
pub mod quantities;

pub use catalog::{Catalog, IngredientDef, IngredientVisual};
pub use order::{OrderSummary, expanded_sequence, total_price};
pub use quantities::QuantityMap;
