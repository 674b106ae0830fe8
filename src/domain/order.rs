//! Values derived from the quantity map and the catalog.
//!
//! Nothing here is stored between frames: the screen rebuilds an
//! [`OrderSummary`] from its [`QuantityMap`] every time it renders, so the
//! stack and the price can never disagree with the counts.

use itertools::Itertools;

use crate::config::PRICING;
use crate::domain::catalog::{Catalog, IngredientDef};
use crate::domain::quantities::QuantityMap;

/// Every picked ingredient instance, grouped in catalog order.
///
/// Click order does not matter: two Cheese and one Meat always stack as
/// Meat, Cheese, Cheese. Names missing from the catalog are skipped.
pub fn expanded_sequence<'a>(
    quantities: &QuantityMap,
    catalog: &Catalog<'a>,
) -> Vec<&'a IngredientDef> {
    catalog
        .iter()
        .flat_map(|ingredient| {
            std::iter::repeat_n(ingredient, quantities.count(ingredient.name) as usize)
        })
        .collect()
}

/// Base price plus `unit_price * count` for each entry. Unknown names add nothing.
pub fn total_price(quantities: &QuantityMap, catalog: &Catalog<'_>) -> u64 {
    quantities
        .iter()
        .filter_map(|(name, count)| {
            catalog
                .lookup(name)
                .map(|ingredient| ingredient.unit_price.saturating_mul(u64::from(count)))
        })
        .fold(PRICING.base_price, |total, line| total.saturating_add(line))
}

/// Both derivations for one frame, handed to the read-only views.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummary<'a> {
    pub layers: Vec<&'a IngredientDef>,
    pub total_price: u64,
}

impl<'a> OrderSummary<'a> {
    pub fn derive(quantities: &QuantityMap, catalog: &Catalog<'a>) -> Self {
        Self {
            layers: expanded_sequence(quantities, catalog),
            total_price: total_price(quantities, catalog),
        }
    }

    /// Short text like "Meat x2, Cheese x1" for logs.
    pub fn describe(&self) -> String {
        if self.layers.is_empty() {
            return "plain bun".to_string();
        }
        self.layers
            .iter()
            .chunk_by(|ingredient| ingredient.name)
            .into_iter()
            .map(|(name, group)| format!("{} x{}", name, group.count()))
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::IngredientVisual;
    use eframe::egui::Color32;

    fn names(layers: &[&IngredientDef]) -> Vec<&'static str> {
        layers.iter().map(|ingredient| ingredient.name).collect()
    }

    #[test]
    fn empty_order_costs_base_price() {
        let quantities = QuantityMap::new();
        let catalog = Catalog::standard();
        assert_eq!(total_price(&quantities, &catalog), 30);
        assert!(expanded_sequence(&quantities, &catalog).is_empty());
    }

    #[test]
    fn one_meat() {
        let mut quantities = QuantityMap::new();
        quantities.increment("Meat");
        assert_eq!(total_price(&quantities, &Catalog::standard()), 110);
    }

    #[test]
    fn two_meat_one_cheese() {
        let mut quantities = QuantityMap::new();
        quantities.increment("Meat");
        quantities.increment("Cheese");
        quantities.increment("Meat");
        assert_eq!(total_price(&quantities, &Catalog::standard()), 240);
    }

    #[test]
    fn stack_follows_catalog_order_not_click_order() {
        let mut quantities = QuantityMap::new();
        quantities.increment("Cheese");
        quantities.increment("Meat");
        let layers = expanded_sequence(&quantities, &Catalog::standard());
        assert_eq!(names(&layers), vec!["Meat", "Cheese"]);
    }

    #[test]
    fn repeated_ingredients_are_consecutive() {
        let mut quantities = QuantityMap::new();
        for name in ["Bacon", "Salad", "Bacon", "Meat", "Salad", "Bacon"] {
            quantities.increment(name);
        }
        let layers = expanded_sequence(&quantities, &Catalog::standard());
        assert_eq!(
            names(&layers),
            vec!["Meat", "Salad", "Salad", "Bacon", "Bacon", "Bacon"]
        );
    }

    #[test]
    fn unknown_names_are_skipped_everywhere() {
        let mut quantities = QuantityMap::new();
        quantities.increment("Pickles");
        quantities.increment("Salad");
        let catalog = Catalog::standard();

        assert_eq!(names(&expanded_sequence(&quantities, &catalog)), vec!["Salad"]);
        assert_eq!(total_price(&quantities, &catalog), 40);
    }

    #[test]
    fn sequence_length_matches_known_counts() {
        let mut quantities = QuantityMap::new();
        let catalog = Catalog::standard();
        let clicks = ["Meat", "Onion", "Cheese", "Cheese", "Bacon", "Onion", "Salad"];
        for name in clicks {
            quantities.increment(name);
            let layers = expanded_sequence(&quantities, &catalog);
            assert_eq!(layers.len() as u64, quantities.total_count_known(&catalog));
        }
        quantities.decrement("Cheese");
        let layers = expanded_sequence(&quantities, &catalog);
        assert_eq!(layers.len() as u64, quantities.total_count_known(&catalog));
        assert_eq!(layers.len(), 4);
    }

    #[test]
    fn works_with_any_catalog() {
        const VISUAL: IngredientVisual = IngredientVisual {
            fill: Color32::WHITE,
            edge: Color32::BLACK,
            thickness: 4.0,
        };
        const SMALL: &[IngredientDef] = &[
            IngredientDef::new("Egg", 25, VISUAL),
            IngredientDef::new("Onion", 5, VISUAL),
        ];
        let catalog = Catalog::new(SMALL);

        let mut quantities = QuantityMap::new();
        quantities.increment("Onion");
        quantities.increment("Meat");
        quantities.increment("Egg");

        let summary = OrderSummary::derive(&quantities, &catalog);
        assert_eq!(names(&summary.layers), vec!["Egg", "Onion"]);
        assert_eq!(summary.total_price, 30 + 25 + 5);
    }

    #[test]
    fn describe_groups_layers() {
        let mut quantities = QuantityMap::new();
        let catalog = Catalog::standard();
        assert_eq!(OrderSummary::derive(&quantities, &catalog).describe(), "plain bun");

        quantities.increment("Salad");
        quantities.increment("Meat");
        quantities.increment("Meat");
        assert_eq!(
            OrderSummary::derive(&quantities, &catalog).describe(),
            "Meat x2, Salad x1"
        );
    }
}
