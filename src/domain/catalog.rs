//! The fixed list of burger ingredients.

use eframe::egui::Color32;

/// How an ingredient looks, both as a picker swatch and as a stack layer.
/// Treated as an opaque asset by everything outside the view code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IngredientVisual {
    pub fill: Color32,
    pub edge: Color32,
    /// Height of one layer in the burger stack, in points.
    pub thickness: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IngredientDef {
    /// Unique identifier, also shown as the label.
    pub name: &'static str,
    pub unit_price: u64,
    pub visual: IngredientVisual,
}

impl IngredientDef {
    pub const fn new(name: &'static str, unit_price: u64, visual: IngredientVisual) -> Self {
        Self {
            name,
            unit_price,
            visual,
        }
    }
}

const STANDARD_INGREDIENTS: &[IngredientDef] = &[
    IngredientDef::new(
        "Meat",
        80,
        IngredientVisual {
            fill: Color32::from_rgb(126, 58, 28),
            edge: Color32::from_rgb(84, 36, 16),
            thickness: 22.0,
        },
    ),
    IngredientDef::new(
        "Cheese",
        50,
        IngredientVisual {
            fill: Color32::from_rgb(246, 196, 46),
            edge: Color32::from_rgb(214, 160, 20),
            thickness: 8.0,
        },
    ),
    IngredientDef::new(
        "Salad",
        10,
        IngredientVisual {
            fill: Color32::from_rgb(112, 190, 64),
            edge: Color32::from_rgb(70, 140, 36),
            thickness: 10.0,
        },
    ),
    IngredientDef::new(
        "Bacon",
        60,
        IngredientVisual {
            fill: Color32::from_rgb(196, 72, 60),
            edge: Color32::from_rgb(240, 200, 180),
            thickness: 9.0,
        },
    ),
];

/// Ordered, read-only ingredient catalog.
#[derive(Debug, Clone, Copy)]
pub struct Catalog<'a> {
    ingredients: &'a [IngredientDef],
}

impl<'a> Catalog<'a> {
    pub const fn new(ingredients: &'a [IngredientDef]) -> Self {
        Self { ingredients }
    }

    pub fn lookup(&self, name: &str) -> Option<&'a IngredientDef> {
        self.ingredients.iter().find(|ingredient| ingredient.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'a, IngredientDef> {
        self.ingredients.iter()
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }
}

impl Catalog<'static> {
    /// Meat, Cheese, Salad, Bacon - in that order.
    pub const fn standard() -> Self {
        Self::new(STANDARD_INGREDIENTS)
    }
}

impl Default for Catalog<'static> {
    fn default() -> Self {
        Self::standard()
    }
}
