use eframe::egui::{
    CornerRadius, Id, Painter, Pos2, Rect, Response, Sense, Stroke, StrokeKind, Ui, pos2, vec2,
};

use crate::domain::IngredientDef;
use crate::ui::config::UI_CONFIG;

/// Draws the burger: top bun, one layer per picked ingredient, bottom bun.
/// Purely visual; it never changes any state.
pub struct BurgerStackView<'a> {
    layers: &'a [&'a IngredientDef],
}

impl<'a> BurgerStackView<'a> {
    pub fn new(layers: &'a [&'a IngredientDef]) -> Self {
        Self { layers }
    }

    /// Total drawn height for the current layers.
    pub fn height(&self) -> f32 {
        let stack = &UI_CONFIG.stack;
        let fillings: f32 = self
            .layers
            .iter()
            .map(|ingredient| ingredient.visual.thickness + stack.layer_gap)
            .sum();
        stack.bun_top_height + stack.layer_gap + fillings + stack.bun_bottom_height
    }

    pub fn show(&self, ui: &mut Ui) -> Response {
        let stack = &UI_CONFIG.stack;
        let (response, painter) =
            ui.allocate_painter(vec2(stack.bun_width, self.height()), Sense::hover());
        let left = response.rect.left();
        let mut y = response.rect.top();

        let top = Rect::from_min_size(pos2(left, y), vec2(stack.bun_width, stack.bun_top_height));
        paint_top_bun(&painter, top);
        y = top.bottom() + stack.layer_gap;

        for (index, ingredient) in self.layers.iter().enumerate() {
            let layer = Rect::from_min_size(
                pos2(left + stack.filling_inset, y),
                vec2(
                    stack.bun_width - 2.0 * stack.filling_inset,
                    ingredient.visual.thickness,
                ),
            );
            paint_filling(&painter, layer, ingredient);
            // Each layer answers to its own name on hover
            ui.interact(layer, Id::new(("burger_layer", index)), Sense::hover())
                .on_hover_text(ingredient.name);
            y = layer.bottom() + stack.layer_gap;
        }

        let bottom = Rect::from_min_size(
            pos2(left, y),
            vec2(stack.bun_width, stack.bun_bottom_height),
        );
        paint_bottom_bun(&painter, bottom);

        response
    }
}

fn bun_stroke() -> Stroke {
    Stroke::new(1.5, UI_CONFIG.colors.bun_edge)
}

fn paint_top_bun(painter: &Painter, rect: Rect) {
    let dome = CornerRadius {
        nw: 120,
        ne: 120,
        sw: 6,
        se: 6,
    };
    painter.rect(
        rect,
        dome,
        UI_CONFIG.colors.bun_fill,
        bun_stroke(),
        StrokeKind::Inside,
    );

    // Two seeds on the crown
    let radius = UI_CONFIG.stack.seed_radius;
    let seeds: [Pos2; 2] = [
        rect.center() + vec2(-rect.width() * 0.18, -rect.height() * 0.12),
        rect.center() + vec2(rect.width() * 0.14, -rect.height() * 0.22),
    ];
    for seed in seeds {
        painter.rect_filled(
            Rect::from_center_size(seed, vec2(radius * 3.0, radius * 1.6)),
            CornerRadius::same(4),
            UI_CONFIG.colors.seed,
        );
    }
}

fn paint_filling(painter: &Painter, rect: Rect, ingredient: &IngredientDef) {
    painter.rect(
        rect,
        CornerRadius::same(4),
        ingredient.visual.fill,
        Stroke::new(1.0, ingredient.visual.edge),
        StrokeKind::Inside,
    );
}

fn paint_bottom_bun(painter: &Painter, rect: Rect) {
    let base = CornerRadius {
        nw: 4,
        ne: 4,
        sw: 14,
        se: 14,
    };
    painter.rect(
        rect,
        base,
        UI_CONFIG.colors.bun_fill,
        bun_stroke(),
        StrokeKind::Inside,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Catalog, QuantityMap, expanded_sequence};

    #[test]
    fn empty_burger_is_just_the_buns() {
        let stack = &UI_CONFIG.stack;
        let view = BurgerStackView::new(&[]);
        assert_eq!(
            view.height(),
            stack.bun_top_height + stack.layer_gap + stack.bun_bottom_height
        );
    }

    #[test]
    fn each_layer_adds_its_thickness() {
        let mut quantities = QuantityMap::new();
        quantities.increment("Meat");
        quantities.increment("Meat");
        quantities.increment("Salad");
        let catalog = Catalog::standard();
        let layers = expanded_sequence(&quantities, &catalog);

        let empty = BurgerStackView::new(&[]).height();
        let full = BurgerStackView::new(&layers).height();
        let meat = catalog.lookup("Meat").map(|i| i.visual.thickness).unwrap_or_default();
        let salad = catalog.lookup("Salad").map(|i| i.visual.thickness).unwrap_or_default();
        let gaps = 3.0 * UI_CONFIG.stack.layer_gap;

        assert!((full - empty - (2.0 * meat + salad + gaps)).abs() < 1e-3);
    }
}
