use eframe::egui::{CornerRadius, Sense, Ui, vec2};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::domain::{Catalog, IngredientDef, QuantityMap};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::utils::format_count;

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

/// The two buttons next to every ingredient. Display gives the button caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum QuantityControl {
    #[strum(serialize = "+")]
    Add,
    #[strum(serialize = "-")]
    Remove,
}

impl QuantityControl {
    fn hover_text(self) -> &'static str {
        match self {
            QuantityControl::Add => UI_TEXT.add_hover,
            QuantityControl::Remove => UI_TEXT.remove_hover,
        }
    }
}

/// A click on one of the picker controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerEvent {
    pub ingredient: &'static str,
    pub control: QuantityControl,
}

impl PickerEvent {
    /// The only way picker clicks reach the quantity map.
    pub fn apply(&self, quantities: &mut QuantityMap) {
        match self.control {
            QuantityControl::Add => quantities.increment(self.ingredient),
            QuantityControl::Remove => quantities.decrement(self.ingredient),
        }
    }
}

/// Lists every catalog ingredient with its count and +/- controls.
/// Reads the quantities only; clicks come back as [`PickerEvent`]s.
pub struct IngredientPickerPanel<'a> {
    catalog: Catalog<'static>,
    quantities: &'a QuantityMap,
}

impl<'a> IngredientPickerPanel<'a> {
    pub fn new(catalog: Catalog<'static>, quantities: &'a QuantityMap) -> Self {
        Self {
            catalog,
            quantities,
        }
    }

    fn render_item(&self, ui: &mut Ui, ingredient: &'static IngredientDef) -> Option<PickerEvent> {
        let mut clicked = None;

        ui.horizontal(|ui| {
            let (rect, response) = ui.allocate_exact_size(
                vec2(UI_CONFIG.swatch_size, UI_CONFIG.swatch_size),
                Sense::hover(),
            );
            ui.painter()
                .rect_filled(rect, CornerRadius::same(3), ingredient.visual.fill);
            response.on_hover_text(ingredient.name);

            ui.label(format_count(
                ingredient.name,
                self.quantities.count(ingredient.name),
            ));

            for control in QuantityControl::iter() {
                if ui
                    .button(control.to_string())
                    .on_hover_text(control.hover_text())
                    .clicked()
                {
                    clicked = Some(PickerEvent {
                        ingredient: ingredient.name,
                        control,
                    });
                }
            }
        });

        clicked
    }
}

impl<'a> Panel for IngredientPickerPanel<'a> {
    type Event = PickerEvent;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        ui.add_space(10.0);
        ui.label_header(UI_TEXT.ingredients_heading);
        ui.add_space(5.0);

        self.catalog
            .iter()
            .filter_map(|ingredient| self.render_item(ui, ingredient))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_remove_events_update_one_ingredient() {
        let mut quantities = QuantityMap::new();
        let add = PickerEvent {
            ingredient: "Cheese",
            control: QuantityControl::Add,
        };
        let remove = PickerEvent {
            ingredient: "Cheese",
            control: QuantityControl::Remove,
        };

        add.apply(&mut quantities);
        add.apply(&mut quantities);
        remove.apply(&mut quantities);
        assert_eq!(quantities.count("Cheese"), 1);
        assert_eq!(quantities.count("Meat"), 0);

        remove.apply(&mut quantities);
        remove.apply(&mut quantities);
        assert_eq!(quantities.count("Cheese"), 0);
    }

    #[test]
    fn control_captions() {
        let captions: Vec<String> = QuantityControl::iter().map(|c| c.to_string()).collect();
        assert_eq!(captions, vec!["+", "-"]);
    }
}
