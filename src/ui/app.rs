use eframe::{Frame, egui};
use eframe::egui::{Align, CentralPanel, Context, Layout, ScrollArea, SidePanel, TopBottomPanel};

use crate::domain::{Catalog, OrderSummary, QuantityMap};
use crate::ui::burger_view::BurgerStackView;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_panels::{IngredientPickerPanel, Panel, PickerEvent};
use crate::ui::utils::{format_price, setup_custom_visuals, spaced_separator};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// The single burger-builder screen.
///
/// Owns the quantity map for its whole lifetime. Nothing is persisted: a
/// fresh screen always starts with an empty burger.
pub struct BurgerBuilderApp {
    catalog: Catalog<'static>,
    quantities: QuantityMap,
}

impl Default for BurgerBuilderApp {
    fn default() -> Self {
        Self::with_catalog(Catalog::standard())
    }
}

impl BurgerBuilderApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        setup_custom_visuals(&cc.egui_ctx);
        let app = Self::default();
        log::info!(
            "Burger builder mounted with {} ingredients",
            app.catalog.len()
        );
        app
    }

    pub fn with_catalog(catalog: Catalog<'static>) -> Self {
        Self {
            catalog,
            quantities: QuantityMap::new(),
        }
    }

    pub fn quantities(&self) -> &QuantityMap {
        &self.quantities
    }

    /// Recomputed on every call; never cached.
    pub fn summary(&self) -> OrderSummary<'static> {
        OrderSummary::derive(&self.quantities, &self.catalog)
    }

    pub(super) fn apply_picker_events(&mut self, events: Vec<PickerEvent>) {
        if events.is_empty() {
            return;
        }

        for event in &events {
            event.apply(&mut self.quantities);

            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_ui_interactions {
                log::info!(
                    "{:?} {} -> {}",
                    event.control,
                    event.ingredient,
                    self.quantities.count(event.ingredient)
                );
            }
        }

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_order_snapshot {
            match serde_json::to_string(&self.quantities) {
                Ok(json) => log::info!("Order snapshot: {}", json),
                Err(e) => log::warn!("Failed to serialize order snapshot: {}", e),
            }
        }

        log::debug!("Order now: {}", self.summary().describe());
    }

    fn render_side_panel(&mut self, ctx: &Context) {
        let side_panel_frame = egui::Frame::new()
            .fill(UI_CONFIG.colors.side_panel)
            .inner_margin(8.0);
        let events = SidePanel::left("ingredients_panel")
            .min_width(180.0)
            .resizable(false)
            .frame(side_panel_frame)
            .show(ctx, |ui| {
                IngredientPickerPanel::new(self.catalog, &self.quantities).render(ui)
            })
            .inner;

        if !events.is_empty() {
            // The picker labels were drawn with the old counts; redraw the whole pass
            ctx.request_discard("picker click");
        }

        // Mutate before anything below derives from the quantities
        self.apply_picker_events(events);
    }

    fn render_price_panel(ctx: &Context, summary: &OrderSummary<'_>) {
        TopBottomPanel::bottom("price_panel")
            .frame(egui::Frame::new().fill(UI_CONFIG.colors.central_panel).inner_margin(8.0))
            .show(ctx, |ui| {
                ui.with_layout(Layout::top_down(Align::Center), |ui| {
                    ui.label_price(format_price(summary.total_price));
                });
            });
    }

    fn render_central_panel(ctx: &Context, summary: &OrderSummary<'_>) {
        let central_panel_frame = egui::Frame::new().fill(UI_CONFIG.colors.central_panel);
        CentralPanel::default()
            .frame(central_panel_frame)
            .show(ctx, |ui| {
                ui.with_layout(Layout::top_down(Align::Center), |ui| {
                    ui.add_space(10.0);
                    ui.label_subheader(UI_TEXT.burger_heading);
                    if summary.layers.is_empty() {
                        ui.label_subdued(UI_TEXT.empty_burger_hint);
                    }
                    spaced_separator(ui);

                    ScrollArea::vertical()
                        .id_salt("burger_stack")
                        .show(ui, |ui| {
                            BurgerStackView::new(&summary.layers).show(ui);
                        });
                });
            });
    }

    /// One full frame: picker first, then the views fed from a fresh summary.
    pub fn render(&mut self, ctx: &Context) {
        self.render_side_panel(ctx);

        let summary = self.summary();
        Self::render_price_panel(ctx, &summary);
        Self::render_central_panel(ctx, &summary);
    }
}

impl eframe::App for BurgerBuilderApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_shutdown {
            log::info!(
                "Burger builder unmounted, discarding order: {}",
                self.summary().describe()
            );
        }
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        self.render(ctx);
    }
}
