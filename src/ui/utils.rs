use eframe::egui::{Context, Ui, Visuals};

use crate::config::PRICING;
use crate::ui::config::{UI_CONFIG, UI_TEXT};

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();

    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;

    // Make the widgets stand out a bit more
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;

    ctx.set_visuals(visuals);
}

/// Creates a separator with standard spacing
pub fn spaced_separator(ui: &mut Ui) {
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(10.0);
}

/// "Price: 240 сом"
pub fn format_price(total: u64) -> String {
    format!(
        "{}: {} {}",
        UI_TEXT.price_label, total, PRICING.currency_suffix
    )
}

/// "Meat x2"
pub fn format_count(name: &str, count: u32) -> String {
    format!("{} {}{}", name, UI_TEXT.count_prefix, count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_has_currency_suffix() {
        assert_eq!(format_price(30), "Price: 30 сом");
        assert_eq!(format_price(240), "Price: 240 сом");
    }

    #[test]
    fn count_label() {
        assert_eq!(format_count("Meat", 0), "Meat x0");
        assert_eq!(format_count("Bacon", 12), "Bacon x12");
    }
}
