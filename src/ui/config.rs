use eframe::egui::Color32;

pub use crate::ui::ui_text::UI_TEXT;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub price: Color32,
    pub bun_fill: Color32,
    pub bun_edge: Color32,
    pub seed: Color32,
}

/// Dimensions of the burger drawing, in points.
#[derive(Clone, Copy, Default)]
pub struct StackGeometry {
    pub bun_width: f32,
    /// Fillings are drawn this much narrower than the bun on each side.
    pub filling_inset: f32,
    pub bun_top_height: f32,
    pub bun_bottom_height: f32,
    pub layer_gap: f32,
    pub seed_radius: f32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub stack: StackGeometry,
    /// Side of the ingredient swatch in the picker list.
    pub swatch_size: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,     // This sets every label globally to this color
        heading: Color32::YELLOW, // Sets every heading
        subsection_heading: Color32::ORANGE, // Sets every subsection heading
        central_panel: Color32::from_rgb(48, 40, 36),
        side_panel: Color32::from_rgb(25, 25, 25),
        price: Color32::from_rgb(130, 200, 140),
        bun_fill: Color32::from_rgb(224, 150, 70),
        bun_edge: Color32::from_rgb(170, 100, 40),
        seed: Color32::from_rgb(250, 240, 210),
    },
    stack: StackGeometry {
        bun_width: 260.0,
        filling_inset: 6.0,
        bun_top_height: 56.0,
        bun_bottom_height: 30.0,
        layer_gap: 2.0,
        seed_radius: 3.5,
    },
    swatch_size: 18.0,
};
