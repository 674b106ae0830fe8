//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds remain quiet. The UI layer further gates every one of them behind
//! `cfg(debug_assertions)`.

pub struct DebugFlags {
    /// Emit UI interaction logs (each add / remove click).
    pub print_ui_interactions: bool,
    /// Emit the quantity map as JSON after every change.
    pub print_order_snapshot: bool,
    /// Emit shutdown app messages.
    pub print_shutdown: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_ui_interactions: true,
    print_order_snapshot: false,
    print_shutdown: false,
};
