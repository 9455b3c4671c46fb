//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so debug
//! builds stay readable. All of these are further gated by `cfg(debug_assertions)`.

pub struct DebugFlags {
    /// Emit the request URL and per-row decoding details for the chart API.
    pub print_fetch_details: bool,
    /// Emit every crossover as it is detected while building the frame.
    pub print_crossovers: bool,
    /// Emit viewport open/close events from the chart windows.
    pub print_ui_interactions: bool,
    /// Emit shutdown app messages.
    pub print_shutdown: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_fetch_details: false,
    print_crossovers: false,
    print_ui_interactions: true,
    print_shutdown: false,
};
