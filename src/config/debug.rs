//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; they only take effect in builds with
//! `debug_assertions` because every call site is gated.

pub struct DebugFlags {
    /// Emit UI interaction logs (e.g., date-mode toggling, manual actions).
    pub print_ui_interactions: bool,
    /// Emit per-request fetch submissions, completions, and timings.
    pub print_fetch_progress: bool,
    /// Emit details of UI state serialization/deserialization.
    pub print_state_serde: bool,
    /// Emit shutdown app messages.
    pub print_shutdown: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_ui_interactions: true,
    print_fetch_progress: true,
    print_state_serde: false,
    print_shutdown: false,
};
