//! Debug-build-only log switches

#[allow(dead_code)]
pub struct DebugFlags {
    /// Log loading/saving of the persisted UI state
    pub print_state_serde: bool,
    /// Log slider/checkbox interactions as they happen
    pub print_ui_interactions: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_state_serde: false,
    print_ui_interactions: false,
};
