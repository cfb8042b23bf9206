// CsvEdit - app/mod.rs
//
// Application layer: editing session, notifications, GUI state.
// Dependencies: core, platform.
// Must NOT depend on: ui.

pub mod notify;
pub mod session;
pub mod state;
