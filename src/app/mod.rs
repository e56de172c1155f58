// Folio - app/mod.rs
//
// Application layer: state management.
// Dependencies: core layer.
// Must NOT depend on: ui, platform specifics.

pub mod state;
