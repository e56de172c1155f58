// Folio - core/mod.rs
//
// Core layer: section model, static content, motion curves.
// Dependencies: util (constants) and the standard library.
// Must NOT depend on: app, ui, platform.

pub mod content;
pub mod model;
pub mod motion;
