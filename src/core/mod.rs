// CsvEdit - core/mod.rs
//
// Core business logic layer: the tabular document model and the pure
// functions that parse, edit, serialise and export it.
// Must NOT depend on: ui, platform, app.

pub mod editor;
pub mod export;
pub mod intake;
pub mod model;
pub mod parser;
pub mod serializer;
