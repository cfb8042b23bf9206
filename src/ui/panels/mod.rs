// CsvEdit - ui/panels/mod.rs

pub mod about;
pub mod add_row;
pub mod drop_zone;
pub mod grid;
pub mod toasts;
