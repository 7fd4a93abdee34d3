/// Presentation layer: everything that touches egui.  The analysis core
/// hands over plain data; nothing here computes.

pub mod panels;
pub mod plot;
pub mod table;
