pub mod bom;
pub mod component;

pub use bom::{Bom, BomItem, BomRegistry};
pub use component::{Component, ComponentRegistry};
