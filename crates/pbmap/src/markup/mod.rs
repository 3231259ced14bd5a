mod element;
mod reader;

pub use element::{escape_attribute, ElementBuilder, NO_REFERENCE};
pub use reader::AttributeReader;
