//! Editor panel models.
//!
//! Panels render outside the core; these modules compute what they show
//! and the editor turns their interactions into commands.

mod hierarchy;
mod inspector;

pub use hierarchy::{build_outline, OutlineItem, DEFAULT_ITEM_COLOR};
pub use inspector::{
    panel_entries, read_property, Breadcrumb, PropertyEntry, PropertyReading, SelectionHeader,
};
