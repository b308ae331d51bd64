//! UI Components
//!
//! Sections of the create-point form.

mod contact_fields;
mod address_fields;
mod items_grid;

pub use contact_fields::ContactFields;
pub use address_fields::AddressFields;
pub use items_grid::ItemsGrid;
