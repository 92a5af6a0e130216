//! View components attached to a render host.

pub mod form;
pub mod item;
pub mod list;

pub use form::{Alert, FormField, FormFields, InputForm, FORM_ID};
pub use item::{persons_label, ItemView};
pub use list::{DropState, ListView, DROPPABLE_CLASS};
