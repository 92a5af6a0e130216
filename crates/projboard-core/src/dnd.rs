//! Drag-and-drop and form event model.
//!
//! Mirrors the platform contract the views are written against: a drag
//! carries a typed payload, and a drop target must cancel the default
//! action on drag-over for the drop to be permitted.

use std::collections::BTreeMap;
use std::fmt;

/// Payload type used to carry a project id across a drag.
pub const PLAIN_TEXT: &str = "text/plain";

/// Allowed / performed effect of a drag operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropEffect {
    #[default]
    None,
    Copy,
    Move,
    Link,
}

impl DropEffect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Copy => "copy",
            Self::Move => "move",
            Self::Link => "link",
        }
    }
}

impl fmt::Display for DropEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Data carried by a drag operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataTransfer {
    items: BTreeMap<String, String>,
    pub effect_allowed: DropEffect,
    pub drop_effect: DropEffect,
}

impl DataTransfer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_data(&mut self, format: &str, data: &str) {
        self.items.insert(format.to_string(), data.to_string());
    }

    pub fn get_data(&self, format: &str) -> Option<&str> {
        self.items.get(format).map(String::as_str)
    }

    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }
}

/// A drag event as seen by sources and targets.
#[derive(Debug, Clone, Default)]
pub struct DragEvent {
    pub data_transfer: DataTransfer,
    default_prevented: bool,
}

impl DragEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Event for the drop phase of a drag that carries `data_transfer`.
    pub fn carrying(data_transfer: DataTransfer) -> Self {
        Self {
            data_transfer,
            default_prevented: false,
        }
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// A form submission event.
#[derive(Debug, Clone, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Something that can be dragged.
pub trait DragSource {
    fn on_drag_start(&self, event: &mut DragEvent);
    fn on_drag_end(&self, event: &DragEvent);
}

/// Something that accepts drops.
pub trait DropTarget {
    fn on_drag_over(&self, event: &mut DragEvent);
    fn on_drop(&self, event: &mut DragEvent);
    fn on_drag_leave(&self, event: &DragEvent);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_transfer_round_trip() {
        let mut dt = DataTransfer::new();
        assert_eq!(dt.get_data(PLAIN_TEXT), None);
        dt.set_data(PLAIN_TEXT, "p1");
        dt.set_data(PLAIN_TEXT, "p2");
        assert_eq!(dt.get_data(PLAIN_TEXT), Some("p2"));
        assert_eq!(dt.types().collect::<Vec<_>>(), vec![PLAIN_TEXT]);
    }

    #[test]
    fn test_prevent_default() {
        let mut event = DragEvent::new();
        assert!(!event.default_prevented());
        event.prevent_default();
        assert!(event.default_prevented());
    }
}
