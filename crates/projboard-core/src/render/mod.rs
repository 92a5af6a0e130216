//! Render host capability.
//!
//! Views never touch markup directly. They hand a rendered [`Fragment`] to a
//! [`RenderHost`], which attaches it under a container and returns a handle
//! to the inserted root element.

pub mod document;
pub mod templates;

pub use document::Document;
pub use templates::Fragment;

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::BoardResult;

/// Replaced by the rendered children of an element.
pub const CHILDREN_MARKER: &str = "<!--children-->";
/// Replaced by the element id assigned at instantiation.
pub const ID_MARKER: &str = "@@id@@";
/// Replaced by the element's current classes.
pub const CLASSES_MARKER: &str = "@@classes@@";

/// Handle to an element owned by a render host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementHandle(pub(crate) u64);

/// Where a fragment goes inside its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPosition {
    Start,
    End,
}

/// Instantiates fragments into a document.
pub trait RenderHost {
    /// The mount point views attach to.
    fn root(&self) -> ElementHandle;

    /// Insert `fragment` into `container` at `position`, optionally assigning an element id.
    ///
    /// Fails without inserting anything when `container` is not in the document.
    fn instantiate(
        &mut self,
        fragment: Fragment,
        container: ElementHandle,
        position: InsertPosition,
        id: Option<&str>,
    ) -> BoardResult<ElementHandle>;

    /// Remove every child of `container`.
    fn clear(&mut self, container: ElementHandle);

    /// Add or remove a class on `element`.
    fn set_class(&mut self, element: ElementHandle, class: &str, on: bool);
}

/// Render host shared by all views of one board.
pub type SharedHost = Rc<RefCell<dyn RenderHost>>;

/// Attach a fragment through a shared host.
pub fn mount(
    host: &SharedHost,
    fragment: Fragment,
    container: ElementHandle,
    position: InsertPosition,
    id: Option<&str>,
) -> BoardResult<ElementHandle> {
    host.borrow_mut().instantiate(fragment, container, position, id)
}
