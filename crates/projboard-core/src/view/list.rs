//! Status list: renders the projects of one status and accepts drops.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::{debug, error};

use crate::dnd::{DragEvent, DropEffect, DropTarget, PLAIN_TEXT};
use crate::error::BoardResult;
use crate::project::{ProjectId, ProjectStatus, ProjectStore, Snapshot};
use crate::render::{mount, templates, ElementHandle, InsertPosition, SharedHost};
use crate::view::item::ItemView;

/// Class marking a list that will accept the current drag.
pub const DROPPABLE_CLASS: &str = "droppable";

/// Drop-zone state for the drag currently over a list.
///
/// A drop passes through the transition request and lands back on `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropState {
    #[default]
    Idle,
    DragOver,
}

/// One list per status. Cheap to clone; clones share the same view.
#[derive(Clone)]
pub struct ListView {
    inner: Rc<ListInner>,
}

struct ListInner {
    status: ProjectStatus,
    store: Rc<ProjectStore>,
    host: SharedHost,
    element: ElementHandle,
    items: RefCell<Vec<ItemView>>,
    drop_state: Cell<DropState>,
}

impl ListView {
    /// Mount an empty list at the end of `container` and subscribe it to `store`.
    pub fn attach(
        store: Rc<ProjectStore>,
        host: SharedHost,
        container: ElementHandle,
        status: ProjectStatus,
    ) -> BoardResult<Self> {
        let fragment = templates::project_list(status)?;
        let element_id = format!("{status}-projects");
        let element = mount(&host, fragment, container, InsertPosition::End, Some(&element_id))?;

        let inner = Rc::new(ListInner {
            status,
            store: store.clone(),
            host,
            element,
            items: RefCell::new(Vec::new()),
            drop_state: Cell::new(DropState::Idle),
        });

        let weak = Rc::downgrade(&inner);
        store.subscribe(move |snapshot| {
            if let Some(list) = weak.upgrade() {
                list.render_projects(snapshot);
            }
        });

        Ok(Self { inner })
    }

    pub fn element(&self) -> ElementHandle {
        self.inner.element
    }

    pub fn drop_state(&self) -> DropState {
        self.inner.drop_state.get()
    }

    /// Items from the most recent render.
    pub fn rendered(&self) -> Vec<ItemView> {
        self.inner.items.borrow().clone()
    }

    /// Ids of the items from the most recent render, in order.
    pub fn rendered_ids(&self) -> Vec<ProjectId> {
        self.inner
            .items
            .borrow()
            .iter()
            .map(|item| item.project().id.clone())
            .collect()
    }

    /// The rendered item for `id`, if it is in this list.
    pub fn item(&self, id: &ProjectId) -> Option<ItemView> {
        self.inner
            .items
            .borrow()
            .iter()
            .find(|item| &item.project().id == id)
            .cloned()
    }

    fn set_acceptance(&self, state: DropState) {
        self.inner.drop_state.set(state);
        self.inner.host.borrow_mut().set_class(
            self.inner.element,
            DROPPABLE_CLASS,
            state == DropState::DragOver,
        );
    }
}

impl ListInner {
    /// Clear-and-rebuild from a full snapshot.
    fn render_projects(&self, snapshot: &Snapshot) {
        self.host.borrow_mut().clear(self.element);

        let mut items = Vec::new();
        for project in snapshot.with_status(self.status) {
            match ItemView::render(&self.host, self.element, project) {
                Ok(item) => items.push(item),
                Err(e) => error!(
                    project_id = %project.id,
                    error = %e,
                    "Failed to render project item"
                ),
            }
        }

        debug!(status = %self.status, items = items.len(), "List rendered");
        *self.items.borrow_mut() = items;
    }
}

impl DropTarget for ListView {
    fn on_drag_over(&self, event: &mut DragEvent) {
        if event.data_transfer.types().any(|t| t == PLAIN_TEXT) {
            event.prevent_default();
            self.set_acceptance(DropState::DragOver);
        }
    }

    fn on_drop(&self, event: &mut DragEvent) {
        event.prevent_default();
        let id = event.data_transfer.get_data(PLAIN_TEXT).map(ProjectId::from);
        self.set_acceptance(DropState::Idle);

        match id {
            Some(id) => {
                event.data_transfer.drop_effect = DropEffect::Move;
                debug!(project_id = %id, status = %self.inner.status, "Project dropped");
                self.inner.store.transition(&id, self.inner.status);
            }
            None => debug!(status = %self.inner.status, "Drop without project payload ignored"),
        }
    }

    fn on_drag_leave(&self, _event: &DragEvent) {
        self.set_acceptance(DropState::Idle);
    }
}
