//! Board composition: one store, one form, one list per status.

use std::rc::Rc;
use tracing::debug;

use crate::dnd::{DataTransfer, DragEvent, DropTarget, PLAIN_TEXT};
use crate::error::BoardResult;
use crate::project::{ProjectStatus, ProjectStore};
use crate::render::SharedHost;
use crate::view::{Alert, InputForm, ListView};

/// The assembled board. The store is created here and injected into every view.
pub struct Board {
    store: Rc<ProjectStore>,
    form: InputForm,
    active: ListView,
    finished: ListView,
}

impl Board {
    /// Mount the form at the start of the host's root, then the active and
    /// finished lists after it.
    pub fn mount(host: SharedHost, alert: Rc<dyn Alert>) -> BoardResult<Self> {
        let store = Rc::new(ProjectStore::new());
        let root = host.borrow().root();

        let form = InputForm::attach(store.clone(), &host, root, alert)?;
        let active = ListView::attach(store.clone(), host.clone(), root, ProjectStatus::Active)?;
        let finished =
            ListView::attach(store.clone(), host.clone(), root, ProjectStatus::Finished)?;

        debug!(listeners = store.listener_count(), "Board mounted");
        Ok(Self {
            store,
            form,
            active,
            finished,
        })
    }

    pub fn store(&self) -> &Rc<ProjectStore> {
        &self.store
    }

    pub fn form(&self) -> &InputForm {
        &self.form
    }

    pub fn list(&self, status: ProjectStatus) -> &ListView {
        match status {
            ProjectStatus::Active => &self.active,
            ProjectStatus::Finished => &self.finished,
        }
    }

    /// Deliver a drop whose drag started elsewhere (e.g. in a browser) to the
    /// list for `status`: drag-over, then drop if the list accepted it.
    ///
    /// Returns whether the list accepted the drop.
    pub fn drop_payload(&self, status: ProjectStatus, payload: &str) -> bool {
        let mut data = DataTransfer::new();
        data.set_data(PLAIN_TEXT, payload);
        let mut event = DragEvent::carrying(data);

        let list = self.list(status);
        list.on_drag_over(&mut event);
        if !event.default_prevented() {
            list.on_drag_leave(&event);
            return false;
        }
        list.on_drop(&mut event);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{Document, RenderHost};
    use std::cell::RefCell;

    struct NoAlert;

    impl Alert for NoAlert {
        fn alert(&self, _message: &str) {}
    }

    #[test]
    fn test_mount_order() {
        let doc = Rc::new(RefCell::new(Document::new()));
        let board = Board::mount(doc.clone(), Rc::new(NoAlert)).unwrap();

        let doc = doc.borrow();
        let root = doc.root();
        assert_eq!(
            doc.children(root),
            &[
                board.form().element(),
                board.list(ProjectStatus::Active).element(),
                board.list(ProjectStatus::Finished).element(),
            ]
        );
        assert_eq!(board.store().listener_count(), 2);
    }

    #[test]
    fn test_drop_payload_moves_project() {
        let doc = Rc::new(RefCell::new(Document::new()));
        let board = Board::mount(doc, Rc::new(NoAlert)).unwrap();
        let id = board.store().create("a", "aaaaa", 1);

        assert!(board.drop_payload(ProjectStatus::Finished, id.as_str()));

        assert!(board.list(ProjectStatus::Active).rendered_ids().is_empty());
        assert_eq!(board.list(ProjectStatus::Finished).rendered_ids(), vec![id]);
    }
}
