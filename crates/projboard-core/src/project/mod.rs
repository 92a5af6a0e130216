//! The project store: single source of truth for every project on the board.

pub mod model;

pub use model::{Project, ProjectId, ProjectStatus, Snapshot};

use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

/// Callback invoked with a fresh snapshot after every store mutation.
pub type Listener = Rc<dyn Fn(&Snapshot)>;

/// Owns the ordered collection of projects and the listener registry.
///
/// Single-threaded: share it with `Rc<ProjectStore>`. Every mutation is
/// followed by a synchronous fan-out to all listeners in subscription order.
/// No interior borrow is held while a listener runs, so listeners may read
/// the store or request further mutations.
#[derive(Default)]
pub struct ProjectStore {
    projects: RefCell<Vec<Project>>,
    listeners: RefCell<Vec<Listener>>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new active project and notify every listener once.
    pub fn create(&self, title: &str, description: &str, people: u32) -> ProjectId {
        let project = Project::new(title, description, people);
        let id = project.id.clone();
        self.projects.borrow_mut().push(project);

        debug!(project_id = %id, people, "Project created");
        self.notify();
        id
    }

    /// Register a listener for future snapshots. The current state is not replayed.
    pub fn subscribe(&self, listener: impl Fn(&Snapshot) + 'static) {
        self.listeners.borrow_mut().push(Rc::new(listener));
    }

    /// Move a project to `status` and notify every listener.
    ///
    /// Unknown ids are ignored without notifying. Moving a project to the
    /// status it already has changes nothing but still notifies.
    pub fn transition(&self, id: &ProjectId, status: ProjectStatus) {
        {
            let mut projects = self.projects.borrow_mut();
            let Some(project) = projects.iter_mut().find(|p| &p.id == id) else {
                debug!(project_id = %id, "Transition for unknown project ignored");
                return;
            };
            debug!(project_id = %id, from = %project.status, to = %status, "Project transitioned");
            project.status = status;
        }
        self.notify();
    }

    /// Current state of the collection.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.projects.borrow())
    }

    pub fn len(&self) -> usize {
        self.projects.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.borrow().is_empty()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    fn notify(&self) {
        let snapshot = self.snapshot();
        // Listeners registered during this fan-out only see later notifications.
        let listeners: Vec<Listener> = self.listeners.borrow().clone();
        debug!(listeners = listeners.len(), projects = snapshot.len(), "Notifying listeners");
        for listener in listeners {
            listener(&snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::HashSet;

    fn recording(store: &ProjectStore) -> Rc<RefCell<Vec<Snapshot>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        store.subscribe(move |snapshot| sink.borrow_mut().push(snapshot.clone()));
        seen
    }

    #[test]
    fn test_create_appends_in_order_with_distinct_ids() {
        let store = ProjectStore::new();
        let seen = recording(&store);

        let ids: Vec<ProjectId> = (0..5)
            .map(|i| store.create(&format!("p{i}"), "a description", 1))
            .collect();

        assert_eq!(store.len(), 5);
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), 5);

        let seen = seen.borrow();
        assert_eq!(seen.len(), 5);
        for (n, snapshot) in seen.iter().enumerate() {
            let order: Vec<_> = snapshot.iter().map(|p| p.id.clone()).collect();
            assert_eq!(order, ids[..=n].to_vec());
        }
    }

    #[test]
    fn test_new_project_is_active() {
        let store = ProjectStore::new();
        let id = store.create("Learn X", "Build a sample app", 3);
        let snapshot = store.snapshot();
        let project = snapshot.get(&id).unwrap();
        assert_eq!(project.status, ProjectStatus::Active);
        assert_eq!(project.title, "Learn X");
        assert_eq!(project.people, 3);
    }

    #[test]
    fn test_subscribe_does_not_replay() {
        let store = ProjectStore::new();
        store.create("a", "aaaaa", 1);
        let seen = recording(&store);
        assert!(seen.borrow().is_empty());
        assert_eq!(store.listener_count(), 1);
    }

    #[test]
    fn test_transition_and_idempotent_repeat() {
        let store = ProjectStore::new();
        let id = store.create("a", "aaaaa", 1);
        let seen = recording(&store);

        store.transition(&id, ProjectStatus::Finished);
        assert_eq!(store.snapshot().get(&id).unwrap().status, ProjectStatus::Finished);

        store.transition(&id, ProjectStatus::Finished);
        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], seen[1]);
    }

    #[test]
    fn test_transition_unknown_id_is_silent() {
        let store = ProjectStore::new();
        store.create("a", "aaaaa", 1);
        let seen = recording(&store);
        let before = store.snapshot();

        store.transition(&ProjectId::from("missing"), ProjectStatus::Finished);

        assert!(seen.borrow().is_empty());
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_fan_out_order_and_partition() {
        let store = ProjectStore::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        for tag in ["first", "second", "third"] {
            let order = order.clone();
            store.subscribe(move |snapshot| {
                let active = snapshot.with_status(ProjectStatus::Active).count();
                let finished = snapshot.with_status(ProjectStatus::Finished).count();
                assert_eq!(active + finished, snapshot.len());
                order.borrow_mut().push(tag);
            });
        }

        let id = store.create("a", "aaaaa", 1);
        store.create("b", "bbbbb", 2);
        store.transition(&id, ProjectStatus::Finished);

        assert_eq!(
            *order.borrow(),
            ["first", "second", "third"].repeat(3),
        );
    }

    #[test]
    fn test_listener_can_reenter_store() {
        let store = Rc::new(ProjectStore::new());
        let calls = Rc::new(Cell::new(0));
        let weak = Rc::downgrade(&store);
        let counter = calls.clone();
        store.subscribe(move |snapshot| {
            counter.set(counter.get() + 1);
            let store = weak.upgrade().unwrap();
            assert_eq!(store.snapshot(), *snapshot);
            // Finish every project as soon as it is created.
            if let Some(p) = snapshot.with_status(ProjectStatus::Active).next() {
                store.transition(&p.id, ProjectStatus::Finished);
            }
        });

        store.create("a", "aaaaa", 1);

        assert_eq!(calls.get(), 2);
        assert_eq!(store.snapshot()[0].status, ProjectStatus::Finished);
    }
}
