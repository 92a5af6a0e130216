//! The board loop: a dedicated thread owning the board.
//!
//! The store and its views are single-threaded, so they never leave this
//! thread. Handlers talk to it with [`BoardCommand`]s and await a reply.
//! After every store notification the loop publishes both re-rendered lists.

use std::cell::RefCell;
use std::rc::Rc;
use tokio::sync::{broadcast, mpsc, oneshot};
use tracing::{debug, error, info, warn};

use projboard_core::render::Document;
use projboard_core::view::{Alert, FormFields};
use projboard_core::{Board, BoardResult, Project, ProjectId, ProjectStatus};

use crate::state::{ListsHtml, WebSocketMessage};

const COMMAND_QUEUE: usize = 64;

/// Requests served by the board loop.
#[derive(Debug)]
pub enum BoardCommand {
    Submit {
        fields: FormFields,
        reply: oneshot::Sender<BoardResult<ProjectId>>,
    },
    Drop {
        status: ProjectStatus,
        payload: String,
        reply: oneshot::Sender<ListsHtml>,
    },
    Page {
        reply: oneshot::Sender<String>,
    },
    Projects {
        reply: oneshot::Sender<Vec<Project>>,
    },
}

/// The board loop has stopped.
#[derive(Debug, thiserror::Error)]
#[error("Board loop is not running")]
pub struct BoardUnavailable;

/// Cloneable sender side of the board loop.
#[derive(Clone)]
pub struct BoardHandle {
    tx: mpsc::Sender<BoardCommand>,
}

impl BoardHandle {
    async fn request<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<T>) -> BoardCommand,
    ) -> Result<T, BoardUnavailable> {
        let (reply, rx) = oneshot::channel();
        self.tx.send(build(reply)).await.map_err(|_| BoardUnavailable)?;
        rx.await.map_err(|_| BoardUnavailable)
    }

    /// Validate and create a project from raw form input.
    pub async fn submit(&self, fields: FormFields) -> Result<BoardResult<ProjectId>, BoardUnavailable> {
        self.request(|reply| BoardCommand::Submit { fields, reply }).await
    }

    /// Drop a dragged project id onto the list for `status`.
    pub async fn drop_on(&self, status: ProjectStatus, payload: String) -> Result<ListsHtml, BoardUnavailable> {
        self.request(|reply| BoardCommand::Drop { status, payload, reply }).await
    }

    /// The whole rendered document.
    pub async fn page(&self) -> Result<String, BoardUnavailable> {
        self.request(|reply| BoardCommand::Page { reply }).await
    }

    pub async fn projects(&self) -> Result<Vec<Project>, BoardUnavailable> {
        self.request(|reply| BoardCommand::Projects { reply }).await
    }
}

/// Validation alerts reach the user as the rejected request's response.
struct LoggedAlert;

impl Alert for LoggedAlert {
    fn alert(&self, message: &str) {
        info!(alert = message, "Submission rejected");
    }
}

/// Start the board loop on its own thread.
pub fn spawn(updates: broadcast::Sender<WebSocketMessage>) -> std::io::Result<BoardHandle> {
    let (tx, rx) = mpsc::channel(COMMAND_QUEUE);
    std::thread::Builder::new()
        .name("board-loop".to_string())
        .spawn(move || run(rx, updates))?;
    Ok(BoardHandle { tx })
}

fn run(mut rx: mpsc::Receiver<BoardCommand>, updates: broadcast::Sender<WebSocketMessage>) {
    let doc = Rc::new(RefCell::new(Document::new()));
    let board = match Board::mount(doc.clone(), Rc::new(LoggedAlert)) {
        Ok(board) => Rc::new(board),
        Err(e) => {
            error!(error = %e, "Failed to mount board");
            return;
        }
    };

    // Subscribed after both lists, so they have re-rendered by the time this runs.
    let publisher_doc = doc.clone();
    let publisher_board = Rc::downgrade(&board);
    board.store().subscribe(move |_| {
        let Some(board) = publisher_board.upgrade() else {
            return;
        };
        let lists = render_lists(&board, &publisher_doc.borrow());
        // No receivers just means no browser is connected.
        if updates.send(WebSocketMessage::ListsRendered(lists)).is_err() {
            debug!("No WebSocket clients for list update");
        }
    });

    info!("Board loop started");
    while let Some(command) = rx.blocking_recv() {
        handle(&board, &doc, command);
    }
    info!("Board loop stopped");
}

fn handle(board: &Board, doc: &RefCell<Document>, command: BoardCommand) {
    let delivered = match command {
        BoardCommand::Submit { fields, reply } => {
            board.form().fill(fields);
            let mut event = projboard_core::dnd::SubmitEvent::new();
            reply.send(board.form().submit(&mut event)).is_ok()
        }
        BoardCommand::Drop { status, payload, reply } => {
            if !board.drop_payload(status, &payload) {
                warn!(%status, "Drop was not accepted");
            }
            reply.send(render_lists(board, &doc.borrow())).is_ok()
        }
        BoardCommand::Page { reply } => reply.send(doc.borrow().to_html()).is_ok(),
        BoardCommand::Projects { reply } => reply.send(board.store().snapshot().to_vec()).is_ok(),
    };
    if !delivered {
        debug!("Requester went away before the reply");
    }
}

fn render_lists(board: &Board, doc: &Document) -> ListsHtml {
    let html = |status| {
        doc.html_of(board.list(status).element())
            .unwrap_or_default()
    };
    ListsHtml {
        active: html(ProjectStatus::Active),
        finished: html(ProjectStatus::Finished),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(title: &str, description: &str, people: &str) -> FormFields {
        FormFields {
            title: title.to_string(),
            description: description.to_string(),
            people: people.to_string(),
        }
    }

    #[tokio::test]
    async fn test_submit_and_list() {
        let (tx, _rx) = broadcast::channel(16);
        let handle = spawn(tx).unwrap();

        let id = handle
            .submit(fields("Learn X", "Build a sample app", "3"))
            .await
            .unwrap()
            .unwrap();

        let projects = handle.projects().await.unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].id, id);
        assert_eq!(projects[0].status, ProjectStatus::Active);
    }

    #[tokio::test]
    async fn test_invalid_submit_creates_nothing() {
        let (tx, _rx) = broadcast::channel(16);
        let handle = spawn(tx).unwrap();

        let result = handle.submit(fields("Learn X", "abcd", "3")).await.unwrap();

        assert_eq!(result, Err(projboard_core::BoardError::InvalidInput));
        assert!(handle.projects().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_updates_are_published_after_render() {
        let (tx, mut rx) = broadcast::channel(16);
        let handle = spawn(tx).unwrap();

        let id = handle
            .submit(fields("Learn X", "Build a sample app", "1"))
            .await
            .unwrap()
            .unwrap();
        let WebSocketMessage::ListsRendered(lists) = rx.recv().await.unwrap();
        assert!(lists.active.contains(id.as_str()));
        assert!(lists.active.contains("1 Person assigned"));
        assert!(!lists.finished.contains(id.as_str()));

        let returned = handle
            .drop_on(ProjectStatus::Finished, id.to_string())
            .await
            .unwrap();
        let WebSocketMessage::ListsRendered(lists) = rx.recv().await.unwrap();
        assert_eq!(lists, returned);
        assert!(!lists.active.contains(id.as_str()));
        assert!(lists.finished.contains(id.as_str()));
    }

    #[tokio::test]
    async fn test_page_contains_form_and_lists() {
        let (tx, _rx) = broadcast::channel(16);
        let handle = spawn(tx).unwrap();

        let page = handle.page().await.unwrap();

        assert!(page.contains("id=\"user-input\""));
        assert!(page.contains("ACTIVE PROJECTS"));
        assert!(page.contains("FINISHED PROJECTS"));
    }
}
