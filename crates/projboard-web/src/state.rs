//! Application state.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::board_loop::{self, BoardHandle};

/// Rendered markup of both lists, keyed by status.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct ListsHtml {
    pub active: String,
    pub finished: String,
}

/// WebSocket message types.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(tag = "type", content = "data")]
pub enum WebSocketMessage {
    /// Both lists were re-rendered after a store notification.
    ListsRendered(ListsHtml),
}

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub board: BoardHandle,
    pub tx: broadcast::Sender<WebSocketMessage>,
}

impl AppState {
    /// Start a board loop whose list updates go out on a broadcast channel.
    pub fn new(broadcast_capacity: usize) -> std::io::Result<Self> {
        let (tx, _rx) = broadcast::channel(broadcast_capacity);
        let board = board_loop::spawn(tx.clone())?;
        Ok(Self { board, tx })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lists_rendered_wire_shape() {
        let msg = WebSocketMessage::ListsRendered(ListsHtml {
            active: "<section id=\"active-projects\"></section>".to_string(),
            finished: "<section id=\"finished-projects\"></section>".to_string(),
        });

        assert_eq!(
            serde_json::to_value(&msg).unwrap(),
            json!({
                "type": "ListsRendered",
                "data": {
                    "active": "<section id=\"active-projects\"></section>",
                    "finished": "<section id=\"finished-projects\"></section>",
                }
            })
        );
    }
}
