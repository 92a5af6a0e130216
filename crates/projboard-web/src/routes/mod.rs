//! Route handlers.

pub mod board_html;
pub mod projects;
