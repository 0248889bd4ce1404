//! User Interface Module
//!
//! One module per page plus the shared pieces they are drawn with. Page modules own
//! their local state type and a `render` function; the root `App` decides which one is
//! mounted.

pub mod ai_search;
pub mod auth_modal;
pub mod colors;
pub mod community;
pub mod components;
pub mod dashboard;
pub mod editor;
pub mod header;
pub mod snippet_card;
pub mod start_page;
pub mod toast;
