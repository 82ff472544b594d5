//! # View State
//!
//! Everything the swap page renders, held in one owned object. The browser
//! crate wraps it in a reactive signal; tests hold it in a `RefCell`.

pub mod state;

pub use state::{Notice, NoticeKind, Status, Theme, ViewState, IDLE_LABEL};
