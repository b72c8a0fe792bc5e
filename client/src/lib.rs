//! # Page interactivity layer
//!
//! Client-side behavior of the marketing site, kept separate from the
//! backend: the two never talk to each other. The contact form posts to an
//! external relay service, everything else is local UI state.
//!
//! Each concern is one component, built once by [`page::Page::new`] and
//! driven by the embedding shell's event callbacks. Nothing in here reads
//! wall-clock time on its own; handlers take the current [`std::time::Instant`]
//! so behavior is deterministic under test.
pub mod consent;
pub mod form;
pub mod header;
pub mod menu;
pub mod notify;
pub mod page;
pub mod relay;

pub use page::{LinkAction, Page};
