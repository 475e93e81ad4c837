#![forbid(unsafe_code)]

//! Runtime coordination for the daygrid layout engine.
//!
//! - [`coordinator`] - [`LayoutCoordinator`]: owned layout state,
//!   submission validation, placeholder lifecycle
//! - [`debounce`] - [`RelayoutDebouncer`]: latest-wins coalescing of
//!   parameter-only re-layout requests
//!
//! Everything is single-threaded and tick-driven: the caller supplies
//! `Instant`s and drives the loop, so scheduling is deterministic and the
//! engine never blocks or spawns.

pub mod coordinator;
pub mod debounce;

pub use coordinator::LayoutCoordinator;
pub use debounce::{DEFAULT_RELAYOUT_DEBOUNCE, RelayoutDebouncer};
