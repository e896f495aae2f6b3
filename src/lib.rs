//! Page-side highlight helpers for browser automation.
//!
//! This crate is compiled to WebAssembly and injected into the page under
//! automation. An external harness calls the exported functions to outline the
//! element it is about to act on, mark the exact point it is about to click, and
//! ask whether the page scrolls on a given axis before choosing how to swipe.
//!
//! Every operation is a single synchronous DOM read or write. The only state kept
//! in the page is a pair of singleton elements (the overlay and the marker) that
//! are looked up again by element id on each call.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`bindings`] | `wasm-bindgen` exports called by the harness |
//! | [`highlight`] | Overlay/marker upsert and removal over any [`dom::Dom`] |
//! | [`dom`] | The DOM seam: [`dom::Dom`] trait and page metrics |
//! | [`web`] | [`dom::Dom`] backed by `web_sys` (the only browser-touching module) |
//! | `memory` | In-memory [`dom::Dom`] used by the unit tests (test builds only) |
//! | [`style`] | CSS declarations for the overlay and marker |
//! | [`geom`] | Bounding boxes, points, directions and click-point resolution |
//! | [`scroll`] | Scroll axes and overflow checks |
//! | [`gesture`] | Drag-vs-wheel swipe planning |
//! | [`config`] | Runtime-configurable ids and appearance |
//! | [`error`] | [`error::MarkError`] and its JS conversion |
//! | [`consts`] | Shared ids, styles and numeric constants |

pub mod bindings;
pub mod config;
pub mod consts;
pub mod dom;
pub mod error;
pub mod geom;
pub mod gesture;
pub mod highlight;
#[cfg(test)]
pub mod memory;
pub mod scroll;
pub mod style;
pub mod web;
