//! Grid-snapped desk layout surface.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It binds to a
//! single `<canvas>` element, draws a background grid, places a draggable desk
//! that snaps to grid intersections, and lets the user draw grid-snapped line
//! segments. The selected shape can be removed with the Delete key.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`doc`] | Shape types and the in-memory shape store |
//! | [`geom`] | Points and grid snapping |
//! | [`grid`] | Background grid line generation |
//! | [`input`] | Pointer/key event types and the gesture state machine |
//! | [`hit`] | Hit-testing against shapes |
//! | [`render`] | Scene rendering to a 2D context |
//! | [`host`] | DOM wiring exported to JavaScript |
//! | [`config`] | Surface configuration parsed from host JSON |
//! | [`error`] | Error types for config and surface binding |
//! | [`logging`] | Console logger initialization |
//! | [`consts`] | Shared numeric and style constants |

pub mod config;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod error;
pub mod geom;
pub mod grid;
pub mod hit;
pub mod host;
pub mod input;
pub mod logging;
pub mod render;

pub use host::SurfaceController;
