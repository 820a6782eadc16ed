//! Headless floor-plan editor for restaurant layouts.
//!
//! Operators place tables, furniture and zones on per-floor canvases, drag
//! and resize them with optional grid snapping, rotate them in fixed steps,
//! and save the whole layout to a backend. This crate owns all of that state
//! and logic; the host UI only forwards pointer events, paints the returned
//! [`render::Scene`], shows [`notify::Notification`]s, and runs the async
//! [`session`] calls.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`model`] | Floors, tables and the placement tagged union |
//! | [`catalog`] | Furniture templates, icons and per-kind constraints |
//! | [`store`] | [`store::EditorStore`], the single owner of editor state |
//! | [`controller`] | Per-placement drag/resize gestures |
//! | [`surface`] | Canvas clicks, toolbar commands and pointer routing |
//! | [`hit`] | Hit-testing against the active floor |
//! | [`render`] | Draw list and background grid |
//! | [`library`] | Floor tabs and the furniture library |
//! | [`zone_form`] | Zone create/edit form |
//! | [`session`] | Async load, floor creation and save |
//! | [`services`] | Collaborator traits with HTTP and in-memory implementations |
//! | [`geometry`] | Points, rectangles, snapping, rotation and zoom |
//! | [`input`] | Tool modes, selection, buttons and keys |
//! | [`notify`] | Toast messages |
//! | [`config`] | Environment configuration |
//! | [`error`] | Error taxonomy |
//! | [`consts`] | Shared numeric constants |

pub mod catalog;
pub mod config;
pub mod consts;
pub mod controller;
pub mod error;
pub mod geometry;
pub mod hit;
pub mod input;
pub mod library;
pub mod model;
pub mod notify;
pub mod render;
pub mod services;
pub mod session;
pub mod store;
pub mod surface;
pub mod zone_form;

#[cfg(test)]
pub(crate) mod test_helpers;
