//! Grid-based floor zone editor.
//!
//! Users partition a floorplan into named, colored zones by clicking grid
//! cells on a 2D projection of the plan. This crate owns the interaction
//! layer: turning pointer events into grid cells, telling clicks from drags,
//! and keeping every tile in at most one saved zone. Drawing goes through the
//! [`render::Surface`] trait so the same core runs headless, as SVG, or on a
//! browser canvas (feature `web`).
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Editor controller ([`engine::EditorCore`]) and its [`engine::Action`]s |
//! | [`zone`] | Zones and zone ids |
//! | [`tile`] | Grid tiles |
//! | [`camera`] | Screen / world / grid coordinate transforms |
//! | [`input`] | Pointer events and the gesture state machine |
//! | [`floorplan`] | Floorplan boundary trait and in-memory document |
//! | [`render`] | Scene rendering onto a [`render::Surface`] |
//! | [`svg`] | SVG surface |
//! | [`color`] | Zone color generation |
//! | [`config`] | Editor configuration |
//! | [`consts`] | Default scale, grid, and style values |

pub mod camera;
pub mod color;
pub mod config;
pub mod consts;
pub mod engine;
pub mod floorplan;
pub mod input;
pub mod render;
pub mod svg;
pub mod tile;
#[cfg(feature = "web")]
pub mod web;
pub mod zone;
