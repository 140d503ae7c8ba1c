//! Sprite Duel library.
//!
//! Two-fighter sprite duel built on an ECS world. Exposes the components,
//! resources, systems and events plus the [`game::Match`] driver for use in
//! integration tests and by the binary.

pub mod components;
pub mod error;
pub mod events;
#[cfg(feature = "window")]
pub mod frontend;
pub mod game;
pub mod resources;
pub mod surface;
pub mod systems;
