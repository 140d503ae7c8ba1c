//! Event types exchanged between the match and its collaborators.
//!
//! Submodules:
//! - [`input`] – key events and the input source they are polled from
//! - [`hud`] – health, timer and outcome notifications for the HUD
pub mod hud;
pub mod input;
