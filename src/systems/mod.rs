//! Match systems.
//!
//! Submodules overview
//! - [`input`] – route queued key events to fighters
//! - [`animation`] – tick scenery and fighter animations
//! - [`movement`] – horizontal intent, state selection and physics
//! - [`combat`] – evaluate attacks on their active frame
//! - [`matchflow`] – knock-out and countdown end conditions
//! - [`render`] – paint layers, fighters and debug outlines
//! - [`time`] – world time and frame counting

pub mod animation;
pub mod combat;
pub mod input;
pub mod matchflow;
pub mod movement;
pub mod render;
pub mod time;
