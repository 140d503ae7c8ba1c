//! Named sub-component container.
//!
//! A [`Composable`] owns a set of named parts that all expose the
//! [`Updatable`] capability. Updating the container updates every part in
//! insertion order. Parts are looked up by name and downcast to their
//! concrete type, which is how a [`Sprite`](super::sprite::Sprite) finds
//! the [`Animation`](super::animation::Animation) attached to it.

use std::any::Any;
use std::fmt::Debug;

/// Something that advances once per game tick.
pub trait Updatable: Any + Send + Sync + Debug {
    /// Advance one tick.
    fn update(&mut self);

    /// Convert to Any for downcasting
    fn as_any(&self) -> &dyn Any;
}

/// Ordered map of named [`Updatable`] parts.
#[derive(Debug, Default)]
pub struct Composable {
    parts: Vec<(String, Box<dyn Updatable>)>,
}

impl Composable {
    pub fn new() -> Self {
        Self { parts: Vec::new() }
    }

    /// Attach `part` under `name`, replacing any part already stored there.
    pub fn insert(&mut self, name: impl Into<String>, part: impl Updatable) {
        let name = name.into();
        let part: Box<dyn Updatable> = Box::new(part);
        match self.parts.iter_mut().find(|(key, _)| *key == name) {
            Some(slot) => slot.1 = part,
            None => self.parts.push((name, part)),
        }
    }

    /// Typed access to a part. `None` if it is missing or of another type.
    pub fn get<T: Updatable>(&self, name: &str) -> Option<&T> {
        self.parts
            .iter()
            .find(|(key, _)| key == name)
            .and_then(|(_, part)| part.as_any().downcast_ref::<T>())
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl Updatable for Composable {
    fn update(&mut self) {
        for (_, part) in self.parts.iter_mut() {
            part.update();
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
