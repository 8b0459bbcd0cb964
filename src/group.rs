//! Broadcasting over collections
//!
//! `Group<T>` fans a call out across every member of a non-empty
//! collection. The operations worth broadcasting are named by small traits
//! ([`Update`], [`Render`]) which the group itself implements: a
//! `Group<Particle>` is updated and rendered exactly like a single
//! `Particle`, and groups nest (`Group<Group<Particle>>` works).
//!
//! For operations outside those traits, [`each`](Group::each) and
//! [`map`](Group::map) broadcast arbitrary closures; `map` collects results
//! into a new group so broadcasts chain.

use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::error::{Error, Result};

/// Per-frame state advancement.
pub trait Update {
    fn update(&mut self);
}

/// Drawing onto the frame's canvas.
pub trait Render {
    fn render(&self, canvas: &mut Canvas<Window>) -> Result<()>;
}

/// A non-empty collection that broadcasts calls to every member in order.
///
/// # Example
///
/// ```
/// use sdl2::pixels::Color;
/// use sdl2_tools::{Group, Particle, Point, Update};
///
/// let sparks: Vec<Particle> = (0..8)
///     .map(|i| {
///         let angle = i as f32 * std::f32::consts::TAU / 8.0;
///         Particle::new(
///             Point::new(160.0, 90.0),
///             4,
///             Color::RGB(255, 200, 50),
///             Point::new(3.0, 0.0).rotate(angle),
///         )
///         .with_lifetime(40)
///     })
///     .collect();
///
/// let mut burst = Group::new(sparks).unwrap();
/// burst.update(); // every particle moves one frame
///
/// let radii = burst.map(|p| p.circle.radius);
/// assert_eq!(radii.len(), 8);
/// ```
#[derive(Debug, Clone)]
pub struct Group<T> {
    items: Vec<T>,
}

impl<T> Group<T> {
    /// Wraps `items`; an empty vector is rejected with
    /// [`Error::EmptyGroup`].
    pub fn new(items: Vec<T>) -> Result<Group<T>> {
        if items.is_empty() {
            return Err(Error::EmptyGroup);
        }
        Ok(Group { items })
    }

    /// Calls `f` on every member, in order.
    pub fn each<F: FnMut(&mut T)>(&mut self, mut f: F) {
        for item in &mut self.items {
            f(item);
        }
    }

    /// Calls `f` on every member and collects the results into a new group.
    ///
    /// The result is never empty because `self` is not.
    pub fn map<U, F: FnMut(&T) -> U>(&self, mut f: F) -> Group<U> {
        Group {
            items: self.items.iter().map(&mut f).collect(),
        }
    }

    /// Fallible broadcast: stops at the first error.
    pub fn try_each<F: FnMut(&mut T) -> Result<()>>(&mut self, mut f: F) -> Result<()> {
        for item in &mut self.items {
            f(item)?;
        }
        Ok(())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Number of members; always at least 1.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn into_inner(self) -> Vec<T> {
        self.items
    }
}

impl<T> AsRef<[T]> for Group<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<'a, T> IntoIterator for &'a Group<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Group<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}

impl<T: Update> Update for Group<T> {
    fn update(&mut self) {
        for item in &mut self.items {
            item.update();
        }
    }
}

impl<T: Render> Render for Group<T> {
    fn render(&self, canvas: &mut Canvas<Window>) -> Result<()> {
        for item in &self.items {
            item.render(canvas)?;
        }
        Ok(())
    }
}
