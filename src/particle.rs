//! Circles and particles
//!
//! `Circle` is a drawable disc or ring built from horizontal scanline rects
//! (the SDL2 canvas has no circle primitive). `Particle` adds motion and
//! decay on top: velocity per frame, an optional lifetime, and an optional
//! radius shrink on a [`Ticker`] cadence. Particles are the crate's visual
//! effect primitive; batch them in a [`Group`](crate::Group) to update and
//! draw a burst at once.

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::error::Result;
use crate::group::{Render, Update};
use crate::point::Point;
use crate::ticker::Ticker;

/// A filled disc or ring.
#[derive(Debug, Clone)]
pub struct Circle {
    pub center: Point,
    pub radius: i32,
    pub color: Color,
    /// Ring thickness; 0 draws a filled disc.
    pub width: u32,
}

impl Circle {
    /// Creates a filled circle.
    pub fn new(center: Point, radius: i32, color: Color) -> Circle {
        Circle {
            center,
            radius,
            color,
            width: 0,
        }
    }

    /// Creates a ring of the given thickness.
    pub fn outlined(center: Point, radius: i32, color: Color, width: u32) -> Circle {
        Circle {
            center,
            radius,
            color,
            width,
        }
    }

    /// The bounding box of the circle.
    pub fn bounds(&self) -> Rect {
        let diameter = (self.radius.max(0) as u32) * 2;
        Rect::from_center(sdl2::rect::Point::from(self.center), diameter, diameter)
    }

    /// True if `point` lies inside the circle (integer distance, like the
    /// drawing itself). With `only_border` the test passes only within the
    /// ring `radius - width + 1 ..= radius`.
    pub fn collide_point(&self, point: Point, only_border: bool) -> bool {
        let dist = self.center.distance(point) as i32;
        if only_border {
            dist <= self.radius && dist >= self.radius - self.width as i32 + 1
        } else {
            dist <= self.radius
        }
    }

    /// Draws the circle with horizontal scanline rects.
    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<()> {
        if self.radius <= 0 {
            return Ok(());
        }
        canvas.set_draw_color(self.color);

        let cx = self.center.x.round() as i32;
        let cy = self.center.y.round() as i32;
        let r = self.radius;
        // Inner radius of the ring; filled discs have no hole.
        let inner = if self.width == 0 {
            -1
        } else {
            r - self.width as i32
        };

        for dy in -r..=r {
            let outer_half = half_span(r, dy);
            if inner < 0 || dy.abs() > inner {
                // Full span: outside the hole rows.
                canvas.fill_rect(Rect::new(
                    cx - outer_half,
                    cy + dy,
                    (outer_half * 2 + 1) as u32,
                    1,
                ))?;
            } else {
                // Two segments around the hole.
                let inner_half = half_span(inner, dy);
                let segment = outer_half - inner_half;
                if segment > 0 {
                    canvas.fill_rect(Rect::new(cx - outer_half, cy + dy, segment as u32, 1))?;
                    canvas.fill_rect(Rect::new(cx + inner_half + 1, cy + dy, segment as u32, 1))?;
                }
            }
        }
        Ok(())
    }
}

/// Half-width of the scanline at vertical offset `dy` inside radius `r`.
fn half_span(r: i32, dy: i32) -> i32 {
    ((r * r - dy * dy).max(0) as f32).sqrt() as i32
}

impl Render for Circle {
    fn render(&self, canvas: &mut Canvas<Window>) -> Result<()> {
        Circle::render(self, canvas)
    }
}

/// A short-lived moving circle used for visual effects.
///
/// Each [`update`](Particle::update) moves the particle by its velocity,
/// counts an optional lifetime down (dead at 0), and shrinks the radius on
/// the decay cadence (dead when the radius reaches 0). Dead particles stop
/// moving and stop drawing.
///
/// # Example
///
/// ```
/// use sdl2::pixels::Color;
/// use sdl2_tools::{Particle, Point};
///
/// let mut spark = Particle::new(Point::ZERO, 6, Color::RGB(255, 200, 50), Point::new(2.0, -1.0))
///     .with_lifetime(30);
/// for _ in 0..30 {
///     spark.update();
/// }
/// assert!(!spark.alive);
/// ```
#[derive(Debug, Clone)]
pub struct Particle {
    pub circle: Circle,
    pub velocity: Point,
    lifetime: Option<u32>,
    radius_decrement: Option<i32>,
    decay_ticker: Ticker,
    pub alive: bool,
}

impl Particle {
    /// Creates a particle that lives until explicitly killed or fully
    /// decayed.
    pub fn new(center: Point, radius: i32, color: Color, velocity: Point) -> Particle {
        Particle {
            circle: Circle::new(center, radius, color),
            velocity,
            lifetime: None,
            radius_decrement: None,
            decay_ticker: Ticker::new(1),
            alive: true,
        }
    }

    /// Kills the particle after `frames` updates.
    pub fn with_lifetime(mut self, frames: u32) -> Particle {
        self.lifetime = Some(frames);
        self
    }

    /// Shrinks the radius by `amount` every `every_n_frames` updates; the
    /// particle dies when the radius reaches 0. The first shrink happens
    /// a full cadence after the first update.
    pub fn with_radius_decay(mut self, amount: i32, every_n_frames: u32) -> Particle {
        self.radius_decrement = Some(amount);
        self.decay_ticker = Ticker::new(every_n_frames).with_start(every_n_frames);
        self
    }

    /// Advances the particle by one frame.
    pub fn update(&mut self) {
        if !self.alive {
            return;
        }
        self.circle.center += self.velocity;

        if let Some(lifetime) = &mut self.lifetime {
            *lifetime = lifetime.saturating_sub(1);
            if *lifetime == 0 {
                self.alive = false;
            }
        }

        if let Some(amount) = self.radius_decrement {
            if self.decay_ticker.tick() {
                self.circle.radius -= amount;
                if self.circle.radius <= 0 {
                    self.alive = false;
                }
            }
        }
    }

    pub fn remaining_lifetime(&self) -> Option<u32> {
        self.lifetime
    }

    /// Draws the particle; dead particles draw nothing.
    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<()> {
        if !self.alive {
            return Ok(());
        }
        self.circle.render(canvas)
    }
}

impl Update for Particle {
    fn update(&mut self) {
        Particle::update(self)
    }
}

impl Render for Particle {
    fn render(&self, canvas: &mut Canvas<Window>) -> Result<()> {
        Particle::render(self, canvas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn white() -> Color {
        Color::RGB(255, 255, 255)
    }

    #[test]
    fn test_collide_point_inside_and_outside() {
        let circle = Circle::new(Point::new(10.0, 10.0), 5, white());
        assert!(circle.collide_point(Point::new(10.0, 10.0), false));
        assert!(circle.collide_point(Point::new(14.0, 10.0), false));
        assert!(circle.collide_point(Point::new(10.0, 15.0), false));
        assert!(!circle.collide_point(Point::new(16.0, 10.0), false));
    }

    #[test]
    fn test_collide_point_border_only() {
        let circle = Circle::outlined(Point::ZERO, 10, white(), 2);
        // Ring spans integer distances 9..=10.
        assert!(circle.collide_point(Point::new(10.0, 0.0), true));
        assert!(circle.collide_point(Point::new(9.0, 0.0), true));
        assert!(!circle.collide_point(Point::new(8.0, 0.0), true));
        assert!(!circle.collide_point(Point::new(11.0, 0.0), true));
    }

    #[test]
    fn test_bounds_centered() {
        let circle = Circle::new(Point::new(10.0, 20.0), 5, white());
        let bounds = circle.bounds();
        assert_eq!(bounds.width(), 10);
        assert_eq!(bounds.center(), sdl2::rect::Point::new(10, 20));
    }

    #[test]
    fn test_half_span_shrinks_toward_poles() {
        assert_eq!(half_span(5, 0), 5);
        assert_eq!(half_span(5, 5), 0);
        assert!(half_span(5, 3) <= 4);
    }

    #[test]
    fn test_particle_moves_by_velocity() {
        let mut particle = Particle::new(Point::ZERO, 4, white(), Point::new(2.0, -1.5));
        particle.update();
        particle.update();
        assert_eq!(particle.circle.center, Point::new(4.0, -3.0));
    }

    #[test]
    fn test_particle_lifetime_expires() {
        let mut particle =
            Particle::new(Point::ZERO, 4, white(), Point::new(1.0, 0.0)).with_lifetime(3);
        particle.update();
        particle.update();
        assert!(particle.alive);
        particle.update();
        assert!(!particle.alive);
        // Dead particles stop moving.
        let frozen = particle.circle.center;
        particle.update();
        assert_eq!(particle.circle.center, frozen);
    }

    #[test]
    fn test_particle_radius_decay_kills() {
        let mut particle =
            Particle::new(Point::ZERO, 2, white(), Point::ZERO).with_radius_decay(1, 2);
        // Shrinks on updates 2 and 4.
        particle.update();
        assert_eq!(particle.circle.radius, 2);
        particle.update();
        assert_eq!(particle.circle.radius, 1);
        assert!(particle.alive);
        particle.update();
        particle.update();
        assert_eq!(particle.circle.radius, 0);
        assert!(!particle.alive);
    }

    #[test]
    fn test_immortal_particle_stays_alive() {
        let mut particle = Particle::new(Point::ZERO, 4, white(), Point::new(1.0, 1.0));
        for _ in 0..1000 {
            particle.update();
        }
        assert!(particle.alive);
    }
}
