//! Particle burst demo: click anywhere to spray a ring of decaying sparks.
//!
//! Run with `cargo run --example particles`.

use sdl2::mouse::MouseButton;
use sdl2::pixels::Color;
use sdl2_tools::{FrameContext, GameWindow, Group, Particle, Point, Render, Result, Screen, Update};

const SPARKS_PER_BURST: usize = 24;

struct ParticleDemo {
    bursts: Vec<Group<Particle>>,
}

impl ParticleDemo {
    fn spawn_burst(&mut self, center: Point) -> Result<()> {
        let sparks: Vec<Particle> = (0..SPARKS_PER_BURST)
            .map(|i| {
                let angle = i as f32 * std::f32::consts::TAU / SPARKS_PER_BURST as f32;
                let speed = 1.5 + (i % 3) as f32;
                Particle::new(
                    center,
                    5,
                    Color::RGB(255, 180 + (i % 3) as u8 * 25, 60),
                    Point::new(speed, 0.0).rotate(angle),
                )
                .with_lifetime(90)
                .with_radius_decay(1, 12)
            })
            .collect();
        self.bursts.push(Group::new(sparks)?);
        Ok(())
    }
}

impl Screen for ParticleDemo {
    fn update(&mut self, ctx: &mut FrameContext<'_>) -> Result<()> {
        ctx.canvas.set_draw_color(Color::RGB(10, 10, 25));
        ctx.canvas.clear();

        for burst in &mut self.bursts {
            burst.update();
            burst.render(ctx.canvas)?;
        }
        self.bursts.retain(|burst| burst.iter().any(|p| p.alive));
        Ok(())
    }

    fn mouse_button_down(
        &mut self,
        _ctx: &mut FrameContext<'_>,
        button: MouseButton,
        pos: Point,
    ) -> Result<()> {
        if button == MouseButton::Left {
            self.spawn_burst(pos)?;
        }
        Ok(())
    }

    fn key_down(
        &mut self,
        ctx: &mut FrameContext<'_>,
        keycode: sdl2::keyboard::Keycode,
    ) -> Result<()> {
        if keycode == sdl2::keyboard::Keycode::Escape {
            ctx.quit();
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    let mut window = GameWindow::new(
        "particles - click to burst",
        Point::new(800.0, 600.0),
        Some(Point::new(400.0, 300.0)),
        60,
    )?;
    let mut demo = ParticleDemo { bursts: Vec::new() };
    window.run(&mut demo)
}
