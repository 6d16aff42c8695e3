//! Confetti overlay shown after a perfect quiz or a like milestone

use crate::constants::{CELEBRATION_SECS, CONFETTI_COUNT};
use crate::theme;
use egui::{Color32, Pos2, Vec2};
use rand::Rng;

const GRAVITY: f32 = 420.0;

#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub pos: Pos2,
    pub vel: Vec2,
    pub size: f32,
    pub spin: f32,
    pub color: Color32,
}

impl Particle {
    /// Simple ballistic step
    pub fn step(&mut self, dt: f32) {
        self.vel.y += GRAVITY * dt;
        self.pos += self.vel * dt;
        self.spin += dt * 6.0;
    }
}

pub struct Celebration {
    pub particles: Vec<Particle>,
    pub elapsed: f32,
}

impl Celebration {
    /// Burst from the top edge of `area`
    pub fn burst<R: Rng>(rng: &mut R, area: egui::Rect) -> Self {
        let particles = (0..CONFETTI_COUNT)
            .map(|_| Particle {
                pos: egui::pos2(
                    rng.gen_range(area.left()..=area.right()),
                    area.top() - rng.gen_range(0.0..80.0),
                ),
                vel: egui::vec2(rng.gen_range(-120.0..120.0), rng.gen_range(-60.0..140.0)),
                size: rng.gen_range(4.0..9.0),
                spin: rng.gen_range(0.0..std::f32::consts::TAU),
                color: theme::CONFETTI[rng.gen_range(0..theme::CONFETTI.len())],
            })
            .collect();
        Self { particles, elapsed: 0.0 }
    }

    /// Advance the animation. Returns false once the overlay should close.
    pub fn step(&mut self, dt: f32) -> bool {
        self.elapsed += dt;
        for p in &mut self.particles {
            p.step(dt);
        }
        self.elapsed < CELEBRATION_SECS
    }

    pub fn alpha(&self) -> f32 {
        let fade_from = CELEBRATION_SECS - 0.5;
        if self.elapsed <= fade_from {
            1.0
        } else {
            ((CELEBRATION_SECS - self.elapsed) / 0.5).clamp(0.0, 1.0)
        }
    }

    pub fn paint(&self, painter: &egui::Painter) {
        let alpha = self.alpha();
        for p in &self.particles {
            let half = egui::vec2(p.size, p.size * 0.5 * p.spin.cos().abs().max(0.2));
            let rect = egui::Rect::from_center_size(p.pos, half * 2.0);
            painter.rect_filled(rect, 1.0, p.color.gamma_multiply(alpha));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn area() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(800.0, 600.0))
    }

    #[test]
    fn test_burst_spawns_inside_horizontal_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let c = Celebration::burst(&mut rng, area());
        assert_eq!(c.particles.len(), CONFETTI_COUNT);
        assert!(c.particles.iter().all(|p| p.pos.x >= 0.0 && p.pos.x <= 800.0 && p.pos.y <= 0.0));
    }

    #[test]
    fn test_particles_fall() {
        let mut p = Particle {
            pos: egui::pos2(0.0, 0.0),
            vel: egui::vec2(0.0, 0.0),
            size: 5.0,
            spin: 0.0,
            color: Color32::WHITE,
        };
        p.step(0.1);
        p.step(0.1);
        assert!(p.pos.y > 0.0);
        assert!(p.vel.y > 0.0);
    }

    #[test]
    fn test_overlay_closes_after_duration() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut c = Celebration::burst(&mut rng, area());
        assert!(c.step(1.0));
        assert_eq!(c.alpha(), 1.0);
        assert!(!c.step(CELEBRATION_SECS));
        assert_eq!(c.alpha(), 0.0);
    }
}
