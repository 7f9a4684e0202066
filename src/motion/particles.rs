//! Drifting dots joined by fading lines, pushed around by the pointer.

use std::f64::consts::TAU;

use rand::Rng;

use super::frame::{sample, FrameClock, Pointer};
use super::{Surface, Variant};

const AREA_UNIT: f64 = 100_000.0;
const WRAP_MARGIN: f64 = 10.0;
const FRICTION: f64 = 0.995;
const MAX_LINE_ALPHA: f64 = 0.9;
const CURSOR_LINK_SCALE: f64 = 0.8;

#[derive(Debug, Clone, PartialEq)]
pub struct ParticleConfig {
    /// Roughly particles per 100k px².
    pub density: f64,
    pub size_range: (f64, f64),
    /// Base speed in px/s.
    pub speed: f64,
    /// 0 disables lines.
    pub connect_distance: f64,
    /// 0 disables pointer influence.
    pub cursor_radius: f64,
    /// Positive pushes particles away from the pointer, negative pulls them in.
    pub cursor_force: f64,
    pub opacity: f64,
    pub variant: Variant,
    /// Overrides the variant colour for dots and lines.
    pub color: Option<String>,
    pub min_count: usize,
    pub max_count: usize,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        ParticleConfig {
            density: 18.0,
            size_range: (1.2, 2.6),
            speed: 30.0,
            connect_distance: 120.0,
            cursor_radius: 140.0,
            cursor_force: -30.0,
            opacity: 1.0,
            variant: Variant::Dark,
            color: None,
            min_count: 12,
            max_count: 240,
        }
    }
}

impl ParticleConfig {
    pub fn dot_color(&self) -> String {
        self.color.clone().unwrap_or_else(|| self.variant.rgba(0.9))
    }

    pub fn line_color(&self) -> String {
        self.color.clone().unwrap_or_else(|| self.variant.rgba(0.85))
    }

    pub fn cursor_line_color(&self) -> String {
        self.color.clone().unwrap_or_else(|| self.variant.rgba(0.7))
    }
}

/// Number of particles for a measured area. A zero area gets none.
pub fn particle_count(width: f64, height: f64, density: f64, min: usize, max: usize) -> usize {
    let area = width.max(0.0) * height.max(0.0);
    if area <= 0.0 {
        return 0;
    }
    let target = (area / AREA_UNIT * density).round().max(0.0) as usize;
    target.clamp(min, max.max(min))
}

/// Line opacity for two points `d2` apart (squared), before global opacity.
/// `None` past the threshold.
pub fn line_alpha(d2: f64, max_distance: f64) -> Option<f64> {
    let m2 = max_distance * max_distance;
    if d2 > m2 || m2 <= 0.0 {
        return None;
    }
    Some((1.0 - d2 / m2) * MAX_LINE_ALPHA)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub r: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub alpha: f64,
}

#[derive(Debug, Clone)]
pub struct ParticleField {
    config: ParticleConfig,
    width: f64,
    height: f64,
    particles: Vec<Particle>,
    clock: FrameClock,
}

impl ParticleField {
    pub fn new(config: ParticleConfig) -> Self {
        ParticleField {
            config,
            width: 0.0,
            height: 0.0,
            particles: Vec::new(),
            clock: FrameClock::new(),
        }
    }

    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Rebuilds the whole population for a new measured size.
    pub fn resize<R: Rng + ?Sized>(&mut self, width: f64, height: f64, rng: &mut R) {
        self.width = width.max(0.0).floor();
        self.height = height.max(0.0).floor();
        let cfg = &self.config;
        let count = particle_count(self.width, self.height, cfg.density, cfg.min_count, cfg.max_count);

        self.particles = (0..count)
            .map(|_| {
                let r = sample(rng, cfg.size_range);
                let angle = rng.gen::<f64>() * TAU;
                let v = sample(rng, (0.6, 1.4)) * cfg.speed / 60.0;
                Particle {
                    x: sample(rng, (0.0, self.width)),
                    y: sample(rng, (0.0, self.height)),
                    vx: angle.cos() * v,
                    vy: angle.sin() * v,
                    r,
                }
            })
            .collect();
    }

    /// Call when the loop (re)starts so the first frame does not jump.
    pub fn restart(&mut self) {
        self.clock.reset();
    }

    fn cursor(&self, pointer: Option<Pointer>) -> Option<Pointer> {
        pointer.filter(|_| self.config.cursor_radius > 0.0 && self.config.cursor_force != 0.0)
    }

    /// Advances one animation frame.
    pub fn step(&mut self, ts: f64, pointer: Option<Pointer>) {
        let dt = self.clock.tick(ts);
        let cursor = self.cursor(pointer);
        let radius = self.config.cursor_radius;
        let force = self.config.cursor_force / 60.0;
        let (w, h) = (self.width, self.height);

        for p in &mut self.particles {
            if let Some(c) = cursor {
                let dx = p.x - c.x;
                let dy = p.y - c.y;
                let d2 = dx * dx + dy * dy;
                if d2 > 0.0001 && d2 < radius * radius {
                    let d = d2.sqrt();
                    let strength = (1.0 - d / radius) * force;
                    p.vx += dx / d * strength;
                    p.vy += dy / d * strength;
                }
            }

            p.x += p.vx * dt;
            p.y += p.vy * dt;

            if p.x < -WRAP_MARGIN {
                p.x = w + WRAP_MARGIN;
            } else if p.x > w + WRAP_MARGIN {
                p.x = -WRAP_MARGIN;
            }
            if p.y < -WRAP_MARGIN {
                p.y = h + WRAP_MARGIN;
            } else if p.y > h + WRAP_MARGIN {
                p.y = -WRAP_MARGIN;
            }

            p.vx *= FRICTION;
            p.vy *= FRICTION;
        }
    }

    /// Lines between close particle pairs.
    pub fn links(&self) -> Vec<Link> {
        let max = self.config.connect_distance;
        if max <= 0.0 {
            return Vec::new();
        }
        let mut links = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let (dx, dy) = (a.x - b.x, a.y - b.y);
                if let Some(alpha) = line_alpha(dx * dx + dy * dy, max) {
                    links.push(Link { from: (a.x, a.y), to: (b.x, b.y), alpha });
                }
            }
        }
        links
    }

    /// Lines from particles to the pointer, over a shorter reach.
    pub fn pointer_links(&self, pointer: Option<Pointer>) -> Vec<Link> {
        let max = self.config.connect_distance * CURSOR_LINK_SCALE;
        let Some(c) = self.cursor(pointer).filter(|_| self.config.connect_distance > 0.0) else {
            return Vec::new();
        };
        self.particles
            .iter()
            .filter_map(|p| {
                let (dx, dy) = (p.x - c.x, p.y - c.y);
                line_alpha(dx * dx + dy * dy, max).map(|alpha| Link { from: (p.x, p.y), to: (c.x, c.y), alpha })
            })
            .collect()
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, pointer: Option<Pointer>) {
        let opacity = self.config.opacity;
        surface.clear(self.width, self.height);
        surface.set_fill(&self.config.dot_color());
        surface.set_alpha(opacity);
        for p in &self.particles {
            surface.circle(p.x, p.y, p.r);
        }

        let links = self.links();
        if !links.is_empty() {
            surface.set_stroke(&self.config.line_color());
            for link in links {
                surface.set_alpha(link.alpha * opacity);
                surface.line(link.from, link.to);
            }
        }
        let to_pointer = self.pointer_links(pointer);
        if !to_pointer.is_empty() {
            surface.set_stroke(&self.config.cursor_line_color());
            for link in to_pointer {
                surface.set_alpha(link.alpha * opacity);
                surface.line(link.from, link.to);
            }
        }
    }

    #[cfg(test)]
    fn with_particles(config: ParticleConfig, width: f64, height: f64, particles: Vec<Particle>) -> Self {
        ParticleField { config, width, height, particles, clock: FrameClock::new() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::testing::{Op, Recorder};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn still(x: f64, y: f64) -> Particle {
        Particle { x, y, vx: 0.0, vy: 0.0, r: 1.0 }
    }

    #[test]
    fn count_is_clamped() {
        assert_eq!(particle_count(100.0, 100.0, 18.0, 12, 240), 12);
        assert_eq!(particle_count(1000.0, 1000.0, 18.0, 12, 240), 180);
        assert_eq!(particle_count(4000.0, 4000.0, 18.0, 12, 240), 240);
    }

    #[test]
    fn zero_area_has_no_particles() {
        assert_eq!(particle_count(0.0, 800.0, 18.0, 12, 240), 0);
        let mut field = ParticleField::new(ParticleConfig::default());
        field.resize(1200.0, 0.0, &mut StdRng::seed_from_u64(1));
        assert!(field.particles().is_empty());
    }

    #[test]
    fn resize_builds_particles_inside_bounds() {
        let mut field = ParticleField::new(ParticleConfig::default());
        field.resize(1280.7, 720.2, &mut StdRng::seed_from_u64(3));
        assert_eq!(field.size(), (1280.0, 720.0));
        assert_eq!(field.particles().len(), particle_count(1280.0, 720.0, 18.0, 12, 240));
        for p in field.particles() {
            assert!((0.0..1280.0).contains(&p.x));
            assert!((1.2..2.6).contains(&p.r));
            let v = (p.vx * p.vx + p.vy * p.vy).sqrt();
            assert!(v >= 0.6 * 30.0 / 60.0 - 1e-9 && v <= 1.4 * 30.0 / 60.0 + 1e-9);
        }
    }

    #[test]
    fn line_alpha_endpoints() {
        assert_eq!(line_alpha(0.0, 120.0), Some(0.9));
        assert_eq!(line_alpha(120.0 * 120.0, 120.0), Some(0.0));
        assert_eq!(line_alpha(120.0 * 120.0 + 1.0, 120.0), None);
        assert_eq!(line_alpha(0.0, 0.0), None);
    }

    #[test]
    fn particles_wrap_with_margin() {
        let mut field = ParticleField::with_particles(
            ParticleConfig::default(),
            100.0,
            100.0,
            vec![Particle { x: 110.0, y: -9.0, vx: 1.0, vy: -2.0, r: 1.0 }],
        );
        field.step(0.0, None);
        let p = field.particles()[0];
        assert_eq!(p.x, -10.0);
        assert_eq!(p.y, 110.0);
        assert!((p.vx - 0.995).abs() < 1e-12);
    }

    #[test]
    fn negative_force_pulls_toward_pointer() {
        let mut field = ParticleField::with_particles(ParticleConfig::default(), 500.0, 500.0, vec![still(110.0, 100.0)]);
        field.step(0.0, Pointer::new(100.0, 100.0));
        let p = field.particles()[0];
        let expected = (1.0 - 10.0 / 140.0) * (-30.0 / 60.0) * 0.995;
        assert!((p.vx - expected).abs() < 1e-12, "vx {}", p.vx);
        assert_eq!(p.vy, 0.0);
    }

    #[test]
    fn positive_force_pushes_away() {
        let config = ParticleConfig { cursor_force: 30.0, ..ParticleConfig::default() };
        let mut field = ParticleField::with_particles(config, 500.0, 500.0, vec![still(110.0, 100.0)]);
        field.step(0.0, Pointer::new(100.0, 100.0));
        assert!(field.particles()[0].vx > 0.0);
    }

    #[test]
    fn pointer_on_top_of_particle_is_ignored() {
        let mut field = ParticleField::with_particles(ParticleConfig::default(), 500.0, 500.0, vec![still(100.0, 100.0)]);
        field.step(0.0, Pointer::new(100.0, 100.0));
        assert_eq!(field.particles()[0].vx, 0.0);
    }

    #[test]
    fn links_only_within_distance() {
        let field = ParticleField::with_particles(
            ParticleConfig::default(),
            500.0,
            500.0,
            vec![still(0.0, 0.0), still(60.0, 0.0), still(400.0, 400.0)],
        );
        let links = field.links();
        assert_eq!(links.len(), 1);
        assert!((links[0].alpha - 0.9 * 0.75).abs() < 1e-12);
    }

    #[test]
    fn pointer_links_use_shorter_reach() {
        let field = ParticleField::with_particles(
            ParticleConfig::default(),
            500.0,
            500.0,
            vec![still(0.0, 0.0), still(100.0, 0.0)],
        );
        // 100 px is inside 120 but outside 0.8 * 120.
        let links = field.pointer_links(Pointer::new(0.0, 0.0));
        assert_eq!(links.len(), 1);
        assert!(field.pointer_links(None).is_empty());
    }

    #[test]
    fn disabled_connections_draw_no_lines() {
        let config = ParticleConfig { connect_distance: 0.0, ..ParticleConfig::default() };
        let field = ParticleField::with_particles(config, 100.0, 100.0, vec![still(0.0, 0.0), still(1.0, 1.0)]);
        let mut rec = Recorder::default();
        field.draw(&mut rec, Pointer::new(0.5, 0.5));
        assert_eq!(rec.count(&Op::Line), 0);
        assert_eq!(rec.count(&Op::Circle), 2);
        assert_eq!(rec.ops[0], Op::Clear);
    }

    #[test]
    fn colour_override_applies_everywhere() {
        let config = ParticleConfig { color: Some("red".into()), ..ParticleConfig::default() };
        assert_eq!(config.dot_color(), "red");
        assert_eq!(config.cursor_line_color(), "red");
        assert_eq!(ParticleConfig::default().dot_color(), "rgba(255,255,255,0.9)");
    }
}
