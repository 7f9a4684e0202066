//! Falling grain field in parallax layers.

use std::f64::consts::TAU;

use rand::Rng;

use super::frame::{sample, FrameClock, Pointer};
use super::{Surface, Variant};

const AREA_UNIT: f64 = 100_000.0;
const MIN_TOTAL: usize = 40;
const MAX_TOTAL: usize = 1200;
const MIN_PER_LAYER: usize = 8;
const LAYER_STEP: f64 = 0.35;
const WRAP_MARGIN: f64 = 4.0;
const PIXEL_GRAIN: f64 = 1.2;

/// CSS mask that fades the canvas out towards its edges.
pub const EDGE_MASK: &str = "radial-gradient(120% 120% at 50% 50%, black, transparent 85%)";

#[derive(Debug, Clone, PartialEq)]
pub struct SandConfig {
    /// Grains per 100k px².
    pub density: f64,
    pub size_range: (f64, f64),
    /// Fall speed range, px/s.
    pub speed_y: (f64, f64),
    /// Base wind range, px/s.
    pub wind_x: (f64, f64),
    /// Sway amplitude, px/s.
    pub jitter: f64,
    /// Horizontal push away from the pointer.
    pub cursor_push: f64,
    pub cursor_radius: f64,
    pub layers: usize,
    pub opacity: f64,
    pub mask_fade: bool,
    pub variant: Variant,
    pub color: Option<String>,
}

impl Default for SandConfig {
    fn default() -> Self {
        SandConfig {
            density: 60.0,
            size_range: (0.8, 1.8),
            speed_y: (12.0, 36.0),
            wind_x: (-6.0, 6.0),
            jitter: 10.0,
            cursor_push: 60.0,
            cursor_radius: 140.0,
            layers: 2,
            opacity: 0.9,
            mask_fade: true,
            variant: Variant::Dark,
            color: None,
        }
    }
}

impl SandConfig {
    pub fn grain_color(&self) -> String {
        self.color.clone().unwrap_or_else(|| self.variant.rgba(0.9))
    }
}

/// Grains per layer for a measured area.
pub fn grains_per_layer(width: f64, height: f64, density: f64, layers: usize) -> usize {
    let total = ((width.max(0.0) * height.max(0.0) / AREA_UNIT * density).round().max(0.0) as usize)
        .clamp(MIN_TOTAL, MAX_TOTAL);
    let per_layer = (total as f64 / layers.max(1) as f64).round() as usize;
    per_layer.max(MIN_PER_LAYER)
}

pub fn layer_scale(layer: usize) -> f64 {
    1.0 + layer as f64 * LAYER_STEP
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grain {
    pub x: f64,
    pub y: f64,
    pub vy: f64,
    pub vx_base: f64,
    pub size: f64,
    pub phase: f64,
    pub freq: f64,
    pub layer: usize,
}

#[derive(Debug, Clone)]
pub struct SandField {
    config: SandConfig,
    width: f64,
    height: f64,
    grains: Vec<Grain>,
    clock: FrameClock,
}

impl SandField {
    pub fn new(config: SandConfig) -> Self {
        SandField { config, width: 0.0, height: 0.0, grains: Vec::new(), clock: FrameClock::new() }
    }

    pub fn config(&self) -> &SandConfig {
        &self.config
    }

    pub fn grains(&self) -> &[Grain] {
        &self.grains
    }

    pub fn resize<R: Rng + ?Sized>(&mut self, width: f64, height: f64, rng: &mut R) {
        self.width = width.max(1.0).floor();
        self.height = height.max(1.0).floor();
        let cfg = &self.config;
        let per_layer = grains_per_layer(self.width, self.height, cfg.density, cfg.layers);

        let mut grains = Vec::with_capacity(per_layer * cfg.layers);
        for layer in 0..cfg.layers {
            let scale = layer_scale(layer);
            for _ in 0..per_layer {
                grains.push(Grain {
                    x: sample(rng, (0.0, self.width)),
                    y: sample(rng, (0.0, self.height)),
                    vy: sample(rng, cfg.speed_y) * scale / 60.0,
                    vx_base: sample(rng, cfg.wind_x) * scale / 60.0,
                    size: sample(rng, cfg.size_range) * scale,
                    phase: sample(rng, (0.0, TAU)),
                    freq: sample(rng, (0.4, 1.2)),
                    layer,
                });
            }
        }
        self.grains = grains;
    }

    pub fn restart(&mut self) {
        self.clock.reset();
    }

    pub fn step<R: Rng + ?Sized>(&mut self, ts: f64, pointer: Option<Pointer>, rng: &mut R) {
        let dt = self.clock.tick(ts);
        let jitter = self.config.jitter / 60.0;
        let push = self.config.cursor_push / 60.0;
        let radius = self.config.cursor_radius;
        let (w, h) = (self.width, self.height);

        for g in &mut self.grains {
            let mut vx = g.vx_base + (ts * 0.001 * g.freq + g.phase).sin() * jitter;

            if let Some(c) = pointer {
                let dx = g.x - c.x;
                let dy = g.y - c.y;
                let d2 = dx * dx + dy * dy;
                if d2 < radius * radius {
                    let d = match d2.sqrt() {
                        d if d > 0.0 => d,
                        _ => 1.0,
                    };
                    vx += dx / d * ((radius - d) / radius) * push;
                }
            }

            g.x += vx * dt;
            g.y += g.vy * dt;

            if g.y > h + WRAP_MARGIN {
                g.y = -WRAP_MARGIN;
                g.x = sample(rng, (0.0, w));
            }
            if g.x < -WRAP_MARGIN {
                g.x = w + WRAP_MARGIN;
            } else if g.x > w + WRAP_MARGIN {
                g.x = -WRAP_MARGIN;
            }
        }
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.clear(self.width, self.height);
        surface.set_alpha(self.config.opacity);
        surface.set_fill(&self.config.grain_color());
        for g in &self.grains {
            if g.size <= PIXEL_GRAIN {
                surface.rect(g.x, g.y, 1.0, 1.0);
            } else {
                surface.circle(g.x, g.y, g.size * 0.5);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::testing::{Op, Recorder};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn grain(x: f64, y: f64, size: f64) -> Grain {
        Grain { x, y, vy: 0.0, vx_base: 0.0, size, phase: 0.0, freq: 0.0, layer: 0 }
    }

    fn field_with(config: SandConfig, w: f64, h: f64, grains: Vec<Grain>) -> SandField {
        SandField { config, width: w, height: h, grains, clock: FrameClock::new() }
    }

    #[test]
    fn totals_are_clamped_and_split_per_layer() {
        // tiny area: total clamps to 40, split over 2 layers
        assert_eq!(grains_per_layer(10.0, 10.0, 60.0, 2), 20);
        // huge area: total clamps to 1200
        assert_eq!(grains_per_layer(10_000.0, 10_000.0, 60.0, 3), 400);
        // never below 8 per layer
        assert_eq!(grains_per_layer(10.0, 10.0, 60.0, 10), 8);
        assert_eq!(grains_per_layer(10.0, 10.0, 60.0, 0), 40);
    }

    #[test]
    fn back_layers_are_faster_and_bigger() {
        let mut field = SandField::new(SandConfig { layers: 2, ..SandConfig::default() });
        field.resize(800.0, 600.0, &mut StdRng::seed_from_u64(11));
        let per_layer = grains_per_layer(800.0, 600.0, 60.0, 2);
        assert_eq!(field.grains().len(), per_layer * 2);
        for g in field.grains() {
            let scale = layer_scale(g.layer);
            assert!(g.size >= 0.8 * scale - 1e-9 && g.size < 1.8 * scale);
            assert!(g.vy >= 12.0 * scale / 60.0 - 1e-9);
        }
        assert!((layer_scale(1) - 1.35).abs() < 1e-12);
    }

    #[test]
    fn grains_falling_out_reappear_at_top() {
        let mut g = grain(50.0, 104.5, 1.0);
        g.vy = 1.0;
        let mut field = field_with(SandConfig { jitter: 0.0, ..SandConfig::default() }, 100.0, 100.0, vec![g]);
        field.step(0.0, None, &mut StdRng::seed_from_u64(2));
        let g = field.grains()[0];
        assert_eq!(g.y, -4.0);
        assert!((0.0..100.0).contains(&g.x));
    }

    #[test]
    fn horizontal_wrap_uses_small_margin() {
        let mut g = grain(-3.5, 10.0, 1.0);
        g.vx_base = -1.0;
        let mut field = field_with(SandConfig { jitter: 0.0, ..SandConfig::default() }, 100.0, 100.0, vec![g]);
        field.step(0.0, None, &mut StdRng::seed_from_u64(2));
        assert_eq!(field.grains()[0].x, 104.0);
    }

    #[test]
    fn pointer_pushes_sideways_only() {
        let cfg = SandConfig { jitter: 0.0, ..SandConfig::default() };
        let mut field = field_with(cfg, 500.0, 500.0, vec![grain(120.0, 100.0, 1.0)]);
        field.step(0.0, Pointer::new(100.0, 100.0), &mut StdRng::seed_from_u64(2));
        let g = field.grains()[0];
        let expected = ((140.0 - 20.0) / 140.0) * 1.0;
        assert!((g.x - (120.0 + expected)).abs() < 1e-9);
        assert_eq!(g.y, 100.0);
    }

    #[test]
    fn small_grains_draw_as_pixels() {
        let field = field_with(
            SandConfig::default(),
            100.0,
            100.0,
            vec![grain(1.0, 1.0, 1.2), grain(2.0, 2.0, 1.5)],
        );
        let mut rec = Recorder::default();
        field.draw(&mut rec);
        assert_eq!(rec.count(&Op::Rect), 1);
        assert_eq!(rec.count(&Op::Circle), 1);
        assert_eq!(rec.ops[1], Op::Alpha(0.9));
    }
}
