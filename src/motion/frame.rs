use rand::Rng;

/// Nominal frame length the per-frame velocities are tuned for (60 fps).
pub const BASE_FRAME_MS: f64 = 16.67;

const MIN_DT: f64 = 0.5;
const MAX_DT: f64 = 1.5;

/// Turns animation-frame timestamps into a frame-rate independent step
/// multiplier.
#[derive(Debug, Default, Clone)]
pub struct FrameClock {
    last: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the previous timestamp; the next tick yields exactly 1.0.
    pub fn reset(&mut self) {
        self.last = None;
    }

    pub fn tick(&mut self, ts: f64) -> f64 {
        let dt = match self.last {
            Some(last) => ((ts - last) / BASE_FRAME_MS).clamp(MIN_DT, MAX_DT),
            None => 1.0,
        };
        self.last = Some(ts);
        dt
    }
}

/// Pointer position relative to the animated surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

impl Pointer {
    pub fn new(x: f64, y: f64) -> Option<Self> {
        (x.is_finite() && y.is_finite()).then_some(Pointer { x, y })
    }
}

/// Uniform sample in `[min, max)`; a collapsed or inverted range returns `min`.
pub fn sample<R: Rng + ?Sized>(rng: &mut R, (min, max): (f64, f64)) -> f64 {
    if max > min {
        min + rng.gen::<f64>() * (max - min)
    } else {
        min
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn first_tick_is_one() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick(1234.0), 1.0);
    }

    #[test]
    fn dt_is_clamped() {
        let mut clock = FrameClock::new();
        clock.tick(0.0);
        assert_eq!(clock.tick(1.0), MIN_DT);
        assert_eq!(clock.tick(1000.0), MAX_DT);
        let dt = clock.tick(1000.0 + BASE_FRAME_MS);
        assert!((dt - 1.0).abs() < 1e-9);
    }

    #[test]
    fn reset_restarts_at_one() {
        let mut clock = FrameClock::new();
        clock.tick(0.0);
        clock.tick(16.0);
        clock.reset();
        assert_eq!(clock.tick(5000.0), 1.0);
    }

    #[test]
    fn pointer_rejects_nan() {
        assert!(Pointer::new(f64::NAN, 1.0).is_none());
        assert_eq!(Pointer::new(1.0, 2.0), Some(Pointer { x: 1.0, y: 2.0 }));
    }

    #[test]
    fn sample_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let v = sample(&mut rng, (1.2, 2.6));
            assert!((1.2..2.6).contains(&v));
        }
        assert_eq!(sample(&mut rng, (3.0, 3.0)), 3.0);
    }
}
