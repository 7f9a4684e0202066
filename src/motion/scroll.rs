use std::f64::consts::PI;

/// Scroll offset past which the scroll-to-top button shows.
pub const SHOW_AFTER_PX: f64 = 300.0;

/// Fraction of the document scrolled, in `0.0..=1.0`.
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let max = (scroll_height - client_height).max(1.0);
    let p = scroll_top / max;
    if p.is_nan() {
        0.0
    } else {
        p.clamp(0.0, 1.0)
    }
}

/// Geometry of the circular progress ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    pub size: f64,
    pub stroke: f64,
}

impl Default for Ring {
    fn default() -> Self {
        Ring { size: 56.0, stroke: 4.0 }
    }
}

impl Ring {
    pub fn radius(&self) -> f64 {
        (self.size - self.stroke) / 2.0
    }

    pub fn center(&self) -> f64 {
        self.size / 2.0
    }

    pub fn circumference(&self) -> f64 {
        2.0 * PI * self.radius()
    }

    /// `stroke-dashoffset` for a progress value; full circumference hides the
    /// arc, zero draws the whole ring.
    pub fn dash_offset(&self, progress: f64) -> f64 {
        self.circumference() * (1.0 - progress.clamp(0.0, 1.0))
    }
}

/// What the floating button shows for one scroll position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    pub progress: f64,
    pub visible: bool,
}

impl ScrollState {
    pub fn measure(scroll_top: f64, scroll_height: f64, client_height: f64) -> Self {
        ScrollState {
            progress: scroll_progress(scroll_top, scroll_height, client_height),
            visible: scroll_top > SHOW_AFTER_PX,
        }
    }

    /// `aria-valuenow`, a whole percentage.
    pub fn percent(&self) -> u8 {
        (self.progress * 100.0).round() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unscrollable_page_reports_zero() {
        assert_eq!(scroll_progress(0.0, 800.0, 800.0), 0.0);
        assert_eq!(scroll_progress(0.0, 500.0, 800.0), 0.0);
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(scroll_progress(1200.0, 2000.0, 1000.0), 1.0);
        assert_eq!(scroll_progress(-40.0, 2000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(500.0, 2000.0, 1000.0), 0.5);
    }

    #[test]
    fn ring_geometry() {
        let ring = Ring::default();
        assert_eq!(ring.radius(), 26.0);
        let c = ring.circumference();
        assert!((c - 2.0 * PI * 26.0).abs() < 1e-12);
        assert_eq!(ring.dash_offset(0.0), c);
        assert_eq!(ring.dash_offset(1.0), 0.0);
        assert!((ring.dash_offset(0.25) - c * 0.75).abs() < 1e-12);
    }

    #[test]
    fn button_shows_past_threshold() {
        assert!(!ScrollState::measure(300.0, 5000.0, 1000.0).visible);
        assert!(ScrollState::measure(301.0, 5000.0, 1000.0).visible);
    }

    #[test]
    fn percent_rounds() {
        assert_eq!(ScrollState::measure(1000.0, 4000.0, 1000.0).percent(), 33);
        assert_eq!(ScrollState::measure(3000.0, 4000.0, 1000.0).percent(), 100);
    }
}
