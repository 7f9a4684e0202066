//! Endless rail: the content is rendered twice end to end and the offset is
//! kept inside one batch, so the seam never shows.

/// Longest step a single frame may take, in seconds. Larger gaps (tab in the
/// background, a long task) are treated as this.
const MAX_FRAME_SECS: f64 = 0.1;
/// Time constant of the release momentum decay, in seconds.
const MOMENTUM_DECAY_SECS: f64 = 0.35;
const MOMENTUM_FLOOR: f64 = 1.0;

/// Wraps `v` into `[min, max)`. Non-finite input and an empty range map to
/// `min`.
pub fn wrap(v: f64, min: f64, max: f64) -> f64 {
    let range = max - min;
    if !v.is_finite() || !range.is_finite() || range <= 0.0 {
        return min;
    }
    let w = min + ((v - min) % range + range) % range;
    if w >= max {
        min
    } else {
        w
    }
}

/// Length of one copy of the content given the doubled scroll extent.
pub fn batch_extent(scroll_extent: f64) -> f64 {
    if scroll_extent.is_finite() && scroll_extent > 0.0 {
        (scroll_extent / 2.0).round()
    } else {
        0.0
    }
}

/// Splits items into two rows, the first taking the extra item.
pub fn split_rows<T>(items: &[T]) -> (&[T], &[T]) {
    items.split_at(items.len().div_ceil(2))
}

/// Deals items round-robin into `n` columns.
pub fn distribute<T: Clone>(items: &[T], n: usize) -> Vec<Vec<T>> {
    let n = n.max(1);
    let mut columns = vec![Vec::new(); n];
    for (i, item) in items.iter().enumerate() {
        columns[i % n].push(item.clone());
    }
    columns
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Offset runs from 0 towards `-batch` (content moves left / up).
    #[default]
    Forward,
    /// Offset runs from `-batch` towards 0 (content moves right / down).
    Reverse,
}

impl Direction {
    fn sign(self) -> f64 {
        match self {
            Direction::Forward => -1.0,
            Direction::Reverse => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Speed {
    PxPerSec(f64),
    /// Seconds for one full batch regardless of its length.
    Cycle(f64),
}

impl Speed {
    pub fn px_per_sec(self, batch: f64) -> f64 {
        match self {
            Speed::PxPerSec(px) => px.max(0.0),
            Speed::Cycle(secs) if secs > 0.0 => batch / secs,
            Speed::Cycle(_) => 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    #[default]
    X,
    Y,
}

impl Axis {
    pub fn transform(self, offset: f64) -> String {
        match self {
            Axis::X => format!("translate3d({offset}px,0,0)"),
            Axis::Y => format!("translate3d(0,{offset}px,0)"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarqueeConfig {
    pub speed: Speed,
    pub direction: Direction,
    pub axis: Axis,
    /// Dragging towards positive positions is ignored.
    pub one_way_drag: bool,
    /// Carry the release velocity into the cruise.
    pub momentum: bool,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        MarqueeConfig {
            speed: Speed::PxPerSec(40.0),
            direction: Direction::Forward,
            axis: Axis::X,
            one_way_drag: false,
            momentum: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Drag {
    start: f64,
    origin: f64,
    last_pos: f64,
    last_ts: f64,
    /// px/s
    velocity: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Marquee {
    config: MarqueeConfig,
    batch: f64,
    offset: f64,
    last_ts: Option<f64>,
    paused: bool,
    drag: Option<Drag>,
    /// Extra px/s left over from a fling.
    momentum: f64,
}

impl Marquee {
    pub fn new(config: MarqueeConfig) -> Self {
        Marquee {
            config,
            batch: 0.0,
            offset: 0.0,
            last_ts: None,
            paused: false,
            drag: None,
            momentum: 0.0,
        }
    }

    pub fn config(&self) -> &MarqueeConfig {
        &self.config
    }

    pub fn batch(&self) -> f64 {
        self.batch
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn transform(&self) -> String {
        self.config.axis.transform(self.offset)
    }

    /// Nothing to scroll: the loop should not run.
    pub fn is_idle(&self) -> bool {
        self.batch <= 0.0
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Re-measures. The first measurement places the rail at its start
    /// (`-batch`, which shows the same frame as 0); later ones keep the
    /// current position.
    pub fn set_scroll_extent(&mut self, scroll_extent: f64) {
        let first = self.batch <= 0.0;
        self.batch = batch_extent(scroll_extent);
        if self.batch <= 0.0 {
            self.offset = 0.0;
            return;
        }
        self.offset = if first { -self.batch } else { self.wrapped(self.offset) };
    }

    fn wrapped(&self, v: f64) -> f64 {
        wrap(v, -self.batch, 0.0)
    }

    pub fn pause(&mut self) {
        self.paused = true;
        self.last_ts = None;
    }

    pub fn resume(&mut self) {
        self.paused = false;
        self.last_ts = None;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Advances to frame time `ts` (ms) and returns the new offset.
    pub fn tick(&mut self, ts: f64) -> f64 {
        if self.paused || self.drag.is_some() || self.is_idle() {
            self.last_ts = None;
            return self.offset;
        }
        let secs = match self.last_ts {
            Some(last) => ((ts - last) / 1000.0).clamp(0.0, MAX_FRAME_SECS),
            None => 0.0,
        };
        self.last_ts = Some(ts);

        let cruise = self.config.direction.sign() * self.config.speed.px_per_sec(self.batch);
        self.offset = self.wrapped(self.offset + (cruise + self.momentum) * secs);

        if self.momentum != 0.0 {
            self.momentum *= (-secs / MOMENTUM_DECAY_SECS).exp();
            if self.momentum.abs() < MOMENTUM_FLOOR {
                self.momentum = 0.0;
            }
        }
        self.offset
    }

    /// Pointer or touch went down at `pos` (page coordinate along the axis).
    pub fn drag_start(&mut self, pos: f64, ts: f64) {
        self.momentum = 0.0;
        self.last_ts = None;
        self.drag = Some(Drag { start: pos, origin: self.offset, last_pos: pos, last_ts: ts, velocity: 0.0 });
    }

    pub fn drag_move(&mut self, pos: f64, ts: f64) -> f64 {
        let Some(mut drag) = self.drag else {
            return self.offset;
        };
        let mut delta = pos - drag.start;
        if self.config.one_way_drag && delta > 0.0 {
            delta = 0.0;
        }
        if ts > drag.last_ts {
            drag.velocity = (pos - drag.last_pos) / (ts - drag.last_ts) * 1000.0;
        }
        drag.last_pos = pos;
        drag.last_ts = ts;
        self.drag = Some(drag);

        if !self.is_idle() {
            self.offset = self.wrapped(drag.origin + delta);
        }
        self.offset
    }

    pub fn drag_end(&mut self) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        self.last_ts = None;
        if self.config.momentum {
            let mut velocity = drag.velocity;
            if self.config.one_way_drag && velocity > 0.0 {
                velocity = 0.0;
            }
            self.momentum = velocity;
        }
    }

    pub fn momentum(&self) -> f64 {
        self.momentum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rail(config: MarqueeConfig, extent: f64) -> Marquee {
        let mut m = Marquee::new(config);
        m.set_scroll_extent(extent);
        m
    }

    #[test]
    fn wrap_lands_in_half_open_range() {
        let w = 800.0;
        for v in [-2400.0, -800.0, -799.5, -1.0, 0.0, 0.5, 799.0, 12345.6, -1e9] {
            let r = wrap(v, -w, 0.0);
            assert!(r >= -w && r < 0.0, "{v} wrapped to {r}");
        }
        assert_eq!(wrap(0.0, -800.0, 0.0), -800.0);
        assert_eq!(wrap(-100.0, -800.0, 0.0), -100.0);
        assert_eq!(wrap(100.0, -800.0, 0.0), -700.0);
    }

    #[test]
    fn wrap_guards_degenerate_input() {
        assert_eq!(wrap(f64::NAN, -10.0, 0.0), -10.0);
        assert_eq!(wrap(f64::INFINITY, -10.0, 0.0), -10.0);
        assert_eq!(wrap(5.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn batch_is_half_the_doubled_extent() {
        assert_eq!(batch_extent(1601.0), 801.0);
        assert_eq!(batch_extent(0.0), 0.0);
        assert_eq!(batch_extent(f64::NAN), 0.0);
    }

    #[test]
    fn rows_split_at_ceiling_half() {
        let items = [1, 2, 3, 4, 5];
        let (a, b) = split_rows(&items);
        assert_eq!(a, &[1, 2, 3]);
        assert_eq!(b, &[4, 5]);
        let empty: [u8; 0] = [];
        assert_eq!(split_rows(&empty).0.len(), 0);
    }

    #[test]
    fn columns_are_dealt_round_robin() {
        let cols = distribute(&[0, 1, 2, 3, 4, 5, 6, 7, 8], 3);
        assert_eq!(cols, vec![vec![0, 3, 6], vec![1, 4, 7], vec![2, 5, 8]]);
    }

    #[test]
    fn forward_rail_moves_left_at_speed() {
        let mut m = rail(MarqueeConfig::default(), 2000.0);
        assert_eq!(m.offset(), -1000.0);
        m.tick(0.0);
        let off = m.tick(50.0);
        assert!((off - (-2.0)).abs() < 1e-9, "offset {off}");
    }

    #[test]
    fn reverse_rail_starts_at_minus_batch_and_moves_right() {
        let cfg = MarqueeConfig { direction: Direction::Reverse, ..MarqueeConfig::default() };
        let mut m = rail(cfg, 2000.0);
        assert_eq!(m.offset(), -1000.0);
        m.tick(0.0);
        assert!(m.tick(100.0) > -1000.0);
    }

    #[test]
    fn cycle_speed_scales_with_batch() {
        assert_eq!(Speed::Cycle(30.0).px_per_sec(600.0), 20.0);
        assert_eq!(Speed::Cycle(0.0).px_per_sec(600.0), 0.0);
    }

    #[test]
    fn offset_never_leaves_batch() {
        let mut m = rail(MarqueeConfig { speed: Speed::PxPerSec(5000.0), ..MarqueeConfig::default() }, 300.0);
        for frame in 0..200 {
            let off = m.tick(frame as f64 * 16.0);
            assert!((-150.0..0.0).contains(&off), "frame {frame}: {off}");
        }
    }

    #[test]
    fn empty_content_is_idle() {
        let mut m = rail(MarqueeConfig::default(), 0.0);
        assert!(m.is_idle());
        m.tick(0.0);
        assert_eq!(m.tick(1000.0), 0.0);
    }

    #[test]
    fn long_gaps_are_capped() {
        let mut m = rail(MarqueeConfig::default(), 20_000.0);
        m.tick(0.0);
        let off = m.tick(60_000.0);
        assert!((off - (-4.0)).abs() < 1e-9);
    }

    #[test]
    fn paused_rail_holds_still() {
        let mut m = rail(MarqueeConfig::default(), 2000.0);
        m.tick(0.0);
        m.tick(50.0);
        m.pause();
        let held = m.tick(500.0);
        assert_eq!(m.tick(900.0), held);
        m.resume();
        assert_eq!(m.tick(1000.0), held);
    }

    #[test]
    fn one_way_drag_ignores_rightward_motion() {
        let cfg = MarqueeConfig { one_way_drag: true, ..MarqueeConfig::default() };
        let mut m = rail(cfg, 2000.0);
        m.drag_start(500.0, 0.0);
        assert_eq!(m.drag_move(600.0, 16.0), -1000.0);
        assert_eq!(m.drag_move(400.0, 32.0), -100.0);
        m.drag_end();
        assert!(!m.is_dragging());
    }

    #[test]
    fn drag_wraps_through_seam() {
        let mut m = rail(MarqueeConfig::default(), 2000.0);
        m.drag_start(0.0, 0.0);
        assert_eq!(m.drag_move(-1100.0, 10.0), -100.0);
        assert_eq!(m.drag_move(300.0, 20.0), -700.0);
    }

    #[test]
    fn ticks_do_not_move_while_dragging() {
        let mut m = rail(MarqueeConfig::default(), 2000.0);
        m.drag_start(0.0, 0.0);
        m.drag_move(-50.0, 10.0);
        assert_eq!(m.tick(100.0), -50.0);
        assert_eq!(m.tick(200.0), -50.0);
    }

    #[test]
    fn release_momentum_decays() {
        let cfg = MarqueeConfig { momentum: true, ..MarqueeConfig::default() };
        let mut m = rail(cfg, 20_000.0);
        m.drag_start(0.0, 0.0);
        m.drag_move(-20.0, 20.0);
        m.drag_end();
        assert_eq!(m.momentum(), -1000.0);

        m.tick(0.0);
        m.tick(100.0);
        let after = m.momentum();
        assert!(after > -1000.0 && after < 0.0);
        for i in 2..100 {
            m.tick(i as f64 * 100.0);
        }
        assert_eq!(m.momentum(), 0.0);
    }

    #[test]
    fn resize_keeps_position_wrapped() {
        let mut m = rail(MarqueeConfig::default(), 2000.0);
        m.drag_start(0.0, 0.0);
        m.drag_move(-900.0, 10.0);
        m.drag_end();
        m.set_scroll_extent(1000.0);
        assert_eq!(m.offset(), -400.0);
    }

    #[test]
    fn transform_follows_axis() {
        assert_eq!(Axis::X.transform(-12.5), "translate3d(-12.5px,0,0)");
        assert_eq!(Axis::Y.transform(-3.0), "translate3d(0,-3px,0)");
    }
}
