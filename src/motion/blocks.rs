//! Floating block cluster beside the hero copy. Positions are drawn once
//! per mount; the drift itself is a CSS animation fed by custom properties.

use rand::Rng;

use super::frame::sample;

pub const BLOCK_COUNT: usize = 15;
const AREA_WIDTH: f64 = 490.0;
const AREA_HEIGHT: f64 = 520.0;
const MARGIN: f64 = 8.0;
const GAP: f64 = 28.0;
const PLACEMENT_TRIES: usize = 300;

pub const BLOCK_COLORS: [&str; 8] = [
    "block-brand-500",
    "block-brand-600",
    "block-accent-400",
    "block-brand-400",
    "block-accent-500",
    "block-brand-300",
    "block-accent-300",
    "block-white",
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    /// True when the rectangles come closer than `gap`.
    pub fn overlaps(&self, other: &Rect, gap: f64) -> bool {
        !(self.x + self.w + gap <= other.x
            || other.x + other.w + gap <= self.x
            || self.y + self.h + gap <= other.y
            || other.y + other.h + gap <= self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    pub rot: f64,
    pub scale: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FloatingBlock {
    pub id: usize,
    pub rect: Rect,
    pub color: &'static str,
    /// Draws the three "text line" stripes.
    pub patterned: bool,
    pub from: Pose,
    pub to: Pose,
    pub drift_s: f64,
    pub drift_delay_s: f64,
    pub fade_to: f64,
    pub fade_s: f64,
    pub fade_delay_s: f64,
}

impl FloatingBlock {
    pub fn style(&self) -> String {
        format!(
            "width:{w:.0}px;height:{h:.0}px;left:{l:.1}px;top:{t:.1}px;\
             --from-x:{fx:.1}px;--from-y:{fy:.1}px;--from-rot:{fr:.1}deg;--from-scale:{fs:.3};\
             --to-x:{tx:.1}px;--to-y:{ty:.1}px;--to-rot:{tr:.1}deg;--to-scale:{ts:.3};\
             --fade-to:{fo:.2};\
             animation-duration:{d:.2}s,{fd:.2}s;animation-delay:{dd:.2}s,{fdd:.2}s;",
            w = self.rect.w,
            h = self.rect.h,
            l = MARGIN + self.rect.x,
            t = MARGIN + self.rect.y,
            fx = self.from.x,
            fy = self.from.y,
            fr = self.from.rot,
            fs = self.from.scale,
            tx = self.to.x,
            ty = self.to.y,
            tr = self.to.rot,
            ts = self.to.scale,
            fo = self.fade_to,
            d = self.drift_s,
            fd = self.fade_s,
            dd = self.drift_delay_s,
            fdd = self.fade_delay_s,
        )
    }
}

/// Picks a spot that keeps `GAP` to every placed block, or the last
/// candidate when the area is too crowded.
fn place<R: Rng + ?Sized>(rng: &mut R, w: f64, h: f64, placed: &[Rect]) -> Rect {
    let mut candidate = Rect { x: 0.0, y: 0.0, w, h };
    for _ in 0..PLACEMENT_TRIES {
        candidate.x = sample(rng, (0.0, (AREA_WIDTH - w).max(1.0)));
        candidate.y = sample(rng, (0.0, (AREA_HEIGHT - h).max(1.0)));
        if placed.iter().all(|p| !candidate.overlaps(p, GAP)) {
            break;
        }
    }
    candidate
}

pub fn layout_blocks<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<FloatingBlock> {
    let mut placed = Vec::with_capacity(count);
    (0..count)
        .map(|i| {
            let w = sample(rng, (56.0, 120.0));
            let h = sample(rng, (36.0, 90.0));
            let rect = place(rng, w, h, &placed);
            placed.push(rect);

            let from = Pose {
                x: sample(rng, (-30.0, 30.0)),
                y: sample(rng, (-20.0, 20.0)),
                rot: sample(rng, (-10.0, 10.0)),
                scale: sample(rng, (0.9, 1.1)),
            };
            let to = Pose {
                x: from.x + sample(rng, (-40.0, 40.0)),
                y: from.y + sample(rng, (-30.0, 30.0)),
                rot: from.rot + sample(rng, (-15.0, 15.0)),
                scale: from.scale + sample(rng, (-0.2, 0.2)),
            };
            FloatingBlock {
                id: i,
                rect,
                color: BLOCK_COLORS[i % BLOCK_COLORS.len()],
                patterned: i % 3 == 0,
                from,
                to,
                drift_s: sample(rng, (4.0, 8.0)),
                drift_delay_s: i as f64 * 0.15,
                fade_to: sample(rng, (0.7, 1.0)),
                fade_s: sample(rng, (3.0, 5.0)),
                fade_delay_s: i as f64 * 0.1,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn gap_counts_as_overlap() {
        let a = Rect { x: 0.0, y: 0.0, w: 50.0, h: 50.0 };
        let near = Rect { x: 70.0, y: 0.0, w: 50.0, h: 50.0 };
        let far = Rect { x: 78.0, y: 0.0, w: 50.0, h: 50.0 };
        assert!(a.overlaps(&near, GAP));
        assert!(!a.overlaps(&far, GAP));
        assert!(!a.overlaps(&near, 0.0));
    }

    #[test]
    fn blocks_stay_inside_the_area() {
        let blocks = layout_blocks(&mut StdRng::seed_from_u64(5), BLOCK_COUNT);
        assert_eq!(blocks.len(), BLOCK_COUNT);
        for b in &blocks {
            assert!(b.rect.x >= 0.0 && b.rect.x + b.rect.w <= AREA_WIDTH + 1.0);
            assert!(b.rect.y >= 0.0 && b.rect.y + b.rect.h <= AREA_HEIGHT + 1.0);
            assert!((56.0..120.0).contains(&b.rect.w));
            assert!((0.7..1.0).contains(&b.fade_to));
        }
    }

    #[test]
    fn colours_and_stagger_follow_index() {
        let blocks = layout_blocks(&mut StdRng::seed_from_u64(9), 10);
        assert_eq!(blocks[0].color, "block-brand-500");
        assert_eq!(blocks[8].color, "block-brand-500");
        assert!(blocks[0].patterned && blocks[3].patterned && !blocks[4].patterned);
        assert!((blocks[4].drift_delay_s - 0.6).abs() < 1e-12);
        assert!((blocks[4].fade_delay_s - 0.4).abs() < 1e-12);
    }

    #[test]
    fn style_offsets_by_margin() {
        let blocks = layout_blocks(&mut StdRng::seed_from_u64(1), 1);
        let b = &blocks[0];
        let style = b.style();
        assert!(style.contains(&format!("left:{:.1}px", b.rect.x + MARGIN)));
        assert!(style.contains("--from-rot:"));
    }
}
