//! Animation state that knows nothing about the browser. The `dom` layer
//! feeds it timestamps, sizes and pointer positions and hands it a
//! [`Surface`] to draw on.

pub mod blocks;
pub mod frame;
pub mod marquee;
pub mod particles;
pub mod reveal;
pub mod sand;
pub mod scroll;

pub use frame::{FrameClock, Pointer};

/// Colour theme of a decorative canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    #[default]
    Dark,
    Light,
}

impl Variant {
    /// RGB triple for dots and lines, as used inside `rgba(...)`.
    pub fn rgb(self) -> &'static str {
        match self {
            Variant::Dark => "255,255,255",
            Variant::Light => "17,24,39",
        }
    }

    pub fn rgba(self, alpha: f64) -> String {
        format!("rgba({},{alpha})", self.rgb())
    }
}

/// Minimal 2D drawing target.
pub trait Surface {
    fn clear(&mut self, width: f64, height: f64);
    fn set_alpha(&mut self, alpha: f64);
    fn set_fill(&mut self, color: &str);
    fn set_stroke(&mut self, color: &str);
    fn circle(&mut self, x: f64, y: f64, radius: f64);
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn line(&mut self, from: (f64, f64), to: (f64, f64));
}

#[cfg(test)]
pub(crate) mod testing {
    use super::Surface;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Op {
        Clear,
        Alpha(f64),
        Fill(String),
        Stroke(String),
        Circle,
        Rect,
        Line,
    }

    /// Records every call so draw routines can be checked without a canvas.
    #[derive(Default)]
    pub struct Recorder {
        pub ops: Vec<Op>,
    }

    impl Recorder {
        pub fn count(&self, op: &Op) -> usize {
            self.ops.iter().filter(|o| *o == op).count()
        }
    }

    impl Surface for Recorder {
        fn clear(&mut self, _: f64, _: f64) {
            self.ops.push(Op::Clear);
        }
        fn set_alpha(&mut self, alpha: f64) {
            self.ops.push(Op::Alpha(alpha));
        }
        fn set_fill(&mut self, color: &str) {
            self.ops.push(Op::Fill(color.to_string()));
        }
        fn set_stroke(&mut self, color: &str) {
            self.ops.push(Op::Stroke(color.to_string()));
        }
        fn circle(&mut self, _: f64, _: f64, _: f64) {
            self.ops.push(Op::Circle);
        }
        fn rect(&mut self, _: f64, _: f64, _: f64, _: f64) {
            self.ops.push(Op::Rect);
        }
        fn line(&mut self, _: (f64, f64), _: (f64, f64)) {
            self.ops.push(Op::Line);
        }
    }
}
