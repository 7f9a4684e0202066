/// Entrance animation applied when an element scrolls into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealKind {
    #[default]
    Fade,
    SlideUp,
    SlideDown,
    SlideLeft,
    SlideRight,
    Scale,
    Blur,
}

const SLIDE_PX: i32 = 60;

impl RevealKind {
    /// Inline style for the state before the element has been seen.
    pub fn hidden_style(self) -> String {
        let transform = match self {
            RevealKind::Fade | RevealKind::Blur => None,
            RevealKind::SlideUp => Some(format!("translate3d(0,{SLIDE_PX}px,0)")),
            RevealKind::SlideDown => Some(format!("translate3d(0,-{SLIDE_PX}px,0)")),
            RevealKind::SlideLeft => Some(format!("translate3d({SLIDE_PX}px,0,0)")),
            RevealKind::SlideRight => Some(format!("translate3d(-{SLIDE_PX}px,0,0)")),
            RevealKind::Scale => Some("scale(0.8)".to_string()),
        };
        let mut style = String::from("opacity:0;");
        if let Some(t) = transform {
            style.push_str(&format!("transform:{t};"));
        }
        if self == RevealKind::Blur {
            style.push_str("filter:blur(10px);");
        }
        style
    }

    pub fn visible_style(self) -> &'static str {
        match self {
            RevealKind::Blur => "opacity:1;filter:blur(0px);",
            RevealKind::Fade => "opacity:1;",
            _ => "opacity:1;transform:none;",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealTiming {
    pub duration_s: f64,
    pub delay_s: f64,
}

impl Default for RevealTiming {
    fn default() -> Self {
        RevealTiming { duration_s: 0.6, delay_s: 0.0 }
    }
}

impl RevealTiming {
    pub fn transition(&self) -> String {
        format!(
            "transition:opacity {d}s cubic-bezier(0.25,0.1,0.25,1) {w}s,transform {d}s cubic-bezier(0.25,0.1,0.25,1) {w}s,filter {d}s cubic-bezier(0.25,0.1,0.25,1) {w}s;",
            d = self.duration_s,
            w = self.delay_s
        )
    }
}

/// Visibility state driven by intersection callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    repeat_on_enter: bool,
    shown: bool,
    done: bool,
}

impl Reveal {
    pub fn new(repeat_on_enter: bool) -> Self {
        Reveal { repeat_on_enter, shown: false, done: false }
    }

    /// Always-visible reveal, used when motion is reduced.
    pub fn settled() -> Self {
        Reveal { repeat_on_enter: false, shown: true, done: true }
    }

    /// Feeds one intersection change; returns whether the state flipped.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.done {
            return false;
        }
        let before = self.shown;
        if intersecting {
            self.shown = true;
            if !self.repeat_on_enter {
                self.done = true;
            }
        } else if self.repeat_on_enter {
            self.shown = false;
        }
        before != self.shown
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    /// No further callbacks can change anything; the observer may go.
    pub fn is_settled(&self) -> bool {
        self.done
    }

    pub fn style(&self, kind: RevealKind, timing: RevealTiming) -> String {
        let state = if self.shown { kind.visible_style().to_string() } else { kind.hidden_style() };
        format!("{state}{}", timing.transition())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn once_mode_latches() {
        let mut r = Reveal::new(false);
        assert!(!r.is_shown());
        assert!(r.observe(true));
        assert!(r.is_settled());
        assert!(!r.observe(false));
        assert!(r.is_shown());
    }

    #[test]
    fn repeat_mode_toggles() {
        let mut r = Reveal::new(true);
        assert!(r.observe(true));
        assert!(r.observe(false));
        assert!(!r.is_shown());
        assert!(!r.observe(false));
        assert!(r.observe(true));
        assert!(!r.is_settled());
    }

    #[test]
    fn settled_is_visible() {
        let mut r = Reveal::settled();
        assert!(r.is_shown());
        assert!(!r.observe(false));
    }

    #[test]
    fn hidden_styles_match_kind() {
        assert_eq!(RevealKind::Fade.hidden_style(), "opacity:0;");
        assert_eq!(RevealKind::SlideUp.hidden_style(), "opacity:0;transform:translate3d(0,60px,0);");
        assert_eq!(RevealKind::SlideRight.hidden_style(), "opacity:0;transform:translate3d(-60px,0,0);");
        assert_eq!(RevealKind::Scale.hidden_style(), "opacity:0;transform:scale(0.8);");
        assert_eq!(RevealKind::Blur.hidden_style(), "opacity:0;filter:blur(10px);");
    }

    #[test]
    fn style_includes_transition() {
        let r = Reveal::new(true);
        let style = r.style(RevealKind::Fade, RevealTiming { duration_s: 0.8, delay_s: 0.2 });
        assert!(style.starts_with("opacity:0;transition:opacity 0.8s"));
        assert!(style.contains(" 0.2s,"));
    }
}
