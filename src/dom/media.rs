const MAX_PIXEL_RATIO: f64 = 2.0;

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
pub const MOBILE_QUERY: &str = "(max-width: 767px)";
pub const DESKTOP_QUERY: &str = "(min-width: 1030px)";

pub fn matches_media(query: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map(|list| list.matches())
        .unwrap_or(false)
}

pub fn prefers_reduced_motion() -> bool {
    matches_media(REDUCED_MOTION_QUERY)
}

pub fn is_mobile() -> bool {
    matches_media(MOBILE_QUERY)
}

/// Wide enough for the hero's block cluster.
pub fn is_desktop() -> bool {
    matches_media(DESKTOP_QUERY)
}

/// Clamps a reported device pixel ratio to `1.0..=2.0`.
pub fn capped_pixel_ratio(raw: f64) -> f64 {
    if raw.is_finite() && raw > 0.0 {
        raw.clamp(1.0, MAX_PIXEL_RATIO)
    } else {
        1.0
    }
}

pub fn device_pixel_ratio() -> f64 {
    capped_pixel_ratio(web_sys::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_ratio_is_capped() {
        assert_eq!(capped_pixel_ratio(3.0), 2.0);
        assert_eq!(capped_pixel_ratio(1.5), 1.5);
        assert_eq!(capped_pixel_ratio(0.0), 1.0);
        assert_eq!(capped_pixel_ratio(f64::NAN), 1.0);
    }
}
