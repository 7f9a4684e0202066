//! Brand colour helpers for logos drawn on the dark theme.

use crate::error::{Result, SiteError};

/// Light text colour used when a brand colour would vanish on dark surfaces.
pub const LIGHT_ON_DARK: &str = "E6EAF2";

const LUMINANCE_THRESHOLD: f64 = 0.35;

const OVERRIDES: &[(&str, &str)] = &[("Express", "E6EAF2"), ("Next.js", "E6EAF2"), ("Prisma", "AAB3C5")];

fn override_for(name: &str) -> Option<&'static str> {
    OVERRIDES.iter().find(|(n, _)| *n == name).map(|(_, hex)| *hex)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Parses `RRGGBB` with or without a leading `#`.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    let digits = hex.trim_start_matches('#');
    if digits.len() != 6 {
        return Err(SiteError::InvalidColor(hex.to_string()));
    }
    let value = u32::from_str_radix(digits, 16).map_err(|_| SiteError::InvalidColor(hex.to_string()))?;
    Ok(Rgb {
        r: ((value >> 16) & 0xff) as u8,
        g: ((value >> 8) & 0xff) as u8,
        b: (value & 0xff) as u8,
    })
}

/// WCAG relative luminance in `0.0..=1.0`.
pub fn relative_luminance(hex: &str) -> Result<f64> {
    let Rgb { r, g, b } = hex_to_rgb(hex)?;
    let linear = |v: u8| {
        let v = f64::from(v) / 255.0;
        if v <= 0.03928 {
            v / 12.92
        } else {
            ((v + 0.055) / 1.055).powf(2.4)
        }
    };
    Ok(0.2126 * linear(r) + 0.7152 * linear(g) + 0.0722 * linear(b))
}

/// Colour for a brand glyph on a dark background: an explicit override,
/// else the brand hex unless it is too dark (or unparseable).
pub fn safe_color_on_dark<'a>(name: &str, hex: &'a str) -> &'a str {
    if let Some(color) = override_for(name) {
        return color;
    }
    match relative_luminance(hex) {
        Ok(l) if l >= LUMINANCE_THRESHOLD => hex.trim_start_matches('#'),
        Ok(_) => LIGHT_ON_DARK,
        Err(err) => {
            log::debug!("{err}, using light fallback for {name}");
            LIGHT_ON_DARK
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_with_and_without_hash() {
        assert_eq!(hex_to_rgb("#61DAFB"), Ok(Rgb { r: 0x61, g: 0xda, b: 0xfb }));
        assert_eq!(hex_to_rgb("000000"), Ok(Rgb { r: 0, g: 0, b: 0 }));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!(hex_to_rgb("12345"), Err(SiteError::InvalidColor("12345".into())));
        assert!(hex_to_rgb("GGGGGG").is_err());
    }

    #[test]
    fn luminance_spans_black_to_white() {
        assert_eq!(relative_luminance("000000"), Ok(0.0));
        let white = relative_luminance("FFFFFF").unwrap();
        assert!((white - 1.0).abs() < 1e-9);
    }

    #[test]
    fn overrides_win() {
        assert_eq!(safe_color_on_dark("Prisma", "2D3748"), "AAB3C5");
        assert_eq!(safe_color_on_dark("Next.js", "000000"), "E6EAF2");
    }

    #[test]
    fn dark_brands_fall_back_to_light_text() {
        assert_eq!(safe_color_on_dark("SQLite", "003B57"), LIGHT_ON_DARK);
        assert_eq!(safe_color_on_dark("Broken", "zz"), LIGHT_ON_DARK);
    }

    #[test]
    fn bright_brands_keep_their_colour() {
        assert_eq!(safe_color_on_dark("JavaScript", "F7DF1E"), "F7DF1E");
        assert_eq!(safe_color_on_dark("React", "61DAFB"), "61DAFB");
    }
}
