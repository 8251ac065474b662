//! Color converter: HEX, RGB and HSL representations.

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ColorError {
    #[error("unrecognized color format: {0:?}")]
    Unrecognized(String),
    #[error("color component out of range: {0}")]
    OutOfRange(String),
}

/// A color as 8-bit RGB channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// All three representations of one color, as returned to the client.
#[derive(Debug, Clone, Serialize)]
pub struct ColorTriple {
    pub hex: String,
    pub rgb: String,
    pub hsl: String,
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Hue in degrees, 0-359.
    pub h: u16,
    /// Saturation percent, 0-100.
    pub s: u8,
    /// Lightness percent, 0-100.
    pub l: u8,
}

/// Parse a color in any supported notation and return all representations.
pub fn convert(input: &str) -> Result<ColorTriple, ColorError> {
    let rgb = parse(input)?;
    let (h, s, l) = rgb_to_hsl(rgb);
    Ok(ColorTriple {
        hex: format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b),
        rgb: format!("rgb({}, {}, {})", rgb.r, rgb.g, rgb.b),
        hsl: format!("hsl({}, {}%, {}%)", h, s, l),
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
        h,
        s,
        l,
    })
}

/// Parse `#rgb`, `#rrggbb`, `rgb(r, g, b)` or `hsl(h, s%, l%)`.
pub fn parse(input: &str) -> Result<Rgb, ColorError> {
    let text = input.trim();
    if let Some(hex) = text.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| ColorError::Unrecognized(text.to_string()));
    }
    let lower = text.to_ascii_lowercase();
    if let Some(body) = lower.strip_prefix("rgb(").and_then(|s| s.strip_suffix(')')) {
        return parse_rgb_body(body, text);
    }
    if let Some(body) = lower.strip_prefix("hsl(").and_then(|s| s.strip_suffix(')')) {
        return parse_hsl_body(body, text);
    }
    Err(ColorError::Unrecognized(text.to_string()))
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    match hex.len() {
        3 => {
            let mut chans = [0u8; 3];
            for (i, c) in hex.chars().enumerate() {
                let v = c.to_digit(16)? as u8;
                chans[i] = v * 16 + v;
            }
            Some(Rgb {
                r: chans[0],
                g: chans[1],
                b: chans[2],
            })
        }
        6 => {
            let bytes = hex::decode(hex).ok()?;
            Some(Rgb {
                r: bytes[0],
                g: bytes[1],
                b: bytes[2],
            })
        }
        _ => None,
    }
}

fn parse_rgb_body(body: &str, original: &str) -> Result<Rgb, ColorError> {
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(ColorError::Unrecognized(original.to_string()));
    }
    let mut chans = [0u8; 3];
    for (i, part) in parts.iter().enumerate() {
        let value: i64 = part
            .parse()
            .map_err(|_| ColorError::Unrecognized(original.to_string()))?;
        if !(0..=255).contains(&value) {
            return Err(ColorError::OutOfRange(format!("{} not in 0..=255", value)));
        }
        chans[i] = value as u8;
    }
    Ok(Rgb {
        r: chans[0],
        g: chans[1],
        b: chans[2],
    })
}

fn parse_hsl_body(body: &str, original: &str) -> Result<Rgb, ColorError> {
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(ColorError::Unrecognized(original.to_string()));
    }
    let h: f64 = parts[0]
        .trim_end_matches("deg")
        .trim()
        .parse()
        .map_err(|_| ColorError::Unrecognized(original.to_string()))?;
    let s: f64 = parse_percent(parts[1]).ok_or_else(|| ColorError::Unrecognized(original.to_string()))?;
    let l: f64 = parse_percent(parts[2]).ok_or_else(|| ColorError::Unrecognized(original.to_string()))?;
    if !(0.0..=100.0).contains(&s) || !(0.0..=100.0).contains(&l) {
        return Err(ColorError::OutOfRange(
            "saturation and lightness must be 0-100%".to_string(),
        ));
    }
    Ok(hsl_to_rgb(h.rem_euclid(360.0), s / 100.0, l / 100.0))
}

fn parse_percent(part: &str) -> Option<f64> {
    part.strip_suffix('%')?.trim().parse().ok()
}

/// Convert RGB to HSL as (degrees, percent, percent).
pub fn rgb_to_hsl(rgb: Rgb) -> (u16, u8, u8) {
    let r = rgb.r as f64 / 255.0;
    let g = rgb.g as f64 / 255.0;
    let b = rgb.b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if (max - min).abs() < f64::EPSILON {
        return (0, 0, (l * 100.0).round() as u8);
    }

    let d = max - min;
    let s = d / (1.0 - (2.0 * l - 1.0).abs());
    let h = if (max - r).abs() < f64::EPSILON {
        ((g - b) / d).rem_euclid(6.0)
    } else if (max - g).abs() < f64::EPSILON {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    } * 60.0;

    (
        (h.rem_euclid(360.0)).round() as u16 % 360,
        (s * 100.0).round() as u8,
        (l * 100.0).round() as u8,
    )
}

/// Convert HSL (h in degrees, s and l in 0..=1) to RGB.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = h / 60.0;
    let x = c * (1.0 - (hp.rem_euclid(2.0) - 1.0).abs());
    let (r1, g1, b1) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    Rgb {
        r: ((r1 + m) * 255.0).round() as u8,
        g: ((g1 + m) * 255.0).round() as u8,
        b: ((b1 + m) * 255.0).round() as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_hex() {
        assert_eq!(parse("#fff").unwrap(), Rgb { r: 255, g: 255, b: 255 });
        assert_eq!(parse("#1a2b3c").unwrap(), Rgb { r: 0x1a, g: 0x2b, b: 0x3c });
    }

    #[test]
    fn parses_rgb_notation() {
        assert_eq!(parse("rgb(255, 0, 128)").unwrap(), Rgb { r: 255, g: 0, b: 128 });
        assert!(matches!(parse("rgb(300, 0, 0)"), Err(ColorError::OutOfRange(_))));
    }

    #[test]
    fn parses_hsl_notation() {
        // hsl(0, 100%, 50%) is pure red
        assert_eq!(parse("hsl(0, 100%, 50%)").unwrap(), Rgb { r: 255, g: 0, b: 0 });
        // hsl(120, 100%, 25%) is dark green
        assert_eq!(parse("hsl(120, 100%, 25%)").unwrap(), Rgb { r: 0, g: 128, b: 0 });
    }

    #[test]
    fn rejects_unknown_notation() {
        assert!(parse("papayawhip").is_err());
        assert!(parse("#12345").is_err());
    }

    #[test]
    fn convert_returns_all_representations() {
        let triple = convert("#ff0000").unwrap();
        assert_eq!(triple.hex, "#ff0000");
        assert_eq!(triple.rgb, "rgb(255, 0, 0)");
        assert_eq!(triple.hsl, "hsl(0, 100%, 50%)");
    }

    #[test]
    fn hsl_round_trip_on_gray() {
        let triple = convert("rgb(128, 128, 128)").unwrap();
        assert_eq!(triple.s, 0);
        assert_eq!(triple.l, 50);
    }
}
