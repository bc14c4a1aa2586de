//! Color math: direct conversions without external dependencies.
//! All functions use normalized f64 in 0.0–1.0 for internal use.

/// HSB/HSV → RGB. All values 0.0–1.0.
pub(crate) fn hsb_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }
    let h6 = (h * 6.0) % 6.0;
    let i = h6.floor() as u32;
    let f = h6 - h6.floor();
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match i % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// HSL → HSB. All values 0.0–1.0.
pub(crate) fn hsl_to_hsb(h: f64, s_hsl: f64, l: f64) -> (f64, f64, f64) {
    let v = l + s_hsl * l.min(1.0 - l);
    let s_hsb = if v == 0.0 { 0.0 } else { 2.0 * (1.0 - l / v) };
    (h, s_hsb, v)
}

/// HSL → RGB, hue as a fraction of a full turn. All values 0.0–1.0.
pub(crate) fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    let (hb, sb, vb) = hsl_to_hsb(h, s, l);
    hsb_to_rgb(hb, sb, vb)
}

/// Quantize a normalized channel to 8 bits, rounding half up.
pub(crate) fn to_u8(channel: f64) -> u8 {
    (channel * 255.0 + 0.5) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_saturation_is_gray() {
        // Any hue collapses to the lightness gray when saturation is 0.
        for hue in [0.0, 0.25, 0.5, 0.99] {
            let (r, g, b) = hsl_to_rgb(hue, 0.0, 0.5);
            assert_eq!((r, g, b), (0.5, 0.5, 0.5));
        }
    }

    #[test]
    fn primary_hues_at_half_lightness() {
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), (1.0, 0.0, 0.0));
        assert_eq!(hsl_to_rgb(1.0 / 3.0, 1.0, 0.5), (0.0, 1.0, 0.0));
        assert_eq!(hsl_to_rgb(2.0 / 3.0, 1.0, 0.5), (0.0, 0.0, 1.0));
    }

    #[test]
    fn lightness_extremes() {
        assert_eq!(hsl_to_rgb(0.7, 1.0, 0.0), (0.0, 0.0, 0.0));
        assert_eq!(hsl_to_rgb(0.7, 1.0, 1.0), (1.0, 1.0, 1.0));
    }

    #[test]
    fn quantization_rounds_half_up() {
        assert_eq!(to_u8(0.0), 0);
        assert_eq!(to_u8(0.5), 128);
        assert_eq!(to_u8(1.0), 255);
    }
}
