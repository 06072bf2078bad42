//! Color conversion helpers used to seed demo swatches.

/// Golden-angle hue step in degrees; consecutive hues land far apart.
const GOLDEN_ANGLE_DEG: f32 = 137.507_76;

/// Convert HSV to RGB.
///
/// `h` is in degrees and wraps; `s` and `v` are in `0.0..=1.0`.
/// Returns channels in `0.0..=1.0`.
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> (f32, f32, f32) {
    let h = h.rem_euclid(360.0);
    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match (h / 60.0) as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    (r + m, g + m, b + m)
}

/// Convert a unit-range channel to an integer in `0..=255`.
fn unit_to_channel(value: f32) -> i32 {
    (value.clamp(0.0, 1.0) * 255.0).round() as i32
}

/// Generate `count` visually distinct colors as integer RGB triples.
///
/// Deterministic: the same `count` always yields the same palette.
pub fn distinct_palette(count: usize) -> Vec<(i32, i32, i32)> {
    (0..count)
        .map(|i| {
            let hue = i as f32 * GOLDEN_ANGLE_DEG;
            // Alternate brightness so neighbours differ even when hues wrap close.
            let value = if i % 2 == 0 { 0.9 } else { 0.7 };
            let (r, g, b) = hsv_to_rgb(hue, 0.65, value);
            (unit_to_channel(r), unit_to_channel(g), unit_to_channel(b))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: (f32, f32, f32), b: (f32, f32, f32)) -> bool {
        (a.0 - b.0).abs() < 0.01 && (a.1 - b.1).abs() < 0.01 && (a.2 - b.2).abs() < 0.01
    }

    #[test]
    fn test_hsv_primaries() {
        assert!(approx(hsv_to_rgb(0.0, 1.0, 1.0), (1.0, 0.0, 0.0)));
        assert!(approx(hsv_to_rgb(120.0, 1.0, 1.0), (0.0, 1.0, 0.0)));
        assert!(approx(hsv_to_rgb(240.0, 1.0, 1.0), (0.0, 0.0, 1.0)));
    }

    #[test]
    fn test_hsv_wraps() {
        assert!(approx(hsv_to_rgb(360.0, 1.0, 1.0), hsv_to_rgb(0.0, 1.0, 1.0)));
        assert!(approx(hsv_to_rgb(-120.0, 1.0, 1.0), hsv_to_rgb(240.0, 1.0, 1.0)));
    }

    #[test]
    fn test_palette_in_range_and_stable() {
        let palette = distinct_palette(29);
        assert_eq!(palette.len(), 29);
        for &(r, g, b) in &palette {
            assert!((0..=255).contains(&r));
            assert!((0..=255).contains(&g));
            assert!((0..=255).contains(&b));
        }
        assert_eq!(palette, distinct_palette(29));
        assert_ne!(palette[0], palette[1]);
    }
}
