//! Group palette.
//!
//! Each group gets its color once, when it is created: hue `index / total`
//! around the wheel, with fixed saturation and lightness. Colors are never
//! re-spread afterwards, so removing groups can leave uneven hue spacing.

use glam::Vec3;

/// Saturation used for group colors.
pub const GROUP_SATURATION: f32 = 0.7;

/// Lightness used for group colors.
pub const GROUP_LIGHTNESS: f32 = 0.55;

/// Returns the color for the group at `index` when `total` groups are known.
///
/// `total` includes the group being colored; a zero total is treated as one.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn group_color(index: usize, total: usize) -> Vec3 {
    let total = total.max(1);
    let hue = (index % total) as f32 / total as f32;
    hsl_to_rgb(hue, GROUP_SATURATION, GROUP_LIGHTNESS)
}

/// Converts HSL (all components in `[0, 1]`) to linear RGB.
#[must_use]
pub fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> Vec3 {
    if saturation <= 0.0 {
        return Vec3::splat(lightness);
    }

    let q = if lightness < 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - lightness * saturation
    };
    let p = 2.0 * lightness - q;

    Vec3::new(
        hue_to_channel(p, q, hue + 1.0 / 3.0),
        hue_to_channel(p, q, hue),
        hue_to_channel(p, q, hue - 1.0 / 3.0),
    )
}

fn hue_to_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).abs().max_element() < 1e-5
    }

    #[test]
    fn test_primary_hues() {
        assert!(close(hsl_to_rgb(0.0, 1.0, 0.5), Vec3::new(1.0, 0.0, 0.0)));
        assert!(close(hsl_to_rgb(1.0 / 3.0, 1.0, 0.5), Vec3::new(0.0, 1.0, 0.0)));
        assert!(close(hsl_to_rgb(2.0 / 3.0, 1.0, 0.5), Vec3::new(0.0, 0.0, 1.0)));
        assert!(close(hsl_to_rgb(0.3, 0.0, 0.25), Vec3::splat(0.25)));
    }

    #[test]
    fn test_group_color_spread() {
        let first = group_color(0, 1);
        let second = group_color(1, 2);
        assert!(!close(first, second));
        // hue 0 and hue 0.5 are complementary
        assert!(close(second, hsl_to_rgb(0.5, GROUP_SATURATION, GROUP_LIGHTNESS)));
        assert_eq!(group_color(2, 3), group_color(2, 3));
        assert!(group_color(0, 0).is_finite());
    }

    #[test]
    fn test_colors_in_unit_range() {
        for total in 1..12 {
            for index in 0..total {
                let c = group_color(index, total);
                assert!(c.min_element() >= 0.0 && c.max_element() <= 1.0);
            }
        }
    }
}
