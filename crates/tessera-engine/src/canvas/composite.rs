use crate::numeric::{Frac, clamped};
use crate::paint::Color;

use super::BlendMode;

/// Combines `src` over `dst` where `src` covers `coverage` of the pixel.
///
/// Inputs and output are straight alpha; the arithmetic runs on
/// premultiplied values.
pub fn composite(dst: Color, src: Color, coverage: Frac, mode: BlendMode) -> Color {
    let k = clamped(coverage);
    if k <= 0.0 {
        return dst;
    }
    let (dst, src) = (dst.clamped(), src.clamped());
    let da = dst.alpha;
    let d = [dst.red * da, dst.green * da, dst.blue * da];
    let s_rgb = [src.red, src.green, src.blue];

    let (rgb, alpha) = match mode {
        BlendMode::Normal | BlendMode::Multiply | BlendMode::Screen => {
            let sa = src.alpha * k;
            let s = s_rgb.map(|c| c * sa);
            let out_a = sa + da * (1.0 - sa);
            let mut out = [0.0; 3];
            for i in 0..3 {
                out[i] = match mode {
                    BlendMode::Multiply => s[i] * d[i] + s[i] * (1.0 - da) + d[i] * (1.0 - sa),
                    BlendMode::Screen => s[i] + d[i] - s[i] * d[i],
                    _ => s[i] + d[i] * (1.0 - sa),
                };
            }
            (out, out_a)
        }
        BlendMode::Copy => {
            let sa = src.alpha;
            let mut out = [0.0; 3];
            for i in 0..3 {
                out[i] = s_rgb[i] * sa * k + d[i] * (1.0 - k);
            }
            (out, sa * k + da * (1.0 - k))
        }
        BlendMode::Clear => (d.map(|c| c * (1.0 - k)), da * (1.0 - k)),
    };

    if alpha <= 0.0 {
        return Color::CLEAR;
    }
    Color::new(rgb[0] / alpha, rgb[1] / alpha, rgb[2] / alpha, alpha).clamped()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: Color, b: Color) -> bool {
        let e = 1e-9;
        (a.red - b.red).abs() < e
            && (a.green - b.green).abs() < e
            && (a.blue - b.blue).abs() < e
            && (a.alpha - b.alpha).abs() < e
    }

    #[test]
    fn opaque_normal_replaces() {
        assert_eq!(composite(Color::BLUE, Color::RED, 1.0, BlendMode::Normal), Color::RED);
    }

    #[test]
    fn zero_coverage_keeps_destination() {
        for mode in [BlendMode::Normal, BlendMode::Copy, BlendMode::Clear, BlendMode::Multiply] {
            assert_eq!(composite(Color::GOLD, Color::RED, 0.0, mode), Color::GOLD);
        }
    }

    #[test]
    fn half_coverage_blends() {
        let c = composite(Color::BLACK, Color::WHITE, 0.5, BlendMode::Normal);
        assert!(approx_eq(c, Color::rgb(0.5, 0.5, 0.5)));
    }

    #[test]
    fn translucent_over_clear_keeps_source_color() {
        let c = composite(Color::CLEAR, Color::RED.with_alpha(0.5), 1.0, BlendMode::Normal);
        assert!(approx_eq(c, Color::RED.with_alpha(0.5)));
    }

    #[test]
    fn copy_ignores_destination() {
        let c = composite(Color::WHITE, Color::RED.with_alpha(0.25), 1.0, BlendMode::Copy);
        assert!(approx_eq(c, Color::RED.with_alpha(0.25)));
    }

    #[test]
    fn clear_erases() {
        assert_eq!(composite(Color::WHITE, Color::RED, 1.0, BlendMode::Clear), Color::CLEAR);
        let half = composite(Color::WHITE, Color::RED, 0.5, BlendMode::Clear);
        assert!(approx_eq(half, Color::WHITE.with_alpha(0.5)));
    }

    #[test]
    fn multiply_and_screen() {
        let gray = Color::rgb(0.5, 0.5, 0.5);
        assert!(approx_eq(composite(gray, gray, 1.0, BlendMode::Multiply), Color::rgb(0.25, 0.25, 0.25)));
        assert!(approx_eq(composite(gray, gray, 1.0, BlendMode::Screen), Color::rgb(0.75, 0.75, 0.75)));
    }
}
