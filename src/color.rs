use palette::{Hsl, IntoColor, Srgb};
use plotters::style::RGBColor;

use crate::data::model::EMOTIONS;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<RGBColor> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.45);
            let rgb: Srgb = hsl.into_color();
            RGBColor(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

/// One colour per emotion category, in category-index order.
pub fn emotion_palette() -> Vec<RGBColor> {
    generate_palette(EMOTIONS.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_one_distinct_colour_per_emotion() {
        let palette = emotion_palette();
        assert_eq!(palette.len(), EMOTIONS.len());
        for (i, a) in palette.iter().enumerate() {
            for b in palette.iter().skip(i + 1) {
                assert_ne!((a.0, a.1, a.2), (b.0, b.1, b.2));
            }
        }
    }

    #[test]
    fn empty_palette_request_is_fine() {
        assert!(generate_palette(0).is_empty());
    }
}
