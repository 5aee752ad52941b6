use crate::core::data::colour::Colour;

const HUE_SPAN_DEGREES: f64 = 280.0;
const BASE_SATURATION: f64 = 0.70;
const SATURATION_SPAN: f64 = 0.20;
const BASE_LIGHTNESS: f64 = 0.50;
const LIGHTNESS_SPAN: f64 = 0.20;

/// Colour of construction level `level` when the deepest level is `last_level`.
///
/// Walks the hue from red through blue to purple while saturation and
/// lightness rise, so deeper levels read lighter.
#[must_use]
pub fn level_colour(level: usize, last_level: usize) -> Colour {
    let t = if last_level == 0 {
        0.0
    } else {
        (level as f64 / last_level as f64).clamp(0.0, 1.0)
    };

    Colour::from_hsl(
        t * HUE_SPAN_DEGREES,
        BASE_SATURATION + t * SATURATION_SPAN,
        BASE_LIGHTNESS + t * LIGHTNESS_SPAN,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_level_is_red_hue() {
        let colour = level_colour(0, 7);

        assert_eq!(colour, Colour::from_hsl(0.0, 0.70, 0.50));
        assert!(colour.r > colour.g && colour.r > colour.b);
    }

    #[test]
    fn test_last_level_uses_full_span() {
        assert_eq!(level_colour(7, 7), Colour::from_hsl(280.0, 0.90, 0.70));
    }

    #[test]
    fn test_single_level_construction_does_not_divide_by_zero() {
        assert_eq!(level_colour(0, 0), level_colour(0, 5));
    }

    #[test]
    fn test_levels_get_distinct_colours() {
        let colours: Vec<Colour> = (0..8).map(|level| level_colour(level, 7)).collect();

        for (i, colour) in colours.iter().enumerate() {
            for other in &colours[i + 1..] {
                assert_ne!(colour, other);
            }
        }
    }
}
