use ratatui::style::Color;

/// Runtime theme.
///
/// Monochrome industrial palette: black ground, white ink, grey steps for
/// everything between.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background
    pub bg: Color,
    /// Primary text
    pub fg: Color,
    /// Secondary text (done tasks, hints)
    pub dim: Color,
    /// Faint chrome (seam, frame border)
    pub faint: Color,
    /// Focus frame while editing
    pub edit: Color,
    /// Status bar background
    pub bar: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg: Color::Rgb(0x00, 0x00, 0x00),
            fg: Color::Rgb(0xff, 0xff, 0xff),
            dim: Color::Rgb(0xa0, 0xa0, 0xa0),
            faint: Color::Rgb(0x3c, 0x3c, 0x3c),
            edit: Color::Rgb(0x8a, 0x3a, 0x3a),
            bar: Color::Rgb(0x1e, 0x1e, 0x1e),
        }
    }
}

impl Theme {
    /// Fade a color toward black by distance from the carousel center.
    ///
    /// `ratio` is 0.0 at the center row and 1.0 at the edge; brightness
    /// falls linearly and is floor-clamped so far rows stay legible.
    pub fn fade(&self, base: Color, ratio: f64) -> Color {
        const FLOOR: f64 = 40.0 / 255.0;
        let alpha = (1.0 - ratio).clamp(FLOOR, 1.0);
        match base {
            Color::Rgb(r, g, b) => Color::Rgb(
                (r as f64 * alpha) as u8,
                (g as f64 * alpha) as u8,
                (b as f64 * alpha) as u8,
            ),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_is_identity_at_center() {
        let theme = Theme::default();
        assert_eq!(theme.fade(theme.fg, 0.0), theme.fg);
    }

    #[test]
    fn fade_floor_clamps_at_edge() {
        let theme = Theme::default();
        // Even past the edge, rows never go fully dark
        match theme.fade(theme.fg, 2.0) {
            Color::Rgb(r, _, _) => assert_eq!(r, 40),
            _ => unreachable!(),
        }
    }
}
