use crate::coords::{Rect, Vec2};

use super::Color;

/// Direction of a linear gradient, as a fixed set of compass/diagonal axes.
///
/// Each variant maps to a start → end point pair in the unit square
/// (`(0,0)` top-left, `(1,1)` bottom-right); see [`unit_points`](Self::unit_points).
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum GradientDirection {
    TopToDown,
    DownToTop,
    #[default]
    LeftToRight,
    RightToLeft,
    LeftTopToRightDown,
    RightDownToLeftTop,
    LeftDownToRightTop,
    RightTopToLeftDown,
}

impl GradientDirection {
    /// Start and end points of the gradient axis in unit-square coordinates.
    ///
    /// Total over the enum; drawing code never branches on direction again.
    #[inline]
    pub const fn unit_points(self) -> (Vec2, Vec2) {
        use GradientDirection::*;
        match self {
            TopToDown => (Vec2::new(0.5, 0.0), Vec2::new(0.5, 1.0)),
            DownToTop => (Vec2::new(0.5, 1.0), Vec2::new(0.5, 0.0)),
            LeftToRight => (Vec2::new(0.0, 0.5), Vec2::new(1.0, 0.5)),
            RightToLeft => (Vec2::new(1.0, 0.5), Vec2::new(0.0, 0.5)),
            LeftTopToRightDown => (Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0)),
            RightDownToLeftTop => (Vec2::new(1.0, 1.0), Vec2::new(0.0, 0.0)),
            LeftDownToRightTop => (Vec2::new(0.0, 1.0), Vec2::new(1.0, 0.0)),
            RightTopToLeftDown => (Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)),
        }
    }
}

/// A single gradient stop.
///
/// `t` is expected in [0, 1]; [`GradientSpec::resolve`] always produces
/// sorted, evenly spaced stops.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// Resolved, ready-to-render description of a linear gradient in
/// unit-square coordinates.
///
/// Produced by [`resolve`](Self::resolve) from a direction plus an ordered
/// color list; mapped into pixel space with [`in_rect`](Self::in_rect).
#[derive(Debug, Clone, PartialEq)]
pub struct GradientSpec {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<ColorStop>,
}

impl GradientSpec {
    /// Maps a direction and ordered color list to a renderable gradient.
    ///
    /// Returns `None` for fewer than two colors — callers fall back to a
    /// flat fill. With `n ≥ 2` colors, stop `i` sits at offset `i / (n-1)`,
    /// so the first stop is 0, the last is 1, and spacing is even. Identical
    /// adjacent colors still get distinct offsets; the math path is unchanged.
    ///
    /// Pure and cheap — safe to call on every draw.
    pub fn resolve(direction: GradientDirection, colors: &[Color]) -> Option<GradientSpec> {
        if colors.len() < 2 {
            return None;
        }
        let (start, end) = direction.unit_points();
        let last = (colors.len() - 1) as f32;
        let stops = colors
            .iter()
            .enumerate()
            .map(|(i, &color)| ColorStop::new(i as f32 / last, color))
            .collect();
        Some(GradientSpec { start, end, stops })
    }

    /// Scales the unit-square axis into `rect`, producing a pixel-space
    /// gradient ready for per-pixel evaluation.
    pub fn in_rect(&self, rect: Rect) -> LinearGradient {
        let map = |p: Vec2| {
            Vec2::new(
                rect.origin.x + p.x * rect.size.x,
                rect.origin.y + p.y * rect.size.y,
            )
        };
        LinearGradient {
            start: map(self.start),
            end: map(self.end),
            stops: self.stops.clone(),
        }
    }
}

/// Linear gradient in pixel space.
///
/// Semantics:
/// - `start` and `end` are positions in the same coordinate space as geometry.
/// - Stops define premultiplied linear colors, sorted ascending by `t`.
/// - Out-of-range positions clamp to the edge stops (pad spread).
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<ColorStop>,
}

impl LinearGradient {
    /// Evaluates the gradient at pixel position `p`.
    ///
    /// Projects `p` onto the start→end axis, clamps the parameter to
    /// `[0, 1]`, and interpolates between the bracketing stops. A degenerate
    /// (zero-length) axis evaluates to the first stop.
    pub fn color_at(&self, p: Vec2) -> Color {
        let (first, last) = match (self.stops.first(), self.stops.last()) {
            (Some(f), Some(l)) => (f, l),
            _ => return Color::transparent(),
        };

        let axis = self.end - self.start;
        let len2 = axis.length_squared();
        if len2 <= f32::EPSILON {
            return first.color;
        }
        let t = ((p - self.start).dot(axis) / len2).clamp(0.0, 1.0);

        if t <= first.t {
            return first.color;
        }
        if t >= last.t {
            return last.color;
        }
        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t <= b.t {
                let span = b.t - a.t;
                let local = if span <= f32::EPSILON { 0.0 } else { (t - a.t) / span };
                return a.color.lerp(b.color, local);
            }
        }
        last.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> Color {
        Color::from_straight(1.0, 0.0, 0.0, 1.0)
    }

    fn blue() -> Color {
        Color::from_straight(0.0, 0.0, 1.0, 1.0)
    }

    fn green() -> Color {
        Color::from_straight(0.0, 1.0, 0.0, 1.0)
    }

    // ── direction table ───────────────────────────────────────────────────

    #[test]
    fn direction_unit_points_table() {
        use GradientDirection::*;
        let cases = [
            (TopToDown, (0.5, 0.0), (0.5, 1.0)),
            (DownToTop, (0.5, 1.0), (0.5, 0.0)),
            (LeftToRight, (0.0, 0.5), (1.0, 0.5)),
            (RightToLeft, (1.0, 0.5), (0.0, 0.5)),
            (LeftTopToRightDown, (0.0, 0.0), (1.0, 1.0)),
            (RightDownToLeftTop, (1.0, 1.0), (0.0, 0.0)),
            (LeftDownToRightTop, (0.0, 1.0), (1.0, 0.0)),
            (RightTopToLeftDown, (1.0, 0.0), (0.0, 1.0)),
        ];
        for (dir, s, e) in cases {
            let (start, end) = dir.unit_points();
            assert_eq!(start, Vec2::new(s.0, s.1), "{dir:?} start");
            assert_eq!(end, Vec2::new(e.0, e.1), "{dir:?} end");
        }
    }

    #[test]
    fn direction_default_is_left_to_right() {
        assert_eq!(GradientDirection::default(), GradientDirection::LeftToRight);
    }

    // ── resolve ───────────────────────────────────────────────────────────

    #[test]
    fn resolve_empty_and_singleton_disable_gradient() {
        assert_eq!(GradientSpec::resolve(GradientDirection::LeftToRight, &[]), None);
        assert_eq!(
            GradientSpec::resolve(GradientDirection::LeftToRight, &[red()]),
            None
        );
    }

    #[test]
    fn resolve_two_colors() {
        let spec = GradientSpec::resolve(GradientDirection::TopToDown, &[red(), blue()]).unwrap();
        assert_eq!(spec.start, Vec2::new(0.5, 0.0));
        assert_eq!(spec.end, Vec2::new(0.5, 1.0));
        assert_eq!(spec.stops, vec![ColorStop::new(0.0, red()), ColorStop::new(1.0, blue())]);
    }

    #[test]
    fn resolve_stops_evenly_spaced_and_monotonic() {
        let colors = [red(), green(), blue(), red(), blue()];
        let spec = GradientSpec::resolve(GradientDirection::LeftToRight, &colors).unwrap();
        assert_eq!(spec.stops.len(), 5);
        assert_eq!(spec.stops.first().unwrap().t, 0.0);
        assert_eq!(spec.stops.last().unwrap().t, 1.0);
        for (i, stop) in spec.stops.iter().enumerate() {
            let expected = i as f32 / 4.0;
            assert!((stop.t - expected).abs() < 1e-6, "stop {i}");
        }
        for pair in spec.stops.windows(2) {
            assert!(pair[0].t < pair[1].t);
        }
    }

    #[test]
    fn resolve_identical_colors_keep_distinct_offsets() {
        let spec = GradientSpec::resolve(GradientDirection::LeftToRight, &[red(), red()]).unwrap();
        assert_eq!(spec.stops[0].t, 0.0);
        assert_eq!(spec.stops[1].t, 1.0);
        assert_eq!(spec.stops[0].color, spec.stops[1].color);
    }

    // ── in_rect ───────────────────────────────────────────────────────────

    #[test]
    fn in_rect_scales_axis_into_pixel_space() {
        let spec =
            GradientSpec::resolve(GradientDirection::LeftToRight, &[red(), blue()]).unwrap();
        let g = spec.in_rect(Rect::new(10.0, 20.0, 100.0, 50.0));
        assert_eq!(g.start, Vec2::new(10.0, 45.0));
        assert_eq!(g.end, Vec2::new(110.0, 45.0));
    }

    // ── color_at ──────────────────────────────────────────────────────────

    #[test]
    fn color_at_endpoints_and_midpoint() {
        let spec =
            GradientSpec::resolve(GradientDirection::LeftToRight, &[red(), blue()]).unwrap();
        let g = spec.in_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(g.color_at(Vec2::new(0.0, 5.0)), red());
        assert_eq!(g.color_at(Vec2::new(10.0, 5.0)), blue());
        let mid = g.color_at(Vec2::new(5.0, 5.0));
        assert!((mid.r - 0.5).abs() < 1e-6);
        assert!((mid.b - 0.5).abs() < 1e-6);
    }

    #[test]
    fn color_at_clamps_outside_axis() {
        let spec =
            GradientSpec::resolve(GradientDirection::LeftToRight, &[red(), blue()]).unwrap();
        let g = spec.in_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(g.color_at(Vec2::new(-100.0, 5.0)), red());
        assert_eq!(g.color_at(Vec2::new(100.0, 5.0)), blue());
    }

    #[test]
    fn color_at_ignores_cross_axis_position() {
        let spec = GradientSpec::resolve(GradientDirection::TopToDown, &[red(), blue()]).unwrap();
        let g = spec.in_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(g.color_at(Vec2::new(0.0, 0.0)), g.color_at(Vec2::new(9.0, 0.0)));
    }

    #[test]
    fn color_at_degenerate_axis_is_first_stop() {
        let g = LinearGradient {
            start: Vec2::new(3.0, 3.0),
            end: Vec2::new(3.0, 3.0),
            stops: vec![ColorStop::new(0.0, red()), ColorStop::new(1.0, blue())],
        };
        assert_eq!(g.color_at(Vec2::new(7.0, 7.0)), red());
    }

    #[test]
    fn color_at_three_stops_interpolates_per_segment() {
        let spec =
            GradientSpec::resolve(GradientDirection::LeftToRight, &[red(), green(), blue()])
                .unwrap();
        let g = spec.in_rect(Rect::new(0.0, 0.0, 100.0, 10.0));
        assert_eq!(g.color_at(Vec2::new(50.0, 0.0)), green());
        let q = g.color_at(Vec2::new(25.0, 0.0));
        assert!((q.r - 0.5).abs() < 1e-6);
        assert!((q.g - 0.5).abs() < 1e-6);
    }
}
