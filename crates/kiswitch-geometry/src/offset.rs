//! Mitered polygon offsetting.
//!
//! Every output vertex is the intersection of the two neighbouring edges after
//! each edge is moved `offset` along its normal. Corners are always mitered;
//! there is no bevel or round fallback, so a corner that folds back on itself
//! produces a vertex far away from the source polygon.

use kiswitch_core::{Vec2, GRID};

use crate::primitives::is_closed;
use crate::GeometryError;

/// Offset a polygon by `offset` (negative shrinks).
///
/// `outer_ccw` states the winding of `poly` in y-up axes; with it set, a
/// positive offset grows a counter-clockwise polygon. Open polylines are
/// treated as implicitly closed for the corner computation but stay open in
/// the output. An explicitly closed input (first vertex repeated last) comes
/// back explicitly closed. Coordinates are snapped to [`GRID`].
pub fn offset_polygon(
    poly: &[Vec2],
    offset: f64,
    outer_ccw: bool,
) -> Result<Vec<Vec2>, GeometryError> {
    let closed = is_closed(poly);
    let pts = if closed { &poly[..poly.len() - 1] } else { poly };

    let n = pts.len();
    if n < 3 {
        return Err(GeometryError::TooFewVertices(n));
    }

    let sign = if outer_ccw { 1.0 } else { -1.0 };
    let mut out = Vec::with_capacity(n + usize::from(closed));

    for curr in 0..n {
        let p = pts[curr];
        let prev = pts[(curr + n - 1) % n];
        let next = pts[(curr + 1) % n];

        let n_out = (next - p).normalize().perp() * sign;
        let n_in = (p - prev).normalize().perp() * sign;

        let bisector = (n_out + n_in).normalize();
        // cos of the half angle between the two normals
        let half_cos = ((1.0 + n_out.dot(n_in)) / 2.0).sqrt();
        let shift = if bisector == Vec2::ZERO {
            Vec2::ZERO
        } else {
            bisector * (offset / half_cos)
        };

        out.push((p + shift).round_to(GRID));
    }

    if closed {
        out.push(out[0]);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::polyline;
    use approx::assert_abs_diff_eq;

    fn square() -> Vec<Vec2> {
        polyline(&[[-1.0, -1.0], [1.0, -1.0], [1.0, 1.0], [-1.0, 1.0], [-1.0, -1.0]])
    }

    #[test]
    fn grows_closed_square() {
        let got = offset_polygon(&square(), 0.5, true).unwrap();
        let expected = polyline(&[[-1.5, -1.5], [1.5, -1.5], [1.5, 1.5], [-1.5, 1.5], [-1.5, -1.5]]);
        assert_eq!(got.len(), expected.len());
        for (g, e) in got.iter().zip(&expected) {
            assert!(g.abs_diff_max(*e) <= 0.001, "{g:?} vs {e:?}");
        }
    }

    #[test]
    fn open_input_stays_open() {
        let open = &square()[..4];
        let got = offset_polygon(open, 0.5, true).unwrap();
        assert_eq!(got.len(), 4);
        assert_ne!(got.first(), got.last());
        assert_abs_diff_eq!(got[2].x, 1.5, epsilon = 1e-9);
    }

    #[test]
    fn reversed_flag_shrinks() {
        let got = offset_polygon(&square(), 0.5, false).unwrap();
        assert_abs_diff_eq!(got[0].x, -0.5, epsilon = 1e-9);
        assert_abs_diff_eq!(got[0].y, -0.5, epsilon = 1e-9);
    }

    #[test]
    fn collinear_vertex_moves_by_offset() {
        let pts = polyline(&[[-1.0, -1.0], [0.0, -1.0], [1.0, -1.0], [1.0, 1.0], [-1.0, 1.0]]);
        let got = offset_polygon(&pts, 0.25, true).unwrap();
        assert_abs_diff_eq!(got[1].x, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(got[1].y, -1.25, epsilon = 1e-9);
    }

    #[test]
    fn duplicate_vertex_does_not_poison_output() {
        let pts = polyline(&[[-1.0, -1.0], [1.0, -1.0], [1.0, -1.0], [1.0, 1.0], [-1.0, 1.0]]);
        let got = offset_polygon(&pts, 0.1, true).unwrap();
        assert!(got.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    }

    #[test]
    fn sharp_reflex_corner_is_not_clamped() {
        // a thin spike: the miter at its tip runs far beyond the offset distance
        let pts = polyline(&[[0.0, 0.0], [10.0, -0.05], [0.0, -0.1], [-5.0, 5.0]]);
        let got = offset_polygon(&pts, 0.5, true).unwrap();
        let tip = got[1];
        assert!((tip - Vec2::new(10.0, -0.05)).length() > 50.0);
        assert!(tip.x.is_finite());
    }

    #[test]
    fn rejects_degenerate_polygon() {
        let pts = polyline(&[[0.0, 0.0], [1.0, 0.0], [0.0, 0.0]]);
        assert_eq!(
            offset_polygon(&pts, 0.1, true),
            Err(GeometryError::TooFewVertices(2))
        );
    }
}
