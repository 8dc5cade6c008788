use kiswitch_core::Vec2;

/// Corners of an axis-aligned rectangle centered on `center`, rotated about that center.
///
/// Order is top-left, top-right, bottom-right, bottom-left in KiCad space.
pub fn rectangle(center: Vec2, size: Vec2, rotation_deg: f64) -> [Vec2; 4] {
    let h = size / 2.0;
    let mut pts = [
        Vec2::new(center.x - h.x, center.y - h.y),
        Vec2::new(center.x + h.x, center.y - h.y),
        Vec2::new(center.x + h.x, center.y + h.y),
        Vec2::new(center.x - h.x, center.y + h.y),
    ];

    if rotation_deg != 0.0 {
        for p in &mut pts {
            *p = p.rotate_about(rotation_deg, center);
        }
    }
    pts
}

/// Start and end corners of a rectangle grown by `margin` on every side.
pub fn inflate(start: Vec2, end: Vec2, margin: f64) -> (Vec2, Vec2) {
    let min = Vec2::new(start.x.min(end.x), start.y.min(end.y));
    let max = Vec2::new(start.x.max(end.x), start.y.max(end.y));
    (min - Vec2::splat(margin), max + Vec2::splat(margin))
}

pub fn polyline(vertices: &[[f64; 2]]) -> Vec<Vec2> {
    vertices.iter().copied().map(Vec2::from).collect()
}

/// True when the first vertex is repeated as the last one.
pub fn is_closed(vertices: &[Vec2]) -> bool {
    vertices.len() > 1 && vertices.first() == vertices.last()
}

/// Close a polyline by repeating its first vertex, unless it already is closed.
pub fn closed(mut vertices: Vec<Vec2>) -> Vec<Vec2> {
    if !is_closed(&vertices) {
        if let Some(first) = vertices.first().copied() {
            vertices.push(first);
        }
    }
    vertices
}

/// Signed shoelace area; positive when the vertices wind counter-clockwise in y-up axes.
pub fn signed_area(vertices: &[Vec2]) -> f64 {
    let n = vertices.len();
    if n < 3 {
        return 0.0;
    }
    let mut acc = 0.0;
    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        acc += a.x * b.y - b.x * a.y;
    }
    acc / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn rectangle_corners_are_centered() {
        let r = rectangle(Vec2::ZERO, Vec2::new(4.0, 2.0), 0.0);
        assert_eq!(r[0], Vec2::new(-2.0, -1.0));
        assert_eq!(r[2], Vec2::new(2.0, 1.0));
    }

    #[test]
    fn rotated_rectangle_swaps_extents() {
        let r = rectangle(Vec2::ZERO, Vec2::new(4.0, 2.0), 90.0);
        assert_abs_diff_eq!(r[0].x, 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(r[0].y, -2.0, epsilon = 1e-9);
    }

    #[test]
    fn inflate_orders_corners() {
        let (s, e) = inflate(Vec2::new(1.0, 1.0), Vec2::new(-1.0, -1.0), 0.5);
        assert_eq!(s, Vec2::new(-1.5, -1.5));
        assert_eq!(e, Vec2::new(1.5, 1.5));
    }

    #[test]
    fn closed_appends_first_vertex_once() {
        let pts = closed(polyline(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]));
        assert_eq!(pts.len(), 4);
        assert!(is_closed(&pts));
        assert_eq!(closed(pts.clone()).len(), 4);
    }

    #[test]
    fn unit_square_area_sign() {
        let ccw = polyline(&[[-1.0, -1.0], [1.0, -1.0], [1.0, 1.0], [-1.0, 1.0]]);
        assert_abs_diff_eq!(signed_area(&ccw), 4.0, epsilon = 1e-12);
    }
}
