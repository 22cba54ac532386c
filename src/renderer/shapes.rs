//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Generate vertices for an axis-aligned rectangle (top-left anchored)
pub fn rect(pos: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    quad([pos, pos + Vec2::new(size.x, 0.0), pos + size, pos + Vec2::new(0.0, size.y)], color)
}

/// Generate vertices for a rectangle of `size` centred on `center`, rotated by `angle`
pub fn rotated_rect(center: Vec2, size: Vec2, angle: f32, color: [f32; 4]) -> Vec<Vertex> {
    let rot = Vec2::from_angle(angle);
    let half = size / 2.0;
    let corners = [
        Vec2::new(-half.x, -half.y),
        Vec2::new(half.x, -half.y),
        Vec2::new(half.x, half.y),
        Vec2::new(-half.x, half.y),
    ]
    .map(|corner| center + rot.rotate(corner));
    quad(corners, color)
}

/// Two triangles covering a convex quad given in winding order
fn quad(corners: [Vec2; 4], color: [f32; 4]) -> Vec<Vertex> {
    let [a, b, c, d] = corners;
    vec![
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(d.x, d.y, color),
        Vertex::new(a.x, a.y, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a heart whose top notch sits at `top` and whose
/// point sits `size` below it
pub fn heart(top: Vec2, size: f32, color: [f32; 4]) -> Vec<Vertex> {
    let lobe_radius = size * 0.3;
    let lobe_y = top.y + lobe_radius * 0.8;
    let left = Vec2::new(top.x - lobe_radius, lobe_y);
    let right = Vec2::new(top.x + lobe_radius, lobe_y);

    let mut vertices = circle(left, lobe_radius, color, 12);
    vertices.extend(circle(right, lobe_radius, color, 12));

    // Wedge from the lobes' outer edges down to the point
    let tip = Vec2::new(top.x, top.y + size);
    let outer_left = Vec2::new(left.x - lobe_radius, lobe_y);
    let outer_right = Vec2::new(right.x + lobe_radius, lobe_y);
    vertices.push(Vertex::new(outer_left.x, outer_left.y, color));
    vertices.push(Vertex::new(outer_right.x, outer_right.y, color));
    vertices.push(Vertex::new(tip.x, tip.y, color));

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(vertices: &[Vertex]) -> (Vec2, Vec2) {
        vertices.iter().fold(
            (Vec2::splat(f32::MAX), Vec2::splat(f32::MIN)),
            |(min, max), v| {
                let p = Vec2::from(v.position);
                (min.min(p), max.max(p))
            },
        )
    }

    #[test]
    fn test_rect_covers_bounds() {
        let vertices = rect(Vec2::new(10.0, 20.0), Vec2::new(100.0, 20.0), [1.0; 4]);
        assert_eq!(vertices.len(), 6);
        let (min, max) = bounds(&vertices);
        assert_eq!(min, Vec2::new(10.0, 20.0));
        assert_eq!(max, Vec2::new(110.0, 40.0));
    }

    #[test]
    fn test_quarter_turn_swaps_extent() {
        let vertices = rotated_rect(Vec2::ZERO, Vec2::new(40.0, 10.0), PI / 2.0, [1.0; 4]);
        let (min, max) = bounds(&vertices);
        assert!((max.x - min.x - 10.0).abs() < 1e-3);
        assert!((max.y - min.y - 40.0).abs() < 1e-3);
    }

    #[test]
    fn test_heart_spans_size() {
        let vertices = heart(Vec2::new(100.0, 15.0), 20.0, [1.0; 4]);
        let (min, max) = bounds(&vertices);
        assert!((max.y - 35.0).abs() < 1e-4);
        assert!(min.y >= 15.0 - 20.0);
        assert!(((min.x + max.x) / 2.0 - 100.0).abs() < 1e-3);
    }
}
