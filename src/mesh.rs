use crate::math::Vec3;
use crate::vertex::Vertex;

/// Outward normal, first tangent and color of each cube face. The second
/// tangent is `normal x tangent`, which keeps every face counter-clockwise
/// when seen from outside.
const FACES: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
    ([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.90, 0.30, 0.25]),
    ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.25, 0.75, 0.35]),
    ([0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [0.25, 0.45, 0.90]),
    ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.95, 0.80, 0.25]),
    ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.70, 0.35, 0.85]),
    ([0.0, 0.0, -1.0], [0.0, 1.0, 0.0], [0.25, 0.80, 0.85]),
];

/// Unit cube centered at the origin, one flat color per face.
pub fn cube() -> (Vec<Vertex>, Vec<u16>) {
    let mut vertices = Vec::with_capacity(FACES.len() * 4);
    let mut indices = Vec::with_capacity(FACES.len() * 6);

    for (normal, tangent, color) in FACES {
        let n = Vec3::from(normal) * 0.5;
        let u = Vec3::from(tangent) * 0.5;
        let v = Vec3::from(normal).cross(Vec3::from(tangent)) * 0.5;

        let base = vertices.len() as u16;
        for corner in [n - u - v, n + u - v, n + u + v, n - u + v] {
            vertices.push(Vertex {
                position: corner.to_array(),
                color,
            });
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    (vertices, indices)
}
