//! Smooth vertex normals for meshes whose file carries none.

use crate::vertex::Vec3;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum NormalsError {
    #[error("triangle index buffer length {0} is not a multiple of 3")]
    IncompleteTriangle(usize),
    #[error("triangle references vertex {index} but there are only {vertex_count} vertices")]
    TriangleIndexOutOfBounds { index: u32, vertex_count: usize },
}

/// Computes one normal per position by summing the unit normals of every triangle that uses
/// the position, then normalizing the sum.
///
/// Every 3 consecutive `triangles` indices form a triangle wound counter-clockwise, so faces
/// must be triangulated beforehand. Positions used by no triangle get a zero normal.
///
/// Degenerate triangles have no direction: their normal is NaN and so is the normal of each
/// of their vertices.
pub fn generate_normals(
    positions: &[Vec3],
    triangles: &[u32],
) -> Result<Vec<Vec3>, NormalsError> {
    if triangles.len() % 3 != 0 {
        return Err(NormalsError::IncompleteTriangle(triangles.len()));
    }
    if let Some(&index) = triangles
        .iter()
        .find(|&&index| index as usize >= positions.len())
    {
        return Err(NormalsError::TriangleIndexOutOfBounds {
            index,
            vertex_count: positions.len(),
        });
    }

    let mut normals = vec![Vec3::default(); positions.len()];

    for triangle in triangles.chunks_exact(3) {
        let [v0, v1, v2] = [triangle[0], triangle[1], triangle[2]].map(|index| index as usize);
        let p0 = positions[v0];
        let edge1 = positions[v1] - &p0;
        let edge2 = positions[v2] - &p0;
        let face_normal = (edge1 ^ edge2).normalize();

        normals[v0] += face_normal;
        normals[v1] += face_normal;
        normals[v2] += face_normal;
    }

    for normal in normals.iter_mut().filter(|normal| !normal.is_zero()) {
        *normal = normal.normalize();
    }

    Ok(normals)
}
