use super::{Face, FaceVertex};

/// Fan triangulation around the first vertex, only correct for convex faces.
pub fn triangulate_face(face: &Face) -> impl Iterator<Item = [FaceVertex; 3]> + '_ {
    // TODO write an algorithm that works with concave polygons
    let vertices = face.vertices();
    (1..vertices.len() - 1).map(move |i| [vertices[0], vertices[i], vertices[i + 1]])
}

#[cfg(test)]
mod test {
    use super::*;

    fn face(arity: u32) -> Face {
        Face {
            vertices: (0..arity)
                .map(|position| FaceVertex {
                    position,
                    texture: None,
                    normal: None,
                })
                .collect(),
        }
    }

    fn positions(triangles: impl Iterator<Item = [FaceVertex; 3]>) -> Vec<[u32; 3]> {
        triangles
            .map(|triangle| triangle.map(|vertex| vertex.position))
            .collect()
    }

    #[test]
    fn triangle_is_kept() {
        assert_eq!(positions(triangulate_face(&face(3))), [[0, 1, 2]]);
    }

    #[test]
    fn polygon_is_fanned() {
        assert_eq!(
            positions(triangulate_face(&face(5))),
            [[0, 1, 2], [0, 2, 3], [0, 3, 4]]
        );
    }
}
