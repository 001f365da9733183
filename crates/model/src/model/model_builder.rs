use std::collections::HashMap;

use rs42::extensions::PipeLine;
use tracing::debug;

use crate::{
    normals::generate_normals,
    obj::{triangulate_face, FaceVertex, Obj},
    vertex::{Vec2, Vec3},
    ObjFile, Vertex,
};

use super::{Model, ModelError, VertexIndex};

#[derive(Default)]
pub struct ModelBuilder {
    normalize_to_unit_width: bool,

    vertices: Vec<Vertex>,
    vertex_indices: Vec<VertexIndex>,

    vertex_map: HashMap<Vertex, VertexIndex>,
}

impl ModelBuilder {
    /// Centers the model on the X axis and scales it so that its X extent is 1.
    pub fn normalize_to_unit_width(mut self, enabled: bool) -> Self {
        self.normalize_to_unit_width = enabled;
        self
    }

    pub fn load(self, obj_file: ObjFile) -> Result<Model, ModelError> {
        let obj = Obj::try_from(obj_file)?;
        self.build(&obj)
    }

    pub fn build(mut self, obj: &Obj) -> Result<Model, ModelError> {
        let positions = self.positions(obj);

        let synthesized_normals = if obj.has_normals() {
            None
        } else {
            let triangles = obj
                .faces()
                .iter()
                .flat_map(triangulate_face)
                .flat_map(|triangle| triangle.map(|vertex| vertex.position))
                .collect::<Vec<_>>();
            debug!(triangles = triangles.len() / 3, "generating normals");
            generate_normals(&positions, &triangles)?.pipe(Some)
        };

        for face in obj.faces() {
            for triangle in triangulate_face(face) {
                for face_vertex in triangle {
                    let normal = match &synthesized_normals {
                        Some(normals) => normals[face_vertex.position as usize],
                        None => file_normal(obj, &face_vertex),
                    };
                    let vertex = Vertex::new(
                        positions[face_vertex.position as usize],
                        normal,
                        texture_coordinate(obj, &face_vertex),
                    );
                    self.add_vertex(vertex);
                }
            }
        }

        Ok(Model {
            vertices: self.vertices.into_boxed_slice(),
            vertex_indices: self.vertex_indices.into_boxed_slice(),
            synthesized_normals: synthesized_normals.is_some(),
        })
    }

    fn positions(&self, obj: &Obj) -> Vec<Vec3> {
        let positions = obj
            .positions()
            .iter()
            .map(|position| position.take::<3>())
            .collect::<Vec<_>>();
        if !self.normalize_to_unit_width {
            return positions;
        }

        let (min_x, max_x) = positions
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(min, max), position| {
                (min.min(position[0]), max.max(position[0]))
            });
        let width = max_x - min_x;
        if !(width.is_finite() && width > 0.) {
            return positions;
        }

        let center_x = min_x + width / 2.;
        positions
            .into_iter()
            .map(|mut position| {
                position[0] -= center_x;
                position / width
            })
            .collect()
    }

    fn add_vertex(&mut self, vertex: Vertex) {
        self.vertex_map
            .entry(vertex.clone())
            .and_modify(|index| self.vertex_indices.push(*index))
            .or_insert_with(|| {
                let index = self.vertices.len() as u32;
                self.vertices.push(vertex);
                self.vertex_indices.push(index);
                index
            });
    }
}

fn file_normal(obj: &Obj, face_vertex: &FaceVertex) -> Vec3 {
    face_vertex
        .normal
        .map_or_else(Vec3::default, |index| obj.normals()[index as usize])
}

// OBJ puts the texture origin in the upper left corner
fn texture_coordinate(obj: &Obj, face_vertex: &FaceVertex) -> Vec2 {
    face_vertex.texture.map_or_else(Vec2::default, |index| {
        let texture = &obj.textures()[index as usize];
        Vec2::from([texture[0], 1. - texture[1]])
    })
}

#[cfg(test)]
mod test {
    use std::io::{BufReader, Cursor, Write};

    use linear_algebra::assert_approximately_equal;

    use super::*;
    use crate::{normals::NormalsError, ErrorKind};

    fn obj(content: &str) -> Obj {
        BufReader::new(Cursor::new(content.as_bytes().to_vec()))
            .try_into()
            .unwrap()
    }

    const QUAD: &str = "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n";

    #[test]
    fn quad_is_triangulated_and_deduplicated() {
        let model = Model::try_from(obj(QUAD)).unwrap();
        assert_eq!(model.triangle_count(), 2);
        assert_eq!(model.vertices().len(), 4);
        assert_eq!(model.vertex_indices(), [0, 1, 2, 0, 2, 3]);
    }

    #[test]
    fn missing_normals_are_synthesized() {
        let model = Model::try_from(obj(QUAD)).unwrap();
        assert!(model.synthesized_normals());
        for vertex in model.vertices() {
            assert_eq!(*vertex.normal(), Vec3::from([0., 0., 1.]));
        }
    }

    #[test]
    fn file_normals_are_used() {
        let model = Model::try_from(obj(
            "v 0 0 0\nv 1 0 0\nv 0 1 0\nvn 0 0 -1\nvn 1 0 0\nf 1//1 2//1 3//2\n",
        ))
        .unwrap();
        assert!(!model.synthesized_normals());
        assert_eq!(*model.vertices()[0].normal(), Vec3::from([0., 0., -1.]));
        assert_eq!(*model.vertices()[2].normal(), Vec3::from([1., 0., 0.]));
    }

    #[test]
    fn face_vertex_without_normal_in_a_file_with_normals() {
        let model = Model::try_from(obj(
            "v 0 0 0\nv 1 0 0\nv 0 1 0\nvn 0 0 1\nf 1//1 2//1 3//1\nf 3 2 1\n",
        ))
        .unwrap();
        assert!(!model.synthesized_normals());
        assert_eq!(model.vertices().len(), 6);
        assert!(model.vertices()[3..].iter().all(|vertex| vertex.normal().is_zero()));
    }

    #[test]
    fn texture_coordinates_are_flipped() {
        let model =
            Model::try_from(obj("v 0 0 0\nv 1 0 0\nv 0 1 0\nvt 0.25 0.25\nf 1/1 2/1 3\n")).unwrap();
        assert_eq!(
            *model.vertices()[0].texture_coordinate(),
            Vec2::from([0.25, 0.75])
        );
        assert_eq!(*model.vertices()[2].texture_coordinate(), Vec2::default());
    }

    #[test]
    fn normalize_to_unit_width() {
        let model = ModelBuilder::default()
            .normalize_to_unit_width(true)
            .build(&obj("v 2 0 0\nv 6 0 0\nv 4 2 0\nf 1 2 3\n"))
            .unwrap();
        let positions = model
            .vertices()
            .iter()
            .map(|vertex| *vertex.position())
            .collect::<Vec<_>>();
        assert_approximately_equal(positions[0][0], -0.5);
        assert_approximately_equal(positions[1][0], 0.5);
        assert_approximately_equal(positions[2][0], 0.);
        assert_approximately_equal(positions[2][1], 0.5);
        assert_eq!(*model.vertices()[0].normal(), Vec3::from([0., 0., 1.]));
    }

    #[test]
    fn normalize_to_unit_width_ignores_flat_models() {
        let model = ModelBuilder::default()
            .normalize_to_unit_width(true)
            .build(&obj("v 1 0 0\nv 1 1 0\nv 1 0 1\nf 1 2 3\n"))
            .unwrap();
        assert_eq!(*model.vertices()[1].position(), Vec3::from([1., 1., 0.]));
    }

    #[test]
    fn load_reports_parsing_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "v 0 0 0\nv 1 0 0\nv 0 1 0\ncstype bspline\nf 1 2 3").unwrap();

        let Err(ModelError::Parsing(err)) = Model::try_from(ObjFile(file.path())) else {
            panic!("expected a parsing error");
        };
        assert_eq!(err.kind(), ErrorKind::UnsupportedDirective);
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{QUAD}").unwrap();

        let model = ModelBuilder::default().load(ObjFile(file.path())).unwrap();
        assert_eq!(model.triangle_count(), 2);
    }

    #[test]
    fn normals_error_converts() {
        let err = ModelError::from(NormalsError::IncompleteTriangle(4));
        assert!(err.to_string().contains("not a multiple of 3"));
    }
}
