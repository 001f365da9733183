mod parse_face_components;
mod triangulate_face;

pub use parse_face_components::resolve_index;
pub use triangulate_face::triangulate_face;

use rs42::extensions::vec::TryPush;

use super::{ObjBuilder, ObjParsingErrorDetail};
use parse_face_components::parse_face_components;

/// One `position[/texture][/normal]` reference of a face, resolved to 0-based indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FaceVertex {
    pub position: u32,
    pub texture: Option<u32>,
    pub normal: Option<u32>,
}

/// A polygon of at least 3 vertices, not triangulated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Face {
    vertices: Box<[FaceVertex]>,
}

impl Face {
    pub fn vertices(&self) -> &[FaceVertex] {
        &self.vertices
    }

    pub fn has_normals(&self) -> bool {
        self.vertices.iter().any(|vertex| vertex.normal.is_some())
    }
}

pub fn parse_face_line(
    remainder: &str,
    obj_builder: &mut ObjBuilder,
) -> Result<(), ObjParsingErrorDetail> {
    let face = parse_face_components(remainder, obj_builder)?;

    obj_builder.has_normals |= face.has_normals();
    obj_builder
        .faces
        .try_push(face)
        .map_err(ObjParsingErrorDetail::AllocationFailure)
}
