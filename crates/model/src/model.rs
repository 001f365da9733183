mod model_builder;

pub use model_builder::ModelBuilder;

use crate::{normals::NormalsError, obj::Obj, vertex::Vertex, ObjFile, ObjParsingError};

pub type VertexIndex = u32;

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error(transparent)]
    Parsing(#[from] ObjParsingError),
    #[error("failed to generate normals: {0}")]
    Normals(#[from] NormalsError),
}

/// Triangle list with deduplicated vertices.
pub struct Model {
    vertices: Box<[Vertex]>,
    vertex_indices: Box<[VertexIndex]>,
    synthesized_normals: bool,
}

// Constructors:

impl<'a> TryFrom<ObjFile<'a>> for Model {
    type Error = ModelError;

    fn try_from(obj_file: ObjFile<'a>) -> Result<Self, Self::Error> {
        ModelBuilder::default().load(obj_file)
    }
}

impl TryFrom<Obj> for Model {
    type Error = ModelError;

    fn try_from(obj: Obj) -> Result<Self, Self::Error> {
        ModelBuilder::default().build(&obj)
    }
}

// Getters:

impl Model {
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn vertex_indices(&self) -> &[VertexIndex] {
        &self.vertex_indices
    }

    pub fn triangle_count(&self) -> usize {
        self.vertex_indices.len() / 3
    }

    /// True when the file had no normals and they were generated from the triangles.
    pub fn synthesized_normals(&self) -> bool {
        self.synthesized_normals
    }
}
