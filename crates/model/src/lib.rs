//! Wavefront `.obj` loading: a line-oriented parser producing an [`Obj`], smooth normal
//! synthesis for files that carry no normals, and a deduplicated triangle [`Model`] ready
//! to be uploaded to a vertex buffer.

mod model;
pub mod normals;
pub mod obj;
mod vertex;

pub use model::{Model, ModelBuilder, ModelError, VertexIndex};
pub use obj::{ErrorKind, Obj, ObjFile, ObjParsingError, ObjParsingErrorDetail};
pub use vertex::{Vec2, Vec3, Vec4, Vertex};
