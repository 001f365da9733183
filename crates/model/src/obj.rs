mod components;
mod directive;
mod face;
mod handle_unrecognized_line;
mod logical_lines;
mod normal;
mod texture;
mod vertex;

pub use components::VectorKind;
pub use directive::{Directive, DIRECTIVES};
pub use face::{resolve_index, triangulate_face, Face, FaceVertex};
pub use logical_lines::{LogicalLine, LogicalLines};

use face::parse_face_line;
use handle_unrecognized_line::handle_unrecognized_line;
use normal::parse_normal_line;
use texture::parse_texture_line;
use vertex::parse_vertex_line;

use std::{
    collections::TryReserveError,
    error::Error,
    fmt::{Debug, Display},
    fs::File,
    io::{self, BufReader, Read},
    num::{ParseFloatError, ParseIntError},
    path::Path,
};

use tracing::info;

use crate::vertex::{Vec2, Vec3, Vec4};

pub struct ObjFile<'a>(pub &'a Path);

/// Everything a `.obj` file declares, with face indices already resolved to 0-based offsets
/// into the lists of this struct.
#[derive(Debug)]
pub struct Obj {
    positions: Box<[Vec4]>,
    normals: Box<[Vec3]>,
    textures: Box<[Vec2]>,
    faces: Box<[Face]>,
    has_normals: bool,
}

#[derive(Default, Debug)]
struct ObjBuilder {
    positions: Vec<Vec4>,
    normals: Vec<Vec3>,
    textures: Vec<Vec2>,
    faces: Vec<Face>,
    has_normals: bool,
}

pub struct ObjParsingError {
    line: Option<(usize, String)>,
    detail: ObjParsingErrorDetail,
}

#[derive(Debug, thiserror::Error)]
pub enum ObjParsingErrorDetail {
    #[error("failed to open file: {0}")]
    FailedToOpenFile(#[source] io::Error),
    #[error("failed to read file: {0}")]
    FailedToReadFile(#[source] io::Error),

    #[error("allocation failure: {0}")]
    AllocationFailure(#[source] TryReserveError),

    #[error("\"{0}\" is not supported")]
    UnsupportedDirective(String),

    #[error("{kind} expects {} components, found {found}", .kind.expected_components())]
    MalformedVector { kind: VectorKind, found: usize },
    #[error("invalid component in {kind}: {err}")]
    InvalidComponent {
        kind: VectorKind,
        #[source]
        err: ParseFloatError,
    },

    #[error("invalid sub component in face: {0}")]
    InvalidSubComponentInFace(#[source] ParseIntError),
    #[error("face sub component can not be 0")]
    FaceSubComponentCanNotBe0,
    #[error("face references {kind} {index} but only {len} were declared before it")]
    FaceIndexOutOfRange {
        kind: VectorKind,
        index: i64,
        len: usize,
    },
    #[error("face should have at least 3 components, found {0}")]
    FaceShouldHaveAtLeast3Components(usize),
    #[error("too many sub components in face component \"{0}\"")]
    TooManySubComponentsInFace(String),
}

/// Coarse classification of [`ObjParsingErrorDetail`]. Every kind aborts the whole parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UnsupportedDirective,
    MalformedVector,
    NumericParseError,
    InvalidFace,
    AllocationFailure,
    IoError,
}

impl ObjParsingErrorDetail {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::FailedToOpenFile(_) | Self::FailedToReadFile(_) => ErrorKind::IoError,
            Self::AllocationFailure(_) => ErrorKind::AllocationFailure,
            Self::UnsupportedDirective(_) => ErrorKind::UnsupportedDirective,
            Self::MalformedVector { .. } => ErrorKind::MalformedVector,
            Self::InvalidComponent { .. } | Self::InvalidSubComponentInFace(_) => {
                ErrorKind::NumericParseError
            }
            Self::FaceSubComponentCanNotBe0
            | Self::FaceIndexOutOfRange { .. }
            | Self::FaceShouldHaveAtLeast3Components(_)
            | Self::TooManySubComponentsInFace(_) => ErrorKind::InvalidFace,
        }
    }
}

impl ObjParsingError {
    pub fn kind(&self) -> ErrorKind {
        self.detail.kind()
    }

    pub fn detail(&self) -> &ObjParsingErrorDetail {
        &self.detail
    }

    /// Number of the physical line the offending logical line starts on, and its content.
    pub fn line(&self) -> Option<(usize, &str)> {
        self.line
            .as_ref()
            .map(|(number, content)| (*number, content.as_str()))
    }
}

impl Debug for ObjParsingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(line) = self.line.as_ref() {
            return write!(
                f,
                "ObjParsingError {{\n\tline: {}\n\tline_content: \"{}\"\n\tdetails: {:?}\n}}",
                line.0, line.1, self.detail,
            );
        }
        write!(f, "ObjParsingError({:?})", self.detail)
    }
}

impl Display for ObjParsingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line.as_ref() {
            Some((number, content)) => write!(f, "line {number} (\"{content}\"): {}", self.detail),
            None => write!(f, "{}", self.detail),
        }
    }
}

impl Error for ObjParsingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.detail)
    }
}

impl ObjBuilder {
    fn build(self) -> Obj {
        Obj {
            positions: self.positions.into_boxed_slice(),
            normals: self.normals.into_boxed_slice(),
            textures: self.textures.into_boxed_slice(),
            faces: self.faces.into_boxed_slice(),
            has_normals: self.has_normals,
        }
    }
}

// Constructors:

impl TryFrom<ObjFile<'_>> for Obj {
    type Error = ObjParsingError;

    fn try_from(file_name: ObjFile) -> Result<Self, Self::Error> {
        let file = File::open(file_name.0).map_err(|err| ObjParsingError {
            line: None,
            detail: ObjParsingErrorDetail::FailedToOpenFile(err),
        })?;
        BufReader::new(file).try_into()
    }
}

impl<R> TryFrom<BufReader<R>> for Obj
where
    R: Read,
{
    type Error = ObjParsingError;

    fn try_from(buf_reader: BufReader<R>) -> Result<Self, ObjParsingError> {
        let mut obj_builder = ObjBuilder::default();

        for line in LogicalLines::new(buf_reader) {
            let line = line.map_err(|err| ObjParsingError {
                line: None,
                detail: ObjParsingErrorDetail::FailedToReadFile(err),
            })?;

            parse_line(line.number, &line.content, &mut obj_builder).map_err(|err| {
                ObjParsingError {
                    line: Some((line.number, line.content)),
                    detail: err,
                }
            })?;
        }

        let obj = obj_builder.build();
        info!(
            positions = obj.positions.len(),
            normals = obj.normals.len(),
            textures = obj.textures.len(),
            faces = obj.face_count(),
            "obj file processed"
        );
        Ok(obj)
    }
}

// Getters:

impl Obj {
    pub fn positions(&self) -> &[Vec4] {
        &self.positions
    }

    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    pub fn textures(&self) -> &[Vec2] {
        &self.textures
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// True when at least one face vertex references a normal.
    pub fn has_normals(&self) -> bool {
        self.has_normals
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Sum of the arities of all faces.
    pub fn total_vertex_reference_count(&self) -> usize {
        self.faces.iter().map(|face| face.vertices().len()).sum()
    }
}

fn parse_line(
    line_number: usize,
    line: &str,
    obj_builder: &mut ObjBuilder,
) -> Result<(), ObjParsingErrorDetail> {
    let Some((keyword, remainder)) = line.trim_start().split_once(char::is_whitespace) else {
        return Ok(());
    };
    if remainder.trim().is_empty() {
        return Ok(());
    }

    match Directive::classify(keyword) {
        Directive::FatalUnsupported => Err(ObjParsingErrorDetail::UnsupportedDirective(
            keyword.to_owned(),
        )),
        Directive::Comment | Directive::Material => Ok(()),
        Directive::Vertex => parse_vertex_line(remainder, &mut obj_builder.positions),
        Directive::Normal => parse_normal_line(remainder, &mut obj_builder.normals),
        Directive::Texture => parse_texture_line(remainder, &mut obj_builder.textures),
        Directive::Face => parse_face_line(remainder, obj_builder),
        directive @ (Directive::WarnUnsupported | Directive::Ignored) => {
            handle_unrecognized_line(directive, keyword, line_number, line);
            Ok(())
        }
    }
}
