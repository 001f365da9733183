use rs42::extensions::vec::TryPush;

use super::{
    components::{parse_components, VectorKind},
    ObjParsingErrorDetail,
};
use crate::vertex::Vec2;

pub fn parse_texture_line(
    remainder: &str,
    textures: &mut Vec<Vec2>,
) -> Result<(), ObjParsingErrorDetail> {
    let texture = parse_components::<2>(remainder, VectorKind::Texture, 2)?;
    textures
        .try_push(texture.into())
        .map_err(ObjParsingErrorDetail::AllocationFailure)
}
