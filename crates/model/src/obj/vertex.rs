use rs42::extensions::{vec::TryPush, PipeLine};

use super::{
    components::{parse_components, VectorKind},
    ObjParsingErrorDetail,
};
use crate::vertex::Vec4;

/// `w` is 0 when omitted.
pub fn parse_vertex_line(
    remainder: &str,
    positions: &mut Vec<Vec4>,
) -> Result<(), ObjParsingErrorDetail> {
    parse_components::<4>(remainder, VectorKind::Position, 3)?
        .pipe(Vec4::from)
        .pipe(|position| positions.try_push(position))
        .map_err(ObjParsingErrorDetail::AllocationFailure)
}
