use rs42::extensions::vec::TryPush;

use super::{
    components::{parse_components, VectorKind},
    ObjParsingErrorDetail,
};
use crate::vertex::Vec3;

pub fn parse_normal_line(
    remainder: &str,
    normals: &mut Vec<Vec3>,
) -> Result<(), ObjParsingErrorDetail> {
    // Stored as written, files are expected to provide unit normals
    let normal = parse_components::<3>(remainder, VectorKind::Normal, 3)?;
    normals
        .try_push(normal.into())
        .map_err(ObjParsingErrorDetail::AllocationFailure)
}
