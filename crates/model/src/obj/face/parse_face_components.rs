use rs42::extensions::PipeLine;

use crate::obj::{components::VectorKind, ObjBuilder, ObjParsingErrorDetail};

use super::{Face, FaceVertex};

pub fn parse_face_components(
    remainder: &str,
    obj_builder: &ObjBuilder,
) -> Result<Face, ObjParsingErrorDetail> {
    remainder
        .split_whitespace()
        .map(|component| parse_face_sub_components(component, obj_builder))
        .collect::<Result<Vec<_>, _>>()?
        .pipe(check_face_validity)
}

fn parse_face_sub_components(
    component: &str,
    obj_builder: &ObjBuilder,
) -> Result<FaceVertex, ObjParsingErrorDetail> {
    let mut sub_components = component.split('/');

    let position = resolve_sub_component(
        sub_components.next().unwrap_or_default(),
        obj_builder.positions.len(),
        VectorKind::Position,
    )?;

    // `p//n` leaves the texture empty
    let texture = match sub_components.next() {
        None | Some("") => None,
        Some(texture) => Some(resolve_sub_component(
            texture,
            obj_builder.textures.len(),
            VectorKind::Texture,
        )?),
    };

    let normal = sub_components
        .next()
        .map(|normal| {
            resolve_sub_component(normal, obj_builder.normals.len(), VectorKind::Normal)
        })
        .transpose()?;

    if sub_components.next().is_some() {
        return Err(ObjParsingErrorDetail::TooManySubComponentsInFace(
            component.to_owned(),
        ));
    }

    Ok(FaceVertex {
        position,
        texture,
        normal,
    })
}

fn resolve_sub_component(
    sub_component: &str,
    current_len: usize,
    kind: VectorKind,
) -> Result<u32, ObjParsingErrorDetail> {
    let raw = sub_component
        .parse::<i64>()
        .map_err(ObjParsingErrorDetail::InvalidSubComponentInFace)?;
    resolve_index(raw, current_len, kind)
}

/// Turns a 1-based index, or a negative index counted back from the end of a list of
/// `current_len` elements, into a 0-based index.
pub fn resolve_index(
    raw: i64,
    current_len: usize,
    kind: VectorKind,
) -> Result<u32, ObjParsingErrorDetail> {
    let out_of_range = || ObjParsingErrorDetail::FaceIndexOutOfRange {
        kind,
        index: raw,
        len: current_len,
    };

    let len = i64::try_from(current_len).map_err(|_| out_of_range())?;
    let resolved = match raw {
        0 => return Err(ObjParsingErrorDetail::FaceSubComponentCanNotBe0),
        1.. => raw - 1,
        _ => raw + len,
    };
    if !(0..len).contains(&resolved) {
        return Err(out_of_range());
    }
    u32::try_from(resolved).map_err(|_| out_of_range())
}

fn check_face_validity(vertices: Vec<FaceVertex>) -> Result<Face, ObjParsingErrorDetail> {
    if vertices.len() < 3 {
        return Err(ObjParsingErrorDetail::FaceShouldHaveAtLeast3Components(
            vertices.len(),
        ));
    }
    Ok(Face {
        vertices: vertices.into_boxed_slice(),
    })
}
