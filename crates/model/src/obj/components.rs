use std::fmt::Display;

use super::ObjParsingErrorDetail;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorKind {
    Position,
    Normal,
    Texture,
}

impl VectorKind {
    pub fn expected_components(self) -> &'static str {
        match self {
            Self::Position => "3 or 4",
            Self::Normal => "3",
            Self::Texture => "2",
        }
    }
}

impl Display for VectorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Position => "position",
            Self::Normal => "normal",
            Self::Texture => "texture coordinate",
        })
    }
}

/// Parses between `required` and `N` whitespace separated floats, missing trailing components
/// are 0.
pub fn parse_components<const N: usize>(
    remainder: &str,
    kind: VectorKind,
    required: usize,
) -> Result<[f32; N], ObjParsingErrorDetail> {
    let fields = remainder.split_whitespace();
    let found = fields.clone().count();
    if !(required..=N).contains(&found) {
        return Err(ObjParsingErrorDetail::MalformedVector { kind, found });
    }

    let mut components = [0.; N];
    for (component, field) in components.iter_mut().zip(fields) {
        *component = field
            .parse::<f32>()
            .map_err(|err| ObjParsingErrorDetail::InvalidComponent { kind, err })?;
    }
    Ok(components)
}
