#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// Aborts the parse.
    FatalUnsupported,
    /// Logged and skipped.
    WarnUnsupported,
    Comment,
    /// Material libraries are recognized but not loaded.
    Material,
    Vertex,
    Normal,
    Texture,
    Face,
    /// Anything not listed in [`DIRECTIVES`], skipped silently.
    Ignored,
}

use Directive::*;

pub const DIRECTIVES: &[(&str, Directive)] = &[
    // Free-form curves and surfaces
    ("cstype", FatalUnsupported),
    ("deg", FatalUnsupported),
    ("step", FatalUnsupported),
    ("bmat", FatalUnsupported),
    ("surf", FatalUnsupported),
    ("parm", FatalUnsupported),
    ("trim", FatalUnsupported),
    ("hole", FatalUnsupported),
    ("scrv", FatalUnsupported),
    ("sp", FatalUnsupported),
    ("end", FatalUnsupported),
    ("con", FatalUnsupported),
    ("vp", FatalUnsupported),
    // Display and render attributes
    ("bevel", FatalUnsupported),
    ("c_interp", FatalUnsupported),
    ("d_interp", FatalUnsupported),
    ("lod", FatalUnsupported),
    ("ctech", FatalUnsupported),
    ("stech", FatalUnsupported),
    ("mg", FatalUnsupported),
    // Grouping
    ("o", WarnUnsupported),
    ("g", WarnUnsupported),
    ("s", WarnUnsupported),
    ("shadow_obj", WarnUnsupported),
    ("trace_obj", WarnUnsupported),
    ("#", Comment),
    ("mtllib", Material),
    ("usemtl", Material),
    ("v", Vertex),
    ("vn", Normal),
    ("vt", Texture),
    ("f", Face),
];

impl Directive {
    pub fn classify(keyword: &str) -> Self {
        DIRECTIVES
            .iter()
            .find(|(name, _)| *name == keyword)
            .map_or_else(
                || {
                    if keyword.starts_with('#') {
                        Comment
                    } else {
                        Ignored
                    }
                },
                |&(_, directive)| directive,
            )
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn keywords_are_unique() {
        let mut keywords = HashSet::new();
        assert!(DIRECTIVES.iter().all(|(keyword, _)| keywords.insert(keyword)));
    }

    #[test]
    fn fatal_set() {
        let fatal = DIRECTIVES
            .iter()
            .filter(|(_, directive)| *directive == FatalUnsupported)
            .count();
        assert_eq!(fatal, 20);
        for keyword in ["cstype", "surf", "vp", "bevel", "mg"] {
            assert_eq!(Directive::classify(keyword), FatalUnsupported);
        }
    }

    #[test]
    fn warn_set() {
        for keyword in ["o", "g", "s", "shadow_obj", "trace_obj"] {
            assert_eq!(Directive::classify(keyword), WarnUnsupported);
        }
    }

    #[test]
    fn recognized() {
        assert_eq!(Directive::classify("v"), Vertex);
        assert_eq!(Directive::classify("vn"), Normal);
        assert_eq!(Directive::classify("vt"), Texture);
        assert_eq!(Directive::classify("f"), Face);
        assert_eq!(Directive::classify("usemtl"), Material);
        assert_eq!(Directive::classify("#"), Comment);
        assert_eq!(Directive::classify("#comment"), Comment);
    }

    #[test]
    fn unknown_keywords_are_ignored() {
        assert_eq!(Directive::classify("l"), Ignored);
        assert_eq!(Directive::classify("V"), Ignored);
        assert_eq!(Directive::classify("vertex"), Ignored);
    }
}
