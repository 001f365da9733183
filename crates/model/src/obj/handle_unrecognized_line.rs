use tracing::{debug, warn};

use super::Directive;

pub fn handle_unrecognized_line(
    directive: Directive,
    keyword: &str,
    line_number: usize,
    line: &str,
) {
    if directive == Directive::WarnUnsupported {
        warn!(
            line = line_number,
            line_content = line,
            "\"{keyword}\" is not supported, skipping line"
        );
        return;
    }
    debug!(
        line = line_number,
        line_content = line,
        "unknown directive \"{keyword}\", skipping line"
    );
}
