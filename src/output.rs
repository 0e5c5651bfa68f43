//! CLI output formatting for the interpreter.
//!
//! Each piece of output has a `format_*` function (returns lines or a
//! `String`) for testability and a `print_*` wrapper that writes to stdout.
//! Format functions are pure — no I/O, no side effects.
//!
//! User-visible errors go through [`notify`], the stand-in for the modal
//! dialogs of a GUI host: one structured line on stderr.
//!
//! # Help transcript
//!
//! ```text
//! Usage:
//!   /LOAD <path>
//!   /RESIZE <WxH> <filter>[(<repeat>)]
//!   /SAVE <path>
//!   /EXIT
//!
//! <WxH> are integers; 0 means auto on that axis.
//! Filters:
//!   pixel
//!   smooth
//!   ...
//! ```

use crate::filters::FilterRegistry;

/// Format the help transcript: grammar plus the live filter list.
///
/// Filter names come from the registry in registration order, so the
/// transcript always matches what `/RESIZE` can actually resolve.
pub fn format_help(registry: &FilterRegistry) -> Vec<String> {
    let mut lines = vec![
        "Usage:".to_string(),
        "  /LOAD <path>".to_string(),
        "  /RESIZE <WxH> <filter>[(<repeat>)]".to_string(),
        "  /SAVE <path>".to_string(),
        "  /EXIT".to_string(),
        String::new(),
        "<WxH> are integers; 0 means auto on that axis.".to_string(),
        "Filters:".to_string(),
    ];
    lines.extend(registry.names().map(|name| format!("  {name}")));
    lines
}

/// Print the help transcript to stdout.
pub fn print_help(registry: &FilterRegistry) {
    for line in format_help(registry) {
        println!("{line}");
    }
}

/// Format the per-RESIZE diagnostic line: width, height, repeat count, and
/// the filter-name literal as written, space-separated.
pub fn format_resize_line(width: u32, height: u32, repeat: u32, filter: &str) -> String {
    format!("{width} {height} {repeat} {filter}")
}

/// Print the RESIZE diagnostic line to stdout.
pub fn print_resize_line(width: u32, height: u32, repeat: u32, filter: &str) {
    println!("{}", format_resize_line(width, height, repeat, filter));
}

/// Report a user-visible error.
pub fn notify(message: &str) {
    eprintln!("error: {message}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::FilterKind;

    #[test]
    fn help_lists_every_registered_filter() {
        let registry = FilterRegistry::builtin();
        let help = format_help(&registry).join("\n");
        for name in registry.names() {
            assert!(help.contains(name), "help is missing filter {name}");
        }
    }

    #[test]
    fn help_lists_filters_in_registration_order() {
        let registry = FilterRegistry::from_entries(vec![
            ("zeta".to_string(), FilterKind::Pixel),
            ("alpha".to_string(), FilterKind::Smooth),
        ]);
        let lines = format_help(&registry);
        let zeta = lines.iter().position(|l| l.trim() == "zeta").unwrap();
        let alpha = lines.iter().position(|l| l.trim() == "alpha").unwrap();
        assert!(zeta < alpha);
    }

    #[test]
    fn help_shows_the_grammar() {
        let help = format_help(&FilterRegistry::builtin()).join("\n");
        assert!(help.contains("/LOAD"));
        assert!(help.contains("/RESIZE"));
        assert!(help.contains("/SAVE"));
        assert!(help.contains("/EXIT"));
    }

    #[test]
    fn resize_line_is_space_separated() {
        assert_eq!(
            format_resize_line(640, 480, 3, "lanczos"),
            "640 480 3 lanczos"
        );
    }
}
