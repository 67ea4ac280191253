//! Source-location prefix (`[file.rs:42/crate::module::function] `) for builds that want to
//! know where every line came from.

use std::ffi::OsStr;
use std::path::Path;

/// Call-site coordinates captured by the logging macros.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub file: &'static str,
    pub line: u32,
    pub function: &'static str,
}

impl Location {
    #[must_use]
    pub const fn new(file: &'static str, line: u32, function: &'static str) -> Self {
        Self {
            file,
            line,
            function,
        }
    }

    /// The bracketed prefix placed in front of the message body.
    #[must_use]
    pub fn prefix(&self) -> String {
        format!("[{}:{}/{}] ", basename(self.file), self.line, self.function)
    }
}

/// Strips any directory prefix using the host's separator rules.
#[must_use]
pub fn basename(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(OsStr::to_str)
        .unwrap_or(path)
}

/// Inserts the location prefix in front of `body`.
pub fn prepend_location(location: &Location, body: &mut String) {
    body.insert_str(0, &location.prefix());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basename_strips_directories() {
        assert_eq!(basename("src/output/file.rs"), "file.rs");
        assert_eq!(basename("main.rs"), "main.rs");
    }

    #[test]
    fn prefix_shape() {
        let loc = Location::new("src/net/conn.rs", 17, "app::net::connect");
        assert_eq!(loc.prefix(), "[conn.rs:17/app::net::connect] ");
    }

    #[test]
    fn prepend_keeps_body() {
        let loc = Location::new("a/b.rs", 3, "f");
        let mut body = String::from("hello");
        prepend_location(&loc, &mut body);
        assert_eq!(body, "[b.rs:3/f] hello");
    }
}
