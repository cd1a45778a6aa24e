//! Call-site capture for the `location` and `function` breadcrumbs.
//!
//! The convenience macros ([`callsite!`](crate::callsite)) capture both at
//! the expansion point. Plain functions cannot recover the enclosing
//! function's name, so the explicit path ([`CallSite::here`]) captures file
//! and line only and leaves the function empty.

use std::panic::Location;

/// Attribute key for the `"dir/file.rs:line"` breadcrumb.
pub const LOCATION_KEY: &str = "location";

/// Attribute key for the qualified caller-name breadcrumb.
pub const FUNCTION_KEY: &str = "function";

/// A captured call site.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallSite {
    location: String,
    function: String,
}

impl CallSite {
    /// Build a call site from already-rendered parts.
    pub fn new(location: impl Into<String>, function: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            function: function.into(),
        }
    }

    /// Capture the caller's file and line, with an empty function name.
    #[track_caller]
    pub fn here() -> Self {
        let loc = Location::caller();
        Self {
            location: short_location(loc.file(), loc.line()),
            function: String::new(),
        }
    }

    /// The `"dir/file.rs:line"` form of this site.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// The trimmed qualified function path, or `""` when not captured.
    pub fn function(&self) -> &str {
        &self.function
    }
}

/// Trim a source path to its last two segments and append the line number.
pub fn short_location(file: &str, line: u32) -> String {
    format!("{}:{}", last_segments(file, "/", 2), line)
}

/// Keep the last `n` `separator`-delimited segments of `path`.
///
/// A path with fewer segments is returned whole.
pub fn last_segments(path: &str, separator: &str, n: usize) -> String {
    let segments: Vec<&str> = path.split(separator).collect();
    if segments.len() >= n {
        segments[segments.len() - n..].join(separator)
    } else {
        path.to_string()
    }
}

#[doc(hidden)]
pub fn type_name_of<T>(_: T) -> &'static str {
    std::any::type_name::<T>()
}

/// Qualified path of the enclosing function, trimmed to its last two
/// `::`-segments.
#[macro_export]
macro_rules! function_path {
    () => {{
        fn anchor() {}
        let name = $crate::site::type_name_of(anchor);
        let name = name.strip_suffix("::anchor").unwrap_or(name);
        $crate::site::last_segments(name, "::", 2)
    }};
}

/// Capture the current call site: file, line, and enclosing function.
#[macro_export]
macro_rules! callsite {
    () => {
        $crate::CallSite::new(
            $crate::site::short_location(::std::file!(), ::std::line!()),
            $crate::function_path!(),
        )
    };
}
