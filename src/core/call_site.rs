//! Source location of a log statement

use serde::Serialize;
use std::fmt;

/// Where a log statement executed.
///
/// Normally produced by [`call_site!`](crate::call_site), which captures the
/// enclosing function path, `file!()` and `line!()` of the invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CallSite {
    pub function: &'static str,
    pub file: &'static str,
    pub line: u32,
}

impl CallSite {
    pub const fn new(function: &'static str, file: &'static str, line: u32) -> Self {
        Self {
            function,
            file,
            line,
        }
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "at {} in {}:{}", self.function, self.file, self.line)
    }
}

/// Turn the `type_name` of a marker fn nested in the caller into the path of
/// the enclosing function.
///
/// Used by [`function_name!`](crate::function_name); not meant to be called
/// directly.
#[doc(hidden)]
pub fn enclosing_function(marker_type_name: &'static str) -> &'static str {
    let mut name = marker_type_name
        .strip_suffix("::__marker")
        .unwrap_or(marker_type_name);
    while let Some(stripped) = name.strip_suffix("::{{closure}}") {
        name = stripped;
    }
    name
}

/// Expands to the path of the enclosing function as a `&'static str`.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __marker() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::core::call_site::enclosing_function(__type_name_of(__marker))
    }};
}

/// Expands to a [`CallSite`] for the location of the invocation.
///
/// When used inside another macro, `file!()` and `line!()` resolve to the
/// outermost invocation, so wrappers report the user's call.
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite::new($crate::function_name!(), file!(), line!())
    };
}
