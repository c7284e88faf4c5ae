//! Call-site descriptors
//!
//! A [`CallSite`] is the `(file, line, function)` triple of the statement that
//! invoked a logging macro. It is built by [`call_site!`](crate::call_site) at
//! the expansion point, so it always names the caller and never the logger.

use std::fmt;

const MARKER: &str = "::__dnis_here";
const CLOSURE: &str = "::{{closure}}";

/// Where a log call originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallSite<'a> {
    file: &'a str,
    line: u32,
    function: &'a str,
}

impl<'a> CallSite<'a> {
    pub const fn new(file: &'a str, line: u32, function: &'a str) -> Self {
        Self {
            file,
            line,
            function,
        }
    }

    pub const fn file(&self) -> &'a str {
        self.file
    }

    pub const fn line(&self) -> u32 {
        self.line
    }

    pub const fn function(&self) -> &'a str {
        self.function
    }
}

/// Renders as `<file>:<line> <function>`.
impl fmt::Display for CallSite<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} {}", self.file, self.line, self.function)
    }
}

/// Strip the probe item and any closure frames from a `type_name` path.
///
/// Used by [`function_name!`](crate::function_name); does not allocate.
#[doc(hidden)]
pub fn enclosing_function(probe: &'static str) -> &'static str {
    let mut name = probe.strip_suffix(MARKER).unwrap_or(probe);
    while let Some(outer) = name.strip_suffix(CLOSURE) {
        name = outer;
    }
    name
}

/// Path of the function enclosing the macro invocation, e.g.
/// `my_crate::worker::run`.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __dnis_here() {}
        fn __dnis_type_name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        $crate::logging::site::enclosing_function(__dnis_type_name_of(__dnis_here))
    }};
}

/// [`CallSite`] of the macro invocation.
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::logging::CallSite::new(::core::file!(), ::core::line!(), $crate::function_name!())
    };
}
