/// Where a log call was made. The `%FUNC%`, `%FILE%` and `%LINE%` placeholders read from here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite<'a> {
    pub func: &'a str,
    pub file: &'a str,
    pub line: u32,
}

impl<'a> CallSite<'a> {
    #[must_use]
    pub const fn new(func: &'a str, file: &'a str, line: u32) -> Self {
        Self { func, file, line }
    }
}

impl CallSite<'_> {
    /// Last segment of a function path, skipping `{{closure}}` and async block frames.
    #[doc(hidden)]
    #[must_use]
    pub fn function_name(path: &str) -> &str {
        path.rsplit("::")
            .find(|segment| !segment.is_empty() && !segment.starts_with('{'))
            .unwrap_or(path)
    }
}

/// Expands to a [`CallSite`] for the enclosing function.
///
/// The function name is recovered from the type name of a nested item. Inside a
/// closure it is the name of the enclosing function.
#[macro_export]
macro_rules! call_site {
    () => {{
        fn __picolog_here() {}
        fn __picolog_type_name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        let name = __picolog_type_name_of(__picolog_here);
        $crate::CallSite::new(
            $crate::CallSite::function_name(name.strip_suffix("::__picolog_here").unwrap_or(name)),
            ::core::file!(),
            ::core::line!(),
        )
    }};
}
