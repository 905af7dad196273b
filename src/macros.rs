/// Compile a regex literal once and hand out a `&'static Regex`.
#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Append `", {op} {operand}"` to a trace buffer.
macro_rules! push_step {
    ($trace:expr, $op:expr, $operand:expr) => {{
        use std::fmt::Write as _;
        let _ = write!($trace, ", {} {}", $op, $operand);
    }};
}
