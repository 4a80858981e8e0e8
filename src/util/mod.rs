pub(crate) mod unroll;

// reexport all macros at toplevel for convenience
pub(crate) use unroll::unroll;
