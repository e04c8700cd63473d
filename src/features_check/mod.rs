//! Rejects feature selections the integer type cannot be built with.
//!
//! Magnitudes live on the heap, so at least one of `std` or `alloc` has to be
//! enabled.

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error! {
    "big_integer requires that either `std` (default) or `alloc` feature is enabled"
}
