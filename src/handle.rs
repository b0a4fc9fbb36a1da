//! Handles to refer to elements of a polygon graph.

use std::{fmt, hash::Hash};

use optional::{Noned, OptEq, Optioned as Opt};
use static_assertions::assert_eq_size;


/// The integer type used as index in all handles.
///
/// This is `u32` by default, which is sufficient for graphs with up to
/// roughly 4 billion elements of one kind. Enable the `large-handle` feature
/// to switch to `u64`.
#[cfg(not(feature = "large-handle"))]
#[allow(non_camel_case_types)]
pub type hsize = u32;

/// The integer type used as index in all handles.
#[cfg(feature = "large-handle")]
#[allow(non_camel_case_types)]
pub type hsize = u64;


/// A handle to some element in a polygon graph.
///
/// A handle is basically an index into one of the element stores. The
/// highest index value (`hsize::max_value()`) is reserved: it represents "no
/// element" when a handle is wrapped in [`Opt`].
pub trait Handle: 'static + Copy + fmt::Debug + Eq + Ord + Hash {
    /// Creates a handle from the given index.
    fn new(idx: hsize) -> Self;

    /// Returns the index of this handle.
    fn idx(&self) -> hsize;

    /// Helper method to create a handle from a `usize` index.
    ///
    /// # Panics
    ///
    /// If `raw` is not smaller than `hsize::max_value()`. That value is
    /// reserved for the "no element" sentinel.
    #[inline(always)]
    fn from_usize(raw: usize) -> Self {
        assert!(
            raw < hsize::max_value() as usize,
            "handle index {} out of range for `hsize` (enable `large-handle`?)",
            raw,
        );
        Self::new(raw as hsize)
    }

    /// Helper method to get the index as `usize`.
    #[inline(always)]
    fn to_usize(&self) -> usize {
        self.idx() as usize
    }
}

macro_rules! make_handle_type {
    ($(#[$attr:meta])* $name:ident = $short:expr;) => {
        $(#[$attr])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(hsize);

        impl Handle for $name {
            #[inline(always)]
            fn new(idx: hsize) -> Self {
                $name(idx)
            }

            #[inline(always)]
            fn idx(&self) -> hsize {
                self.0
            }
        }

        impl Noned for $name {
            #[inline(always)]
            fn is_none(&self) -> bool {
                self.0 == hsize::max_value()
            }

            #[inline(always)]
            fn get_none() -> Self {
                $name(hsize::max_value())
            }
        }

        impl OptEq for $name {
            fn opt_eq(&self, other: &Self) -> bool {
                self == other
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{}{}", $short, self.0)
            }
        }
    }
}

make_handle_type! {
    /// A handle to a vertex.
    VertexHandle = "V";
}
make_handle_type! {
    /// A handle to a directed half edge. Every edge belongs to exactly one
    /// polygon.
    EdgeHandle = "E";
}
make_handle_type! {
    /// A handle to a polygon.
    PolygonHandle = "P";
}

/// Converts an `Option` of a handle into its sentinel representation.
pub(crate) fn opt<H: Noned + Copy>(handle: Option<H>) -> Opt<H> {
    match handle {
        Some(h) => Opt::some(h),
        None => Opt::none(),
    }
}

/// Returns a function mapping the positions `0..len` to consecutive handles
/// starting at index `first`.
///
/// # Panics
///
/// If the last of these handles is not representable (see
/// [`Handle::from_usize`]).
pub(crate) fn consecutive<H: Handle>(first: usize, len: usize) -> impl Fn(usize) -> H {
    if len > 0 {
        H::from_usize(first + len - 1);
    }
    move |i| {
        debug_assert!(i < len);
        H::new((first + i) as hsize)
    }
}

// The sentinel lives inside the index space, so wrapping a handle in `Opt`
// is free.
assert_eq_size!(Opt<VertexHandle>, VertexHandle);
assert_eq_size!(Opt<EdgeHandle>, EdgeHandle);
assert_eq_size!(Opt<PolygonHandle>, PolygonHandle);
