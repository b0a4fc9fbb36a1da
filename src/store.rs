//! Handle-addressed element storage.

use std::{
    fmt,
    iter::FusedIterator,
    marker::PhantomData,
    ops::{Index, IndexMut},
};

use stable_vec::{
    StableVec,
    core::DefaultCore,
    iter::{
        Indices, Iter as SvIter, IterMut as SvIterMut, Values as SvValues,
    },
};

use crate::handle::{hsize, Handle};


/// A node-stable store of elements addressed by handles of type `H`.
///
/// This is a thin wrapper around a [`StableVec`]: the handle index is simply
/// the index into the underlying vector. Inserting or removing an element
/// never moves any other element, so handles to other elements stay valid.
///
/// New elements are always pushed to the end, so handle indices are handed
/// out in increasing order and are never reused, not even after elements
/// were removed. This means that a handle of a removed element will never
/// refer to another element of the same store. The downside is that memory
/// of removed elements is not reclaimed until the store is dropped.
///
/// Iteration order ("store order") is increasing handle index, which is the
/// order in which elements were added.
pub struct Store<H: Handle, T> {
    vec: StableVec<T>,
    _dummy: PhantomData<H>,
}

impl<H: Handle, T> Store<H, T> {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            vec: StableVec::new(),
            _dummy: PhantomData,
        }
    }

    /// Creates an empty store with memory for `cap` elements.
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            vec: StableVec::with_capacity(cap),
            _dummy: PhantomData,
        }
    }

    /// Adds the element to the end of the store and returns its handle.
    pub fn push(&mut self, elem: T) -> H {
        // Make sure the handle is representable before we mutate anything.
        let handle = self.next_push_handle();
        let idx = self.vec.push(elem);
        debug_assert_eq!(idx, handle.to_usize());
        handle
    }

    /// Returns the handle the next `push` will return.
    pub fn next_push_handle(&self) -> H {
        H::from_usize(self.vec.next_push_index())
    }

    /// Returns the number of elements currently stored.
    pub fn num_elements(&self) -> hsize {
        self.vec.num_elements() as hsize
    }

    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }

    pub fn contains_handle(&self, handle: H) -> bool {
        self.vec.has_element_at(handle.to_usize())
    }

    pub fn get(&self, handle: H) -> Option<&T> {
        self.vec.get(handle.to_usize())
    }

    pub fn get_mut(&mut self, handle: H) -> Option<&mut T> {
        self.vec.get_mut(handle.to_usize())
    }

    /// Removes the element with the given handle and returns it, or returns
    /// `None` if there is no such element.
    pub fn remove(&mut self, handle: H) -> Option<T> {
        let idx = handle.to_usize();
        if idx >= self.vec.capacity() {
            return None;
        }

        self.vec.remove(idx)
    }

    /// Removes every element, one at a time.
    ///
    /// In contrast to `StableVec::clear`, this does not reset the push index,
    /// so handles handed out before this call are never handed out again.
    pub fn remove_all(&mut self) {
        let end = self.vec.next_push_index();
        for idx in 0..end {
            if self.vec.has_element_at(idx) {
                self.vec.remove(idx);
            }
        }
    }

    /// Returns the handle of the first element with an index ≥ `start`'s
    /// index, or `None` if there is no such element.
    ///
    /// Assume a store contains elements with the indices 0, 1 and 3. Then
    /// `next_handle_from(2)` returns `Some(3)` and `next_handle_from(4)`
    /// returns `None`.
    pub fn next_handle_from(&self, start: H) -> Option<H> {
        self.first_filled_from(start.to_usize())
    }

    /// Returns the handle of the first element that comes after `handle` in
    /// store order. `handle` itself does not need to refer to an existing
    /// element.
    pub fn next_handle_after(&self, handle: H) -> Option<H> {
        self.first_filled_from(handle.to_usize() + 1)
    }

    /// Slots of removed elements stay empty forever, so this is linear in
    /// the number of empty slots after `idx`. The scan runs over the used
    /// bitvec, one word at a time.
    fn first_filled_from(&self, idx: usize) -> Option<H> {
        // `first_filled_slot_from` panics for indices beyond the capacity.
        if idx >= self.vec.next_push_index() {
            return None;
        }

        self.vec.first_filled_slot_from(idx).map(H::from_usize)
    }

    pub fn iter(&self) -> Iter<'_, H, T> {
        Iter::new(self)
    }
    pub fn handles(&self) -> Handles<'_, H, T> {
        Handles::new(self)
    }
    pub fn values(&self) -> Values<'_, H, T> {
        Values::new(self)
    }
    pub fn iter_mut(&mut self) -> IterMut<'_, H, T> {
        IterMut::new(self)
    }
}

impl<H: Handle, T> Default for Store<H, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Handle, T> Index<H> for Store<H, T> {
    type Output = T;
    fn index(&self, handle: H) -> &Self::Output {
        match self.get(handle) {
            None => panic!("no element found for handle '{:?}'", handle),
            Some(r) => r,
        }
    }
}

impl<H: Handle, T> IndexMut<H> for Store<H, T> {
    fn index_mut(&mut self, handle: H) -> &mut Self::Output {
        match self.get_mut(handle) {
            None => panic!("no element found for handle '{:?}'", handle),
            Some(r) => r,
        }
    }
}

impl<H: Handle, T: fmt::Debug> fmt::Debug for Store<H, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}


// ===== Iterator wrappers =======================================================================

/// This macro generates an iterator wrapper. The usage is kinda awkward, but
/// this way we can avoid duplicate code.
macro_rules! gen_iter_wrapper {
    (
        $(#[$attr:meta])*
        $name:ident, $sv_name:ident, $iter_method:ident, [$($mutable:ident)?], [$($clone:ident)?],
        |$lt:tt, $h:ident, $t:ident| $item:ty,
        [$($mapping:tt)*] $(,)?
    ) => {
        $(#[$attr])*
        #[derive(Debug, $($clone)?)]
        pub struct $name<$lt, $h: Handle, $t> {
            iter: $sv_name<$lt, $t, DefaultCore<$t>>,
            _dummy: PhantomData<&$lt $h>,
        }

        impl<$lt, $h: Handle, $t> $name<$lt, $h, $t> {
            fn new(store: &$lt $($mutable)? Store<$h, $t>) -> Self {
                Self {
                    iter: store.vec.$iter_method(),
                    _dummy: PhantomData,
                }
            }
        }

        impl<$lt, $h: Handle, $t> Iterator for $name<$lt, $h, $t> {
            type Item = $item;
            fn next(&mut self) -> Option<Self::Item> {
                self.iter.next() $($mapping)*
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                self.iter.size_hint()
            }

            fn count(self) -> usize {
                self.iter.count()
            }

            fn last(mut self) -> Option<Self::Item> {
                self.next_back()
            }
        }

        impl<$lt, $h: Handle, $t> DoubleEndedIterator for $name<$lt, $h, $t> {
            fn next_back(&mut self) -> Option<Self::Item> {
                self.iter.next_back() $($mapping)*
            }
        }

        impl<$lt, $h: Handle, $t> ExactSizeIterator for $name<$lt, $h, $t> {
            fn len(&self) -> usize {
                self.iter.len()
            }
        }

        impl<$lt, $h: Handle, $t> FusedIterator for $name<$lt, $h, $t> {}
    };
}

gen_iter_wrapper!(
    /// Iterator over `(handle, &element)` pairs in store order.
    Iter, SvIter, iter, [], [Clone],
    |'a, H, T| (H, &'a T),
    [.map(|(i, e)| (H::from_usize(i), e))],
);
gen_iter_wrapper!(
    /// Iterator over `(handle, &mut element)` pairs in store order.
    IterMut, SvIterMut, iter_mut, [mut], [],
    |'a, H, T| (H, &'a mut T),
    [.map(|(i, e)| (H::from_usize(i), e))],
);
gen_iter_wrapper!(
    /// Iterator over the handles of all elements in store order.
    Handles, Indices, indices, [], [Clone],
    |'a, H, T| H,
    [.map(H::from_usize)],
);
gen_iter_wrapper!(
    /// Iterator over the elements in store order.
    Values, SvValues, values, [], [Clone],
    |'a, H, T| &'a T,
    [],
);
