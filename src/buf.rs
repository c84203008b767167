use core::alloc::Layout;
use core::mem;
use core::ptr::NonNull;

use alloc::alloc::{alloc, dealloc};

use crate::error::DynArrayError;

/// Owned allocation backing `DynArray`: a base pointer plus the number of
/// slots allocated behind it.
///
/// `RawBuf` owns memory and nothing else. Which slots hold live elements is
/// the container's bookkeeping; dropping a `RawBuf` releases the allocation
/// without running any element destructor.
///
/// The unallocated state is a dangling, well-aligned pointer with zero
/// capacity and owes nothing to the allocator. Zero-sized element types never
/// allocate; their capacity saturates so the growth machinery above never
/// requests a zero-byte block.
pub(crate) struct RawBuf<T> {
    ptr: NonNull<T>,
    cap: usize,
}

impl<T> RawBuf<T> {
    /// Creates the unallocated state.
    pub(crate) const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
        }
    }

    /// Allocates a buffer of exactly `capacity` slots, uninitialized.
    ///
    /// Zero requested slots and zero-sized element types stay unallocated.
    ///
    /// # Errors
    ///
    /// Returns `CapacityOverflow` when `capacity` elements cannot be laid
    /// out in memory and `AllocationFailed` when the global allocator
    /// returns null. Nothing has been allocated in either case.
    pub(crate) fn allocate(capacity: usize) -> Result<Self, DynArrayError> {
        if capacity == 0 || mem::size_of::<T>() == 0 {
            return Ok(Self::new());
        }
        let layout = Layout::array::<T>(capacity)
            .map_err(|_| DynArrayError::CapacityOverflow { requested: capacity })?;
        // SAFETY: the layout has non-zero size on this path (capacity > 0,
        // T is not zero-sized).
        let raw = unsafe { alloc(layout) };
        match NonNull::new(raw.cast::<T>()) {
            Some(ptr) => Ok(Self { ptr, cap: capacity }),
            None => Err(DynArrayError::AllocationFailed {
                bytes: layout.size(),
            }),
        }
    }

    /// Number of slots behind the pointer.
    pub(crate) fn capacity(&self) -> usize {
        if mem::size_of::<T>() == 0 {
            usize::MAX
        } else {
            self.cap
        }
    }

    /// Base address of slot 0. The pointer is valid for `capacity()` slots;
    /// respecting initialization state is the caller's contract.
    pub(crate) fn as_ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        if self.cap == 0 || mem::size_of::<T>() == 0 {
            return;
        }
        // SAFETY: the allocation was produced by `allocate` with this exact
        // size and alignment; `Layout::array` validated them there.
        unsafe {
            let layout = Layout::from_size_align_unchecked(
                mem::size_of::<T>() * self.cap,
                mem::align_of::<T>(),
            );
            dealloc(self.ptr.as_ptr().cast(), layout);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_unallocated() {
        let buf = RawBuf::<u32>::new();
        assert_eq!(buf.capacity(), 0);
    }

    #[test]
    fn allocate_exact_capacity() {
        let buf = RawBuf::<u64>::allocate(12).unwrap();
        assert_eq!(buf.capacity(), 12);
        assert!(!buf.as_ptr().is_null());
    }

    #[test]
    fn allocate_zero_stays_unallocated() {
        let buf = RawBuf::<u32>::allocate(0).unwrap();
        assert_eq!(buf.capacity(), 0);
    }

    #[test]
    fn zero_sized_elements_never_allocate() {
        let buf = RawBuf::<()>::allocate(1000).unwrap();
        assert_eq!(buf.capacity(), usize::MAX);
    }

    #[test]
    fn absurd_capacity_is_an_error_not_a_panic() {
        let result = RawBuf::<u64>::allocate(usize::MAX);
        assert_eq!(
            result.err(),
            Some(DynArrayError::CapacityOverflow {
                requested: usize::MAX
            })
        );
    }
}
