use core::fmt;
use core::mem;
use core::ops::{Deref, DerefMut};
use core::ptr;
use core::slice;

use crate::buf::RawBuf;
use crate::error::DynArrayError;
use crate::traverse;

/// A growable contiguous array built on raw memory.
///
/// Allocated capacity is tracked separately from constructed elements:
/// slots `[0, len)` hold live values, slots `[len, capacity)` are allocated
/// but uninitialized, and an empty array owns no allocation at all. Appends
/// grow by amortized doubling; [`reserve`](Self::reserve) allocates exactly
/// what is asked for.
///
/// Fallible operations report through [`DynArrayError`] instead of
/// panicking: allocation failure, out-of-range indices, and pop underflow
/// are all observable by the caller.
pub struct DynArray<T> {
    pub(crate) buf: RawBuf<T>,
    pub(crate) len: usize,
}

// The array exclusively owns its buffer and every element in it.
unsafe impl<T: Send> Send for DynArray<T> {}
unsafe impl<T: Sync> Sync for DynArray<T> {}

impl<T> DynArray<T> {
    /// Creates an empty array without allocating.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buf: RawBuf::new(),
            len: 0,
        }
    }

    /// Creates an array holding `count` clones of `value`.
    ///
    /// The buffer is sized exactly to `count`; a zero count stays
    /// unallocated.
    ///
    /// # Errors
    ///
    /// Returns an error when the buffer cannot be allocated. If `clone`
    /// panics partway through the fill, clones constructed so far are
    /// leaked; the allocation itself is still released.
    pub fn filled(count: usize, value: T) -> Result<Self, DynArrayError>
    where
        T: Clone,
    {
        let mut array = Self::new();
        array.reserve(count)?;
        if mem::size_of::<T>() == 0 {
            // Zero-sized slots all share one address, so a pointer walk
            // cannot count them; construct the clones one by one.
            while array.len < count {
                array.push(value.clone())?;
            }
            return Ok(array);
        }
        let base = array.buf.as_ptr();
        let write_clone = |slot: *mut T| unsafe { slot.write(value.clone()) };
        // SAFETY: `count` slots were reserved above; each is written
        // exactly once and only then counted as live.
        unsafe {
            traverse::visit(base, base.add(count), write_clone);
        }
        array.len = count;
        Ok(array)
    }

    /// Builds an array from anything iterable, growing as needed.
    ///
    /// # Errors
    ///
    /// Returns an error when growth fails; elements already taken from the
    /// iterator are dropped.
    pub fn try_from_iter<I>(iter: I) -> Result<Self, DynArrayError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut array = Self::new();
        array.try_extend(iter)?;
        Ok(array)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Slots currently allocated, live or not. Saturates for zero-sized
    /// element types, which never allocate.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// The live elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: slots [0, len) hold live elements; the dangling base of
        // an unallocated array is valid for a zero-length slice.
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }

    /// The live elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as `as_slice`, with exclusivity through `&mut self`.
        unsafe { slice::from_raw_parts_mut(self.buf.as_ptr(), self.len) }
    }

    /// Base address of the buffer: valid for `capacity()` slots, with only
    /// the first `len()` constructed. Dangling (but well-aligned) while
    /// unallocated.
    #[must_use]
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr()
    }

    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_ptr()
    }

    /// Returns a reference to the element at `index`, or `None` when the
    /// index is out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Mutable counterpart of [`get`](Self::get).
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Checked access that reports which index failed.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` carrying `index` and the current length.
    pub fn try_get(&self, index: usize) -> Result<&T, DynArrayError> {
        self.get(index).ok_or(DynArrayError::IndexOutOfBounds {
            index,
            length: self.len,
        })
    }

    /// Mutable counterpart of [`try_get`](Self::try_get).
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` carrying `index` and the current length.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, DynArrayError> {
        let length = self.len;
        self.get_mut(index)
            .ok_or(DynArrayError::IndexOutOfBounds { index, length })
    }

    /// Unchecked access for the known-in-bounds hot path.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](Self::len); anything else is
    /// undefined behavior.
    #[must_use]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len);
        &*self.buf.as_ptr().add(index)
    }

    /// Mutable counterpart of [`get_unchecked`](Self::get_unchecked).
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](Self::len).
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len);
        &mut *self.buf.as_ptr().add(index)
    }

    /// Appends an element.
    ///
    /// Amortized O(1): a full array reallocates to twice its size, with a
    /// floor of one slot for the first allocation.
    ///
    /// # Errors
    ///
    /// Returns an error when growth fails; the array is unchanged and the
    /// rejected value is dropped.
    pub fn push(&mut self, value: T) -> Result<(), DynArrayError> {
        if self.len == self.capacity() {
            self.grow_amortized()?;
        }
        // SAFETY: the capacity check guarantees a free slot at `len`.
        unsafe { self.buf.as_ptr().add(self.len).write(value) };
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the last element, or `None` when empty.
    ///
    /// Capacity is never reduced by this call.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: slot `len` held the last live element; the length went
        // down first, so ownership moves out exactly once.
        Some(unsafe { self.buf.as_ptr().add(self.len).read() })
    }

    /// [`pop`](Self::pop) that reports underflow as an error.
    ///
    /// # Errors
    ///
    /// Returns `Empty` when no element is left; the array is unchanged.
    pub fn try_pop(&mut self) -> Result<T, DynArrayError> {
        self.pop().ok_or(DynArrayError::Empty)
    }

    /// Inserts `value` at `index`, shifting every element at or after it
    /// one position right. `index == len()` appends.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` when `index > len()`, or a growth error
    /// when the array is full and cannot reallocate. The array is
    /// unchanged on any error and the rejected value is dropped.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), DynArrayError> {
        if index > self.len {
            return Err(DynArrayError::IndexOutOfBounds {
                index,
                length: self.len,
            });
        }
        if self.len == self.capacity() {
            self.grow_amortized()?;
        }
        let base = self.buf.as_ptr();
        let move_slot = |dst: *mut T, src: *mut T| unsafe { dst.write(src.read()) };
        // SAFETY: one free slot exists past the live range. The shift
        // walks [index, len) from the high end so no slot is read after
        // being overwritten; slot `index` is then logically vacated and
        // is initialized with `value` before the length grows.
        unsafe {
            let end = base.add(self.len);
            traverse::transfer(
                end.wrapping_sub(1),
                base.add(index).wrapping_sub(1),
                end,
                move_slot,
            );
            base.add(index).write(value);
        }
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting every later
    /// element one position left. Capacity is unchanged.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` when `index >= len()`; the array is
    /// unchanged.
    pub fn remove(&mut self, index: usize) -> Result<T, DynArrayError> {
        if index >= self.len {
            return Err(DynArrayError::IndexOutOfBounds {
                index,
                length: self.len,
            });
        }
        let base = self.buf.as_ptr();
        let move_slot = |dst: *mut T, src: *mut T| unsafe { dst.write(src.read()) };
        // SAFETY: `index` is live. Ownership moves out of its slot first;
        // the forward walk then compacts (index, len) one slot left, and
        // the length decrement retires the duplicated last slot without
        // dropping it.
        let removed = unsafe {
            let removed = base.add(index).read();
            traverse::transfer(
                base.add(index + 1),
                base.add(self.len),
                base.add(index),
                move_slot,
            );
            removed
        };
        self.len -= 1;
        Ok(removed)
    }

    /// Ensures capacity for at least `capacity` elements.
    ///
    /// Sufficient existing capacity is a no-op. Otherwise the buffer is
    /// reallocated to exactly `capacity` slots and every live element
    /// migrates in forward order; the old buffer is freed afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error when the new buffer cannot be allocated. The
    /// array is unchanged: nothing migrates before allocation succeeds.
    pub fn reserve(&mut self, capacity: usize) -> Result<(), DynArrayError> {
        if self.capacity() >= capacity {
            return Ok(());
        }
        self.relocate(capacity)
    }

    /// Resizes to exactly `new_len` elements: truncates when shrinking,
    /// appends default-constructed elements when growing. Growth reserves
    /// up front, so at most one reallocation happens.
    ///
    /// # Errors
    ///
    /// Returns an error when the reservation fails; the array is
    /// unchanged.
    pub fn resize(&mut self, new_len: usize) -> Result<(), DynArrayError>
    where
        T: Default,
    {
        if new_len <= self.len {
            self.truncate(new_len);
            return Ok(());
        }
        self.reserve(new_len)?;
        while self.len < new_len {
            // Capacity reserved above; this append cannot reallocate.
            self.push(T::default())?;
        }
        Ok(())
    }

    /// Shortens the array to `new_len` elements, dropping the tail in
    /// place. Requests at or beyond the current length are a no-op.
    /// Capacity is unchanged.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }
        let tail_len = self.len - new_len;
        // The length goes down before the tail is dropped, so a panicking
        // element drop cannot lead to a second drop of the same slot.
        self.len = new_len;
        // SAFETY: the former tail held live elements that are no longer
        // reachable through the array.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.as_ptr().add(new_len),
                tail_len,
            ));
        }
    }

    /// Removes every element, keeping the allocation.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Appends every element the iterator yields.
    ///
    /// # Errors
    ///
    /// Returns the first growth error; elements appended before it stay in
    /// the array, the rest of the iterator is dropped.
    pub fn try_extend<I>(&mut self, iter: I) -> Result<(), DynArrayError>
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.push(value)?;
        }
        Ok(())
    }

    /// Deep copy with observable allocation failure.
    ///
    /// The new buffer is sized exactly to the source length; elements are
    /// copy-constructed in forward order.
    ///
    /// # Errors
    ///
    /// Returns an error when the buffer cannot be allocated; `self` is
    /// never modified. If an element `clone` panics partway, clones made
    /// so far are leaked; their buffer is still released.
    pub fn try_clone(&self) -> Result<Self, DynArrayError>
    where
        T: Clone,
    {
        if mem::size_of::<T>() == 0 {
            // Zero-sized slots all share one address, so the pointer walk
            // cannot count them; clone element by element instead.
            let mut copy = Self::new();
            for value in self.as_slice() {
                copy.push(value.clone())?;
            }
            return Ok(copy);
        }
        let mut copy = Self::new();
        copy.reserve(self.len)?;
        let clone_slot = |dst: *mut T, src: *mut T| unsafe { dst.write((*src).clone()) };
        // SAFETY: the fresh buffer holds at least `len` free slots; each
        // source element is cloned into its own slot, in forward order.
        unsafe {
            traverse::transfer(
                self.buf.as_ptr(),
                self.buf.as_ptr().add(self.len),
                copy.buf.as_ptr(),
                clone_slot,
            );
        }
        copy.len = self.len;
        Ok(copy)
    }

    /// Doubling growth for a single-element append: twice the current
    /// size, with a floor of one slot for the first allocation.
    fn grow_amortized(&mut self) -> Result<(), DynArrayError> {
        if mem::size_of::<T>() == 0 {
            // Zero-sized elements never allocate; reaching this point
            // means the length itself has hit the ceiling.
            return Err(DynArrayError::CapacityOverflow {
                requested: usize::MAX,
            });
        }
        let target = self.len.saturating_mul(2).max(1);
        self.relocate(target)
    }

    /// Moves the live range into a fresh buffer of `new_capacity` slots
    /// and frees the old one. Each slot relocation is a bitwise move, so
    /// nothing can fail once the allocation has succeeded.
    fn relocate(&mut self, new_capacity: usize) -> Result<(), DynArrayError> {
        debug_assert!(new_capacity >= self.len);
        let new = RawBuf::allocate(new_capacity)?;
        let move_slot = |dst: *mut T, src: *mut T| unsafe { dst.write(src.read()) };
        // SAFETY: the buffers do not overlap and both are valid for `len`
        // slots; every element is read out of the old buffer exactly once.
        // The old buffer is then freed without running destructors, which
        // is correct because ownership has moved to the new slots.
        unsafe {
            traverse::transfer(
                self.buf.as_ptr(),
                self.buf.as_ptr().add(self.len),
                new.as_ptr(),
                move_slot,
            );
        }
        self.buf = new;
        Ok(())
    }
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DynArray<T> {
    fn drop(&mut self) {
        // SAFETY: slots [0, len) are live and this is their last use. The
        // RawBuf field releases the allocation afterwards, even if one of
        // these drops panics.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.as_ptr(), self.len));
        }
    }
}

impl<T> Deref for DynArray<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for DynArray<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: Clone> Clone for DynArray<T> {
    /// Deep copy. Allocation failure panics here, following the standard
    /// container convention; use [`DynArray::try_clone`] to observe it.
    #[allow(clippy::expect_used)]
    fn clone(&self) -> Self {
        self.try_clone()
            .expect("allocation failed while cloning a DynArray")
    }
}

impl<T: fmt::Debug> fmt::Debug for DynArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynArray")
            .field("len", &self.len)
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: PartialEq> PartialEq for DynArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynArray<T> {}
