use core::iter::FusedIterator;
use core::mem::ManuallyDrop;
use core::ptr;
use core::slice;

use crate::array::DynArray;
use crate::buf::RawBuf;

/// Owned iterator over the elements of a [`DynArray`].
///
/// Takes over the array's buffer; elements not consumed by the time the
/// iterator drops are dropped with it, and the buffer is released.
pub struct IntoIter<T> {
    buf: RawBuf<T>,
    front: usize,
    back: usize,
}

// The iterator exclusively owns its buffer and every unconsumed element.
unsafe impl<T: Send> Send for IntoIter<T> {}
unsafe impl<T: Sync> Sync for IntoIter<T> {}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        let index = self.front;
        self.front += 1;
        // SAFETY: `index` was inside the unconsumed range [front, back),
        // so the slot holds an element nothing else will touch again.
        Some(unsafe { self.buf.as_ptr().add(index).read() })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        // SAFETY: `back` now names the last unconsumed slot.
        Some(unsafe { self.buf.as_ptr().add(self.back).read() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // SAFETY: [front, back) still holds unconsumed elements; the
        // RawBuf field releases the allocation afterwards.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.as_ptr().add(self.front),
                self.back - self.front,
            ));
        }
    }
}

impl<T> IntoIterator for DynArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Consumes the array into an iterator over its elements by value.
    fn into_iter(self) -> IntoIter<T> {
        let this = ManuallyDrop::new(self);
        // SAFETY: `this` is never dropped, so after the read the buffer
        // has exactly one owner: the iterator.
        let buf = unsafe { ptr::read(&this.buf) };
        IntoIter {
            buf,
            front: 0,
            back: this.len,
        }
    }
}

impl<'a, T> IntoIterator for &'a DynArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> slice::Iter<'a, T> {
        self.as_slice().iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynArray<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> slice::IterMut<'a, T> {
        self.as_mut_slice().iter_mut()
    }
}
