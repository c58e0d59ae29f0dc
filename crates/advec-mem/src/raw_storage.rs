//! Exclusive ownership of an uninitialized block of element slots.
//!
//! [`RawStorage<T>`] allocates and releases memory for a fixed number of `T` slots and computes
//! slot addresses. It never constructs or drops a `T`: whoever writes into a slot is responsible
//! for dropping that value before the storage is released.
//!
//! The storage cannot be cloned, since duplicating bytes that may be uninitialized has no
//! meaning. Ownership moves with the value, and [`RawStorage::take`] leaves an empty storage
//! behind.
//!
//! ```rust
//! use advec_mem::RawStorage;
//!
//! let mut storage = RawStorage::<u64>::new(4).unwrap();
//! unsafe {
//!     storage.slot(0).write(7);
//!     assert_eq!(storage.slot(0).read(), 7);
//! }
//! let moved = storage.take();
//! assert_eq!(moved.capacity(), 4);
//! assert_eq!(storage.capacity(), 0);
//! ```

use core::{
    marker::PhantomData,
    mem,
    ptr::NonNull,
};

use crate::{
    global_alloc::GLOBAL_ALLOC,
    vec_types::Pointer,
    CapacityError,
};

pub struct RawStorage<T> {
    data: NonNull<T>,
    capacity: usize,
    _marker: PhantomData<T>,
}

unsafe impl<T: Send> Send for RawStorage<T> {}

unsafe impl<T: Sync> Sync for RawStorage<T> {}

impl<T> RawStorage<T> {

    #[inline(always)]
    pub const fn empty() -> Self {
        Self {
            data: NonNull::dangling(),
            capacity: 0,
            _marker: PhantomData,
        }
    }

    /// Acquires storage for exactly `capacity` slots.
    ///
    /// A capacity of zero allocates nothing. Allocation errors are returned unchanged.
    pub fn new(capacity: usize) -> Result<Self, CapacityError> {
        if capacity == 0 {
            return Ok(Self::empty())
        }
        let data = unsafe { GLOBAL_ALLOC.allocate_uninit(capacity)? };
        Ok(Self {
            data,
            capacity,
            _marker: PhantomData,
        })
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline(always)]
    pub fn as_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.data.as_ptr()
    }

    /// Address of slot `index`, whether or not it holds a live value.
    ///
    /// # Safety
    /// `index` must not exceed [`capacity`](Self::capacity). The one-past-the-end address is
    /// allowed.
    #[inline(always)]
    pub unsafe fn slot(&self, index: usize) -> Pointer<T> {
        debug_assert!(
            index <= self.capacity,
            "slot {} was out of bounds of capacity {}", index, self.capacity,
        );
        unsafe { Pointer::from(self.data).add(index) }
    }

    /// Moves the allocation out, leaving `self` empty.
    #[inline(always)]
    pub fn take(&mut self) -> Self {
        mem::replace(self, Self::empty())
    }

    #[inline(always)]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.data, &mut other.data);
        mem::swap(&mut self.capacity, &mut other.capacity);
    }
}

impl<T> Default for RawStorage<T> {

    #[inline(always)]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Drop for RawStorage<T> {

    fn drop(&mut self) {
        if self.capacity != 0 {
            unsafe { GLOBAL_ALLOC.free_uninit(self.data, self.capacity) }
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn zero_capacity_is_empty() {
        let storage = RawStorage::<String>::new(0).unwrap();
        assert_eq!(storage.capacity(), 0);
        assert_eq!(storage.as_ptr(), NonNull::<String>::dangling().as_ptr() as *const String);
    }

    #[test]
    fn slots_are_contiguous() {
        let storage = RawStorage::<u32>::new(8).unwrap();
        assert_eq!(storage.capacity(), 8);
        unsafe {
            for i in 0..8 {
                storage.slot(i).write(i as u32 * 3);
            }
            assert_eq!(storage.slot(3).as_ptr(), storage.as_ptr().add(3) as *mut u32);
            for i in 0..8 {
                assert_eq!(storage.slot(i).read(), i as u32 * 3);
            }
        }
    }

    #[test]
    fn take_leaves_source_empty() {
        let mut storage = RawStorage::<u16>::new(5).unwrap();
        let ptr = storage.as_ptr();
        let taken = storage.take();
        assert_eq!(taken.capacity(), 5);
        assert_eq!(taken.as_ptr(), ptr);
        assert_eq!(storage.capacity(), 0);
    }

    #[test]
    fn swap_exchanges_blocks() {
        let mut a = RawStorage::<u8>::new(2).unwrap();
        let mut b = RawStorage::<u8>::new(7).unwrap();
        let (pa, pb) = (a.as_ptr(), b.as_ptr());
        a.swap(&mut b);
        assert_eq!((a.capacity(), b.capacity()), (7, 2));
        assert_eq!((a.as_ptr(), b.as_ptr()), (pb, pa));
    }

    #[test]
    fn oversized_request_is_reported() {
        let result = RawStorage::<u64>::new(usize::MAX);
        assert_eq!(
            result.err(),
            Some(CapacityError::CapacityOverflow { requested: usize::MAX }),
        );
    }

    #[test]
    fn zero_sized_slots_need_no_allocation() {
        let storage = RawStorage::<()>::new(1024).unwrap();
        assert_eq!(storage.capacity(), 1024);
        unsafe {
            storage.slot(1023).write(());
        }
    }
}
