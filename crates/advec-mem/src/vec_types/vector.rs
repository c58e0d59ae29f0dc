//! Growable contiguous vector built on [`RawStorage`].
//!
//! [`Vector<T>`] pairs one [`RawStorage`] with a count of live elements. Slots `[0, len)` hold
//! initialized values and slots `[len, capacity)` are uninitialized.
//!
//! # Growth
//!
//! Implicit growth (push, insert, emplace) goes `0 -> 1 -> 2 -> 4 -> 8 ...`. Explicit
//! [`reserve`](Vector::reserve) and [`resize`](Vector::resize) allocate exactly what was asked
//! for. Relocating elements into new storage is a bitwise move and cannot fail.
//!
//! # Failure guarantees
//!
//! - Allocation failure is returned as [`CapacityError`](crate::CapacityError) and leaves the
//!   vector untouched.
//! - [`reserve`](Vector::reserve) and the reallocating branch of [`emplace`](Vector::emplace)
//!   are all-or-nothing. The new element is constructed in the new storage before anything
//!   else moves, so a panicking constructor leaves length, capacity and every value unchanged.
//! - [`erase`](Vector::erase) and the in-place branch of insertion only promise a valid vector.
//! - Growing by construction ([`resize_with`](Vector::resize_with), cloning into a longer
//!   vector) drops the values it already built if a constructor panics, so the length is
//!   unchanged. Capacity reserved for the new values is kept.
//!
//! Any operation that changes the capacity invalidates pointers from [`as_ptr`](Vector::as_ptr).
//!
//! # Examples
//!
//! ```rust
//! use advec_mem::Vector;
//!
//! let mut vec = Vector::new();
//! vec.push(1).unwrap();
//! vec.push(2).unwrap();
//! vec.push(3).unwrap();
//! assert_eq!(vec.capacity(), 4);
//!
//! vec.insert(1, 10).unwrap();
//! assert_eq!(vec.as_slice(), &[1, 10, 2, 3]);
//! assert_eq!(vec.capacity(), 4);
//!
//! vec.erase(0);
//! assert_eq!(vec.as_slice(), &[10, 2, 3]);
//!
//! vec.resize(5).unwrap();
//! assert_eq!(vec.as_slice(), &[10, 2, 3, 0, 0]);
//! ```

use core::{
    mem,
    slice,
};

use crate::{
    capacity_policy,
    raw_storage::RawStorage,
};

use super::{Result, Pointer};

pub struct Vector<T> {
    data: RawStorage<T>,
    len: usize,
}

const_assert!(size_of!(Vector<u32>) == size_of!(Option<Vector<u32>>));

/// Values written past `len` that are dropped again unless committed.
///
/// `len` only grows once every value is in place.
struct PendingTail<'a, T> {
    len: &'a mut usize,
    start: Pointer<T>,
    written: usize,
}

impl<'a, T> PendingTail<'a, T> {

    #[inline(always)]
    fn new(len: &'a mut usize, start: Pointer<T>) -> Self {
        Self {
            len,
            start,
            written: 0,
        }
    }

    #[inline(always)]
    fn written(&self) -> usize {
        self.written
    }

    /// # Safety
    /// The next slot must be inside the allocation and uninitialized.
    #[inline(always)]
    unsafe fn push(&mut self, value: T) {
        unsafe { self.start.add(self.written).write(value) }
        self.written += 1;
    }

    #[inline(always)]
    fn commit(self) {
        *self.len += self.written;
        mem::forget(self);
    }
}

impl<T> Drop for PendingTail<'_, T> {

    fn drop(&mut self) {
        unsafe { self.start.drop_in_place(self.written) }
    }
}

impl<T> Vector<T> {

    #[inline(always)]
    pub const fn new() -> Self {
        Self {
            data: RawStorage::empty(),
            len: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Ok(Self {
            data: RawStorage::new(capacity)?,
            len: 0,
        })
    }

    /// Creates a vector of `len` default values with capacity exactly `len`.
    pub fn with_len(len: usize) -> Result<Self>
        where
            T: Default
    {
        Self::with_len_with(len, T::default)
    }

    pub fn with_len_with<F>(len: usize, f: F) -> Result<Self>
        where
            F: FnMut() -> T
    {
        let mut vec = Self::with_capacity(len)?;
        vec.construct_tail(len, f);
        Ok(vec)
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    #[inline(always)]
    pub fn as_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.data.as_mut_ptr()
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.data.as_ptr(), self.len) }
    }

    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.data.as_mut_ptr(), self.len) }
    }

    /// # Safety
    /// `index` must be less than [`len`](Self::len).
    #[inline(always)]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len, "index {} out of bounds for length {}", index, self.len);
        unsafe { self.data.slot(index).as_ref() }
    }

    /// # Safety
    /// `index` must be less than [`len`](Self::len).
    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len, "index {} out of bounds for length {}", index, self.len);
        unsafe { self.data.slot(index).as_mut() }
    }

    #[inline(always)]
    pub fn back(&self) -> Option<&T> {
        if self.len == 0 {
            None
        }
        else {
            unsafe {
                Some(
                    self.data.slot(self.len - 1).as_ref()
                )
            }
        }
    }

    #[inline(always)]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.len == 0 {
            None
        }
        else {
            unsafe {
                Some(
                    self.data.slot(self.len - 1).as_mut()
                )
            }
        }
    }

    #[inline(always)]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    #[inline(always)]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Grows the capacity to exactly `capacity` if it is currently smaller.
    ///
    /// Never shrinks. On error the vector is unchanged.
    pub fn reserve(&mut self, capacity: usize) -> Result<()> {
        if capacity <= self.data.capacity() {
            return Ok(())
        }
        let mut new_data = self.allocate(Ok(capacity))?;
        unsafe {
            self.data.slot(0).move_elements(new_data.slot(0), self.len);
        }
        self.data.swap(&mut new_data);
        Ok(())
    }

    /// Resizes to `len`, filling new slots with `T::default()`.
    pub fn resize(&mut self, len: usize) -> Result<()>
        where
            T: Default
    {
        self.resize_with(len, T::default)
    }

    pub fn resize_with_value(&mut self, len: usize, value: T) -> Result<()>
        where
            T: Clone
    {
        self.resize_with(len, || value.clone())
    }

    /// Drops trailing values when shrinking. When growing, reserves exactly `len` and fills the
    /// new slots with `f`.
    ///
    /// If `f` panics, the values it already built are dropped and the length is unchanged.
    pub fn resize_with<F>(&mut self, len: usize, f: F) -> Result<()>
        where
            F: FnMut() -> T
    {
        if len < self.len {
            self.truncate(len);
        }
        else if len > self.len {
            self.reserve(len)?;
            self.construct_tail(len, f);
        }
        Ok(())
    }

    /// Drops the values in `[len, self.len())`. Capacity is kept.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return
        }
        let tail = self.len - len;
        self.len = len;
        unsafe { self.data.slot(len).drop_in_place(tail) }
    }

    #[inline(always)]
    pub fn clear(&mut self) {
        self.truncate(0)
    }

    #[inline(always)]
    pub fn push(&mut self, value: T) -> Result<&mut T> {
        self.emplace(self.len, || value)
    }

    #[inline(always)]
    pub fn emplace_back<F>(&mut self, f: F) -> Result<&mut T>
        where
            F: FnOnce() -> T
    {
        self.emplace(self.len, f)
    }

    #[inline(always)]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None
        }
        self.len -= 1;
        Some(unsafe { self.data.slot(self.len).read() })
    }

    /// Drops the last value.
    ///
    /// # Panics
    /// If the vector is empty.
    pub fn pop_back(&mut self) {
        if self.len == 0 {
            panic!("pop_back called on an empty vector")
        }
        self.len -= 1;
        unsafe { self.data.slot(self.len).drop_in_place(1) }
    }

    #[inline(always)]
    pub fn insert(&mut self, index: usize, value: T) -> Result<&mut T> {
        self.emplace(index, || value)
    }

    /// Constructs a value with `f` at `index`, shifting later values right.
    ///
    /// When the vector is full, the capacity doubles and `f` runs directly into the new
    /// storage before existing values are relocated. If `f` panics or the allocation fails,
    /// the vector is unchanged.
    ///
    /// When there is room, `f` runs before any value is shifted.
    ///
    /// # Panics
    /// If `index > len`.
    pub fn emplace<F>(&mut self, index: usize, f: F) -> Result<&mut T>
        where
            F: FnOnce() -> T
    {
        if index > self.len {
            panic!("index {} was out of bounds with len {} when inserting", index, self.len)
        }
        if self.len == self.data.capacity() {
            self.emplace_reallocating(index, f)?;
        }
        else if index == self.len {
            unsafe { self.data.slot(index).write(f()) };
        }
        else {
            let value = f();
            unsafe { self.data.slot(0).insert_element(value, index, self.len) };
        }
        self.len += 1;
        Ok(unsafe { self.data.slot(index).as_mut() })
    }

    /// Drops the value at `index` and shifts later values left.
    ///
    /// # Panics
    /// If `index >= len`.
    pub fn erase(&mut self, index: usize) {
        if index >= self.len {
            panic!("index {} was out of bounds with len {} when erasing", index, self.len)
        }
        let removed = unsafe { self.data.slot(0).remove_element(index, self.len) };
        self.len -= 1;
        drop(removed);
    }

    /// Removes and returns the value at `index`, or `None` if `index >= len`.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None
        }
        let removed = unsafe { self.data.slot(0).remove_element(index, self.len) };
        self.len -= 1;
        Some(removed)
    }

    /// Removes the value at `index` and moves the last value into its slot.
    #[inline(always)]
    pub fn swap_remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None
        }
        let removed = unsafe { self.data.slot(index).read() };
        self.len -= 1;
        if index != self.len {
            unsafe { self.data.slot(self.len).move_elements(self.data.slot(index), 1) }
        }
        Some(removed)
    }

    #[inline(always)]
    pub fn swap(&mut self, other: &mut Self) {
        self.data.swap(&mut other.data);
        mem::swap(&mut self.len, &mut other.len);
    }

    /// Drops the current values and takes over the storage of `other`, leaving it empty with
    /// no capacity.
    pub fn take_from(&mut self, other: &mut Self) {
        self.clear();
        self.data = other.data.take();
        self.len = mem::replace(&mut other.len, 0);
    }

    /// Clone with exactly `len` capacity, returning allocation errors.
    pub fn try_clone(&self) -> Result<Self>
        where
            T: Clone
    {
        let data = RawStorage::new(self.len)?;
        unsafe {
            self.data.slot(0).clone_elements(data.slot(0), self.len);
        }
        Ok(Self {
            data,
            len: self.len,
        })
    }

    /// Makes `self` a copy of `source`.
    ///
    /// If `source` does not fit, a full copy is built first and swapped in, so a failure leaves
    /// `self` unchanged. Otherwise values are assigned in place and the capacity is kept. A
    /// panicking clone past the old length drops the extra values cloned so far.
    pub fn try_clone_from(&mut self, source: &Self) -> Result<()>
        where
            T: Clone
    {
        if source.len > self.data.capacity() {
            let mut copy = source.try_clone()?;
            self.swap(&mut copy);
            return Ok(())
        }
        let shared = self.len.min(source.len);
        for (dst, src) in self.as_mut_slice()[..shared].iter_mut().zip(&source.as_slice()[..shared]) {
            dst.clone_from(src);
        }
        if source.len < self.len {
            self.truncate(source.len);
        }
        else {
            let start = unsafe { self.data.slot(self.len) };
            let mut tail = PendingTail::new(&mut self.len, start);
            for value in &source.as_slice()[shared..] {
                unsafe { tail.push(value.clone()) };
            }
            tail.commit();
        }
        Ok(())
    }

    /// Allocates the storage for a capacity change. Overflow from the growth step and allocator
    /// failure are both logged here.
    fn allocate(&self, capacity: Result<usize>) -> Result<RawStorage<T>> {
        match capacity.and_then(RawStorage::new) {
            Ok(data) => {
                log_trace!(
                    "growing Vector<{}> from {} to {} slots",
                    core::any::type_name::<T>(), self.data.capacity(), data.capacity(),
                );
                Ok(data)
            },
            Err(err) => {
                log_debug!(
                    "Vector<{}> failed to grow from {} slots: {}",
                    core::any::type_name::<T>(), self.data.capacity(), err,
                );
                Err(err)
            },
        }
    }

    fn emplace_reallocating<F>(&mut self, index: usize, f: F) -> Result<()>
        where
            F: FnOnce() -> T
    {
        let mut new_data = self.allocate(capacity_policy::grow(self.data.capacity()))?;
        unsafe {
            new_data.slot(index).write(f());
            let src = self.data.slot(0);
            let dst = new_data.slot(0);
            src.move_elements(dst, index);
            src.add(index).move_elements(dst.add(index + 1), self.len - index);
        }
        self.data.swap(&mut new_data);
        Ok(())
    }

    /// Constructs values with `f` until `len` is reached. Capacity must already suffice.
    fn construct_tail<F>(&mut self, len: usize, mut f: F)
        where
            F: FnMut() -> T
    {
        debug_assert!(len <= self.data.capacity());
        let count = len - self.len;
        let start = unsafe { self.data.slot(self.len) };
        let mut tail = PendingTail::new(&mut self.len, start);
        while tail.written() < count {
            unsafe { tail.push(f()) };
        }
        tail.commit();
    }

    /// Hands the storage to an owning iterator without dropping any value.
    #[inline(always)]
    pub(super) fn into_raw_parts(self) -> (RawStorage<T>, usize) {
        let mut this = mem::ManuallyDrop::new(self);
        (this.data.take(), this.len)
    }
}

impl<T> Drop for Vector<T> {

    fn drop(&mut self) {
        unsafe { self.data.slot(0).drop_in_place(self.len) }
    }
}
