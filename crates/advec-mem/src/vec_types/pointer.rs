use core::{
    mem::{self, needs_drop},
    ptr::{self, NonNull},
    ops::{Deref, DerefMut},
};

/// Slot address inside a [`RawStorage`](crate::RawStorage).
///
/// All element operations are `unsafe`: the caller tracks which slots hold live values.
#[derive(Eq)]
pub struct Pointer<T: Sized>(NonNull<T>);

impl<T: Sized> Copy for Pointer<T> {}

impl<T: Sized> Clone for Pointer<T> {

    fn clone(&self) -> Self {
        *self
    }
}

impl<T> PartialEq for Pointer<T> {

    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: Sized> Pointer<T> {

    #[inline(always)]
    pub unsafe fn add(self, count: usize) -> Self {
        unsafe {
            self.0.add(count).into()
        }
    }

    #[inline(always)]
    pub unsafe fn read(self) -> T {
        unsafe { self.0.read() }
    }

    #[inline(always)]
    pub unsafe fn write(self, value: T) {
        unsafe { self.0.write(value) }
    }

    #[inline(always)]
    pub unsafe fn as_ref<'a>(self) -> &'a T {
        unsafe { self.0.as_ref() }
    }

    #[inline(always)]
    pub unsafe fn as_mut<'a>(self) -> &'a mut T {
        let mut ptr = self.0;
        unsafe { ptr.as_mut() }
    }

    /// Relocates `len` live values starting here to `to`.
    ///
    /// Afterwards the source slots are logically uninitialized. The ranges must not overlap.
    #[inline(always)]
    pub unsafe fn move_elements(self, to: Self, len: usize) {
        unsafe {
            self.0.copy_to_nonoverlapping(to.0, len);
        }
    }

    /// Shifts `[index, len)` one slot right and writes `value` at `index`.
    ///
    /// Slot `len` must be inside the allocation and uninitialized.
    #[inline(always)]
    pub unsafe fn insert_element(self, value: T, index: usize, len: usize) -> Pointer<T> {
        unsafe {
            let res = self.add(index);
            res.0.copy_to(res.add(1).0, len - index);
            res.write(value);
            res
        }
    }

    /// Reads the value at `index` out and shifts `(index, len)` one slot left.
    ///
    /// Slot `len - 1` is logically uninitialized afterwards.
    #[inline(always)]
    pub unsafe fn remove_element(self, index: usize, len: usize) -> T {
        unsafe {
            let res = self.add(index);
            let value = res.read();
            res.add(1).0.copy_to(res.0, len - index - 1);
            value
        }
    }

    /// Drops `len` live values starting here.
    ///
    /// Keeps dropping the remaining values if one of the destructors panics.
    #[inline(always)]
    pub unsafe fn drop_in_place(self, len: usize) {
        if needs_drop::<T>() {
            unsafe {
                ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.0.as_ptr(), len));
            }
        }
    }

    /// Clones `len` live values starting here into the uninitialized slots at `to`.
    ///
    /// If a clone panics, the clones already written are dropped before unwinding continues,
    /// so `to` holds no live values in that case.
    pub unsafe fn clone_elements(self, to: Self, len: usize)
        where
            T: Clone
    {
        struct Written<T> {
            dst: Pointer<T>,
            count: usize,
        }

        impl<T> Drop for Written<T> {

            fn drop(&mut self) {
                unsafe { self.dst.drop_in_place(self.count) }
            }
        }

        let mut written = Written { dst: to, count: 0 };
        while written.count < len {
            unsafe {
                let value = self.add(written.count).as_ref().clone();
                to.add(written.count).write(value);
            }
            written.count += 1;
        }
        mem::forget(written);
    }
}

impl<T> Deref for Pointer<T> {

    type Target = NonNull<T>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for Pointer<T> {

    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> From<NonNull<T>> for Pointer<T> {

    fn from(value: NonNull<T>) -> Self {
        Self(value)
    }
}
