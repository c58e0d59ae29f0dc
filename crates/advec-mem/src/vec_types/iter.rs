use core::{
    fmt::{self, Debug, Formatter},
    iter::FusedIterator,
    slice,
};

use crate::RawStorage;

/// Owning iterator returned by `Vector::into_iter`.
///
/// Values in `[start, end)` are still live. The rest are either yielded or were never
/// initialized.
pub struct IntoIter<T> {
    data: RawStorage<T>,
    start: usize,
    end: usize,
}

impl<T> IntoIter<T> {

    #[inline(always)]
    pub(crate) fn new(data: RawStorage<T>, len: usize) -> Self {
        Self {
            data,
            start: 0,
            end: len,
        }
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        unsafe {
            slice::from_raw_parts(self.data.slot(self.start).as_ptr(), self.end - self.start)
        }
    }
}

impl<T> Iterator for IntoIter<T> {

    type Item = T;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            None
        }
        else {
            let value = unsafe { self.data.slot(self.start).read() };
            self.start += 1;
            Some(value)
        }
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {

    #[inline(always)]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            None
        }
        else {
            self.end -= 1;
            Some(unsafe { self.data.slot(self.end).read() })
        }
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: Debug> Debug for IntoIter<T> {

    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T> Drop for IntoIter<T> {

    fn drop(&mut self) {
        let remaining = self.end - self.start;
        self.end = self.start;
        unsafe { self.data.slot(self.start).drop_in_place(remaining) }
    }
}
