use core::{
    fmt::{self, Debug, Formatter},
    hash::{Hash, Hasher},
    ops::{Index, IndexMut, Deref, DerefMut},
    slice::{self, SliceIndex},
};

use crate::capacity_policy;

use super::{Vector, IntoIter};

impl<T> Default for Vector<T> {

    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

/// Panics with the allocation error if the copy cannot be allocated.
impl<T: Clone> Clone for Vector<T> {

    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(vec) => vec,
            Err(err) => panic!("{}", err),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        if let Err(err) = self.try_clone_from(source) {
            panic!("{}", err)
        }
    }
}

impl<T: Debug> Debug for Vector<T> {

    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {

    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: PartialEq> PartialEq<[T]> for Vector<T> {

    #[inline(always)]
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: Hash> Hash for Vector<T> {

    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T, I: SliceIndex<[T]>> Index<I> for Vector<T> {

    type Output = I::Output;

    #[inline(always)]
    fn index(&self, index: I) -> &Self::Output {
        Index::index(self.as_slice(), index)
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for Vector<T> {

    #[inline(always)]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(self.as_mut_slice(), index)
    }
}

impl<T> AsRef<[T]> for Vector<T> {

    #[inline(always)]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for Vector<T> {

    #[inline(always)]
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Deref for Vector<T> {

    type Target = [T];

    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> DerefMut for Vector<T> {

    #[inline(always)]
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

/// Reserves for the iterator's lower bound, but never less than one implicit growth step.
///
/// Panics if growing fails.
impl<T> Extend<T> for Vector<T> {

    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let wanted = self.len().saturating_add(lower);
        if wanted > self.capacity() {
            let grown = capacity_policy::grow(self.capacity()).unwrap_or(wanted);
            if let Err(err) = self.reserve(wanted.max(grown)) {
                panic!("{}", err)
            }
        }
        for value in iter {
            if let Err(err) = self.push(value) {
                panic!("{}", err)
            }
        }
    }
}

impl<T> FromIterator<T> for Vector<T> {

    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Self::new();
        vec.extend(iter);
        vec
    }
}

impl<T> IntoIterator for Vector<T> {

    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        let (data, len) = self.into_raw_parts();
        IntoIter::new(data, len)
    }
}

impl<'vec, T> IntoIterator for &'vec Vector<T> {

    type Item = &'vec T;
    type IntoIter = slice::Iter<'vec, T>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'vec, T> IntoIterator for &'vec mut Vector<T> {

    type Item = &'vec mut T;
    type IntoIter = slice::IterMut<'vec, T>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn slices_and_ranges_index_through_deref() {
        let mut vec: Vector<i32> = (1..=5).collect();
        assert_eq!(&vec[1..3], &[2, 3]);
        vec[0] = 9;
        assert!(vec.contains(&9));
        assert!(vec == [9, 2, 3, 4, 5][..]);
        assert_eq!(format!("{:?}", vec), "[9, 2, 3, 4, 5]");
    }

    #[test]
    fn owned_iteration_drops_the_rest() {
        let vec = vector![String::from("a"), String::from("b"), String::from("c")];
        let mut iter = vec.into_iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next_back().as_deref(), Some("c"));
        assert_eq!(iter.next().as_deref(), Some("a"));
        assert_eq!(iter.as_slice(), ["b"]);
    }

    #[test]
    fn extend_keeps_doubling_after_the_hint() {
        let mut vec = vector![0];
        vec.extend([1, 2]);
        assert_eq!(vec.capacity(), 3);
        vec.push(3).unwrap();
        assert_eq!(vec.capacity(), 6);
        let mut sum = 0;
        for value in &mut vec {
            *value *= 2;
        }
        for value in &vec {
            sum += value;
        }
        assert_eq!(sum, 12);
    }

    #[test]
    fn single_value_extends_follow_implicit_growth() {
        let mut vec = Vector::new();
        let mut capacities = Vec::new();
        for i in 0..9 {
            vec.extend([i]);
            capacities.push(vec.capacity());
        }
        assert_eq!(capacities, [1, 2, 4, 4, 8, 8, 8, 8, 16]);
        assert_eq!(vec.as_slice(), &[0, 1, 2, 3, 4, 5, 6, 7, 8]);

        let collected: Vector<u8> = (0..5).collect();
        assert_eq!(collected.capacity(), 5);
    }
}
