macro_rules! const_assert {
    ($check:expr $(,$msg:tt)*) => {
        const _: () = assert!($check $(,$msg)*);
    };
}

macro_rules! size_of {
    ($t:ty) => {
        size_of::<$t>()
    };
}

#[cfg(feature = "log")]
macro_rules! log_trace {
    ($($arg:tt)*) => {
        let _ = advec_log::trace!($($arg)*);
    };
}

#[cfg(not(feature = "log"))]
macro_rules! log_trace {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        let _ = advec_log::debug!($($arg)*);
    };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

/// Creates a [`Vector`](crate::Vector) from a list of elements or from `value; len`.
///
/// Panics if the allocation fails, like `vec!`.
///
/// ```rust
/// use advec_mem::vector;
///
/// let a = vector![1, 2, 3];
/// assert_eq!(a.as_slice(), &[1, 2, 3]);
/// assert_eq!(a.capacity(), 3);
///
/// let b = vector![7u8; 4];
/// assert_eq!(b.as_slice(), &[7, 7, 7, 7]);
/// ```
#[macro_export]
macro_rules! vector {
    () => {
        $crate::Vector::new()
    };
    ($elem:expr; $n:expr) => {{
        let mut vec = $crate::Vector::new();
        if let Err(err) = vec.resize_with_value($n, $elem) {
            panic!("{}", err)
        }
        vec
    }};
    ($($elem:expr),+ $(,)?) => {
        <$crate::Vector<_> as core::iter::FromIterator<_>>::from_iter([$($elem),+])
    };
}
