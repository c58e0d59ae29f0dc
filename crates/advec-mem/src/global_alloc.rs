use std::alloc::{Layout, alloc, dealloc};

use core::ptr::NonNull;

use crate::CapacityError;

pub struct GlobalAlloc;

pub static GLOBAL_ALLOC: GlobalAlloc = GlobalAlloc;

impl GlobalAlloc {

    /// Allocates room for `count` values of `T` without initializing them.
    ///
    /// Zero sized requests return a dangling pointer and touch no allocator.
    pub unsafe fn allocate_uninit<T>(&self, count: usize) -> Result<NonNull<T>, CapacityError> {
        let layout = Layout::array::<T>(count)
            .map_err(|_| CapacityError::CapacityOverflow { requested: count })?;
        if layout.size() == 0 {
            return Ok(NonNull::dangling())
        }
        let ptr = unsafe { alloc(layout) };
        NonNull::new(ptr.cast::<T>())
            .ok_or(CapacityError::AllocFailed { new_capacity: count })
    }

    pub unsafe fn free_uninit<T>(&self, ptr: NonNull<T>, count: usize) {
        let layout = match Layout::array::<T>(count) {
            Ok(l) => l,
            Err(_) => return,
        };
        if layout.size() == 0 {
            return
        }
        unsafe { dealloc(ptr.as_ptr().cast::<u8>(), layout) }
    }
}
