use crate::CapacityError;

/// Capacity after one implicit growth step: `0 -> 1`, then doubling.
#[inline(always)]
pub fn grow(current: usize) -> Result<usize, CapacityError> {
    if current == 0 {
        return Ok(1)
    }
    current
        .checked_mul(2)
        .ok_or(CapacityError::CapacityOverflow { requested: current })
}
