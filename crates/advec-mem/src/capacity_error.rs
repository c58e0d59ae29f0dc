#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CapacityError {
    AllocFailed {
        new_capacity: usize,
    },
    CapacityOverflow {
        requested: usize,
    },
}

impl core::fmt::Display for CapacityError {

    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::AllocFailed { new_capacity } => {
                write!(f, "allocation failed with new capacity {}", new_capacity)
            },
            Self::CapacityOverflow { requested } => {
                write!(f, "capacity {} overflows the addressable size", requested)
            },
        }
    }
}

impl core::error::Error for CapacityError {}
