//! Handle type for document objects
//!
//! Handles are generational 64-bit identifiers into a document's object
//! arena. The low 32 bits hold the slot index, the high 32 bits hold the
//! slot generation. A slot's generation changes every time its object is
//! destroyed, so stale copies of a handle stop resolving.

use std::fmt;

/// A unique identifier for document objects
///
/// Handle 0 is reserved and invalid. Live objects always carry a non-zero
/// generation, so a valid handle is never 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Handle(u64);

impl Handle {
    /// The null/invalid handle (0)
    pub const NULL: Handle = Handle(0);

    /// Create a handle from a slot index and generation
    #[inline]
    pub const fn new(index: u32, generation: u32) -> Self {
        Handle(((generation as u64) << 32) | index as u64)
    }

    /// Create a handle from its packed u64 form
    #[inline]
    pub const fn from_raw(value: u64) -> Self {
        Handle(value)
    }

    /// Get the raw u64 value
    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Slot index in the owning arena
    #[inline]
    pub const fn index(&self) -> u32 {
        self.0 as u32
    }

    /// Generation of the slot at the time this handle was issued
    #[inline]
    pub const fn generation(&self) -> u32 {
        (self.0 >> 32) as u32
    }

    /// Check if this is a null/invalid handle
    #[inline]
    pub const fn is_null(&self) -> bool {
        self.generation() == 0
    }

    /// Check if this is a valid (non-null) handle
    ///
    /// This only says the handle was issued; whether the object is still
    /// alive is answered by the document.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        !self.is_null()
    }
}

impl Default for Handle {
    fn default() -> Self {
        Handle::NULL
    }
}

impl From<u64> for Handle {
    fn from(value: u64) -> Self {
        Handle(value)
    }
}

impl From<Handle> for u64 {
    fn from(handle: Handle) -> Self {
        handle.0
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}v{}", self.index(), self.generation())
    }
}

impl fmt::LowerHex for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::UpperHex for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}
