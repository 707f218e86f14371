use std::fmt;

/// A disk, identified by its size. Size 1 is the smallest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Disk(u32);

impl Disk {
    #[must_use]
    pub const fn new(size: u32) -> Self {
        Self(size)
    }

    #[must_use]
    pub const fn size(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Disk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
