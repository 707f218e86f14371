use std::fmt;

use crate::core::puzzle::disk::Disk;
use crate::core::puzzle::errors::PuzzleError;

/// One of the three rods, labelled A, B and C from left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RodId {
    A,
    B,
    C,
}

impl RodId {
    pub const ALL: [Self; 3] = [Self::A, Self::B, Self::C];

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
            Self::C => 2,
        }
    }

    #[must_use]
    pub const fn label(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
        }
    }
}

impl TryFrom<usize> for RodId {
    type Error = PuzzleError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Self::A),
            1 => Ok(Self::B),
            2 => Ok(Self::C),
            _ => Err(PuzzleError::RodOutOfRange { index }),
        }
    }
}

impl fmt::Display for RodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A stack of disks stored bottom to top.
///
/// Sizes strictly decrease from bottom to top. Only [`PuzzleState`] can push
/// onto a rod, and it checks the ordering first.
///
/// [`PuzzleState`]: crate::core::puzzle::PuzzleState
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rod {
    disks: Vec<Disk>,
}

impl Rod {
    pub(crate) fn full_tower(num_disks: u32) -> Self {
        Self {
            disks: (1..=num_disks).rev().map(Disk::new).collect(),
        }
    }

    /// Disks from bottom to top.
    #[must_use]
    pub fn disks(&self) -> &[Disk] {
        &self.disks
    }

    #[must_use]
    pub fn top(&self) -> Option<Disk> {
        self.disks.last().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.disks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.disks.is_empty()
    }

    #[must_use]
    pub fn accepts(&self, disk: Disk) -> bool {
        self.top().is_none_or(|top| disk < top)
    }

    pub(crate) fn pop(&mut self) -> Option<Disk> {
        self.disks.pop()
    }

    pub(crate) fn push(&mut self, disk: Disk) {
        debug_assert!(self.accepts(disk), "disk {disk} placed on a smaller disk");
        self.disks.push(disk);
    }
}
