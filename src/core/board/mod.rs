//! Where things are on the board, and which rod a pointer is over.

pub mod layout;

pub use layout::BoardLayout;
