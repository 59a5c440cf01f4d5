//! Cache model tests.



/// Victim selection.
pub mod policies;
