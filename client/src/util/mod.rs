//! Presentation helpers shared by the desk components.

pub mod count_up;
pub mod format;
