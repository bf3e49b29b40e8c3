//! Raw two-limb arithmetic on lanes.
//!
//! These are the building blocks of [`crate::Twofold`] and [`crate::Coupled`], exposed for callers
//! who keep limbs in separate buffers, e.g. one [`crate::Doublex`] of leading limbs and one of
//! errors.

pub mod coupled;
pub mod twofold;
