//! Use cases: the action entry points the surrounding UI drives.

pub mod export;
pub mod links;
pub mod play;
pub mod sheet;
