//! Services orchestrating ports into the contracts callers rely on.

pub mod handoff;

pub use handoff::HandoffService;
