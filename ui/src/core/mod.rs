//! Platform-facing support code shared by every view: persistence of the
//! visitor's language choice, scroll-linked presentation glue, and timers
//! that work on both wasm and native builds.

pub mod scrollfx;
pub mod storage;
pub mod timing;
