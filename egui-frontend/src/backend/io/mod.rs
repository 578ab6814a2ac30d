//! # IO Module
//!
//! Platform-facing delivery of snapshots: the native share dialog and the
//! download folder fallback.

pub mod share;
