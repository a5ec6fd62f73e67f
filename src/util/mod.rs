//! Internal utilities for word-at-a-time byte scanning.
//!
//! Most users should not need to use these directly.

pub(crate) mod broadword;
