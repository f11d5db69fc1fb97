//! Fixtures and invariant checks shared by the split integration tests.

pub mod test_util;
