//! The public surface a tree uses: adapters, settings and errors.

mod adapter_test;
mod error_test;
