//! Properties every strategy must hold on arbitrary nodes.
//!
//! Nodes are generated from fixed seeds, so a failure names the seed that
//! reproduces it.

mod min_fill_test;
mod partition_test;
mod round_trip_test;
