//! Hand-built nodes with a known best split for each strategy.

mod ang_tan_test;
mod degenerate_test;
mod topological_test;
