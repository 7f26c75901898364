//! Board-level test suite.

mod movegen;
