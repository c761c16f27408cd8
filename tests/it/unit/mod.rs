//! Unit tests for printzone.

mod coords_tests;
mod sync_tests;
