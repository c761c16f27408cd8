//! Integration tests for printzone.
//!
//! These tests drive an `EditorSession` the way a renderer would and check
//! complete editing flows end-to-end.

mod persistence_tests;
mod settings_reload_tests;
mod sync_flow_tests;
