//! Account store integration tests

mod lifecycle_tests;
