//! Integration tests for ansifade

mod cli_test;
mod fade_test;
mod helpers;
