//! End-to-end export tests

mod export_scenarios;
