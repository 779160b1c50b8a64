//! Workload simulator for the token pool: command line, concurrent users and
//! reporting.

pub mod cli;
pub mod driver;
pub mod logging;
pub mod report;
