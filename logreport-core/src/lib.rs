pub mod access_log;
pub mod cli;
pub mod conf;
pub mod enrichment;
pub mod error;
pub mod logging;
pub mod report;
