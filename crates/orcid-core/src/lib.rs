pub mod config;
pub mod logging;

pub mod orcid;
pub mod policy;
pub mod report;
pub mod value;
