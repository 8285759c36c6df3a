pub mod config;
pub mod logging;

pub mod fetcher;
pub mod fingerprint;
pub mod storage;
pub mod url_model;
