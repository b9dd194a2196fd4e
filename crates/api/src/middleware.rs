/// Maps booking errors to HTTP responses
pub mod error_handling;
/// Per-request storage extractor
pub mod storage;
