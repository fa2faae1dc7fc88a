//! cpcheck-runner: execution side of the complaint-service harness
//!
//! Builds HTTP requests with reqwest's blocking client, probes the SUT
//! source tree, and carries the behavioral contract (acceptance sets) plus
//! the 43-case suite that encodes it.

pub mod contract;
pub mod http;
pub mod json;
pub mod suite;
pub mod tree;

pub use http::{Body, HttpClient, HttpResponse, Method, RequestSpec};
pub use suite::Suite;
pub use tree::SourceTree;
