//! The relay handler
//!
//! One invocation: validate the inbound request, attach the API key, make
//! a single upstream call and map the result to an outbound response.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::ProxyHandler;
pub use request::InboundRequest;
pub use response::OutboundResponse;
