// ABOUTME: HTTP middleware for the recommendation API
// ABOUTME: CORS policy and request correlation layers shared by every route

/// CORS configuration
pub mod cors;
/// Request ID and trace layers
pub mod tracing;

pub use cors::setup_cors;
pub use self::tracing::{request_id_layers, trace_layer, REQUEST_ID_HEADER};
