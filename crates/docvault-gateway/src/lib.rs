//! # docvault-gateway
//!
//! Client side of the document backend. The [`Gateway`] trait is the
//! contract the service layer consumes; [`HttpGateway`] implements it over
//! the `/api/docs` REST endpoints. Responses are validated and normalized
//! on ingress so that nothing downstream sees a loosely-shaped payload.

pub mod http;
pub mod normalize;
pub mod payload;
pub mod traits;

pub use http::HttpGateway;
pub use payload::UploadPayload;
pub use traits::Gateway;
