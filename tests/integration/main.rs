//! Integration tests: the HTTP gateway and the service stack against a
//! mock document backend.

mod gateway_test;
mod helpers;
mod workflow_test;
