//! Authentication flow
//!
//! Chains the directory, credential verification and token issuance into
//! the sign-up, login, refresh and actor-resolution steps a transport layer
//! calls.

mod service;


pub use service::AuthService;
