//! Shared client-side state.
//!
//! DESIGN
//! ======
//! The session is the only shared state. It lives in a signal pair created
//! by the root component: the resolver task holds the sole writer, everything
//! else reads through context.

pub mod session;
