//! Session-gated navigation.
//!
//! - `resolver`: one-shot identity check producing the session state.
//! - `gate`: pure redirect policy over `(SessionState, Location)`.
//! - `redirect`: de-duplication of outstanding redirect instructions.

pub mod gate;
pub mod redirect;
pub mod resolver;
