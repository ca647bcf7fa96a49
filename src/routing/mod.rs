//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (method, path)
//!     → router.rs (ordered route table scan)
//!     → matcher.rs (evaluate path matcher, capture id)
//!     → Return: RouteMatch { endpoint, id } or None
//! ```
//!
//! # Design Decisions
//! - Route table built at startup, immutable at runtime
//! - No regex: path matchers are a tagged enum with O(path) evaluation
//! - Exact routes registered before pattern routes; first match wins,
//!   so exact always beats pattern
//! - Explicit `None` on no match; the caller owns the 404 response

pub mod matcher;
pub mod router;

pub use matcher::PathMatcher;
pub use router::{Endpoint, Route, RouteMatch, RouteTable};
