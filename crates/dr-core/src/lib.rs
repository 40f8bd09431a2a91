//! `dr-core`: foundational types for the `delivery_route` engine.
//!
//! This crate is a dependency of every other `dr-*` crate.  It has no `dr-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`ids`]      | `NodeId`                                               |
//! | [`geo`]      | `GeoPoint`, `GeoBounds`, haversine distance            |
//! | [`distance`] | `Distance` with the `INFINITE` unreachable sentinel    |
//! | [`rng`]      | `RouteRng` (seedable)                                  |
//! | [`config`]   | `RouteConfig`                                          |
//! | [`error`]    | `CoreError`, `CoreResult`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod config;
pub mod distance;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{DEFAULT_COST_PER_UNIT, RouteConfig};
pub use distance::Distance;
pub use error::{CoreError, CoreResult};
pub use geo::{GeoBounds, GeoPoint};
pub use ids::NodeId;
pub use rng::RouteRng;
