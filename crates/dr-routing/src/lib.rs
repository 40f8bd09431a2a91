//! `dr-routing`: shortest delivery routes from a depot.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                      |
//! |-------------|---------------------------------------------------------------|
//! | [`router`]  | `Router` trait, `DijkstraRouter`, `ShortestPaths`             |
//! | [`path`]    | `reconstruct_path`, `format_path`                             |
//! | [`rank`]    | `rank_by_distance`, `RankedEntry`                             |
//! | [`summary`] | `summarize`, `RouteSummary`                                   |
//! | [`plan`]    | `DeliveryPlan`, `PlanEntry`, `DeliverySession`                |
//! | [`error`]   | `RouteError`, `RouteResult<T>`                                |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                      |
//! |------------|-------------------------------------------------------------|
//! | `parallel` | Adds `shortest_paths_batch` on the rayon thread pool.       |
//! | `serde`    | Derives `Serialize`/`Deserialize` on plan and summary types.|

pub mod error;
pub mod path;
pub mod plan;
pub mod rank;
pub mod router;
pub mod summary;


pub use error::{RouteError, RouteResult};
pub use path::{format_path, reconstruct_path};
pub use plan::{DeliveryPlan, DeliverySession, PlanEntry};
pub use rank::{RankedEntry, rank_by_distance};
pub use router::{DijkstraRouter, Router, ShortestPaths, shortest_paths};
pub use summary::{RouteSummary, summarize};

#[cfg(feature = "parallel")]
pub use router::shortest_paths_batch;
