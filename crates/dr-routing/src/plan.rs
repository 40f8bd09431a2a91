//! Delivery plans and the session that produces them.
//!
//! A [`DeliveryPlan`] is what a front-end renders: every intersection ranked
//! by distance from the depot with its full path, plus a [`RouteSummary`].
//! A [`DeliverySession`] bundles the state a front-end used to keep in
//! long-lived fields (current graph, settings, RNG) into one explicit value.

use std::fmt;
use std::sync::Arc;

use log::info;

use dr_core::{Distance, NodeId, RouteConfig, RouteRng};
use dr_network::RoadGraph;

use crate::path::format_path;
use crate::rank::rank_by_distance;
use crate::router::{DijkstraRouter, Router, ShortestPaths};
use crate::summary::RouteSummary;
use crate::RouteResult;

// ── DeliveryPlan ──────────────────────────────────────────────────────────────

/// One row of a delivery plan.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanEntry {
    pub node:     NodeId,
    pub distance: Distance,
    /// Depot-to-node path; `None` for unreachable nodes.
    pub path:     Option<Vec<NodeId>>,
}

impl PlanEntry {
    /// `0 -> 1 -> 2`, or `-` when unreachable.
    pub fn path_string(&self) -> String {
        match &self.path {
            Some(path) => format_path(path),
            None => "-".to_owned(),
        }
    }
}

/// Ranked routes from the depot to every intersection.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeliveryPlan {
    source:  NodeId,
    entries: Vec<PlanEntry>,
    summary: RouteSummary,
}

impl DeliveryPlan {
    /// Route from `config.depot` with `router` and assemble the plan.
    ///
    /// # Errors
    ///
    /// [`RouteError::Config`](crate::RouteError::Config) for an invalid
    /// config, [`RouteError::InvalidSource`](crate::RouteError::InvalidSource)
    /// if the depot is not in `graph`.
    pub fn compute<R: Router + ?Sized>(
        router: &R,
        graph: &RoadGraph,
        config: &RouteConfig,
        rng: &mut RouteRng,
    ) -> RouteResult<Self> {
        config.validate()?;
        let paths = router.shortest_paths(graph, config.depot)?;
        Self::from_paths(&paths, config.cost_per_unit, rng)
    }

    /// Rank an existing routing result and attach paths and totals.
    pub fn from_paths(
        paths: &ShortestPaths,
        cost_per_unit: f64,
        rng: &mut RouteRng,
    ) -> RouteResult<Self> {
        let entries = rank_by_distance(paths.distances(), rng)
            .into_iter()
            .map(|ranked| -> RouteResult<PlanEntry> {
                let path = if ranked.distance.is_reachable() {
                    Some(paths.path_to(ranked.node)?)
                } else {
                    None
                };
                Ok(PlanEntry { node: ranked.node, distance: ranked.distance, path })
            })
            .collect::<RouteResult<Vec<_>>>()?;

        Ok(Self {
            source: paths.source(),
            entries,
            summary: RouteSummary::with_cost_rate(paths.distances(), cost_per_unit),
        })
    }

    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Rows in ascending distance order, unreachable nodes last.
    pub fn entries(&self) -> &[PlanEntry] {
        &self.entries
    }

    pub fn summary(&self) -> &RouteSummary {
        &self.summary
    }

    /// Row for `node`, wherever it ranks.
    pub fn entry(&self, node: NodeId) -> Option<&PlanEntry> {
        self.entries.iter().find(|e| e.node == node)
    }
}

impl fmt::Display for DeliveryPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Optimized Delivery Routes from Intersection {}:", self.source)?;
        writeln!(f, "{:<14} {:<12} {}", "Intersection", "Distance", "Path")?;
        writeln!(f, "{}", "-".repeat(40))?;
        for entry in &self.entries {
            writeln!(
                f,
                "{:<14} {:<12} {}",
                entry.node.to_string(),
                entry.distance.to_string(),
                entry.path_string()
            )?;
        }
        writeln!(f)?;
        write!(f, "{}", self.summary)
    }
}

// ── DeliverySession ───────────────────────────────────────────────────────────

/// The current graph snapshot, settings, and RNG of one planning session.
///
/// The graph is held behind an `Arc`: [`graph`](Self::graph) hands out
/// snapshots that stay valid after [`replace_graph`](Self::replace_graph)
/// swaps in a re-imported network.
pub struct DeliverySession<R: Router = DijkstraRouter> {
    graph:  Arc<RoadGraph>,
    config: RouteConfig,
    rng:    RouteRng,
    router: R,
}

impl DeliverySession<DijkstraRouter> {
    /// Start a session with the default Dijkstra router.
    pub fn new(graph: impl Into<Arc<RoadGraph>>, config: RouteConfig) -> RouteResult<Self> {
        Self::with_router(graph, config, DijkstraRouter)
    }
}

impl<R: Router> DeliverySession<R> {
    /// # Errors
    ///
    /// [`RouteError::Config`](crate::RouteError::Config) if `config` is
    /// invalid.
    pub fn with_router(
        graph: impl Into<Arc<RoadGraph>>,
        config: RouteConfig,
        router: R,
    ) -> RouteResult<Self> {
        config.validate()?;
        let rng = RouteRng::new(config.seed);
        Ok(Self { graph: graph.into(), config, rng, router })
    }

    /// Shared snapshot of the current graph.
    pub fn graph(&self) -> Arc<RoadGraph> {
        Arc::clone(&self.graph)
    }

    pub fn config(&self) -> &RouteConfig {
        &self.config
    }

    /// Swap in a new graph (reset or re-import).  Snapshots handed out
    /// earlier keep the old graph alive until dropped.
    pub fn replace_graph(&mut self, graph: impl Into<Arc<RoadGraph>>) {
        self.graph = graph.into();
        info!("session graph replaced: {} intersections", self.graph.node_count());
    }

    /// Distance and predecessor tables from the depot.
    pub fn shortest_paths(&self) -> RouteResult<ShortestPaths> {
        self.router.shortest_paths(&self.graph, self.config.depot)
    }

    /// Route from the depot and build the ranked plan.
    pub fn plan(&mut self) -> RouteResult<DeliveryPlan> {
        let plan = DeliveryPlan::compute(&self.router, &self.graph, &self.config, &mut self.rng)?;
        let s = plan.summary();
        info!(
            "planned from depot {}: {}/{} reachable, total distance {:.2}",
            plan.source(),
            s.reachable_count,
            s.node_count,
            s.total_distance
        );
        Ok(plan)
    }
}
