//! Aggregate statistics over a distance table.

use std::fmt;

use dr_core::{DEFAULT_COST_PER_UNIT, Distance};

/// Totals over the reachable part of a routing result.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteSummary {
    /// Nodes in the routed graph, reachable or not.
    pub node_count:       usize,
    /// Nodes with a finite distance, the source included.
    pub reachable_count:  usize,
    /// Sum of finite distances (the source contributes 0).
    pub total_distance:   f64,
    /// `total_distance / reachable_count`, or 0 when nothing is reachable.
    pub average_distance: f64,
    /// `total_distance × cost_per_unit`.
    pub estimated_cost:   f64,
}

impl RouteSummary {
    pub fn with_cost_rate(distances: &[Distance], cost_per_unit: f64) -> Self {
        let (reachable_count, total_distance) = distances
            .iter()
            .filter_map(|d| d.value())
            .fold((0usize, 0.0f64), |(n, sum), d| (n + 1, sum + d));

        let average_distance = if reachable_count > 0 {
            total_distance / reachable_count as f64
        } else {
            0.0
        };

        Self {
            node_count: distances.len(),
            reachable_count,
            total_distance,
            average_distance,
            estimated_cost: total_distance * cost_per_unit,
        }
    }
}

/// Summary at the default cost rate of [`DEFAULT_COST_PER_UNIT`].
pub fn summarize(distances: &[Distance]) -> RouteSummary {
    RouteSummary::with_cost_rate(distances, DEFAULT_COST_PER_UNIT)
}

impl fmt::Display for RouteSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Total Reachable Intersections: {}/{}",
            self.reachable_count, self.node_count
        )?;
        writeln!(f, "Total Distance: {:.2}", self.total_distance)?;
        writeln!(f, "Average Distance: {:.2}", self.average_distance)?;
        write!(f, "Estimated Fuel Cost: ${:.2}", self.estimated_cost)
    }
}
