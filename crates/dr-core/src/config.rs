//! Routing configuration.

use crate::{CoreError, CoreResult, NodeId};

/// Fuel cost charged per unit of total route distance.
pub const DEFAULT_COST_PER_UNIT: f64 = 0.1;

/// Parameters of a delivery planning run.
///
/// Typically built by the front-end (or deserialized with the `serde`
/// feature) and handed to a `DeliverySession`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RouteConfig {
    /// Source node every route starts from.  Default: node 0.
    pub depot: NodeId,

    /// Multiplier turning total distance into an estimated cost.
    pub cost_per_unit: f64,

    /// Seed for the ranking RNG.  The same seed always yields the same tie
    /// order among equal-distance destinations.
    pub seed: u64,
}

impl RouteConfig {
    /// Reject settings that would produce meaningless statistics.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.cost_per_unit.is_finite() || self.cost_per_unit < 0.0 {
            return Err(CoreError::Config(format!(
                "cost_per_unit must be finite and non-negative, got {}",
                self.cost_per_unit
            )));
        }
        Ok(())
    }
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            depot: NodeId::DEPOT,
            cost_per_unit: DEFAULT_COST_PER_UNIT,
            seed: 0,
        }
    }
}
