//! Vase production planning for the workshop.
//!
//! The workshop makes two products, small and large vases, from two finite
//! resources, clay and glaze. This module builds the resource-constrained
//! integer model over the [`crate::lp_solver`] layer and exposes the two
//! planning operations:
//!
//! - [`optimal_target`]: the single profit-maximising integer plan
//! - [`feasible_targets`]: every resource-feasible integer plan, in a fixed
//!   sweep order, as a diagnostic path
//!
//! Per-unit resource consumption and profit are fixed business facts, kept as
//! named constants rather than inline literals.

use anyhow::Result;
use itertools::Itertools;

use crate::AppError;
use crate::lp_solver::*;
use crate::{constraint, lp_model};

/// Clay consumed by one small vase.
pub const SMALL_VASE_CLAY: f64 = 1.0;
/// Glaze consumed by one small vase.
pub const SMALL_VASE_GLAZE: f64 = 1.0;
/// Clay consumed by one large vase.
pub const LARGE_VASE_CLAY: f64 = 4.0;
/// Glaze consumed by one large vase.
pub const LARGE_VASE_GLAZE: f64 = 2.0;

/// Profit from one small vase.
pub const SMALL_VASE_PROFIT: f64 = 3.0;
/// Profit from one large vase.
pub const LARGE_VASE_PROFIT: f64 = 9.0;

/// Available raw resources for one planning run.
///
/// Supplies must be non-negative; callers are responsible for rejecting
/// negative values before planning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResourceSupply {
    pub clay: f64,
    pub glaze: f64,
}

/// A production plan: how many vases of each size to make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProductionTarget {
    pub small: u64,
    pub large: u64,
}

impl ProductionTarget {
    /// Total profit of this plan under the fixed per-unit profits.
    pub fn profit(&self) -> f64 {
        SMALL_VASE_PROFIT * self.small as f64 + LARGE_VASE_PROFIT * self.large as f64
    }
}

/// Natural per-product upper bounds: how many of each vase the workshop could
/// make if it spent an entire resource on that product alone.
///
/// The fractional quotients are floored, so the bounds are the largest counts
/// whose single-product resource use still fits the supply. Variable domains
/// and the enumeration sweep both take their limits from here; computing the
/// bound in one place keeps the two feasibility views consistent.
fn natural_bounds(supply: &ResourceSupply) -> (u64, u64) {
    let max_small = (supply.clay / SMALL_VASE_CLAY)
        .min(supply.glaze / SMALL_VASE_GLAZE)
        .floor() as u64;
    let max_large = (supply.clay / LARGE_VASE_CLAY)
        .min(supply.glaze / LARGE_VASE_GLAZE)
        .floor() as u64;
    (max_small, max_large)
}

/// Decision variables of one workshop planning model.
struct VaseModel<Brand> {
    small: VariableId<Brand>,
    large: VariableId<Brand>,
    max_small: u64,
    max_large: u64,
}

/// Build the resource model on `model`: two bounded integer decision
/// variables and the clay and glaze consumption constraints.
///
/// A zero supply collapses the corresponding variable's domain to `{0}`,
/// which is a valid (if small) model, not an error.
fn build_vase_model<Brand>(
    model: &mut LPModel<Brand>,
    supply: &ResourceSupply,
) -> VaseModel<Brand> {
    let (max_small, max_large) = natural_bounds(supply);

    let small = model.add_variable(VariableType::Integer, 0.0, max_small as f64);
    let large = model.add_variable(VariableType::Integer, 0.0, max_large as f64);

    model.add_constraint(constraint!(
        (SMALL_VASE_CLAY * small + LARGE_VASE_CLAY * large) <= supply.clay
    ));
    model.add_constraint(constraint!(
        (SMALL_VASE_GLAZE * small + LARGE_VASE_GLAZE * large) <= supply.glaze
    ));

    VaseModel {
        small,
        large,
        max_small,
        max_large,
    }
}

/// Compute the profit-maximising production plan for the given supplies.
///
/// Builds the resource model, maximises `3·small + 9·large` and solves once.
/// The solver may report near-integral floating values for the integer
/// variables, so the read-back rounds to the nearest integer.
///
/// # Errors
///
/// Fails with [`AppError::NoOptimum`] when the solve does not reach an
/// optimal status, and propagates backend configuration errors from
/// [`SolverBackend::from_env_or_default`] before any model is built.
pub fn optimal_target(supply: &ResourceSupply) -> Result<ProductionTarget> {
    let backend = SolverBackend::from_env_or_default()?;

    let mut model = lp_model!();
    let vases = build_vase_model(&mut model, supply);

    model.set_objective(
        SMALL_VASE_PROFIT * vases.small + LARGE_VASE_PROFIT * vases.large,
        OptimisationSense::Maximise,
    );

    let solution = model.solve_with(backend)?;

    match solution.status {
        OptimisationStatus::Optimal => Ok(ProductionTarget {
            small: solution.get_value(vases.small).unwrap_or(0.0).round() as u64,
            large: solution.get_value(vases.large).unwrap_or(0.0).round() as u64,
        }),
        _ => Err(AppError::NoOptimum.into()),
    }
}

/// Enumerate every resource-feasible production plan for the given supplies.
///
/// Builds the resource model plus one pin constraint per decision variable,
/// then sweeps every candidate pair within the natural bounds — `small` as
/// the outer counter, `large` as the inner. Each iteration pins both
/// variables to the candidate values and re-solves; candidates whose solve
/// comes back optimal are collected in sweep order. An infeasible candidate
/// is a normal outcome and is simply skipped; backend failures abort the
/// whole enumeration.
///
/// The result always contains at least `{0, 0}` for non-negative supplies.
///
/// # Performance
///
/// This runs one full solver invocation per candidate pair, i.e.
/// O(maxSmall × maxLarge) solves. It is a diagnostic path for small supply
/// values and unsuitable for production-scale quantities. The repeated-solve
/// mechanism is kept deliberately: it extends unchanged to any extra
/// constraints added to the resource model, where a closed-form feasibility
/// check would not.
pub fn feasible_targets(supply: &ResourceSupply) -> Result<Vec<ProductionTarget>> {
    let backend = SolverBackend::from_env_or_default()?;

    let mut model = lp_model!();
    let vases = build_vase_model(&mut model, supply);

    let pin_small = model.add_constraint(Constraint::range(
        vases.small,
        0.0,
        vases.max_small as f64,
    ));
    let pin_large = model.add_constraint(Constraint::range(
        vases.large,
        0.0,
        vases.max_large as f64,
    ));

    let mut targets = Vec::new();
    for (n_small, n_large) in (0..=vases.max_small).cartesian_product(0..=vases.max_large) {
        model.set_constraint_bounds(pin_small, n_small as f64, n_small as f64);
        model.set_constraint_bounds(pin_large, n_large as f64, n_large as f64);

        let solution = model.solve_with(backend)?;
        if solution.status == OptimisationStatus::Optimal {
            targets.push(ProductionTarget {
                small: n_small,
                large: n_large,
            });
        }
    }

    Ok(targets)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fits(target: &ProductionTarget, supply: &ResourceSupply) -> bool {
        let clay_used =
            SMALL_VASE_CLAY * target.small as f64 + LARGE_VASE_CLAY * target.large as f64;
        let glaze_used =
            SMALL_VASE_GLAZE * target.small as f64 + LARGE_VASE_GLAZE * target.large as f64;
        clay_used <= supply.clay && glaze_used <= supply.glaze
    }

    #[test]
    fn test_natural_bounds_floor_fractional_quotients() {
        let supply = ResourceSupply {
            clay: 5.5,
            glaze: 3.9,
        };
        let (max_small, max_large) = natural_bounds(&supply);
        assert_eq!(max_small, 3); // min(5.5, 3.9) floored
        assert_eq!(max_large, 1); // min(5.5/4, 3.9/2) floored
    }

    #[test]
    fn test_optimal_target_prefers_large_vase() {
        let supply = ResourceSupply {
            clay: 4.0,
            glaze: 2.0,
        };
        let target = optimal_target(&supply).unwrap();
        // One large vase (profit 9) beats two small ones (profit 6).
        assert_eq!(target, ProductionTarget { small: 0, large: 1 });
    }

    #[test]
    fn test_feasible_targets_sweep_order() {
        let supply = ResourceSupply {
            clay: 4.0,
            glaze: 2.0,
        };
        let targets = feasible_targets(&supply).unwrap();
        // {1,1} and {2,1} are clay-infeasible and must be skipped.
        assert_eq!(
            targets,
            vec![
                ProductionTarget { small: 0, large: 0 },
                ProductionTarget { small: 0, large: 1 },
                ProductionTarget { small: 1, large: 0 },
                ProductionTarget { small: 2, large: 0 },
            ]
        );
    }

    #[test]
    fn test_zero_supply_collapses_to_empty_plan() {
        let supply = ResourceSupply {
            clay: 0.0,
            glaze: 0.0,
        };
        assert_eq!(
            optimal_target(&supply).unwrap(),
            ProductionTarget { small: 0, large: 0 }
        );
        assert_eq!(
            feasible_targets(&supply).unwrap(),
            vec![ProductionTarget { small: 0, large: 0 }]
        );
    }

    #[test]
    fn test_every_feasible_target_fits_the_supply() {
        let supply = ResourceSupply {
            clay: 10.0,
            glaze: 7.0,
        };
        let targets = feasible_targets(&supply).unwrap();
        assert!(!targets.is_empty());
        for target in &targets {
            assert!(fits(target, &supply), "{:?} exceeds the supply", target);
        }
    }

    #[test]
    fn test_optimal_target_is_feasible_and_dominant() {
        let supply = ResourceSupply {
            clay: 10.0,
            glaze: 7.0,
        };
        let best = optimal_target(&supply).unwrap();
        let targets = feasible_targets(&supply).unwrap();

        assert!(targets.contains(&best));
        for target in &targets {
            assert!(target.profit() <= best.profit());
        }
    }

    #[test]
    fn test_planning_is_idempotent() {
        let supply = ResourceSupply {
            clay: 9.0,
            glaze: 5.0,
        };
        assert_eq!(
            optimal_target(&supply).unwrap(),
            optimal_target(&supply).unwrap()
        );
        assert_eq!(
            feasible_targets(&supply).unwrap(),
            feasible_targets(&supply).unwrap()
        );
    }

    #[test]
    fn test_profit_weights() {
        let target = ProductionTarget { small: 2, large: 1 };
        assert_eq!(target.profit(), 15.0);
    }
}
