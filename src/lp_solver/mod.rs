//! Linear Programming (LP) solver abstraction layer
//!
//! This module provides a trait-free, data-driven abstraction over MIP solvers
//! so the planning code stays independent of concrete backends like Gurobi and
//! coin_cbc.
//!
//! An [`LPModel`] is a solver session: variables, range constraints and an
//! optional objective. Unlike a one-shot builder, the model can be solved
//! repeatedly — constraint bounds may be tightened between solves with
//! [`LPModel::set_constraint_bounds`], which is how the feasibility sweep in
//! [`crate::workshop`] pins its decision variables to candidate values. Every
//! call to [`LPModel::solve_with`] translates the whole model into the backend
//! afresh and runs a full solve.
//!
//! # Type Safety with Branded Types
//!
//! `VariableId` and the expression types carry a `Brand` type parameter so
//! that variables from one model cannot be used with another model. The brand
//! is a zero-sized phantom type with no runtime cost; use the `lp_model!()`
//! macro to create a model with a guaranteed-unique brand:
//!
//! ```rust
//! use kiln::lp_model;
//! use kiln::lp_solver::VariableType;
//!
//! let mut model = lp_model!();
//! let x = model.add_variable(VariableType::Integer, 0.0, 10.0);
//! let y = model.add_variable(VariableType::Integer, 0.0, 10.0);
//! let _expr = 3.0 * x + 9.0 * y;
//! ```
//!
//! # Constraints
//!
//! Constraints are ranges `lower <= expression <= upper`; one-sided forms are
//! expressed with an infinite bound. The `constraint!` macro covers the
//! comparison forms, [`Constraint::range`] the two-sided one:
//!
//! ```rust
//! use kiln::{constraint, lp_model};
//! use kiln::lp_solver::{Constraint, VariableType};
//!
//! let mut model = lp_model!();
//! let x = model.add_variable(VariableType::Integer, 0.0, 10.0);
//! let y = model.add_variable(VariableType::Integer, 0.0, 10.0);
//!
//! model.add_constraint(constraint!((x + 4.0 * y) <= 20.0));
//! let pin = model.add_constraint(Constraint::range(x, 0.0, 10.0));
//! model.set_constraint_bounds(pin, 3.0, 3.0);
//! ```
//!
//! # Solver Selection
//!
//! The backend is selected via the `KILN_LP_SOLVER` environment variable:
//! - `"gurobi"` — use Gurobi (requires the `gurobi` feature)
//! - `"coin_cbc"` or `"cbc"` — use COIN-OR CBC (requires the `coin_cbc` feature)
//!
//! If unset, the solver defaults to Gurobi if available, otherwise CBC.
//! Selection happens in [`SolverBackend::from_env_or_default`], so a
//! misconfigured backend fails before any model is built.

pub use anyhow::Result;
use std::env;
use std::marker::PhantomData;

/// Variable types supported by LP solvers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
pub enum VariableType {
    /// Continuous variable (can take any real value)
    Continuous,
    /// Integer variable (can only take integer values)
    Integer,
    /// Binary variable (can only take values 0 or 1)
    Binary,
}

/// Optimisation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptimisationSense {
    /// Minimise the objective function
    Minimise,
    /// Maximise the objective function
    Maximise,
}

/// Status of the optimisation process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
pub enum OptimisationStatus {
    /// Optimal solution found
    Optimal,
    /// Feasible solution found, but not necessarily optimal
    Feasible,
    /// Problem is infeasible (no solution exists)
    Infeasible,
    /// Problem is unbounded
    Unbounded,
    /// Other status (solver-specific)
    Other(&'static str),
}

/// Available LP solver backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverBackend {
    #[cfg(feature = "gurobi")]
    /// Gurobi commercial solver
    Gurobi,
    #[cfg(feature = "coin_cbc")]
    /// Coin CBC open-source solver
    CoinCbc,
}

impl SolverBackend {
    /// Get the solver backend from the `KILN_LP_SOLVER` environment variable,
    /// or fall back to whichever compiled-in backend is preferred.
    ///
    /// Fails when the variable names an unknown solver or one whose feature is
    /// not enabled, and when no backend feature is compiled in at all.
    pub fn from_env_or_default() -> Result<Self> {
        if let Ok(solver_name) = env::var("KILN_LP_SOLVER") {
            match solver_name.to_lowercase().as_str() {
                "gurobi" => {
                    #[cfg(feature = "gurobi")]
                    return Ok(SolverBackend::Gurobi);
                    #[cfg(not(feature = "gurobi"))]
                    return Err(anyhow::anyhow!(
                        "Gurobi solver requested via KILN_LP_SOLVER but gurobi feature not enabled"
                    ));
                }
                "coin_cbc" | "coin-cbc" | "cbc" => {
                    #[cfg(feature = "coin_cbc")]
                    return Ok(SolverBackend::CoinCbc);
                    #[cfg(not(feature = "coin_cbc"))]
                    return Err(anyhow::anyhow!(
                        "Coin CBC solver requested via KILN_LP_SOLVER but coin_cbc feature not enabled"
                    ));
                }
                _ => {
                    return Err(anyhow::anyhow!(
                        "Invalid solver '{}' in KILN_LP_SOLVER. Valid options: gurobi, coin_cbc",
                        solver_name
                    ));
                }
            }
        }

        // Fallback logic: prefer gurobi if available, then coin_cbc
        #[cfg(feature = "gurobi")]
        return Ok(SolverBackend::Gurobi);

        #[allow(unreachable_code)]
        #[cfg(feature = "coin_cbc")]
        return Ok(SolverBackend::CoinCbc);

        #[cfg(not(any(feature = "gurobi", feature = "coin_cbc")))]
        Err(anyhow::anyhow!(
            "No LP solver backend available. Please enable a solver feature (e.g., 'gurobi' or 'coin_cbc')"
        ))
    }
}

/// A linear expression term: coefficient * variable
#[derive(Debug, Clone)]
pub struct LinearTerm<Brand> {
    pub coefficient: f64,
    pub variable: VariableId<Brand>,
}

/// A linear expression: sum of terms plus constant
#[derive(Debug, Clone)]
pub struct LinearExpression<Brand> {
    pub terms: Vec<LinearTerm<Brand>>,
    pub constant: f64,
}

impl<Brand> LinearExpression<Brand> {
    /// Create a new linear expression with a constant term
    pub fn new(constant: f64) -> Self {
        Self {
            terms: Vec::new(),
            constant,
        }
    }

    /// Add a term to the expression
    pub fn add_term(&mut self, coefficient: f64, variable: VariableId<Brand>) {
        self.terms.push(LinearTerm {
            coefficient,
            variable,
        });
    }

    /// Create a linear expression from a single variable
    pub fn from_variable(variable: VariableId<Brand>) -> Self {
        Self {
            terms: vec![LinearTerm {
                coefficient: 1.0,
                variable,
            }],
            constant: 0.0,
        }
    }
}

impl<Brand> From<VariableId<Brand>> for LinearExpression<Brand> {
    fn from(variable: VariableId<Brand>) -> Self {
        Self::from_variable(variable)
    }
}

/// Unique identifier for a variable in the LP model
///
/// The `Brand` type parameter ensures that variables can only be used with the
/// model that created them. This is enforced at compile time.
pub struct VariableId<Brand> {
    pub(crate) id: usize,
    pub(crate) _brand: PhantomData<fn() -> Brand>,
}

// Manual trait implementations that don't require Brand to implement anything
impl<Brand> std::fmt::Debug for VariableId<Brand> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VariableId").field("id", &self.id).finish()
    }
}

impl<Brand> Clone for VariableId<Brand> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Brand> Copy for VariableId<Brand> {}

impl<Brand> PartialEq for VariableId<Brand> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<Brand> Eq for VariableId<Brand> {}

impl<Brand> std::hash::Hash for VariableId<Brand> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Unique identifier for a constraint in the LP model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConstraintId(pub(crate) usize);

/// A linear range constraint: `lower <= expression <= upper`
///
/// One-sided constraints use an infinite bound on the open side; equalities
/// set both bounds to the same value. Bounds stay mutable after the constraint
/// is added to a model (see [`LPModel::set_constraint_bounds`]), which is what
/// lets a single model be re-solved against a sequence of pinned candidates.
#[derive(Debug, Clone)]
pub struct Constraint<Brand> {
    pub(crate) expression: LinearExpression<Brand>,
    pub(crate) lower: f64,
    pub(crate) upper: f64,
}

impl<Brand> Constraint<Brand> {
    /// Create a two-sided range constraint: lower <= expression <= upper
    pub fn range(expression: impl Into<LinearExpression<Brand>>, lower: f64, upper: f64) -> Self {
        Self {
            expression: expression.into(),
            lower,
            upper,
        }
    }

    /// Create an upper-bounded constraint: expression <= rhs
    pub fn le(expression: impl Into<LinearExpression<Brand>>, rhs: f64) -> Self {
        Self::range(expression, f64::NEG_INFINITY, rhs)
    }

    /// Create a lower-bounded constraint: expression >= rhs
    pub fn ge(expression: impl Into<LinearExpression<Brand>>, rhs: f64) -> Self {
        Self::range(expression, rhs, f64::INFINITY)
    }

    /// Create an equality constraint: expression == rhs
    pub fn eq(expression: impl Into<LinearExpression<Brand>>, rhs: f64) -> Self {
        Self::range(expression, rhs, rhs)
    }
}

/// Variable information stored in the model
#[derive(Debug, Clone)]
pub(crate) struct VariableInfo {
    pub(crate) var_type: VariableType,
    pub(crate) lower_bound: f64,
    pub(crate) upper_bound: f64,
}

/// Objective function information
#[derive(Debug, Clone)]
pub(crate) struct ObjectiveInfo<Brand> {
    pub(crate) expression: LinearExpression<Brand>,
    pub(crate) sense: OptimisationSense,
}

/// Result of solving an LP model
#[derive(Debug, Clone)]
pub struct LPSolution<Brand> {
    pub status: OptimisationStatus,
    pub objective_value: f64,
    pub(crate) variable_values: Vec<f64>,
    pub(crate) _brand: PhantomData<fn() -> Brand>,
}

impl<Brand> LPSolution<Brand> {
    /// Get the value of a variable from the solution
    pub fn get_value(&self, var_id: VariableId<Brand>) -> Option<f64> {
        self.variable_values.get(var_id.id).copied()
    }
}

/// A solver session: variables, range constraints and an optional objective
///
/// The `Brand` type parameter ensures type safety — variables from one model
/// cannot be accidentally used with another model. Use the `lp_model!` macro
/// to create a model with a unique brand.
///
/// The model is solved by value translation: [`solve_with`](Self::solve_with)
/// borrows the model, builds the backend's native problem from scratch and
/// runs it, so the same model can be solved any number of times with
/// different constraint bounds in between.
pub struct LPModel<Brand> {
    pub(crate) variables: Vec<VariableInfo>,
    pub(crate) constraints: Vec<Constraint<Brand>>,
    pub(crate) objective: Option<ObjectiveInfo<Brand>>,
    _brand: PhantomData<fn() -> Brand>,
}

impl<Brand> LPModel<Brand> {
    /// Create a new, empty model
    pub fn new() -> Self {
        Self {
            variables: Vec::new(),
            constraints: Vec::new(),
            objective: None,
            _brand: PhantomData,
        }
    }

    /// Add a bounded variable to the model
    pub fn add_variable(
        &mut self,
        var_type: VariableType,
        lower_bound: f64,
        upper_bound: f64,
    ) -> VariableId<Brand> {
        let var_id = VariableId {
            id: self.variables.len(),
            _brand: PhantomData,
        };
        self.variables.push(VariableInfo {
            var_type,
            lower_bound,
            upper_bound,
        });
        var_id
    }

    /// Add a constraint to the model
    pub fn add_constraint(&mut self, constraint: Constraint<Brand>) -> ConstraintId {
        let constr_id = ConstraintId(self.constraints.len());
        self.constraints.push(constraint);
        constr_id
    }

    /// Replace the bounds of an existing constraint
    ///
    /// Setting `lower == upper` pins the constrained expression to that exact
    /// value on the next solve.
    pub fn set_constraint_bounds(&mut self, constraint: ConstraintId, lower: f64, upper: f64) {
        let c = &mut self.constraints[constraint.0];
        c.lower = lower;
        c.upper = upper;
    }

    /// Replace the domain bounds of an existing variable
    pub fn set_variable_bounds(&mut self, variable: VariableId<Brand>, lower: f64, upper: f64) {
        let v = &mut self.variables[variable.id];
        v.lower_bound = lower;
        v.upper_bound = upper;
    }

    /// Set the objective function
    pub fn set_objective(
        &mut self,
        expression: impl Into<LinearExpression<Brand>>,
        sense: OptimisationSense,
    ) {
        self.objective = Some(ObjectiveInfo {
            expression: expression.into(),
            sense,
        });
    }

    /// Solve the model with the backend selected from the environment
    pub fn solve(&self) -> Result<LPSolution<Brand>> {
        let backend = SolverBackend::from_env_or_default()?;
        self.solve_with(backend)
    }

    /// Solve the model with an explicit backend
    ///
    /// A model without an objective is solved as a pure feasibility problem;
    /// a feasible model still reports [`OptimisationStatus::Optimal`].
    pub fn solve_with(&self, backend: SolverBackend) -> Result<LPSolution<Brand>> {
        match backend {
            #[cfg(feature = "gurobi")]
            SolverBackend::Gurobi => crate::lp_solver::gurobi::solve_gurobi(self),

            #[cfg(feature = "coin_cbc")]
            SolverBackend::CoinCbc => crate::lp_solver::coin_cbc::solve_coin_cbc(self),
        }
    }
}

impl<Brand> Default for LPModel<Brand> {
    fn default() -> Self {
        Self::new()
    }
}

// Macros for convenient syntax
pub mod macros;

// Operator overloading for linear expressions
pub mod ops;

// Solver output suppression
pub mod output_suppression;

#[cfg(feature = "gurobi")]
pub mod gurobi;

#[cfg(feature = "coin_cbc")]
pub mod coin_cbc;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{constraint, lp_model};

    #[test]
    fn test_constraint_macro() {
        let mut model = lp_model!();
        let x = model.add_variable(VariableType::Integer, 0.0, 10.0);
        let y = model.add_variable(VariableType::Integer, 0.0, 10.0);

        let c = constraint!((x + y) <= 10.0);
        assert_eq!(c.lower, f64::NEG_INFINITY);
        assert_eq!(c.upper, 10.0);

        let c = constraint!((2.0 * x) >= 5.0);
        assert_eq!(c.lower, 5.0);
        assert_eq!(c.upper, f64::INFINITY);

        let c = constraint!((x - y) == 0.0);
        assert_eq!(c.lower, 0.0);
        assert_eq!(c.upper, 0.0);
    }

    #[test]
    fn test_range_constraint() {
        let mut model = lp_model!();
        let x = model.add_variable(VariableType::Integer, 0.0, 10.0);

        let c = Constraint::range(x, 0.0, 7.0);
        assert_eq!(c.lower, 0.0);
        assert_eq!(c.upper, 7.0);
        assert_eq!(c.expression.terms.len(), 1);
    }

    #[test]
    fn test_set_constraint_bounds_pins_value() {
        let mut model = lp_model!();
        let x = model.add_variable(VariableType::Integer, 0.0, 10.0);

        let pin = model.add_constraint(Constraint::range(x, 0.0, 10.0));
        model.set_constraint_bounds(pin, 3.0, 3.0);

        assert_eq!(model.constraints[pin.0].lower, 3.0);
        assert_eq!(model.constraints[pin.0].upper, 3.0);
    }

    #[test]
    fn test_set_variable_bounds() {
        let mut model = lp_model!();
        let x = model.add_variable(VariableType::Integer, 0.0, 10.0);

        model.set_variable_bounds(x, 2.0, 4.0);

        assert_eq!(model.variables[x.id].lower_bound, 2.0);
        assert_eq!(model.variables[x.id].upper_bound, 4.0);
    }

    #[test]
    fn test_expression_building() {
        let mut model = lp_model!();
        let x = model.add_variable(VariableType::Integer, 0.0, 10.0);
        let y = model.add_variable(VariableType::Integer, 0.0, 10.0);

        let expr = x + 4.0 * y;
        assert_eq!(expr.terms.len(), 2);
        assert_eq!(expr.terms[0].coefficient, 1.0);
        assert_eq!(expr.terms[1].coefficient, 4.0);
        assert_eq!(expr.constant, 0.0);
    }
}
