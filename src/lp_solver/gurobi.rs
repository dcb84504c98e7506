use std::collections::HashMap;

use ::gurobi::{ConstrSense, Env, LinExpr, Model, ModelSense, Status, VarType, attr};

use crate::lp_solver::*;

fn expression_to_linexpr<Brand>(
    expression: &LinearExpression<Brand>,
    var_map: &HashMap<VariableId<Brand>, ::gurobi::Var>,
) -> Result<LinExpr> {
    let mut expr = LinExpr::new();
    for term in &expression.terms {
        if let Some(var) = var_map.get(&term.variable) {
            expr = expr.add_term(term.coefficient, var.clone());
        } else {
            return Err(anyhow::anyhow!(
                "Variable {:?} not found in model",
                term.variable
            ));
        }
    }
    Ok(expr.add_constant(expression.constant))
}

/// Solve an LP model using Gurobi
///
/// Range constraints are lowered to pairs of one-sided Gurobi constraints
/// (a single equality when the bounds coincide).
pub fn solve_gurobi<Brand>(lp: &LPModel<Brand>) -> Result<LPSolution<Brand>> {
    let env = Env::new("")?;
    let mut model = Model::new("kiln", &env)?;

    // Add variables
    let mut var_map = HashMap::new();
    for (idx, var_info) in lp.variables.iter().enumerate() {
        let vtype = match var_info.var_type {
            VariableType::Continuous => VarType::Continuous,
            VariableType::Integer => VarType::Integer,
            VariableType::Binary => VarType::Binary,
        };

        let var = model.add_var(
            "",
            vtype,
            0.0, // objective coefficient
            var_info.lower_bound,
            var_info.upper_bound,
            &[], // coefficients for existing constraints
            &[], // constraint indices
        )?;

        let var_id = VariableId {
            id: idx,
            _brand: std::marker::PhantomData,
        };
        var_map.insert(var_id, var);
    }

    // Add constraints
    for constraint in &lp.constraints {
        if constraint.lower == constraint.upper {
            let expr = expression_to_linexpr(&constraint.expression, &var_map)?;
            model.add_constr("", expr, ConstrSense::Equal, constraint.lower)?;
        } else {
            if constraint.upper.is_finite() {
                let expr = expression_to_linexpr(&constraint.expression, &var_map)?;
                model.add_constr("", expr, ConstrSense::Less, constraint.upper)?;
            }
            if constraint.lower.is_finite() {
                let expr = expression_to_linexpr(&constraint.expression, &var_map)?;
                model.add_constr("", expr, ConstrSense::Greater, constraint.lower)?;
            }
        }
    }

    // Update the model before setting objective
    model.update()?;

    // Set objective
    if let Some(obj_info) = &lp.objective {
        let expr = expression_to_linexpr(&obj_info.expression, &var_map)?;

        let sense = match obj_info.sense {
            OptimisationSense::Minimise => ModelSense::Minimize,
            OptimisationSense::Maximise => ModelSense::Maximize,
        };

        model.set_objective(expr, sense)?;
    }

    // Optimize
    model.optimize()?;

    // Get status
    let status = model.status()?;
    let optimisation_status = match status {
        Status::Optimal | Status::SubOptimal => OptimisationStatus::Optimal,
        Status::Infeasible => OptimisationStatus::Infeasible,
        Status::Unbounded => OptimisationStatus::Unbounded,
        _ => OptimisationStatus::Other("Unknown status"),
    };

    // Extract variable values and objective value only if model is feasible
    let num_vars = lp.variables.len();
    let mut variable_values = vec![0.0; num_vars];
    let objective_value = match optimisation_status {
        OptimisationStatus::Optimal => {
            for (var_id, var) in &var_map {
                let value = var.get(&model, attr::X)?;
                variable_values[var_id.id] = value;
            }

            model.get(attr::ObjVal)?
        }
        _ => {
            // For infeasible, unbounded, or other statuses, return default values
            0.0
        }
    };

    Ok(LPSolution {
        status: optimisation_status,
        objective_value,
        variable_values,
        _brand: std::marker::PhantomData,
    })
}
