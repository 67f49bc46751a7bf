//! Definition of the factor module
//!
//! A `Factor` represents a relationship between some set of `Variable`s: a
//! table assigning a real value to every joint assignment of its scope. The
//! table is stored flat, laid out by the mixed-radix encoding of the `index`
//! module, with the first variable of the scope varying fastest.

use index;
use util::{Result, PearlError};
use variable::{positions_of, Variable};

use indexmap::IndexSet;
use itertools::Itertools;
use ndarray::prelude as nd;

/// Alias f64 ndarray::Array1 as Table
pub type Table = nd::Array1<f64>;


#[derive(Clone, Debug)]
pub enum Factor {
    /// The empty, identity `Factor` with no scope. This type exists for dealing with arithmetic
    /// operations of `Factor`s
    Identity,

    /// A `Factor` over some scope of variables. Represented as a flat value
    /// table as described in Koller & Friedman, one cell per assignment.
    TableFactor {
        /// The scope of the `Factor`
        scope: Vec<Variable>,

        /// The values of the `Factor` table, one per assignment to the scope
        table: Table
    }
}


impl Factor {

    /// Get the identity factor
    pub fn identity() -> Self {
        Factor::Identity
    }


    /// Create a new `Factor`
    ///
    /// # Args
    /// * `scope`: the `Variable`s the factor is defined over, in table order
    /// * `table`: one value per assignment, first scope variable fastest
    ///
    /// # Errors
    /// * `PearlError::DuplicateVariable` if a variable appears twice in `scope`
    /// * `PearlError::ShapeMismatch` if the table length is not the product of
    ///   the scope cardinalities
    pub fn new(scope: Vec<Variable>, table: Table) -> Result<Self> {
        if scope.len() == 0 && table.len() == 0 {
            // return the identity factor if this is an empty factor
            return Ok(Factor::Identity);
        } else if scope.len() == 0 || table.len() == 0 {
            // if values or scope is nonempty, then return an error
            return Err(
                PearlError::General(
                    String::from("Invalid arguments. Scope and values must both be empty or nonempty")
                )
            );
        }

        if scope.iter().unique().count() != scope.len() {
            return Err(PearlError::DuplicateVariable);
        }

        let cards: Vec<usize> = scope.iter().map(|v| v.cardinality()).collect();
        if table.len() != index::table_size(&cards) {
            return Err(PearlError::ShapeMismatch);
        }

        Ok(Factor::TableFactor { scope, table })
    }


    /// Create a `Factor` with a zero-initialized table, ready to be populated
    /// one assignment at a time with `set_value`
    ///
    /// # Errors
    /// * `PearlError::InvalidScope` if `scope` is empty
    /// * `PearlError::DuplicateVariable` if a variable appears twice in `scope`
    pub fn zeros(scope: Vec<Variable>) -> Result<Self> {
        if scope.is_empty() {
            return Err(PearlError::InvalidScope);
        }

        let cards: Vec<usize> = scope.iter().map(|v| v.cardinality()).collect();
        Factor::new(scope, Table::zeros(index::table_size(&cards)))
    }


    /// Check if the `Factor` is the identity `Factor`
    pub fn is_identity(&self) -> bool {
        match self {
            &Factor::Identity => true,
            _ => false
        }
    }


    /// Retrieve the scope of the `Factor`.
    ///
    /// # Note
    /// This method returns a clone of the `Factor`'s scope. `Variable`s are
    /// lightweight and therefore this is an acceptable overhead
    pub fn scope(&self) -> Vec<Variable> {
        match self {
            &Factor::Identity => vec![],
            &Factor::TableFactor { ref scope, .. } => scope.clone()
        }
    }


    /// Retrieve the cardinalities of the `Factor`'s scope, in scope order
    pub fn cardinalities(&self) -> Vec<usize> {
        self.scope().iter().map(|v| v.cardinality()).collect()
    }


    /// Retrieve a clone of the `Factor`'s value table. The identity factor
    /// has an empty table.
    pub fn table(&self) -> Table {
        match self {
            &Factor::Identity => Table::zeros(0),
            &Factor::TableFactor { ref table, .. } => table.clone()
        }
    }


    /// Retrieve the value for a complete assignment over the scope of this `Factor`
    ///
    /// This operation is defined only on non-identity `Factor`s.
    ///
    /// # Args
    /// * `assignment`: one value per scope variable, in scope order
    ///
    /// # Returns
    /// the value of the assignment, or an error.
    ///
    /// # Errors
    /// * `PearlError::General` if the `Factor` is the identity
    /// * `PearlError::ShapeMismatch` if the assignment length does not match
    ///   the scope
    /// * `PearlError::InvalidAssignment` if an assignment value is outside its
    ///   variable's cardinality
    pub fn value(&self, assignment: &[usize]) -> Result<f64> {
        match self {
            &Factor::Identity => {
                Err(PearlError::General(String::from("The identity factor has no value")))
            },
            &Factor::TableFactor { ref scope, ref table } => {
                check_assignment(scope, assignment)?;
                Ok(table[index::assignment_to_index(assignment, &self.cardinalities())])
            }
        }
    }


    /// Set the value for a complete assignment over the scope of this `Factor`
    ///
    /// Writes only the targeted cell; every other entry of the table is left
    /// untouched. On a factor built with `zeros` this populates a sparse
    /// handful of assignments against a zero background.
    ///
    /// # Errors
    /// * `PearlError::General` if the `Factor` is the identity
    /// * `PearlError::ShapeMismatch` if the assignment length does not match
    ///   the scope
    /// * `PearlError::InvalidAssignment` if an assignment value is outside its
    ///   variable's cardinality
    pub fn set_value(&mut self, assignment: &[usize], value: f64) -> Result<()> {
        match self {
            &mut Factor::Identity => {
                Err(PearlError::General(String::from("The identity factor has no value")))
            },
            &mut Factor::TableFactor { ref scope, ref mut table } => {
                check_assignment(scope, assignment)?;

                let cards: Vec<usize> = scope.iter().map(|v| v.cardinality()).collect();
                table[index::assignment_to_index(assignment, &cards)] = value;
                Ok(())
            }
        }
    }


    /// The total mass of the `Factor` - the sum of its value table.
    ///
    /// The identity factor is the empty product and has mass 1.
    pub fn sum(&self) -> f64 {
        match self {
            &Factor::Identity => 1.0,
            &Factor::TableFactor { ref table, .. } => table.scalar_sum()
        }
    }


    /// Scale the `Factor` so its value table sums to 1.
    ///
    /// # Errors
    /// * `PearlError::DivideByZero` if the table sums to zero
    pub fn normalize(&self) -> Result<Self> {
        match self {
            &Factor::Identity => Ok(Factor::Identity),
            &Factor::TableFactor { ref scope, ref table } => {
                let z = table.scalar_sum();
                if z == 0. {
                    return Err(PearlError::DivideByZero);
                }

                Factor::new(scope.clone(), table.mapv(|v| v / z))
            }
        }
    }


    /// Product of this `Factor` and another `Factor`.
    ///
    /// Defined in Koller & Friedman Section 4.2.1. The result is a new
    /// `Factor` over the union of the two scopes whose value at every
    /// assignment is the product of the operand values at that assignment's
    /// projection onto each operand scope. The union keeps this factor's
    /// variables in order, followed by the other factor's previously unseen
    /// variables in its order, so the layout of the result is deterministic.
    ///
    /// # Args
    /// * `other`: the `Factor` to multiply with.
    ///
    /// # Returns
    /// A new `Factor` of scope union(self.scope(), other.scope())
    ///
    /// # Errors
    /// * `PearlError::DimensionalityMismatch`, if a variable shared by the two
    ///   scopes carries a different cardinality in each. Nothing is built in
    ///   that case.
    pub fn product(&self, other: &Self) -> Result<Self> {
        // Factor::Identity is the multiplicative identity
        let (a_scope, a_table) = match self {
            &Factor::Identity => return Ok(other.clone()),
            &Factor::TableFactor { ref scope, ref table } => (scope, table)
        };
        let (b_scope, b_table) = match other {
            &Factor::Identity => return Ok(self.clone()),
            &Factor::TableFactor { ref scope, ref table } => (scope, table)
        };

        // We are computing a new factor Psi(X, Y, Z) = phi1(X, Y) * phi2(Y, Z).
        // See Koller & Friedman Definition 4.2.
        // Every variable the scopes share must have a single cardinality.
        let a_vars: IndexSet<Variable> = a_scope.iter().cloned().collect();
        for v in b_scope.iter() {
            if let Some(shared) = a_vars.get(v) {
                if shared.cardinality() != v.cardinality() {
                    return Err(PearlError::DimensionalityMismatch);
                }
            }
        }

        // compute the set union(X, Y, Z)
        let scope: Vec<Variable> = a_scope.iter()
                                          .chain(b_scope.iter())
                                          .cloned()
                                          .unique()
                                          .collect();
        let cards: Vec<usize> = scope.iter().map(|v| v.cardinality()).collect();

        let a_cards: Vec<usize> = a_scope.iter().map(|v| v.cardinality()).collect();
        let b_cards: Vec<usize> = b_scope.iter().map(|v| v.cardinality()).collect();

        // where each operand's variables sit inside the union scope
        let map_a = positions_of(a_scope, &scope);
        let map_b = positions_of(b_scope, &scope);

        let mut table = Table::zeros(index::table_size(&cards));
        for (cell, cell_value) in table.iter_mut().enumerate() {
            // decode the output cell into an assignment over the union scope,
            // project it onto each operand scope, and re-encode each
            // projection into that operand's own table
            let assignment = index::index_to_assignment(cell, &cards);

            let a_assignment: Vec<usize> = map_a.iter().map(|&p| assignment[p]).collect();
            let b_assignment: Vec<usize> = map_b.iter().map(|&p| assignment[p]).collect();

            let a_value = a_table[index::assignment_to_index(&a_assignment, &a_cards)];
            let b_value = b_table[index::assignment_to_index(&b_assignment, &b_cards)];
            *cell_value = a_value * b_value;
        }

        Factor::new(scope, table)
    }


    /// `Factor` division. Calculates Psi(X, Y) = Phi1(X, Y) / Phi2(Y) where
    /// Phi1 = self and Phi2 = other.
    ///
    /// Defined in Koller & Friedman Section 10.3.1
    ///
    /// # Notes
    /// In the context of this operation, 0/0 is defined as 0. However, X/0,
    /// where X != 0, is still undefined.
    ///
    /// # Args
    /// * `other`: the denominator of the expression
    ///
    /// # Returns
    /// a new `Factor` over self's scope representing self / other
    ///
    /// # Errors
    /// * `PearlError::InvalidScope` if other.scope() is not a subset of self.scope()
    /// * `PearlError::DimensionalityMismatch` if a shared variable carries a
    ///   different cardinality in each scope
    /// * `PearlError::DivideByZero` if a divide by zero error is found
    pub fn divide(&self, other: &Self) -> Result<Self> {
        // Trivial cases
        let (a_scope, a_table) = match self {
            &Factor::Identity => {
                return match other {
                    &Factor::Identity => Ok(Factor::Identity),
                    _ => Err(PearlError::InvalidScope)
                };
            },
            &Factor::TableFactor { ref scope, ref table } => (scope, table)
        };
        let (b_scope, b_table) = match other {
            &Factor::Identity => return Ok(self.clone()),
            &Factor::TableFactor { ref scope, ref table } => (scope, table)
        };

        // the denominator scope must be contained in ours, and agree on
        // cardinalities where it is
        for v in b_scope.iter() {
            match a_scope.iter().find(|shared| *shared == v) {
                Some(shared) if shared.cardinality() != v.cardinality() => {
                    return Err(PearlError::DimensionalityMismatch);
                },
                Some(_) => (),
                None => return Err(PearlError::InvalidScope)
            }
        }

        let cards: Vec<usize> = a_scope.iter().map(|v| v.cardinality()).collect();
        let b_cards: Vec<usize> = b_scope.iter().map(|v| v.cardinality()).collect();
        let map_b = positions_of(b_scope, a_scope);

        let mut table = Table::zeros(a_table.len());
        for (cell, cell_value) in table.iter_mut().enumerate() {
            let assignment = index::index_to_assignment(cell, &cards);
            let b_assignment: Vec<usize> = map_b.iter().map(|&p| assignment[p]).collect();

            let numerator = a_table[cell];
            let denominator = b_table[index::assignment_to_index(&b_assignment, &b_cards)];

            if denominator == 0. {
                if numerator == 0. {
                    *cell_value = 0.;
                } else {
                    return Err(PearlError::DivideByZero);
                }
            } else {
                *cell_value = numerator / denominator;
            }
        }

        Factor::new(a_scope.clone(), table)
    }


    /// Reduce the `Factor` to the rows consistent with the given evidence
    ///
    /// Defined in Koller & Friedman Section 4.2.3
    ///
    /// # Args
    /// * `evidence`: observed (variable, value) pairs. Variables outside this
    ///   factor's scope do not constrain it and are ignored.
    ///
    /// # Returns
    /// A new `Factor` over the unobserved scope variables. Reducing every
    /// variable of the scope yields the identity factor.
    ///
    /// # Errors
    /// * `PearlError::InvalidAssignment` if an observed value is outside its
    ///   variable's cardinality
    pub fn reduce(&self, evidence: &[(Variable, usize)]) -> Result<Self> {
        let (scope, table) = match self {
            &Factor::Identity => return Ok(Factor::Identity),
            &Factor::TableFactor { ref scope, ref table } => (scope, table)
        };

        // the observed scope positions and the value each is pinned to
        let observed: Vec<(usize, usize)> = evidence.iter()
            .filter_map(|&(var, value)| {
                scope.iter().position(|v| *v == var).map(|p| (p, value))
            })
            .collect();

        for &(position, value) in observed.iter() {
            if value >= scope[position].cardinality() {
                return Err(PearlError::InvalidAssignment);
            }
        }

        if observed.is_empty() {
            // empty evidence (relative to scope)
            return Ok(self.clone());
        } else if observed.len() == scope.len() {
            // complete assignment
            return Ok(Factor::Identity);
        }

        let kept: Vec<Variable> = scope.iter()
                                       .enumerate()
                                       .filter(|&(p, _)| observed.iter().all(|&(q, _)| q != p))
                                       .map(|(_, &v)| v)
                                       .collect();
        let kept_cards: Vec<usize> = kept.iter().map(|v| v.cardinality()).collect();
        let map_kept = positions_of(&kept, scope);

        let cards: Vec<usize> = scope.iter().map(|v| v.cardinality()).collect();

        let mut out = Table::zeros(index::table_size(&kept_cards));
        for (cell, &value) in table.iter().enumerate() {
            let assignment = index::index_to_assignment(cell, &cards);
            if observed.iter().any(|&(p, pinned)| assignment[p] != pinned) {
                continue;
            }

            let projected: Vec<usize> = map_kept.iter().map(|&p| assignment[p]).collect();
            out[index::assignment_to_index(&projected, &kept_cards)] = value;
        }

        Factor::new(kept, out)
    }


    /// Marginalize the `Factor` over the given `Variable`s, summing them out
    /// of the scope
    ///
    /// Defined in Koller & Friedman Section 9.3.1
    ///
    /// # Args
    /// * `eliminated`: the `Variable`s to sum out. Variables outside this
    ///   factor's scope are ignored. If empty, the factor is returned
    ///   unchanged.
    ///
    /// # Returns
    /// another `Factor`, over the remaining scope, in which every cell holds
    /// the sum of the input cells whose assignments project onto it
    ///
    /// # Errors
    /// * `PearlError::EmptyResultScope` if `eliminated` covers the entire
    ///   scope. No factor is produced in that case.
    pub fn marginalize(&self, eliminated: &[Variable]) -> Result<Self> {
        if eliminated.is_empty() {
            return Ok(self.clone());
        }

        let (scope, table) = match self {
            &Factor::Identity => return Ok(Factor::Identity),
            &Factor::TableFactor { ref scope, ref table } => (scope, table)
        };

        let eliminated: IndexSet<Variable> = eliminated.iter().cloned().collect();
        let kept: Vec<Variable> = scope.iter()
                                       .filter(|v| ! eliminated.contains(*v))
                                       .cloned()
                                       .collect();
        if kept.is_empty() {
            return Err(PearlError::EmptyResultScope);
        }

        let cards: Vec<usize> = scope.iter().map(|v| v.cardinality()).collect();
        let kept_cards: Vec<usize> = kept.iter().map(|v| v.cardinality()).collect();
        let map_kept = positions_of(&kept, scope);

        // accumulate every input cell into the output cell its assignment
        // projects onto
        let mut out = Table::zeros(index::table_size(&kept_cards));
        for (cell, &value) in table.iter().enumerate() {
            let assignment = index::index_to_assignment(cell, &cards);
            let projected: Vec<usize> = map_kept.iter().map(|&p| assignment[p]).collect();

            out[index::assignment_to_index(&projected, &kept_cards)] += value;
        }

        Factor::new(kept, out)
    }

}


/// An assignment must name a value for exactly the scope variables, each
/// within its variable's range. Checked before any index arithmetic.
fn check_assignment(scope: &[Variable], assignment: &[usize]) -> Result<()> {
    if assignment.len() != scope.len() {
        return Err(PearlError::ShapeMismatch);
    }

    for (&value, var) in assignment.iter().zip(scope) {
        if value >= var.cardinality() {
            return Err(PearlError::InvalidAssignment);
        }
    }

    Ok(())
}
