//! Definition of the variable module
//!
//! A `Variable` represents a discrete random variable in a Probabilistic
//! Graphical Model: an integer identifier together with a cardinality, the
//! number of values the variable may take. Assignments to a variable are
//! 0-based, i.e. values in the range `0..cardinality`.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A discrete random variable.
///
/// Equality, ordering and hashing consider the identifier alone; the
/// cardinality is an attribute of the variable, not part of its identity.
/// Two factors that mention the same identifier with different cardinalities
/// therefore disagree about the *same* variable, which the factor operations
/// report as a dimensionality mismatch rather than treating the two as
/// distinct variables.
#[derive(Clone, Copy, Debug)]
pub struct Variable {
    id: usize,
    cardinality: usize
}

impl Variable {

    /// Construct a new `Variable` with the given identifier and cardinality.
    ///
    /// # Panics
    /// If `cardinality` is zero. A variable that can take no value is
    /// meaningless and the index arithmetic is not defined for it.
    pub fn new(id: usize, cardinality: usize) -> Variable {
        if cardinality == 0 {
            panic!("Invalid cardinality (0) for Variable ({})", id);
        }

        Variable { id, cardinality }
    }

    /// Construct a new binary `Variable`
    pub fn binary(id: usize) -> Variable {
        Variable::new(id, 2)
    }

    /// Get the identifier of the `Variable`
    pub fn id(&self) -> usize {
        self.id
    }

    /// Get the cardinality of the `Variable`
    pub fn cardinality(&self) -> usize {
        self.cardinality
    }

}

impl PartialEq for Variable {
    fn eq(&self, other: &Variable) -> bool {
        self.id == other.id
    }
}

impl Eq for Variable {}

impl Hash for Variable {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for Variable {
    fn partial_cmp(&self, other: &Variable) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Variable {
    fn cmp(&self, other: &Variable) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "X{}", self.id)
    }
}


/// Locate each variable of `source` within `target`.
///
/// Returns the 0-based position in `target` of every variable in `source`, in
/// `source` order. This is the translation used by the factor operations to
/// carry an assignment over one scope into the index space of another.
///
/// # Panics
/// If a variable of `source` does not appear in `target`. The factor
/// operations only ever map a scope into a superset of itself, so a failed
/// lookup is a broken internal invariant, not a recoverable condition.
pub fn positions_of(source: &[Variable], target: &[Variable]) -> Vec<usize> {
    source.iter()
          .map(|v| {
              target.iter()
                    .position(|t| t == v)
                    .unwrap_or_else(|| panic!("Variable ({}) is not in the target scope", v.id()))
          })
          .collect()
}


// Unit Tests for the Variable struct.
#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn construction() {
        let v = Variable::new(3, 4);
        assert_eq!(3, v.id());
        assert_eq!(4, v.cardinality());

        let b = Variable::binary(0);
        assert_eq!(2, b.cardinality());
    }

    #[test]
    #[should_panic]
    fn zero_cardinality() {
        Variable::new(0, 0);
    }

    #[test]
    fn identity_by_id() {
        let a = Variable::new(1, 2);
        let b = Variable::new(1, 3);
        let c = Variable::new(2, 2);

        // same identifier, different cardinality: still the same variable
        assert_eq!(a, b);
        assert!(a != c);
        assert!(a < c);
    }

    #[test]
    fn positions() {
        let a = Variable::binary(0);
        let b = Variable::new(1, 3);
        let c = Variable::binary(2);

        let target = vec![c, a, b];
        assert_eq!(vec![1, 2], positions_of(&[a, b], &target));
        assert_eq!(vec![0, 2, 1], positions_of(&[c, b, a], &target));
        assert!(positions_of(&[], &target).is_empty());
    }

    #[test]
    #[should_panic]
    fn positions_missing_variable() {
        let a = Variable::binary(0);
        let b = Variable::binary(1);

        positions_of(&[a, b], &[a]);
    }

}
