//! Module containing initialization routines for factor value tables.

use factor::{Factor, Table};
use index;
use util::{PearlError, Result};
use variable::Variable;

use ndarray_rand::RandomExt;
use rand::distributions::Range;

/// Defines possible ways to initialize a `Factor`'s value table.
pub enum Initialization {
    /// A uniform distribution over all assignments
    Uniform,

    /// Randomly initialized weights, normalized to unit mass
    Random,

    /// User defined table
    Table(Factor)
}


impl Initialization {

    /// Construct a factor, initialized based on ```self```
    ///
    /// # Args
    /// * `scope`: the `Variable`s over which to build the `Factor`, in table
    ///   order
    ///
    /// # Returns
    /// a `Factor` over `scope`, initialized according to ```self```
    ///
    /// # Errors
    /// * `PearlError::InvalidScope` if `scope` is empty, or if a user defined
    ///   table does not cover exactly the requested scope
    /// * `PearlError::DuplicateVariable` if a variable appears twice in `scope`
    pub fn build_factor(self, scope: Vec<Variable>) -> Result<Factor> {
        if scope.is_empty() {
            return Err(PearlError::InvalidScope);
        }

        // if this is a user defined factor, it just needs to be verified and
        // returned
        if let Initialization::Table(f) = self {
            let s = f.scope();
            if s.iter().all(|v| scope.contains(v)) && s.len() == scope.len() {
                return Ok(f);
            } else {
                return Err(PearlError::InvalidScope);
            }
        }

        let cards: Vec<usize> = scope.iter().map(|v| v.cardinality()).collect();
        let size = index::table_size(&cards);

        let table = match self {
            Initialization::Uniform => {
                // normalizing constant is just the number of cells
                Table::from_elem(size, 1. / (size as f64))
            },
            Initialization::Random => {
                let mut table = Table::random(size, Range::new(1.0, 100.0));
                let z = table.scalar_sum();
                table.mapv_inplace(|e| e / z);
                table
            },
            Initialization::Table(_) => panic!("unreachable")
        };

        Factor::new(scope, table)
    }

}
