extern crate indexmap;
#[macro_use]
extern crate itertools;
#[macro_use]
extern crate ndarray;
extern crate ndarray_rand;
extern crate rand;

pub mod factor;
pub mod index;
pub mod init;
pub mod util;
pub mod variable;

pub use factor::{Factor, Table};
pub use init::Initialization;
pub use util::{Result, PearlError};
pub use variable::{positions_of, Variable};
