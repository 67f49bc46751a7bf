//! Conversion between linear value-table indices and assignment vectors.
//!
//! A factor over a scope of discrete variables stores its values in a flat
//! table. The cell holding the value of a particular assignment is located by
//! a mixed-radix encoding in which each variable of the scope is one digit
//! and its cardinality is that digit's radix. The first variable of the scope
//! varies fastest: with cardinalities `c[0..k]`, the strides are
//! `stride[0] = 1` and `stride[i] = stride[i - 1] * c[i - 1]`, and an
//! assignment `a` lives at `sum_i a[i] * stride[i]`.
//!
//! All indices and assignment values are 0-based. The encoding is a bijection
//! between `0..table_size(cards)` and the Cartesian product of the value
//! ranges, so `index_to_assignment` and `assignment_to_index` are inverses of
//! each other.

use ndarray::prelude as nd;

/// The number of cells in a value table over the given cardinalities.
///
/// The empty scope has a single cell (the empty product).
pub fn table_size(cardinalities: &[usize]) -> usize {
    cardinalities.iter().product()
}


/// The mixed-radix stride of each position of a scope with the given
/// cardinalities.
pub fn strides(cardinalities: &[usize]) -> Vec<usize> {
    let mut strides = Vec::with_capacity(cardinalities.len());
    let mut stride = 1;

    for &card in cardinalities.iter() {
        strides.push(stride);
        stride *= card;
    }

    strides
}


/// Decode a linear table index into the assignment vector it represents.
///
/// # Panics
/// If `index` is outside the table for the given cardinalities.
pub fn index_to_assignment(index: usize, cardinalities: &[usize]) -> Vec<usize> {
    assert!(
        index < table_size(cardinalities),
        "index ({}) out of range for cardinalities {:?}", index, cardinalities
    );

    cardinalities.iter()
                 .zip(strides(cardinalities))
                 .map(|(&card, stride)| (index / stride) % card)
                 .collect()
}


/// Encode an assignment vector as a linear table index.
///
/// # Panics
/// If the assignment length does not match the cardinality vector, or an
/// entry is outside its variable's value range. Callers that accept
/// assignments from outside the crate validate before encoding.
pub fn assignment_to_index(assignment: &[usize], cardinalities: &[usize]) -> usize {
    assert_eq!(
        assignment.len(), cardinalities.len(),
        "assignment length ({}) does not match cardinalities ({})",
        assignment.len(), cardinalities.len()
    );

    assignment.iter()
              .zip(cardinalities)
              .zip(strides(cardinalities))
              .map(|((&value, &card), stride)| {
                  assert!(value < card, "assignment value ({}) exceeds cardinality ({})", value, card);
                  value * stride
              })
              .sum()
}


/// Decode a sequence of linear indices into a matrix of assignments, one
/// assignment per row in the order the indices were given.
pub fn indices_to_assignments(indices: &[usize], cardinalities: &[usize]) -> nd::Array2<usize> {
    let mut assignments = nd::Array2::zeros((indices.len(), cardinalities.len()));

    for (mut row, &index) in assignments.outer_iter_mut().zip(indices) {
        for (cell, value) in row.iter_mut().zip(index_to_assignment(index, cardinalities)) {
            *cell = value;
        }
    }

    assignments
}


/// Encode a matrix of stacked assignment rows into a vector of linear
/// indices, one per row.
pub fn assignments_to_indices(assignments: &nd::Array2<usize>, cardinalities: &[usize]) -> nd::Array1<usize> {
    assignments.outer_iter()
               .map(|row| assignment_to_index(&row.to_vec(), cardinalities))
               .collect()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_and_strides() {
        assert_eq!(24, table_size(&[2, 3, 4]));
        assert_eq!(vec![1, 2, 6], strides(&[2, 3, 4]));

        // the empty scope has a one-cell table
        assert_eq!(1, table_size(&[]));
        assert!(strides(&[]).is_empty());
    }

    #[test]
    fn decode() {
        let cards = [2, 3];

        assert_eq!(vec![0, 0], index_to_assignment(0, &cards));
        assert_eq!(vec![1, 0], index_to_assignment(1, &cards));
        assert_eq!(vec![0, 1], index_to_assignment(2, &cards));
        assert_eq!(vec![1, 2], index_to_assignment(5, &cards));
    }

    #[test]
    fn encode() {
        let cards = [2, 3];

        assert_eq!(0, assignment_to_index(&[0, 0], &cards));
        assert_eq!(1, assignment_to_index(&[1, 0], &cards));
        assert_eq!(2, assignment_to_index(&[0, 1], &cards));
        assert_eq!(5, assignment_to_index(&[1, 2], &cards));
    }

    #[test]
    fn round_trip() {
        let cards = [2, 3, 4];

        // decode then encode is the identity on every index in range
        for index in 0..table_size(&cards) {
            let assignment = index_to_assignment(index, &cards);
            assert_eq!(index, assignment_to_index(&assignment, &cards));
        }

        // encode then decode is the identity on every assignment
        for (x, y, z) in iproduct!(0..2, 0..3, 0..4) {
            let assignment = vec![x, y, z];
            let index = assignment_to_index(&assignment, &cards);
            assert_eq!(assignment, index_to_assignment(index, &cards));
        }
    }

    #[test]
    fn batched_decode() {
        let cards = [2, 2];
        let indices: Vec<usize> = (0..table_size(&cards)).collect();

        let assignments = indices_to_assignments(&indices, &cards);
        assert_eq!(
            array![[0, 0], [1, 0], [0, 1], [1, 1]],
            assignments
        );
    }

    #[test]
    fn batched_encode() {
        let cards = [2, 2];
        let assignments = array![[0, 0], [1, 0], [0, 1], [1, 1]];

        let indices = assignments_to_indices(&assignments, &cards);
        assert_eq!(array![0, 1, 2, 3], indices);
    }

    #[test]
    fn batched_round_trip() {
        let cards = [3, 2, 2];
        let indices: Vec<usize> = (0..table_size(&cards)).collect();

        let assignments = indices_to_assignments(&indices, &cards);
        let recovered = assignments_to_indices(&assignments, &cards);

        assert_eq!(indices, recovered.to_vec());
    }

    #[test]
    #[should_panic]
    fn decode_out_of_range() {
        index_to_assignment(6, &[2, 3]);
    }

    #[test]
    #[should_panic]
    fn encode_out_of_range() {
        assignment_to_index(&[2, 0], &[2, 3]);
    }

    #[test]
    #[should_panic]
    fn encode_wrong_length() {
        assignment_to_index(&[0, 0, 0], &[2, 3]);
    }

}
