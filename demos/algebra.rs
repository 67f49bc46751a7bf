//! Walks through the core factor algebra: building factors, taking products,
//! marginalizing, reducing on evidence, and normalizing.
//!
//! The model is the student-network fragment from Koller & Friedman Exercise
//! 3.4: a course's Difficulty, a student's Intelligence, and the Grade the
//! student earns.

extern crate pearl;
#[macro_use]
extern crate ndarray;

use pearl as p;

fn main() -> p::Result<()> {

    ///////////////////////////////////////////////////
    // Step 1: Define variables

    let difficulty = p::Variable::binary(0);
    let intelligence = p::Variable::binary(1);
    let grade = p::Variable::new(2, 3);

    ///////////////////////////////////////////////////
    // Step 2: Build the factors
    //
    // Value tables are flat, first scope variable varying fastest.

    let p_d = p::Factor::new(vec![difficulty], array![0.6, 0.4])?;
    let p_i = p::Factor::new(vec![intelligence], array![0.7, 0.3])?;

    // P(G | I, D), laid out over the scope (G, I, D)
    let p_g = p::Factor::new(
        vec![grade, intelligence, difficulty],
        array![
            0.3, 0.4, 0.3,    // i0, d0
            0.9, 0.08, 0.02,  // i1, d0
            0.05, 0.25, 0.7,  // i0, d1
            0.5, 0.3, 0.2     // i1, d1
        ]
    )?;

    ///////////////////////////////////////////////////
    // Step 3: Multiply the factors into the joint P(D, I, G)

    let joint = p_d.product(&p_i)?.product(&p_g)?;
    println!("joint scope: {:?}", joint.scope().iter().map(|v| v.id()).collect::<Vec<_>>());
    println!("joint mass:  {:.4}", joint.sum());

    ///////////////////////////////////////////////////
    // Step 4: Marginalize out everything but the grade

    let marginal = joint.marginalize(&[difficulty, intelligence])?;
    for value in 0..grade.cardinality() {
        println!("P(G = {}) = {:.4}", value, marginal.value(&[value])?);
    }

    ///////////////////////////////////////////////////
    // Step 5: Condition on a smart student and renormalize

    let conditioned = joint.reduce(&[(intelligence, 1)])?
                           .marginalize(&[difficulty])?
                           .normalize()?;
    for value in 0..grade.cardinality() {
        println!("P(G = {} | i1) = {:.4}", value, conditioned.value(&[value])?);
    }

    Ok(())
}
