//! Evaluates each node kind on a small input and prints its local gradient.
//!
//! Run with `RUST_LOG=trace cargo run --example node_ops_example` to see the op traces.

use gradnode_core::autograd::grad_check::{DEFAULT_EPSILON, DEFAULT_TOLERANCE};
use gradnode_core::{check_grad, GradCheckError, OpKind};

fn main() -> Result<(), GradCheckError> {
    env_logger::init();

    let x = [0.0f64, 2.0, 3.0];
    for kind in OpKind::ALL {
        let value = kind.forward(&x)?;
        let grad = kind.backward(&x)?;
        println!("{:>8} forward  : {:?}", kind, value);
        println!("{:>8} backward : {:?}", kind, grad);
        check_grad(kind, &x, DEFAULT_EPSILON, DEFAULT_TOLERANCE)?;
    }
    Ok(())
}
