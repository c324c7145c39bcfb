// src/ops/reduction/mod.rs
// Reduction nodes: many inputs, one output value.

pub mod product;
pub mod sum;

pub use product::ProductOp;
pub use sum::SumOp;
