// Element-wise math nodes: one output per input element.
pub mod exp;

pub use exp::ExpOp;
