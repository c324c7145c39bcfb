pub mod numeric;

pub use numeric::NodeNumeric;
