use num_traits::{Float, NumAssignOps};
use std::fmt::Debug;
use std::iter::{Product, Sum};

/// A trait representing the element types usable as node inputs.
///
/// Node operations are generic over this bound so the same kernels serve
/// `f32` and `f64`. `Float` already provides `zero()`, `one()`, `exp()`, etc.
pub trait NodeNumeric:
    Float // Includes Num + Copy + NumCast + PartialOrd
    + NumAssignOps // AddAssign, MulAssign, ... for the accumulation loops
    + Sum
    + Product
    + Debug
    + Send
    + Sync
    + 'static
{
}

impl NodeNumeric for f32 {}
impl NodeNumeric for f64 {}

#[cfg(test)]
mod tests {
    use super::*;

    fn process_numeric<T: NodeNumeric>(values: &[T]) -> T {
        values.iter().copied().sum()
    }

    #[test]
    fn test_f32_impl_node_numeric() {
        assert_eq!(process_numeric(&[1.0f32, 2.0]), 3.0);
    }

    #[test]
    fn test_f64_impl_node_numeric() {
        assert_eq!(process_numeric(&[1.0f64, 2.0]), 3.0);
    }
}
