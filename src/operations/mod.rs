pub mod arithmetic;
pub mod inverse;

pub use arithmetic::BinaryOperation;
