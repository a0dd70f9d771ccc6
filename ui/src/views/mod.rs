mod compare;
pub use compare::Compare;
