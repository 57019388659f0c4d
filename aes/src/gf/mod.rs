pub mod arithmetic;
pub mod irreducible;
