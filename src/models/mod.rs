pub mod expense;
pub mod goal;
pub mod income;
