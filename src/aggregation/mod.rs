pub mod circular;
pub mod temporal;
