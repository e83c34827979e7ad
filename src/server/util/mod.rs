pub mod extract;
pub mod validate;
