pub mod dom;
pub mod extract;
