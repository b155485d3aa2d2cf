pub(crate) mod claw;
pub(crate) mod node;
pub mod sdf;
