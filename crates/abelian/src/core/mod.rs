//! Core contracts and error values.
//!
//! - [`traits::Elem`], [`traits::Set`]: the minimal element and carrier contracts
//! - [`traits::PartialOrdered`], [`traits::StrictOrdered`]: optional ordering capabilities
//! - [`traits::Enumerable`], [`traits::Nexter`]: optional enumeration capability
//! - [`traits::BinOp`]: binary operations over elements
//! - [`error::SetError`]: failures of construction and arithmetic

pub mod error;
pub mod traits;
