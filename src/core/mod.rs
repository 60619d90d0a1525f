pub mod factory;
pub mod wrapper;

pub use crate::domain::model::{ParameterDefinition, PrimitiveType, TypeRef, WrapperType};
pub use crate::utils::error::Result;
