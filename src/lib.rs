pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::ParameterFile;
pub use core::factory::{
    create_parameter_definition, create_parameter_definition_with_description,
    create_parameter_definition_with_name, create_parameter_definition_with_required,
};
pub use core::wrapper::{is_primitive_wrapper_class_name, is_primitive_wrapper_type};
pub use domain::model::{ParameterDefinition, PrimitiveType, TypeRef, WrapperType};
pub use utils::error::{CalcError, Result};
