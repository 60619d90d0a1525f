pub mod parameter_file;

pub use parameter_file::{ParameterEntry, ParameterFile};
