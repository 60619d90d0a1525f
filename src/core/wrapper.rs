use crate::domain::model::{TypeRef, WrapperType};

/// Checks if the given type is the boxed counterpart of a primitive type.
///
/// `None` is never a match.
pub fn is_primitive_wrapper_type(type_ref: Option<&TypeRef>) -> bool {
    type_ref.and_then(TypeRef::wrapper).is_some()
}

/// Checks if `class_name` is the fully-qualified name of a primitive wrapper.
///
/// The comparison is exact and case-sensitive, so `"int"` and `"Integer"`
/// do not match.
pub fn is_primitive_wrapper_class_name(class_name: Option<&str>) -> bool {
    match class_name {
        Some(name) => WrapperType::ALL.iter().any(|w| w.class_name() == name),
        None => false,
    }
}
