use serde::{Deserialize, Serialize};
use std::fmt;

/// Metadata describing one named input of a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDefinition {
    key: String,
    name: Option<String>,
    datatype: String,
    required: bool,
    description: Option<String>,
}

impl ParameterDefinition {
    pub fn new(
        key: impl Into<String>,
        name: Option<String>,
        datatype: impl Into<String>,
        required: bool,
        description: Option<String>,
    ) -> Self {
        Self {
            key: key.into(),
            name,
            datatype: datatype.into(),
            required,
            description,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn datatype(&self) -> &str {
        &self.datatype
    }

    /// Whether evaluation must be refused when no value is supplied.
    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The boxed type named by `datatype`, if it names one.
    pub fn wrapper_type(&self) -> Option<WrapperType> {
        WrapperType::from_class_name(&self.datatype)
    }
}

impl fmt::Display for ParameterDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}

/// The eight boxed counterparts of the primitive value types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WrapperType {
    Boolean,
    Character,
    Byte,
    Short,
    Integer,
    Float,
    Double,
    Long,
}

impl WrapperType {
    pub const ALL: [WrapperType; 8] = [
        WrapperType::Boolean,
        WrapperType::Character,
        WrapperType::Byte,
        WrapperType::Short,
        WrapperType::Integer,
        WrapperType::Float,
        WrapperType::Double,
        WrapperType::Long,
    ];

    /// Fully-qualified class name, e.g. `java.lang.Integer`.
    pub const fn class_name(self) -> &'static str {
        match self {
            WrapperType::Boolean => "java.lang.Boolean",
            WrapperType::Character => "java.lang.Character",
            WrapperType::Byte => "java.lang.Byte",
            WrapperType::Short => "java.lang.Short",
            WrapperType::Integer => "java.lang.Integer",
            WrapperType::Float => "java.lang.Float",
            WrapperType::Double => "java.lang.Double",
            WrapperType::Long => "java.lang.Long",
        }
    }

    pub const fn primitive(self) -> PrimitiveType {
        match self {
            WrapperType::Boolean => PrimitiveType::Boolean,
            WrapperType::Character => PrimitiveType::Char,
            WrapperType::Byte => PrimitiveType::Byte,
            WrapperType::Short => PrimitiveType::Short,
            WrapperType::Integer => PrimitiveType::Int,
            WrapperType::Float => PrimitiveType::Float,
            WrapperType::Double => PrimitiveType::Double,
            WrapperType::Long => PrimitiveType::Long,
        }
    }

    /// Exact, case-sensitive lookup by fully-qualified name.
    pub fn from_class_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|w| w.class_name() == name)
    }
}

impl fmt::Display for WrapperType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

/// Unboxed primitive value types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveType {
    Boolean,
    Char,
    Byte,
    Short,
    Int,
    Float,
    Double,
    Long,
}

impl PrimitiveType {
    pub const ALL: [PrimitiveType; 8] = [
        PrimitiveType::Boolean,
        PrimitiveType::Char,
        PrimitiveType::Byte,
        PrimitiveType::Short,
        PrimitiveType::Int,
        PrimitiveType::Float,
        PrimitiveType::Double,
        PrimitiveType::Long,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Char => "char",
            PrimitiveType::Byte => "byte",
            PrimitiveType::Short => "short",
            PrimitiveType::Int => "int",
            PrimitiveType::Float => "float",
            PrimitiveType::Double => "double",
            PrimitiveType::Long => "long",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }
}

/// Identity of a runtime type as seen by the calculation engine.
///
/// Only built from a name or a known table entry, so a wrapper's class name
/// always resolves to the wrapper identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeRef(TypeKind);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum TypeKind {
    Wrapper(WrapperType),
    Primitive(PrimitiveType),
    Other(String),
}

impl TypeRef {
    pub fn for_name(name: &str) -> Self {
        if let Some(wrapper) = WrapperType::from_class_name(name) {
            TypeRef(TypeKind::Wrapper(wrapper))
        } else if let Some(primitive) = PrimitiveType::from_name(name) {
            TypeRef(TypeKind::Primitive(primitive))
        } else {
            TypeRef(TypeKind::Other(name.to_string()))
        }
    }

    pub fn name(&self) -> &str {
        match &self.0 {
            TypeKind::Wrapper(w) => w.class_name(),
            TypeKind::Primitive(p) => p.name(),
            TypeKind::Other(name) => name,
        }
    }

    pub fn wrapper(&self) -> Option<WrapperType> {
        match self.0 {
            TypeKind::Wrapper(w) => Some(w),
            _ => None,
        }
    }

    pub fn primitive(&self) -> Option<PrimitiveType> {
        match self.0 {
            TypeKind::Primitive(p) => Some(p),
            _ => None,
        }
    }
}

impl From<WrapperType> for TypeRef {
    fn from(wrapper: WrapperType) -> Self {
        TypeRef(TypeKind::Wrapper(wrapper))
    }
}

impl From<PrimitiveType> for TypeRef {
    fn from(primitive: PrimitiveType) -> Self {
        TypeRef(TypeKind::Primitive(primitive))
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
