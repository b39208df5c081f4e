use crate::meta::{ClassId, TypeId};
use crate::visibility::Visibility;

/// Descriptor for a class-like declaration (class, interface, object).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDescriptor {
    pub name: String,
    pub visibility: Visibility,
    /// The class this one is declared inside, if any.
    pub containing: Option<ClassId>,
    pub type_params: Vec<TypeParameter>,
    /// Supertypes as written in the declaration header.
    pub supertypes: Vec<TypeId>,
}

impl ClassDescriptor {
    pub fn new(name: impl Into<String>, visibility: Visibility) -> Self {
        Self {
            name: name.into(),
            visibility,
            containing: None,
            type_params: Vec::new(),
            supertypes: Vec::new(),
        }
    }

    pub fn with_containing(mut self, containing: ClassId) -> Self {
        self.containing = Some(containing);
        self
    }

    pub fn with_supertype(mut self, supertype: TypeId) -> Self {
        self.supertypes.push(supertype);
        self
    }

    pub fn with_type_param(mut self, param: TypeParameter) -> Self {
        self.type_params.push(param);
        self
    }
}

/// A declared generic parameter and its upper bounds.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeParameter {
    pub name: String,
    pub bounds: Vec<TypeId>,
}

impl TypeParameter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bounds: Vec::new(),
        }
    }

    pub fn with_bound(mut self, bound: TypeId) -> Self {
        self.bounds.push(bound);
        self
    }
}
