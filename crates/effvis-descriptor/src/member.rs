use crate::meta::{ClassId, TypeId};
use crate::visibility::Visibility;

/// Broad classification for members whose signatures get checked.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    Property,
    Function,
    Constructor,
}

/// Descriptor for a callable or property member of a class or file.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberDescriptor {
    pub name: String,
    pub kind: MemberKind,
    pub visibility: Visibility,
    /// The class this member is declared in; `None` for top-level members.
    pub containing: Option<ClassId>,
    /// Return type for functions, property type for properties.
    pub return_type: Option<TypeId>,
    pub parameters: Vec<MemberParameter>,
}

impl MemberDescriptor {
    pub fn new(name: impl Into<String>, kind: MemberKind, visibility: Visibility) -> Self {
        Self {
            name: name.into(),
            kind,
            visibility,
            containing: None,
            return_type: None,
            parameters: Vec::new(),
        }
    }

    pub fn with_containing(mut self, containing: ClassId) -> Self {
        self.containing = Some(containing);
        self
    }

    pub fn with_return_type(mut self, ty: TypeId) -> Self {
        self.return_type = Some(ty);
        self
    }

    pub fn with_parameter(mut self, parameter: MemberParameter) -> Self {
        self.parameters.push(parameter);
        self
    }
}

/// A single value parameter in a member signature.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberParameter {
    pub name: String,
    pub ty: TypeId,
}

impl MemberParameter {
    pub fn new(name: impl Into<String>, ty: TypeId) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}
