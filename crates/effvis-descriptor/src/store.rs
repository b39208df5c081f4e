//! Append-only owner of all descriptors in one analysis session.

use std::collections::HashSet;

use effvis_error::{Error, Result};

use crate::class::ClassDescriptor;
use crate::member::MemberDescriptor;
use crate::meta::{ClassId, MemberId, TypeId};
use crate::types::{TypeConstructor, TypeDescriptor};

/// Holds every class, type and member descriptor and answers the structural
/// queries the resolver walks over: declared visibility, containment, type
/// parameters and bounds, constructors and arguments, and the subclass
/// relation.
///
/// Handles returned by the `add_*` methods are only meaningful against the
/// store that produced them. Descriptors stay mutable through the `_mut`
/// accessors so recursive structures (a class whose bound mentions the class
/// itself) can be wired up after insertion.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct DeclStore {
    classes: Vec<ClassDescriptor>,
    types: Vec<TypeDescriptor>,
    members: Vec<MemberDescriptor>,
}

impl DeclStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_class(&mut self, class: ClassDescriptor) -> ClassId {
        let id = ClassId(self.classes.len() as u32);
        self.classes.push(class);
        id
    }

    pub fn add_type(&mut self, ty: TypeDescriptor) -> TypeId {
        let id = TypeId(self.types.len() as u32);
        self.types.push(ty);
        id
    }

    pub fn add_member(&mut self, member: MemberDescriptor) -> MemberId {
        let id = MemberId(self.members.len() as u32);
        self.members.push(member);
        id
    }

    pub fn class(&self, id: ClassId) -> &ClassDescriptor {
        self.opt_class(id).expect("class handle must come from this store")
    }

    pub fn opt_class(&self, id: ClassId) -> Option<&ClassDescriptor> {
        self.classes.get(id.index())
    }

    pub fn class_mut(&mut self, id: ClassId) -> &mut ClassDescriptor {
        self.classes
            .get_mut(id.index())
            .expect("class handle must come from this store")
    }

    pub fn ty(&self, id: TypeId) -> &TypeDescriptor {
        self.opt_ty(id).expect("type handle must come from this store")
    }

    pub fn opt_ty(&self, id: TypeId) -> Option<&TypeDescriptor> {
        self.types.get(id.index())
    }

    pub fn member(&self, id: MemberId) -> &MemberDescriptor {
        self.opt_member(id)
            .expect("member handle must come from this store")
    }

    pub fn opt_member(&self, id: MemberId) -> Option<&MemberDescriptor> {
        self.members.get(id.index())
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    pub fn class_ids(&self) -> impl Iterator<Item = ClassId> + '_ {
        (0..self.classes.len() as u32).map(ClassId)
    }

    pub fn member_ids(&self) -> impl Iterator<Item = MemberId> + '_ {
        (0..self.members.len() as u32).map(MemberId)
    }

    /// Whether `sub` is `sup` or inherits from it, transitively.
    ///
    /// Only supertype entries backed by a class constructor participate;
    /// malformed entries are skipped here and reported by [`validate`].
    /// A visited set guards against cyclic inheritance in unvalidated input.
    ///
    /// [`validate`]: DeclStore::validate
    pub fn is_subclass(&self, sub: ClassId, sup: ClassId) -> bool {
        if sub == sup {
            return true;
        }
        let mut visited = HashSet::new();
        self.superclass_walk(sub, sup, &mut visited)
    }

    fn superclass_walk(
        &self,
        current: ClassId,
        target: ClassId,
        visited: &mut HashSet<ClassId>,
    ) -> bool {
        if !visited.insert(current) {
            return false;
        }
        for &supertype in &self.class(current).supertypes {
            let Some(parent) = self.ty(supertype).constructor.classifier() else {
                continue;
            };
            if parent == target || self.superclass_walk(parent, target, visited) {
                return true;
            }
        }
        false
    }

    /// Checks the structural invariants the resolver assumes: every handle
    /// resolves, supertype entries are backed by class constructors, and no
    /// class inherits from itself.
    ///
    /// The resolver itself never fails on bad input (it degrades through the
    /// lattice instead); run this once after graph construction to surface
    /// frontend bugs early.
    pub fn validate(&self) -> Result<()> {
        for id in self.class_ids() {
            self.validate_class(id)
                .map_err(|e| e.with_operation("store::validate"))?;
        }
        for id in self.member_ids() {
            self.validate_member(id)
                .map_err(|e| e.with_operation("store::validate"))?;
        }
        for ty in &self.types {
            if let Some(classifier) = ty.constructor.classifier() {
                self.check_class_handle(classifier)?;
            }
            for &argument in &ty.arguments {
                self.check_type_handle(argument)?;
            }
        }
        Ok(())
    }

    fn validate_class(&self, id: ClassId) -> Result<()> {
        let class = self.class(id);
        if let Some(containing) = class.containing {
            self.check_class_handle(containing)?;
        }
        for param in &class.type_params {
            for &bound in &param.bounds {
                self.check_type_handle(bound)?;
            }
        }
        for &supertype in &class.supertypes {
            self.check_type_handle(supertype)?;
            match self.ty(supertype).constructor {
                TypeConstructor::Class(parent) => self.check_class_handle(parent)?,
                TypeConstructor::Parameter { .. } => {
                    return Err(Error::malformed_supertype(&class.name)
                        .with_operation("store::validate_class"));
                }
            }
        }
        if self.inherits_from_self(id) {
            return Err(
                Error::cyclic_inheritance(&class.name).with_operation("store::validate_class")
            );
        }
        Ok(())
    }

    fn validate_member(&self, id: MemberId) -> Result<()> {
        let member = self.member(id);
        if let Some(containing) = member.containing {
            self.check_class_handle(containing)?;
        }
        if let Some(return_type) = member.return_type {
            self.check_type_handle(return_type)?;
        }
        for parameter in &member.parameters {
            self.check_type_handle(parameter.ty)?;
        }
        Ok(())
    }

    fn inherits_from_self(&self, id: ClassId) -> bool {
        let mut visited = HashSet::new();
        visited.insert(id);
        let mut frontier = vec![id];
        while let Some(current) = frontier.pop() {
            for &supertype in &self.class(current).supertypes {
                let Some(parent) = self.ty(supertype).constructor.classifier() else {
                    continue;
                };
                if parent == id {
                    return true;
                }
                if visited.insert(parent) {
                    frontier.push(parent);
                }
            }
        }
        false
    }

    fn check_class_handle(&self, id: ClassId) -> Result<()> {
        if self.opt_class(id).is_none() {
            return Err(Error::unknown_handle(format!("ClassId({})", id)));
        }
        Ok(())
    }

    fn check_type_handle(&self, id: TypeId) -> Result<()> {
        if self.opt_ty(id).is_none() {
            return Err(Error::unknown_handle(format!("TypeId({})", id)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visibility::Visibility;
    use effvis_error::ErrorKind;

    fn class(store: &mut DeclStore, name: &str) -> ClassId {
        store.add_class(ClassDescriptor::new(name, Visibility::Public))
    }

    #[test]
    fn subclass_is_reflexive() {
        let mut store = DeclStore::new();
        let a = class(&mut store, "A");
        assert!(store.is_subclass(a, a));
    }

    #[test]
    fn subclass_is_transitive() {
        let mut store = DeclStore::new();
        let base = class(&mut store, "Base");
        let base_ty = store.add_type(TypeDescriptor::of_class(base));
        let mid = store.add_class(
            ClassDescriptor::new("Mid", Visibility::Public).with_supertype(base_ty),
        );
        let mid_ty = store.add_type(TypeDescriptor::of_class(mid));
        let leaf = store.add_class(
            ClassDescriptor::new("Leaf", Visibility::Public).with_supertype(mid_ty),
        );

        assert!(store.is_subclass(leaf, mid));
        assert!(store.is_subclass(leaf, base));
        assert!(!store.is_subclass(base, leaf));
    }

    #[test]
    fn subclass_terminates_on_cyclic_input() {
        let mut store = DeclStore::new();
        let a = class(&mut store, "A");
        let b = class(&mut store, "B");
        let a_ty = store.add_type(TypeDescriptor::of_class(a));
        let b_ty = store.add_type(TypeDescriptor::of_class(b));
        store.class_mut(a).supertypes.push(b_ty);
        store.class_mut(b).supertypes.push(a_ty);

        let unrelated = class(&mut store, "C");
        assert!(!store.is_subclass(a, unrelated));
        assert!(store.is_subclass(a, b));
    }

    #[test]
    fn validate_accepts_well_formed_graph() {
        let mut store = DeclStore::new();
        let base = class(&mut store, "Base");
        let base_ty = store.add_type(TypeDescriptor::of_class(base));
        store.add_class(ClassDescriptor::new("Sub", Visibility::Public).with_supertype(base_ty));

        assert!(store.validate().is_ok());
    }

    #[test]
    fn validate_rejects_inheritance_cycle() {
        let mut store = DeclStore::new();
        let a = class(&mut store, "A");
        let b = class(&mut store, "B");
        let a_ty = store.add_type(TypeDescriptor::of_class(a));
        let b_ty = store.add_type(TypeDescriptor::of_class(b));
        store.class_mut(a).supertypes.push(b_ty);
        store.class_mut(b).supertypes.push(a_ty);

        let err = store.validate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CyclicInheritance);
    }

    #[test]
    fn validate_rejects_parameter_supertype() {
        let mut store = DeclStore::new();
        let t = store.add_type(TypeDescriptor::parameter("T"));
        store.add_class(ClassDescriptor::new("Bad", Visibility::Public).with_supertype(t));

        let err = store.validate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedSupertype);
    }

    #[test]
    fn validate_rejects_foreign_handle() {
        let mut store = DeclStore::new();
        store.add_class(
            ClassDescriptor::new("Orphan", Visibility::Public).with_supertype(TypeId(7)),
        );

        let err = store.validate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownHandle);
    }
}
