//! Recursive computation of effective visibilities over a descriptor store.

use std::collections::HashSet;

use effvis_descriptor::{ClassId, DeclStore, MemberId, TypeConstructor, TypeId, Visibility};

use crate::effective::EffectiveVisibility;

/// Classes already entered on the current recursion path.
///
/// Extended functionally (cloned, never mutated in place) so independent
/// call stacks can walk the same store concurrently.
type ClassSet = HashSet<ClassId>;

/// Computes effective visibilities by walking declared visibilities,
/// container chains and signature types, reducing everything through
/// [`EffectiveVisibility::lower_bound`].
///
/// Every operation terminates and returns a value: incomparable inputs
/// degrade to `Private` through the lattice, and recursive generic
/// self-reference is cut at re-entry. There is no error path.
pub struct VisibilityResolver<'a> {
    store: &'a DeclStore,
}

impl<'a> VisibilityResolver<'a> {
    pub fn new(store: &'a DeclStore) -> Self {
        Self { store }
    }

    /// Effective visibility of a class declaration: its own mapped
    /// visibility reduced with every generic-parameter bound.
    pub fn of_class(&self, class: ClassId) -> EffectiveVisibility {
        self.class_with(class, &ClassSet::new())
    }

    fn class_with(&self, class: ClassId, visited: &ClassSet) -> EffectiveVisibility {
        if visited.contains(&class) {
            // Cut recursive generic self-reference. Treating the re-entered
            // class as non-restricting keeps the walk total; it is not a
            // real visibility claim.
            return EffectiveVisibility::Public;
        }
        let descriptor = self.store.class(class);
        tracing::trace!("resolving class {} '{}'", class, descriptor.name);

        let mut entered = visited.clone();
        entered.insert(class);

        let own = self.of_visibility(descriptor.visibility, descriptor.containing);
        let bounds = descriptor
            .type_params
            .iter()
            .flat_map(|param| param.bounds.iter().copied())
            .map(|bound| self.type_with(bound, &entered));
        own.lower_bound_all(bounds, self.store)
    }

    /// Effective visibility of a type: its constructor's classifier reduced
    /// with every type argument, recursively.
    pub fn of_type(&self, ty: TypeId) -> EffectiveVisibility {
        self.type_with(ty, &ClassSet::new())
    }

    fn type_with(&self, ty: TypeId, visited: &ClassSet) -> EffectiveVisibility {
        let descriptor = self.store.ty(ty);
        let head = match &descriptor.constructor {
            TypeConstructor::Class(class) => self.classifier_with(*class, visited),
            // A type variable has no declaration of its own to restrict
            // anything.
            TypeConstructor::Parameter { .. } => EffectiveVisibility::Public,
        };
        let arguments = descriptor
            .arguments
            .iter()
            .map(|&argument| self.type_with(argument, visited));
        head.lower_bound_all(arguments, self.store)
    }

    /// Effective visibility of a classifier as referenced from a signature:
    /// the class itself, dominated by every enclosing classifier.
    pub fn of_classifier(&self, class: ClassId) -> EffectiveVisibility {
        self.classifier_with(class, &ClassSet::new())
    }

    fn classifier_with(&self, class: ClassId, visited: &ClassSet) -> EffectiveVisibility {
        let own = self.class_with(class, visited);
        let containing = match self.store.class(class).containing {
            Some(outer) => self.classifier_with(outer, visited),
            None => EffectiveVisibility::Public,
        };
        own.lower_bound(containing, self.store)
    }

    /// Effective visibility of a member: its own mapped visibility reduced
    /// with the effective visibility of its containing class.
    pub fn of_member(&self, member: MemberId) -> EffectiveVisibility {
        let descriptor = self.store.member(member);
        tracing::trace!("resolving member {} '{}'", member, descriptor.name);
        let own = self.of_visibility(descriptor.visibility, descriptor.containing);
        let containing = match descriptor.containing {
            Some(class) => self.of_class(class),
            None => EffectiveVisibility::Public,
        };
        own.lower_bound(containing, self.store)
    }

    /// Maps a declared modifier to its effective counterpart. `container`
    /// becomes the scope of a `protected` declaration.
    pub fn of_visibility(
        &self,
        visibility: Visibility,
        container: Option<ClassId>,
    ) -> EffectiveVisibility {
        match visibility {
            Visibility::Private | Visibility::PrivateToThis => EffectiveVisibility::Private,
            Visibility::Protected => EffectiveVisibility::Protected(container),
            Visibility::Internal => EffectiveVisibility::Internal,
            Visibility::Public => EffectiveVisibility::Public,
            // Unreferencable past its enclosing scope, so nothing to
            // restrict.
            Visibility::Local => EffectiveVisibility::Public,
        }
    }
}
