//! Exposure diagnostics: declarations whose signatures reference types less
//! visible than the declaration itself.

use std::fmt;

use smallvec::SmallVec;
use strum_macros::{Display, IntoStaticStr};

use effvis_descriptor::{ClassId, DeclStore, MemberId, MemberKind, TypeId};

use crate::effective::EffectiveVisibility;
use crate::resolve::VisibilityResolver;

/// Which part of a declaration leaked the less-visible type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
pub enum ExposureKind {
    ExposedPropertyType,
    ExposedFunctionReturnType,
    ExposedParameterType,
    ExposedSuperClass,
    ExposedTypeParameterBound,
}

/// One exposure found in a declaration signature. Rendering and reporting
/// belong to the embedding compiler; this is a plain value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExposureDiagnostic {
    pub kind: ExposureKind,
    /// Name of the class or member whose signature leaked the type.
    pub declaration: String,
    pub offending_type: TypeId,
    pub declaration_visibility: EffectiveVisibility,
    pub type_visibility: EffectiveVisibility,
}

impl fmt::Display for ExposureDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: '{}' is {} but its signature references a type that is {}",
            self.kind, self.declaration, self.declaration_visibility, self.type_visibility
        )
    }
}

/// Signature sites collected per declaration before filtering; most
/// signatures reference only a handful of types.
type SiteList = SmallVec<[(ExposureKind, TypeId); 4]>;

/// Walks declarations in a store and reports every signature type whose
/// effective visibility is not at least that of the declaration itself.
pub struct ExposureChecker<'a> {
    store: &'a DeclStore,
    resolver: VisibilityResolver<'a>,
}

impl<'a> ExposureChecker<'a> {
    pub fn new(store: &'a DeclStore) -> Self {
        Self {
            store,
            resolver: VisibilityResolver::new(store),
        }
    }

    /// Checks a member's return type and every parameter type against the
    /// member's own effective visibility.
    pub fn check_member(&self, member: MemberId) -> Vec<ExposureDiagnostic> {
        let descriptor = self.store.member(member);
        let base = self.resolver.of_member(member);

        let mut sites = SiteList::new();
        if let Some(return_type) = descriptor.return_type {
            let kind = match descriptor.kind {
                MemberKind::Property => ExposureKind::ExposedPropertyType,
                MemberKind::Function | MemberKind::Constructor => {
                    ExposureKind::ExposedFunctionReturnType
                }
            };
            sites.push((kind, return_type));
        }
        for parameter in &descriptor.parameters {
            sites.push((ExposureKind::ExposedParameterType, parameter.ty));
        }
        self.report(&descriptor.name, base, sites)
    }

    /// Checks a class's supertypes and type-parameter bounds against the
    /// visibility the class declaration presents to the outside.
    pub fn check_class(&self, class: ClassId) -> Vec<ExposureDiagnostic> {
        let descriptor = self.store.class(class);
        let base = self.declaration_visibility(class);

        let mut sites = SiteList::new();
        for &supertype in &descriptor.supertypes {
            sites.push((ExposureKind::ExposedSuperClass, supertype));
        }
        for param in &descriptor.type_params {
            for &bound in &param.bounds {
                sites.push((ExposureKind::ExposedTypeParameterBound, bound));
            }
        }
        self.report(&descriptor.name, base, sites)
    }

    /// Checks every class and member in the store, in handle order.
    pub fn check_all(&self) -> Vec<ExposureDiagnostic> {
        let mut diagnostics = Vec::new();
        for class in self.store.class_ids() {
            diagnostics.extend(self.check_class(class));
        }
        for member in self.store.member_ids() {
            diagnostics.extend(self.check_member(member));
        }
        diagnostics
    }

    /// The visibility a class declaration presents at its use sites: its own
    /// mapped visibility dominated by every enclosing classifier. Generic
    /// bounds are not part of the base; a restrictive bound is an exposure
    /// site of its own.
    fn declaration_visibility(&self, class: ClassId) -> EffectiveVisibility {
        let descriptor = self.store.class(class);
        let own = self
            .resolver
            .of_visibility(descriptor.visibility, descriptor.containing);
        let containing = match descriptor.containing {
            Some(outer) => self.resolver.of_classifier(outer),
            None => EffectiveVisibility::Public,
        };
        own.lower_bound(containing, self.store)
    }

    fn report(
        &self,
        declaration: &str,
        base: EffectiveVisibility,
        sites: SiteList,
    ) -> Vec<ExposureDiagnostic> {
        let mut diagnostics = Vec::new();
        for (kind, ty) in sites {
            let type_visibility = self.resolver.of_type(ty);
            if type_visibility.same_or_better(base, self.store) {
                continue;
            }
            tracing::debug!(
                "{} on '{}': {} exposes {}",
                kind,
                declaration,
                base,
                type_visibility
            );
            diagnostics.push(ExposureDiagnostic {
                kind,
                declaration: declaration.to_string(),
                offending_type: ty,
                declaration_visibility: base,
                type_visibility,
            });
        }
        diagnostics
    }
}
