//! The effective-visibility lattice.

use std::fmt;

use effvis_descriptor::{ClassId, DeclStore};

use crate::relation::Relation;

/// The externally-observable visibility of a declaration, after its
/// container and the types in its signature have been taken into account.
///
/// Values are transient comparison results computed on demand; they are
/// never stored back on a descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectiveVisibility {
    Private,
    Internal,
    Public,
    /// Scoped to a class and its subclasses. A `None` container means the
    /// owning class could not be determined; such a scope never compares
    /// `Same` with any protected scope, itself included, and so collapses to
    /// `Private` under [`lower_bound`](EffectiveVisibility::lower_bound).
    Protected(Option<ClassId>),
}

impl EffectiveVisibility {
    /// How `self` compares to `other` in restrictiveness.
    ///
    /// `Public` is the top of the lattice and `Private` the bottom;
    /// `Internal` sits strictly between them. Their cross comparisons are
    /// derived by inverting the top/bottom rules rather than spelled out
    /// twice. Protected scopes order by the subclass relation of their
    /// containers; everything else is `Unknown`.
    pub fn relation(self, other: EffectiveVisibility, store: &DeclStore) -> Relation {
        use EffectiveVisibility::*;
        match (self, other) {
            (Protected(left), Protected(right)) => Self::protected_relation(left, right, store),
            _ if self == other => Relation::Same,
            (Public, _) => Relation::Better,
            (Private, _) => Relation::Worse,
            (_, Public) | (_, Private) => other.relation(self, store).invert(),
            _ => Relation::Unknown,
        }
    }

    fn protected_relation(
        left: Option<ClassId>,
        right: Option<ClassId>,
        store: &DeclStore,
    ) -> Relation {
        let (Some(left), Some(right)) = (left, right) else {
            return Relation::Unknown;
        };
        if left == right {
            Relation::Same
        } else if store.is_subclass(left, right) {
            // Protected in a subclass reaches fewer contexts than protected
            // in its ancestor.
            Relation::Worse
        } else if store.is_subclass(right, left) {
            Relation::Better
        } else {
            Relation::Unknown
        }
    }

    /// Whether `self` is at least as visible as `other`.
    pub fn same_or_better(self, other: EffectiveVisibility, store: &DeclStore) -> bool {
        matches!(
            self.relation(other, store),
            Relation::Same | Relation::Better
        )
    }

    /// The more restrictive of the two, falling back to `Private` when the
    /// sides are incomparable. Incomparable inputs must never come out
    /// permissive, and `Private` is absorbing under further reduction.
    pub fn lower_bound(self, other: EffectiveVisibility, store: &DeclStore) -> EffectiveVisibility {
        match self.relation(other, store) {
            Relation::Same | Relation::Worse => self,
            Relation::Better => other,
            Relation::Unknown => EffectiveVisibility::Private,
        }
    }

    /// Left fold of [`lower_bound`](EffectiveVisibility::lower_bound) over a
    /// sequence of visibilities.
    pub fn lower_bound_all(
        self,
        others: impl IntoIterator<Item = EffectiveVisibility>,
        store: &DeclStore,
    ) -> EffectiveVisibility {
        others
            .into_iter()
            .fold(self, |bound, next| bound.lower_bound(next, store))
    }
}

impl fmt::Display for EffectiveVisibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EffectiveVisibility::Private => write!(f, "private"),
            EffectiveVisibility::Internal => write!(f, "internal"),
            EffectiveVisibility::Public => write!(f, "public"),
            EffectiveVisibility::Protected(Some(container)) => {
                write!(f, "protected({})", container)
            }
            EffectiveVisibility::Protected(None) => write!(f, "protected(?)"),
        }
    }
}
