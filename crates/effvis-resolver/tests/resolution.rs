//! End-to-end resolution scenarios over hand-built descriptor graphs.

use pretty_assertions::assert_eq;

use effvis_descriptor::{
    ClassDescriptor, DeclStore, MemberDescriptor, MemberKind, TypeDescriptor, TypeParameter,
    Visibility,
};
use effvis_resolver::{EffectiveVisibility, Relation, VisibilityResolver};

/// `class Box<T : Box<T>>` must terminate and come out public: the
/// self-referential bound is cut at re-entry and contributes nothing.
#[test]
fn recursive_generic_bound_terminates() {
    let mut store = DeclStore::new();
    let boxed = store.add_class(ClassDescriptor::new("Box", Visibility::Public));
    let t = store.add_type(TypeDescriptor::parameter("T"));
    let box_of_t = store.add_type(TypeDescriptor::of_class(boxed).with_argument(t));
    store
        .class_mut(boxed)
        .type_params
        .push(TypeParameter::new("T").with_bound(box_of_t));
    assert!(store.validate().is_ok());

    let resolver = VisibilityResolver::new(&store);
    assert_eq!(resolver.of_class(boxed), EffectiveVisibility::Public);
}

/// The cycle cut never lifts the class's own declared visibility.
#[test]
fn recursive_generic_bound_keeps_declared_visibility() {
    let mut store = DeclStore::new();
    let boxed = store.add_class(ClassDescriptor::new("Box", Visibility::Internal));
    let t = store.add_type(TypeDescriptor::parameter("T"));
    let box_of_t = store.add_type(TypeDescriptor::of_class(boxed).with_argument(t));
    store
        .class_mut(boxed)
        .type_params
        .push(TypeParameter::new("T").with_bound(box_of_t));

    let resolver = VisibilityResolver::new(&store);
    assert_eq!(resolver.of_class(boxed), EffectiveVisibility::Internal);
}

/// Two mutually generic classes terminate through the same guard.
#[test]
fn mutually_recursive_bounds_terminate() {
    let mut store = DeclStore::new();
    let a = store.add_class(ClassDescriptor::new("A", Visibility::Public));
    let b = store.add_class(ClassDescriptor::new("B", Visibility::Internal));
    let a_ty = store.add_type(TypeDescriptor::of_class(a));
    let b_ty = store.add_type(TypeDescriptor::of_class(b));
    store
        .class_mut(a)
        .type_params
        .push(TypeParameter::new("T").with_bound(b_ty));
    store
        .class_mut(b)
        .type_params
        .push(TypeParameter::new("U").with_bound(a_ty));

    let resolver = VisibilityResolver::new(&store);
    // A's bound drags in B (internal); B's own bound re-enters... nothing
    // worse than internal is ever produced.
    assert_eq!(resolver.of_class(a), EffectiveVisibility::Internal);
    assert_eq!(resolver.of_class(b), EffectiveVisibility::Internal);
}

/// A public field whose type is an internal class is effectively internal,
/// and not at least as visible as its public owner.
#[test]
fn internal_field_type_in_public_class() {
    let mut store = DeclStore::new();
    let hidden = store.add_class(ClassDescriptor::new("Hidden", Visibility::Internal));
    let hidden_ty = store.add_type(TypeDescriptor::of_class(hidden));
    let owner = store.add_class(ClassDescriptor::new("Owner", Visibility::Public));
    let field = store.add_member(
        MemberDescriptor::new("field", MemberKind::Property, Visibility::Public)
            .with_containing(owner)
            .with_return_type(hidden_ty),
    );

    let resolver = VisibilityResolver::new(&store);
    let field_vis = resolver.of_member(field);
    let type_vis = resolver.of_type(hidden_ty);

    assert_eq!(field_vis, EffectiveVisibility::Public);
    assert_eq!(type_vis, EffectiveVisibility::Internal);
    assert!(!type_vis.same_or_better(field_vis, &store));
}

/// A private nested class stays private no matter how visible the outer
/// class is.
#[test]
fn private_nested_class_in_public_outer() {
    let mut store = DeclStore::new();
    let outer = store.add_class(ClassDescriptor::new("Outer", Visibility::Public));
    let inner = store
        .add_class(ClassDescriptor::new("Inner", Visibility::Private).with_containing(outer));

    let resolver = VisibilityResolver::new(&store);
    assert_eq!(resolver.of_classifier(inner), EffectiveVisibility::Private);
}

/// Protected members order by the subclass relation of their classes, with
/// the subclass side the more restrictive one.
#[test]
fn protected_members_order_by_subclassing() {
    let mut store = DeclStore::new();
    let parent = store.add_class(ClassDescriptor::new("Parent", Visibility::Public));
    let parent_ty = store.add_type(TypeDescriptor::of_class(parent));
    let child = store
        .add_class(ClassDescriptor::new("Child", Visibility::Public).with_supertype(parent_ty));

    let in_parent = store.add_member(
        MemberDescriptor::new("m", MemberKind::Function, Visibility::Protected)
            .with_containing(parent),
    );
    let in_child = store.add_member(
        MemberDescriptor::new("m", MemberKind::Function, Visibility::Protected)
            .with_containing(child),
    );

    let resolver = VisibilityResolver::new(&store);
    let parent_vis = resolver.of_member(in_parent);
    let child_vis = resolver.of_member(in_child);

    assert_eq!(parent_vis, EffectiveVisibility::Protected(Some(parent)));
    assert_eq!(child_vis, EffectiveVisibility::Protected(Some(child)));
    assert_eq!(child_vis.relation(parent_vis, &store), Relation::Worse);
    assert_eq!(parent_vis.relation(child_vis, &store), Relation::Better);
}

/// Deep containment chains dominate everything declared inside them.
#[test]
fn deep_nesting_is_dominated_by_the_tightest_level() {
    let mut store = DeclStore::new();
    let top = store.add_class(ClassDescriptor::new("Top", Visibility::Public));
    let mid = store
        .add_class(ClassDescriptor::new("Mid", Visibility::Internal).with_containing(top));
    let leaf = store
        .add_class(ClassDescriptor::new("Leaf", Visibility::Public).with_containing(mid));
    let leaf_ty = store.add_type(TypeDescriptor::of_class(leaf));

    let resolver = VisibilityResolver::new(&store);
    assert_eq!(resolver.of_type(leaf_ty), EffectiveVisibility::Internal);
}
