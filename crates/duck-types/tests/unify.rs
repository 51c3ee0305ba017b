//! Integration tests for the type algebra: unification results and
//! their serialized form, exercised through the public API only.

use duck_types::{unify, GenericTy, Ty, Variable};
use serde_json::json;

/// `unify([T])` is the identity for any single observation, including
/// composite ones.
#[test]
fn identity_on_single_observations() {
    let cases = vec![
        Ty::int(),
        Ty::None,
        Ty::optional(Ty::string()),
        Ty::list(Ty::float()),
        Ty::tuple(vec![Ty::int(), Ty::string()]),
        Ty::function("f", vec![Variable::new("x", Ty::int())], vec![], Ty::None),
    ];
    for ty in cases {
        assert_eq!(unify(std::slice::from_ref(&ty)), ty);
    }
}

/// `Int + Float + None` serializes as an Optional over a canonical
/// union, whatever order the observations arrived in.
#[test]
fn optional_union_serialization_is_canonical() {
    let a = unify(&[Ty::int(), Ty::float(), Ty::None]);
    let b = unify(&[Ty::None, Ty::float(), Ty::int()]);
    assert_eq!(a, b);
    assert_eq!(
        a.to_json(),
        json!({
            "kind": "Optional",
            "type": {
                "kind": "PyTypeUnion",
                "types": [
                    { "kind": "Simple", "label": "Float" },
                    { "kind": "Simple", "label": "Int" },
                ],
            },
        })
    );
}

/// Observed `List[Int]` and `List[Float]` collapse into one list type
/// over a union, not a union of two lists.
#[test]
fn generic_observations_collapse_through_their_argument() {
    let merged = unify(&[Ty::list(Ty::int()), Ty::list(Ty::float())]);
    assert_eq!(
        merged.to_json(),
        json!({
            "kind": "Concrete",
            "label": "List",
            "types": [{
                "kind": "PyTypeUnion",
                "types": [
                    { "kind": "Simple", "label": "Float" },
                    { "kind": "Simple", "label": "Int" },
                ],
            }],
        })
    );
}

/// The merge recurses: list observations that themselves carry None
/// produce an optional element type.
#[test]
fn recursive_merge_builds_optional_elements() {
    let merged = unify(&[
        Ty::list(Ty::int()),
        Ty::list(Ty::None),
        Ty::None,
    ]);
    assert_eq!(
        merged,
        Ty::optional(Ty::list(Ty::optional(Ty::int())))
    );
}

/// Unifying repeatedly is stable: feeding a result back in changes
/// nothing.
#[test]
fn unify_is_idempotent() {
    let observations = [
        Ty::int(),
        Ty::float(),
        Ty::None,
        Ty::list(Ty::int()),
        Ty::list(Ty::string()),
    ];
    let once = unify(&observations);
    let twice = unify(std::slice::from_ref(&once));
    assert_eq!(once, twice);
}

/// Two-argument generics never merge; they stay distinct union members.
#[test]
fn multi_arity_generics_union_instead_of_merging() {
    let hash = GenericTy::hash();
    let a = hash.apply(vec![Ty::int(), Ty::string()]);
    let b = hash.apply(vec![Ty::int(), Ty::float()]);
    let merged = unify(&[a.clone(), b.clone()]);
    assert_eq!(merged, Ty::union(vec![a, b]));
}
