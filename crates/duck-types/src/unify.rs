//! Unification of observed type sets.
//!
//! Later inference phases record several independent observations for
//! one slot; [`unify`] collapses them into the minimal canonical type
//! covering all of them. The algorithm flattens `Optional`/`Union`
//! nesting, merges single-argument generic applications that share a
//! base (`List[Int] + List[Float] -> List[Union(Float, Int)]`), and only
//! then decides between identity, `Optional`, and `Union`.

use rustc_hash::FxHashSet;

use crate::ty::{GenericTy, Ty};

/// Compute the minimal canonical type covering every observation.
///
/// Total over any input; the contract is a nonempty sequence, and an
/// empty one yields [`Ty::None`].
pub fn unify(types: &[Ty]) -> Ty {
    let mut flat = Vec::new();
    let mut seen = FxHashSet::default();
    for ty in types {
        flatten_into(ty, &mut flat, &mut seen);
    }

    // Partition out single-argument generic applications, grouped by
    // their shared base. Multi-arity applications are not merged.
    let mut candidates: Vec<Ty> = Vec::new();
    let mut groups: Vec<(GenericTy, Vec<Ty>)> = Vec::new();
    for ty in flat {
        match ty {
            Ty::Concrete(concrete) if concrete.base.arity == 1 => {
                let mut args = concrete.args;
                let arg = args.remove(0);
                match groups.iter_mut().find(|(base, _)| *base == concrete.base) {
                    Some((_, members)) => members.push(arg),
                    None => groups.push((concrete.base, vec![arg])),
                }
            }
            other => candidates.push(other),
        }
    }
    for (base, args) in groups {
        candidates.push(base.apply(vec![unify(&args)]));
    }

    match candidates.len() {
        0 => return Ty::None,
        1 => return candidates.remove(0),
        _ => {}
    }
    if let Some(index) = candidates.iter().position(|ty| *ty == Ty::None) {
        candidates.remove(index);
        return match candidates.len() {
            0 => Ty::None,
            1 => Ty::optional(candidates.remove(0)),
            _ => Ty::optional(Ty::union(candidates)),
        };
    }
    Ty::union(candidates)
}

/// Recursively expand `Optional` and `Union` wrappers, deduplicating by
/// structural equality while keeping first-seen order.
fn flatten_into(ty: &Ty, out: &mut Vec<Ty>, seen: &mut FxHashSet<Ty>) {
    match ty {
        Ty::Optional(inner) => {
            flatten_into(inner, out, seen);
            flatten_into(&Ty::None, out, seen);
        }
        Ty::Union(members) => {
            for member in members {
                flatten_into(member, out, seen);
            }
        }
        other => {
            if seen.insert(other.clone()) {
                out.push(other.clone());
            }
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────
