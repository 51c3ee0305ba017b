//! Tagged-JSON encoding of type expressions.
//!
//! One-directional: the output uniquely encodes a type's structure for
//! external consumers, but is not read back. The compact encoding also
//! serves as the canonical ordering key for union members.

use serde::ser::{Serialize, Serializer};
use serde_json::{json, Value};

use crate::ty::{FunctionTy, ObjectTy, Ty, Variable};

impl Ty {
    /// Encode this type as a tagged JSON object (`kind` discriminator
    /// plus the variant's fields, recursively).
    pub fn to_json(&self) -> Value {
        match self {
            Ty::Simple(label) => json!({ "kind": "Simple", "label": label }),
            Ty::None => json!({ "kind": "Void" }),
            Ty::Function(fun) => fun.to_json(),
            Ty::Overloads(set) => json!({
                "kind": "MethodOverload",
                "label": set.label,
                "overloads": set.overloads.iter().map(FunctionTy::to_json).collect::<Vec<_>>(),
            }),
            Ty::Generic(generic) => json!({
                "kind": "Generic",
                "klass": generic.label,
                "length": generic.arity,
            }),
            Ty::Concrete(concrete) => json!({
                "kind": "Concrete",
                "label": concrete.base.label,
                "types": concrete.args.iter().map(Ty::to_json).collect::<Vec<_>>(),
            }),
            Ty::Optional(inner) => json!({ "kind": "Optional", "type": inner.to_json() }),
            Ty::Union(members) => json!({
                "kind": "PyTypeUnion",
                "types": members.iter().map(Ty::to_json).collect::<Vec<_>>(),
            }),
            Ty::Object(object) => object.to_json(),
            Ty::Tuple(elements) => json!({
                "kind": "Tuple",
                "elements": elements.iter().map(Ty::to_json).collect::<Vec<_>>(),
            }),
        }
    }

    /// The compact JSON string for this type.
    ///
    /// Key order inside objects is fixed by the encoder, so this string
    /// is a stable, total ordering key over type expressions.
    pub fn canonical_key(&self) -> String {
        self.to_json().to_string()
    }
}

impl FunctionTy {
    fn to_json(&self) -> Value {
        json!({
            "kind": "Method",
            "label": self.label,
            // Parameter types only; names live in `variables`.
            "args": self.args.iter().map(|arg| arg.ty.to_json()).collect::<Vec<_>>(),
            "variables": self.locals.iter().map(Variable::to_json).collect::<Vec<_>>(),
            "returnType": self.return_type.to_json(),
        })
    }
}

impl ObjectTy {
    fn to_json(&self) -> Value {
        json!({
            "kind": "Object",
            "label": self.label,
            "base": match &self.base {
                Some(base) => base.to_json(),
                None => Value::Null,
            },
            "inherited": self.inherited,
            "fields": self.fields.iter().map(|(label, ty)| json!({
                "label": label,
                "type": ty.to_json(),
            })).collect::<Vec<_>>(),
        })
    }
}

impl Variable {
    fn to_json(&self) -> Value {
        json!({ "label": self.label, "type": self.ty.to_json() })
    }
}

impl Serialize for Ty {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ty::GenericTy;

    #[test]
    fn simple_and_void_tags() {
        assert_eq!(
            Ty::int().to_json(),
            json!({ "kind": "Simple", "label": "Int" })
        );
        assert_eq!(Ty::None.to_json(), json!({ "kind": "Void" }));
    }

    #[test]
    fn concrete_encodes_base_and_arguments() {
        assert_eq!(
            Ty::list(Ty::int()).to_json(),
            json!({
                "kind": "Concrete",
                "label": "List",
                "types": [{ "kind": "Simple", "label": "Int" }],
            })
        );
    }

    #[test]
    fn generic_encodes_arity() {
        assert_eq!(
            Ty::Generic(GenericTy::hash()).to_json(),
            json!({ "kind": "Generic", "klass": "Hash", "length": 2 })
        );
    }

    #[test]
    fn method_separates_arg_types_from_named_locals() {
        let fun = Ty::function(
            "f",
            vec![Variable::new("x", Ty::int())],
            vec![Variable::new("acc", Ty::float())],
            Ty::None,
        );
        assert_eq!(
            fun.to_json(),
            json!({
                "kind": "Method",
                "label": "f",
                "args": [{ "kind": "Simple", "label": "Int" }],
                "variables": [
                    { "label": "acc", "type": { "kind": "Simple", "label": "Float" } }
                ],
                "returnType": { "kind": "Void" },
            })
        );
    }

    #[test]
    fn optional_and_union_tags() {
        let merged = Ty::optional(Ty::union(vec![Ty::int(), Ty::float()]));
        assert_eq!(
            merged.to_json(),
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

    #[test]
    fn object_encodes_base_and_ordered_fields() {
        let base = ObjectTy {
            label: "Animal".into(),
            base: None,
            inherited: false,
            fields: vec![("name".into(), Ty::string())],
        };
        let object = Ty::Object(ObjectTy {
            label: "Duck".into(),
            base: Some(Box::new(base)),
            inherited: true,
            fields: vec![("wingspan".into(), Ty::float())],
        });
        assert_eq!(
            object.to_json(),
            json!({
                "kind": "Object",
                "label": "Duck",
                "base": {
                    "kind": "Object",
                    "label": "Animal",
                    "base": null,
                    "inherited": false,
                    "fields": [
                        { "label": "name", "type": { "kind": "Simple", "label": "String" } }
                    ],
                },
                "inherited": true,
                "fields": [
                    { "label": "wingspan", "type": { "kind": "Simple", "label": "Float" } }
                ],
            })
        );
    }

    #[test]
    fn tuple_and_overload_tags() {
        use crate::ty::OverloadSet;
        assert_eq!(
            Ty::tuple(vec![Ty::int()]).to_json(),
            json!({
                "kind": "Tuple",
                "elements": [{ "kind": "Simple", "label": "Int" }],
            })
        );
        let overloads = Ty::Overloads(OverloadSet {
            label: "f".into(),
            overloads: vec![FunctionTy {
                label: "f".into(),
                args: vec![],
                locals: vec![],
                return_type: Box::new(Ty::None),
            }],
        });
        assert_eq!(overloads.to_json()["kind"], json!("MethodOverload"));
        assert_eq!(overloads.to_json()["overloads"][0]["kind"], json!("Method"));
    }

    #[test]
    fn canonical_key_orders_members_deterministically() {
        let a = Ty::union(vec![Ty::int(), Ty::float()]);
        let b = Ty::union(vec![Ty::float(), Ty::int()]);
        assert_eq!(a.canonical_key(), b.canonical_key());
    }
}
