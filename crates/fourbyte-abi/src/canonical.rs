//! Canonical signature construction from ABI function descriptors
//!
//! A function's canonical ("folded") signature is its name followed by the
//! comma-joined list of its input types, with every `tuple` type expanded
//! into a parenthesized list of its component types. Tuples nest to
//! arbitrary depth, and array suffixes on tuple types carry over
//! (`tuple[]` becomes `(...)[]`, `tuple[3]` becomes `(...)[3]`).
//!
//! Parameter names are normalized the way the existing database expects:
//! an empty name becomes `param<N>` (1-based position), and any name not
//! already starting with an underscore gets one prepended. This is a
//! convention inherited from the ingested corpus, not an ABI rule.

use serde::{Deserialize, Serialize};

/// Structural defect in an ABI function descriptor.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AbiError {
    #[error("tuple parameter '{param}' of function '{function}' has no components")]
    MissingTupleComponents { function: String, param: String },
}

/// One input parameter of an ABI function descriptor.
///
/// `components` is only present for tuple types and holds the nested
/// parameter list, in the same shape.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AbiInput {
    #[serde(rename = "type", default)]
    pub ty: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub components: Option<Vec<AbiInput>>,
}

/// One entry of a contract ABI document.
///
/// Entries describe functions, constructors, events and so on; only
/// function entries (or entries with no declared kind) take part in
/// selector derivation.
#[derive(Debug, Clone, Deserialize)]
pub struct AbiEntry {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub inputs: Vec<AbiInput>,
}

impl AbiEntry {
    /// Whether this entry participates in selector derivation.
    pub fn is_function(&self) -> bool {
        self.kind.as_deref().map_or(true, |kind| kind == "function")
    }
}

/// A normalized `{type, name}` parameter, as stored in the `params` JSON
/// column. The type is the declared ABI type (`tuple[]` stays `tuple[]`
/// here; only the folded signature expands it).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    #[serde(rename = "type")]
    pub ty: String,
    pub name: String,
}

/// Canonical form of one function descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalSignature {
    /// `name(type,type,...)` with tuples fully expanded.
    pub folded_name: String,
    /// Normalized parameters, one per top-level input, in input order.
    pub params: Vec<Param>,
}

/// Fold a function name and its inputs into the canonical signature.
///
/// Pure; fails only when a tuple-typed input lacks its `components` list,
/// which would otherwise produce a silently wrong signature.
pub fn canonicalize(name: &str, inputs: &[AbiInput]) -> Result<CanonicalSignature, AbiError> {
    let (joined, params) = fold_inputs(name, inputs)?;
    Ok(CanonicalSignature {
        folded_name: format!("{name}({joined})"),
        params,
    })
}

/// Recursively fold an input list into its comma-joined type string and
/// normalized parameter list.
fn fold_inputs(function: &str, inputs: &[AbiInput]) -> Result<(String, Vec<Param>), AbiError> {
    let mut types = Vec::with_capacity(inputs.len());
    let mut params = Vec::with_capacity(inputs.len());

    for (index, input) in inputs.iter().enumerate() {
        params.push(Param {
            ty: input.ty.clone(),
            name: normalize_name(&input.name, index + 1),
        });

        if input.ty.contains("tuple") {
            let components =
                input
                    .components
                    .as_deref()
                    .ok_or_else(|| AbiError::MissingTupleComponents {
                        function: function.to_string(),
                        param: input.name.clone(),
                    })?;
            let (inner, _) = fold_inputs(function, components)?;
            // Carry the array suffix after the literal "tuple" prefix.
            let suffix = input.ty.get("tuple".len()..).unwrap_or("");
            types.push(format!("({inner}){suffix}"));
        } else {
            types.push(input.ty.clone());
        }
    }

    Ok((types.join(","), params))
}

/// Normalize a parameter name: empty names are synthesized from the
/// 1-based position, and the underscore prefix convention is applied to
/// the result either way.
fn normalize_name(raw: &str, position: usize) -> String {
    let name = if raw.is_empty() {
        format!("param{position}")
    } else {
        raw.to_string()
    };
    if name.starts_with('_') {
        name
    } else {
        format!("_{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(ty: &str, name: &str) -> AbiInput {
        AbiInput {
            ty: ty.to_string(),
            name: name.to_string(),
            components: None,
        }
    }

    #[test]
    fn test_transfer_round_trip() {
        let sig = canonicalize(
            "transfer",
            &[input("address", "to"), input("uint256", "value")],
        )
        .unwrap();

        assert_eq!(sig.folded_name, "transfer(address,uint256)");
        assert_eq!(
            sig.params,
            vec![
                Param {
                    ty: "address".to_string(),
                    name: "_to".to_string()
                },
                Param {
                    ty: "uint256".to_string(),
                    name: "_value".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_empty_names_are_synthesized() {
        let sig = canonicalize("f", &[input("uint8", ""), input("bool", "")]).unwrap();
        assert_eq!(sig.params[0].name, "_param1");
        assert_eq!(sig.params[1].name, "_param2");
    }

    #[test]
    fn test_underscored_names_are_preserved() {
        let sig = canonicalize("f", &[input("address", "_owner")]).unwrap();
        assert_eq!(sig.params[0].name, "_owner");
    }

    #[test]
    fn test_no_inputs() {
        let sig = canonicalize("dexRouterAddress", &[]).unwrap();
        assert_eq!(sig.folded_name, "dexRouterAddress()");
        assert!(sig.params.is_empty());
    }

    #[test]
    fn test_tuple_array_expansion() {
        let sig = canonicalize(
            "f",
            &[AbiInput {
                ty: "tuple[]".to_string(),
                name: "items".to_string(),
                components: Some(vec![input("address", "who"), input("uint256", "amount")]),
            }],
        )
        .unwrap();

        assert_eq!(sig.folded_name, "f((address,uint256)[])");
        // The declared type is kept in the params list.
        assert_eq!(sig.params[0].ty, "tuple[]");
    }

    #[test]
    fn test_fixed_size_tuple_array_suffix() {
        let sig = canonicalize(
            "f",
            &[AbiInput {
                ty: "tuple[3]".to_string(),
                name: "slots".to_string(),
                components: Some(vec![input("bytes32", "slot")]),
            }],
        )
        .unwrap();

        assert_eq!(sig.folded_name, "f((bytes32)[3])");
    }

    #[test]
    fn test_nested_tuples() {
        let inner = AbiInput {
            ty: "tuple".to_string(),
            name: "leg".to_string(),
            components: Some(vec![input("address", "token"), input("uint256", "amount")]),
        };
        let outer = AbiInput {
            ty: "tuple[]".to_string(),
            name: "orders".to_string(),
            components: Some(vec![input("address", "maker"), inner]),
        };

        let sig = canonicalize("submit", &[outer]).unwrap();
        assert_eq!(
            sig.folded_name,
            "submit((address,(address,uint256))[])"
        );
    }

    #[test]
    fn test_tuple_without_components_is_rejected() {
        let err = canonicalize(
            "broken",
            &[AbiInput {
                ty: "tuple".to_string(),
                name: "opaque".to_string(),
                components: None,
            }],
        )
        .unwrap_err();

        assert_eq!(
            err,
            AbiError::MissingTupleComponents {
                function: "broken".to_string(),
                param: "opaque".to_string(),
            }
        );
    }

    #[test]
    fn test_entry_kind_filtering() {
        let entry: AbiEntry =
            serde_json::from_str(r#"{"type": "function", "name": "transfer", "inputs": []}"#)
                .unwrap();
        assert!(entry.is_function());

        let untyped: AbiEntry = serde_json::from_str(r#"{"name": "legacy", "inputs": []}"#).unwrap();
        assert!(untyped.is_function());

        for kind in ["constructor", "fallback", "event", "receive", "error"] {
            let entry: AbiEntry =
                serde_json::from_str(&format!(r#"{{"type": "{kind}", "inputs": []}}"#)).unwrap();
            assert!(!entry.is_function(), "{kind} must be skipped");
        }
    }

    #[test]
    fn test_descriptor_deserializes_from_abi_json() {
        let entry: AbiEntry = serde_json::from_str(
            r#"{
                "type": "function",
                "name": "swap",
                "inputs": [
                    {"type": "tuple", "name": "order", "components": [
                        {"type": "address", "name": "maker"},
                        {"type": "uint256", "name": ""}
                    ]}
                ]
            }"#,
        )
        .unwrap();

        let sig = canonicalize(&entry.name, &entry.inputs).unwrap();
        assert_eq!(sig.folded_name, "swap((address,uint256))");
        assert_eq!(sig.params[0].name, "_order");
    }
}
