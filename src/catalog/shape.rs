//! Response envelope tolerance.
//!
//! The catalog service may answer with the payload bare or wrapped under a
//! named field. Accepted shapes are tried in order and the first one whose
//! contents decode wins.

use super::tool::Tool;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

/// Where the payload sits inside a response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    /// The body is the payload.
    Bare,
    /// The payload is under this field of a JSON object.
    Envelope(&'static str),
}

impl ResponseShape {
    /// Locate the payload candidate for this shape, if present.
    pub fn extract<'a>(&self, body: &'a Value) -> Option<&'a Value> {
        match self {
            ResponseShape::Bare => Some(body),
            ResponseShape::Envelope(field) => body.as_object()?.get(*field),
        }
    }
}

/// Shapes accepted from `GET /api/tools`.
pub const TOOL_LIST_SHAPES: &[ResponseShape] =
    &[ResponseShape::Bare, ResponseShape::Envelope("tools")];

/// Shapes accepted from `GET /api/tools/{id}`.
pub const TOOL_SHAPES: &[ResponseShape] = &[ResponseShape::Bare, ResponseShape::Envelope("tool")];

/// Decode `body` with the first shape whose payload type-matches.
pub fn decode_first<T: DeserializeOwned>(
    shapes: &[ResponseShape],
    body: &Value,
) -> Option<(ResponseShape, T)> {
    shapes.iter().find_map(|shape| {
        let payload = shape.extract(body)?;
        T::deserialize(payload).ok().map(|value| (*shape, value))
    })
}

pub fn decode_tool_list(body: &Value) -> Option<Vec<Tool>> {
    decode_first(TOOL_LIST_SHAPES, body).map(|(_, tools)| tools)
}

pub fn decode_tool(body: &Value) -> Option<Tool> {
    decode_first(TOOL_SHAPES, body).map(|(_, tool)| tool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use serde_json::json;

    fn tool_json(id: u32, name: &str, available: bool) -> Value {
        json!({"id": id.to_string(), "name": name, "category": "Tools", "condition": "Good", "available": available})
    }

    #[test]
    fn test_bare_list() {
        let body = json!([tool_json(7, "Wrench", true), tool_json(8, "Saw", false)]);
        let (shape, tools): (ResponseShape, Vec<Tool>) = decode_first(TOOL_LIST_SHAPES, &body).unwrap();
        assert_eq!(shape, ResponseShape::Bare);
        assert_eq!(tools[0].name, "Wrench");
        assert_eq!(tools[1].name, "Saw");
    }

    #[test]
    fn test_enveloped_list() {
        let body = json!({"tools": [tool_json(7, "Wrench", true)]});
        let (shape, tools): (ResponseShape, Vec<Tool>) = decode_first(TOOL_LIST_SHAPES, &body).unwrap();
        assert_eq!(shape, ResponseShape::Envelope("tools"));
        assert_eq!(tools.len(), 1);
    }

    #[test]
    fn test_empty_list_is_valid() {
        assert_eq!(decode_tool_list(&json!([])), Some(vec![]));
        assert_eq!(decode_tool_list(&json!({"tools": []})), Some(vec![]));
    }

    #[test]
    fn test_unrecognized_lists() {
        for body in [
            json!(42),
            json!(null),
            json!("tools"),
            json!({"tools": "x"}),
            json!({"items": []}),
            json!([{"id": "1"}]),
            json!({"tools": [{"id": "1", "name": "Drill"}]}),
        ] {
            assert_eq!(decode_tool_list(&body), None, "accepted {body}");
        }
    }

    #[test]
    fn test_single_tool_shapes() {
        let bare = tool_json(2, "Hammer", true);
        assert_eq!(decode_tool(&bare).unwrap().name, "Hammer");

        let wrapped = json!({"tool": {"id": 2, "name": "Hammer", "category": "Tools", "condition": "Fair", "available": true}});
        let tool = decode_tool(&wrapped).unwrap();
        assert_eq!(tool.id, "2");

        assert_eq!(decode_tool(&json!({"tool": null})), None);
        assert_eq!(decode_tool(&json!([bare])), None);
    }

    #[test]
    fn test_bare_shape_checked_first() {
        let mut body = tool_json(1, "Outer", true);
        body["tool"] = tool_json(2, "Inner", true);
        let (shape, tool): (ResponseShape, Tool) = decode_first(TOOL_SHAPES, &body).unwrap();
        assert_eq!(shape, ResponseShape::Bare);
        assert_eq!(tool.name, "Outer");
    }

    fn arb_tool() -> impl Strategy<Value = Tool> {
        (
            1u32..10_000,
            "[A-Za-z ]{1,20}",
            "[A-Za-z]{1,10}",
            "[A-Za-z]{1,10}",
            any::<bool>(),
        )
            .prop_map(|(id, name, category, condition, available)| {
                Tool::new(id, name, category, condition, available)
            })
    }

    proptest! {
        #[test]
        fn prop_bare_list_returned_unchanged(tools in prop::collection::vec(arb_tool(), 0..16)) {
            let body = serde_json::to_value(&tools).unwrap();
            prop_assert_eq!(decode_tool_list(&body), Some(tools));
        }

        #[test]
        fn prop_enveloped_list_returns_inner(tools in prop::collection::vec(arb_tool(), 0..16)) {
            let body = json!({"tools": tools});
            prop_assert_eq!(decode_tool_list(&body), Some(tools));
        }

        #[test]
        fn prop_scalars_never_match(n in any::<i64>(), s in ".*", b in any::<bool>()) {
            prop_assert_eq!(decode_tool_list(&json!(n)), None);
            prop_assert_eq!(decode_tool_list(&json!(s)), None);
            prop_assert_eq!(decode_tool_list(&json!({"tools": b})), None);
        }
    }
}
