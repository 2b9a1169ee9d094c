use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value, json};

use crate::scene::{Circle, Drawable, Frame, Group, ShapeKind};

use super::IngestError;

/// Per-document ingestion counters.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct IngestReport {
    /// Objects turned into drawables (known or unknown shape).
    pub accepted: usize,
    /// Objects with an unrecognized shape tag.
    pub unknown: usize,
    /// Malformed objects dropped.
    pub skipped: usize,
}

#[derive(Debug, Deserialize)]
struct WireCircle {
    x: f32,
    y: f32,
    r: f32,
    #[serde(rename = "Color", alias = "color")]
    color: String,
    #[serde(rename = "Filled", alias = "filled", default, deserialize_with = "filled_flag")]
    filled: bool,
}

fn filled_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => b,
        Value::String(s) => s == "true",
        _ => false,
    })
}

pub fn parse_frame(input: &str) -> Result<Frame, IngestError> {
    parse_frame_with_report(input).map(|(frame, _)| frame)
}

pub fn parse_frame_with_report(input: &str) -> Result<(Frame, IngestReport), IngestError> {
    let value: Value = serde_json::from_str(input)?;
    parse_frame_value(value)
}

/// Builds a frame from an already-parsed JSON document.
pub fn parse_frame_value(value: Value) -> Result<(Frame, IngestReport), IngestError> {
    let groups: Vec<(String, Value)> = match value {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(i, v)| (i.to_string(), v))
            .collect(),
        Value::Object(map) => ordered_layers(map),
        Value::Null => return Err(IngestError::NotAFrame("null")),
        Value::Bool(_) => return Err(IngestError::NotAFrame("a boolean")),
        Value::Number(_) => return Err(IngestError::NotAFrame("a number")),
        Value::String(_) => return Err(IngestError::NotAFrame("a string")),
    };

    let mut report = IngestReport::default();
    let mut frame = Frame::new();

    for (key, group) in groups {
        let Value::Array(objects) = group else {
            return Err(IngestError::GroupNotArray { key });
        };

        let mut out: Group = Vec::with_capacity(objects.len());
        for (i, object) in objects.into_iter().enumerate() {
            match decode_object(object) {
                Ok(drawable) => {
                    if matches!(drawable, Drawable::Unknown { .. }) {
                        report.unknown += 1;
                    }
                    report.accepted += 1;
                    out.push(drawable);
                }
                Err(reason) => {
                    log::warn!("skipping malformed object {i} in group `{key}`: {reason}");
                    report.skipped += 1;
                }
            }
        }
        frame.push_group(out);
    }

    log::trace!(
        "ingested frame: {} drawables ({} unknown, {} skipped)",
        report.accepted,
        report.unknown,
        report.skipped
    );
    Ok((frame, report))
}

/// Layer-keyed groups, numeric keys ascending, then the rest lexically.
fn ordered_layers(map: Map<String, Value>) -> Vec<(String, Value)> {
    let mut entries: Vec<(String, Value)> = map.into_iter().collect();
    entries.sort_by(|(a, _), (b, _)| match (a.parse::<i64>(), b.parse::<i64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        (Ok(_), Err(_)) => core::cmp::Ordering::Less,
        (Err(_), Ok(_)) => core::cmp::Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    });
    entries
}

fn decode_object(object: Value) -> Result<Drawable, String> {
    let Value::Object(fields) = &object else {
        return Err("not a JSON object".to_string());
    };

    let tag = fields
        .get("Shape")
        .or_else(|| fields.get("shape"))
        .ok_or_else(|| "missing `Shape`".to_string())?;
    let Value::String(tag) = tag else {
        return Err("`Shape` is not a string".to_string());
    };

    let Some(kind) = ShapeKind::from_tag(tag) else {
        return Ok(Drawable::unknown(tag.clone()));
    };

    match kind {
        ShapeKind::Circle => {
            let wire: WireCircle = serde_json::from_value(object).map_err(|e| e.to_string())?;
            Ok(Drawable::Circle(Circle::new(wire.x, wire.y, wire.r, wire.color, wire.filled)))
        }
    }
}

/// Serializes a frame in the layer-object wire form.
///
/// Group `i` is emitted under key `"i"`; `Filled` is written as the strings
/// `"true"`/`"false"` the way the simulation server sends it.
pub fn frame_to_json(frame: &Frame) -> Value {
    let mut layers = Map::new();
    for (i, group) in frame.groups().iter().enumerate() {
        let objects: Vec<Value> = group
            .iter()
            .map(|d| match d {
                Drawable::Circle(c) => {
                    let filled = if c.filled { "true" } else { "false" };
                    json!({
                        "Shape": ShapeKind::Circle.tag(),
                        "x": c.x,
                        "y": c.y,
                        "r": c.r,
                        "Color": c.color,
                        "Filled": filled,
                        "Layer": i,
                    })
                }
                Drawable::Unknown { shape } => json!({ "Shape": shape, "Layer": i }),
            })
            .collect();
        layers.insert(i.to_string(), Value::Array(objects));
    }
    Value::Object(layers)
}
