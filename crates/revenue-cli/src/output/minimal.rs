use serde_json::Value;

use super::{result_of, scalar_text};

/// Headline fields, most specific first.
const PRIORITY_KEYS: [&str; 6] = [
    "change",
    "collectionRate",
    "revenueChange",
    "totalRevenue",
    "preferences",
    "currentCollectionRate",
];

/// Print just the key answer value from the output.
///
/// Looks for well-known fields in the result (and in a nested `summary`),
/// falling back to a count for lists and the first field for other objects.
pub fn print_minimal(value: &Value) {
    println!("{}", minimal_text(value));
}

fn minimal_text(value: &Value) -> String {
    let result = result_of(value);

    let Value::Object(map) = result else {
        return match result {
            Value::Array(items) => items.len().to_string(),
            other => scalar_text(other),
        };
    };

    let scopes = [Some(result), map.get("summary")];
    for scope in scopes.into_iter().flatten() {
        for key in PRIORITY_KEYS {
            match scope.get(key) {
                Some(Value::Null) | None => continue,
                Some(Value::Object(prefs)) => {
                    let parts: Vec<String> = prefs.values().map(scalar_text).collect();
                    return parts.join(" ");
                }
                Some(val) => return scalar_text(val),
            }
        }
    }

    map.iter()
        .next()
        .map(|(key, val)| format!("{}: {}", key, scalar_text(val)))
        .unwrap_or_default()
}
