//! One-level merge of persisted data over defaults.

use serde_json::Value;

/// The record sections merged one level deep.
const SECTIONS: [&str; 4] = ["meta", "step1", "step2", "step3"];

/// Merge `persisted` over `defaults`, one level deep.
///
/// Top-level keys from `persisted` survive verbatim, except that when both
/// sides hold an object under one of the known sections the section is
/// spread shallowly: persisted keys override default keys, defaults fill
/// the rest. Nested objects inside a section are replaced wholesale, not
/// merged. This tolerates schema drift in both directions: an older blob
/// missing a newly introduced field gets that field's default, and a field
/// whose shape changed entirely is simply replaced.
pub fn merge_with_defaults(defaults: Value, persisted: Value) -> Value {
    let Value::Object(mut out) = defaults else {
        return persisted;
    };
    let Value::Object(persisted) = persisted else {
        return Value::Object(out);
    };

    for (key, value) in persisted {
        match value {
            Value::Object(overlay) if SECTIONS.contains(&key.as_str()) => {
                match out.get_mut(&key) {
                    Some(Value::Object(base)) => {
                        for (k, v) in overlay {
                            base.insert(k, v);
                        }
                    }
                    _ => {
                        out.insert(key, Value::Object(overlay));
                    }
                }
            }
            other => {
                out.insert(key, other);
            }
        }
    }

    Value::Object(out)
}
