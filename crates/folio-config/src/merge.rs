//! Deep merge of JSON values used to lay mode overlays onto a base plan.
//!
//! Objects merge key by key, arrays concatenate (base first), and any other
//! update value replaces what was there.

use serde_json::Value;

pub fn merge_values(target: &mut Value, update: &Value) {
    match (target, update) {
        (Value::Object(target_map), Value::Object(update_map)) => {
            for (key, value) in update_map {
                merge_values(target_map.entry(key.clone()).or_insert(Value::Null), value);
            }
        }
        (Value::Array(target_items), Value::Array(update_items)) => {
            target_items.extend(update_items.iter().cloned());
        }
        (target_slot, _) => {
            *target_slot = update.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalars_are_replaced() {
        let mut base = json!({ "devtool": "source-map", "stats": "errors-warnings" });
        merge_values(&mut base, &json!({ "devtool": "eval-cheap-module-source-map" }));
        assert_eq!(
            base,
            json!({ "devtool": "eval-cheap-module-source-map", "stats": "errors-warnings" })
        );
    }

    #[test]
    fn arrays_are_concatenated_base_first() {
        let mut base = json!({ "plugins": [{ "kind": "a" }, { "kind": "b" }] });
        merge_values(&mut base, &json!({ "plugins": [{ "kind": "c" }] }));
        assert_eq!(
            base["plugins"],
            json!([{ "kind": "a" }, { "kind": "b" }, { "kind": "c" }])
        );
    }

    #[test]
    fn nested_objects_merge_and_missing_keys_are_added() {
        let mut base = json!({ "output": { "path": "/dist", "filename": "[name].js" } });
        merge_values(
            &mut base,
            &json!({
                "output": { "filename": "[name].[hash:8].js" },
                "dev_server": { "port": 9200 }
            }),
        );
        assert_eq!(base["output"]["path"], "/dist");
        assert_eq!(base["output"]["filename"], "[name].[hash:8].js");
        assert_eq!(base["dev_server"]["port"], 9200);
    }

    #[test]
    fn array_onto_scalar_replaces() {
        let mut base = json!({ "plugins": null });
        merge_values(&mut base, &json!({ "plugins": [1] }));
        assert_eq!(base["plugins"], json!([1]));
    }

    #[test]
    fn key_order_is_preserved() {
        let mut base = json!({ "home": 1, "about": 2 });
        merge_values(&mut base, &json!({ "contact": 3 }));
        let keys: Vec<_> = base.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["home", "about", "contact"]);
    }
}
