//! Command-line flags as the top configuration layer.

use crate::cli::{PlanArgs, ProjectArgs};
use folio_config::merge::merge_values;
use serde_json::{Value, json};

/// Overrides shared by every command. Only flags that were given appear.
pub fn project_overrides(args: &ProjectArgs) -> Value {
    let mut layer = json!({});

    if let Some(pages) = &args.pages {
        // A pages file on the command line replaces inline pages from config
        merge_values(&mut layer, &json!({ "pages": [], "pages_file": pages }));
    }
    if let Some(out_dir) = &args.out_dir {
        merge_values(&mut layer, &json!({ "layout": { "output_dir": out_dir } }));
    }

    layer
}

/// Overrides for `folio plan`.
pub fn plan_overrides(args: &PlanArgs) -> Value {
    let mut layer = project_overrides(&args.project);

    if let Some(mode) = &args.mode {
        merge_values(&mut layer, &json!({ "mode": mode }));
    }
    if args.strict {
        merge_values(&mut layer, &json!({ "settings": { "mode_policy": "strict" } }));
    }
    if let Some(port) = args.port {
        merge_values(&mut layer, &json!({ "dev": { "port": port } }));
    }
    if args.no_open {
        merge_values(&mut layer, &json!({ "dev": { "open": false } }));
    }

    layer
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn plan_args() -> PlanArgs {
        PlanArgs {
            project: ProjectArgs::default(),
            mode: None,
            output: None,
            strict: false,
            port: None,
            no_open: false,
        }
    }

    #[test]
    fn no_flags_no_overrides() {
        assert_eq!(plan_overrides(&plan_args()), json!({}));
    }

    #[test]
    fn pages_flag_clears_inline_pages() {
        let args = ProjectArgs {
            pages: Some(PathBuf::from("pages.json")),
            ..ProjectArgs::default()
        };
        assert_eq!(
            project_overrides(&args),
            json!({ "pages": [], "pages_file": "pages.json" })
        );
    }

    #[test]
    fn dev_flags_share_one_table() {
        let args = PlanArgs {
            port: Some(3000),
            no_open: true,
            strict: true,
            mode: Some("development".to_string()),
            ..plan_args()
        };
        assert_eq!(
            plan_overrides(&args),
            json!({
                "mode": "development",
                "settings": { "mode_policy": "strict" },
                "dev": { "port": 3000, "open": false }
            })
        );
    }
}
