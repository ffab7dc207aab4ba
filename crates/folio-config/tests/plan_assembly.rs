//! End-to-end plan assembly across build modes.

use std::path::PathBuf;

use folio_config::{
    BuildPlan, ConfigError, DevOptions, Devtool, Mode, ModeOverlay, ModePolicy, PageDescriptor,
    ProjectLayout, SideEffect, apply_mode, assemble, build_base_plan,
};

fn site_pages() -> Vec<PageDescriptor> {
    vec![
        PageDescriptor::new("home", "Home"),
        PageDescriptor::new("about", "About"),
    ]
}

fn layout() -> ProjectLayout {
    ProjectLayout::rooted("/site")
}

fn plan_for(mode: &str) -> BuildPlan {
    assemble(
        mode,
        &site_pages(),
        &layout(),
        &DevOptions::default(),
        ModePolicy::Permissive,
    )
    .expect("plan assembles")
}

#[test]
fn production_plan_for_two_pages() {
    let plan = plan_for("production");

    assert_eq!(plan.mode, Mode::Production);
    assert_eq!(plan.entry_names().collect::<Vec<_>>(), vec!["home", "about"]);

    let chunks: Vec<_> = plan
        .artifacts()
        .map(|artifact| artifact.included_chunks.clone())
        .collect();
    assert_eq!(
        chunks,
        vec![
            vec!["manifest", "vendor", "home"],
            vec!["manifest", "vendor", "about"],
        ]
    );

    assert_eq!(plan.plugins_of_kind("minify_scripts").count(), 1);
    assert_eq!(plan.plugins_of_kind("minify_styles").count(), 1);
    assert_eq!(plan.plugins_of_kind("clean_output").count(), 1);
    assert_eq!(plan.plugins_of_kind("launch_browser").count(), 0);
    assert!(plan.dev_server.is_none());
    assert_eq!(plan.devtool, Some(Devtool::SourceMap));
}

#[test]
fn production_overlay_only_appends() {
    let base = build_base_plan(&Mode::Production, &site_pages(), &layout()).unwrap();
    let overlay = ModeOverlay::select(&Mode::Production, &layout(), &DevOptions::default());
    let plan = apply_mode(base.clone(), &overlay, ModePolicy::Permissive).unwrap();

    assert_eq!(
        plan.plugins.len(),
        base.plugins.len() + overlay.extra_plugins.len()
    );
    assert_eq!(&plan.plugins[..base.plugins.len()], &base.plugins[..]);
    assert_eq!(&plan.plugins[base.plugins.len()..], &overlay.extra_plugins[..]);

    match plan.plugins_of_kind("minify_scripts").next() {
        Some(SideEffect::MinifyScripts {
            parallel,
            cache,
            source_map,
        }) => assert!(*parallel && *cache && *source_map),
        other => panic!("expected script minification, got {other:?}"),
    }
    match plan.plugins_of_kind("clean_output").next() {
        Some(SideEffect::CleanOutput { paths }) => {
            assert_eq!(paths, &vec![PathBuf::from("/site/dist")]);
        }
        other => panic!("expected output cleanup, got {other:?}"),
    }
}

#[test]
fn development_plan_serves_on_fixed_port() {
    let plan = plan_for("development");

    let server = plan.dev_server.as_ref().expect("dev server settings");
    assert_eq!(server.host, "0.0.0.0");
    assert_eq!(server.port, 9200);
    assert_eq!(server.content_base, PathBuf::from("../"));
    assert!(server.hot);
    assert!(server.disable_host_check);

    assert_eq!(plan.devtool, Some(Devtool::EvalCheapModuleSourceMap));
    assert!(!plan.plugins.iter().any(SideEffect::is_production_only));

    let launches: Vec<_> = plan.plugins_of_kind("launch_browser").collect();
    assert_eq!(
        launches,
        vec![&SideEffect::LaunchBrowser {
            url: "http://localhost:9200".to_string()
        }]
    );
}

#[test]
fn development_overlay_keeps_base_side_effects() {
    let base = build_base_plan(&Mode::Development, &site_pages(), &layout()).unwrap();
    let plan = plan_for("development");
    assert_eq!(&plan.plugins[..base.plugins.len()], &base.plugins[..]);
    assert_eq!(plan.entries, base.entries);
    assert_eq!(plan.split, base.split);
}

#[test]
fn custom_dev_port_flows_into_server_and_browser_url() {
    let dev = DevOptions {
        port: 3000,
        ..DevOptions::default()
    };
    let plan = assemble(
        "development",
        &site_pages(),
        &layout(),
        &dev,
        ModePolicy::Permissive,
    )
    .unwrap();

    assert_eq!(plan.dev_server.unwrap().port, 3000);
    assert!(plan.plugins.contains(&SideEffect::LaunchBrowser {
        url: "http://localhost:3000".to_string()
    }));
}

#[test]
fn unknown_mode_passes_base_plan_through() {
    let base = build_base_plan(&Mode::from("staging"), &site_pages(), &layout()).unwrap();
    let plan = plan_for("staging");
    assert_eq!(plan, base);
    assert_eq!(plan.mode, Mode::Unknown("staging".to_string()));
}

#[test]
fn unknown_mode_is_rejected_under_strict_policy() {
    let err = assemble(
        "staging",
        &site_pages(),
        &layout(),
        &DevOptions::default(),
        ModePolicy::Strict,
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::UnknownMode(mode) if mode == "staging"));
}

#[test]
fn duplicate_pages_fail_before_any_plan_exists() {
    let mut pages = site_pages();
    pages.push(PageDescriptor::new("home", "Home (copy)"));

    let err = assemble(
        "production",
        &pages,
        &layout(),
        &DevOptions::default(),
        ModePolicy::Permissive,
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::DuplicatePage { name } if name == "home"));
}

#[test]
fn assembly_is_repeatable() {
    for mode in ["production", "development", "staging"] {
        assert_eq!(plan_for(mode), plan_for(mode));
    }
}

#[test]
fn serialized_plan_exposes_bundler_fields() {
    let value = plan_for("development").to_value().unwrap();

    assert_eq!(value["mode"], "development");
    assert_eq!(value["output"]["filename"], "[name].[hash:8].js");
    assert_eq!(value["runtime_chunk"], "manifest");
    assert_eq!(value["devtool"], "eval-cheap-module-source-map");
    assert_eq!(value["dev_server"]["port"], 9200);
    assert_eq!(value["split"]["min_size"], 30000);
    assert_eq!(value["split"]["rules"][0]["group_name"], "vendor");
    assert_eq!(value["plugins"][0]["kind"], "run_theme_processor");

    let entry_keys: Vec<_> = value["entries"].as_object().unwrap().keys().collect();
    assert_eq!(entry_keys, vec!["home", "about"]);
}
