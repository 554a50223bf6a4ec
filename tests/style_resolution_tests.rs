mod common;

use common::TestResult;
use serde_json::Value;
use sitewright::{AttrMap, PipelineOptions, StylePreset};

fn padding_top(attrs: &AttrMap) -> Option<i64> {
    attrs.get("padding").and_then(|p| p["top"].as_i64())
}

#[test]
fn unknown_industry_and_style_resolve_with_defaults() -> TestResult {
    common::init_logging();

    let opts = PipelineOptions::new("xyzzy", "foo");
    let site = common::pipeline().compile_site(&common::empty_input(), &opts)?;

    // Generic template, modern palette.
    assert!(site.assigned.path_map.contains_key("home/hero"));
    let heading = site
        .styles
        .get("home/hero/col0/heading_0")
        .expect("hero heading styled");
    assert_eq!(heading["font_family"], Value::from("Inter"));
    Ok(())
}

#[test]
fn rhythm_raises_only_the_cta_gap() -> TestResult {
    // Generic home template: hero, features, testimonials, cta.
    let site = common::pipeline()
        .compile_site(&common::empty_input(), &PipelineOptions::new("generic", "modern"))?;

    // features directly after the hero keeps its base top padding.
    let features = site.styles.get("home/features").expect("features styled");
    assert_eq!(padding_top(features), Some(100));

    // cta takes the emphasis gap even though it is not right after the hero.
    let cta = site.styles.get("home/cta").expect("cta styled");
    assert_eq!(padding_top(cta), Some(140));
    Ok(())
}

#[test]
fn alternation_restarts_after_creative_sections() -> TestResult {
    // healthcare home: hero, services, team, testimonials, contact.
    // One creative section followed by four plain ones.
    let opts = PipelineOptions::new("healthcare", "modern");
    let site = common::pipeline().compile_site(&common::empty_input(), &opts)?;

    let palette = StylePreset::Modern.palette();
    let background = |path: &str| -> String {
        site.styles[path]["background_color"]
            .as_str()
            .unwrap_or_default()
            .to_owned()
    };

    assert_eq!(background("home/services"), palette.background);
    assert_eq!(background("home/team"), palette.background_alt);
    assert_eq!(background("home/testimonials"), palette.background);
    assert_eq!(background("home/contact"), palette.background_alt);

    // The hero itself keeps its creative background.
    let hero = &site.styles["home/hero"];
    assert_eq!(hero["use_background_gradient"], Value::Bool(true));
    Ok(())
}

#[test]
fn dark_context_overrides_foreground_colors() -> TestResult {
    let site = common::pipeline()
        .compile_ast(&common::sample_ast(), "home", &common::tech_options())?;

    // Hero headings are promoted and recolored for the dark context.
    let heading = &site.styles["home/hero/col0/heading_0"];
    assert_eq!(heading["level"], Value::from("h1"));
    assert_eq!(heading["text_color"], Value::from("#F9FAFB"));

    // A light-context heading keeps the palette color.
    let light_heading = site
        .styles
        .iter()
        .find(|(path, _)| path.starts_with("home/features") && path.contains("heading"));
    assert!(light_heading.is_none() || {
        let (_, attrs) = light_heading.unwrap();
        attrs["text_color"] != Value::from("#F9FAFB")
    });
    Ok(())
}

#[test]
fn cta_buttons_invert_to_the_secondary_variant() -> TestResult {
    let site = common::pipeline()
        .compile_ast(&common::sample_ast(), "home", &common::tech_options())?;

    let button = &site.styles["home/cta/col0/button_0"];
    assert_eq!(button["variant"], Value::from("secondary"));
    assert_eq!(button["background_color"], Value::from("transparent"));

    let hero_button = &site.styles["home/hero/col0/button_0"];
    assert_eq!(hero_button["variant"], Value::from("primary"));
    Ok(())
}

#[test]
fn creative_sections_get_industry_keyed_gradients() -> TestResult {
    let opts = PipelineOptions::new("fitness", "bold");
    let site = common::pipeline().compile_site(&common::empty_input(), &opts)?;

    let hero = &site.styles["home/hero"];
    assert_eq!(hero["use_background_gradient"], Value::Bool(true));
    let gradient = hero["background_gradient"].as_str().unwrap_or_default();
    // Fitness heroes use the 45-degree treatment with a dark overlay.
    assert!(gradient.contains("45deg"), "unexpected gradient {gradient}");
    assert_eq!(hero["background_overlay"], Value::from("rgba(0,0,0,0.6)"));
    assert_eq!(padding_top(hero), Some(200));
    Ok(())
}

#[test]
fn styling_without_a_path_map_fails_atomically() {
    let skeleton = sitewright::Skeleton::default();
    let assigned = sitewright::Assigned::default();
    let result = sitewright::core::resolve(
        &skeleton,
        &assigned,
        &sitewright::ResolveOptions {
            style: StylePreset::Modern,
            industry: sitewright::Industry::Generic,
            recorder: &sitewright::NullRecorder,
        },
    );
    let err = result.expect_err("resolving without a path map must fail");
    assert!(err.to_string().contains("path_map"));
}

#[test]
fn unknown_module_types_get_generic_styles() -> TestResult {
    let ast = sitewright::PageAst::from_json(
        r#"{"sections":[{"type":"features","columns":[
            {"width":12,"elements":[{"type":"mystery_widget"}]}]}]}"#,
    )?;
    let site = common::pipeline()
        .compile_ast(&ast, "home", &PipelineOptions::new("generic", "modern"))?;

    // The unknown element compiled to a text module and styled as text;
    // an unknown concrete module type would take the generic font set.
    let styled = &site.styles["home/features/col0/text_0"];
    assert_eq!(styled["font_family"], Value::from("Inter"));
    Ok(())
}
