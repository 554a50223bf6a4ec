//! Base style generators: one per module type, dispatched on the
//! normalized type name, plus the section/column generators. Each returns
//! the full attribute set for one path before contextual and creative
//! overrides are layered on top.

use crate::object;
use serde_json::json;
use sitewright_style::{ContextColors, StylePreset, VisualContext};
use sitewright_types::AttrMap;
use sitewright_types::node::{ATTR_PATTERN, ATTR_VISUAL_CONTEXT};

/// Path-derived facts about the module being styled.
#[derive(Debug, Clone, Copy)]
pub struct ModuleFlags<'a> {
    pub blueprint: &'a str,
    pub context: VisualContext,
    pub is_hero: bool,
    pub is_cta: bool,
    pub is_header: bool,
    pub is_footer: bool,
    pub role: Option<&'a str>,
}

fn corner_radius(radius: u32) -> serde_json::Value {
    json!({
        "top_left": radius,
        "top_right": radius,
        "bottom_right": radius,
        "bottom_left": radius,
    })
}

fn padding_y(top: u32, bottom: u32) -> serde_json::Value {
    json!({ "top": top, "right": 0, "bottom": bottom, "left": 0 })
}

/// Section base styles: preset spacing plus blueprint-specific padding,
/// backgrounds and sizing.
pub fn section_styles(blueprint: &str, preset: StylePreset, context: VisualContext) -> AttrMap {
    let palette = preset.palette();
    let spacing = preset.spacing();
    let base = spacing.section_padding;
    let mobile = spacing.section_padding_mobile;

    let mut attrs = object(json!({
        (ATTR_PATTERN): blueprint,
        (ATTR_VISUAL_CONTEXT): context.name(),
        "padding": padding_y(base, base),
        "padding__tablet": padding_y(mobile, mobile),
        "padding__phone": {
            "top": mobile * 7 / 10, "right": 20, "bottom": mobile * 7 / 10, "left": 20
        },
        "inner_width": 1200,
    }));

    match blueprint {
        "hero" | "fullwidth_hero" => {
            attrs.insert("min_height".to_owned(), json!(600));
            attrs.insert("padding".to_owned(), padding_y(140, 140));
            attrs.insert("padding__tablet".to_owned(), padding_y(100, 100));
            match preset {
                StylePreset::Dark => {
                    attrs.insert(
                        "background_gradient".to_owned(),
                        json!("linear-gradient(135deg, #1F2937 0%, #111827 100%)"),
                    );
                    attrs.insert("use_background_gradient".to_owned(), json!(true));
                }
                StylePreset::Bold => {
                    attrs.insert(
                        "background_gradient".to_owned(),
                        json!(format!(
                            "linear-gradient(135deg, {} 0%, {} 100%)",
                            palette.primary, palette.secondary
                        )),
                    );
                    attrs.insert("use_background_gradient".to_owned(), json!(true));
                }
                _ => {
                    attrs.insert("background_color".to_owned(), json!(palette.background_alt));
                }
            }
        }
        "cta" | "call_to_action" | "final_cta" => {
            attrs.insert(
                "background_gradient".to_owned(),
                json!(format!(
                    "linear-gradient(135deg, {} 0%, {} 100%)",
                    palette.primary, palette.secondary
                )),
            );
            attrs.insert("use_background_gradient".to_owned(), json!(true));
            attrs.insert("padding".to_owned(), padding_y(100, 100));
        }
        "stats" | "counters" => {
            if preset == StylePreset::Dark {
                attrs.insert("background_color".to_owned(), json!("#374151"));
            } else {
                attrs.insert(
                    "background_gradient".to_owned(),
                    json!(format!(
                        "linear-gradient(135deg, {} 0%, {} 100%)",
                        palette.secondary, palette.primary
                    )),
                );
                attrs.insert("use_background_gradient".to_owned(), json!(true));
            }
            attrs.insert("padding".to_owned(), padding_y(80, 80));
        }
        "testimonials" | "reviews" | "pricing" | "contact" | "contact_form" => {
            attrs.insert("background_color".to_owned(), json!(palette.background_alt));
        }
        "features" | "benefits" | "faq" | "team" => {
            attrs.insert("background_color".to_owned(), json!(palette.background));
        }
        "footer" => {
            attrs.insert("background_color".to_owned(), json!("#111827"));
            attrs.insert("padding".to_owned(), padding_y(80, 40));
        }
        _ => {
            attrs.insert("background_color".to_owned(), json!(palette.background));
        }
    }
    attrs
}

pub fn column_styles(_preset: StylePreset) -> AttrMap {
    object(json!({
        "vertical_align": "top",
        "padding": { "top": 0, "right": 0, "bottom": 0, "left": 0 },
    }))
}

/// Dispatches a module path to its per-type generator, then applies the
/// contextual color overrides implied by the flags.
pub fn module_styles(module_type: &str, preset: StylePreset, flags: &ModuleFlags) -> AttrMap {
    let colors = ContextColors::for_context(flags.context, preset);
    match module_type {
        "heading" => heading_styles(preset, flags, &colors),
        "text" => text_styles(preset),
        "button" => button_styles(preset, flags, &colors),
        "blurb" => blurb_styles(preset),
        "image" => image_styles(preset),
        "testimonial" => testimonial_styles(preset),
        "pricing_table" => pricing_styles(preset, flags),
        "cta" => cta_module_styles(preset),
        "team_member" => team_member_styles(preset),
        "number_counter" | "circle_counter" | "bar_counter" => counter_styles(preset),
        "accordion" | "accordion_item" => accordion_styles(preset),
        "tabs" | "tabs_item" => tabs_styles(preset),
        "divider" => divider_styles(&colors),
        "social_icons" | "social_follow" => social_icons_styles(preset, flags, &colors),
        "gallery" => gallery_styles(preset),
        "slider" | "fullwidth_slider" => slider_styles(),
        "video" => video_styles(preset),
        "contact_form" => contact_form_styles(preset),
        "blog" | "portfolio" => blog_styles(preset),
        "map" => map_styles(preset),
        "menu" | "footer_menu" => menu_styles(preset, flags, &colors),
        "site_logo" => logo_styles(),
        "search" | "search_form" => search_form_styles(preset),
        "copyright" | "footer_info" => footer_info_styles(preset),
        _ => generic_styles(preset),
    }
}

fn heading_styles(preset: StylePreset, flags: &ModuleFlags, colors: &ContextColors) -> AttrMap {
    let palette = preset.palette();
    let typography = preset.typography();

    let mut level = "h2";
    if let Some(role) = flags.role {
        if role.contains("h1") {
            level = "h1";
        } else if role.contains("h3") {
            level = "h3";
        }
    }
    // Hero headings promote to the page's top heading level.
    if flags.is_hero {
        level = "h1";
    }

    let mut attrs = object(json!({
        "font_family": typography.heading_font,
        "font_size": typography.heading_size(level),
        "font_weight": typography.heading_weight,
        "line_height": typography.heading_line_height,
        "letter_spacing": typography.letter_spacing,
        "level": level,
        "text_color": palette.heading,
        "text_align": "center",
        "margin_bottom": 20,
    }));
    if flags.context.needs_contrast() {
        attrs.insert("text_color".to_owned(), json!(colors.heading));
    }
    attrs
}

fn text_styles(preset: StylePreset) -> AttrMap {
    let palette = preset.palette();
    let typography = preset.typography();
    object(json!({
        "text_orientation": "left",
        "font_family": typography.body_font,
        "font_size": typography.body_size,
        "font_weight": typography.body_weight,
        "line_height": typography.line_height,
        "text_color": palette.text,
    }))
}

fn button_styles(preset: StylePreset, flags: &ModuleFlags, colors: &ContextColors) -> AttrMap {
    let palette = preset.palette();
    let mut variant = "primary";
    if let Some(role) = flags.role {
        if role.contains("secondary") {
            variant = "secondary";
        } else if role.contains("ghost") {
            variant = "ghost";
        }
    }
    // Call-to-action sections force the inverted button treatment.
    if flags.is_cta {
        variant = "secondary";
    }

    let mut attrs = object(json!({
        "font_weight": "600",
        "font_size": 16,
        "variant": variant,
        "border_radius": corner_radius(preset.control_radius()),
    }));
    match variant {
        "secondary" => {
            attrs.insert("background_color".to_owned(), json!("transparent"));
            attrs.insert("text_color".to_owned(), json!(colors.button_secondary_text));
            attrs.insert("border_width".to_owned(), json!(2));
            attrs.insert("border_style".to_owned(), json!("solid"));
            attrs.insert(
                "border_color".to_owned(),
                json!(colors.button_secondary_border),
            );
            attrs.insert("background_color__hover".to_owned(), json!(palette.primary));
            attrs.insert("text_color__hover".to_owned(), json!("#FFFFFF"));
        }
        "ghost" => {
            attrs.insert("background_color".to_owned(), json!("transparent"));
            attrs.insert("text_color".to_owned(), json!(palette.text));
            attrs.insert(
                "background_color__hover".to_owned(),
                json!(palette.background_alt),
            );
            attrs.insert("text_color__hover".to_owned(), json!(palette.primary));
        }
        _ => {
            attrs.insert("background_color".to_owned(), json!(palette.primary));
            attrs.insert("text_color".to_owned(), json!("#FFFFFF"));
            attrs.insert(
                "background_color__hover".to_owned(),
                json!(palette.secondary),
            );
            attrs.insert("text_color__hover".to_owned(), json!("#FFFFFF"));
        }
    }
    if flags.context.needs_contrast() && variant == "primary" {
        attrs.insert(
            "background_color".to_owned(),
            json!(colors.button_primary_bg),
        );
        attrs.insert("text_color".to_owned(), json!(colors.button_primary_text));
    }
    attrs
}

fn blurb_styles(preset: StylePreset) -> AttrMap {
    let palette = preset.palette();
    object(json!({
        "icon_color": palette.primary,
        "icon_font_size": 48,
        "text_orientation": "center",
        "image_placement": "top",
        "title_color": palette.heading,
        "title_font_size": 20,
        "content_color": palette.text_light,
        "content_font_size": 16,
        "background_color": palette.background,
        "border_radius": corner_radius(preset.card_radius()),
        "box_shadow_style": if preset == StylePreset::Minimal { "none" } else { "preset1" },
    }))
}

fn image_styles(preset: StylePreset) -> AttrMap {
    object(json!({
        "border_radius": corner_radius(preset.card_radius()),
        "box_shadow_style": if preset == StylePreset::Minimal { "none" } else { "preset2" },
    }))
}

fn testimonial_styles(preset: StylePreset) -> AttrMap {
    let palette = preset.palette();
    object(json!({
        "portrait_width": 90,
        "portrait_height": 90,
        "portrait_border_radius": 50,
        "quote_icon_color": palette.primary,
        "quote_icon_size": 32,
        "author_name_color": palette.heading,
        "position_color": palette.text_light,
        "company_color": palette.primary,
        "body_color": palette.text,
        "background_color": palette.background,
        "box_shadow_style": if preset == StylePreset::Minimal { "none" } else { "preset1" },
        "border_radius": corner_radius(16),
    }))
}

fn pricing_styles(preset: StylePreset, flags: &ModuleFlags) -> AttrMap {
    let palette = preset.palette();
    let shadows = preset.shadows();
    let featured = flags.role.is_some_and(|role| role.contains("featured"));

    let mut attrs = object(json!({
        "title_font_size": 24,
        "title_font_weight": "700",
        "title_color": palette.heading,
        "price_font_size": 56,
        "price_font_weight": "800",
        "price_color": palette.primary,
        "period_color": palette.text_light,
        "feature_color": palette.text,
        "feature_icon_color": "#10B981",
        "card_padding": 40,
        "card_border_radius": 16,
        "card_background": palette.background,
        "card_shadow": shadows.card,
    }));
    if featured {
        attrs.insert("card_background".to_owned(), json!(palette.primary));
        attrs.insert("title_color".to_owned(), json!("#FFFFFF"));
        attrs.insert("price_color".to_owned(), json!("#FFFFFF"));
        attrs.insert("period_color".to_owned(), json!("rgba(255,255,255,0.8)"));
        attrs.insert("feature_color".to_owned(), json!("rgba(255,255,255,0.9)"));
        attrs.insert("feature_icon_color".to_owned(), json!("#FFFFFF"));
        attrs.insert("card_shadow".to_owned(), json!(shadows.elevated));
        attrs.insert("transform".to_owned(), json!("scale(1.05)"));
    }
    attrs
}

fn cta_module_styles(preset: StylePreset) -> AttrMap {
    let palette = preset.palette();
    object(json!({
        "promo_color": palette.primary,
        "title_font_size": 40,
        "title_color": "#FFFFFF",
        "content_color": "rgba(255,255,255,0.9)",
        "button_bg_color": "#FFFFFF",
        "button_text_color": palette.primary,
        "button_border_radius": preset.control_radius(),
    }))
}

fn team_member_styles(preset: StylePreset) -> AttrMap {
    let palette = preset.palette();
    object(json!({
        "image_border_radius": 12,
        "name_font_size": 20,
        "name_font_weight": "600",
        "name_color": palette.heading,
        "position_font_size": 14,
        "position_color": palette.primary,
        "bio_font_size": 15,
        "bio_color": palette.text_light,
        "social_icon_color": palette.text_light,
        "social_icon_hover": palette.primary,
        "card_padding": 24,
        "text_align": "center",
    }))
}

fn counter_styles(preset: StylePreset) -> AttrMap {
    let palette = preset.palette();
    object(json!({
        "number_font_size": 56,
        "number_font_weight": "800",
        "number_color": palette.primary,
        "title_font_size": 16,
        "title_font_weight": "500",
        "title_color": palette.text_light,
        "text_align": "center",
        "suffix_font_size": 32,
    }))
}

fn accordion_styles(preset: StylePreset) -> AttrMap {
    let palette = preset.palette();
    let typography = preset.typography();
    object(json!({
        "toggle_icon_color": palette.primary,
        "toggle_icon_size": 20,
        "title_font_family": typography.heading_font,
        "title_font_size": 18,
        "title_font_weight": "600",
        "title_color": palette.heading,
        "title_color__hover": palette.primary,
        "content_font_family": typography.body_font,
        "content_font_size": 16,
        "content_color": palette.text,
        "item_border_color": palette.background_alt,
        "item_border_width": 1,
        "item_padding": { "top": 20, "right": 24, "bottom": 20, "left": 24 },
    }))
}

fn tabs_styles(preset: StylePreset) -> AttrMap {
    let palette = preset.palette();
    let typography = preset.typography();
    object(json!({
        "tab_font_family": typography.heading_font,
        "tab_font_size": 16,
        "tab_font_weight": "500",
        "tab_color": palette.text_light,
        "tab_color_active": palette.primary,
        "tab_background": "transparent",
        "tab_background_active": palette.background_alt,
        "tab_border_color": palette.background_alt,
        "tab_border_color_active": palette.primary,
        "content_padding": { "top": 24, "right": 0, "bottom": 0, "left": 0 },
        "content_font_size": 16,
        "content_color": palette.text,
    }))
}

fn divider_styles(colors: &ContextColors) -> AttrMap {
    object(json!({
        "divider_color": colors.divider,
        "divider_style": "solid",
        "divider_weight": 1,
        "divider_width": 100,
        "divider_alignment": "center",
        "margin": { "top": 30, "right": 0, "bottom": 30, "left": 0 },
    }))
}

fn social_icons_styles(
    preset: StylePreset,
    flags: &ModuleFlags,
    colors: &ContextColors,
) -> AttrMap {
    let palette = preset.palette();
    object(json!({
        "icon_color": if flags.is_footer { colors.text_light.clone() }
                      else { palette.text_light.to_owned() },
        "icon_color__hover": palette.primary,
        "icon_font_size": if flags.is_footer { 20 } else { 24 },
        "icon_spacing": 16,
        "icon_alignment": if flags.is_footer { "left" } else { "center" },
    }))
}

fn gallery_styles(preset: StylePreset) -> AttrMap {
    object(json!({
        "gallery_columns": 3,
        "gallery_columns__tablet": 2,
        "gallery_columns__phone": 1,
        "gallery_gap": 20,
        "image_border_radius": corner_radius(preset.card_radius()),
        "enable_lightbox": true,
        "show_title": false,
        "hover_overlay_color": "rgba(0,0,0,0.3)",
        "hover_icon_color": "#FFFFFF",
    }))
}

fn slider_styles() -> AttrMap {
    object(json!({
        "arrows_color": "#FFFFFF",
        "arrows_background": "rgba(0,0,0,0.3)",
        "dots_color": "rgba(255,255,255,0.5)",
        "dots_color_active": "#FFFFFF",
        "autoplay": true,
        "autoplay_speed": 5000,
        "transition_duration": 500,
        "show_arrows": true,
        "show_dots": true,
        "infinite": true,
    }))
}

fn video_styles(preset: StylePreset) -> AttrMap {
    object(json!({
        "border_radius": corner_radius(preset.card_radius()),
        "box_shadow_style": if preset == StylePreset::Minimal { "none" } else { "preset2" },
        "play_icon_color": "#FFFFFF",
        "play_icon_background": "rgba(0,0,0,0.6)",
    }))
}

fn contact_form_styles(preset: StylePreset) -> AttrMap {
    let palette = preset.palette();
    let typography = preset.typography();
    object(json!({
        "label_font_family": typography.body_font,
        "label_font_size": 14,
        "label_font_weight": "500",
        "label_color": palette.text,
        "input_background": "#FFFFFF",
        "input_border_color": "#E5E7EB",
        "input_border_color__focus": palette.primary,
        "input_border_width": 1,
        "input_border_radius": corner_radius(preset.control_radius()),
        "input_padding": { "top": 12, "right": 16, "bottom": 12, "left": 16 },
        "input_font_size": 16,
        "input_text_color": palette.text,
        "placeholder_color": palette.text_light,
        "field_spacing": 20,
        "submit_button_alignment": "left",
    }))
}

fn blog_styles(preset: StylePreset) -> AttrMap {
    let palette = preset.palette();
    let typography = preset.typography();
    let shadows = preset.shadows();
    object(json!({
        "columns": 3,
        "columns__tablet": 2,
        "columns__phone": 1,
        "gap": 30,
        "card_background": palette.background,
        "card_border_radius": corner_radius(preset.card_radius()),
        "card_box_shadow": shadows.card,
        "card_box_shadow__hover": shadows.elevated,
        "image_height": 200,
        "title_font_family": typography.heading_font,
        "title_font_size": 20,
        "title_font_weight": "600",
        "title_color": palette.heading,
        "title_color__hover": palette.primary,
        "meta_font_size": 14,
        "meta_color": palette.text_light,
        "excerpt_font_size": 15,
        "excerpt_color": palette.text,
        "show_featured_image": true,
        "show_excerpt": true,
        "excerpt_length": 120,
    }))
}

fn map_styles(preset: StylePreset) -> AttrMap {
    object(json!({
        "map_height": 400,
        "map_height__tablet": 350,
        "map_height__phone": 300,
        "border_radius": corner_radius(preset.card_radius()),
        "grayscale": preset == StylePreset::Minimal,
        "zoom": 14,
    }))
}

fn menu_styles(preset: StylePreset, flags: &ModuleFlags, colors: &ContextColors) -> AttrMap {
    let palette = preset.palette();
    let typography = preset.typography();
    let link_color = if flags.is_footer {
        colors.text_light.clone()
    } else {
        colors.text.clone()
    };
    object(json!({
        "menu_font_family": typography.body_font,
        "menu_font_size": if flags.is_footer { 14 } else { 15 },
        "menu_font_weight": "500",
        "menu_text_transform": "none",
        "menu_link_color": link_color,
        "menu_link_color__hover": palette.primary,
        "menu_link_color_active": palette.primary,
        "menu_orientation": if flags.is_footer { "vertical" } else { "horizontal" },
        "dropdown_background": "#FFFFFF",
        "dropdown_text_color": palette.text,
        "dropdown_text_color__hover": palette.primary,
        "dropdown_border_radius": 8,
        "dropdown_box_shadow": "0 10px 40px rgba(0,0,0,0.1)",
    }))
}

fn logo_styles() -> AttrMap {
    object(json!({
        "logo_max_height": 50,
        "logo_max_height__tablet": 45,
        "logo_max_height__phone": 40,
    }))
}

fn search_form_styles(preset: StylePreset) -> AttrMap {
    let palette = preset.palette();
    object(json!({
        "input_background": "#FFFFFF",
        "input_border_color": "#E5E7EB",
        "input_border_color__focus": palette.primary,
        "input_border_radius": corner_radius(preset.control_radius()),
        "input_padding": { "top": 12, "right": 16, "bottom": 12, "left": 40 },
        "icon_color": palette.text_light,
        "button_background": palette.primary,
        "button_color": "#FFFFFF",
    }))
}

fn footer_info_styles(preset: StylePreset) -> AttrMap {
    let typography = preset.typography();
    object(json!({
        "font_family": typography.body_font,
        "font_size": 14,
        "text_color": "rgba(255,255,255,0.6)",
        "link_color": "rgba(255,255,255,0.8)",
        "link_color__hover": "#FFFFFF",
        "text_align": "center",
    }))
}

fn generic_styles(preset: StylePreset) -> AttrMap {
    let palette = preset.palette();
    let typography = preset.typography();
    object(json!({
        "font_family": typography.body_font,
        "font_size": typography.body_size,
        "text_color": palette.text,
    }))
}
