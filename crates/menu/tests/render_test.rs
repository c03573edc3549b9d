#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Rendering rules: wrapper configuration, nesting, and JSON menu
//! definitions.

use sentiero_menu::{Activatable, Menu};

#[test]
fn nested_menu_renders_depth_first_inline() {
    let mut inner = Menu::new();
    inner.add_link("Team", "/about/team");

    let mut menu = Menu::new();
    menu.add_link("About", "/about").add_submenu(inner);

    assert_eq!(
        menu.render(),
        "<ul><a href=\"/about\">About</a><ul><a href=\"/about/team\">Team</a></ul></ul>"
    );
}

#[test]
fn deep_nesting_renders_inside_out() {
    let mut third = Menu::new();
    third.add_link("Leaf", "/leaf");

    let mut second = Menu::new();
    second.add_submenu(third);

    let mut menu = Menu::new();
    menu.add_submenu(second);

    assert_eq!(
        menu.render(),
        "<ul><ul><ul><a href=\"/leaf\">Leaf</a></ul></ul></ul>"
    );
}

#[test]
fn wrapper_attributes_render_in_insertion_order() {
    let mut menu = Menu::new();
    menu.attribute("id", "main-nav")
        .add_class("nav")
        .add_class("primary");
    assert_eq!(
        menu.render(),
        "<ul id=\"main-nav\" class=\"nav primary\"></ul>"
    );
}

#[test]
fn boolean_wrapper_attributes_are_omitted() {
    let mut menu = Menu::new();
    menu.attribute("hidden", true).attribute("id", "main");
    assert_eq!(menu.render(), "<ul id=\"main\"></ul>");
}

#[test]
fn attribute_update_keeps_position() {
    let mut menu = Menu::new();
    menu.attribute("id", "first")
        .attribute("role", "navigation")
        .attribute("id", "second");
    assert_eq!(
        menu.render(),
        "<ul id=\"second\" role=\"navigation\"></ul>"
    );
}

#[test]
fn wrapper_tag_is_configurable() {
    let mut menu = Menu::new();
    menu.set_tag("nav").add_class("site");
    assert_eq!(menu.render(), "<nav class=\"site\"></nav>");
}

#[test]
fn active_submenu_carries_wrapper_class() {
    let mut submenu = Menu::new();
    submenu.add_link("Team", "/team");
    Activatable::set_active(&mut submenu);

    let mut menu = Menu::new();
    menu.add_submenu(submenu);

    assert_eq!(
        menu.render(),
        "<ul><ul class=\"active\"><a href=\"/team\">Team</a></ul></ul>"
    );
}

#[test]
fn display_matches_render() {
    let mut menu = Menu::new();
    menu.add_link("Home", "/");
    assert_eq!(format!("{menu}"), menu.render());
}

#[test]
fn json_definition_renders_like_fluent_construction() {
    let fluent = {
        let mut menu = Menu::new();
        menu.attribute("id", "site-nav");
        menu.add_link("Home", "/");
        menu.render()
    };

    let parsed: Menu = serde_json::from_str(
        r#"{
            "element": { "tag": "ul", "attributes": { "id": "site-nav" } },
            "items": [ { "Link": { "text": "Home", "url": "/" } } ]
        }"#,
    )
    .unwrap();

    assert_eq!(parsed.render(), fluent);
}

#[test]
fn full_json_definition_renders_nested_tree() {
    let json = r#"{
        "element": { "tag": "nav", "attributes": { "id": "site-nav", "class": ["nav", "top"] } },
        "items": [
            { "Link": { "text": "Home", "url": "/" } },
            { "RawHtml": { "html": "<hr>" } },
            { "Menu": { "items": [
                { "Link": { "text": "Team", "url": "/team", "active": true } }
            ] } }
        ]
    }"#;

    let menu: Menu = serde_json::from_str(json).unwrap();
    assert_eq!(
        menu.render(),
        "<nav id=\"site-nav\" class=\"nav top\"><a href=\"/\">Home</a><hr>\
         <ul><a href=\"/team\" class=\"active\">Team</a></ul></nav>"
    );
}
