mod common;

use common::rendered;
use plume::{
    Attribute, Component, ComponentGroup, ComponentModifiers, ElementWrapper, EmptyComponent,
    Environment, EnvironmentKey, Node,
};

fn tone_key() -> EnvironmentKey<String> {
    EnvironmentKey::new("tests.tone")
}

#[derive(Clone)]
struct Greeting;

impl Component for Greeting {
    fn body(&self, env: &Environment) -> Node {
        let tone = env.get(&tone_key()).unwrap_or_else(|| "Hello".to_string());
        Node::element("p", vec![Node::text(tone)])
    }
}

#[derive(Clone)]
struct Button;

impl Component for Button {
    fn body(&self, _env: &Environment) -> Node {
        Node::element(
            "button",
            vec![Node::from(Attribute::appending("class", "one"))],
        )
    }
}

#[derive(Clone)]
struct FancyButton;

impl Component for FancyButton {
    fn body(&self, _env: &Environment) -> Node {
        Button.with_attribute(Attribute::appending("class", "two"))
    }
}

#[test]
fn test_component_expands_to_its_body() {
    assert_eq!(rendered(&Greeting), "<p>Hello</p>");
}

#[test]
fn test_empty_component_renders_nothing() {
    let node: Node = Node::element("div", vec![Node::component(EmptyComponent)]);
    assert_eq!(rendered(&node), "<div></div>");
}

#[test]
fn test_environment_value_reaches_the_subtree() {
    #[derive(Clone)]
    struct Section;

    impl Component for Section {
        fn body(&self, _env: &Environment) -> Node {
            Node::element("section", vec![Node::component(Greeting)])
        }
    }

    let node = Section.with_environment_value(&tone_key(), "Hi".to_string());
    assert_eq!(rendered(&node), "<section><p>Hi</p></section>");
}

#[test]
fn test_environment_override_does_not_leak_to_siblings() {
    let node: Node = Node::group(vec![
        Greeting.with_environment_value(&tone_key(), "Howdy".to_string()),
        Node::component(Greeting),
    ]);
    assert_eq!(rendered(&node), "<p>Howdy</p><p>Hello</p>");
}

#[test]
fn test_deferred_classes_accumulate_through_component_layers() {
    let node = FancyButton.with_attribute(Attribute::appending("class", "three"));
    assert_eq!(rendered(&node), "<button class=\"one two three\"></button>");
}

#[test]
fn test_replacing_attribute_clears_deferred_classes() {
    let node = FancyButton.with_attribute(Attribute::new("class", "solo"));
    assert_eq!(rendered(&node), "<button class=\"solo\"></button>");
}

#[test]
fn test_modifier_broadcasts_to_every_group_member() {
    let first: Node = Node::element("p", vec![Node::text("a")]);
    let second: Node = Node::element("p", vec![Node::text("b")]);
    let group = ComponentGroup::new().with(first).with(second);
    let node = group.with_attribute(Attribute::appending("class", "wide"));
    assert_eq!(
        rendered(&node),
        "<p class=\"wide\">a</p><p class=\"wide\">b</p>"
    );
}

#[test]
fn test_wrapper_wraps_foreign_elements_and_text() {
    let plain: Node = Node::text("One");
    let matching: Node = Node::element("li", vec![Node::text("Two")]);
    let foreign: Node = Node::element("p", vec![Node::text("Three")]);
    let items = ComponentGroup::new().with(plain).with(matching).with(foreign);
    let node: Node = Node::element(
        "ul",
        vec![items.wrapped_in(ElementWrapper::new("li"))],
    );
    assert_eq!(
        rendered(&node),
        "<ul><li>One</li><li>Two</li><li><p>Three</p></li></ul>"
    );
}

#[test]
fn test_wrapper_attributes_land_on_created_elements() {
    let plain: Node = Node::text("One");
    let items = ComponentGroup::new().with(plain);
    let wrapper = ElementWrapper::new("li").attribute(Attribute::appending("class", "item"));
    let node: Node = Node::element("ul", vec![items.wrapped_in(wrapper)]);
    assert_eq!(rendered(&node), "<ul><li class=\"item\">One</li></ul>");
}

#[test]
fn test_wrapper_keeps_deferred_attributes_on_the_payload() {
    let item: Node = Node::element("p", vec![Node::text("One")])
        .with_attribute(Attribute::appending("class", "loud"));
    let node: Node = Node::element(
        "ul",
        vec![item.wrapped_in(ElementWrapper::new("li"))],
    );
    assert_eq!(
        rendered(&node),
        "<ul><li><p class=\"loud\">One</p></li></ul>"
    );
}

#[test]
fn test_component_tree_renders_identically_every_time() {
    let node = FancyButton.with_attribute(Attribute::appending("class", "three"));
    assert_eq!(rendered(&node), rendered(&node));
}
