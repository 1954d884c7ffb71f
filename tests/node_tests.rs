mod common;

use common::rendered;
use plume::{Attribute, Node};

#[test]
fn test_text_is_escaped() {
    let node: Node = Node::element(
        "p",
        vec![Node::text("Hello & welcome to <plume>!")],
    );
    assert_eq!(
        rendered(&node),
        "<p>Hello &amp; welcome to &lt;plume&gt;!</p>"
    );
}

#[test]
fn test_existing_entities_are_not_double_escaped() {
    let node: Node = Node::element("p", vec![Node::text("a &amp; b &#160; c")]);
    assert_eq!(rendered(&node), "<p>a &amp; b &#160; c</p>");
}

#[test]
fn test_raw_text_is_emitted_verbatim() {
    let node: Node = Node::element("p", vec![Node::raw("<b>bold</b>")]);
    assert_eq!(rendered(&node), "<p><b>bold</b></p>");
}

#[test]
fn test_attribute_nodes_scope_to_their_element() {
    let node: Node = Node::element(
        "a",
        vec![
            Node::attribute("href", "/"),
            Node::element("span", vec![Node::text("home")]),
        ],
    );
    assert_eq!(rendered(&node), "<a href=\"/\"><span>home</span></a>");
}

#[test]
fn test_boolean_attribute_renders_bare_name() {
    let node: Node = Node::element("video", vec![Node::boolean_attribute("controls")]);
    assert_eq!(rendered(&node), "<video controls></video>");
}

#[test]
fn test_empty_attribute_value_is_omitted() {
    let node: Node = Node::element("p", vec![Node::attribute("class", "")]);
    assert_eq!(rendered(&node), "<p></p>");
}

#[test]
fn test_repeated_attribute_keeps_first_position() {
    let node: Node = Node::element(
        "a",
        vec![
            Node::attribute("href", "/"),
            Node::attribute("id", "home"),
            Node::attribute("href", "/index.html"),
        ],
    );
    assert_eq!(rendered(&node), "<a href=\"/index.html\" id=\"home\"></a>");
}

#[test]
fn test_appending_attributes_join_with_spaces() {
    let node: Node = Node::element(
        "p",
        vec![
            Node::from(Attribute::appending("class", "one")),
            Node::from(Attribute::appending("class", "two")),
        ],
    );
    assert_eq!(rendered(&node), "<p class=\"one two\"></p>");
}

#[test]
fn test_group_renders_members_in_order() {
    let node: Node = Node::group(vec![
        Node::element("p", vec![Node::text("a")]),
        Node::element("p", vec![Node::text("b")]),
    ]);
    assert_eq!(rendered(&node), "<p>a</p><p>b</p>");
}

#[test]
fn test_empty_node_renders_to_nothing() {
    let node: Node = Node::element("div", vec![Node::empty()]);
    assert_eq!(rendered(&node), "<div></div>");
}

#[test]
fn test_self_closed_element_ignores_no_children() {
    let node: Node = Node::self_closed_element("img", vec![Attribute::new("src", "a.png")]);
    assert_eq!(rendered(&node), "<img src=\"a.png\"/>");
}

#[test]
fn test_rendering_is_repeatable() {
    let node: Node = Node::element("p", vec![Node::text("same")]);
    assert_eq!(rendered(&node), rendered(&node));
}
