mod common;

use common::{TestResult, indented, rendered};
use plume::prelude::*;

#[test]
fn test_single_line_html_document() {
    let page = Node::group(vec![
        doctype(),
        html(vec![
            head(vec![title("Hello")]),
            body(vec![p(vec![Node::text("Hello, World!")])]),
        ]),
    ]);
    assert_eq!(
        rendered(&page),
        "<!DOCTYPE html><html><head><title>Hello</title></head>\
         <body><p>Hello, World!</p></body></html>"
    );
}

#[test]
fn test_indented_html_document() {
    let page = Node::group(vec![
        doctype(),
        html(vec![
            head(vec![title("Hello")]),
            body(vec![p(vec![Node::text("Hello, World!")])]),
        ]),
    ]);
    assert_eq!(
        indented(&page),
        "<!DOCTYPE html>\n\
         <html>\n\
         \x20   <head>\n\
         \x20       <title>Hello</title>\n\
         \x20   </head>\n\
         \x20   <body>\n\
         \x20       <p>Hello, World!</p>\n\
         \x20   </body>\n\
         </html>"
    );
}

fn mixed_document() -> Node {
    Node::group(vec![
        Node::element(
            "one",
            vec![
                Node::element("two", vec![Node::self_closed_element("three", vec![])]),
                Node::text("four"),
                Node::text(" five"),
                Node::element("six", vec![Node::text("seven")]),
                Node::element("eight", vec![Node::text("nine")]),
            ],
        ),
        Node::self_closed_element("ten", vec![Attribute::new("key", "value")]),
    ])
}

#[test]
fn test_indentation_keeps_inline_text_on_the_element_line() {
    assert_eq!(
        indented(&mixed_document()),
        "<one>\n\
         \x20   <two>\n\
         \x20       <three/>\n\
         \x20   </two>four five\n\
         \x20   <six>seven</six>\n\
         \x20   <eight>nine</eight>\n\
         </one>\n\
         <ten key=\"value\"/>"
    );
}

#[test]
fn test_tab_indentation() {
    assert_eq!(
        mixed_document().render_indented(Indentation::Tabs(1)),
        "<one>\n\
         \t<two>\n\
         \t\t<three/>\n\
         \t</two>four five\n\
         \t<six>seven</six>\n\
         \t<eight>nine</eight>\n\
         </one>\n\
         <ten key=\"value\"/>"
    );
}

#[derive(Clone)]
struct Menu {
    links: List,
}

impl Component for Menu {
    fn body(&self, _env: &Environment) -> Node {
        self.links.clone().link_target(AnchorTarget::Blank)
    }
}

#[test]
fn test_document_with_components_and_link_environment() -> TestResult {
    let menu = Menu {
        links: List::unordered()
            .item(Link::new("/one", Text::new("One"))?)
            .item(Link::new("/two", Text::new("Two"))?),
    };
    let page = Node::group(vec![
        doctype(),
        html(vec![
            head(vec![title("Links"), meta(vec![charset("utf-8")])]),
            body(vec![Node::component(menu)]),
        ]),
    ]);
    assert_eq!(
        rendered(&page),
        "<!DOCTYPE html><html><head><title>Links</title><meta charset=\"utf-8\"/></head>\
         <body><ul>\
         <li><a href=\"/one\" target=\"_blank\">One</a></li>\
         <li><a href=\"/two\" target=\"_blank\">Two</a></li>\
         </ul></body></html>"
    );
    Ok(())
}
