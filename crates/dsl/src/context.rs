//! Type-level context markers for the HTML vocabulary.
//!
//! Contexts restrict where a node may be placed while a document is being
//! built: `head(...)` only accepts `Node<HeadContext>` children, so putting a
//! `<p>` inside `<head>` fails to compile. The markers carry no data and
//! vanish at render time.

/// The document root: `doctype()` and `html(...)` live here.
pub struct DocumentContext;

/// Directly inside `<html>`: `head(...)` and `body(...)`.
pub struct HtmlContext;

/// Inside `<head>`.
pub struct HeadContext;

/// General flow content inside `<body>`.
pub struct BodyContext;

/// Inside `<ul>` or `<ol>`: list items.
pub struct ListContext;

/// Inside `<a>`: anchor content.
pub struct AnchorContext;
