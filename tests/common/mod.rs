use plume::{Component, Indentation, Render};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Render a component on a single line.
pub fn rendered(component: &impl Component) -> String {
    component.render()
}

/// Render a component pretty-printed with four-space indentation.
pub fn indented(component: &impl Component) -> String {
    component.render_indented(Indentation::Spaces(4))
}
