use crate::environment::Environment;
use crate::node::Node;

/// Anything that can expand into a renderable [`Node`].
///
/// A component produces its body on demand; the renderer hands it the
/// effective [`Environment`] for the position it is being expanded in, so a
/// component that depends on environment keys reads them straight from the
/// argument. Components that don't care about the environment simply ignore
/// it ([`Node`] and [`Element`](crate::Element) do).
///
/// Expansion must be a pure function of the component's fields and the
/// environment: the same tree rendered twice produces identical output.
pub trait Component: ComponentClone + Send + Sync + 'static {
    /// Expand this component one level.
    fn body(&self, env: &Environment) -> Node;
}

/// Object-safe cloning for boxed components.
pub trait ComponentClone {
    fn clone_box(&self) -> Box<dyn Component>;
}

impl<T> ComponentClone for T
where
    T: Component + Clone + 'static,
{
    fn clone_box(&self) -> Box<dyn Component> {
        Box::new(self.clone())
    }
}

impl Clone for Box<dyn Component> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// A component that renders to nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyComponent;

impl Component for EmptyComponent {
    fn body(&self, _env: &Environment) -> Node {
        Node::empty()
    }
}

/// An ordered collection of components rendered back to back.
///
/// Modifiers applied to a group broadcast to every member, so
/// `group.with_attribute(a)` puts `a` on each element the members expand to.
#[derive(Clone, Default)]
pub struct ComponentGroup {
    members: Vec<Box<dyn Component>>,
}

impl ComponentGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a member, builder style.
    pub fn with(mut self, member: impl Component) -> Self {
        self.members.push(Box::new(member));
        self
    }

    pub fn push(&mut self, member: impl Component) {
        self.members.push(Box::new(member));
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }
}

impl Component for ComponentGroup {
    fn body(&self, _env: &Environment) -> Node {
        Node::group(
            self.members
                .iter()
                .map(|member| Node::component_box(member.clone()))
                .collect(),
        )
    }
}

impl FromIterator<Box<dyn Component>> for ComponentGroup {
    fn from_iter<I: IntoIterator<Item = Box<dyn Component>>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}
