use crate::element::Element;

/// Node-construction capability supplied by the host.
///
/// The renderer only ever calls these two constructors, so any UI library
/// can sit behind it: implement the trait for a virtual-DOM adapter, a
/// string writer, or use [`Tree`](crate::Tree) for the bundled node type.
pub trait MarkupBuilder {
    type Node;

    fn text(&self, text: &str) -> Self::Node;

    fn element(&self, element: Element<Self::Node>) -> Self::Node;
}

impl<B: MarkupBuilder + ?Sized> MarkupBuilder for &B {
    type Node = B::Node;

    fn text(&self, text: &str) -> Self::Node {
        (**self).text(text)
    }

    fn element(&self, element: Element<Self::Node>) -> Self::Node {
        (**self).element(element)
    }
}
