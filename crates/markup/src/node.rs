use crate::binding::{Binding, Notification};
use crate::builder::MarkupBuilder;
use crate::element::{Attributes, Element, Tag};
use form_state::FormEvent;
use std::fmt;

/// A rendered markup tree whose controls raise host events of type `E`.
#[derive(Clone, Debug, PartialEq)]
pub enum Node<E> {
    Text(String),
    Element {
        tag: Tag,
        attrs: Attributes,
        listener: Option<Listener<E>>,
        children: Vec<Node<E>>,
    },
}

/// A control's binding plus the host's wrapper for the events it raises.
pub struct Listener<E> {
    pub binding: Binding,
    lift: fn(FormEvent) -> E,
}

impl<E> Listener<E> {
    pub fn new(binding: Binding, lift: fn(FormEvent) -> E) -> Self {
        Self { binding, lift }
    }

    pub fn handle(&self, notification: Notification) -> Option<E> {
        self.binding.resolve(notification).map(self.lift)
    }
}

impl<E> Clone for Listener<E> {
    fn clone(&self) -> Self {
        Self {
            binding: self.binding.clone(),
            lift: self.lift,
        }
    }
}

// The lift function is fixed per tree, so two listeners are equal when
// their bindings are.
impl<E> PartialEq for Listener<E> {
    fn eq(&self, other: &Self) -> bool {
        self.binding == other.binding
    }
}

impl<E> fmt::Debug for Listener<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Listener").field(&self.binding).finish()
    }
}

impl<E> Node<E> {
    pub fn tag(&self) -> Option<Tag> {
        match self {
            Node::Element { tag, .. } => Some(*tag),
            Node::Text(_) => None,
        }
    }

    pub fn attrs(&self) -> Option<&Attributes> {
        match self {
            Node::Element { attrs, .. } => Some(attrs),
            Node::Text(_) => None,
        }
    }

    pub fn children(&self) -> &[Node<E>] {
        match self {
            Node::Element { children, .. } => children,
            Node::Text(_) => &[],
        }
    }

    pub fn binding(&self) -> Option<&Binding> {
        match self {
            Node::Element {
                listener: Some(listener),
                ..
            } => Some(&listener.binding),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(text) => Some(text),
            Node::Element { .. } => None,
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.attrs().and_then(|attrs| attrs.id.as_deref())
    }

    /// Concatenated text of this node and its descendants.
    pub fn text_content(&self) -> String {
        fn collect<E>(node: &Node<E>, out: &mut String) {
            match node {
                Node::Text(text) => out.push_str(text),
                Node::Element { children, .. } => {
                    for c in children {
                        collect(c, out);
                    }
                }
            }
        }

        let mut out = String::new();
        collect(self, &mut out);
        out
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Node<E>> {
        if self.id() == Some(id) {
            return Some(self);
        }
        find_by_id(self.children(), id)
    }

    /// Elements with `tag` among this node and its descendants, in document order.
    pub fn descendants_with_tag(&self, tag: Tag) -> Vec<&Node<E>> {
        fn walk<'a, E>(node: &'a Node<E>, tag: Tag, out: &mut Vec<&'a Node<E>>) {
            if node.tag() == Some(tag) {
                out.push(node);
            }
            for c in node.children() {
                walk(c, tag, out);
            }
        }

        let mut out = Vec::new();
        walk(self, tag, &mut out);
        out
    }
}

pub fn find_by_id<'a, E>(nodes: &'a [Node<E>], id: &str) -> Option<&'a Node<E>> {
    nodes.iter().find_map(|node| node.find_by_id(id))
}

/// Routes a DOM notification to the control with element id `id`.
///
/// Returns `None` if no element has that id, it has no binding, or the
/// binding ignores this kind of notification.
pub fn dispatch<E>(nodes: &[Node<E>], id: &str, notification: Notification) -> Option<E> {
    match find_by_id(nodes, id)? {
        Node::Element {
            listener: Some(listener),
            ..
        } => listener.handle(notification),
        _ => None,
    }
}

/// Builds [`Node`] trees, wrapping raised events with a host-supplied function.
pub struct Tree<E> {
    lift: fn(FormEvent) -> E,
}

impl<E> Tree<E> {
    pub fn new(lift: fn(FormEvent) -> E) -> Self {
        Self { lift }
    }
}

impl Default for Tree<FormEvent> {
    fn default() -> Self {
        Self::new(std::convert::identity)
    }
}

impl<E> MarkupBuilder for Tree<E> {
    type Node = Node<E>;

    fn text(&self, text: &str) -> Node<E> {
        Node::Text(text.to_string())
    }

    fn element(&self, element: Element<Node<E>>) -> Node<E> {
        let Element {
            tag,
            attrs,
            binding,
            children,
        } = element;
        Node::Element {
            tag,
            attrs,
            listener: binding.map(|binding| Listener::new(binding, self.lift)),
            children,
        }
    }
}
