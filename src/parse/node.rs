// src/parse/node.rs
// =============================================================================
// The tree-node interface our searches run against.
//
// Only elements are nodes here. Text shows up through text_content() and
// own_text(), never as a node of its own.
// =============================================================================

use scraper::ElementRef;

pub trait Node: Clone {
    /// Lowercase tag name, e.g. "div"
    fn tag_name(&self) -> &str;

    /// Value of an attribute, None when the element does not carry it
    fn attr(&self, name: &str) -> Option<&str>;

    /// Direct child elements in document order
    fn element_children(&self) -> Vec<Self>;

    /// First element after this one that shares its parent
    fn next_element_sibling(&self) -> Option<Self>;

    /// All text inside the element, concatenated
    fn text_content(&self) -> String;

    /// Text of the element's direct text children only
    fn own_text(&self) -> String;

    /// Every element below this one, pre-order (document order).
    /// The node itself is not included.
    fn element_descendants(&self) -> Vec<Self> {
        let mut out = Vec::new();
        for child in self.element_children() {
            out.push(child.clone());
            out.extend(child.element_descendants());
        }
        out
    }
}

impl<'a> Node for ElementRef<'a> {
    fn tag_name(&self) -> &str {
        self.value().name()
    }

    fn attr(&self, name: &str) -> Option<&str> {
        self.value().attr(name)
    }

    fn element_children(&self) -> Vec<Self> {
        self.children().filter_map(ElementRef::wrap).collect()
    }

    fn next_element_sibling(&self) -> Option<Self> {
        self.next_siblings().find_map(ElementRef::wrap)
    }

    fn text_content(&self) -> String {
        self.text().collect()
    }

    fn own_text(&self) -> String {
        self.children()
            .filter_map(|child| child.value().as_text().map(|text| text.to_string()))
            .collect()
    }
}
