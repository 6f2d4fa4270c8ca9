//! XML utility functions for navigating and extracting data from DOM trees.

use roxmltree::Node;

/// Get the tag name without namespace prefix.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use xconf_parser::xml::get_tag_name;
///
/// let xml = r#"<configuration><property/></configuration>"#;
/// let doc = Document::parse(xml).unwrap();
/// let property = doc.root_element().first_element_child().unwrap();
/// assert_eq!(get_tag_name(property), "property");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Get the first child's text, untouched.
///
/// Returns `None` when the element is empty or its first child is not
/// text (e.g. a nested element or a comment).
pub fn first_text<'a>(node: Node<'a, '_>) -> Option<&'a str> {
    node.text()
}

/// Get the concatenated text of all descendant text nodes, untrimmed.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use xconf_parser::xml::text_content;
///
/// let doc = Document::parse("<arg> 4<!-- c --><b>2</b></arg>").unwrap();
/// assert_eq!(text_content(doc.root_element()), " 42");
/// ```
pub fn text_content(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}

/// Get an attribute value from a node.
pub fn get_attribute<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.attribute(name)
}

/// Check if a node has any children at all (text, comments or elements).
pub fn has_child_nodes(node: Node<'_, '_>) -> bool {
    node.has_children()
}

/// Get all element children of a node.
///
/// # Returns
/// Iterator over element children (excludes text nodes, comments, etc.)
pub fn element_children<'a, 'input>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|child| child.is_element())
}
