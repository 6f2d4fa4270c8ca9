//! XML helpers over `roxmltree` nodes.

mod utils;

pub use utils::{
    element_children, first_text, get_attribute, get_tag_name, has_child_nodes, text_content,
};
