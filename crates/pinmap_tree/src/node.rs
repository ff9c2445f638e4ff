//! The design-node tree model.

/// One level of the mapping tree: an FPGA board, carrier PCB, or mezzanine.
///
/// A node references the mapping files that describe its endpoint table and
/// optionally carries child nodes one level further from the FPGA. Node
/// identity is the `name`, which must be unique across the whole tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    /// Globally unique node name.
    pub name: String,
    /// Mapping files contributing to this node's endpoint table, in
    /// declaration order.
    pub files: Vec<String>,
    /// Child nodes, in declaration order.
    pub children: Vec<Node>,
}

impl Node {
    /// Creates a leaf node with no children.
    pub fn leaf(name: impl Into<String>, files: Vec<String>) -> Self {
        Self {
            name: name.into(),
            files,
            children: Vec::new(),
        }
    }

    /// Creates a node with children.
    pub fn with_children(name: impl Into<String>, files: Vec<String>, children: Vec<Node>) -> Self {
        Self {
            name: name.into(),
            files,
            children,
        }
    }

    /// Collects every mapping file referenced anywhere in the tree.
    ///
    /// Depth-first, root before children, files in declaration order,
    /// duplicates removed while keeping the first occurrence. The order is
    /// load order, so error messages are reproducible across runs.
    pub fn collect_files(&self) -> Vec<String> {
        let mut files = Vec::new();
        self.collect_files_into(&mut files);
        files
    }

    fn collect_files_into(&self, files: &mut Vec<String>) {
        for file in &self.files {
            if !files.contains(file) {
                files.push(file.clone());
            }
        }
        for child in &self.children {
            child.collect_files_into(files);
        }
    }
}
