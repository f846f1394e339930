//! Minimal text tree.
//!
//! ```text
//! root
//! ├── child
//! │   └── grandchild
//! └── last child
//! ```

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const CONTINUATION: &str = "│   ";
const LAST_CONTINUATION: &str = "    ";

/// A node with a (possibly multi-line) label and ordered children
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    root: String,
    children: Vec<Tree>,
}

impl Tree {
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            children: Vec::new(),
        }
    }

    pub fn child(mut self, child: Tree) -> Self {
        self.children.push(child);
        self
    }

    pub fn push(&mut self, child: Tree) {
        self.children.push(child);
    }

    /// Render the tree; children are drawn with box-drawing guides
    pub fn render(&self) -> String {
        let mut lines: Vec<String> = self.root.lines().map(str::to_string).collect();
        if lines.is_empty() {
            lines.push(String::new());
        }

        let last = self.children.len().saturating_sub(1);
        for (index, child) in self.children.iter().enumerate() {
            let (first_prefix, rest_prefix) = if index == last {
                (LAST_BRANCH, LAST_CONTINUATION)
            } else {
                (BRANCH, CONTINUATION)
            };

            for (line_index, line) in child.render().lines().enumerate() {
                let prefix = if line_index == 0 { first_prefix } else { rest_prefix };
                lines.push(format!("{}{}", prefix, line));
            }
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_leaf() {
        assert_eq!(Tree::new("only").render(), "only");
    }

    #[test]
    fn test_nested() {
        let tree = Tree::new("root")
            .child(Tree::new("a").child(Tree::new("a1")))
            .child(Tree::new("b").child(Tree::new("b1")).child(Tree::new("b2")));

        let expected = "\
root
├── a
│   └── a1
└── b
    ├── b1
    └── b2";
        assert_eq!(tree.render(), expected);
    }

    #[test]
    fn test_multiline_root_is_kept() {
        let tree = Tree::new("\nheader").child(Tree::new("x"));
        assert_eq!(tree.render(), "\nheader\n└── x");
    }
}
