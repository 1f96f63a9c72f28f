// Static portal catalog: the nested content tree behind the sidebar.
//
// The tree is fixed configuration data, built once at startup and never
// mutated afterwards. Children are ordered Vecs rather than maps so that
// "first category" and render order are declaration order.

use std::collections::HashMap;

use crate::portal::nav::TopSection;

// ---------------------------------------------------------------------------
// Tree node types
// ---------------------------------------------------------------------------

/// A single node in a section's content tree.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    /// Display name; also the last segment of the node's dotted path.
    pub name: String,
    pub kind: NodeKind,
}

/// Branch nodes expand into further nodes; leaf nodes terminate in an
/// ordered list of topic strings.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Branch(Vec<TreeNode>),
    Leaf(Vec<String>),
}

impl TreeNode {
    pub fn is_branch(&self) -> bool {
        matches!(self.kind, NodeKind::Branch(_))
    }

    /// Child nodes of a branch; `None` for leaves.
    pub fn children(&self) -> Option<&[TreeNode]> {
        match &self.kind {
            NodeKind::Branch(children) => Some(children),
            NodeKind::Leaf(_) => None,
        }
    }

    /// Topic strings of a leaf; `None` for branches.
    pub fn topics(&self) -> Option<&[String]> {
        match &self.kind {
            NodeKind::Branch(_) => None,
            NodeKind::Leaf(topics) => Some(topics),
        }
    }
}

fn branch(name: &str, children: Vec<TreeNode>) -> TreeNode {
    TreeNode {
        name: name.to_string(),
        kind: NodeKind::Branch(children),
    }
}

fn leaf(name: &str, topics: &[&str]) -> TreeNode {
    TreeNode {
        name: name.to_string(),
        kind: NodeKind::Leaf(topics.iter().map(|t| t.to_string()).collect()),
    }
}

// ---------------------------------------------------------------------------
// ContentTree
// ---------------------------------------------------------------------------

/// The full portal catalog: one subtree per top section that has one.
///
/// API Playground deliberately has no entry; selecting it suppresses the
/// sidebar and leaves the active subsection empty.
#[derive(Debug, Clone)]
pub struct ContentTree {
    sections: Vec<(TopSection, Vec<TreeNode>)>,
}

impl ContentTree {
    /// Build the standard portal catalog.
    pub fn standard() -> Self {
        ContentTree {
            sections: vec![
                (
                    TopSection::Documents,
                    vec![
                        branch(
                            "Guides",
                            vec![
                                leaf("Getting Started", &["Quick Start", "Installation"]),
                                leaf("Authentication", &["OAuth", "API Keys"]),
                            ],
                        ),
                        branch(
                            "Payment Methods",
                            vec![
                                leaf("Credit Card", &["Visa", "Mastercard"]),
                                leaf("Bank Transfer", &["ACH", "SEPA"]),
                            ],
                        ),
                        branch(
                            "API References",
                            vec![
                                leaf("Customers", &["Create", "Retrieve", "Update", "Delete"]),
                                leaf("Charges", &["Create", "Capture", "Refund"]),
                            ],
                        ),
                    ],
                ),
                (
                    TopSection::Articles,
                    vec![
                        branch(
                            "Billing",
                            vec![
                                leaf("Invoices", &["Generation", "Management"]),
                                leaf("Pricing", &["Models", "Strategies"]),
                                leaf("Subscriptions", &["Setup", "Recurring Payments"]),
                            ],
                        ),
                        branch(
                            "Payments",
                            vec![
                                leaf("Processing", &["Authorization", "Capture"]),
                                leaf("Settlements", &["Timelines", "Reconciliation"]),
                                leaf("Disputes", &["Chargebacks", "Fraud Prevention"]),
                            ],
                        ),
                        branch(
                            "Security",
                            vec![
                                leaf("PCI Compliance", &["Requirements", "Implementation"]),
                                leaf("Fraud Prevention", &["Tools", "Best Practices"]),
                                leaf("Data Protection", &["Encryption", "GDPR Compliance"]),
                            ],
                        ),
                    ],
                ),
                (
                    TopSection::Faqs,
                    vec![
                        branch(
                            "Billing",
                            vec![
                                leaf("Account Setup", &["Registration", "Verification"]),
                                leaf("Billing Cycle", &["Frequency", "Adjustments"]),
                                leaf(
                                    "Payment Issues",
                                    &["Declined Transactions", "Retries"],
                                ),
                            ],
                        ),
                        branch(
                            "Payments",
                            vec![
                                leaf("Transaction Fees", &["Calculation", "Optimization"]),
                                leaf("Refund Policy", &["Timeframes", "Eligibility"]),
                                leaf("Currency Support", &["Conversion", "Settlement"]),
                            ],
                        ),
                        branch(
                            "Security",
                            vec![
                                leaf(
                                    "Account Security",
                                    &["Two-Factor Authentication", "Password Policy"],
                                ),
                                leaf("Data Encryption", &["In-Transit", "At-Rest"]),
                                leaf("Compliance Standards", &["PCI-DSS", "ISO 27001"]),
                            ],
                        ),
                    ],
                ),
                (
                    TopSection::Changelog,
                    vec![
                        branch(
                            "2024",
                            vec![
                                leaf(
                                    "May",
                                    &["Updated smart controls", "Enhanced API performance"],
                                ),
                                leaf(
                                    "April",
                                    &["New dashboard features", "Bug fixes in reporting module"],
                                ),
                                leaf(
                                    "March",
                                    &["Launched mobile SDK", "Improved documentation search"],
                                ),
                            ],
                        ),
                        branch(
                            "2023",
                            vec![
                                leaf(
                                    "December",
                                    &[
                                        "Year-end security updates",
                                        "New payment method integrations",
                                    ],
                                ),
                                leaf(
                                    "November",
                                    &["Revamped user interface", "Optimized database queries"],
                                ),
                                leaf(
                                    "October",
                                    &[
                                        "Introduced multi-currency support",
                                        "Enhanced fraud detection algorithms",
                                    ],
                                ),
                            ],
                        ),
                    ],
                ),
            ],
        }
    }

    /// The subtree for a section, or `None` when the section has no tree.
    pub fn section(&self, section: TopSection) -> Option<&[TreeNode]> {
        self.sections
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, nodes)| nodes.as_slice())
    }

    /// Name of the first category in a section's tree (declaration order).
    pub fn first_category(&self, section: TopSection) -> Option<&str> {
        self.section(section)
            .and_then(|nodes| nodes.first())
            .map(|node| node.name.as_str())
    }
}

// ---------------------------------------------------------------------------
// Sidebar flattening
// ---------------------------------------------------------------------------

/// One renderable sidebar row: a node made visible by the current
/// expansion state.
#[derive(Debug, Clone, PartialEq)]
pub struct SidebarRow {
    /// Dotted path from the section root to this node.
    pub path: String,
    /// Node name (what the row displays and what activation selects).
    pub name: String,
    /// Nesting depth, 0 at the section root.
    pub depth: usize,
    pub is_branch: bool,
    /// Whether this branch is currently expanded. Always false for leaves.
    pub expanded: bool,
}

/// Flatten a section tree into the rows the sidebar renders.
///
/// Walks depth-first; a branch's children appear only while the branch's
/// dotted path is marked expanded. Leaf topic strings are not emitted as
/// rows; the leaf's own name is the terminal selectable item.
pub fn visible_rows(nodes: &[TreeNode], expanded: &HashMap<String, bool>) -> Vec<SidebarRow> {
    let mut rows = Vec::new();
    collect_rows(nodes, "", 0, expanded, &mut rows);
    rows
}

fn collect_rows(
    nodes: &[TreeNode],
    prefix: &str,
    depth: usize,
    expanded: &HashMap<String, bool>,
    rows: &mut Vec<SidebarRow>,
) {
    for node in nodes {
        let path = if prefix.is_empty() {
            node.name.clone()
        } else {
            format!("{}.{}", prefix, node.name)
        };
        let is_open = node.is_branch() && expanded.get(&path).copied().unwrap_or(false);

        rows.push(SidebarRow {
            path: path.clone(),
            name: node.name.clone(),
            depth,
            is_branch: node.is_branch(),
            expanded: is_open,
        });

        if is_open {
            if let Some(children) = node.children() {
                collect_rows(children, &path, depth + 1, expanded, rows);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
