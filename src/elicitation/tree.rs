// Immutable decision tree mapping answers to preference vectors

use crate::models::PreferenceVector;
use std::fmt::Write;

pub type NodeId = usize;

#[derive(Debug, Clone, PartialEq)]
pub struct Branch {
    pub label: String,
    pub child: NodeId,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Question {
        question: String,
        branches: Vec<Branch>,
    },
    Leaf(PreferenceVector),
    /// Terminal node whose weights are asked for one by one
    Custom,
}

/// Arena of nodes addressed by index, read-only once built
#[derive(Debug, Clone)]
pub struct DecisionTree {
    nodes: Vec<Node>,
    root: NodeId,
}

/// Builds a tree bottom-up: children are added before the questions that reference them
#[derive(Debug, Default)]
pub struct DecisionTreeBuilder {
    nodes: Vec<Node>,
}

impl DecisionTreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn leaf(&mut self, preferences: PreferenceVector) -> NodeId {
        self.nodes.push(Node::Leaf(preferences));
        self.nodes.len() - 1
    }

    pub fn custom(&mut self) -> NodeId {
        self.nodes.push(Node::Custom);
        self.nodes.len() - 1
    }

    /// Adds a question node.
    ///
    /// # Panics
    /// If a branch points at a node that has not been added yet.
    pub fn question<S: Into<String>>(&mut self, question: S, branches: &[(&str, NodeId)]) -> NodeId {
        let branches = branches
            .iter()
            .map(|&(label, child)| {
                assert!(child < self.nodes.len(), "branch `{label}` points at missing node {child}");
                Branch {
                    label: label.to_string(),
                    child,
                }
            })
            .collect();
        self.nodes.push(Node::Question {
            question: question.into(),
            branches,
        });
        self.nodes.len() - 1
    }

    pub fn build(self, root: NodeId) -> DecisionTree {
        assert!(root < self.nodes.len(), "root {root} is not a node");
        DecisionTree {
            nodes: self.nodes,
            root,
        }
    }
}

impl DecisionTree {
    /// The tree used by default: what matters most, then one follow-up where useful
    pub fn standard() -> Self {
        let mut builder = DecisionTreeBuilder::new();

        let fastest = builder.leaf(PreferenceVector::new("fastest", 1.0, 0.0, 0.0));
        let fast_on_budget = builder.leaf(PreferenceVector::new("fast on a budget", 0.6, 0.4, 0.0));
        let speed = builder.question(
            "Is the budget tight?",
            &[("yes", fast_on_budget), ("no", fastest)],
        );

        let cheapest = builder.leaf(PreferenceVector::new("cheapest", 0.0, 1.0, 0.0));
        let economy = builder.leaf(PreferenceVector::new("economy", 0.4, 0.6, 0.0));
        let price = builder.question(
            "Would you accept a much longer trip to save money?",
            &[("yes", cheapest), ("no", economy)],
        );

        let shortest = builder.leaf(PreferenceVector::new("shortest", 0.0, 0.0, 1.0));
        let balanced = builder.leaf(PreferenceVector::new(
            "balanced",
            1.0 / 3.0,
            1.0 / 3.0,
            1.0 / 3.0,
        ));
        let custom = builder.custom();

        let root = builder.question(
            "What matters most on this trip?",
            &[
                ("speed", speed),
                ("price", price),
                ("distance", shortest),
                ("balanced", balanced),
                ("custom", custom),
            ],
        );
        builder.build(root)
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Leaf preferences, `None` for question and custom nodes
    pub fn leaf(&self, id: NodeId) -> Option<&PreferenceVector> {
        match self.nodes.get(id) {
            Some(Node::Leaf(preferences)) => Some(preferences),
            _ => None,
        }
    }

    /// Branch labels of a question node in matching order
    pub fn options(&self, id: NodeId) -> Vec<&str> {
        match self.nodes.get(id) {
            Some(Node::Question { branches, .. }) => {
                let labels: Vec<&str> = branches.iter().map(|b| b.label.as_str()).collect();
                canonical_order(&labels)
                    .into_iter()
                    .map(|index| labels[index])
                    .collect()
            }
            _ => Vec::new(),
        }
    }

    /// Child reached from a question node by `answer`, `None` if nothing matches
    pub fn step(&self, id: NodeId, answer: &str) -> Option<NodeId> {
        let Some(Node::Question { branches, .. }) = self.nodes.get(id) else {
            return None;
        };
        let labels: Vec<&str> = branches.iter().map(|b| b.label.as_str()).collect();
        select_option(&labels, answer).map(|index| branches[index].child)
    }

    /// Indented text rendering of the whole tree
    pub fn describe(&self) -> String {
        let mut out = String::new();
        self.describe_node(self.root, 0, &mut out);
        out
    }

    fn describe_node(&self, id: NodeId, depth: usize, out: &mut String) {
        let indent = "  ".repeat(depth);
        match self.nodes.get(id) {
            Some(Node::Question { question, branches }) => {
                let _ = writeln!(out, "{indent}? {question}");
                let labels: Vec<&str> = branches.iter().map(|b| b.label.as_str()).collect();
                for index in canonical_order(&labels) {
                    let _ = writeln!(out, "{indent}  [{}]", labels[index]);
                    self.describe_node(branches[index].child, depth + 2, out);
                }
            }
            Some(Node::Leaf(preferences)) => {
                let _ = writeln!(out, "{indent}= {preferences}");
            }
            Some(Node::Custom) => {
                let _ = writeln!(out, "{indent}= custom (time, cost and distance weights asked)");
            }
            None => {
                let _ = writeln!(out, "{indent}! missing node {id}");
            }
        }
    }
}

/// Indices of `labels` in the order options are shown and matched:
/// lexicographic ignoring ASCII case, exact spelling breaking ties
pub fn canonical_order(labels: &[&str]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..labels.len()).collect();
    order.sort_by(|&a, &b| {
        labels[a]
            .to_ascii_lowercase()
            .cmp(&labels[b].to_ascii_lowercase())
            .then_with(|| labels[a].cmp(labels[b]))
    });
    order
}

/// Index into `labels` of the first label, in canonical order, that starts
/// with `answer`. Matching ignores ASCII case and surrounding whitespace; a
/// blank answer matches nothing.
pub fn select_option(labels: &[&str], answer: &str) -> Option<usize> {
    let answer = answer.trim().to_ascii_lowercase();
    if answer.is_empty() {
        return None;
    }

    canonical_order(labels)
        .into_iter()
        .find(|&index| labels[index].to_ascii_lowercase().starts_with(&answer))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_option_prefix() {
        let labels = ["speed", "price", "distance", "balanced"];
        assert_eq!(select_option(&labels, "sp"), Some(0));
        assert_eq!(select_option(&labels, "P"), Some(1));
        assert_eq!(select_option(&labels, " distance "), Some(2));
        assert_eq!(select_option(&labels, "x"), None);
        assert_eq!(select_option(&labels, "   "), None);
        assert_eq!(select_option(&labels, "speedy"), None);
    }

    #[test]
    fn test_select_option_ambiguous_prefix_takes_lexicographic_first() {
        let labels = ["train", "taxi", "tram"];
        assert_eq!(select_option(&labels, "t"), Some(1));
        assert_eq!(select_option(&labels, "tr"), Some(0));
    }

    #[test]
    fn test_select_option_order_ignores_case() {
        // byte order would put `Train` before `taxi`
        let labels = ["Train", "taxi"];
        assert_eq!(select_option(&labels, "t"), Some(1));
        assert_eq!(select_option(&labels, "TR"), Some(0));
        assert_eq!(canonical_order(&labels), vec![1, 0]);

        let mut builder = DecisionTreeBuilder::new();
        let train = builder.leaf(PreferenceVector::new("rail", 1.0, 0.0, 0.0));
        let taxi = builder.leaf(PreferenceVector::new("door to door", 1.0, 0.0, 0.0));
        let root = builder.question("How?", &[("Train", train), ("taxi", taxi)]);
        let tree = builder.build(root);

        // the first option shown is the one a shared prefix selects
        assert_eq!(tree.options(root), vec!["taxi", "Train"]);
        assert_eq!(tree.step(root, "t"), Some(taxi));
        let text = tree.describe();
        assert!(text.find("[taxi]").unwrap() < text.find("[Train]").unwrap());
    }

    #[test]
    fn test_step_and_leaf() {
        let tree = DecisionTree::standard();
        let root = tree.root();
        assert!(tree.leaf(root).is_none());

        let distance = tree.step(root, "d").unwrap();
        assert_eq!(tree.leaf(distance).unwrap().profile, "shortest");

        let custom = tree.step(root, "c").unwrap();
        assert_eq!(tree.node(custom), Some(&Node::Custom));
        assert!(tree.leaf(custom).is_none());
        assert_eq!(tree.step(custom, "custom"), None);
        assert_eq!(tree.step(distance, "anything"), None);
        assert_eq!(tree.step(root, "nope"), None);
    }

    #[test]
    fn test_options_sorted() {
        let tree = DecisionTree::standard();
        assert_eq!(
            tree.options(tree.root()),
            vec!["balanced", "custom", "distance", "price", "speed"]
        );
    }

    #[test]
    fn test_describe_lists_every_leaf() {
        let text = DecisionTree::standard().describe();
        for profile in [
            "fastest",
            "fast on a budget",
            "cheapest",
            "economy",
            "shortest",
            "balanced",
        ] {
            assert!(text.contains(profile), "missing {profile} in\n{text}");
        }
        assert!(text.contains("[custom]"));
        assert!(text.starts_with("? What matters most on this trip?"));
    }

    #[test]
    fn test_walking_a_missing_node_is_error() {
        let tree = DecisionTree {
            nodes: Vec::new(),
            root: 3,
        };
        let mut answers = crate::elicitation::ScriptedAnswers::new(["speed"]);

        assert!(matches!(
            crate::elicitation::elicit_weights(&tree, &mut answers),
            Err(crate::error::RouteError::MissingNode(3))
        ));
        assert_eq!(answers.remaining(), 1);
        assert!(tree.describe().contains("missing node 3"));
    }

    #[test]
    #[should_panic]
    fn test_builder_rejects_forward_reference() {
        let mut builder = DecisionTreeBuilder::new();
        builder.question("Where?", &[("here", 5)]);
    }
}
