use serde::Deserialize;

use crate::error::ModelError;

/// One node of a decision tree. Children are indices into the owning
/// tree's node list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: Vec<f64>,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Tree {
    pub nodes: Vec<Node>,
}

impl Tree {
    /// Children must point strictly forward so traversal always terminates.
    pub(crate) fn validate(
        &self,
        tree: usize,
        n_features: usize,
        leaf_width: usize,
    ) -> Result<(), ModelError> {
        if self.nodes.is_empty() {
            return Err(ModelError::Invalid(format!("tree {tree} has no nodes")));
        }
        let len = self.nodes.len();
        for (idx, node) in self.nodes.iter().enumerate() {
            match node {
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if *feature >= n_features {
                        return Err(ModelError::Invalid(format!(
                            "tree {tree} node {idx} splits on feature {feature}, model has {n_features}"
                        )));
                    }
                    if !threshold.is_finite() {
                        return Err(ModelError::Invalid(format!(
                            "tree {tree} node {idx} has a non-finite threshold"
                        )));
                    }
                    for child in [*left, *right] {
                        if child <= idx || child >= len {
                            return Err(ModelError::Invalid(format!(
                                "tree {tree} node {idx} has out-of-order child {child}"
                            )));
                        }
                    }
                }
                Node::Leaf { value } => {
                    if value.len() != leaf_width {
                        return Err(ModelError::Invalid(format!(
                            "tree {tree} leaf {idx} has {} values, expected {leaf_width}",
                            value.len()
                        )));
                    }
                    if value.iter().any(|v| !v.is_finite()) {
                        return Err(ModelError::Invalid(format!(
                            "tree {tree} leaf {idx} has a non-finite value"
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    /// Walks from the root; splits go left when `x[feature] <= threshold`.
    pub(crate) fn leaf(&self, features: &[f64]) -> Result<&[f64], ModelError> {
        let mut idx = 0;
        loop {
            match self.nodes.get(idx) {
                Some(Node::Leaf { value }) => return Ok(value),
                Some(Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    let x = features.get(*feature).copied().ok_or_else(|| {
                        ModelError::Invalid(format!("feature {feature} missing from input"))
                    })?;
                    idx = if x <= *threshold { *left } else { *right };
                }
                None => {
                    return Err(ModelError::Invalid(format!("dangling node index {idx}")));
                }
            }
        }
    }
}
