//! Agent tree arena.
//!
//! # Structure
//! - Built by consuming an owned root node; children are owned exclusively by
//!   their parent, so the structure is a strict tree by construction
//! - Nodes live in an arena of slots; the parent back-reference is an index,
//!   never an ownership edge
//!
//! # Invariants
//! - Exactly one root, at index 0
//! - Every non-root node has a parent; parent chains are acyclic and finite
//! - Names are unique within the tree

use std::collections::HashMap;
use std::fmt;

use super::node::AgentNode;

/// Index of a node in the tree arena.
///
/// Only meaningful for the tree that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors in tree construction.
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    #[error("Duplicate agent name in tree: {0}")]
    DuplicateName(String),
}

#[derive(Debug)]
struct Slot {
    node: AgentNode,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Arena of agent nodes with parent index links.
#[derive(Debug)]
pub struct AgentTree {
    slots: Vec<Slot>,
    by_name: HashMap<String, NodeId>,
}

impl AgentTree {
    /// Build a tree by consuming the root node and its owned sub-agents.
    ///
    /// # Errors
    /// Returns an error if two nodes anywhere in the tree share a name.
    pub fn build(root: AgentNode) -> Result<Self, TreeError> {
        let mut tree = Self {
            slots: Vec::new(),
            by_name: HashMap::new(),
        };
        tree.attach(root, None)?;
        Ok(tree)
    }

    fn attach(&mut self, mut node: AgentNode, parent: Option<NodeId>) -> Result<NodeId, TreeError> {
        if self.by_name.contains_key(node.name()) {
            return Err(TreeError::DuplicateName(node.name().to_string()));
        }

        let children = std::mem::take(&mut node.sub_agents);
        let id = NodeId(self.slots.len());
        self.by_name.insert(node.name().to_string(), id);
        self.slots.push(Slot {
            node,
            parent,
            children: Vec::new(),
        });

        for child in children {
            let child_id = self.attach(child, Some(id))?;
            self.slots[id.0].children.push(child_id);
        }
        Ok(id)
    }

    /// The root node's id.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Get a node's declarations.
    pub fn get(&self, id: NodeId) -> Option<&AgentNode> {
        self.slots.get(id.0).map(|slot| &slot.node)
    }

    /// Find a node anywhere in the tree by name.
    pub fn find_agent(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }

    /// Parent of a node, if it is not the root.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.slots.get(id.0).and_then(|slot| slot.parent)
    }

    /// Children of a node, in declaration order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.slots
            .get(id.0)
            .map(|slot| slot.children.as_slice())
            .unwrap_or(&[])
    }

    /// Walk the parent chain root-ward, excluding `id` itself.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), move |&current| self.parent(current))
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Internal accessor for ids minted by this tree.
    pub(crate) fn node(&self, id: NodeId) -> &AgentNode {
        &self.slots[id.0].node
    }
}
