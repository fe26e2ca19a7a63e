use std::collections::HashMap;
use std::sync::Arc;

use crate::attributes::AttributeVector;
use crate::error::{Error, Result};

/// Numeric identifier for a graph node.
pub type NodeId = i64;

/// Directed edge within the attributed graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub target: NodeId,
    pub attributes: AttributeVector,
}

/// Read-only view of an attributed graph consumed by the search algorithms.
pub trait GraphModel {
    /// Number of attributes carried by every edge.
    fn dimension(&self) -> usize;

    /// Whether `node` belongs to the graph's node set.
    fn contains_node(&self, node: NodeId) -> bool;

    /// Outgoing edges of `node` in insertion order. Unknown nodes have none.
    fn neighbours(&self, node: NodeId) -> &[Edge];

    /// Attribute vector of the direct edge `from -> to`.
    fn edge_attributes(&self, from: NodeId, to: NodeId) -> Result<&AttributeVector> {
        self.neighbours(from)
            .iter()
            .find(|edge| edge.target == to)
            .map(|edge| &edge.attributes)
            .ok_or(Error::MissingEdge { from, to })
    }
}

/// Immutable attributed graph. Cloning is cheap; the adjacency is shared.
#[derive(Debug, Clone)]
pub struct Graph {
    dimension: usize,
    nodes: Arc<[NodeId]>,
    adjacency: Arc<HashMap<NodeId, Vec<Edge>>>,
}

impl Graph {
    /// Start building a graph whose edges carry `dimension` attributes.
    pub fn builder(dimension: usize) -> GraphBuilder {
        GraphBuilder::new(dimension)
    }

    /// Node identifiers in declaration order.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}

impl GraphModel for Graph {
    fn dimension(&self) -> usize {
        self.dimension
    }

    fn contains_node(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    fn neighbours(&self, node: NodeId) -> &[Edge] {
        self.adjacency
            .get(&node)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Incremental, validating constructor for [`Graph`].
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    dimension: usize,
    nodes: Vec<NodeId>,
    adjacency: HashMap<NodeId, Vec<Edge>>,
}

impl GraphBuilder {
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            nodes: Vec::new(),
            adjacency: HashMap::new(),
        }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn contains_node(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    /// Declare a node. Declaring the same node twice is an error.
    pub fn add_node(&mut self, node: NodeId) -> Result<&mut Self> {
        if self.contains_node(node) {
            return Err(Error::DuplicateNode { node });
        }
        self.ensure_node(node);
        Ok(self)
    }

    /// Declare a node unless it is already present.
    pub fn ensure_node(&mut self, node: NodeId) -> &mut Self {
        if !self.contains_node(node) {
            self.nodes.push(node);
            self.adjacency.insert(node, Vec::new());
        }
        self
    }

    /// Add the directed edge `from -> to`. Both endpoints must already be declared.
    pub fn add_edge(
        &mut self,
        from: NodeId,
        to: NodeId,
        attributes: impl Into<AttributeVector>,
    ) -> Result<&mut Self> {
        let attributes = attributes.into();
        self.validate_edge(from, to, &attributes)?;

        if let Some(edges) = self.adjacency.get_mut(&from) {
            edges.push(Edge {
                target: to,
                attributes,
            });
        }
        Ok(self)
    }

    /// Add `from -> to` and `to -> from` with the same attributes.
    pub fn add_undirected_edge(
        &mut self,
        from: NodeId,
        to: NodeId,
        attributes: impl Into<AttributeVector>,
    ) -> Result<&mut Self> {
        let attributes = attributes.into();
        self.validate_edge(from, to, &attributes)?;
        self.validate_edge(to, from, &attributes)?;
        self.add_edge(from, to, attributes.clone())?;
        if from != to {
            self.add_edge(to, from, attributes)?;
        }
        Ok(self)
    }

    pub fn build(self) -> Graph {
        Graph {
            dimension: self.dimension,
            nodes: self.nodes.into(),
            adjacency: Arc::new(self.adjacency),
        }
    }

    fn validate_edge(&self, from: NodeId, to: NodeId, attributes: &AttributeVector) -> Result<()> {
        if attributes.len() != self.dimension {
            return Err(Error::DimensionMismatch {
                expected: self.dimension,
                actual: attributes.len(),
            });
        }
        if let Some(&value) = attributes.as_slice().iter().find(|v| !v.is_finite()) {
            return Err(Error::InvalidAttribute { from, to, value });
        }

        let Some(edges) = self.adjacency.get(&from) else {
            return Err(Error::UnknownNode { node: from });
        };
        if !self.contains_node(to) {
            return Err(Error::UnknownNode { node: to });
        }
        if edges.iter().any(|edge| edge.target == to) {
            return Err(Error::DuplicateEdge { from, to });
        }
        Ok(())
    }
}
