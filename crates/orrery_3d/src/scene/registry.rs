//! Named scene node registry
//!
//! Nodes live in a slotmap and are addressed either by [`NodeKey`] or by
//! their unique name. Each node has an optional parent; a node's world
//! position is its local position plus those of all its ancestors.

use crate::error::{Result, SceneError};
use orrery_core::Vec3;
use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

new_key_type! {
    /// Handle to a node in the [`SceneGraph`]
    pub struct NodeKey;
}

/// A single positioned node
#[derive(Clone, Debug)]
pub struct SceneNode {
    name: String,
    /// Parent node (None for roots)
    pub parent: Option<NodeKey>,
    /// Child nodes
    pub children: SmallVec<[NodeKey; 4]>,
    /// Position relative to the parent
    pub local_position: Vec3,
    /// Rotation about the local Y axis in radians
    pub rotation_y: f32,
    /// Uniform display scale
    pub scale: f32,
}

impl SceneNode {
    fn new(name: String, parent: Option<NodeKey>) -> Self {
        Self {
            name,
            parent,
            children: SmallVec::new(),
            local_position: Vec3::ZERO,
            rotation_y: 0.0,
            scale: 1.0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check if this is a root node
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Registry of named nodes with parent links
#[derive(Default)]
pub struct SceneGraph {
    nodes: SlotMap<NodeKey, SceneNode>,
    by_name: FxHashMap<String, NodeKey>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node under `name`, optionally as a child of `parent`
    pub fn insert(&mut self, name: impl Into<String>, parent: Option<NodeKey>) -> Result<NodeKey> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            return Err(SceneError::DuplicateNode(name));
        }
        if let Some(parent) = parent {
            if !self.nodes.contains_key(parent) {
                return Err(SceneError::MissingParent {
                    parent: format!("{parent:?}"),
                    child: name,
                });
            }
        }

        let key = self.nodes.insert(SceneNode::new(name.clone(), parent));
        if let Some(parent) = parent.and_then(|p| self.nodes.get_mut(p)) {
            parent.children.push(key);
        }
        self.by_name.insert(name, key);
        Ok(key)
    }

    /// Remove a node and its whole subtree
    pub fn remove(&mut self, key: NodeKey) -> Option<SceneNode> {
        let node = self.nodes.remove(key)?;
        self.by_name.remove(&node.name);
        if let Some(parent) = node.parent.and_then(|p| self.nodes.get_mut(p)) {
            parent.children.retain(|c| *c != key);
        }
        for child in node.children.iter() {
            self.remove(*child);
        }
        Some(node)
    }

    /// Look up a node key by name
    pub fn key(&self, name: &str) -> Option<NodeKey> {
        self.by_name.get(name).copied()
    }

    pub fn get(&self, key: NodeKey) -> Option<&SceneNode> {
        self.nodes.get(key)
    }

    pub fn get_mut(&mut self, key: NodeKey) -> Option<&mut SceneNode> {
        self.nodes.get_mut(key)
    }

    /// Set a node's position relative to its parent
    pub fn set_local_position(&mut self, key: NodeKey, position: Vec3) {
        if let Some(node) = self.nodes.get_mut(key) {
            node.local_position = position;
        }
    }

    /// World position of a node, summing local positions up the parent chain
    pub fn world_position(&self, key: NodeKey) -> Option<Vec3> {
        let mut node = self.nodes.get(key)?;
        let mut position = node.local_position;
        while let Some(parent) = node.parent.and_then(|p| self.nodes.get(p)) {
            position += parent.local_position;
            node = parent;
        }
        Some(position)
    }

    /// World position of a node looked up by name
    pub fn world_position_of(&self, name: &str) -> Option<Vec3> {
        self.key(name).and_then(|key| self.world_position(key))
    }

    /// Child nodes of `key`
    pub fn children(&self, key: NodeKey) -> &[NodeKey] {
        self.nodes
            .get(key)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeKey, &SceneNode)> {
        self.nodes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_position_sums_parent_chain() {
        let mut graph = SceneGraph::new();
        let frame = graph.insert("frame", None).unwrap();
        let earth = graph.insert("Earth", Some(frame)).unwrap();
        let moon = graph.insert("Moon", Some(earth)).unwrap();

        graph.set_local_position(frame, Vec3::new(0.0, 0.0, -10.0));
        graph.set_local_position(earth, Vec3::new(20.0, 0.0, 0.0));
        graph.set_local_position(moon, Vec3::new(1.0, 0.0, 1.0));

        assert_eq!(graph.world_position(moon), Some(Vec3::new(21.0, 0.0, -9.0)));
        assert_eq!(
            graph.world_position_of("Earth"),
            Some(Vec3::new(20.0, 0.0, -10.0))
        );
        assert_eq!(graph.children(earth), &[moon]);
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let mut graph = SceneGraph::new();
        graph.insert("Sun", None).unwrap();
        assert!(matches!(
            graph.insert("Sun", None),
            Err(SceneError::DuplicateNode(_))
        ));
    }

    #[test]
    fn test_remove_drops_subtree() {
        let mut graph = SceneGraph::new();
        let frame = graph.insert("frame", None).unwrap();
        let earth = graph.insert("Earth", Some(frame)).unwrap();
        graph.insert("Moon", Some(earth)).unwrap();

        graph.remove(earth);
        assert_eq!(graph.len(), 1);
        assert!(graph.key("Moon").is_none());
        assert!(graph.world_position_of("Earth").is_none());
        assert!(graph.children(frame).is_empty());
    }

    #[test]
    fn test_missing_parent_rejected() {
        let mut graph = SceneGraph::new();
        let stale = graph.insert("gone", None).unwrap();
        graph.remove(stale);
        assert!(matches!(
            graph.insert("orphan", Some(stale)),
            Err(SceneError::MissingParent { .. })
        ));
    }
}
