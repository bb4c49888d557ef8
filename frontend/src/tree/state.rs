//! Per-node expansion state for the lazily loaded person tree.
//!
//! `TreeState::apply` is the only way the tree changes. It returns a
//! [`FetchRequest`] when the event needs children from the server; the caller
//! performs the request and feeds the outcome back in as another event.
//! Responses are matched against the node's current state, so a response for a
//! node that is no longer `Loading` is dropped.

use std::collections::HashMap;

use shared::{Node, NodesRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expansion {
    /// No children; toggling does nothing
    Leaf,
    /// Has children that have not been fetched; shows a placeholder
    Collapsed,
    /// Children requested, response pending
    Loading,
    Expanded,
    /// Children fetched but hidden
    Closed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    pub id: String,
    pub label: String,
    pub link: String,
    pub expansion: Expansion,
    pub children: Vec<String>,
}

impl TreeNode {
    fn from_node(node: Node) -> Self {
        let expansion = if node.has_children {
            Expansion::Collapsed
        } else {
            Expansion::Leaf
        };
        Self {
            id: node.id,
            label: node.label,
            link: node.link,
            expansion,
            children: Vec::new(),
        }
    }

    /// Whether the inert placeholder child should be rendered under this node
    pub fn shows_placeholder(&self) -> bool {
        matches!(self.expansion, Expansion::Collapsed | Expansion::Loading)
    }

    pub fn shows_children(&self) -> bool {
        self.expansion == Expansion::Expanded
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RootState {
    #[default]
    Idle,
    Loading,
    Loaded,
}

/// A children request the caller has to send. `parent: None` is the root sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub parent: Option<String>,
    pub generation: u64,
}

impl FetchRequest {
    pub fn to_request(&self) -> NodesRequest {
        match &self.parent {
            Some(id) => NodesRequest::for_parent(id.clone()),
            None => NodesRequest::root(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TreeEvent {
    /// First render; loads the root level once
    Start,
    /// Throw the tree away and load the root level again
    Reload,
    Toggle(String),
    ChildrenLoaded {
        request: FetchRequest,
        nodes: Vec<Node>,
    },
    LoadFailed {
        request: FetchRequest,
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TreeState {
    nodes: HashMap<String, TreeNode>,
    roots: Vec<String>,
    root: RootState,
    status: Option<String>,
    generation: u64,
}

impl TreeState {
    pub fn apply(&mut self, event: TreeEvent) -> Option<FetchRequest> {
        match event {
            TreeEvent::Start => {
                if self.root != RootState::Idle {
                    return None;
                }
                self.root = RootState::Loading;
                Some(self.fetch(None))
            }
            TreeEvent::Reload => {
                self.nodes.clear();
                self.roots.clear();
                self.status = None;
                self.generation += 1;
                self.root = RootState::Loading;
                Some(self.fetch(None))
            }
            TreeEvent::Toggle(id) => self.toggle(&id),
            TreeEvent::ChildrenLoaded { request, nodes } => {
                self.children_loaded(request, nodes);
                None
            }
            TreeEvent::LoadFailed { request, message } => {
                self.load_failed(request, message);
                None
            }
        }
    }

    pub fn roots(&self) -> impl Iterator<Item = &TreeNode> {
        self.roots.iter().filter_map(|id| self.nodes.get(id))
    }

    pub fn children<'a>(&'a self, node: &'a TreeNode) -> impl Iterator<Item = &'a TreeNode> + 'a {
        node.children.iter().filter_map(|id| self.nodes.get(id))
    }

    pub fn node(&self, id: &str) -> Option<&TreeNode> {
        self.nodes.get(id)
    }

    pub fn root_state(&self) -> RootState {
        self.root
    }

    /// Last load failure, for the status region
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    fn fetch(&self, parent: Option<String>) -> FetchRequest {
        FetchRequest {
            parent,
            generation: self.generation,
        }
    }

    fn toggle(&mut self, id: &str) -> Option<FetchRequest> {
        let node = self.nodes.get_mut(id)?;
        match node.expansion {
            Expansion::Leaf | Expansion::Loading => None,
            Expansion::Collapsed => {
                node.expansion = Expansion::Loading;
                Some(self.fetch(Some(id.to_string())))
            }
            Expansion::Expanded => {
                node.expansion = Expansion::Closed;
                None
            }
            Expansion::Closed => {
                node.expansion = Expansion::Expanded;
                None
            }
        }
    }

    /// Register fetched nodes, keeping any that are already known
    fn insert_nodes(&mut self, nodes: Vec<Node>) -> Vec<String> {
        let mut ids = Vec::with_capacity(nodes.len());
        for node in nodes {
            let id = node.id.clone();
            if ids.contains(&id) {
                continue;
            }
            self.nodes
                .entry(id.clone())
                .or_insert_with(|| TreeNode::from_node(node));
            ids.push(id);
        }
        ids
    }

    fn children_loaded(&mut self, request: FetchRequest, nodes: Vec<Node>) {
        if request.generation != self.generation {
            return;
        }

        match request.parent {
            None => {
                if self.root != RootState::Loading {
                    return;
                }
                self.roots = self.insert_nodes(nodes);
                self.root = RootState::Loaded;
            }
            Some(parent) => {
                let is_loading = self
                    .nodes
                    .get(&parent)
                    .is_some_and(|n| n.expansion == Expansion::Loading);
                if !is_loading {
                    return;
                }
                let children = self.insert_nodes(nodes);
                if let Some(node) = self.nodes.get_mut(&parent) {
                    node.children = children;
                    node.expansion = Expansion::Expanded;
                }
            }
        }
        self.status = None;
    }

    fn load_failed(&mut self, request: FetchRequest, message: String) {
        if request.generation != self.generation {
            return;
        }

        match request.parent {
            None => {
                if self.root != RootState::Loading {
                    return;
                }
                self.root = RootState::Idle;
            }
            Some(parent) => match self.nodes.get_mut(&parent) {
                Some(node) if node.expansion == Expansion::Loading => {
                    node.expansion = Expansion::Collapsed;
                }
                _ => return,
            },
        }
        self.status = Some(message);
    }
}
