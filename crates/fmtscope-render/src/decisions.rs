use fmtscope_types::{
    DocLevel, ExplorationNode, FormatterDecisions, FormatterState, Id, LevelNode,
};

// NOTE: Decision Tree View State
//
// The tree control has to stay responsive on large searches, so the flattened
// visible-row list is rebuilt only when an expand/collapse actually occurred
// (tracked by `revision`, the moral equivalent of a cache-bust counter).
// Moving the cursor - the hover analogue - changes an index and nothing else;
// frontends restyle the row under the cursor without touching the row list.

#[derive(Debug, Clone, Copy)]
pub enum DecisionNodeData<'a> {
    Exploration(&'a ExplorationNode),
    Level(&'a LevelNode),
}

#[derive(Debug)]
pub struct DecisionNode<'a> {
    pub data: DecisionNodeData<'a>,
    pub parent: Option<usize>,
    pub children: Vec<usize>,
    pub depth: usize,
    /// Expanded in the tree control.
    pub toggled: bool,
    /// On the accepted path: the exploration its parent level went with, or
    /// a level inside such an exploration.
    pub active: bool,
    /// For exploration nodes: the document level id of the enclosing level
    /// node, used to highlight that level in the inline document.
    pub parent_level_id: Option<Id>,
}

impl<'a> DecisionNode<'a> {
    pub fn id(&self) -> Id {
        match self.data {
            DecisionNodeData::Exploration(e) => e.id,
            DecisionNodeData::Level(l) => l.id,
        }
    }

    pub fn label(&self) -> String {
        match self.data {
            DecisionNodeData::Exploration(e) => e.human_description.clone(),
            DecisionNodeData::Level(l) => l
                .debug_name
                .clone()
                .unwrap_or_else(|| l.id.to_string()),
        }
    }

    /// Hover detail, mirroring the node tooltips.
    pub fn detail(&self) -> String {
        match self.data {
            DecisionNodeData::Exploration(e) => e.id.to_string(),
            DecisionNodeData::Level(l) => {
                format!("Node ID: {}, Level ID: {}", l.id, l.level_id)
            }
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// A doc level that should be displayed because its exploration is hovered,
/// at the column it would have occupied in context.
#[derive(Debug, Clone, Copy)]
pub struct RenderedExploration<'a> {
    pub level: &'a DocLevel,
    pub starting_column: u32,
}

/// Formatter state before and (when the node has a result) after a decision.
#[derive(Debug, Clone, Copy)]
pub struct StatePanel<'a> {
    pub title: &'static str,
    pub incoming: Option<&'a FormatterState>,
    pub result: Option<&'a FormatterState>,
}

/// Everything a hover/selection drives in the surrounding panels.
#[derive(Debug, Clone, Copy)]
pub struct SelectionEffects<'a> {
    pub rendered_output: Option<RenderedExploration<'a>>,
    pub highlight_level: Option<Id>,
    pub states: StatePanel<'a>,
}

pub struct DecisionTreeView<'a> {
    nodes: Vec<DecisionNode<'a>>,
    visible: Vec<usize>,
    cursor: usize,
    revision: u64,
}

impl<'a> DecisionTreeView<'a> {
    pub fn new(root: &'a FormatterDecisions) -> Self {
        let mut view = Self {
            nodes: Vec::new(),
            visible: Vec::new(),
            cursor: 0,
            revision: 0,
        };
        view.add_exploration(root, None, 0);
        view.rebuild_visible();
        view
    }

    fn add_exploration(
        &mut self,
        node: &'a ExplorationNode,
        parent: Option<usize>,
        depth: usize,
    ) -> usize {
        // Expanded and marked active by default iff on the accepted path:
        // the root, or the exploration its parent level node accepted.
        let (active, parent_level_id) = match parent {
            None => (true, None),
            Some(p) => match self.nodes[p].data {
                DecisionNodeData::Level(level) => (
                    level.accepted_exploration_id == Some(node.id),
                    Some(level.level_id),
                ),
                DecisionNodeData::Exploration(_) => (false, None),
            },
        };

        let idx = self.nodes.len();
        self.nodes.push(DecisionNode {
            data: DecisionNodeData::Exploration(node),
            parent,
            children: Vec::new(),
            depth,
            toggled: active,
            active,
            parent_level_id,
        });
        for child in &node.children {
            let child_idx = self.add_level(child, idx, depth + 1);
            self.nodes[idx].children.push(child_idx);
        }
        idx
    }

    fn add_level(&mut self, node: &'a LevelNode, parent: usize, depth: usize) -> usize {
        // Level nodes are always expanded by default; they are active when
        // the exploration containing them is.
        let active = self.nodes[parent].active;
        let idx = self.nodes.len();
        self.nodes.push(DecisionNode {
            data: DecisionNodeData::Level(node),
            parent: Some(parent),
            children: Vec::new(),
            depth,
            toggled: true,
            active,
            parent_level_id: None,
        });
        for child in &node.children {
            let child_idx = self.add_exploration(child, Some(idx), depth + 1);
            self.nodes[idx].children.push(child_idx);
        }
        idx
    }

    fn rebuild_visible(&mut self) {
        self.visible.clear();
        let mut stack = vec![0usize];
        while let Some(idx) = stack.pop() {
            self.visible.push(idx);
            if self.nodes[idx].toggled {
                for &child in self.nodes[idx].children.iter().rev() {
                    stack.push(child);
                }
            }
        }
        self.revision += 1;
        if self.cursor >= self.visible.len() {
            self.cursor = self.visible.len() - 1;
        }
    }

    pub fn nodes(&self) -> &[DecisionNode<'a>] {
        &self.nodes
    }

    /// Node indexes currently shown, in draw order.
    pub fn visible(&self) -> &[usize] {
        &self.visible
    }

    /// Bumped whenever the visible-row list was rebuilt.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn hovered_index(&self) -> usize {
        self.visible[self.cursor]
    }

    pub fn hovered(&self) -> &DecisionNode<'a> {
        &self.nodes[self.hovered_index()]
    }

    pub fn select_next(&mut self) {
        if self.cursor + 1 < self.visible.len() {
            self.cursor += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Flip expansion of the node under the cursor. No-op on leaves.
    pub fn toggle_hovered(&mut self) {
        let idx = self.hovered_index();
        if self.nodes[idx].is_leaf() {
            return;
        }
        self.nodes[idx].toggled = !self.nodes[idx].toggled;
        self.rebuild_visible();
    }

    /// Expand every node (the `--full` console report).
    pub fn expand_all(&mut self) {
        for node in &mut self.nodes {
            node.toggled = true;
        }
        self.rebuild_visible();
    }

    pub fn effects(&self) -> SelectionEffects<'a> {
        self.effects_for(self.hovered_index())
    }

    pub fn effects_for(&self, idx: usize) -> SelectionEffects<'a> {
        let node = &self.nodes[idx];
        match node.data {
            DecisionNodeData::Level(level) => SelectionEffects {
                rendered_output: None,
                highlight_level: Some(level.level_id),
                states: StatePanel {
                    title: "Level node",
                    incoming: Some(&level.incoming_state),
                    result: None,
                },
            },
            DecisionNodeData::Exploration(exploration) => {
                // Highlighting the root is not informative, so the root
                // clears the rendered-output pane.
                let rendered_output = if node.parent.is_none() {
                    None
                } else {
                    exploration.result.as_ref().map(|r| RenderedExploration {
                        level: &r.output_level,
                        starting_column: exploration.start_column,
                    })
                };
                SelectionEffects {
                    rendered_output,
                    highlight_level: node.parent_level_id,
                    states: StatePanel {
                        title: "Exploration node",
                        incoming: exploration.incoming_state.as_ref(),
                        result: exploration.result.as_ref().map(|r| &r.final_state),
                    },
                }
            }
        }
    }
}
