//! Keyboard navigation through the tree, one subtree at a time.

use city_bsp::{BspNode, BspTree, Direction};
use macroquad::prelude::*;

use crate::{draw_edge_colored, Bounds, RenderVisitor, Viewport};

const DIMMED: Color = Color::new(0.3, 0.3, 0.3, 1.0);

/// Path from the root to the node being inspected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeNavigator {
    path: Vec<Direction>,
}

impl TreeNavigator {
    /// Creates a new navigator starting at the root.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(&self) -> &[Direction] {
        &self.path
    }

    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// Descends into `direction` if that child exists.
    pub fn go(&mut self, tree: &BspTree, direction: Direction) -> bool {
        let exists = self
            .current_node(tree)
            .and_then(|node| node.child(direction))
            .is_some();
        if exists {
            self.path.push(direction);
        }
        exists
    }

    pub fn go_front(&mut self, tree: &BspTree) -> bool {
        self.go(tree, Direction::Front)
    }

    pub fn go_back(&mut self, tree: &BspTree) -> bool {
        self.go(tree, Direction::Back)
    }

    /// Navigates to the parent node. Returns false at the root.
    pub fn go_parent(&mut self) -> bool {
        self.path.pop().is_some()
    }

    /// Returns to the root. Returns false if already there.
    pub fn go_root(&mut self) -> bool {
        let moved = !self.path.is_empty();
        self.path.clear();
        moved
    }

    /// Handles the F/B/P/R keys. Returns true if the current node changed.
    pub fn update(&mut self, tree: &BspTree) -> bool {
        let mut changed = false;

        if is_key_pressed(KeyCode::F) {
            changed |= self.go_front(tree);
        }
        if is_key_pressed(KeyCode::B) {
            changed |= self.go_back(tree);
        }
        if is_key_pressed(KeyCode::P) {
            changed |= self.go_parent();
        }
        if is_key_pressed(KeyCode::R) {
            changed |= self.go_root();
        }

        changed
    }

    pub fn current_node<'a>(&self, tree: &'a BspTree) -> Option<&'a BspNode> {
        tree.node_at(&self.path)
    }

    /// Draws the whole tree dimmed, the current subtree in region colors,
    /// and the current partition line across the drawing.
    pub fn render(&self, tree: &BspTree, bounds: &Bounds, viewport: &Viewport) {
        tree.walk(&mut RenderVisitor::new(viewport, 1.0).with_tint(DIMMED));

        let Some(node) = self.current_node(tree) else {
            return;
        };
        node.walk(&mut RenderVisitor::new(viewport, 2.0));

        if let Some((a, b)) = bounds.clip_line(node.line()) {
            let (a, b) = (viewport.to_screen(a), viewport.to_screen(b));
            draw_line(a.x, a.y, b.x, b.y, 1.0, YELLOW);
        }
        draw_edge_colored(node.edge(), viewport, 4.0, WHITE);
    }

    /// Draws the navigation overlay starting at `y_offset`.
    pub fn draw_ui(&self, tree: &BspTree, y_offset: f32) {
        let Some(node) = self.current_node(tree) else {
            draw_text("Empty tree", 10.0, y_offset, 18.0, ORANGE);
            return;
        };

        draw_text(
            &format!("{}: {}", node.name(), node.edge()),
            10.0,
            y_offset,
            18.0,
            WHITE,
        );
        draw_text(
            &format!("Subtree: {} edges", node.edge_count()),
            10.0,
            y_offset + 20.0,
            18.0,
            WHITE,
        );
        draw_text(
            &format!("Path: {} (depth {})", path_label(&self.path), self.path.len()),
            10.0,
            y_offset + 40.0,
            18.0,
            YELLOW,
        );
        draw_text(
            &format!(
                "Children: {}{}{}",
                if node.front().is_some() { "[F]ront " } else { "" },
                if node.back().is_some() { "[B]ack " } else { "" },
                if node.is_leaf() { "(leaf)" } else { "" }
            ),
            10.0,
            y_offset + 60.0,
            18.0,
            if node.is_leaf() { ORANGE } else { GREEN },
        );
        draw_text("[P]arent | [R]oot", 10.0, y_offset + 80.0, 16.0, DARKGRAY);
    }
}

fn path_label(path: &[Direction]) -> String {
    if path.is_empty() {
        return "root".to_string();
    }
    path.iter()
        .map(|d| match d {
            Direction::Front => "F",
            Direction::Back => "B",
        })
        .collect::<Vec<_>>()
        .join(" -> ")
}
