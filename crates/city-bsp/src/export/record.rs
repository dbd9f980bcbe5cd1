//! The structured, machine-readable form of a converted city.
//!
//! This is what a game runtime loads: the full rectangle list plus the BSP
//! tree, with every node carrying its edge and name and an explicit `null`
//! where a child is absent.

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::{BspNode, City, ColorKey, Edge, Rectangle, Result};

/// Top-level export record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityRecord {
    pub rectangles: Vec<RectRecord>,
    pub bsp: Option<NodeRecord>,
}

/// One footprint rectangle. `right` and `top` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RectRecord {
    pub left: u32,
    pub right: u32,
    pub bottom: u32,
    pub top: u32,
    pub color: ColorKey,
}

/// One BSP node with its edge and both children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub name: String,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub color: ColorKey,
    pub front: Option<Box<NodeRecord>>,
    pub back: Option<Box<NodeRecord>>,
}

impl CityRecord {
    pub fn from_city(city: &City) -> Self {
        Self {
            rectangles: city.rectangles().iter().map(RectRecord::from).collect(),
            bsp: city.tree().root().map(NodeRecord::from_node),
        }
    }

    /// Writes the record as pretty-printed JSON.
    pub fn write_json<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Reads a record previously written by [`write_json`](Self::write_json).
    ///
    /// Deep trees are common (the default selector builds long chains), so
    /// the parser's nesting limit is lifted.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut de = serde_json::Deserializer::from_reader(reader);
        de.disable_recursion_limit();
        let record = Self::deserialize(&mut de)?;
        de.end()?;
        Ok(record)
    }
}

impl From<&Rectangle> for RectRecord {
    fn from(rect: &Rectangle) -> Self {
        Self {
            left: rect.x_min(),
            right: rect.x_max(),
            bottom: rect.y_min(),
            top: rect.y_max(),
            color: rect.color(),
        }
    }
}

impl NodeRecord {
    /// Converts a node and its whole subtree.
    pub fn from_node(node: &BspNode) -> Self {
        let (x1, y1, x2, y2) = node.edge().coords();
        Self {
            name: node.name().to_owned(),
            x1,
            y1,
            x2,
            y2,
            color: node.edge().color(),
            front: node.front().map(|n| Box::new(Self::from_node(n))),
            back: node.back().map(|n| Box::new(Self::from_node(n))),
        }
    }

    pub fn edge(&self) -> Edge {
        Edge::new(self.x1, self.y1, self.x2, self.y2, self.color)
    }

    /// Number of nodes in this subtree.
    pub fn node_count(&self) -> usize {
        1 + self.front.as_ref().map_or(0, |n| n.node_count())
            + self.back.as_ref().map_or(0, |n| n.node_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BspTree, PixelGrid, Pipeline};

    const RED: ColorKey = ColorKey::new(255, 0, 0);
    const BLUE: ColorKey = ColorKey::new(0, 0, 255);

    fn two_rooms() -> City {
        let mut grid = PixelGrid::new(8, 4);
        grid.fill(0, 2, 0, 2, RED);
        grid.fill(5, 7, 1, 3, BLUE);
        Pipeline::new().run(&grid).unwrap()
    }

    #[test]
    fn empty_city_has_null_tree() {
        let city = Pipeline::new().run(&PixelGrid::new(3, 3)).unwrap();
        let record = CityRecord::from_city(&city);

        let mut out = Vec::new();
        record.write_json(&mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value["rectangles"], serde_json::json!([]));
        assert!(value["bsp"].is_null());
    }

    #[test]
    fn rectangles_use_named_bounds() {
        let record = CityRecord::from_city(&two_rooms());
        assert_eq!(record.rectangles.len(), 2);
        assert!(record.rectangles.contains(&RectRecord {
            left: 0,
            right: 2,
            bottom: 0,
            top: 2,
            color: RED,
        }));
    }

    #[test]
    fn absent_children_are_explicit_nulls() {
        let tree = BspTree::from_edges(vec![Edge::new(0.0, 0.0, 1.0, 0.0, RED)]).unwrap();
        let node = NodeRecord::from_node(tree.root().unwrap());
        let value = serde_json::to_value(&node).unwrap();

        assert_eq!(value["name"], "n0000");
        assert_eq!(value["x2"], 1.0);
        assert_eq!(value["color"]["red"], 255);
        assert!(value.get("front").is_some_and(serde_json::Value::is_null));
        assert!(value.get("back").is_some_and(serde_json::Value::is_null));
    }

    #[test]
    fn tree_shape_survives_export() {
        let city = two_rooms();
        let record = CityRecord::from_city(&city);
        let root = record.bsp.as_ref().unwrap();

        assert_eq!(root.node_count(), city.tree().edge_count());
        assert_eq!(root.edge(), *city.tree().root().unwrap().edge());
    }

    #[test]
    fn read_back_matches() {
        let record = CityRecord::from_city(&two_rooms());
        let mut out = Vec::new();
        record.write_json(&mut out).unwrap();

        assert_eq!(CityRecord::from_reader(out.as_slice()).unwrap(), record);
    }

    #[test]
    fn malformed_input_is_serialize_error() {
        let err = CityRecord::from_reader(&b"{\"rectangles\": 3}"[..]).unwrap_err();
        assert!(matches!(err, crate::BspError::Serialize(_)));
    }
}
