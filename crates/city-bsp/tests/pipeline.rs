use std::collections::HashSet;

use city_bsp::{
    classify_pixels, BspNode, Classification, ColorKey, Edge, FewestSplits, FirstEdge,
    Pipeline, PixelGrid, Rectangle,
};

/// Simple seeded random number generator (LCG).
struct Rng {
    state: u64,
}

impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn below(&mut self, bound: u32) -> u32 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((self.state >> 33) % bound as u64) as u32
    }
}

const PALETTE: [ColorKey; 4] = [
    ColorKey::new(255, 0, 0),
    ColorKey::new(0, 255, 0),
    ColorKey::new(0, 0, 255),
    ColorKey::new(255, 255, 0),
];

/// Paints random overlapping blocks so that colors form irregular shapes.
fn random_city(seed: u64) -> PixelGrid {
    let mut rng = Rng::new(seed);
    let mut grid = PixelGrid::new(24, 16);
    for _ in 0..10 {
        let x = rng.below(20);
        let y = rng.below(12);
        let w = 1 + rng.below(6);
        let h = 1 + rng.below(5);
        let color = PALETTE[rng.below(PALETTE.len() as u32) as usize];
        grid.fill(x, (x + w).min(24), y, (y + h).min(16), color);
    }
    grid
}

fn on_segment(segment: &Edge, point: nalgebra::Point2<f64>) -> bool {
    let d = segment.direction();
    let v = point - segment.start();
    let cross = d.x * v.y - d.y * v.x;
    let t = v.dot(&d) / d.norm_squared();
    cross == 0.0 && (0.0..=1.0).contains(&t)
}

/// Index of the original edge a fragment was cut from.
fn source_of(fragment: &Edge, originals: &[Edge]) -> usize {
    let found: Vec<usize> = originals
        .iter()
        .enumerate()
        .filter(|(_, o)| {
            o.color() == fragment.color()
                && o.direction().normalize() == fragment.direction().normalize()
                && on_segment(o, fragment.start())
                && on_segment(o, fragment.end())
        })
        .map(|(i, _)| i)
        .collect();
    assert_eq!(found.len(), 1, "fragment {} has {} sources", fragment, found.len());
    found[0]
}

/// Every front descendant is on or in front of each ancestor line, every
/// back descendant on or behind it.
fn assert_sides_consistent(node: &BspNode) {
    let front_ok: &[Classification] = &[Classification::Front, Classification::Collinear];
    let back_ok: &[Classification] = &[Classification::Back];

    for (child, allowed) in [(node.front(), front_ok), (node.back(), back_ok)] {
        let Some(child) = child else { continue };
        let mut stack = vec![child];
        while let Some(n) = stack.pop() {
            let class = node.line().classify_edge(n.edge());
            assert!(allowed.contains(&class), "{} is {:?} of {}", n.edge(), class, node.edge());
            stack.extend(n.front());
            stack.extend(n.back());
        }
        assert_sides_consistent(child);
    }
}

#[test]
fn rectangles_tile_each_color_exactly() {
    for seed in 0..8 {
        let grid = random_city(seed);
        let city = Pipeline::new().run(&grid).unwrap();

        for (color, pixels) in classify_pixels(&grid) {
            let expected: HashSet<_> = pixels.into_iter().collect();
            let mut covered = HashSet::new();
            for rect in city.rectangles().iter().filter(|r| r.color() == color) {
                for p in rect.pixels() {
                    assert!(covered.insert(p), "seed {seed}: {p:?} covered twice");
                }
            }
            assert_eq!(covered, expected, "seed {seed}, color {color}");
        }
    }
}

#[test]
fn split_fragments_rejoin_to_original_edges() {
    for seed in 0..8 {
        let city = Pipeline::new().run(&random_city(seed)).unwrap();
        let originals: Vec<Edge> = city.rectangles().iter().flat_map(Rectangle::edges).collect();

        let mut length = vec![0.0; originals.len()];
        for fragment in city.tree().collect_edges() {
            length[source_of(&fragment, &originals)] += fragment.length();
        }
        for (original, total) in originals.iter().zip(length) {
            assert!((original.length() - total).abs() < 1e-9, "seed {seed}: {original}");
        }
    }
}

#[test]
fn node_count_is_inputs_plus_splits() {
    for seed in 0..8 {
        let grid = random_city(seed);
        let first = Pipeline::with_selector(FirstEdge).run(&grid).unwrap();
        let fewest = Pipeline::with_selector(FewestSplits).run(&grid).unwrap();

        for tree in [first.tree(), fewest.tree()] {
            assert_eq!(tree.input_edge_count(), first.rectangles().len() * 4);
            assert_eq!(tree.edge_count(), tree.input_edge_count() + tree.split_count());
        }
    }
}

#[test]
fn subtrees_stay_on_their_side() {
    for seed in 0..8 {
        let city = Pipeline::new().run(&random_city(seed)).unwrap();
        if let Some(root) = city.tree().root() {
            assert_sides_consistent(root);
        }
    }
}

#[test]
fn names_are_unique() {
    let city = Pipeline::new().run(&random_city(3)).unwrap();
    let mut names = HashSet::new();
    city.tree().walk(&mut city_bsp::FnVisitor::new(|n: &BspNode| {
        assert!(names.insert(n.name().to_owned()));
    }));
    assert_eq!(names.len(), city.tree().edge_count());
}

#[test]
fn runs_are_deterministic() {
    let a = Pipeline::new().run(&random_city(5)).unwrap();
    let b = Pipeline::new().run(&random_city(5)).unwrap();
    assert_eq!(a.rectangles(), b.rectangles());
    assert_eq!(a.tree().collect_edges(), b.tree().collect_edges());
}

#[test]
fn disjoint_rooms_do_not_split() {
    let mut grid = PixelGrid::new(10, 4);
    grid.fill(0, 2, 0, 2, PALETTE[0]);
    grid.fill(6, 9, 1, 4, PALETTE[2]);

    let city = Pipeline::new().run(&grid).unwrap();
    assert_eq!(city.tree().input_edge_count(), 8);
    assert_eq!(city.tree().split_count(), 0);
}
