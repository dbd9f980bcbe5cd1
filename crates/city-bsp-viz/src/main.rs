use std::path::PathBuf;

use anyhow::{Context, Result};
use city_bsp::{load_image, BspTree, Pipeline};
use city_bsp_viz::{Bounds, TreeNavigator, Viewport};
use log::{error, info};
use macroquad::prelude::*;

fn load_tree() -> Result<BspTree> {
    let path: PathBuf = std::env::args()
        .nth(1)
        .context("usage: city-bsp-viz <input-image>")?
        .into();
    let image = load_image(&path)?;
    let city = Pipeline::new()
        .run(&image)
        .with_context(|| format!("failed to build a tree for {}", path.display()))?;
    info!(
        "{}: {} rectangles, {} nodes",
        path.display(),
        city.rectangles().len(),
        city.tree().edge_count()
    );
    Ok(city.into_parts().1)
}

#[macroquad::main("City BSP")]
async fn main() {
    env_logger::init();

    let tree = match load_tree() {
        Ok(tree) => tree,
        Err(err) => {
            error!("{err:#}");
            eprintln!("error: {err:#}");
            std::process::exit(1);
        }
    };
    let bounds = Bounds::of_tree(&tree);
    let mut navigator = TreeNavigator::new();

    loop {
        navigator.update(&tree);

        clear_background(BLACK);

        if let Some(bounds) = &bounds {
            let viewport = Viewport::fit_screen(bounds, 40.0);
            navigator.render(&tree, bounds, &viewport);
        }

        draw_text(
            &format!(
                "City BSP - {} nodes, {} splits",
                tree.edge_count(),
                tree.split_count()
            ),
            10.0,
            25.0,
            20.0,
            WHITE,
        );
        draw_text(
            &format!("Tree depth: {}", tree.depth()),
            10.0,
            45.0,
            18.0,
            GRAY,
        );

        navigator.draw_ui(&tree, 70.0);

        draw_text(&format!("FPS: {}", get_fps()), 10.0, 175.0, 16.0, DARKGRAY);

        next_frame().await
    }
}
