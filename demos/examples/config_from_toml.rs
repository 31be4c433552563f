// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Build a tree from a TOML config and query it with Kurbo geometry.
//!
//! Pass a path to a TOML file to override the built-in config.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;
use understory_quadtree::{Identity, QuadTree, QuadTreeConfig, Region};

const DEFAULT_CONFIG: &str = r#"
capacity = 6
max_depth = 10

[domain]
x = 0.0
y = 0.0
width = 800.0
height = 600.0
"#;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let text = match std::env::args().nth(1) {
        Some(path) => {
            std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?
        }
        None => DEFAULT_CONFIG.to_owned(),
    };
    let config: QuadTreeConfig<f64> = toml::from_str(&text).context("parsing config")?;
    info!(?config, "loaded config");

    let mut tree = QuadTree::from_config(config, Identity)?;
    for i in 0..200_u32 {
        let f = f64::from(i);
        let p = kurbo::Point::new((f * 41.0) % 800.0, (f * 29.0) % 600.0);
        tree.insert(p)?;
    }

    let viewport = kurbo::Rect::new(100.0, 100.0, 300.0, 250.0);
    let visible = tree.query_rect(Region::from(viewport)).count();
    info!(visible, total = tree.len(), nodes = tree.node_count(), "viewport query");

    if let Some(p) = tree.find_nearest(kurbo::Point::new(400.0, 300.0).into(), 50.0) {
        info!(nearest = ?p, "closest point to the center");
    }
    Ok(())
}
