//! Command-line interface and top-level run logic

use clap::{App, Arg};
use eyre::WrapErr;
use std::path::{Path, PathBuf};

use crate::config;
use crate::grow;
use crate::params::{GrowthParams, LeafParams};
use crate::rng::SeededSource;
use crate::svg;
use crate::tree::TreeNode;

/// Parses the command line, grows a tree and writes the SVG output
pub fn run() -> eyre::Result<()> {
    let matches = App::new("arbor")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Grows a stochastic branching tree and renders it as an SVG image")
        .arg(
            Arg::with_name("config")
                .long("config")
                .short("c")
                .takes_value(true)
                .value_name("FILE")
                .help("JSON parameter file; built-in defaults are used when absent"),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .short("s")
                .takes_value(true)
                .value_name("N")
                .help("Seed for the random source; a fresh one is drawn when absent"),
        )
        .arg(
            Arg::with_name("out")
                .long("out")
                .short("o")
                .takes_value(true)
                .value_name("FILE")
                .default_value("tree.svg")
                .help("Path of the SVG file to write"),
        )
        .arg(
            Arg::with_name("depth")
                .long("depth")
                .short("d")
                .takes_value(true)
                .value_name("N")
                .help("Overrides the configured depth limit"),
        )
        .get_matches();

    let (mut params, leaves) = match matches.value_of("config") {
        Some(file) => config::from_file(Path::new(file))?,
        None => (GrowthParams::default(), LeafParams::default()),
    };

    if let Some(depth) = matches.value_of("depth") {
        params.depth_limit = depth
            .parse()
            .wrap_err("--depth must be a non-negative integer")?;
    }

    let seed: u64 = match matches.value_of("seed") {
        Some(s) => s.parse().wrap_err("--seed must be an unsigned integer")?,
        None => rand::random(),
    };

    let mut rng = SeededSource::new(seed);
    let mut root = TreeNode::root();
    grow::grow_tree(&mut root, &mut params, &mut rng);

    let document = svg::render_document(&root, &leaves);

    // `out` always has a value because of the default.
    let out = PathBuf::from(matches.value_of("out").unwrap());
    svg::save_svg(&out, &document)?;

    println!(
        "wrote {} ({} nodes, seed {})",
        out.display(),
        root.count_nodes(),
        seed
    );

    Ok(())
}
