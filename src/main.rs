//! Procedural tree generator with SVG output
//!
//! The entrypoint is in [`cli::run`] ('src/cli.rs'), which parses the command line, loads the
//! parameter file (or the built-in defaults), grows a tree with [`grow::grow_tree`] and writes
//! the rendered document from [`svg::render_document`].

use std::process::exit;

mod angle;
mod cli;
mod config;
mod float;
mod gravity;
mod grow;
mod params;
mod point;
mod rng;
mod svg;
mod tree;

use float::Float;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{:?}", e);
        exit(1);
    }
}
