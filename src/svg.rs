//! SVG document generation for a finished tree
//!
//! The renderer consumes the grown [`TreeNode`] hierarchy and produces one self-contained SVG
//! document. Branches become tapered quad outlines, leaf-bearing branches additionally get leaf
//! polygons stamped along them, and the viewBox is sized to the tree's bounding box plus a fixed
//! margin. Nothing here feeds back into growth.

use crate::angle::Angle;
use crate::params::LeafParams;
use crate::point::Point;
use crate::tree::TreeNode;
use crate::Float;

use eyre::WrapErr;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Margin added on every side of the bounding box when sizing the viewBox
const MARGIN: Float = 50.0;

/// Position fractions along a leaf-bearing branch where leaves are stamped
const LEAF_POSITIONS: [Float; 3] = [0.1, 0.5, 0.95];

/// Leaf outline in local coordinates: a unit-height teardrop with its tip at the origin,
/// pointing along the local +Y axis before rotation
const LEAF_TEMPLATE: [(Float, Float); 4] = [(0.0, 0.0), (0.35, 0.45), (0.0, 1.0), (-0.35, 0.45)];

const BRANCH_FILL: &str = "black";
const LEAF_FILL: &str = "forestgreen";

/// One drawable primitive emitted from the tree walk
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// A branch, rendered as a quad tapering from `start_width` to `end_width`
    Branch {
        start: Point,
        end: Point,
        start_width: Float,
        end_width: Float,
        angle: Angle,
    },
    /// A leaf polygon, scaled by `size` and rotated to `rotation`
    Leaf {
        pos: Point,
        rotation: Angle,
        size: Float,
    },
}

/// Axis-aligned bounding box over branch endpoints
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundingBox {
    pub min: Point,
    pub max: Point,
}

/// Projects a branch's far endpoint from its start point
///
/// An angle of zero points straight up; positive angles rotate clockwise. Y grows downwards in
/// the output coordinate system, hence the subtraction.
fn branch_end(start: Point, angle: Angle, length: Float) -> Point {
    let theta = angle.to_radians();

    Point {
        x: start.x + length * theta.sin(),
        y: start.y - length * theta.cos(),
    }
}

/// Collects every drawable shape in pre-order: each branch before its children, with the
/// branch's leaves directly after the branch itself
pub fn collect_shapes(root: &TreeNode, leaves: &LeafParams) -> Vec<Shape> {
    let mut shapes = Vec::new();
    add_branch(root, Point { x: 0.0, y: 0.0 }, leaves, &mut shapes);
    shapes
}

fn add_branch(node: &TreeNode, start: Point, leaves: &LeafParams, shapes: &mut Vec<Shape>) {
    let end = branch_end(start, node.angle, node.length);

    shapes.push(Shape::Branch {
        start,
        end,
        start_width: node.start_width,
        end_width: node.end_width,
        angle: node.angle,
    });

    if node.has_leaves {
        for &fraction in &LEAF_POSITIONS {
            let pos = start + (end - start) * fraction;

            for &offset in &[leaves.angles.0, leaves.angles.1] {
                shapes.push(Shape::Leaf {
                    pos,
                    rotation: node.angle + Angle::new(offset),
                    size: leaves.size,
                });
            }
        }
    }

    // Children hang off the far end of this branch.
    for child in &node.children {
        add_branch(child, end, leaves, shapes);
    }
}

/// Returns the tight bounding box over every branch endpoint
///
/// Leaves and branch widths are not counted; the fixed margin around the box is what keeps them
/// inside the canvas in practice.
pub fn bounding_box(shapes: &[Shape]) -> BoundingBox {
    let mut min = Point { x: 0.0, y: 0.0 };
    let mut max = Point { x: 0.0, y: 0.0 };

    for shape in shapes {
        if let Shape::Branch { start, end, .. } = shape {
            for p in [start, end] {
                min.x = min.x.min(p.x);
                min.y = min.y.min(p.y);
                max.x = max.x.max(p.x);
                max.y = max.y.max(p.y);
            }
        }
    }

    BoundingBox { min, max }
}

/// Renders the full SVG document for a grown tree
pub fn render_document(root: &TreeNode, leaves: &LeafParams) -> String {
    let shapes = collect_shapes(root, leaves);
    let bbox = bounding_box(&shapes);

    let mut out = String::new();

    // Writing to a String cannot fail.
    writeln!(
        out,
        r#"<svg viewBox="{} {} {} {}" xmlns="http://www.w3.org/2000/svg">"#,
        bbox.min.x - MARGIN,
        bbox.min.y - MARGIN,
        bbox.max.x - bbox.min.x + 2.0 * MARGIN,
        bbox.max.y - bbox.min.y + 2.0 * MARGIN,
    )
    .unwrap();

    for shape in &shapes {
        writeln!(out, "{}", shape.to_element()).unwrap();
    }

    out.push_str("</svg>\n");
    out
}

/// Writes a rendered document to disk
pub fn save_svg(file: &Path, document: &str) -> eyre::Result<()> {
    fs::write(file, document)
        .wrap_err_with(|| format!("failed to write SVG to {:?}", file.to_string_lossy()))
}

impl Shape {
    /// Serializes the shape as one `<polygon>` element
    pub fn to_element(&self) -> String {
        match self {
            Shape::Branch {
                start,
                end,
                start_width,
                end_width,
                angle,
            } => {
                // A wide line with different end widths: offset both endpoints perpendicularly
                // to the branch direction by the respective half-widths.
                let theta = angle.to_radians();
                let perp = Point {
                    x: theta.cos(),
                    y: theta.sin(),
                };

                let corners = [
                    *start + perp * (start_width / 2.0),
                    *end + perp * (end_width / 2.0),
                    *end - perp * (end_width / 2.0),
                    *start - perp * (start_width / 2.0),
                ];

                polygon(&corners, BRANCH_FILL)
            }
            Shape::Leaf {
                pos,
                rotation,
                size,
            } => {
                let theta = rotation.to_radians();
                let dir = Point {
                    x: theta.sin(),
                    y: -theta.cos(),
                };
                let perp = Point {
                    x: theta.cos(),
                    y: theta.sin(),
                };

                let corners =
                    LEAF_TEMPLATE.map(|(x, y)| *pos + perp * (x * size) + dir * (y * size));

                polygon(&corners, LEAF_FILL)
            }
        }
    }
}

/// Formats a filled `<polygon>` from its corner points
fn polygon(corners: &[Point], fill: &str) -> String {
    let mut points = String::new();

    for (i, p) in corners.iter().enumerate() {
        if i > 0 {
            points.push(' ');
        }
        write!(points, "{:.2},{:.2}", p.x, p.y).unwrap();
    }

    format!(r#"<polygon points="{}" fill="{}"/>"#, points, fill)
}
