//! Breadth-first, depth-bounded growth of a [`TreeNode`] hierarchy
//!
//! The engine expands the tree one generation at a time. Every node of the current frontier is
//! resolved against the *same* parameter snapshot; the decay step runs only after the whole
//! frontier has been processed, so nodes within a generation never observe each other's effects.

use crate::angle::Angle;
use crate::params::{GrowthParams, Partition};
use crate::rng::RandomSource;
use crate::tree::TreeNode;

/// Grows a tree in place, starting from `root`
///
/// The root's placeholder angle is replaced with `params.initial_angle` before the first
/// generation. `params` is left in its post-run state: one decay step per generation processed.
///
/// Per generation, every frontier node gets its length and widths resolved from the current
/// parameters. Nodes below the depth limit then resolve a partition outcome and receive zero,
/// one or two children; a node that ends the step childless is marked as leaf-bearing. The
/// frontier is replaced by the union of all newly created children, so the loop terminates once
/// every path has stopped growing or the depth limit cuts expansion off.
pub fn grow_tree(root: &mut TreeNode, params: &mut GrowthParams, rng: &mut impl RandomSource) {
    root.angle = Angle::new(params.initial_angle);

    let mut frontier: Vec<&mut TreeNode> = vec![root];
    let mut generation = 0;

    while !frontier.is_empty() {
        let mut next: Vec<&mut TreeNode> = Vec::new();

        for node in frontier {
            node.length = params.resolve_length(rng);
            node.start_width = params.trunk_width;
            node.end_width = params.trunk_width * params.delta_trunk_width;

            if generation < params.depth_limit {
                match params.resolve_partition(generation, rng) {
                    Partition::Split => {
                        let (left, right) = params.split_angles(node.angle, rng);
                        node.children.push(TreeNode::sprout(left));
                        node.children.push(TreeNode::sprout(right));
                    }
                    Partition::Offshoot => {
                        let angle = params.offshoot_angle(node.angle, rng);
                        node.children.push(TreeNode::sprout(angle));
                    }
                    Partition::NoGrowth => {}
                }
            }

            if node.children.is_empty() {
                node.has_leaves = true;
            }

            next.extend(node.children.iter_mut());
        }

        params.advance_generation();
        generation += 1;
        frontier = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{ScriptedSource, SeededSource};
    use crate::Float;

    /// Parameters with all jitter and bias switched off, for structural tests
    fn quiet_params() -> GrowthParams {
        GrowthParams {
            epsilon_angles: 0.0,
            epsilon_trunk_length: 0.0,
            straightening_factor: 0.0,
            gravity_factor: 0.0,
            stop_no_growth_until: 0,
            ..GrowthParams::default()
        }
    }

    #[test]
    fn depth_limit_zero_leaves_a_lone_leaf_bearing_root() {
        let mut params = GrowthParams {
            depth_limit: 0,
            trunk_length: 120.0,
            trunk_width: 50.0,
            delta_trunk_width: 0.7,
            ..quiet_params()
        };

        let mut root = TreeNode::root();
        grow_tree(&mut root, &mut params, &mut ScriptedSource::zeroes());

        assert!(root.children.is_empty());
        assert!(root.has_leaves);
        // The root is still fully resolved.
        assert_eq!(root.length, 120.0);
        assert_eq!(root.start_width, 50.0);
        assert_eq!(root.end_width, 35.0);
    }

    #[test]
    fn split_always_produces_exactly_two_children() {
        let mut params = GrowthParams {
            depth_limit: 1,
            split_chance: 1.0,
            offshoot_chance: 0.0,
            no_growth_chance: 0.0,
            ..quiet_params()
        };

        let mut root = TreeNode::root();
        grow_tree(&mut root, &mut params, &mut ScriptedSource::zeroes());

        assert_eq!(root.children.len(), 2);
        assert!(!root.has_leaves);
        assert!(root.children.iter().all(|c| c.has_leaves));
    }

    #[test]
    fn offshoot_always_produces_exactly_one_child() {
        let mut params = GrowthParams {
            depth_limit: 1,
            split_chance: 0.0,
            offshoot_chance: 1.0,
            no_growth_chance: 0.0,
            ..quiet_params()
        };

        let mut root = TreeNode::root();
        grow_tree(&mut root, &mut params, &mut ScriptedSource::zeroes());

        assert_eq!(root.children.len(), 1);
        assert!(root.children[0].has_leaves);
    }

    #[test]
    fn forced_split_then_no_growth_yields_three_nodes() {
        // At generation 0 the split weight dominates and the zero draw lands in it. The deltas
        // wipe out split/offshoot for generation 1, so the same zero draw falls through to the
        // no-growth interval there.
        let mut params = GrowthParams {
            depth_limit: 2,
            split_chance: 1.0,
            delta_split: 0.0,
            offshoot_chance: 0.0,
            delta_offshoot: 0.0,
            no_growth_chance: 0.5,
            delta_no_growth: 1.0,
            ..quiet_params()
        };

        let mut root = TreeNode::root();
        grow_tree(&mut root, &mut params, &mut ScriptedSource::zeroes());

        assert_eq!(root.count_nodes(), 3);
        assert_eq!(root.children.len(), 2);
        assert!(!root.has_leaves);

        for child in &root.children {
            assert!(child.children.is_empty());
            assert!(child.has_leaves);
        }
    }

    #[test]
    fn no_node_stops_growing_below_the_stop_threshold() {
        let mut params = GrowthParams {
            depth_limit: 4,
            stop_no_growth_until: 2,
            // Overwhelming no-growth weight: without the threshold the tree would almost surely
            // stop at the root.
            no_growth_chance: 1000.0,
            delta_no_growth: 1.0,
            split_chance: 0.5,
            delta_split: 1.0,
            offshoot_chance: 0.5,
            delta_offshoot: 1.0,
            ..quiet_params()
        };

        let mut root = TreeNode::root();
        grow_tree(&mut root, &mut params, &mut SeededSource::new(3));

        fn check(node: &TreeNode, depth: usize, threshold: usize) {
            if depth < threshold {
                assert!(
                    !node.children.is_empty(),
                    "node at depth {} stopped below the threshold",
                    depth
                );
            }
            for child in &node.children {
                check(child, depth + 1, threshold);
            }
        }

        check(&root, 0, 2);
    }

    #[test]
    fn same_seed_reproduces_an_identical_tree() {
        let params = GrowthParams {
            epsilon_angles: 0.3,
            epsilon_trunk_length: 0.1,
            straightening_factor: 0.2,
            gravity_factor: 0.15,
            ..GrowthParams::default()
        };

        let mut first = TreeNode::root();
        let mut second = TreeNode::root();

        grow_tree(&mut first, &mut params.clone(), &mut SeededSource::new(99));
        grow_tree(&mut second, &mut params.clone(), &mut SeededSource::new(99));

        assert_eq!(first, second);
    }

    #[test]
    fn children_are_sized_from_the_decayed_parameters() {
        let mut params = GrowthParams {
            depth_limit: 1,
            split_chance: 1.0,
            offshoot_chance: 0.0,
            no_growth_chance: 0.0,
            trunk_length: 100.0,
            delta_trunk_length: 0.5,
            trunk_width: 10.0,
            delta_trunk_width: 0.5,
            ..quiet_params()
        };

        let mut root = TreeNode::root();
        grow_tree(&mut root, &mut params, &mut ScriptedSource::zeroes());

        assert_eq!(root.length, 100.0);
        assert_eq!(root.start_width, 10.0);
        assert_eq!(root.end_width, 5.0);

        for child in &root.children {
            assert_eq!(child.length, 50.0);
            assert_eq!(child.start_width, 5.0);
            assert_eq!(child.end_width, 2.5);
        }
    }

    #[test]
    fn child_angles_follow_the_configured_split_offsets() {
        let mut params = GrowthParams {
            depth_limit: 1,
            split_chance: 1.0,
            offshoot_chance: 0.0,
            no_growth_chance: 0.0,
            angles_of_split: (-25.0, 25.0),
            initial_angle: 10.0,
            ..quiet_params()
        };

        let mut root = TreeNode::root();
        grow_tree(&mut root, &mut params, &mut ScriptedSource::zeroes());

        assert_eq!(root.angle, Angle::new(10.0));
        assert_eq!(root.children[0].angle, Angle::new(345.0));
        assert_eq!(root.children[1].angle, Angle::new(35.0));
    }

    #[test]
    fn params_are_left_in_their_post_run_state() {
        let mut params = GrowthParams {
            depth_limit: 3,
            split_chance: 1.0,
            delta_split: 0.5,
            offshoot_chance: 0.0,
            no_growth_chance: 0.0,
            trunk_length: 80.0,
            delta_trunk_length: 0.5,
            ..quiet_params()
        };

        let mut root = TreeNode::root();
        grow_tree(&mut root, &mut params, &mut ScriptedSource::zeroes());

        // Four generations ran (depths 0..=3), so four decay steps happened.
        let expected: Float = 80.0 * 0.5 * 0.5 * 0.5 * 0.5;
        assert_eq!(params.trunk_length, expected);
        assert_eq!(params.split_chance, 1.0 * 0.5 * 0.5 * 0.5 * 0.5);
    }
}
