//! Wrapper module for the JSON configuration, rooted at [`ParsedConfig`]
//!
//! Every field is optional; missing values fall back to the defaults baked into
//! [`GrowthParams::default`] and [`LeafParams::default`]. Validation happens synchronously here,
//! before any growth starts, so a bad file fails fast with a message naming the offending field.

use crate::params::{GrowthParams, LeafParams};
use crate::Float;
use eyre::{eyre, WrapErr};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Top-level structure of a parameter file
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParsedConfig {
    #[serde(default)]
    pub tree: TreeSection,
    #[serde(default)]
    pub leaves: LeafSection,
}

/// The `tree` section: knobs for the growth algorithm
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TreeSection {
    pub depth_limit: Option<usize>,
    pub no_growth_chance: Option<Float>,
    pub delta_no_growth_chance: Option<Float>,
    pub split_chance: Option<Float>,
    pub delta_split_chance: Option<Float>,
    pub offshoot_chance: Option<Float>,
    pub delta_offshoot_chance: Option<Float>,
    /// Left and right split offsets in degrees; must hold exactly two values
    pub angles_of_split: Option<Vec<Float>>,
    /// Candidate offshoot offsets in degrees; must hold exactly two values
    pub angles_of_offshoot: Option<Vec<Float>>,
    pub epsilon_angles: Option<Float>,
    pub trunk_length: Option<Float>,
    pub delta_trunk_length: Option<Float>,
    pub epsilon_trunk_length: Option<Float>,
    pub initial_angle: Option<Float>,
    pub stop_no_growth_until: Option<usize>,
    pub trunk_width: Option<Float>,
    pub delta_trunk_width: Option<Float>,
    pub straightening_factor: Option<Float>,
    pub gravity_factor: Option<Float>,
}

/// The `leaves` section: knobs for leaf placement
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LeafSection {
    pub size: Option<Float>,
    /// Rotation offsets relative to the owning branch; must hold exactly two values
    pub angles: Option<Vec<Float>>,
}

/// Reads and validates a parameter file
pub fn from_file(file: &Path) -> eyre::Result<(GrowthParams, LeafParams)> {
    let content = fs::read_to_string(file)
        .wrap_err_with(|| format!("failed to read file at {:?}", file.to_string_lossy()))?;

    let parsed: ParsedConfig =
        serde_json::from_str(&content).wrap_err("could not deserialize JSON structure")?;

    build(parsed)
}

/// Merges a parsed config with the defaults and validates the result
pub fn build(parsed: ParsedConfig) -> eyre::Result<(GrowthParams, LeafParams)> {
    let tree = parsed.tree;
    let d = GrowthParams::default();

    let params = GrowthParams {
        depth_limit: tree.depth_limit.unwrap_or(d.depth_limit),
        no_growth_chance: tree.no_growth_chance.unwrap_or(d.no_growth_chance),
        delta_no_growth: tree.delta_no_growth_chance.unwrap_or(d.delta_no_growth),
        split_chance: tree.split_chance.unwrap_or(d.split_chance),
        delta_split: tree.delta_split_chance.unwrap_or(d.delta_split),
        offshoot_chance: tree.offshoot_chance.unwrap_or(d.offshoot_chance),
        delta_offshoot: tree.delta_offshoot_chance.unwrap_or(d.delta_offshoot),
        angles_of_split: angle_pair("angles_of_split", tree.angles_of_split, d.angles_of_split)?,
        angles_of_offshoot: angle_pair(
            "angles_of_offshoot",
            tree.angles_of_offshoot,
            d.angles_of_offshoot,
        )?,
        epsilon_angles: tree.epsilon_angles.unwrap_or(d.epsilon_angles),
        trunk_length: tree.trunk_length.unwrap_or(d.trunk_length),
        delta_trunk_length: tree.delta_trunk_length.unwrap_or(d.delta_trunk_length),
        epsilon_trunk_length: tree.epsilon_trunk_length.unwrap_or(d.epsilon_trunk_length),
        initial_angle: tree.initial_angle.unwrap_or(d.initial_angle),
        stop_no_growth_until: tree.stop_no_growth_until.unwrap_or(d.stop_no_growth_until),
        trunk_width: tree.trunk_width.unwrap_or(d.trunk_width),
        delta_trunk_width: tree.delta_trunk_width.unwrap_or(d.delta_trunk_width),
        straightening_factor: tree.straightening_factor.unwrap_or(d.straightening_factor),
        gravity_factor: tree.gravity_factor.unwrap_or(d.gravity_factor),
    };

    validate(&params)?;

    let dl = LeafParams::default();
    let leaves = LeafParams {
        size: parsed.leaves.size.unwrap_or(dl.size),
        angles: angle_pair("angles", parsed.leaves.angles, dl.angles)
            .wrap_err("in the leaves section")?,
    };

    Ok((params, leaves))
}

/// Checks an optional angle list, which must hold exactly two entries when present
fn angle_pair(
    field: &str,
    values: Option<Vec<Float>>,
    fallback: (Float, Float),
) -> eyre::Result<(Float, Float)> {
    match values {
        None => Ok(fallback),
        Some(v) if v.len() == 2 => Ok((v[0], v[1])),
        Some(v) => Err(eyre!("expected exactly 2 angles, found {}", v.len()))
            .wrap_err_with(|| format!("invalid value at `{}` in parameter file", field)),
    }
}

/// Rejects parameter combinations the growth algorithm cannot make sense of
fn validate(params: &GrowthParams) -> eyre::Result<()> {
    let weights = [
        ("no_growth_chance", params.no_growth_chance),
        ("split_chance", params.split_chance),
        ("offshoot_chance", params.offshoot_chance),
        ("delta_no_growth_chance", params.delta_no_growth),
        ("delta_split_chance", params.delta_split),
        ("delta_offshoot_chance", params.delta_offshoot),
    ];

    for (name, value) in weights {
        if value < 0.0 {
            return Err(eyre!("`{}` must be non-negative, got {}", name, value));
        }
    }

    if params.split_chance + params.offshoot_chance + params.no_growth_chance <= 0.0 {
        return Err(eyre!(
            "at least one of the chance weights must be positive"
        ));
    }

    if !(0.0..=1.0).contains(&params.straightening_factor) {
        return Err(eyre!(
            "`straightening_factor` must lie in [0, 1], got {}",
            params.straightening_factor
        ));
    }

    Ok(())
}
