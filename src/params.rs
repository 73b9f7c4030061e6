//! Growth parameters and the stochastic decisions derived from them
//!
//! One [`GrowthParams`] value drives an entire run. The growth engine reads it to resolve
//! partition outcomes, child angles and branch sizes, and calls [`advance_generation`] exactly
//! once per generation to decay the chance and size fields. Nothing else mutates it mid-run.
//!
//! [`advance_generation`]: GrowthParams::advance_generation

use crate::angle::Angle;
use crate::gravity;
use crate::rng::RandomSource;
use crate::Float;

/// The outcome of the partition decision made for one branch at one generation
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Partition {
    /// Two children, diverging at the configured left/right offsets
    Split,
    /// One child, at one of the two offshoot offsets chosen at random
    Offshoot,
    /// No children; the branch ends here and bears leaves
    NoGrowth,
}

/// The evolving parameter set for one tree generation run
///
/// The three chance fields are relative weights -- they are not required to sum to one, and they
/// decay multiplicatively every generation along with the trunk length and width.
#[derive(Clone, Debug, PartialEq)]
pub struct GrowthParams {
    /// Generation at which growth halts unconditionally
    pub depth_limit: usize,

    pub no_growth_chance: Float,
    pub delta_no_growth: Float,
    pub split_chance: Float,
    pub delta_split: Float,
    pub offshoot_chance: Float,
    pub delta_offshoot: Float,

    /// Left and right angle offsets (degrees) for split children
    pub angles_of_split: (Float, Float),
    /// Candidate angle offsets (degrees) for offshoot children; one is picked per event
    pub angles_of_offshoot: (Float, Float),
    /// Gaussian jitter on child offsets, as a fraction of the base offset
    pub epsilon_angles: Float,

    pub trunk_length: Float,
    pub delta_trunk_length: Float,
    /// Gaussian jitter on branch lengths, as a fraction of the current trunk length
    pub epsilon_trunk_length: Float,

    /// Orientation of the root branch, in degrees (0 = straight up)
    pub initial_angle: Float,

    /// Generations below this threshold exclude [`Partition::NoGrowth`] from the outcome space,
    /// forcing the tree to keep branching
    pub stop_no_growth_until: usize,

    pub trunk_width: Float,
    /// Taper ratio from a branch's start width to its end width
    pub delta_trunk_width: Float,

    /// Fraction of the parent's own angle subtracted from a child's offset, in `[0, 1]`
    pub straightening_factor: Float,
    /// Strength and sign of the gravity bias (see [`gravity::correction`])
    pub gravity_factor: Float,
}

impl Default for GrowthParams {
    fn default() -> Self {
        GrowthParams {
            depth_limit: 4,
            no_growth_chance: 0.1,
            delta_no_growth: 0.15,
            split_chance: 0.7,
            delta_split: 0.8,
            offshoot_chance: 0.6,
            delta_offshoot: 0.8,
            angles_of_split: (-25.0, 25.0),
            angles_of_offshoot: (-30.0, 30.0),
            epsilon_angles: 0.0,
            trunk_length: 120.0,
            delta_trunk_length: 0.87,
            epsilon_trunk_length: 0.1,
            initial_angle: 0.0,
            stop_no_growth_until: 3,
            trunk_width: 50.0,
            delta_trunk_width: 0.7,
            straightening_factor: 0.0,
            gravity_factor: 0.1,
        }
    }
}

impl GrowthParams {
    /// Resolves the partition outcome for a branch at the given depth
    ///
    /// The cumulative weights are recomputed from the current chance fields on every call, so
    /// the decision always reflects the decay applied so far. Below `stop_no_growth_until` the
    /// draw is restricted to the split/offshoot portion of the weight space, making no-growth
    /// structurally impossible.
    pub fn resolve_partition(&self, depth: usize, rng: &mut impl RandomSource) -> Partition {
        let split = self.split_chance;
        let offshoot = split + self.offshoot_chance;
        let total = offshoot + self.no_growth_chance;

        if depth < self.stop_no_growth_until {
            let draw = rng.uniform(offshoot);
            if draw < split {
                Partition::Split
            } else {
                Partition::Offshoot
            }
        } else {
            let draw = rng.uniform(total);
            if draw < split {
                Partition::Split
            } else if draw < offshoot {
                Partition::Offshoot
            } else {
                Partition::NoGrowth
            }
        }
    }

    /// Computes the pair of child angles for a split, left then right
    pub fn split_angles(&self, parent: Angle, rng: &mut impl RandomSource) -> (Angle, Angle) {
        let (left, right) = self.angles_of_split;

        (
            self.child_angle(left, parent, rng),
            self.child_angle(right, parent, rng),
        )
    }

    /// Computes the child angle for an offshoot, picking one of the two configured offsets
    /// uniformly at random
    pub fn offshoot_angle(&self, parent: Angle, rng: &mut impl RandomSource) -> Angle {
        let base = if rng.uniform(1.0) < 0.5 {
            self.angles_of_offshoot.0
        } else {
            self.angles_of_offshoot.1
        };

        self.child_angle(base, parent, rng)
    }

    /// Runs one base offset through the jitter/straightening/gravity pipeline
    ///
    /// The raw offset is the base perturbed by `gaussian() × epsilon_angles × base`, minus the
    /// parent's own angle scaled by the straightening factor. The gravity correction is computed
    /// from the resulting candidate angle and added on top.
    fn child_angle(&self, base: Float, parent: Angle, rng: &mut impl RandomSource) -> Angle {
        let jittered = base + rng.gaussian() * self.epsilon_angles * base;
        let raw = Angle::new(jittered) - parent * self.straightening_factor;

        let candidate = parent + raw;
        candidate + gravity::correction(candidate, self.gravity_factor)
    }

    /// Resolves the length of a branch visited at the current generation
    ///
    /// A large negative Gaussian draw can make this non-positive. That is deliberate: lengths
    /// are left unclamped and such branches render as degenerate shapes.
    pub fn resolve_length(&self, rng: &mut impl RandomSource) -> Float {
        self.trunk_length + rng.gaussian() * self.epsilon_trunk_length * self.trunk_length
    }

    /// Applies the per-generation decay to the chance and size fields
    ///
    /// Must be called exactly once per generation, after every node of that generation has been
    /// resolved.
    pub fn advance_generation(&mut self) {
        self.no_growth_chance *= self.delta_no_growth;
        self.split_chance *= self.delta_split;
        self.offshoot_chance *= self.delta_offshoot;
        self.trunk_length *= self.delta_trunk_length;
        self.trunk_width *= self.delta_trunk_width;
    }
}

/// Parameters for stamping leaf polygons onto leaf-bearing branches
#[derive(Clone, Debug, PartialEq)]
pub struct LeafParams {
    /// Scale applied to the unit leaf template
    pub size: Float,
    /// Rotation offsets (degrees) relative to the owning branch; one leaf per offset at each
    /// position fraction
    pub angles: (Float, Float),
}

impl Default for LeafParams {
    fn default() -> Self {
        LeafParams {
            size: 20.0,
            angles: (-67.0, 67.0),
        }
    }
}
