//! Générateurs dérivés, construits à côté du moteur à motif.
//!
//! - `block` : bloc fixe N jours travaillés / M repos sur une période de paie,
//!   exprimé comme un [`RotationPattern`](crate::pattern::RotationPattern).
//! - `weekly` : équipes pré-réparties, deux jours de repos consécutifs par semaine.

pub mod block;
pub mod weekly;

pub use block::{block_rotation, build_block_schedule, BlockRotation};
pub use weekly::{build_teams, default_teams, TeamSchedule, TeamSpec};
