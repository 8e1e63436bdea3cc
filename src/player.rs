use rand::rngs::SmallRng;

use crate::common::{Coord, ShotOutcome};

/// Interface implemented by different player types: the only capability a
/// side needs is producing a target coordinate for its next shot.
pub trait Player {
    /// Choose the next target on a `size`×`size` opponent board. The
    /// coordinate is not pre-validated; an illegal pick is rejected by the
    /// board and the player is simply asked again.
    fn choose_target(&mut self, rng: &mut SmallRng, size: usize) -> Coord;

    /// Inform the player of the outcome of its last resolved shot.
    fn handle_shot_outcome(&mut self, _coord: Coord, _outcome: ShotOutcome) {}
}
