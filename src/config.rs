pub const BOARD_SIZE: usize = 6;
pub const FLEET_LENGTHS: [usize; 7] = [3, 2, 2, 1, 1, 1, 1];
/// Total placement attempts allowed for one board before it is discarded.
pub const PLACEMENT_ATTEMPT_LIMIT: u32 = 2000;
