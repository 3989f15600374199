//! Demo dungeon constants.

/// Number of move requests the demo binary issues
pub const DEMO_MOVE_COUNT: usize = 24;
/// Seed for the demo binary's move picker
pub const DEMO_RNG_SEED: u64 = 0x5712_1de5;

/// Two rooms joined by a door, stairs down in the east room
pub const DEMO_FLOOR: &[&str] = &[
    "##########",
    "#....#...#",
    "#....+...#",
    "#....#..>#",
    "##########",
];
/// Player spawn on the demo floor
pub const DEMO_SPAWN: (i32, i32) = (1, 1);
