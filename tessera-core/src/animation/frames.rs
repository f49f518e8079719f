//! Baked animation tables
//!
//! Frames are exported with cells in packed GRB word order; the
//! decoder in [`super`] remaps channels and applies the contrast
//! curve at playback time.

use super::AnimationFrame;

/// Number of frames in the heartbeat sequence
pub const HEARTBEAT_FRAMES: usize = 7;

/// Heart-pulse sequence shown at boot and on the top of each hour
pub static HEARTBEAT: [AnimationFrame; HEARTBEAT_FRAMES] = [
    [
        [
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x005008, 0x005008, 0x000000,
            0x000000, 0x005008, 0x005008, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x000000, 0x000000, 0x005008, 0x10E618, 0x10E618, 0x005008,
            0x005008, 0x10E618, 0x10E618, 0x005008, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x000000, 0x000000, 0x005008, 0x10E618, 0x10E618, 0x10E618,
            0x10E618, 0x10E618, 0x10E618, 0x005008, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x005008, 0x10E618, 0x10E618,
            0x10E618, 0x10E618, 0x005008, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x005008, 0x10E618,
            0x10E618, 0x005008, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x005008,
            0x005008, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
    ],
    [
        [
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x000000, 0x005008, 0x005008, 0x000000, 0x000000, 0x000000,
            0x000000, 0x000000, 0x005008, 0x005008, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x005008, 0x10E618, 0x10E618, 0x005008, 0x000000, 0x000000,
            0x000000, 0x005008, 0x10E618, 0x10E618, 0x005008, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x005008, 0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x005008, 0x000000,
            0x005008, 0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x005008, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x005008, 0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x005008,
            0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x005008, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x005008, 0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x10E618,
            0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x005008, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x005008, 0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x10E618,
            0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x005008, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x000000, 0x005008, 0x10E618, 0x10E618, 0x10E618, 0x10E618,
            0x10E618, 0x10E618, 0x10E618, 0x005008, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x000000, 0x000000, 0x005008, 0x10E618, 0x10E618, 0x10E618,
            0x10E618, 0x10E618, 0x005008, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x005008, 0x10E618, 0x10E618,
            0x10E618, 0x005008, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x005008, 0x10E618,
            0x005008, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x005008,
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
    ],
    [
        [
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x005008, 0x005008, 0x005008, 0x000000, 0x000000, 0x000000,
            0x000000, 0x000000, 0x005008, 0x005008, 0x005008, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x005008, 0x10E618, 0x10E618, 0x10E618, 0x005008, 0x000000, 0x000000,
            0x000000, 0x005008, 0x10E618, 0x10E618, 0x10E618, 0x005008, 0x000000, 0x000000,
        ],
        [
            0x005008, 0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x005008, 0x000000,
            0x005008, 0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x005008, 0x000000,
        ],
        [
            0x005008, 0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x005008,
            0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x005008, 0x000000,
        ],
        [
            0x005008, 0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x10E618,
            0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x005008, 0x000000,
        ],
        [
            0x005008, 0x10E618, 0x10E618, 0x10E618, 0x10E618, 0xD2FFC8, 0xD2FFC8, 0x10E618,
            0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x005008, 0x000000,
        ],
        [
            0x005008, 0x10E618, 0x10E618, 0x10E618, 0x10E618, 0xD2FFC8, 0xD2FFC8, 0x10E618,
            0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x005008, 0x000000,
        ],
        [
            0x000000, 0x005008, 0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x10E618,
            0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x005008, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x005008, 0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x10E618,
            0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x005008, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x000000, 0x005008, 0x10E618, 0x10E618, 0x10E618, 0x10E618,
            0x10E618, 0x10E618, 0x10E618, 0x005008, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x000000, 0x000000, 0x005008, 0x10E618, 0x10E618, 0x10E618,
            0x10E618, 0x10E618, 0x005008, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x005008, 0x10E618, 0x10E618,
            0x10E618, 0x005008, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x005008, 0x10E618,
            0x005008, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x005008,
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
    ],
    [
        [
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x108C10, 0x108C10, 0x108C10, 0x000000, 0x000000, 0x000000,
            0x000000, 0x000000, 0x108C10, 0x108C10, 0x108C10, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x108C10, 0x40FF40, 0x40FF40, 0x40FF40, 0x108C10, 0x000000, 0x000000,
            0x000000, 0x108C10, 0x40FF40, 0x40FF40, 0x40FF40, 0x108C10, 0x000000, 0x000000,
        ],
        [
            0x108C10, 0x40FF40, 0x40FF40, 0x40FF40, 0x40FF40, 0x40FF40, 0x108C10, 0x000000,
            0x108C10, 0x40FF40, 0x40FF40, 0x40FF40, 0x40FF40, 0x40FF40, 0x108C10, 0x000000,
        ],
        [
            0x108C10, 0x40FF40, 0x40FF40, 0x40FF40, 0x40FF40, 0x40FF40, 0x40FF40, 0x108C10,
            0x40FF40, 0x40FF40, 0x40FF40, 0x40FF40, 0x40FF40, 0x40FF40, 0x108C10, 0x000000,
        ],
        [
            0x108C10, 0x40FF40, 0x40FF40, 0x40FF40, 0x40FF40, 0x40FF40, 0x40FF40, 0x40FF40,
            0x40FF40, 0x40FF40, 0x40FF40, 0x40FF40, 0x40FF40, 0x40FF40, 0x108C10, 0x000000,
        ],
        [
            0x108C10, 0x40FF40, 0x40FF40, 0x40FF40, 0x40FF40, 0xFFFFFF, 0xFFFFFF, 0x40FF40,
            0x40FF40, 0x40FF40, 0x40FF40, 0x40FF40, 0x40FF40, 0x40FF40, 0x108C10, 0x000000,
        ],
        [
            0x108C10, 0x40FF40, 0x40FF40, 0x40FF40, 0x40FF40, 0xFFFFFF, 0xFFFFFF, 0x40FF40,
            0x40FF40, 0x40FF40, 0x40FF40, 0x40FF40, 0x40FF40, 0x40FF40, 0x108C10, 0x000000,
        ],
        [
            0x000000, 0x108C10, 0x40FF40, 0x40FF40, 0x40FF40, 0x40FF40, 0x40FF40, 0x40FF40,
            0x40FF40, 0x40FF40, 0x40FF40, 0x40FF40, 0x40FF40, 0x108C10, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x108C10, 0x40FF40, 0x40FF40, 0x40FF40, 0x40FF40, 0x40FF40,
            0x40FF40, 0x40FF40, 0x40FF40, 0x40FF40, 0x108C10, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x000000, 0x108C10, 0x40FF40, 0x40FF40, 0x40FF40, 0x40FF40,
            0x40FF40, 0x40FF40, 0x40FF40, 0x108C10, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x000000, 0x000000, 0x108C10, 0x40FF40, 0x40FF40, 0x40FF40,
            0x40FF40, 0x40FF40, 0x108C10, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x108C10, 0x40FF40, 0x40FF40,
            0x40FF40, 0x108C10, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x108C10, 0x40FF40,
            0x108C10, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x108C10,
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
    ],
    [
        [
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x005008, 0x005008, 0x005008, 0x000000, 0x000000, 0x000000,
            0x000000, 0x000000, 0x005008, 0x005008, 0x005008, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x005008, 0x10E618, 0x10E618, 0x10E618, 0x005008, 0x000000, 0x000000,
            0x000000, 0x005008, 0x10E618, 0x10E618, 0x10E618, 0x005008, 0x000000, 0x000000,
        ],
        [
            0x005008, 0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x005008, 0x000000,
            0x005008, 0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x005008, 0x000000,
        ],
        [
            0x005008, 0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x005008,
            0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x005008, 0x000000,
        ],
        [
            0x005008, 0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x10E618,
            0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x005008, 0x000000,
        ],
        [
            0x005008, 0x10E618, 0x10E618, 0x10E618, 0x10E618, 0xD2FFC8, 0xD2FFC8, 0x10E618,
            0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x005008, 0x000000,
        ],
        [
            0x005008, 0x10E618, 0x10E618, 0x10E618, 0x10E618, 0xD2FFC8, 0xD2FFC8, 0x10E618,
            0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x005008, 0x000000,
        ],
        [
            0x000000, 0x005008, 0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x10E618,
            0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x005008, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x005008, 0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x10E618,
            0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x005008, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x000000, 0x005008, 0x10E618, 0x10E618, 0x10E618, 0x10E618,
            0x10E618, 0x10E618, 0x10E618, 0x005008, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x000000, 0x000000, 0x005008, 0x10E618, 0x10E618, 0x10E618,
            0x10E618, 0x10E618, 0x005008, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x005008, 0x10E618, 0x10E618,
            0x10E618, 0x005008, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x005008, 0x10E618,
            0x005008, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x005008,
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
    ],
    [
        [
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x000000, 0x005008, 0x005008, 0x000000, 0x000000, 0x000000,
            0x000000, 0x000000, 0x005008, 0x005008, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x005008, 0x10E618, 0x10E618, 0x005008, 0x000000, 0x000000,
            0x000000, 0x005008, 0x10E618, 0x10E618, 0x005008, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x005008, 0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x005008, 0x000000,
            0x005008, 0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x005008, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x005008, 0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x005008,
            0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x005008, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x005008, 0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x10E618,
            0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x005008, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x005008, 0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x10E618,
            0x10E618, 0x10E618, 0x10E618, 0x10E618, 0x005008, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x000000, 0x005008, 0x10E618, 0x10E618, 0x10E618, 0x10E618,
            0x10E618, 0x10E618, 0x10E618, 0x005008, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x000000, 0x000000, 0x005008, 0x10E618, 0x10E618, 0x10E618,
            0x10E618, 0x10E618, 0x005008, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x005008, 0x10E618, 0x10E618,
            0x10E618, 0x005008, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x005008, 0x10E618,
            0x005008, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x005008,
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
    ],
    [
        [
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x005008, 0x005008, 0x000000,
            0x000000, 0x005008, 0x005008, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x000000, 0x000000, 0x005008, 0x10E618, 0x10E618, 0x005008,
            0x005008, 0x10E618, 0x10E618, 0x005008, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x000000, 0x000000, 0x005008, 0x10E618, 0x10E618, 0x10E618,
            0x10E618, 0x10E618, 0x10E618, 0x005008, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x005008, 0x10E618, 0x10E618,
            0x10E618, 0x10E618, 0x005008, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x005008, 0x10E618,
            0x10E618, 0x005008, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x005008,
            0x005008, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
        [
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
            0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000,
        ],
    ],
];
