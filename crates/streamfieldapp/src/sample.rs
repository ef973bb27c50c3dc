//! Seed document used when no document exists yet.

use crate::model::{Block, Forest};

pub const DEFAULT_SAMPLE_SIZE: usize = 50;

/// `size` root blocks, each with two children and one grandchild, all closed.
pub fn sample_forest(size: usize) -> Forest {
    (0..size).map(sample_block).collect::<Vec<_>>().into()
}

fn sample_block(i: usize) -> Block {
    Block::new(i.to_string(), format!("♡ Some love {i}"), "Block type")
        .closed(true)
        .with_children(vec![
            Block::new(format!("{i}-0"), "♥ More love", "Sub-block type")
                .closed(true)
                .with_children(vec![Block::new(
                    format!("{i}-0-0"),
                    "🐮 Cute cow 0",
                    "Sub-sub-block type",
                )
                .closed(true)]),
            Block::new(format!("{i}-1"), "♥ Even more love", "Sub-block type").closed(true),
        ])
}
