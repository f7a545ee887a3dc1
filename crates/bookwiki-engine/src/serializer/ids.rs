use crate::models::{BlockId, BlockKind, ContentBlock};

/// Source of ids for blocks produced by a parse.
pub trait IdGenerator {
    fn next_id(&mut self, kind: BlockKind) -> BlockId;
}

/// Mints a new random id for every block.
#[derive(Debug, Default, Clone, Copy)]
pub struct FreshIds;

impl IdGenerator for FreshIds {
    fn next_id(&mut self, _kind: BlockKind) -> BlockId {
        BlockId::generate()
    }
}

/// Reuses ids positionally from a previous block list.
///
/// The n-th parsed block takes the id of the n-th previous block when both
/// have the same kind; otherwise a fresh id is minted. Each previous id is
/// handed out at most once, so ids stay unique.
#[derive(Debug, Clone)]
pub struct ReuseIds<'p> {
    previous: &'p [ContentBlock],
    position: usize,
}

impl<'p> ReuseIds<'p> {
    pub fn new(previous: &'p [ContentBlock]) -> Self {
        Self {
            previous,
            position: 0,
        }
    }
}

impl IdGenerator for ReuseIds<'_> {
    fn next_id(&mut self, kind: BlockKind) -> BlockId {
        let id = match self.previous.get(self.position) {
            Some(block) if block.kind() == kind => block.id().clone(),
            _ => BlockId::generate(),
        };
        self.position += 1;
        id
    }
}
