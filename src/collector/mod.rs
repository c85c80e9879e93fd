pub mod csv;
pub mod matrix;

pub use self::csv::*;
pub use self::matrix::*;

use crate::*;

/// Receives the cumulative replay state once per processed frame. The state
/// the processor exposes is mutated in place as the fold advances, so a
/// collector must copy out whatever it wants to keep.
pub trait Collector: Sized {
    fn process_frame(
        &mut self,
        processor: &ReplayProcessor,
        frame: &Frame,
        frame_index: usize,
    ) -> RattleFramesResult<()>;

    fn process_replay(mut self, document: &ReplayDocument) -> RattleFramesResult<Self> {
        ReplayProcessor::new(document).process(&mut self)?;
        Ok(self)
    }
}

impl<G> Collector for G
where
    G: FnMut(&ReplayProcessor, &Frame, usize) -> RattleFramesResult<()>,
{
    fn process_frame(
        &mut self,
        processor: &ReplayProcessor,
        frame: &Frame,
        frame_index: usize,
    ) -> RattleFramesResult<()> {
        self(processor, frame, frame_index)
    }
}
