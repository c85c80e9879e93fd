//! Collects per-frame features into an `ndarray` matrix for downstream
//! numeric analysis. Only match-global features are offered: player/car
//! pairings are resolved per frame and players can appear mid-replay, so a
//! fixed per-player column layout cannot be promised.

use ::ndarray;

use crate::constants::*;
use crate::*;

pub trait FeatureAdder<F> {
    fn features_added(&self) -> usize;
    fn add_features(
        &self,
        processor: &ReplayProcessor,
        frame: &Frame,
        frame_index: usize,
        vector: &mut Vec<F>,
    ) -> RattleFramesResult<()>;
}

impl<G, F, const N: usize> FeatureAdder<F> for G
where
    G: Fn(&ReplayProcessor, &Frame, usize) -> RattleFramesResult<[F; N]>,
{
    fn features_added(&self) -> usize {
        N
    }

    fn add_features(
        &self,
        processor: &ReplayProcessor,
        frame: &Frame,
        frame_index: usize,
        vector: &mut Vec<F>,
    ) -> RattleFramesResult<()> {
        Ok(vector.extend(self(processor, frame, frame_index)?))
    }
}

/// [`Collector`] that appends one row of features per frame and finishes
/// into an `Array2` of shape (frames, features).
pub struct MatrixCollector<F> {
    feature_adders: Vec<Box<dyn FeatureAdder<F>>>,
    data: Vec<F>,
    frames_added: usize,
}

impl<F> MatrixCollector<F> {
    pub fn new(feature_adders: Vec<Box<dyn FeatureAdder<F>>>) -> Self {
        Self {
            feature_adders,
            data: Vec::new(),
            frames_added: 0,
        }
    }

    fn features_per_row(&self) -> usize {
        self.feature_adders
            .iter()
            .map(|feature_adder| feature_adder.features_added())
            .sum()
    }

    pub fn into_matrix(self) -> RattleFramesResult<ndarray::Array2<F>> {
        let features = self.features_per_row();
        let expected = features * self.frames_added;
        if self.data.len() != expected {
            return RattleFramesError::new_result(
                RattleFramesErrorVariant::UnexpectedFeatureCount {
                    actual: self.data.len(),
                    expected,
                    features,
                    rows: self.frames_added,
                },
            );
        }
        ndarray::Array2::from_shape_vec((self.frames_added, features), self.data)
            .map_err(|e| RattleFramesError::new(e.into()))
    }
}

impl<F> Collector for MatrixCollector<F> {
    fn process_frame(
        &mut self,
        processor: &ReplayProcessor,
        frame: &Frame,
        frame_index: usize,
    ) -> RattleFramesResult<()> {
        for feature_adder in self.feature_adders.iter() {
            feature_adder.add_features(processor, frame, frame_index, &mut self.data)?;
        }
        self.frames_added += 1;
        Ok(())
    }
}

/// Column names matching [`MatrixCollector::default`].
pub const DEFAULT_MATRIX_HEADERS: [&str; 6] = [
    "time",
    "ball location x",
    "ball location y",
    "ball location z",
    "ball speed",
    "ball heading",
];

impl Default for MatrixCollector<f32> {
    fn default() -> Self {
        Self::new(vec![
            Box::new(&get_frame_time),
            Box::new(&get_ball_location),
            Box::new(&get_ball_kinematics),
        ])
    }
}

pub fn get_frame_time(
    processor: &ReplayProcessor,
    _frame: &Frame,
    _frame_index: usize,
) -> RattleFramesResult<[f32; 1]> {
    Ok([processor.state().time])
}

/// Ball position columns. With no ball resolved the row is filled with the
/// same off-field sentinel the distance metric uses, so models reading the
/// matrix can tell "no ball" from "ball at the origin".
pub fn get_ball_location(
    processor: &ReplayProcessor,
    _frame: &Frame,
    _frame_index: usize,
) -> RattleFramesResult<[f32; 3]> {
    Ok(
        match processor.get_ball_actor().and_then(|ball| ball.location) {
            Some(location) => {
                let v = vec_to_glam(&location);
                [v.x, v.y, v.z]
            }
            None => [UNRESOLVED_DISTANCE; 3],
        },
    )
}

pub fn get_ball_kinematics(
    processor: &ReplayProcessor,
    _frame: &Frame,
    _frame_index: usize,
) -> RattleFramesResult<[f32; 2]> {
    let ball = processor.get_ball_actor();
    Ok([
        ball.and_then(|ball| ball.speed).unwrap_or(0.0),
        ball.and_then(|ball| ball.heading).unwrap_or(0.0),
    ])
}

pub fn get_seconds_remaining(
    processor: &ReplayProcessor,
    _frame: &Frame,
    _frame_index: usize,
) -> RattleFramesResult<[f32; 1]> {
    Ok([processor.state().seconds_remaining as f32])
}
