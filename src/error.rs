use crate::*;
use std::backtrace::Backtrace;
use thiserror::Error;

/// [`RattleFramesErrorVariant`] enumerates the ways replay processing can
/// fail. Every variant is a deterministic function of the input document:
/// re-running the same document reproduces the same error.
#[derive(Error, Debug, Clone)]
pub enum RattleFramesErrorVariant {
    #[error("update {property:?} targets actor id {actor_id:} that was never spawned")]
    UnknownActor { actor_id: ActorId, property: String },

    #[error("attribute for {property:?} was {actual:?}, expected {expected:?}")]
    UnexpectedAttributeType {
        property: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error(
        "unexpected matrix length: actual: {actual:}, expected: {expected:}, \
         features: {features:}, rows: {rows:}"
    )]
    UnexpectedFeatureCount {
        actual: usize,
        expected: usize,
        features: usize,
        rows: usize,
    },

    #[error(transparent)]
    MatrixShapeError(#[from] ::ndarray::ShapeError),
}

/// [`RattleFramesError`] pairs an error variant with the backtrace captured
/// where it was raised.
#[derive(Debug)]
pub struct RattleFramesError {
    pub backtrace: Backtrace,
    pub variant: RattleFramesErrorVariant,
}

impl std::fmt::Display for RattleFramesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.variant)
    }
}

impl std::error::Error for RattleFramesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(&self.variant)
    }
}

impl RattleFramesError {
    pub fn new(variant: RattleFramesErrorVariant) -> Self {
        Self {
            backtrace: Backtrace::capture(),
            variant,
        }
    }

    pub fn new_result<T>(variant: RattleFramesErrorVariant) -> Result<T, Self> {
        Err(Self::new(variant))
    }
}

#[allow(clippy::result_large_err)]
pub type RattleFramesResult<T> = Result<T, RattleFramesError>;

/// Tag string for an attribute value, used in type-mismatch errors.
pub fn attribute_to_tag(attribute: &Attribute) -> &'static str {
    match attribute {
        Attribute::Boolean(_) => "boolean",
        Attribute::Byte(_) => "byte",
        Attribute::Int(_) => "int",
        Attribute::Float(_) => "float",
        Attribute::String(_) => "string",
        Attribute::Enum(_) => "enum",
        Attribute::FlaggedInt(_) => "flagged_int",
        Attribute::RigidBodyState(_) => "rigid_body_state",
        Attribute::TeamPaint(_) => "team_paint",
        Attribute::CamSettings(_) => "cam_settings",
        Attribute::PickupNew(_) => "pickup_new",
        Attribute::Boost(_) => "boost",
        Attribute::UniqueId(_) => "unique_id",
        Attribute::PartyLeader(_) => "party_leader",
        Attribute::LoadoutsOnline(_) => "loadouts_online",
        Attribute::Loadouts(_) => "loadouts",
        Attribute::Reservation(_) => "reservation",
        Attribute::GameServer(_) => "game_server",
        Attribute::Other(_) => "other",
    }
}
