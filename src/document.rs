//! Data model for a replay document that has already been decoded from the
//! binary format by an external converter (rattletrap or equivalent). Only
//! the pieces the frame engine consumes are typed; payloads that are carried
//! around but never interpreted stay as raw [`serde_json::Value`]s.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Network-scoped identifier of one actor. Ids are only unique at a point in
/// time; a destroyed id may be reused by a later spawn.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, new,
)]
#[serde(transparent)]
pub struct ActorId(pub i32);

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of an object in the replay's class/archetype table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, new,
)]
#[serde(transparent)]
pub struct ObjectId(pub i32);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A vector whose components are individually optional. Spawn initializations
/// and some replicated states omit components; a missing component is not the
/// same thing as a zero one when rows are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, new)]
pub struct Vec3 {
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub z: Option<f32>,
}

impl Vec3 {
    pub fn xyz(x: f32, y: f32, z: f32) -> Self {
        Self::new(Some(x), Some(y), Some(z))
    }
}

/// Quaternion with individually optional components. Spawn initializations
/// replicate only three components, leaving `w` unset.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, new)]
pub struct Quat {
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub z: Option<f32>,
    pub w: Option<f32>,
}

impl Quat {
    pub fn xyzw(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self::new(Some(x), Some(y), Some(z), Some(w))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, new)]
pub struct RigidBodyState {
    #[serde(default)]
    pub sleeping: bool,
    pub location: Option<Vec3>,
    pub rotation: Option<Quat>,
    pub linear_velocity: Option<Vec3>,
    pub angular_velocity: Option<Vec3>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, new)]
pub struct FlaggedInt {
    #[serde(default)]
    pub flag: bool,
    pub int: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, new)]
pub struct ReplicatedBoost {
    #[serde(default, rename = "grantCount")]
    pub grant_count: u8,
    #[serde(rename = "boostAmount")]
    pub boost_amount: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, new)]
pub struct PickupNew {
    pub instigator_id: Option<i32>,
    #[serde(default)]
    pub picked_up: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, new)]
pub struct TeamPaint {
    pub team: u8,
    #[serde(default)]
    pub primary_color: u8,
    #[serde(default)]
    pub accent_color: u8,
    #[serde(default)]
    pub primary_finish: u32,
    #[serde(default)]
    pub accent_finish: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, new)]
pub struct CamSettings {
    pub fov: Option<f32>,
    pub height: Option<f32>,
    pub angle: Option<f32>,
    pub distance: Option<f32>,
    pub stiffness: Option<f32>,
    pub swivel_speed: Option<f32>,
    pub transition_speed: Option<f32>,
}

/// One replicated attribute value, decoded from the single-key tagged object
/// the converter emits (`{"flagged_int": {...}}`, `{"byte": 37}`, ...).
/// Kinds the engine never interprets, and any future kinds, land in
/// [`Attribute::Other`] so that a new attribute type can never make a whole
/// document unreadable.
#[derive(Debug, Clone, PartialEq)]
pub enum Attribute {
    Boolean(bool),
    Byte(u8),
    Int(i32),
    Float(f32),
    String(String),
    Enum(u16),
    FlaggedInt(FlaggedInt),
    RigidBodyState(RigidBodyState),
    TeamPaint(TeamPaint),
    CamSettings(CamSettings),
    PickupNew(PickupNew),
    Boost(ReplicatedBoost),
    UniqueId(serde_json::Value),
    PartyLeader(serde_json::Value),
    LoadoutsOnline(serde_json::Value),
    Loadouts(serde_json::Value),
    Reservation(serde_json::Value),
    GameServer(serde_json::Value),
    Other(serde_json::Value),
}

impl<'de> Deserialize<'de> for Attribute {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;

        let value = serde_json::Value::deserialize(deserializer)?;
        let tagged = match value.as_object() {
            Some(object) if object.len() == 1 => {
                let (tag, payload) = object.iter().next().expect("length checked");
                Some((tag.clone(), payload.clone()))
            }
            _ => None,
        };
        let Some((tag, payload)) = tagged else {
            return Ok(Attribute::Other(value));
        };
        macro_rules! decode {
            ($variant:path) => {
                $variant(
                    serde_json::from_value(payload)
                        .map_err(|e| D::Error::custom(format!("attribute {:?}: {}", tag, e)))?,
                )
            };
        }
        Ok(match tag.as_str() {
            "boolean" => decode!(Attribute::Boolean),
            "byte" => decode!(Attribute::Byte),
            "int" => decode!(Attribute::Int),
            "float" => decode!(Attribute::Float),
            "string" => decode!(Attribute::String),
            "enum" => decode!(Attribute::Enum),
            "flagged_int" => decode!(Attribute::FlaggedInt),
            "rigid_body_state" => decode!(Attribute::RigidBodyState),
            "team_paint" => decode!(Attribute::TeamPaint),
            "cam_settings" => decode!(Attribute::CamSettings),
            "pickup_new" => decode!(Attribute::PickupNew),
            "boost" => decode!(Attribute::Boost),
            "unique_id" => Attribute::UniqueId(payload),
            "party_leader" => Attribute::PartyLeader(payload),
            "loadouts_online" => Attribute::LoadoutsOnline(payload),
            "loadouts" => Attribute::Loadouts(payload),
            "reservation" => Attribute::Reservation(payload),
            "game_server" => Attribute::GameServer(payload),
            _ => Attribute::Other(value),
        })
    }
}

/// Payload of a spawn replication: what kind of actor appeared, and where.
#[derive(Debug, Clone, PartialEq, Deserialize, new)]
pub struct Spawned {
    pub object_id: ObjectId,
    pub object_name: String,
    pub name: Option<String>,
    pub initialization: Option<Initialization>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, new)]
pub struct Initialization {
    pub location: Option<Vec3>,
    pub rotation: Option<Quat>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, new)]
pub struct UpdatedAttribute {
    pub name: String,
    pub value: Attribute,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplicationValue {
    Spawned(Spawned),
    Updated(Vec<UpdatedAttribute>),
}

#[derive(Debug, Clone, PartialEq, Deserialize, new)]
pub struct Replication {
    pub actor_id: ActorId,
    pub value: ReplicationValue,
}

#[derive(Debug, Clone, PartialEq, Deserialize, new)]
pub struct Frame {
    pub time: f32,
    pub delta: f32,
    pub replications: Vec<Replication>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, new)]
pub struct HeaderProp {
    pub kind: String,
    pub value: serde_json::Value,
}

/// A header property value with the typed kinds unwrapped.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Int(i32),
    Str(String),
    Float(f32),
    Name(String),
    Other(serde_json::Value),
}

impl PropertyValue {
    /// Textual payload of the `Str`/`Name` kinds.
    pub fn into_text(self) -> Option<String> {
        match self {
            PropertyValue::Str(text) | PropertyValue::Name(text) => Some(text),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, new)]
pub struct Header {
    pub properties: Vec<(String, HeaderProp)>,
}

impl Header {
    /// Finds the first header property with the given name and unwraps its
    /// payload according to its kind tag. Kinds other than the four typed
    /// ones are returned verbatim.
    pub fn find_property(&self, name: &str) -> Option<PropertyValue> {
        let (_, prop) = self.properties.iter().find(|(key, _)| key == name)?;
        let typed = |key: &str| prop.value.get(key).cloned();
        Some(match prop.kind.as_str() {
            "IntProperty" => PropertyValue::Int(typed("int")?.as_i64()? as i32),
            "StrProperty" => PropertyValue::Str(typed("str")?.as_str()?.to_string()),
            "FloatProperty" => PropertyValue::Float(typed("float")?.as_f64()? as f32),
            "NameProperty" => PropertyValue::Name(typed("name")?.as_str()?.to_string()),
            _ => PropertyValue::Other(prop.value.clone()),
        })
    }
}

/// The whole decoded replay document: header properties plus the ordered
/// network frames. Loading and schema validation happen upstream.
#[derive(Debug, Clone, PartialEq, Deserialize, new)]
pub struct ReplayDocument {
    pub header: Header,
    pub frames: Vec<Frame>,
}
