use crate::*;
use indexmap::IndexMap;
use log::debug;
use serde::Serialize;

/// One boost pad collection recorded against the car that took it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, new)]
pub struct BoostPickup {
    pub picked_up: u8,
    pub time: f32,
    pub boost_actor_id: ActorId,
}

/// Current state of one replicated actor. Identity fields are written at
/// spawn; everything else accumulates from updates and keeps its last-written
/// value until the id is respawned, which discards the whole record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Actor {
    pub object_id: ObjectId,
    pub object_name: String,
    pub name: Option<String>,
    pub created_at_frame: usize,
    /// Ids of the actors this one is linked to, in link order (player,
    /// camera, game event, ...). Links are appended, never replaced.
    pub parent_ids: Vec<ActorId>,

    pub location: Option<Vec3>,
    pub rotation: Option<Quat>,
    pub linear_velocity: Option<Vec3>,
    pub angular_velocity: Option<Vec3>,

    pub remote_role: Option<u16>,
    pub ping: Option<u8>,
    pub boost: Option<u8>,
    pub state_name: Option<i32>,
    pub bot_skill: Option<i32>,
    pub has_leave_match_penalty: Option<bool>,
    pub max_team_size: Option<i32>,
    pub seconds_remaining: Option<i32>,
    pub steer: Option<u8>,
    pub throttle: Option<u8>,
    pub team_paint: Option<TeamPaint>,
    pub team: Option<i32>,
    pub camera_yaw: Option<u8>,
    pub camera_pitch: Option<u8>,
    pub camera_settings: Option<CamSettings>,
    pub using_ball_cam: Option<bool>,
    pub unique_id: Option<serde_json::Value>,
    pub player_id: Option<i32>,
    pub player_name: Option<String>,
    pub current_voice_room: Option<String>,
    pub spectator_shortcut: Option<i32>,
    pub steering_sensitivity: Option<f32>,
    pub title: Option<i32>,
    pub party_leader_id: Option<serde_json::Value>,
    pub loadouts_online: Option<serde_json::Value>,
    pub loadouts: Option<serde_json::Value>,
    pub player_history_valid: Option<bool>,
    pub max_score: Option<i32>,
    pub server_name: Option<String>,
    pub match_guid: Option<String>,
    pub game_started: Option<bool>,
    pub game_server_id: Option<serde_json::Value>,
    pub reservation: Option<serde_json::Value>,
    pub region: Option<String>,
    pub remote_user_data: Option<String>,
    pub unlimited_boost_ref_count: Option<i32>,
    pub no_pickup: Option<bool>,

    pub frames_with_event: Vec<usize>,
    pub boost_pickups: Vec<BoostPickup>,

    pub speed: Option<f32>,
    pub heading: Option<f32>,
    pub distance_to_ball: Option<f32>,
}

impl Actor {
    fn from_spawn(spawned: &Spawned, frame_index: usize) -> Self {
        let initialization = spawned.initialization.unwrap_or_default();
        Self {
            object_id: spawned.object_id,
            object_name: spawned.object_name.clone(),
            name: spawned.name.clone(),
            created_at_frame: frame_index,
            parent_ids: Vec::new(),
            location: initialization.location,
            rotation: initialization.rotation,
            linear_velocity: None,
            angular_velocity: None,
            remote_role: None,
            ping: None,
            boost: None,
            state_name: None,
            bot_skill: None,
            has_leave_match_penalty: None,
            max_team_size: None,
            seconds_remaining: None,
            steer: None,
            throttle: None,
            team_paint: None,
            team: None,
            camera_yaw: None,
            camera_pitch: None,
            camera_settings: None,
            using_ball_cam: None,
            unique_id: None,
            player_id: None,
            player_name: None,
            current_voice_room: None,
            spectator_shortcut: None,
            steering_sensitivity: None,
            title: None,
            party_leader_id: None,
            loadouts_online: None,
            loadouts: None,
            player_history_valid: None,
            max_score: None,
            server_name: None,
            match_guid: None,
            game_started: None,
            game_server_id: None,
            reservation: None,
            region: None,
            remote_user_data: None,
            unlimited_boost_ref_count: None,
            no_pickup: None,
            frames_with_event: Vec::new(),
            boost_pickups: Vec::new(),
            speed: None,
            heading: None,
            distance_to_ball: None,
        }
    }

    pub fn is_player(&self) -> bool {
        self.object_name == constants::PLAYER_TYPE
    }

    pub fn is_car(&self) -> bool {
        self.object_name == constants::CAR_TYPE
    }

    pub fn is_ball(&self) -> bool {
        constants::BALL_TYPES.contains(&self.object_name.as_str())
    }
}

/// Store of every actor seen so far, keyed by id. Entries are never removed;
/// iteration yields actors in the order their ids were first inserted, and a
/// respawn overwrites the record in place without changing that order. The
/// car-for-player selection depends on exactly these semantics.
#[derive(Debug, Default)]
pub struct ActorStore {
    actors: IndexMap<ActorId, Actor>,
}

impl ActorStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the record for `actor_id`, discarding any previous record for
    /// a reused id. Always succeeds.
    pub fn spawn(&mut self, actor_id: ActorId, spawned: &Spawned, frame_index: usize) {
        let actor = Actor::from_spawn(spawned, frame_index);
        if let Some(previous) = self.actors.insert(actor_id, actor) {
            debug!(
                "actor id {} respawned as {} (was {})",
                actor_id,
                self.actors[&actor_id].object_name,
                previous.object_name,
            );
        }
    }

    pub fn get(&self, actor_id: ActorId) -> Option<&Actor> {
        self.actors.get(&actor_id)
    }

    pub fn get_mut(&mut self, actor_id: ActorId) -> Option<&mut Actor> {
        self.actors.get_mut(&actor_id)
    }

    /// Looks up an actor an update is about to mutate; an id that was never
    /// spawned means the replication stream is inconsistent.
    pub fn expect_mut(
        &mut self,
        actor_id: ActorId,
        property: &str,
    ) -> RattleFramesResult<&mut Actor> {
        self.actors.get_mut(&actor_id).ok_or_else(|| {
            RattleFramesError::new(RattleFramesErrorVariant::UnknownActor {
                actor_id,
                property: property.to_string(),
            })
        })
    }

    /// The chain of ids this actor has been linked to, oldest first.
    pub fn owner_chain(&self, actor_id: ActorId) -> &[ActorId] {
        self.get(actor_id)
            .map(|actor| actor.parent_ids.as_slice())
            .unwrap_or(&[])
    }

    /// All actors in store-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ActorId, &Actor)> {
        self.actors.iter().map(|(id, actor)| (*id, actor))
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }
}
