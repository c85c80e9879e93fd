use crate::constants::*;
use crate::*;
use log::{debug, warn};

/// What applying one replicated property does to the store. Property names
/// resolve to exactly one effect; names with no entry are ignored so that new
/// game versions cannot break processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Effect {
    ParentLink,
    RigidBody,
    RemoteRole,
    Ping,
    BoostAmount,
    StateName,
    BotSkill,
    LeaveMatchPenalty,
    MaxTeamSize,
    SecondsRemaining,
    Steer,
    Throttle,
    TeamPaint,
    CameraYaw,
    CameraPitch,
    CameraSettings,
    BallCam,
    UniqueId,
    Team,
    PlayerId,
    PlayerName,
    VoiceRoom,
    SpectatorShortcut,
    SteeringSensitivity,
    Title,
    PartyLeader,
    LoadoutsOnline,
    Loadouts,
    PlayerHistoryValid,
    MaxScore,
    ServerName,
    MatchGuid,
    GameStarted,
    GameServerId,
    Reservations,
    Region,
    Playlist,
    PickupData,
    GameEventFrame,
    RemoteUserData,
    UnlimitedBoost,
    NoPickup,
}

fn effect_for(name: &str) -> Option<Effect> {
    Some(match name {
        PERSISTENT_CAMERA_KEY | CAMERA_PRI_KEY | BALL_GAME_EVENT_KEY | VEHICLE_KEY
        | PLAYER_REPLICATION_KEY => Effect::ParentLink,
        RIGID_BODY_STATE_KEY => Effect::RigidBody,
        REMOTE_ROLE_KEY => Effect::RemoteRole,
        PING_KEY => Effect::Ping,
        REPLICATED_BOOST_KEY => Effect::BoostAmount,
        STATE_NAME_KEY => Effect::StateName,
        BOT_SKILL_KEY => Effect::BotSkill,
        LEAVE_MATCH_PENALTY_KEY => Effect::LeaveMatchPenalty,
        MAX_TEAM_SIZE_KEY => Effect::MaxTeamSize,
        SECONDS_REMAINING_KEY => Effect::SecondsRemaining,
        STEER_KEY => Effect::Steer,
        THROTTLE_KEY => Effect::Throttle,
        TEAM_PAINT_KEY => Effect::TeamPaint,
        CAMERA_YAW_KEY => Effect::CameraYaw,
        CAMERA_PITCH_KEY => Effect::CameraPitch,
        CAMERA_SETTINGS_KEY => Effect::CameraSettings,
        BALL_CAM_KEY => Effect::BallCam,
        UNIQUE_ID_KEY => Effect::UniqueId,
        TEAM_KEY => Effect::Team,
        PLAYER_ID_KEY => Effect::PlayerId,
        PLAYER_NAME_KEY => Effect::PlayerName,
        VOICE_ROOM_KEY => Effect::VoiceRoom,
        SPECTATOR_SHORTCUT_KEY => Effect::SpectatorShortcut,
        STEERING_SENSITIVITY_KEY => Effect::SteeringSensitivity,
        TITLE_KEY => Effect::Title,
        PARTY_LEADER_KEY => Effect::PartyLeader,
        LOADOUTS_ONLINE_KEY => Effect::LoadoutsOnline,
        LOADOUTS_KEY => Effect::Loadouts,
        PLAYER_HISTORY_VALID_KEY => Effect::PlayerHistoryValid,
        MAX_SCORE_KEY => Effect::MaxScore,
        SERVER_NAME_KEY => Effect::ServerName,
        MATCH_GUID_KEY => Effect::MatchGuid,
        GAME_STARTED_KEY => Effect::GameStarted,
        GAME_SERVER_ID_KEY => Effect::GameServerId,
        RESERVATIONS_KEY => Effect::Reservations,
        REGION_KEY => Effect::Region,
        PLAYLIST_KEY => Effect::Playlist,
        PICKUP_DATA_KEY => Effect::PickupData,
        REPLICATED_GAME_EVENT_KEY => Effect::GameEventFrame,
        REMOTE_USER_DATA_KEY => Effect::RemoteUserData,
        UNLIMITED_BOOST_KEY => Effect::UnlimitedBoost,
        NO_PICKUP_KEY => Effect::NoPickup,
        _ => return None,
    })
}

pub(crate) fn playlist_label(code: i32) -> String {
    let label = match code {
        PLAYLIST_CASUAL_DUEL => "casual_duel",
        PLAYLIST_CASUAL_DOUBLE => "casual_double",
        PLAYLIST_CASUAL_STANDARD => "casual_standard",
        PLAYLIST_CASUAL_CHAOS => "casual_chaos",
        PLAYLIST_RANKED_DUEL => "ranked_duel",
        PLAYLIST_RANKED_DOUBLE => "ranked_double",
        PLAYLIST_RANKED_STANDARD => "ranked_standard",
        PLAYLIST_RANKED_SNOWDAY => "ranked_snowday",
        PLAYLIST_TOURNAMENT => "tournament",
        PLAYLIST_HEATSEEKER => "heatseeker",
        _ => {
            warn!("no label for playlist code {}", code);
            return format!("unknown_{}", code);
        }
    };
    label.to_string()
}

/// Applies one update event to the store (or, for the cross-reference cases,
/// to the referenced actor). The updated actor id must already be spawned for
/// every recognized property; unrecognized property names never touch the
/// store and are skipped before that check.
pub(crate) fn apply_update(
    state: &mut ReplayState,
    actor_id: ActorId,
    update: &UpdatedAttribute,
) -> RattleFramesResult<()> {
    let Some(effect) = effect_for(&update.name) else {
        debug!("ignoring unrecognized property {:?}", update.name);
        return Ok(());
    };

    macro_rules! expect_attribute {
        ($variant:path) => {
            (if let $variant(value) = &update.value {
                Ok(value)
            } else {
                RattleFramesError::new_result(RattleFramesErrorVariant::UnexpectedAttributeType {
                    property: update.name.clone(),
                    expected: stringify!($variant),
                    actual: attribute_to_tag(&update.value),
                })
            })
        };
    }

    macro_rules! actor {
        () => {
            state.actors.expect_mut(actor_id, &update.name)
        };
    }

    macro_rules! set_field {
        ($field:ident, $variant:path) => {{
            let value = expect_attribute!($variant)?.clone();
            actor!()?.$field = Some(value);
        }};
    }

    match effect {
        Effect::ParentLink => {
            let link = expect_attribute!(Attribute::FlaggedInt)?.int;
            actor!()?.parent_ids.push(ActorId(link));
        }
        Effect::RigidBody => {
            let body = *expect_attribute!(Attribute::RigidBodyState)?;
            let target = actor!()?;
            if let Some(location) = body.location {
                target.location = Some(location);
            }
            if let Some(rotation) = body.rotation {
                target.rotation = Some(rotation);
            }
            if let Some(velocity) = body.linear_velocity {
                target.linear_velocity = Some(velocity);
            }
            if let Some(velocity) = body.angular_velocity {
                target.angular_velocity = Some(velocity);
            }
        }
        Effect::TeamPaint => {
            let paint = *expect_attribute!(Attribute::TeamPaint)?;
            let target = actor!()?;
            target.team_paint = Some(paint);
            target.team = Some(paint.team as i32);
        }
        Effect::BoostAmount => {
            let boost = expect_attribute!(Attribute::Boost)?.boost_amount;
            actor!()?.boost = Some(boost);
        }
        Effect::Team => {
            let team = expect_attribute!(Attribute::FlaggedInt)?.int;
            actor!()?.team = Some(team);
        }
        Effect::GameEventFrame => {
            let target = expect_attribute!(Attribute::FlaggedInt)?.int;
            actor!()?;
            if target != NO_ACTOR {
                let frame_index = state.frame_index;
                state
                    .actors
                    .expect_mut(ActorId(target), &update.name)?
                    .frames_with_event
                    .push(frame_index);
            }
        }
        Effect::PickupData => {
            let pickup = *expect_attribute!(Attribute::PickupNew)?;
            actor!()?;
            if let Some(instigator) = pickup.instigator_id {
                if instigator != NO_ACTOR {
                    let record = BoostPickup::new(pickup.picked_up, state.time, actor_id);
                    state
                        .actors
                        .expect_mut(ActorId(instigator), &update.name)?
                        .boost_pickups
                        .push(record);
                }
            }
        }
        Effect::Playlist => {
            let code = *expect_attribute!(Attribute::Int)?;
            actor!()?;
            state.playlist = Some(playlist_label(code));
        }
        Effect::Region => {
            let region = expect_attribute!(Attribute::String)?.clone();
            actor!()?.region = Some(region.clone());
            state.region = Some(region);
        }
        Effect::SecondsRemaining => {
            let seconds = *expect_attribute!(Attribute::Int)?;
            actor!()?.seconds_remaining = Some(seconds);
            state.seconds_remaining = seconds;
        }
        Effect::PartyLeader => {
            let leader = expect_attribute!(Attribute::PartyLeader)?.clone();
            let target = actor!()?;
            if let Some(id) = leader.get("id") {
                target.party_leader_id = Some(id.clone());
            }
        }
        Effect::GameServerId => {
            let server = expect_attribute!(Attribute::GameServer)?.clone();
            let target = actor!()?;
            if let Some(id) = server.get("new") {
                target.game_server_id = Some(id.clone());
            }
        }
        Effect::RemoteRole => set_field!(remote_role, Attribute::Enum),
        Effect::Ping => set_field!(ping, Attribute::Byte),
        Effect::StateName => set_field!(state_name, Attribute::Int),
        Effect::BotSkill => set_field!(bot_skill, Attribute::Int),
        Effect::LeaveMatchPenalty => set_field!(has_leave_match_penalty, Attribute::Boolean),
        Effect::MaxTeamSize => set_field!(max_team_size, Attribute::Int),
        Effect::Steer => set_field!(steer, Attribute::Byte),
        Effect::Throttle => set_field!(throttle, Attribute::Byte),
        Effect::CameraYaw => set_field!(camera_yaw, Attribute::Byte),
        Effect::CameraPitch => set_field!(camera_pitch, Attribute::Byte),
        Effect::CameraSettings => set_field!(camera_settings, Attribute::CamSettings),
        Effect::BallCam => set_field!(using_ball_cam, Attribute::Boolean),
        Effect::UniqueId => set_field!(unique_id, Attribute::UniqueId),
        Effect::PlayerId => set_field!(player_id, Attribute::Int),
        Effect::PlayerName => set_field!(player_name, Attribute::String),
        Effect::VoiceRoom => set_field!(current_voice_room, Attribute::String),
        Effect::SpectatorShortcut => set_field!(spectator_shortcut, Attribute::Int),
        Effect::SteeringSensitivity => set_field!(steering_sensitivity, Attribute::Float),
        Effect::Title => set_field!(title, Attribute::Int),
        Effect::LoadoutsOnline => set_field!(loadouts_online, Attribute::LoadoutsOnline),
        Effect::Loadouts => set_field!(loadouts, Attribute::Loadouts),
        Effect::PlayerHistoryValid => set_field!(player_history_valid, Attribute::Boolean),
        Effect::MaxScore => set_field!(max_score, Attribute::Int),
        Effect::ServerName => set_field!(server_name, Attribute::String),
        Effect::MatchGuid => set_field!(match_guid, Attribute::String),
        Effect::GameStarted => set_field!(game_started, Attribute::Boolean),
        Effect::Reservations => set_field!(reservation, Attribute::Reservation),
        Effect::RemoteUserData => set_field!(remote_user_data, Attribute::String),
        Effect::UnlimitedBoost => set_field!(unlimited_boost_ref_count, Attribute::Int),
        Effect::NoPickup => set_field!(no_pickup, Attribute::Boolean),
    }
    Ok(())
}
