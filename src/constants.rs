pub const BALL_TYPES: [&str; 4] = [
    "Archetypes.Ball.Ball_Default",
    "Archetypes.Ball.Ball_Basketball",
    "Archetypes.Ball.Ball_Hockey",
    "Archetypes.Ball.Ball_God",
];

pub const CAR_TYPE: &str = "Archetypes.Car.Car_Default";
pub const PLAYER_TYPE: &str = "TAGame.Default__PRI_TA";

pub const MAP_NAME_PROPERTY: &str = "MapName";

// Ownership-chain links. Each carries the owning actor's id as a flagged int.
pub const BALL_GAME_EVENT_KEY: &str = "TAGame.Ball_TA:GameEvent";
pub const CAMERA_PRI_KEY: &str = "TAGame.CameraSettingsActor_TA:PRI";
pub const PERSISTENT_CAMERA_KEY: &str = "TAGame.PRI_TA:PersistentCamera";
pub const PLAYER_REPLICATION_KEY: &str = "Engine.Pawn:PlayerReplicationInfo";
pub const VEHICLE_KEY: &str = "TAGame.CarComponent_TA:Vehicle";

pub const BALL_CAM_KEY: &str = "TAGame.CameraSettingsActor_TA:bUsingSecondaryCamera";
pub const BOT_SKILL_KEY: &str = "TAGame.GameEvent_TA:BotSkill";
pub const CAMERA_PITCH_KEY: &str = "TAGame.CameraSettingsActor_TA:CameraPitch";
pub const CAMERA_SETTINGS_KEY: &str = "TAGame.CameraSettingsActor_TA:ProfileSettings";
pub const CAMERA_YAW_KEY: &str = "TAGame.CameraSettingsActor_TA:CameraYaw";
pub const GAME_SERVER_ID_KEY: &str = "ProjectX.GRI_X:GameServerID";
pub const GAME_STARTED_KEY: &str = "ProjectX.GRI_X:bGameStarted";
pub const LEAVE_MATCH_PENALTY_KEY: &str = "TAGame.GameEvent_TA:bHasLeaveMatchPenalty";
pub const LOADOUTS_KEY: &str = "TAGame.PRI_TA:ClientLoadouts";
pub const LOADOUTS_ONLINE_KEY: &str = "TAGame.PRI_TA:ClientLoadoutsOnline";
pub const MATCH_GUID_KEY: &str = "ProjectX.GRI_X:MatchGuid";
pub const MAX_SCORE_KEY: &str = "TAGame.GameEvent_Soccar_TA:MaxScore";
pub const MAX_TEAM_SIZE_KEY: &str = "TAGame.GameEvent_Team_TA:MaxTeamSize";
pub const NO_PICKUP_KEY: &str = "TAGame.VehiclePickup_TA:bNoPickup";
pub const PARTY_LEADER_KEY: &str = "TAGame.PRI_TA:PartyLeader";
pub const PICKUP_DATA_KEY: &str = "TAGame.VehiclePickup_TA:NewReplicatedPickupData";
pub const PING_KEY: &str = "Engine.PlayerReplicationInfo:Ping";
pub const PLAYER_HISTORY_VALID_KEY: &str = "TAGame.PRI_TA:PlayerHistoryValid";
pub const PLAYER_ID_KEY: &str = "Engine.PlayerReplicationInfo:PlayerID";
pub const PLAYER_NAME_KEY: &str = "Engine.PlayerReplicationInfo:PlayerName";
pub const PLAYLIST_KEY: &str = "ProjectX.GRI_X:ReplicatedGamePlaylist";
pub const REGION_KEY: &str = "ProjectX.GRI_X:ReplicatedServerRegion";
pub const REMOTE_ROLE_KEY: &str = "Engine.Actor:RemoteRole";
pub const REMOTE_USER_DATA_KEY: &str = "Engine.PlayerReplicationInfo:RemoteUserData";
pub const REPLICATED_BOOST_KEY: &str = "TAGame.CarComponent_Boost_TA:ReplicatedBoost";
pub const REPLICATED_GAME_EVENT_KEY: &str = "TAGame.PRI_TA:ReplicatedGameEvent";
pub const RESERVATIONS_KEY: &str = "ProjectX.GRI_X:Reservations";
pub const RIGID_BODY_STATE_KEY: &str = "TAGame.RBActor_TA:ReplicatedRBState";
pub const SECONDS_REMAINING_KEY: &str = "TAGame.GameEvent_Soccar_TA:SecondsRemaining";
pub const SERVER_NAME_KEY: &str = "Engine.GameReplicationInfo:ServerName";
pub const SPECTATOR_SHORTCUT_KEY: &str = "TAGame.PRI_TA:SpectatorShortcut";
pub const STATE_NAME_KEY: &str = "TAGame.GameEvent_TA:ReplicatedStateName";
pub const STEER_KEY: &str = "TAGame.Vehicle_TA:ReplicatedSteer";
pub const STEERING_SENSITIVITY_KEY: &str = "TAGame.PRI_TA:SteeringSensitivity";
pub const TEAM_KEY: &str = "Engine.PlayerReplicationInfo:Team";
pub const TEAM_PAINT_KEY: &str = "TAGame.Car_TA:TeamPaint";
pub const THROTTLE_KEY: &str = "TAGame.Vehicle_TA:ReplicatedThrottle";
pub const TITLE_KEY: &str = "TAGame.PRI_TA:Title";
pub const UNIQUE_ID_KEY: &str = "Engine.PlayerReplicationInfo:UniqueId";
pub const UNLIMITED_BOOST_KEY: &str = "TAGame.CarComponent_Boost_TA:UnlimitedBoostRefCount";
pub const VOICE_ROOM_KEY: &str = "TAGame.PRI_TA:CurrentVoiceRoom";

pub const PLAYLIST_CASUAL_DUEL: i32 = 1;
pub const PLAYLIST_CASUAL_DOUBLE: i32 = 2;
pub const PLAYLIST_CASUAL_STANDARD: i32 = 3;
pub const PLAYLIST_CASUAL_CHAOS: i32 = 4;
pub const PLAYLIST_RANKED_DUEL: i32 = 10;
pub const PLAYLIST_RANKED_DOUBLE: i32 = 11;
pub const PLAYLIST_RANKED_STANDARD: i32 = 13;
pub const PLAYLIST_RANKED_SNOWDAY: i32 = 30;
pub const PLAYLIST_TOURNAMENT: i32 = 34;
pub const PLAYLIST_HEATSEEKER: i32 = 35;

/// Actor-id value that marks "no actor" in flagged-int references.
pub const NO_ACTOR: i32 = -1;

/// Distance reported for a car when there is no ball to measure against, and
/// the location filled into matrix rows when no ball is resolved.
pub const UNRESOLVED_DISTANCE: f32 = 999999.0;

/// Speed reported for a car that has no replicated linear velocity yet.
pub const UNKNOWN_SPEED: f32 = -1.0;

/// Placeholder used before a player's name has been replicated.
pub const UNKNOWN_PLAYER_NAME: &str = "unknown player";

/// Boost column default for a car with no replicated boost amount.
pub const UNKNOWN_BOOST: u8 = 255;

/// Match clock value assumed before the first seconds-remaining update.
pub const INITIAL_SECONDS_REMAINING: i32 = 300;
