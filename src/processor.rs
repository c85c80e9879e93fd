use crate::constants::*;
use crate::*;

/// Everything the engine knows after folding some prefix of the frames:
/// the frame cursor, every actor seen so far, the currently resolved ball and
/// player/car pairings, and the match-level scalars.
#[derive(Debug)]
pub struct ReplayState {
    pub frame_index: usize,
    pub time: f32,
    /// Frame rate implied by the current frame's delta; 0 when the delta is 0.
    pub frame_rate: f32,
    pub actors: ActorStore,
    pub ball_id: Option<ActorId>,
    pub player_car_pairs: Vec<(ActorId, ActorId)>,
    pub map_name: Option<String>,
    pub playlist: Option<String>,
    pub region: Option<String>,
    pub seconds_remaining: i32,
}

impl ReplayState {
    pub fn from_header(header: &Header) -> Self {
        Self {
            frame_index: 0,
            time: 0.0,
            frame_rate: 0.0,
            actors: ActorStore::new(),
            ball_id: None,
            player_car_pairs: Vec::new(),
            map_name: header
                .find_property(MAP_NAME_PROPERTY)
                .and_then(PropertyValue::into_text),
            playlist: None,
            region: None,
            seconds_remaining: INITIAL_SECONDS_REMAINING,
        }
    }

    fn begin_frame(&mut self, frame_index: usize, frame: &Frame) {
        self.frame_index = frame_index;
        self.time = frame.time;
        self.frame_rate = if frame.delta == 0.0 {
            0.0
        } else {
            1.0 / frame.delta
        };
    }

    /// Pairs every player-info actor with the car it currently owns.
    /// Associations can change from frame to frame (respawns, demolitions),
    /// so the pairing is rebuilt from scratch each time. A player with no
    /// linked car is left out this frame; with several linked cars, the one
    /// most recently inserted into the store wins. Note that a respawned id
    /// keeps its original insertion position, so the winner is not
    /// necessarily the car with the highest spawn frame.
    fn resolve_player_car_pairs(&mut self) {
        let players: Vec<ActorId> = self
            .actors
            .iter()
            .filter(|(_, actor)| actor.is_player())
            .map(|(id, _)| id)
            .collect();
        self.player_car_pairs = players
            .into_iter()
            .filter_map(|player| {
                let car = self
                    .actors
                    .iter()
                    .filter(|(_, actor)| actor.is_car() && actor.parent_ids.contains(&player))
                    .map(|(id, _)| id)
                    .last()?;
                Some((player, car))
            })
            .collect();
    }

    /// Selects the current ball among the ball-archetype actors. With several
    /// present (stale ball from before a reset, new ball after), the one with
    /// the greatest spawn frame wins.
    fn resolve_ball(&mut self) {
        self.ball_id = self
            .actors
            .iter()
            .filter(|(_, actor)| actor.is_ball())
            .max_by_key(|(_, actor)| actor.created_at_frame)
            .map(|(id, _)| id);
    }

    /// Writes the per-frame derived metrics back onto the resolved actors:
    /// ball speed and heading, car speed, and car distance to ball.
    fn derive_physics(&mut self) {
        if let Some(ball_id) = self.ball_id {
            if let Some(ball) = self.actors.get_mut(ball_id) {
                if let Some(velocity) = ball.linear_velocity {
                    ball.speed = Some(vec_speed(&velocity));
                    ball.heading = Some(vec_heading(&velocity));
                }
            }
        }

        let ball_location = self
            .ball_id
            .and_then(|id| self.actors.get(id))
            .and_then(|ball| ball.location);
        let pairs = self.player_car_pairs.clone();
        for (_, car_id) in pairs {
            let Some(car) = self.actors.get_mut(car_id) else {
                continue;
            };
            car.speed = Some(
                car.linear_velocity
                    .as_ref()
                    .map(vec_speed)
                    .unwrap_or(UNKNOWN_SPEED),
            );
            car.distance_to_ball = Some(match (car.location.as_ref(), ball_location.as_ref()) {
                (Some(location), Some(ball_location)) => vec_distance(ball_location, location),
                _ => UNRESOLVED_DISTANCE,
            });
        }
    }
}

/// Folds a decoded replay document through per-frame state reconstruction,
/// handing the cumulative state to a [`Collector`] after each frame.
#[derive(Debug)]
pub struct ReplayProcessor<'a> {
    document: &'a ReplayDocument,
    state: ReplayState,
}

impl<'a> ReplayProcessor<'a> {
    pub fn new(document: &'a ReplayDocument) -> Self {
        Self {
            state: ReplayState::from_header(&document.header),
            document,
        }
    }

    /// Processes every frame, front to back. Within a frame, spawns are
    /// applied first and then updates, each in event order; later updates to
    /// the same field overwrite earlier ones. After the replications are
    /// applied the pairings and derived metrics are recomputed and the
    /// collector sees the frame.
    pub fn process<C: Collector>(&mut self, collector: &mut C) -> RattleFramesResult<()> {
        for (frame_index, frame) in self.document.frames.iter().enumerate() {
            self.state.begin_frame(frame_index, frame);
            self.spawn_actors(frame);
            self.apply_updates(frame)?;
            self.state.resolve_player_car_pairs();
            self.state.resolve_ball();
            self.state.derive_physics();
            collector.process_frame(self, frame, frame_index)?;
        }
        Ok(())
    }

    fn spawn_actors(&mut self, frame: &Frame) {
        for replication in frame.replications.iter() {
            if let ReplicationValue::Spawned(spawned) = &replication.value {
                self.state
                    .actors
                    .spawn(replication.actor_id, spawned, self.state.frame_index);
            }
        }
    }

    fn apply_updates(&mut self, frame: &Frame) -> RattleFramesResult<()> {
        for replication in frame.replications.iter() {
            if let ReplicationValue::Updated(updates) = &replication.value {
                for update in updates.iter() {
                    replication::apply_update(&mut self.state, replication.actor_id, update)?;
                }
            }
        }
        Ok(())
    }

    // Accessors

    pub fn state(&self) -> &ReplayState {
        &self.state
    }

    pub fn get_actor(&self, actor_id: ActorId) -> Option<&Actor> {
        self.state.actors.get(actor_id)
    }

    pub fn get_ball_actor(&self) -> Option<&Actor> {
        self.state.ball_id.and_then(|id| self.state.actors.get(id))
    }

    /// The resolved pairs for the current frame, as actor records, in store
    /// order.
    pub fn iter_player_car_pairs(&self) -> impl Iterator<Item = (&Actor, &Actor)> {
        self.state.player_car_pairs.iter().filter_map(|(player, car)| {
            Some((self.state.actors.get(*player)?, self.state.actors.get(*car)?))
        })
    }
}
