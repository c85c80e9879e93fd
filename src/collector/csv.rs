//! Renders the per-frame telemetry table: one row per resolved player/car
//! pair, then one row for the ball, for every frame, accumulated into a
//! single growing buffer.

use crate::constants::*;
use crate::*;

pub const CSV_HEADERS: [&str; 19] = [
    "time",
    "player_name",
    "team",
    "boost",
    "location_x",
    "location_y",
    "location_z",
    "rotation_x",
    "rotation_y",
    "rotation_z",
    "rotation_w",
    "linear_velocity_x",
    "linear_velocity_y",
    "linear_velocity_z",
    "angular_velocity_x",
    "angular_velocity_y",
    "angular_velocity_z",
    "speed",
    "distance_to_ball",
];

/// Renders one numeric field. A component missing from an otherwise present
/// record counts as 0 here; a record that was never replicated at all never
/// reaches this function and renders as empty fields instead. The two
/// fallbacks are distinct: "car has no position yet" is not "car at the
/// origin".
fn component(value: Option<f32>) -> String {
    format!("{}", value.unwrap_or(0.0))
}

fn vec3_fields(group: Option<&Vec3>) -> [String; 3] {
    match group {
        Some(v) => [component(v.x), component(v.y), component(v.z)],
        None => [String::new(), String::new(), String::new()],
    }
}

fn quat_fields(group: Option<&Quat>) -> [String; 4] {
    match group {
        Some(q) => [
            component(q.x),
            component(q.y),
            component(q.z),
            component(q.w),
        ],
        None => [
            String::new(),
            String::new(),
            String::new(),
            String::new(),
        ],
    }
}

/// [`Collector`] that renders every frame into a CSV table. Column defaults:
/// a player whose name has not replicated yet shows as `unknown player`, team
/// defaults to `-1` and boost to `255` (both read from the car actor), and
/// the ball row carries only time, the `ball` label and its location.
pub struct CsvCollector {
    output: String,
}

impl CsvCollector {
    pub fn new() -> Self {
        let mut output = CSV_HEADERS.join(",");
        output.push('\n');
        Self { output }
    }

    /// Processes a whole document and returns the finished table.
    pub fn process_document(document: &ReplayDocument) -> RattleFramesResult<String> {
        Ok(Self::new().process_replay(document)?.into_string())
    }

    pub fn into_string(self) -> String {
        self.output
    }

    fn push_fields(&mut self, fields: &[String]) {
        self.output.push_str(&fields.join(","));
        self.output.push('\n');
    }

    fn push_pair_row(&mut self, time: f32, player: &Actor, car: &Actor) {
        let mut fields: Vec<String> = Vec::with_capacity(CSV_HEADERS.len());
        fields.push(format!("{}", time));
        fields.push(
            player
                .player_name
                .clone()
                .unwrap_or_else(|| UNKNOWN_PLAYER_NAME.to_string()),
        );
        fields.push(car.team.unwrap_or(-1).to_string());
        fields.push(car.boost.unwrap_or(UNKNOWN_BOOST).to_string());
        fields.extend(vec3_fields(car.location.as_ref()));
        fields.extend(quat_fields(car.rotation.as_ref()));
        fields.extend(vec3_fields(car.linear_velocity.as_ref()));
        fields.extend(vec3_fields(car.angular_velocity.as_ref()));
        fields.push(component(car.speed));
        fields.push(component(car.distance_to_ball));
        self.push_fields(&fields);
    }

    fn push_ball_row(&mut self, time: f32, ball: &Actor) {
        let mut fields: Vec<String> = Vec::with_capacity(CSV_HEADERS.len());
        fields.push(format!("{}", time));
        fields.push("ball".to_string());
        fields.push(String::new());
        fields.push(String::new());
        fields.extend(vec3_fields(ball.location.as_ref()));
        fields.resize(CSV_HEADERS.len(), String::new());
        self.push_fields(&fields);
    }
}

impl Default for CsvCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl Collector for CsvCollector {
    fn process_frame(
        &mut self,
        processor: &ReplayProcessor,
        _frame: &Frame,
        _frame_index: usize,
    ) -> RattleFramesResult<()> {
        let time = processor.state().time;
        for (player, car) in processor.iter_player_car_pairs() {
            self.push_pair_row(time, player, car);
        }
        if let Some(ball) = processor.get_ball_actor() {
            self.push_ball_row(time, ball);
        }
        Ok(())
    }
}
