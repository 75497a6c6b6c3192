use bevy::input::touch::{TouchInput, TouchPhase};
use bevy::prelude::*;

use crate::engine::scene::rooms::RoomRegistry;

/// A classified user-input event, consumed by the camera controller within
/// the same frame it was produced.
#[derive(Event, Debug, Clone, PartialEq)]
pub enum Intent {
    /// A press landed on a room.
    Tap { target: String },
    /// One-finger orbit, delta from the last observed position.
    Drag { delta: Vec2 },
    /// Two-finger zoom, positive when the fingers moved together.
    PinchZoom { delta: f32 },
}

/// One raw multi-touch sample as the window delivers it.
#[derive(Debug, Clone, Copy)]
pub struct TouchSample {
    pub touch_id: u64,
    pub position: Vec2,
    pub phase: TouchPhase,
}

impl From<&TouchInput> for TouchSample {
    fn from(touch: &TouchInput) -> Self {
        Self {
            touch_id: touch.id,
            position: touch.position,
            phase: touch.phase,
        }
    }
}

struct ActiveTouch {
    id: u64,
    position: Vec2,
}

/// Turns raw touch samples into discrete intents.
///
/// Carries only its own memory across frames: the active-touch table, the
/// last observed single-touch position, and the pinch baseline. Intents are
/// never buffered; each call classifies one frame's batch and the result is
/// consumed immediately.
///
/// Classification:
/// - one active touch pressing down on a room emits a `Tap` immediately,
///   with no velocity or duration threshold;
/// - one active touch moving emits `Drag` deltas against the last observed
///   position, so cumulative drift is free orbiting, not an error;
/// - two active touches emit `PinchZoom` once a baseline distance exists;
/// - zero or more than two active touches emit nothing.
#[derive(Resource, Default)]
pub struct GestureInterpreter {
    active: Vec<ActiveTouch>,
    last_position: Vec2,
    last_pinch_distance: Option<f32>,
}

impl GestureInterpreter {
    /// Classify one frame's samples. `hit_test` resolves a screen position
    /// to the room a press landed on, if any.
    pub fn interpret<F>(&mut self, samples: &[TouchSample], mut hit_test: F) -> Vec<Intent>
    where
        F: FnMut(Vec2) -> Option<String>,
    {
        let mut intents = Vec::new();

        for sample in samples {
            match sample.phase {
                TouchPhase::Started => self.touch_began(sample, &mut hit_test, &mut intents),
                TouchPhase::Moved => self.touch_moved(sample, &mut intents),
                TouchPhase::Ended | TouchPhase::Canceled => self.touch_ended(sample.touch_id),
            }
        }

        intents
    }

    fn touch_began<F>(&mut self, sample: &TouchSample, hit_test: &mut F, intents: &mut Vec<Intent>)
    where
        F: FnMut(Vec2) -> Option<String>,
    {
        match self.active.iter_mut().find(|t| t.id == sample.touch_id) {
            Some(touch) => touch.position = sample.position,
            None => self.active.push(ActiveTouch {
                id: sample.touch_id,
                position: sample.position,
            }),
        }

        match self.active.len() {
            1 => {
                self.last_position = sample.position;
                if let Some(target) = hit_test(sample.position) {
                    intents.push(Intent::Tap { target });
                }
            }
            2 => {
                // Baseline for the pinch; the first delta comes from the
                // next movement.
                self.last_pinch_distance = Some(self.pinch_distance());
            }
            _ => {}
        }
    }

    fn touch_moved(&mut self, sample: &TouchSample, intents: &mut Vec<Intent>) {
        let Some(touch) = self.active.iter_mut().find(|t| t.id == sample.touch_id) else {
            return;
        };
        touch.position = sample.position;

        match self.active.len() {
            1 => {
                let delta = sample.position - self.last_position;
                intents.push(Intent::Drag { delta });
                self.last_position = sample.position;
            }
            2 => {
                let distance = self.pinch_distance();
                match self.last_pinch_distance {
                    Some(last) => {
                        intents.push(Intent::PinchZoom {
                            delta: last - distance,
                        });
                        self.last_pinch_distance = Some(distance);
                    }
                    None => self.last_pinch_distance = Some(distance),
                }
            }
            _ => {}
        }
    }

    fn touch_ended(&mut self, touch_id: u64) {
        self.active.retain(|t| t.id != touch_id);
        if self.active.len() != 2 {
            self.last_pinch_distance = None;
        }
        if let [remaining] = self.active.as_slice() {
            // The survivor's known position becomes the new drag origin so
            // the next move does not jump.
            self.last_position = remaining.position;
        }
    }

    fn pinch_distance(&self) -> f32 {
        match self.active.as_slice() {
            [a, b, ..] => a.position.distance(b.position),
            _ => 0.0,
        }
    }
}

/// Per-frame batch: drain raw touch input, classify, publish intents.
pub fn gesture_system(
    mut touch_events: EventReader<TouchInput>,
    mut interpreter: ResMut<GestureInterpreter>,
    registry: Res<RoomRegistry>,
    camera_query: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    mut intents: EventWriter<Intent>,
) {
    let samples: Vec<TouchSample> = touch_events.read().map(TouchSample::from).collect();
    if samples.is_empty() {
        return;
    }

    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };

    let hit_test = |position: Vec2| -> Option<String> {
        let ray = camera.viewport_to_world(camera_transform, position).ok()?;
        registry
            .hit_test(ray.origin, *ray.direction)
            .map(|room| room.id.clone())
    };

    for intent in interpreter.interpret(&samples, hit_test) {
        intents.write(intent);
    }
}
