//! Frame composition
//!
//! Turns a read-only [`GameState`] into one triangle list, back to front.

use glam::Vec2;

use super::shapes::{circle, dashed_line, ellipse, gradient_rect, line, polyline, rect, triangle};
use super::vertex::{Vertex, colors};
use crate::consts::*;
use crate::sim::{GamePhase, GameState, Obstacle, ObstacleKind, Scenery, SceneryKind, Wave};

/// Track surface starts at this y
const TRACK_TOP: f32 = 300.0;
/// Horizontal step when sampling wave lines
const WAVE_STEP: f32 = 10.0;
const CIRCLE_SEGMENTS: u32 = 12;

/// Penguin parts relative to the player anchor: (x, y, w, h, color)
const PENGUIN: &[(f32, f32, f32, f32, [f32; 4])] = &[
    // Skis first, behind the body
    (-20.0, 35.0, 8.0, 60.0, colors::SKI),
    (12.0, 35.0, 8.0, 60.0, colors::SKI),
    (-18.0, 25.0, 4.0, 10.0, colors::SKI),
    (14.0, 25.0, 4.0, 10.0, colors::SKI),
    // Body, belly, head
    (-25.0, -5.0, 50.0, 50.0, colors::BLACK),
    (-18.0, 5.0, 36.0, 35.0, colors::WHITE),
    (-20.0, -30.0, 40.0, 30.0, colors::BLACK),
    // Goggles
    (-22.0, -20.0, 44.0, 15.0, colors::GOGGLES),
    (-18.0, -18.0, 12.0, 12.0, colors::LENS),
    (6.0, -18.0, 12.0, 12.0, colors::LENS),
    (-15.0, -16.0, 4.0, 4.0, colors::WHITE),
    (9.0, -16.0, 4.0, 4.0, colors::WHITE),
    // Beak
    (-3.0, -8.0, 6.0, 4.0, colors::BEAK),
    // Flippers
    (-35.0, 5.0, 15.0, 20.0, colors::BLACK),
    (20.0, 5.0, 15.0, 20.0, colors::BLACK),
    // Poles: shaft, handle, basket
    (-30.0, -15.0, 3.0, 65.0, colors::POLE),
    (-31.0, -18.0, 5.0, 8.0, colors::BLACK),
    (-33.0, 43.0, 7.0, 7.0, colors::POLE_BASKET),
    (27.0, -15.0, 3.0, 65.0, colors::POLE),
    (26.0, -18.0, 5.0, 8.0, colors::BLACK),
    (24.0, 43.0, 7.0, 7.0, colors::POLE_BASKET),
    // Boots
    (-24.0, 30.0, 16.0, 12.0, colors::BOOT),
    (8.0, 30.0, 16.0, 12.0, colors::BOOT),
];

/// Build every vertex for the current frame
pub fn build_scene(state: &GameState) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(4096);

    background(&mut vertices, &state.scenery);
    waves(&mut vertices, &state.waves);

    // Menu shows only the backdrop
    if state.phase != GamePhase::Menu {
        for obstacle in &state.obstacles {
            vertices.extend(obstacle_shape(obstacle));
        }
        for fish in &state.collectibles {
            vertices.extend(fish_shape(fish.pos));
        }
        vertices.extend(penguin(state.player.pos));
    }

    vertices
}

fn background(out: &mut Vec<Vertex>, scenery: &[Scenery]) {
    out.extend(gradient_rect(
        0.0,
        0.0,
        FIELD_WIDTH,
        FIELD_HEIGHT,
        colors::SKY_TOP,
        colors::SKY_BOTTOM,
    ));

    for prop in scenery {
        let p = prop.pos;
        let s = prop.size;
        match prop.kind {
            SceneryKind::Iceberg => out.extend(triangle(
                Vec2::new(p.x, p.y + s),
                Vec2::new(p.x + s / 2.0, p.y),
                Vec2::new(p.x + s, p.y + s),
                colors::SCENERY_ICEBERG,
            )),
            SceneryKind::Snowflake => {
                out.extend(circle(p, s / 4.0, colors::SCENERY_SNOWFLAKE, CIRCLE_SEGMENTS))
            }
        }
    }

    out.extend(rect(
        0.0,
        TRACK_TOP,
        FIELD_WIDTH,
        FIELD_HEIGHT - TRACK_TOP,
        colors::TRACK,
    ));

    // Dividers halfway between lanes
    for pair in LANES.windows(2) {
        let x = (pair[0] + pair[1]) / 2.0;
        out.extend(dashed_line(
            Vec2::new(x, 0.0),
            Vec2::new(x, FIELD_HEIGHT),
            10.0,
            10.0,
            2.0,
            colors::LANE_DIVIDER,
        ));
    }
}

fn waves(out: &mut Vec<Vertex>, waves: &[Wave]) {
    let samples = (FIELD_WIDTH / WAVE_STEP) as usize + 1;

    for wave in waves {
        let points: Vec<Vec2> = (0..samples)
            .map(|i| {
                let x = i as f32 * WAVE_STEP;
                Vec2::new(x, wave.sample(x))
            })
            .collect();
        out.extend(polyline(&points, 3.0, colors::WAVE));
    }

    // Fainter highlight slightly out of phase
    for wave in waves {
        let points: Vec<Vec2> = (0..samples)
            .map(|i| {
                let x = i as f32 * WAVE_STEP;
                let y = wave.pos.y
                    + (x * wave.frequency + wave.phase + 0.5).sin() * wave.amplitude * 0.7;
                Vec2::new(x, y)
            })
            .collect();
        out.extend(polyline(&points, 2.0, colors::WAVE_HIGHLIGHT));
    }
}

fn obstacle_shape(obstacle: &Obstacle) -> Vec<Vertex> {
    let Vec2 { x, y } = obstacle.pos;
    let Vec2 { x: w, y: h } = obstacle.size;
    let left = x - w / 2.0;

    match obstacle.kind {
        ObstacleKind::IceBlock => {
            let mut v = rect(left, y, w, h, colors::OBSTACLE);
            v.extend(rect(left + 5.0, y + 5.0, w - 10.0, h - 10.0, colors::OBSTACLE_SHADOW));
            // Lit top and left edges
            v.extend(rect(left, y, w, 4.0, colors::OBSTACLE_EDGE));
            v.extend(rect(left, y, 4.0, h, colors::OBSTACLE_EDGE));
            v
        }
        ObstacleKind::Iceberg => {
            let apex = Vec2::new(x, y);
            let base_left = Vec2::new(left, y + h);
            let base_right = Vec2::new(x + w / 2.0, y + h);

            let mut v = triangle(apex, base_left, base_right, colors::OBSTACLE);
            v.extend(triangle(
                Vec2::new(x, y + 10.0),
                Vec2::new(x + w / 2.0 - 10.0, y + h),
                base_right,
                colors::OBSTACLE_SHADOW,
            ));
            v.extend(line(apex, base_left, 2.0, colors::OBSTACLE_EDGE));
            v
        }
    }
}

fn fish_shape(pos: Vec2) -> Vec<Vertex> {
    let body = Vec2::new(pos.x, pos.y + 12.0);
    let mut v = ellipse(body, Vec2::new(10.0, 6.0), colors::FISH, CIRCLE_SEGMENTS);
    v.extend(triangle(
        Vec2::new(pos.x - 10.0, pos.y + 12.0),
        Vec2::new(pos.x - 15.0, pos.y + 7.0),
        Vec2::new(pos.x - 15.0, pos.y + 17.0),
        colors::FISH,
    ));
    v
}

fn penguin(pos: Vec2) -> Vec<Vertex> {
    PENGUIN
        .iter()
        .flat_map(|&(dx, dy, w, h, color)| rect(pos.x + dx, pos.y + dy, w, h, color))
        .collect()
}
