use std::sync::OnceLock;

use log::{debug, warn};
use nannou::prelude::*;

use crate::cluster::ClusterState;
use crate::config::{AppConfig, K_MAX, K_MIN};
use crate::render::{self, Camera, MarkerStyle};

const WINDOW_WIDTH: u32 = 1024;
const WINDOW_HEIGHT: u32 = 768;
const ORBIT_RATE: f32 = 0.25;
const OUTLINE_WEIGHT: f32 = 1.5;
const HUD_MARGIN: f32 = 18.0;

// nannou takes plain function pointers, so the parsed configuration is
// handed to `model` through a once-set global rather than a closure.
static CONFIG: OnceLock<AppConfig> = OnceLock::new();

pub struct Model {
    state: ClusterState,
    k: usize,
    camera: Camera,
    orbiting: bool,
    config: AppConfig,
}

/// Open the window and run the event loop until the user closes it.
pub fn run(config: AppConfig) {
    CONFIG.set(config).ok();
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    app.new_window()
        .title("clusterscope")
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .view(view)
        .key_pressed(key_pressed)
        .build()
        .unwrap();

    let config = CONFIG.get().copied().unwrap_or_default();
    let mut state = match config.seed {
        Some(seed) => ClusterState::new(seed),
        None => ClusterState::from_entropy(),
    };
    state.generate_points(config.points, config.range);

    Model {
        state,
        k: config.k,
        camera: Camera::default(),
        orbiting: true,
        config,
    }
}

fn update(_app: &App, model: &mut Model, update: Update) {
    if model.orbiting {
        model.camera.yaw += ORBIT_RATE * update.since_last.as_secs_f32();
    }
}

fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    match key {
        Key::Up => {
            model.k = (model.k + 1).min(K_MAX);
        }
        Key::Down => {
            model.k = model.k.saturating_sub(1).max(K_MIN);
        }
        Key::C => {
            model.state.generate_centroids(model.k, model.config.range);
            debug!("initialized {} centroids", model.k);
        }
        Key::A => {
            if let Err(err) = model.state.assign() {
                warn!("assignment skipped: {err}");
            } else {
                debug!("assigned {} points", model.state.points().len());
            }
        }
        Key::M => {
            if let Err(err) = model.state.recompute_centroids() {
                warn!("recompute skipped: {err}");
            } else {
                debug!("recomputed centroid positions");
            }
        }
        Key::R => {
            model.state.clear_centroids();
            model.state.generate_points(model.config.points, model.config.range);
            debug!("reset to {} fresh points", model.config.points);
        }
        Key::O => {
            model.orbiting = !model.orbiting;
        }
        _ => {}
    }
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(BLACK);
    let win = app.window_rect();

    // Far-to-near so nearer markers occlude farther ones.
    let mut projected: Vec<_> = render::markers(&model.state)
        .into_iter()
        .filter_map(|m| model.camera.project(m.position, win.h()).map(|pr| (pr, m)))
        .collect();
    projected.sort_by(|a, b| b.0.depth.total_cmp(&a.0.depth));

    for (pr, marker) in &projected {
        let radius = marker.radius * pr.scale;
        match marker.style {
            MarkerStyle::Filled => {
                draw.ellipse().x_y(pr.x, pr.y).radius(radius).color(marker.color);
            }
            MarkerStyle::Outlined => {
                draw.ellipse()
                    .x_y(pr.x, pr.y)
                    .radius(radius)
                    .no_fill()
                    .stroke(marker.color)
                    .stroke_weight(OUTLINE_WEIGHT);
            }
        }
    }

    draw_hud(&draw, &win, model);
    draw.to_frame(app, &frame).unwrap();
}

fn draw_hud(draw: &Draw, win: &Rect, model: &Model) {
    let assigned = if model.state.is_assigned() {
        "assigned"
    } else {
        "unassigned"
    };
    let status = format!(
        "k = {}\n{} points, {} centroids, {}\n\n\
         up/down  adjust k\n\
         C  initialize centroids\n\
         A  assign points\n\
         M  move centroids\n\
         R  reset points\n\
         O  toggle orbit",
        model.k,
        model.state.points().len(),
        model.state.centroids().len(),
        assigned,
    );

    let width = 260.0;
    draw.text(&status)
        .x_y(
            win.left() + width * 0.5 + HUD_MARGIN,
            win.top() - 90.0 - HUD_MARGIN,
        )
        .w(width)
        .left_justify()
        .font_size(14)
        .color(WHITE);
}
