// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canvas items: hover highlight and drag over a mixed scene.
//!
//! Replays a scripted pointer session against the canvas-items scene and logs
//! what each step did. Set `RUST_LOG=easel_canvas=debug` to also see the
//! controller's own transitions.
//!
//! An optional argument names a JSON file with a `CanvasConfig`.
//!
//! Run:
//! - `cargo run -p easel_demos --example canvas_items`
//! - `RUST_LOG=debug cargo run -p easel_demos --example canvas_items -- config.json`

use std::process::ExitCode;

use easel_canvas::{Canvas, CanvasConfig, Effect};
use easel_demos::{Step, canvas_items, scripted_session};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}

fn load_config() -> Result<CanvasConfig, String> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(CanvasConfig::default());
    };
    let text = std::fs::read_to_string(&path).map_err(|e| format!("{path}: {e}"))?;
    CanvasConfig::from_json_str(&text).map_err(|e| format!("{path}: {e}"))
}

fn report(canvas: &Canvas, effects: &[Effect]) {
    for effect in effects {
        match *effect {
            Effect::StyleChanged { item, attr } => {
                let value = canvas
                    .scene()
                    .style(item, attr)
                    .map_or("<unset>", |c| c.as_str());
                info!(?item, %attr, value, "style changed");
            }
            Effect::Moved { item, delta } => {
                info!(?item, dx = delta.x, dy = delta.y, "item moved");
            }
        }
    }
}

fn main() -> ExitCode {
    init_tracing();

    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            error!(%err, "could not load config");
            return ExitCode::FAILURE;
        }
    };
    let mut canvas = match canvas_items(config) {
        Ok(canvas) => canvas,
        Err(err) => {
            error!(%err, "invalid config");
            return ExitCode::FAILURE;
        }
    };
    let tag = &canvas.controller().config().interactive_tag;
    info!(
        items = canvas.scene().len(),
        interactive = canvas.scene().find_by_tag(tag).len(),
        "scene built"
    );
    canvas.take_damage();

    for step in scripted_session() {
        info!(?step, "replaying");
        match step {
            Step::Hover(p) => {
                let effects = canvas.on_pointer_motion(p);
                report(&canvas, &effects);
            }
            Step::Press(p) => match canvas.on_primary_down(p) {
                Some(item) => info!(?item, "drag started"),
                None => info!("press over empty space"),
            },
            Step::Drag(p) => {
                let effects = canvas.on_primary_move(p);
                if effects.is_empty() {
                    info!("no drag in progress");
                }
                report(&canvas, &effects);
            }
            Step::Release => {
                if let Some(item) = canvas.on_primary_up() {
                    info!(?item, "drag ended");
                }
            }
            Step::Scroll(delta) => {
                canvas.view_mut().scroll_by(delta);
                let visible = canvas.view().visible_scene_rect();
                info!(?visible, "scrolled");
            }
            Step::Exit => {
                let effects = canvas.on_pointer_exit_surface();
                report(&canvas, &effects);
            }
        }
        let damage = canvas.take_damage();
        if let Some(dirty) = damage.union_rect() {
            info!(?dirty, "redraw");
        }
    }

    ExitCode::SUCCESS
}
