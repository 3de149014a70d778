use crate::graphics::{draw_line, plot_point};
use crate::lorenz::{integrate, DT, INITIAL_POINT};
use crate::math::{multiply_matrices, multiply_matrix_vector, rotation_x, rotation_y};
use crate::state::{AppState, Command, Mode};
use druid::keyboard_types::Key;
use druid::text::FontFamily;
use druid::widget::prelude::*;
use druid::{
    commands,
    piet::{InterpolationMode, Text, TextLayoutBuilder},
    Color, RenderContext, Widget,
};
use std::time::{Duration, Instant};

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Lorenz attractor widget
pub struct AttractorWidget {
    /// When Animation mode was last entered; the animation cursor is derived
    /// from the time elapsed since this instant.
    animation_started: Instant,
}

impl AttractorWidget {
    pub fn new() -> Self {
        AttractorWidget {
            animation_started: Instant::now(),
        }
    }

    fn draw_text(ctx: &mut PaintCtx, text: String, pos: (f64, f64), color: Color) {
        let text_layout = ctx
            .text()
            .new_text_layout(text)
            .font(FontFamily::SYSTEM_UI, 14.0)
            .text_color(color)
            .build()
            .unwrap();
        ctx.draw_text(&text_layout, pos);
    }
}

/// Maps a pressed key to its state command, if it has one. The escape key is
/// handled separately since quitting goes through the druid command queue.
fn command_for_key(key: &Key) -> Option<Command> {
    match key {
        Key::ArrowRight => Some(Command::RotateRight),
        Key::ArrowLeft => Some(Command::RotateLeft),
        Key::ArrowUp => Some(Command::RotateUp),
        Key::ArrowDown => Some(Command::RotateDown),
        Key::Character(s) => match s.as_str() {
            "1" => Some(Command::EnterExplorer),
            "2" => Some(Command::EnterAnimation),
            "q" | "Q" => Some(Command::IncreaseS),
            "a" | "A" => Some(Command::DecreaseS),
            "w" | "W" => Some(Command::IncreaseB),
            "s" | "S" => Some(Command::DecreaseB),
            "e" | "E" => Some(Command::IncreaseR),
            "d" | "D" => Some(Command::DecreaseR),
            "x" | "X" => Some(Command::IncreaseColorFrequency),
            "z" | "Z" => Some(Command::DecreaseColorFrequency),
            "0" => Some(Command::ResetView),
            "9" => Some(Command::ResetParameters),
            "8" => Some(Command::ResetColor),
            _ => None,
        },
        _ => None,
    }
}

impl Widget<AppState> for AttractorWidget {
    /// Handle events for the attractor widget
    fn event(&mut self, ctx: &mut EventCtx, event: &Event, data: &mut AppState, _env: &Env) {
        match event {
            Event::WindowConnected => {
                ctx.request_timer(FRAME_INTERVAL);
                // Request focus to receive keyboard events
                ctx.request_focus();
            }
            Event::Timer(_) => {
                // The timer stands in for an idle callback: while animating,
                // recompute the cursor from the wall clock and repaint.
                if data.mode == Mode::Animation && !data.animation_complete() {
                    let elapsed_ms = self.animation_started.elapsed().as_secs_f64() * 1000.0;
                    data.tick(elapsed_ms);
                    ctx.request_paint();
                }
                ctx.request_timer(FRAME_INTERVAL);
            }
            Event::KeyDown(key_event) => {
                if key_event.key == Key::Escape {
                    // Submit the QUIT_APP command to exit the application
                    ctx.submit_command(commands::QUIT_APP);
                } else if let Some(command) = command_for_key(&key_event.key) {
                    if command == Command::EnterAnimation {
                        self.animation_started = Instant::now();
                    }
                    data.apply(command);
                    ctx.request_paint();
                }
            }
            _ => {}
        }
    }

    fn lifecycle(
        &mut self,
        _ctx: &mut LifeCycleCtx,
        _event: &LifeCycle,
        _data: &AppState,
        _env: &Env,
    ) {
    }

    fn update(&mut self, _ctx: &mut UpdateCtx, _old_data: &AppState, _data: &AppState, _env: &Env) {
    }

    /// Determines the layout constraints for the attractor widget
    fn layout(
        &mut self,
        _layout_ctx: &mut LayoutCtx,
        bc: &BoxConstraints,
        _data: &AppState,
        _env: &Env,
    ) -> Size {
        bc.max()
    }

    /// Paint the attractor widget
    fn paint(&mut self, ctx: &mut PaintCtx, data: &AppState, _env: &Env) {
        let size = ctx.size();
        let width = size.width as usize;
        let height = size.height as usize;
        if width == 0 || height == 0 {
            return;
        }

        // Opaque black background
        let mut pixel_data = vec![0u8; width * height * 4];
        for pixel in pixel_data.chunks_exact_mut(4) {
            pixel[3] = 255;
        }

        // Viewing rotation: pitch about X applied after yaw about Y.
        let rotation = multiply_matrices(
            &rotation_x(data.pitch as f64),
            &rotation_y(data.yaw as f64),
        );

        // Aspect-corrected orthographic projection: y spans [-1, 1] over the
        // window height, x uses the same scale, screen y grows downward.
        let center = (size.width / 2.0, size.height / 2.0);
        let scale = size.height / 2.0;
        let project = |point: &[f64; 3]| {
            let rotated = multiply_matrix_vector(&rotation, point);
            (
                center.0 + rotated[0] * scale,
                center.1 - rotated[1] * scale,
                rotated[2],
            )
        };

        // Recompute the trajectory from scratch every frame, up to the full
        // length in explorer mode or the animation cursor while animating.
        let trajectory = integrate(
            &data.params(),
            INITIAL_POINT,
            DT,
            data.points_to_render(),
            data.color_frequency,
        );
        for point in &trajectory {
            let (x, y, depth) = project(&point.position);
            // Depth clip against the orthographic box
            if !(-1.0..=1.0).contains(&depth) {
                continue;
            }
            let [r, g, b] = point.color;
            plot_point(x, y, &mut pixel_data, width, height, Color::rgb(r, g, b));
        }

        // Draw the three unit axes in white
        let origin = project(&[0.0, 0.0, 0.0]);
        let axis_tips = [
            project(&[1.0, 0.0, 0.0]),
            project(&[0.0, 1.0, 0.0]),
            project(&[0.0, 0.0, 1.0]),
        ];
        for tip in &axis_tips {
            draw_line(
                origin.0,
                origin.1,
                tip.0,
                tip.1,
                &mut pixel_data,
                width,
                height,
                Color::WHITE,
            );
        }

        // Create and draw the image
        let image = ctx
            .make_image(
                width,
                height,
                &pixel_data,
                druid::piet::ImageFormat::RgbaSeparate,
            )
            .unwrap();
        ctx.draw_image(&image, size.to_rect(), InterpolationMode::NearestNeighbor);

        // Label the axes
        for (label, tip) in ["X", "Y", "Z"].iter().zip(&axis_tips) {
            Self::draw_text(ctx, label.to_string(), (tip.0, tip.1), Color::WHITE);
        }

        // HUD in the bottom-left corner, stacked upward
        let mut hud = vec![
            format!("View Angle={},{}", data.yaw, data.pitch),
            format!("s: {:.0}, b: {:.4}, r: {:.0}", data.s, data.b, data.r),
            format!("color frequency: {:.4}", data.color_frequency),
        ];
        match data.mode {
            Mode::Explorer => hud.push("Mode: Explorer".to_string()),
            Mode::Animation => {
                hud.push("Mode: Animation".to_string());
                if data.animation_complete() {
                    hud.push("Animation complete".to_string());
                } else {
                    hud.push(format!("Animation frame: {}", data.animation_cursor));
                }
            }
        }
        for (line, text) in hud.into_iter().enumerate() {
            let y = size.height - 22.0 * (line + 1) as f64;
            Self::draw_text(ctx, text, (5.0, y), Color::WHITE);
        }
    }
}
