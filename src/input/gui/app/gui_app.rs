use std::time::Instant;

use egui::{Align2, Color32, Context, RichText};
use egui_winit::State as EguiWinitState;
use tracing::{error, warn};
use winit::{
    event::{ElementState, Event, KeyEvent, StartCause, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::Window,
};

use crate::core::data::colour::Colour;
use crate::input::gui::GuiError;
use crate::input::gui::app::pointer_input::{PointerEvent, PointerInputState};
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::app::state::{GuiAppState, Screen};

/// What the user asked for through an egui widget this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UiAction {
    StartGame(u32),
    ReturnToSelector,
}

fn to_color32(colour: Colour) -> Color32 {
    Color32::from_rgb(colour.r, colour.g, colour.b)
}

pub struct GuiApp<T: GuiPresenterPort> {
    window: &'static Window,
    presenter: T,
    state: GuiAppState,
    pointer: PointerInputState,
    egui_ctx: Context,
    egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        presenter: T,
        state: GuiAppState,
    ) -> Self {
        let egui_ctx = Context::default();
        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None, // max_texture_side, use default
        );

        Self {
            window,
            presenter,
            state,
            pointer: PointerInputState::default(),
            egui_ctx,
            egui_state,
        }
    }

    /// Runs the fixed-rate frame loop until the window is closed.
    pub fn run(mut self, event_loop: EventLoop<()>) -> Result<(), GuiError> {
        let frame_interval = self.state.config().window.frame_interval();
        let mut next_frame = Instant::now();

        event_loop.run(move |event, elwt| match event {
            Event::NewEvents(StartCause::ResumeTimeReached { .. } | StartCause::Init) => {
                let now = Instant::now();
                self.state.tick(now);
                self.window.request_redraw();

                next_frame = now + frame_interval;
                elwt.set_control_flow(ControlFlow::WaitUntil(next_frame));
            }
            Event::WindowEvent { ref event, window_id } if window_id == self.window.id() => {
                if let Err(e) = self.handle_window_event(event) {
                    error!(error = %e, "closing window");
                    elwt.exit();
                }

                if matches!(event, WindowEvent::CloseRequested) {
                    elwt.exit();
                }
            }
            Event::AboutToWait => {
                elwt.set_control_flow(ControlFlow::WaitUntil(next_frame));
            }
            _ => {}
        })?;

        Ok(())
    }

    fn handle_window_event(&mut self, event: &WindowEvent) -> Result<(), GuiError> {
        let egui_consumed = self.egui_state.on_window_event(self.window, event).consumed;

        match event {
            WindowEvent::RedrawRequested => self.redraw()?,
            WindowEvent::Resized(size) => self.presenter.resize(size.width, size.height)?,
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                let size = self.window.inner_size();
                self.presenter.resize(size.width, size.height)?;
            }
            WindowEvent::CursorMoved { position, .. } => {
                let at = self.presenter.window_to_board((position.x, position.y));
                self.state.set_cursor(at);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let at = self.state.cursor();

                // A press egui claimed never reaches the board; its release
                // is then dropped by the pointer state.
                if egui_consumed && *state == ElementState::Pressed {
                    return Ok(());
                }

                match self.pointer.handle_button(*button, *state, at) {
                    Some(PointerEvent::Down(at)) => self.state.pointer_down(at),
                    Some(PointerEvent::Up(at)) => self.state.pointer_up(at),
                    None => {}
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Space),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } if !egui_consumed => {
                if let Err(e) = self.state.restart_if_celebrating() {
                    warn!(error = %e, "could not restart");
                }
            }
            WindowEvent::Focused(false) => self.pointer.reset(),
            _ => {}
        }

        Ok(())
    }

    fn redraw(&mut self) -> Result<(), GuiError> {
        let mut egui_output = self.update_ui();
        let platform_output = std::mem::take(&mut egui_output.platform_output);

        self.egui_state
            .handle_platform_output(self.window, platform_output);

        self.state.draw(self.presenter.board_mut())?;
        self.presenter.render(egui_output, &self.egui_ctx)?;

        Ok(())
    }

    fn update_ui(&mut self) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(self.window);
        let now = Instant::now();
        let state = &self.state;
        let palette = state.config().palette;
        let mut action = None;

        let output = self.egui_ctx.run(raw_input, |ctx| match state.screen() {
            Screen::SelectingDisks => {
                egui::Area::new("disk_selector")
                    .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
                    .show(ctx, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.label(
                                RichText::new("Select Number of Disks")
                                    .size(28.0)
                                    .color(to_color32(palette.text)),
                            );
                            ui.add_space(12.0);

                            for num_disks in state.config().game.disk_choices() {
                                let button = egui::Button::new(
                                    RichText::new(num_disks.to_string())
                                        .size(20.0)
                                        .color(to_color32(palette.text)),
                                )
                                .fill(to_color32(palette.button))
                                .min_size([100.0, 30.0].into());

                                if ui.add(button).clicked() {
                                    action = Some(UiAction::StartGame(num_disks));
                                }
                            }
                        });
                    });
            }
            Screen::Playing(controller) => {
                egui::Area::new("move_counter")
                    .anchor(Align2::LEFT_TOP, [10.0, 10.0])
                    .show(ctx, |ui| {
                        ui.label(
                            RichText::new(format!("Moves: {}", controller.puzzle().move_count()))
                                .size(20.0)
                                .color(to_color32(palette.text)),
                        );
                    });

                if state.celebration_visible(now) {
                    egui::Area::new("win_message")
                        .anchor(Align2::CENTER_CENTER, [0.0, -40.0])
                        .show(ctx, |ui| {
                            ui.vertical_centered(|ui| {
                                ui.label(
                                    RichText::new("Congratulations! You won!")
                                        .size(28.0)
                                        .color(to_color32(palette.win_text)),
                                );
                                ui.add_space(12.0);

                                let reset = egui::Button::new(
                                    RichText::new("Reset").color(to_color32(palette.text)),
                                )
                                .fill(to_color32(palette.button))
                                .min_size([100.0, 40.0].into());

                                if ui.add(reset).clicked() {
                                    action = Some(UiAction::ReturnToSelector);
                                }
                            });
                        });
                }
            }
        });

        match action {
            Some(UiAction::StartGame(num_disks)) => {
                if let Err(e) = self.state.start_game(num_disks) {
                    warn!(num_disks, error = %e, "could not start game");
                }
            }
            Some(UiAction::ReturnToSelector) => {
                self.pointer.reset();
                self.state.return_to_selector();
            }
            None => {}
        }

        output
    }
}
