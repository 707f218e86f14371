use std::marker::PhantomData;
use std::sync::Arc;

use tracing::info;
use winit::{
    dpi::PhysicalSize,
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

use crate::adapters::move_log::TracingMoveObserver;
use crate::config::HanoiConfig;
use crate::input::gui::GuiError;
use crate::input::gui::app::{GuiApp, GuiAppState, ports::presenter::GuiPresenterPort};
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;

/// Opens the game window and blocks until it is closed.
pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    config: HanoiConfig,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F, config: HanoiConfig) -> Self {
        Self {
            presenter_factory,
            config,
            _phantom: PhantomData,
        }
    }

    pub fn execute(self) -> Result<(), GuiError> {
        let event_loop = EventLoop::new()?;
        let window_config = &self.config.window;

        // pixels needs a 'static surface; the window lives until exit anyway.
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(window_config.title.as_str())
                .with_inner_size(PhysicalSize::new(window_config.width, window_config.height))
                .with_resizable(false)
                .build(&event_loop)?,
        ));

        let state = GuiAppState::new(self.config)?.with_observer(Arc::new(TracingMoveObserver));
        let presenter: P = self
            .presenter_factory
            .build(window, state.layout().bounds())?;

        info!(
            width = state.layout().bounds().width(),
            height = state.layout().bounds().height(),
            "window open"
        );

        GuiApp::new(window, &event_loop, presenter, state).run(event_loop)
    }
}
