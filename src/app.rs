use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::ActiveEventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::color::PackedColor;
use crate::frame::FrameClock;
use crate::presenter::SurfacePresenter;
use crate::session::Session;

/// Fixed configuration for one run.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub clear_color: PackedColor,
}

/// winit application driver.
///
/// Owns the window, the presenter, and the session explicitly; there is no
/// process-wide state. Setup failures are recorded so `main` can exit
/// non-zero after the event loop unwinds, since `ApplicationHandler` has no
/// error channel of its own.
pub struct App {
    config: AppConfig,
    window: Option<Arc<Window>>,
    presenter: Option<SurfacePresenter>,
    session: Session,
    clock: FrameClock,
    setup_error: Option<String>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let session = Session::new(config.width, config.height, config.clear_color);
        Self {
            config,
            window: None,
            presenter: None,
            session,
            clock: FrameClock::new(),
            setup_error: None,
        }
    }

    /// The diagnostic from a failed setup stage, if any.
    pub fn setup_error(&self) -> Option<&str> {
        self.setup_error.as_deref()
    }

    pub fn frames_presented(&self) -> u64 {
        self.session.frames_presented()
    }

    fn fail_setup(&mut self, event_loop: &ActiveEventLoop, message: String) {
        log::error!("{message}");
        self.setup_error = Some(message);
        self.session.close();
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(PhysicalSize::new(self.config.width, self.config.height))
            .with_resizable(false);

        let window = match event_loop.create_window(attributes) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                self.fail_setup(event_loop, format!("window creation failed: {e}"));
                return;
            }
        };

        let presenter =
            match SurfacePresenter::new(window.clone(), self.config.width, self.config.height) {
                Ok(p) => p,
                Err(e) => {
                    self.fail_setup(event_loop, format!("presenter setup failed: {e}"));
                    return;
                }
            };

        self.window = Some(window);
        self.presenter = Some(presenter);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => {
                self.session.close();
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                let (tick, fps_updated) = self.clock.tick();
                if fps_updated {
                    log::info!("{:.1} fps", self.clock.fps());
                }

                if let Some(presenter) = &mut self.presenter {
                    // A dropped present is a warning, not a reason to stop.
                    if let Err(e) = self.session.advance(presenter) {
                        log::warn!("frame {}: present failed: {e}", tick.number);
                    }
                }
            }
            // Remaining events are drained to keep the window responsive but
            // carry no behavior.
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if self.session.is_open() {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }
}
