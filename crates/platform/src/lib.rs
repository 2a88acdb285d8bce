//! Desktop host: a winit window drawing the typed-input gallery with egui.

mod gallery;

pub use gallery::Gallery;

use std::sync::Arc;
use std::{thread, time::Duration};

use gfx::Renderer;
use winit::{
    application::ApplicationHandler,
    error::EventLoopError,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop, EventLoopProxy},
    window::{Window, WindowId},
};

const FRAME: Duration = Duration::from_millis(16);

enum UserEvent {
    Tick,
}

pub fn run() -> Result<(), EventLoopError> {
    let event_loop = EventLoop::<UserEvent>::with_user_event().build()?;
    let proxy = event_loop.create_proxy();

    let mut app = PlatformApp {
        window: None,
        renderer: None,
        proxy: Some(proxy),
        ticker_started: false,
        gallery: Gallery::new(),
    };
    event_loop.run_app(&mut app)
}

struct PlatformApp {
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    proxy: Option<EventLoopProxy<UserEvent>>,
    ticker_started: bool,
    gallery: Gallery,
}

impl PlatformApp {
    fn start_ticker(&mut self) {
        if self.ticker_started {
            return;
        }
        let Some(proxy) = self.proxy.take() else {
            return;
        };
        self.ticker_started = true;

        thread::spawn(move || {
            loop {
                if proxy.send_event(UserEvent::Tick).is_err() {
                    break;
                }
                thread::sleep(FRAME);
            }
        });
    }
}

impl ApplicationHandler<UserEvent> for PlatformApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let attributes = Window::default_attributes()
                .with_title("Typed inputs")
                .with_inner_size(winit::dpi::LogicalSize::new(960.0, 720.0));
            let window = match event_loop.create_window(attributes) {
                Ok(window) => Arc::new(window),
                Err(err) => {
                    log::error!(target: "platform", "cannot create window: {err}");
                    event_loop.exit();
                    return;
                }
            };
            self.renderer = Some(Renderer::new(Arc::clone(&window)));
            self.window = Some(window);
            log::info!(target: "platform", "window ready");
        }

        self.start_ticker();
    }

    fn user_event(&mut self, _event_loop: &ActiveEventLoop, event: UserEvent) {
        match event {
            UserEvent::Tick => {
                if let Some(window) = self.window.as_ref() {
                    window.request_redraw();
                }
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let (Some(window), Some(renderer)) = (self.window.as_ref(), self.renderer.as_mut()) else {
            return;
        };
        renderer.on_window_event(window, &event);

        match event {
            WindowEvent::CloseRequested => {
                log::info!(target: "platform", "close requested");
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => renderer.resize(new_size),
            WindowEvent::RedrawRequested => {
                let gallery = &mut self.gallery;
                renderer.render(window, |ctx| gallery.ui(ctx));
            }
            _ => {}
        }
    }
}
