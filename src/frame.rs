use crate::core::particles::{Camera, FieldRotation, PointerOffset};
use crate::dom;
use crate::render;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub canvas: web::HtmlCanvasElement,
    pub camera: Camera,
    pub rotation: FieldRotation,
    pub pointer: Rc<Cell<PointerOffset>>,
    pub gpu: Option<render::GpuState>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        self.rotation.advance(self.pointer.get());

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            match g.render(&self.camera, &self.rotation) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    log::debug!("[background] surface lost, reconfiguring");
                    g.reconfigure();
                }
                Err(e) => log::error!("render error: {:?}", e),
            }
        }
    }

    /// Window resized: refit the canvas and the camera aspect.
    pub fn resize(&mut self) {
        let (css_w, css_h) = dom::sync_canvas_to_window(&self.canvas);
        self.camera.set_viewport(css_w as f32, css_h as f32);
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    positions: &[[f32; 3]],
) -> Option<render::GpuState> {
    match render::GpuState::new(canvas, positions, Default::default()).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Handle to the requestAnimationFrame loop driving the background.
#[derive(Clone)]
pub struct RenderLoop {
    running: Rc<Cell<bool>>,
    raf_id: Rc<Cell<Option<i32>>>,
    tick: TickSlot,
}

impl RenderLoop {
    pub fn start(frame_ctx: Rc<RefCell<FrameContext>>) -> Self {
        let running = Rc::new(Cell::new(true));
        let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let tick: TickSlot = Rc::new(RefCell::new(None));

        let tick_clone = tick.clone();
        let running_tick = running.clone();
        let raf_tick = raf_id.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            raf_tick.set(None);
            if !running_tick.get() {
                return;
            }
            frame_ctx.borrow_mut().frame();
            if let Some(cb) = tick_clone.borrow().as_ref() {
                raf_tick.set(request_frame(cb));
            }
        }) as Box<dyn FnMut()>));

        if let Some(cb) = tick.borrow().as_ref() {
            raf_id.set(request_frame(cb));
        }
        Self {
            running,
            raf_id,
            tick,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Cancel the pending frame and release the loop closure.
    pub fn stop(&self) {
        if !self.running.replace(false) {
            return;
        }
        if let (Some(id), Some(w)) = (self.raf_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // Breaks the closure's reference cycle; never called from inside a tick
        self.tick.borrow_mut().take();
        log::info!("[background] render loop stopped");
    }
}

fn request_frame(cb: &Closure<dyn FnMut()>) -> Option<i32> {
    web::window().and_then(|w| w.request_animation_frame(cb.as_ref().unchecked_ref()).ok())
}
