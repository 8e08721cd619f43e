use crate::core::particles::{scatter_positions, Camera, FieldRotation, PointerOffset};
use crate::core::*;
use crate::dom;
use crate::events;
use crate::frame::{self, FrameContext, RenderLoop};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

thread_local! {
    static RENDER_LOOP: RefCell<Option<RenderLoop>> = const { RefCell::new(None) };
}

/// Stop the background loop if one is running; returns true if it was.
pub fn stop() -> bool {
    RENDER_LOOP.with(|slot| match slot.borrow_mut().take() {
        Some(l) => {
            let was_running = l.is_running();
            l.stop();
            was_running
        }
        None => false,
    })
}

/// Particle field behind the page, drawn into a canvas appended to the container.
pub fn init(document: &web::Document) -> Result<(), SetupError> {
    let container = dom::require(document, SEL_CANVAS_CONTAINER)?;
    let canvas = document
        .create_element("canvas")?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| SetupError::Js("created element is not a canvas".into()))?;
    container.append_child(&canvas)?;
    let (css_w, css_h) = dom::sync_canvas_to_window(&canvas);
    let aspect = if css_h > 0.0 { (css_w / css_h) as f32 } else { 1.0 };

    let pointer = Rc::new(Cell::new(PointerOffset::default()));
    events::wire_pointer_offset(document, pointer.clone());

    spawn_local(async move {
        let positions = scatter_positions(&mut rand::thread_rng(), PARTICLE_COUNT);
        let gpu = frame::init_gpu(&canvas, &positions).await;
        if gpu.is_none() {
            log::warn!("[background] no GPU surface, particle field disabled");
            return;
        }

        let frame_ctx = Rc::new(RefCell::new(FrameContext {
            canvas,
            camera: Camera::background(aspect),
            rotation: FieldRotation::default(),
            pointer,
            gpu,
        }));

        let ctx_resize = frame_ctx.clone();
        if let Some(window) = web::window() {
            dom::add_listener(&window, "resize", move |_: web::Event| {
                ctx_resize.borrow_mut().resize();
            });
        }

        let handle = RenderLoop::start(frame_ctx);
        RENDER_LOOP.with(|slot| {
            if let Some(prev) = slot.borrow_mut().replace(handle) {
                prev.stop();
            }
        });
        log::info!("[background] render loop started");
    });
    Ok(())
}
