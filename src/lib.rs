#![cfg(target_arch = "wasm32")]
use instant::Instant;
use lamp_core::{DragSession, SwayState};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod dom;
mod events;
mod frame;
mod input;
mod render;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("lamp-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("lamp-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #lamp-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    // ---------------- Interaction state ----------------
    let drag = Rc::new(RefCell::new(DragSession::new()));
    let pointer = Rc::new(RefCell::new(input::PointerState::default()));
    let pose = Rc::new(RefCell::new(lamp_core::fixture_pose(&SwayState::new(), 0.0)));
    let alive = Rc::new(Cell::new(true));

    // Pointer handlers (move/down/up/out/cancel) and the teardown hook
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        drag: drag.clone(),
        pointer: pointer.clone(),
        pose: pose.clone(),
        alive: alive.clone(),
    });

    let gpu = frame::init_gpu(&canvas).await;

    // Render loop driven by requestAnimationFrame
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        canvas,
        drag,
        pointer,
        pose,
        alive,
        gpu,
        sway: SwayState::new(),
        started: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
