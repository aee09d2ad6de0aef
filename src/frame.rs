use crate::input::PointerState;
use crate::render;
use instant::Instant;
use lamp_core::{
    bobble_offset, fixture_pose, light_intensity, Camera, DragSession, FixturePose, PointerSignal,
    SwayState, PIVOT_POSITION,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub canvas: web::HtmlCanvasElement,
    pub drag: Rc<RefCell<DragSession>>,
    pub pointer: Rc<RefCell<PointerState>>,
    pub pose: Rc<RefCell<FixturePose>>,
    pub alive: Rc<Cell<bool>>,
    pub gpu: Option<render::GpuState<'a>>,

    // Owned exclusively here; mutated once per rendered frame
    pub sway: SwayState,
    pub started: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let elapsed = self.started.elapsed().as_secs_f32();
        let width = self.canvas.width().max(1);
        let height = self.canvas.height().max(1);

        // Pointer signal: latest NDC sample plus the world-units viewport at
        // the pivot's depth
        let camera = Camera::scene(width as f32 / height as f32);
        let signal = PointerSignal {
            ndc: self.pointer.borrow().ndc,
            viewport: camera.viewport_world_size(PIVOT_POSITION),
        };
        let dragging = self.drag.borrow().is_dragging();

        // One integrator tick per rendered frame
        self.sway.step(dragging, signal);
        let pose = fixture_pose(&self.sway, bobble_offset(elapsed));
        *self.pose.borrow_mut() = pose;

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(width, height);
            if let Err(e) = g.render(elapsed, &pose, light_intensity(dragging), &camera) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        // A torn-down fixture must not mutate state or reschedule
        if !frame_ctx_tick.borrow().alive.get() {
            return;
        }
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
