use crate::input::{self, PointerState};
use lamp_core::{fixture_hit, Camera, DragSession, FixturePose};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub drag: Rc<RefCell<DragSession>>,
    pub pointer: Rc<RefCell<PointerState>>,
    pub pose: Rc<RefCell<FixturePose>>,
    pub alive: Rc<Cell<bool>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_pointerdown(&w);
    wire_pointerup(&w);
    wire_pointerleave(&w);
    wire_teardown(&w);
}

fn pointer_ndc(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> glam::Vec2 {
    let rect = canvas.get_bounding_client_rect();
    input::client_to_ndc(
        ev.client_x() as f32,
        ev.client_y() as f32,
        rect.left() as f32,
        rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}

fn hit_fixture(w: &InputWiring, ev: &web::PointerEvent) -> bool {
    let ndc = pointer_ndc(ev, &w.canvas);
    let aspect = w.canvas.width().max(1) as f32 / w.canvas.height().max(1) as f32;
    let camera = Camera::scene(aspect);
    let (ro, rd) = camera.screen_to_world_ray(ndc.x, ndc.y);
    let pose = *w.pose.borrow();
    fixture_hit(ro, rd, &pose)
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        w.pointer.borrow_mut().ndc = pointer_ndc(&ev, &w.canvas);
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !w.alive.get() || !hit_fixture(&w, &ev) {
            return;
        }
        if let Some(id) = w.drag.borrow_mut().begin(ev.pointer_id()) {
            // Route the rest of this pointer's events here even off-canvas
            _ = w.canvas.set_pointer_capture(id);
            // The gesture must not reach camera/scene controls underneath
            ev.stop_propagation();
            ev.prevent_default();
            log::info!("[pointer] begin drag (pointer {id})");
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if let Some(id) = w.drag.borrow_mut().end(ev.pointer_id()) {
            // Release can fail if capture was never acquired; benign
            _ = w.canvas.release_pointer_capture(id);
            ev.stop_propagation();
            ev.prevent_default();
            log::info!("[pointer] end drag (pointer {id})");
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

// Safety net: capture can be lost or never properly acquired, and the
// platform can cancel a pointer mid-session. Both paths end the session and
// release whatever is held; while idle they are strict no-ops.
fn wire_pointerleave(w: &InputWiring) {
    for kind in ["pointerout", "pointercancel"] {
        let w = w.clone();
        let canvas_for_listener = w.canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            if let Some(id) = w.drag.borrow_mut().recover() {
                _ = w.canvas.release_pointer_capture(id);
                ev.stop_propagation();
                log::info!("[pointer] session recovered (pointer {id})");
            }
        }) as Box<dyn FnMut(_)>);
        _ = canvas_for_listener
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

// Teardown: stop the frame loop and release any held capture. The frame
// callback checks `alive` before touching state and does not reschedule.
fn wire_teardown(w: &InputWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move || {
        w.alive.set(false);
        if let Some(id) = w.drag.borrow_mut().recover() {
            _ = w.canvas.release_pointer_capture(id);
        }
        log::info!("[teardown] fixture released");
    }) as Box<dyn FnMut()>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
