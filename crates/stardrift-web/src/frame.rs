use stardrift_core::render::GpuState;
use stardrift_core::{FrameDriver, FrameOutcome};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedDriver = Rc<RefCell<FrameDriver<GpuState<'static>>>>;

thread_local! {
    // True while a requestAnimationFrame callback is pending.
    static LOOP_SCHEDULED: Cell<bool> = const { Cell::new(false) };
}

/// Drive `driver` from requestAnimationFrame until it reports stopped or a
/// frame fails. Does nothing if a loop is already scheduled.
pub fn start_loop(driver: SharedDriver) {
    if LOOP_SCHEDULED.with(|s| s.replace(true)) {
        return;
    }
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let outcome = driver.borrow_mut().frame();
        match outcome {
            Ok(FrameOutcome::Continue) => request_frame(&tick_clone),
            Ok(FrameOutcome::Stopped) => {
                log::info!("[frame] animation stopped");
                finish(&tick_clone);
            }
            Err(e) => {
                log::error!("[frame] {e}");
                finish(&tick_clone);
            }
        }
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(window) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

fn finish(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    LOOP_SCHEDULED.with(|s| s.set(false));
    // Break the closure's reference cycle once no frame is pending.
    _ = tick.borrow_mut().take();
}
