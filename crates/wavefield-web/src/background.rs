use crate::dom;
use crate::frame::FrameContext;
use crate::render::GpuState;
use glam::Vec2;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wavefield_core::{capped_pixel_ratio, PointerTracker, WaveFieldConfig};
use web_sys as web;

/// A mounted wave field. The closures backing its event listeners are owned
/// here, so the handle must be kept alive for as long as the field runs;
/// [`WaveField::dispose`] tears everything down in order.
pub struct WaveField {
    canvas: web::HtmlCanvasElement,
    ctx: Rc<RefCell<FrameContext>>,
    config: RefCell<WaveFieldConfig>,
    raf_id: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    observer: web::ResizeObserver,
    _observer_cb: Closure<dyn FnMut()>,
    pointer_move: Closure<dyn FnMut(web::PointerEvent)>,
    pointer_leave: Closure<dyn FnMut(web::PointerEvent)>,
}

impl WaveField {
    /// Create a canvas inside `container`, bring up WebGPU on it, wire the
    /// pointer and resize handling, and start the animation loop.
    pub async fn mount(
        container: &web::Element,
        config: WaveFieldConfig,
    ) -> anyhow::Result<WaveField> {
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
        let canvas: web::HtmlCanvasElement = document
            .create_element("canvas")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .dyn_into()
            .map_err(|_| anyhow::anyhow!("created element is not a canvas"))?;

        let field = config.resolve();
        let style = canvas.style();
        let _ = style.set_property("width", "100%");
        let _ = style.set_property("height", "100%");
        let _ = style.set_property("display", "block");
        let _ = style.set_property("mix-blend-mode", field.blend_mode.css_value());
        container
            .append_child(&canvas)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        dom::sync_canvas_backing_size(&canvas);

        let gpu = GpuState::new(&canvas).await?;
        let ctx = Rc::new(RefCell::new(FrameContext {
            canvas: canvas.clone(),
            gpu,
            field,
            tracker: PointerTracker::new(),
            last_instant: Instant::now(),
        }));

        // The canvas tracks its container; the next frame picks the new
        // backing size up and reconfigures the surface.
        let observer_cb = {
            let canvas = canvas.clone();
            Closure::wrap(Box::new(move || {
                dom::sync_canvas_backing_size(&canvas);
            }) as Box<dyn FnMut()>)
        };
        let observer = web::ResizeObserver::new(observer_cb.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        observer.observe(container);

        let pointer_move = {
            let ctx = ctx.clone();
            let canvas = canvas.clone();
            Closure::wrap(Box::new(move |ev: web::PointerEvent| {
                let mut guard = ctx.borrow_mut();
                let ctx = &mut *guard;
                if !ctx.field.interactive {
                    return;
                }
                let rect = canvas.get_bounding_client_rect();
                let css = Vec2::new(
                    (ev.client_x() as f64 - rect.left()) as f32,
                    (ev.client_y() as f64 - rect.top()) as f32,
                );
                let surface = Vec2::new(rect.width() as f32, rect.height() as f32);
                let ratio = web::window()
                    .map(|w| capped_pixel_ratio(w.device_pixel_ratio()))
                    .unwrap_or(1.0) as f32;
                ctx.tracker.pointer_moved(&ctx.field, css, surface, ratio);
            }) as Box<dyn FnMut(web::PointerEvent)>)
        };
        canvas
            .add_event_listener_with_callback("pointermove", pointer_move.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;

        let pointer_leave = {
            let ctx = ctx.clone();
            Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
                ctx.borrow_mut().tracker.pointer_leave();
            }) as Box<dyn FnMut(web::PointerEvent)>)
        };
        canvas
            .add_event_listener_with_callback(
                "pointerleave",
                pointer_leave.as_ref().unchecked_ref(),
            )
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;

        // Self-rescheduling animation frame. The closure holds its own slot
        // so dispose can both cancel the pending frame and drop the closure.
        let raf_id = Rc::new(Cell::new(None::<i32>));
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        {
            let ctx = ctx.clone();
            let tick_handle = tick.clone();
            let raf = raf_id.clone();
            *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                ctx.borrow_mut().frame();
                if let Some(window) = web::window() {
                    if let Some(cb) = tick_handle.borrow().as_ref() {
                        if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref())
                        {
                            raf.set(Some(id));
                        }
                    }
                }
            }) as Box<dyn FnMut()>));
        }
        if let Some(window) = web::window() {
            if let Some(cb) = tick.borrow().as_ref() {
                if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    raf_id.set(Some(id));
                }
            }
        }

        Ok(WaveField {
            canvas,
            ctx,
            config: RefCell::new(config),
            raf_id,
            tick,
            observer,
            _observer_cb: observer_cb,
            pointer_move,
            pointer_leave,
        })
    }

    /// Apply a new configuration, diffing by value: an identical config is a
    /// no-op, and a changed one re-resolves without touching the GPU
    /// context, so toggling interactivity or colors never re-mounts.
    pub fn set_config(&self, config: WaveFieldConfig) {
        if *self.config.borrow() == config {
            return;
        }
        let field = config.resolve();
        let _ = self
            .canvas
            .style()
            .set_property("mix-blend-mode", field.blend_mode.css_value());
        self.ctx.borrow_mut().field = field;
        *self.config.borrow_mut() = config;
    }

    /// Tear the field down. The pending animation frame is cancelled first,
    /// so no tick can run against a half-released context; then observers
    /// and listeners come off, the GPU surface is dropped, and the canvas
    /// leaves the DOM.
    pub fn dispose(self) {
        if let Some(id) = self.raf_id.take() {
            if let Some(window) = web::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        self.tick.borrow_mut().take();

        self.observer.disconnect();
        let _ = self.canvas.remove_event_listener_with_callback(
            "pointermove",
            self.pointer_move.as_ref().unchecked_ref(),
        );
        let _ = self.canvas.remove_event_listener_with_callback(
            "pointerleave",
            self.pointer_leave.as_ref().unchecked_ref(),
        );
        drop(self.pointer_move);
        drop(self.pointer_leave);

        // last frame-context reference: releases the wgpu surface before the
        // canvas leaves the DOM
        drop(self.ctx);
        self.canvas.remove();
    }
}
