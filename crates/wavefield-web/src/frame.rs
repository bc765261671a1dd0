use crate::render::GpuState;
use instant::Instant;
use wavefield_core::{FieldUniforms, PointerTracker, ResolvedConfig};
use web_sys as web;

/// Everything one animation tick needs. Event handlers and the RAF closure
/// share this through an `Rc<RefCell<..>>`.
pub struct FrameContext {
    pub canvas: web::HtmlCanvasElement,
    pub gpu: GpuState,
    pub field: ResolvedConfig,
    pub tracker: PointerTracker,
    pub last_instant: Instant,
}

impl FrameContext {
    /// One tick: advance the damped interaction state by the real frame
    /// interval, match the surface to the canvas backing store, pack the
    /// uniforms and draw.
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        self.tracker.advance(&self.field, dt.as_secs_f32());

        self.gpu.resize_if_needed(self.canvas.width(), self.canvas.height());
        let uniforms = FieldUniforms::pack(&self.field, &self.tracker, self.gpu.size());
        match self.gpu.render(&uniforms) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost) => self.gpu.reconfigure(),
            Err(e) => log::error!("render error: {:?}", e),
        }
    }
}
