//! Canvas particle background for the dashboard hero.
//!
//! Purely decorative: a handful of dots drift across a 2D canvas and wrap at
//! the edges. The `requestAnimationFrame` loop watches an arena-stored flag
//! and stops on its own after the component unmounts.

use leptos::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

struct Particle {
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
    radius: f64,
    alpha: f64,
}

fn random() -> f64 {
    js_sys::Math::random()
}

fn spawn_particles(count: usize, width: f64, height: f64) -> Vec<Particle> {
    (0..count)
        .map(|_| Particle {
            x: random() * width,
            y: random() * height,
            vx: (random() - 0.5) * 0.6,
            vy: (random() - 0.5) * 0.6,
            radius: 1.0 + random() * 2.0,
            alpha: 0.2 + random() * 0.5,
        })
        .collect()
}

fn step_and_draw(ctx: &CanvasRenderingContext2d, particles: &mut [Particle], width: f64, height: f64) {
    ctx.clear_rect(0.0, 0.0, width, height);
    for p in particles.iter_mut() {
        p.x += p.vx;
        p.y += p.vy;
        // Wrap at the edges instead of bouncing.
        if p.x < 0.0 {
            p.x += width;
        } else if p.x > width {
            p.x -= width;
        }
        if p.y < 0.0 {
            p.y += height;
        } else if p.y > height {
            p.y -= height;
        }

        ctx.begin_path();
        ctx.set_fill_style_str(&format!("rgba(255, 255, 255, {:.2})", p.alpha));
        let _ = ctx.arc(p.x, p.y, p.radius, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();
    }
}

fn request_frame(callback: &Closure<dyn FnMut()>) {
    if let Some(window) = web_sys::window() {
        let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
    }
}

/// Decorative particle canvas filling its parent.
#[component]
pub fn ParticleCanvas(
    #[prop(optional, default = 60)] count: usize,
    /// DOM id; unique per mount point.
    #[prop(optional, into)]
    canvas_id: Option<String>,
) -> impl IntoView {
    let canvas_id = canvas_id.unwrap_or_else(|| "particle-canvas".to_string());
    let alive = StoredValue::new(true);
    on_cleanup(move || alive.set_value(false));

    let id_for_effect = canvas_id.clone();
    Effect::new(move |_| {
        let Some(canvas) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(&id_for_effect))
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            return;
        };
        let Some(ctx) = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
        else {
            return;
        };

        // Match the backing store to the rendered size once per mount.
        let width = canvas.client_width().max(1) as f64;
        let height = canvas.client_height().max(1) as f64;
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let particles = Rc::new(RefCell::new(spawn_particles(count, width, height)));

        // Self-referencing rAF loop; drops itself once `alive` goes false.
        let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let frame_for_loop = frame.clone();
        *frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if !alive.try_get_value().unwrap_or(false) {
                let _ = frame_for_loop.borrow_mut().take();
                return;
            }
            step_and_draw(&ctx, &mut particles.borrow_mut(), width, height);
            if let Some(callback) = frame_for_loop.borrow().as_ref() {
                request_frame(callback);
            }
        }) as Box<dyn FnMut()>));

        if let Some(callback) = frame.borrow().as_ref() {
            request_frame(callback);
        };
    });

    view! {
        <canvas id=canvas_id class="particle-canvas"></canvas>
    }
}
