use anyhow::{anyhow, bail, Result};
use leptos::{html::Canvas, HtmlElement};
use wasm_bindgen::JsCast;
use web_sys::CanvasRenderingContext2d;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Center,
    Right,
}

impl TextAlign {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub stops: Vec<(f32, &'static str)>,
}

/// The subset of a 2D canvas context the chart draws with.
pub trait DrawingSurface {
    fn save(&mut self);
    fn restore(&mut self);
    fn scale(&mut self, factor: f64) -> Result<()>;

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    fn set_fill_color(&mut self, color: &str);
    fn set_fill_gradient(&mut self, gradient: &LinearGradient) -> Result<()>;
    fn set_stroke_color(&mut self, color: &str);
    fn set_line_width(&mut self, width: f64);
    fn set_font(&mut self, font: &str);
    fn set_text_align(&mut self, align: TextAlign);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn close_path(&mut self);
    fn stroke(&mut self);
    fn fill(&mut self);
    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) -> Result<()>;
    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<()>;
}

pub struct WebSurface {
    ctx: CanvasRenderingContext2d,
}

impl WebSurface {
    pub fn try_new(node: &HtmlElement<Canvas>) -> Result<Self> {
        #[derive(serde::Serialize)]
        struct ContextOptions {
            alpha: bool,
        }

        let ctx = node
            .get_context_with_context_options(
                "2d",
                &serde_wasm_bindgen::to_value(&ContextOptions { alpha: false })
                    .map_err(|err| anyhow!("context options serialization error: {err}"))?,
            )
            .map_err(|err| anyhow!("{err:?}"))?;
        let Some(ctx) = ctx else {
            bail!("canvas' 2d context not found");
        };

        let ctx = ctx
            .dyn_into()
            .map_err(|err| anyhow!("context dyn conversion error: {err:?}"))?;

        Ok(Self { ctx })
    }
}

impl DrawingSurface for WebSurface {
    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn scale(&mut self, factor: f64) -> Result<()> {
        self.ctx
            .scale(factor, factor)
            .map_err(|err| anyhow!("context scaling failed: {err:?}"))
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.clear_rect(x, y, width, height);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.fill_rect(x, y, width, height);
    }

    fn set_fill_color(&mut self, color: &str) {
        self.ctx.set_fill_style_str(color);
    }

    fn set_fill_gradient(&mut self, gradient: &LinearGradient) -> Result<()> {
        let canvas_gradient =
            self.ctx
                .create_linear_gradient(gradient.x0, gradient.y0, gradient.x1, gradient.y1);

        for (offset, color) in &gradient.stops {
            canvas_gradient
                .add_color_stop(*offset, color)
                .map_err(|err| anyhow!("gradient color stop error: {err:?}"))?;
        }

        self.ctx.set_fill_style_canvas_gradient(&canvas_gradient);
        Ok(())
    }

    fn set_stroke_color(&mut self, color: &str) {
        self.ctx.set_stroke_style_str(color);
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn set_font(&mut self, font: &str) {
        self.ctx.set_font(font);
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.ctx.set_text_align(align.as_str());
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) -> Result<()> {
        self.ctx
            .arc(x, y, radius, start, end)
            .map_err(|err| anyhow!("arc drawing error: {err:?}"))
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<()> {
        self.ctx
            .fill_text(text, x, y)
            .map_err(|err| anyhow!("fill text error: {err:?}"))
    }
}
