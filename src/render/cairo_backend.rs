use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use tracing::{trace, warn};

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, DEFAULT_DPI, FontFace, RectPrimitive, Renderer, TextExtent, TextHAlign};

/// Points per inch; font sizes are given in points and scaled by the DPI.
const POINTS_PER_INCH: f64 = 72.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub boxes_drawn: usize,
    pub texts_drawn: usize,
}

/// Cairo + Pango + PangoCairo raster backend.
///
/// Draws on an offscreen ARGB32 image surface and encodes it as PNG on
/// [`Renderer::finalize`]. The first drawing failure is kept and turned into
/// an encode error at finalize time.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    context: Context,
    font: FontDescription,
    font_size: f64,
    font_color: Color,
    dpi: f64,
    stats: CairoRenderStats,
    deferred_error: Option<String>,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidInput(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        let context = Context::new(&surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;

        let mut font = FontDescription::new();
        font.set_family(&FontFace::default().family);

        Ok(Self {
            surface,
            context,
            font,
            font_size: 10.0,
            font_color: Color::rgb(0.0, 0.0, 0.0),
            dpi: DEFAULT_DPI,
            stats: CairoRenderStats::default(),
            deferred_error: None,
        })
    }

    /// Creates a surface for a canvas size given in unsigned pixels.
    pub fn with_canvas(width: u32, height: u32) -> ChartResult<Self> {
        let width = i32::try_from(width)
            .map_err(|_| ChartError::InvalidInput("canvas width overflows i32".to_owned()))?;
        let height = i32::try_from(height)
            .map_err(|_| ChartError::InvalidInput("canvas height overflows i32".to_owned()))?;
        Self::new(width, height)
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn stats(&self) -> CairoRenderStats {
        self.stats
    }

    fn layout_for(&mut self, text: &str) -> pango::Layout {
        let layout = pangocairo::functions::create_layout(&self.context);
        let pixel_size = self.font_size * self.dpi / POINTS_PER_INCH;
        self.font.set_absolute_size(pixel_size * f64::from(pango::SCALE));
        layout.set_font_description(Some(&self.font));
        layout.set_text(text);
        layout
    }

    fn record_failure(&mut self, prefix: &str, err: cairo::Error) {
        warn!(error = %err, "{prefix}");
        if self.deferred_error.is_none() {
            self.deferred_error = Some(format!("{prefix}: {err}"));
        }
    }
}

impl Renderer for CairoRenderer {
    fn set_dpi(&mut self, dpi: f64) {
        self.dpi = dpi;
    }

    fn set_font(&mut self, font: &FontFace) {
        self.font.set_family(&font.family);
    }

    fn set_font_size(&mut self, size: f64) {
        self.font_size = size;
    }

    fn set_font_color(&mut self, color: Color) {
        self.font_color = color;
    }

    fn measure_text(&mut self, text: &str) -> TextExtent {
        let (width, height) = self.layout_for(text).pixel_size();
        TextExtent::new(f64::from(width), f64::from(height))
    }

    fn draw_filled_stroked_box(&mut self, rect: RectPrimitive) {
        self.context.rectangle(rect.x, rect.y, rect.width, rect.height);
        apply_color(&self.context, rect.fill_color);

        let result = if rect.stroke_width > 0.0 {
            self.context.fill_preserve().and_then(|()| {
                apply_color(&self.context, rect.stroke_color);
                self.context.set_line_width(rect.stroke_width);
                self.context.stroke()
            })
        } else {
            self.context.fill()
        };

        match result {
            Ok(()) => self.stats.boxes_drawn += 1,
            Err(err) => self.record_failure("failed to draw box", err),
        }
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64, h_align: TextHAlign) {
        let layout = self.layout_for(text);
        let (text_width, _) = layout.pixel_size();
        let left = match h_align {
            TextHAlign::Left => x,
            TextHAlign::Center => x - f64::from(text_width) / 2.0,
            TextHAlign::Right => x - f64::from(text_width),
        };
        let baseline = f64::from(layout.baseline()) / f64::from(pango::SCALE);

        apply_color(&self.context, self.font_color);
        self.context.move_to(left, y - baseline);
        pangocairo::functions::show_layout(&self.context, &layout);
        self.stats.texts_drawn += 1;
    }

    fn finalize(&mut self) -> ChartResult<Vec<u8>> {
        if let Some(message) = self.deferred_error.take() {
            return Err(ChartError::Encode(message));
        }

        self.surface.flush();
        let mut png = Vec::new();
        self.surface
            .write_to_png(&mut png)
            .map_err(|err| ChartError::Encode(format!("failed to encode png: {err}")))?;
        trace!(
            bytes = png.len(),
            boxes = self.stats.boxes_drawn,
            texts = self.stats.texts_drawn,
            "encoded png"
        );
        Ok(png)
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Encode(format!("{prefix}: {err}"))
}
