use crate::error::{ChartError, ChartResult};
use crate::render::{Color, FontFace, RectPrimitive, Renderer, TextExtent, TextHAlign};

/// Average glyph advance as a fraction of the font size.
const GLYPH_ADVANCE_RATIO: f64 = 0.6;

/// One renderer port invocation, in call order.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    SetDpi(f64),
    SetFont(FontFace),
    SetFontSize(f64),
    SetFontColor(Color),
    MeasureText(String),
    DrawBox(RectPrimitive),
    DrawText {
        text: String,
        x: f64,
        y: f64,
        font_size: f64,
        color: Color,
        h_align: TextHAlign,
    },
    Finalize,
}

/// Headless renderer used by tests, benchmarks and dry runs.
///
/// Text metrics are deterministic (`width = chars * size * 0.6`,
/// `height = size`), so layout results can be asserted exactly. Finalize
/// returns a short placeholder payload, or an encode error when
/// [`RecordingRenderer::failing_finalize`] was used.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    commands: Vec<RenderCommand>,
    font_size: f64,
    font_color: Option<Color>,
    fail_finalize: bool,
}

impl RecordingRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A recorder whose `finalize` reports an encode failure.
    #[must_use]
    pub fn failing_finalize() -> Self {
        Self {
            fail_finalize: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    #[must_use]
    pub fn invocation_count(&self) -> usize {
        self.commands.len()
    }

    pub fn boxes(&self) -> impl Iterator<Item = &RectPrimitive> {
        self.commands.iter().filter_map(|command| match command {
            RenderCommand::DrawBox(rect) => Some(rect),
            _ => None,
        })
    }

    /// Drawn texts as `(text, x, y)`.
    pub fn texts(&self) -> impl Iterator<Item = (&str, f64, f64)> {
        self.commands.iter().filter_map(|command| match command {
            RenderCommand::DrawText { text, x, y, .. } => Some((text.as_str(), *x, *y)),
            _ => None,
        })
    }

    #[must_use]
    pub fn text_metrics(text: &str, font_size: f64) -> TextExtent {
        let chars = text.chars().count() as f64;
        TextExtent::new(chars * font_size * GLYPH_ADVANCE_RATIO, font_size)
    }
}

impl Renderer for RecordingRenderer {
    fn set_dpi(&mut self, dpi: f64) {
        self.commands.push(RenderCommand::SetDpi(dpi));
    }

    fn set_font(&mut self, font: &FontFace) {
        self.commands.push(RenderCommand::SetFont(font.clone()));
    }

    fn set_font_size(&mut self, size: f64) {
        self.font_size = size;
        self.commands.push(RenderCommand::SetFontSize(size));
    }

    fn set_font_color(&mut self, color: Color) {
        self.font_color = Some(color);
        self.commands.push(RenderCommand::SetFontColor(color));
    }

    fn measure_text(&mut self, text: &str) -> TextExtent {
        self.commands.push(RenderCommand::MeasureText(text.to_owned()));
        Self::text_metrics(text, self.font_size)
    }

    fn draw_filled_stroked_box(&mut self, rect: RectPrimitive) {
        self.commands.push(RenderCommand::DrawBox(rect));
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64, h_align: TextHAlign) {
        self.commands.push(RenderCommand::DrawText {
            text: text.to_owned(),
            x,
            y,
            font_size: self.font_size,
            color: self.font_color.unwrap_or(Color::rgb(0.0, 0.0, 0.0)),
            h_align,
        });
    }

    fn finalize(&mut self) -> ChartResult<Vec<u8>> {
        self.commands.push(RenderCommand::Finalize);
        if self.fail_finalize {
            return Err(ChartError::Encode(
                "recording renderer configured to fail".to_owned(),
            ));
        }
        Ok(b"recorded".to_vec())
    }
}
