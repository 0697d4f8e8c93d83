use activity_heatmap::ChartError;
use activity_heatmap::api::{AxisStyle, CellStyle, ChartConfig, TitleStyle, render_activity_chart};
use activity_heatmap::core::{MONTH_LABELS, SwatchPalette};
use activity_heatmap::render::{Color, RecordingRenderer, RenderCommand};
use approx::assert_relative_eq;

fn four_swatches() -> SwatchPalette {
    SwatchPalette::new(vec![
        Color::from_hex("#ebedf0").expect("hex"),
        Color::from_hex("#c6e48b").expect("hex"),
        Color::from_hex("#7bc96f").expect("hex"),
        Color::from_hex("#196127").expect("hex"),
    ])
    .expect("palette")
}

/// Boxes drawn after the background box, i.e. the grid cells.
fn cell_boxes(renderer: &RecordingRenderer) -> Vec<activity_heatmap::render::RectPrimitive> {
    renderer.boxes().skip(1).copied().collect()
}

#[test]
fn three_day_scenario_fills_first_column_with_bucketed_colors() {
    let palette = four_swatches();
    let config = ChartConfig::new("Activity")
        .with_dots(16, 2)
        .with_palette(palette.clone());
    let mut renderer = RecordingRenderer::new();

    let image = render_activity_chart(&mut renderer, &config, &[3, 0, 5]).expect("render");
    assert_eq!(image, b"recorded".to_vec());

    let cells = cell_boxes(&renderer);
    assert_eq!(cells.len(), 3);
    for (row, cell) in cells.iter().enumerate() {
        assert_relative_eq!(cell.x, cells[0].x);
        assert_relative_eq!(cell.y, cells[0].y + row as f64 * 18.0);
        assert_relative_eq!(cell.width, 16.0);
        assert_relative_eq!(cell.height, 16.0);
        assert_eq!(cell.stroke_color, cell.fill_color);
    }

    let swatches = palette.swatches();
    assert_eq!(cells[0].fill_color, swatches[2]);
    assert_eq!(cells[1].fill_color, swatches[0]);
    assert_eq!(cells[2].fill_color, swatches[3]);
}

#[test]
fn single_week_grid_is_centered_on_canvas() {
    let config = ChartConfig::new("").with_dots(16, 2);
    let mut renderer = RecordingRenderer::new();
    render_activity_chart(&mut renderer, &config, &[1]).expect("render");

    let cell = cell_boxes(&renderer)[0];
    assert_relative_eq!(cell.x, ((1024.0 - 16.0) / 2.0_f64).floor());
    // An empty title still measures one line (12 px at 1024x400):
    // (400 - (10 + 12) - 124) / 2.
    assert_relative_eq!(cell.y, 127.0);
}

#[test]
fn draw_calls_follow_fixed_phase_order() {
    let config = ChartConfig::new("Activity").without_axes();
    let mut renderer = RecordingRenderer::new();
    render_activity_chart(&mut renderer, &config, &[1, 2]).expect("render");

    let commands = renderer.commands();
    assert!(matches!(commands.first(), Some(RenderCommand::SetDpi(dpi)) if *dpi == 92.0));
    assert_eq!(commands.last(), Some(&RenderCommand::Finalize));

    let measure = position(commands, |c| {
        matches!(c, RenderCommand::MeasureText(t) if t == "Activity")
    });
    let background = position(commands, |c| matches!(c, RenderCommand::DrawBox(_)));
    let title = position(commands, |c| {
        matches!(c, RenderCommand::DrawText { text, .. } if text == "Activity")
    });
    let last_box = commands
        .iter()
        .rposition(|c| matches!(c, RenderCommand::DrawBox(_)))
        .expect("cells drawn");

    assert!(measure < background);
    assert!(background < title);
    assert!(title < last_box);
    assert_eq!(renderer.boxes().count(), 3);
}

fn position(commands: &[RenderCommand], predicate: impl Fn(&RenderCommand) -> bool) -> usize {
    commands.iter().position(predicate).expect("command present")
}

#[test]
fn out_of_range_weekday_is_rejected_before_any_draw_call() {
    for current_day in [7u8, 8, 42, u8::MAX] {
        let config = ChartConfig::new("Activity").with_current_day(current_day);
        let mut renderer = RecordingRenderer::new();

        let err = render_activity_chart(&mut renderer, &config, &[1, 2, 3]).expect_err("invalid");
        assert!(matches!(err, ChartError::InvalidInput(_)));
        assert_eq!(renderer.invocation_count(), 0);
    }
}

#[test]
fn empty_series_is_rejected_before_any_draw_call() {
    let mut renderer = RecordingRenderer::new();
    let err =
        render_activity_chart(&mut renderer, &ChartConfig::default(), &[]).expect_err("invalid");
    assert!(matches!(err, ChartError::InvalidInput(_)));
    assert_eq!(renderer.invocation_count(), 0);
}

#[test]
fn finalize_failure_surfaces_as_encode_error_after_drawing() {
    let mut renderer = RecordingRenderer::failing_finalize();
    let err = render_activity_chart(&mut renderer, &ChartConfig::new("x"), &[1, 0, 2])
        .expect_err("encode failure");
    assert!(matches!(err, ChartError::Encode(_)));
    assert_eq!(renderer.boxes().count(), 4);
}

#[test]
fn all_zero_series_paints_every_cell_with_empty_swatch() {
    let config = ChartConfig::new("Quiet month");
    let mut renderer = RecordingRenderer::new();
    render_activity_chart(&mut renderer, &config, &[0; 30]).expect("all-zero renders");

    let empty = config.palette.swatches()[0];
    let cells = cell_boxes(&renderer);
    assert_eq!(cells.len(), 30);
    assert!(cells.iter().all(|cell| cell.fill_color == empty));
}

#[test]
fn right_to_left_puts_newest_week_on_the_left() {
    let series: Vec<u32> = (1..=14).collect();
    let mut forward = RecordingRenderer::new();
    let mut reverse = RecordingRenderer::new();
    render_activity_chart(&mut forward, &ChartConfig::new("t"), &series).expect("render");
    render_activity_chart(
        &mut reverse,
        &ChartConfig::new("t").with_left_to_right(false),
        &series,
    )
    .expect("render");

    let forward = cell_boxes(&forward);
    let reverse = cell_boxes(&reverse);
    assert_relative_eq!(forward[0].x, reverse[7].x);
    assert_relative_eq!(forward[7].x, reverse[0].x);
    for (a, b) in forward.iter().zip(&reverse) {
        assert_relative_eq!(a.y, b.y);
    }
}

#[test]
fn month_labels_span_all_twelve_months_regardless_of_series_length() {
    // Known limitation: month labels are decorative and always list the whole
    // year, even for a series covering a couple of weeks.
    let config = ChartConfig::new("t");
    let mut renderer = RecordingRenderer::new();
    render_activity_chart(&mut renderer, &config, &[1; 14]).expect("render");

    let months: Vec<&str> = renderer
        .texts()
        .map(|(text, _, _)| text)
        .filter(|text| MONTH_LABELS.contains(text))
        .collect();
    assert_eq!(months, MONTH_LABELS.to_vec());
}

#[test]
fn month_labels_run_from_left_to_right_chart_edge() {
    let config = ChartConfig::new("");
    let mut renderer = RecordingRenderer::new();
    // 53 weeks: 53 * 16 + 52 * 2 = 952 px wide grid.
    render_activity_chart(&mut renderer, &config, &[1; 371]).expect("render");

    let chart_x = cell_boxes(&renderer)[0].x;
    let month_xs: Vec<f64> = renderer
        .texts()
        .filter(|(text, _, _)| MONTH_LABELS.contains(text))
        .map(|(_, x, _)| x)
        .collect();
    assert_relative_eq!(month_xs[0], chart_x);

    let dec_width = RecordingRenderer::text_metrics("Dec", 10.0).width;
    assert_relative_eq!(month_xs[11] + dec_width, chart_x + 952.0, epsilon = 1e-6);
}

#[test]
fn weekday_labels_skip_empty_rows_and_align_left_of_grid() {
    let config = ChartConfig::new("t").with_x_axis(AxisStyle::hidden());
    let mut renderer = RecordingRenderer::new();
    render_activity_chart(&mut renderer, &config, &[1; 7]).expect("render");

    let cells = cell_boxes(&renderer);
    let labels: Vec<(&str, f64, f64)> = renderer
        .texts()
        .filter(|(text, _, _)| *text != "t")
        .collect();
    let names: Vec<&str> = labels.iter().map(|(text, _, _)| *text).collect();
    assert_eq!(names, vec!["Mon", "Wed", "Fri"]);

    let widest = RecordingRenderer::text_metrics("Mon", 10.0).width;
    for (text, x, y) in &labels {
        assert_relative_eq!(*x, cells[0].x - widest - 5.0);
        let row = match *text {
            "Mon" => 1.0,
            "Wed" => 3.0,
            _ => 5.0,
        };
        assert_relative_eq!(*y, cells[0].y + row * 18.0 + 10.0);
    }
}

#[test]
fn hidden_title_and_axes_draw_no_text() {
    let config = ChartConfig::new("Activity")
        .with_title_style(TitleStyle {
            show: false,
            ..TitleStyle::default()
        })
        .without_axes();
    let mut renderer = RecordingRenderer::new();
    render_activity_chart(&mut renderer, &config, &[1, 2, 3]).expect("render");
    assert_eq!(renderer.texts().count(), 0);
}

#[test]
fn title_font_size_override_replaces_step_function() {
    let config = ChartConfig::new("Activity").with_title_style(TitleStyle {
        font_size: Some(30.0),
        ..TitleStyle::default()
    });
    let mut renderer = RecordingRenderer::new();
    render_activity_chart(&mut renderer, &config, &[1]).expect("render");

    let title_size = renderer.commands().iter().find_map(|command| match command {
        RenderCommand::DrawText { text, font_size, .. } if text == "Activity" => Some(*font_size),
        _ => None,
    });
    assert_eq!(title_size, Some(30.0));
}

#[test]
fn cell_stroke_override_replaces_fill_outline() {
    let outline = Color::rgb(0.0, 0.0, 0.0);
    let config = ChartConfig::new("t").with_cell_style(CellStyle {
        stroke_color: Some(outline),
        stroke_width: 2.0,
    });
    let mut renderer = RecordingRenderer::new();
    render_activity_chart(&mut renderer, &config, &[0, 4]).expect("render");

    for cell in cell_boxes(&renderer) {
        assert_eq!(cell.stroke_color, outline);
        assert_relative_eq!(cell.stroke_width, 2.0);
    }
}

#[test]
fn background_covers_whole_canvas() {
    let mut renderer = RecordingRenderer::new();
    render_activity_chart(&mut renderer, &ChartConfig::new("t"), &[1]).expect("render");

    let background = renderer.boxes().next().copied().expect("background");
    assert_relative_eq!(background.x, 0.0);
    assert_relative_eq!(background.y, 0.0);
    assert_relative_eq!(background.right(), 1024.0);
    assert_relative_eq!(background.bottom(), 400.0);
}
