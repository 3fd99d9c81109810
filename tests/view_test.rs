//! Tests for the view pipeline through the library API.

mod common;

use bmpterm::models::{ColorModeSetting, TerminalSize, ViewerConfig};
use bmpterm::services::{HeaderReport, ViewService};
use common::fixtures::{colors, Workspace};
use pretty_assertions::assert_eq;
use term_raster::{ColorMode, DecodeError, RasterError};

fn render(service: &ViewService, path: &std::path::Path) -> String {
    let mut out = Vec::new();
    service.view(path, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_split_image_keeps_halves() {
    let ws = Workspace::new();
    let path = ws.split_bitmap("split.bmp", 800, 400, colors::RED, colors::BLUE);

    let service = ViewService::new(TerminalSize::DEFAULT, ColorMode::Indexed);
    let text = render(&service, &path);

    // 8x16 blocks: 100 columns, 25 rows, split after column 50
    common::assert_cell_grid(&text, 100, 25);
    let expected = format!(
        "{}{}\x1b[0m",
        "\x1b[48;5;9m ".repeat(50),
        "\x1b[48;5;12m ".repeat(50)
    );
    for line in text.lines() {
        assert_eq!(line, expected);
    }
}

#[test]
fn test_mid_gray_is_system_gray() {
    let ws = Workspace::new();
    let path = ws.solid_bitmap("gray.bmp", 10, 10, colors::MID_GRAY);

    let service = ViewService::new(
        TerminalSize {
            columns: 5,
            rows: 5,
        },
        ColorMode::Indexed,
    );
    common::assert_uniform_cells(&render(&service, &path), "\x1b[48;5;8m ");
}

#[test]
fn test_zero_height_renders_nothing() {
    let ws = Workspace::new();
    let path = ws.solid_bitmap("flat.bmp", 10, 0, colors::RED);

    let service = ViewService::new(TerminalSize::DEFAULT, ColorMode::Indexed);
    assert_eq!(render(&service, &path), "");
}

#[test]
fn test_settings_layering() {
    let ws = Workspace::new();
    let path = ws.solid_bitmap("gray.bmp", 8, 8, colors::MID_GRAY);
    let config_path = ws.write("bmpterm.yaml", b"mode: threshold\nthreshold: [200, 0, 0]\nrows: 2\n");

    let file_config = ViewerConfig::load(&config_path).unwrap();
    let cli = ViewerConfig {
        columns: Some(4),
        ..Default::default()
    };
    let config = cli.or(file_config);
    assert_eq!(config.mode, Some(ColorModeSetting::Threshold));

    let service = ViewService::from_config(&config, TerminalSize::DEFAULT);
    assert_eq!(service.rasterizer().target(), (4, 2));

    // red below 200, green and blue at or above 0: cyan
    let text = render(&service, &path);
    common::assert_cell_grid(&text, 4, 2);
    common::assert_uniform_cells(&text, "\x1b[46m ");
}

#[test]
fn test_unsupported_file_produces_no_output() {
    let ws = Workspace::new();
    let path = ws.patched_bitmap(
        "eight.bmp",
        common::fixtures::BITS_PER_PIXEL_OFFSET,
        &8u16.to_le_bytes(),
    );

    let service = ViewService::new(TerminalSize::DEFAULT, ColorMode::Indexed);
    let mut out = Vec::new();
    let err = service.view(&path, &mut out).unwrap_err();

    assert!(matches!(
        err,
        RasterError::Decode(DecodeError::UnsupportedBitDepth { bits: 8 })
    ));
    assert!(out.is_empty());
}

#[test]
fn test_header_report_matches_decoder() {
    let ws = Workspace::new();
    let path = ws.solid_bitmap("red.bmp", 7, 3, colors::RED);

    let report = HeaderReport::read(&path).unwrap();
    assert!(report.is_accepted());
    assert_eq!(report.header.width, 7);
    assert_eq!(report.header.height, 3);
    assert_eq!(report.header.bits_per_pixel, 24);
    assert_eq!(report.header.pixel_data_offset, 54);
    // 3 rows of 21 data bytes + 3 padding bytes
    assert_eq!(report.header.file_size, 54 + 3 * 24);
}
