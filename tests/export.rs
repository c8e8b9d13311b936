use plottheme::clipboard::{ClipboardImage, ImageClipboard};
use plottheme::export::BMP_FILE_HEADER_LEN;
use plottheme::{save_plot, Chart, ExportRequest, PlotContext, PlotThemeError, Series, StepOutcome};
use std::fs;
use tempfile::TempDir;

/// Records every image handed to it.
#[derive(Default)]
struct RecordingClipboard {
    copies: Vec<ClipboardImage>,
}

impl ImageClipboard for RecordingClipboard {
    fn put_image(&mut self, image: &ClipboardImage) -> plottheme::Result<()> {
        self.copies.push(image.clone());
        Ok(())
    }
}

/// Always refuses.
struct BrokenClipboard;

impl ImageClipboard for BrokenClipboard {
    fn put_image(&mut self, _image: &ClipboardImage) -> plottheme::Result<()> {
        Err(PlotThemeError::InvalidBitmap("clipboard unavailable".to_string()))
    }
}

fn context() -> PlotContext {
    let mut ctx = PlotContext::init();
    ctx.set_figure(
        Chart::new()
            .title("Test")
            .series(Series::new([(0.0, 0.0), (1.0, 2.0), (2.0, 1.0)]).with_label("a"))
            .series(Series::new([(0.0, 1.0), (2.0, 1.0)]).with_label("b")),
    );
    ctx
}

fn request(folder: &str) -> ExportRequest {
    ExportRequest {
        folder: folder.to_string(),
        dpi: 20,
        ..ExportRequest::default()
    }
}

#[test]
fn defaults_match_documented_values() {
    let request = ExportRequest::default();
    assert!(request.copy_to_clipboard);
    assert_eq!(request.name, "img");
    assert_eq!(request.folder, "image_out/");
    assert_eq!(request.file_type, "png");
    assert_eq!(request.dpi, 300);
}

#[test]
fn creates_nested_folders() {
    let tmp = TempDir::new().unwrap();
    let folder = tmp.path().join("some/new/nested/path");
    let mut clipboard = RecordingClipboard::default();

    let report = save_plot(&context(), &request(folder.to_str().unwrap()), &mut clipboard);

    let expected = folder.join("img.png");
    assert_eq!(report.file, StepOutcome::Saved(expected.clone()));
    let bytes = fs::read(&expected).unwrap();
    assert_eq!(&bytes[..4], b"\x89PNG");
    assert_eq!(report.clipboard, StepOutcome::Copied);
    assert_eq!(clipboard.copies.len(), 1);
}

#[test]
fn saved_png_is_cropped_within_figure_size() {
    let tmp = TempDir::new().unwrap();
    let mut clipboard = RecordingClipboard::default();
    let report = save_plot(&context(), &request(tmp.path().to_str().unwrap()), &mut clipboard);

    let StepOutcome::Saved(path) = report.file else {
        panic!("file step did not save: {:?}", report.file);
    };
    let image = image::open(path).unwrap();
    // 6x4 inches at 20 dpi
    assert!(image.width() <= 120 && image.height() <= 80);
    assert!(image.width() > 0 && image.height() > 0);
}

#[test]
fn empty_folder_skips_file_step() {
    let mut clipboard = RecordingClipboard::default();
    let report = save_plot(&context(), &request(""), &mut clipboard);

    assert_eq!(report.file, StepOutcome::Skipped);
    assert_eq!(report.clipboard, StepOutcome::Copied);
    assert!(report.is_ok());
}

#[test]
fn svg_export_skips_clipboard() {
    let tmp = TempDir::new().unwrap();
    let mut clipboard = RecordingClipboard::default();
    let request = ExportRequest {
        file_type: "svg".to_string(),
        ..request(tmp.path().to_str().unwrap())
    };

    let report = save_plot(&context(), &request, &mut clipboard);

    let path = tmp.path().join("img.svg");
    assert_eq!(report.file, StepOutcome::Saved(path.clone()));
    assert!(fs::read_to_string(path).unwrap().contains("<svg"));
    assert_eq!(report.clipboard, StepOutcome::Skipped);
    assert!(clipboard.copies.is_empty());
}

#[test]
fn unwritable_folder_still_copies() {
    let tmp = TempDir::new().unwrap();
    let blocker = tmp.path().join("not_a_dir");
    fs::write(&blocker, b"file").unwrap();
    let folder = blocker.join("out");
    let mut clipboard = RecordingClipboard::default();

    let report = save_plot(&context(), &request(folder.to_str().unwrap()), &mut clipboard);

    assert!(report.file.is_failed());
    assert_eq!(report.clipboard, StepOutcome::Copied);
    assert_eq!(clipboard.copies.len(), 1);
}

#[test]
fn clipboard_failure_does_not_affect_file() {
    let tmp = TempDir::new().unwrap();
    let report = save_plot(&context(), &request(tmp.path().to_str().unwrap()), &mut BrokenClipboard);

    assert!(matches!(report.file, StepOutcome::Saved(_)));
    assert!(report.clipboard.is_failed());
    assert!(!report.is_ok());
}

#[test]
fn unsupported_format_fails_file_step_only() {
    let tmp = TempDir::new().unwrap();
    let mut clipboard = RecordingClipboard::default();
    let request = ExportRequest {
        file_type: "pdf".to_string(),
        ..request(tmp.path().to_str().unwrap())
    };

    let report = save_plot(&context(), &request, &mut clipboard);

    match report.file {
        StepOutcome::Failed(message) => assert!(message.contains("pdf")),
        other => panic!("expected failure, got {other:?}"),
    }
    assert_eq!(report.clipboard, StepOutcome::Skipped);
    assert!(!tmp.path().join("img.pdf").exists());
}

#[test]
fn missing_figure_is_reported() {
    let tmp = TempDir::new().unwrap();
    let mut clipboard = RecordingClipboard::default();
    let report = save_plot(&PlotContext::init(), &request(tmp.path().to_str().unwrap()), &mut clipboard);

    assert!(report.file.is_failed());
    assert!(report.clipboard.is_failed());
    assert!(clipboard.copies.is_empty());
}

#[test]
fn clipboard_payload_is_headerless_bitmap() {
    let mut clipboard = RecordingClipboard::default();
    save_plot(&context(), &request(""), &mut clipboard);

    let copy = &clipboard.copies[0];
    let (width, height) = copy.image.dimensions();
    let header_size = u32::from_le_bytes(copy.dib[0..4].try_into().unwrap());
    let dib_width = i32::from_le_bytes(copy.dib[4..8].try_into().unwrap());
    assert_eq!(header_size, 40);
    assert_eq!(dib_width as u32, width);

    // rows of 24-bit pixels are padded to four bytes
    let row = (width as usize * 3 + 3) / 4 * 4;
    assert_eq!(copy.dib.len(), 40 + row * height as usize);
    assert!(copy.dib.len() > BMP_FILE_HEADER_LEN);
}

#[test]
fn zero_dpi_fails_both_steps() {
    let tmp = TempDir::new().unwrap();
    let mut clipboard = RecordingClipboard::default();
    let request = ExportRequest {
        dpi: 0,
        ..request(tmp.path().to_str().unwrap())
    };

    let report = save_plot(&context(), &request, &mut clipboard);
    assert!(report.file.is_failed());
    assert!(report.clipboard.is_failed());
}

#[test]
fn huge_dpi_fails_both_steps() {
    let tmp = TempDir::new().unwrap();
    let mut clipboard = RecordingClipboard::default();
    let request = ExportRequest {
        dpi: u32::MAX,
        ..request(tmp.path().to_str().unwrap())
    };

    let report = save_plot(&context(), &request, &mut clipboard);
    assert!(report.file.is_failed());
    assert!(report.clipboard.is_failed());
    assert!(clipboard.copies.is_empty());
    assert!(!tmp.path().join("img.png").exists());
}
