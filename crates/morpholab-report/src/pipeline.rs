//! Report pipeline
//!
//! For each of the three report images: load a photograph or synthesize a
//! stand-in, split it into channels, build histograms, reduce to gray, run
//! the morphology set and export every intermediate as PNG. The images are
//! independent and are processed in parallel.

use crate::config::ReportConfig;
use crate::synth::{generate_document, generate_object, generate_person};
use crate::ReportResult;
use morpholab_core::{
    Channel, GrayWeights, HistogramTable, Rgb, RgbGrid, isolated_views, render_histogram_plot,
    split_channels,
};
use morpholab_io::{ExportContext, read_image};
use morpholab_morph::{ElementShape, MorphOp, MorphSet, StructuringElement, normalize_size};
use rayon::prelude::*;
use std::fmt;
use std::path::{Path, PathBuf};

/// Height of the exported histogram plot
pub const HISTOGRAM_PLOT_HEIGHT: u32 = 256;

/// Extensions tried, in order, when looking for an input photograph
pub const INPUT_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "bmp"];

/// The three subjects of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageKind {
    Person,
    Object,
    Document,
}

impl ImageKind {
    /// Every kind, in report order.
    pub const ALL: [ImageKind; 3] = [ImageKind::Person, ImageKind::Object, ImageKind::Document];

    /// Base name of input and output files.
    pub fn name(self) -> &'static str {
        match self {
            ImageKind::Person => "pessoa",
            ImageKind::Object => "objeto",
            ImageKind::Document => "documento",
        }
    }

    /// Synthesize the stand-in image for this kind.
    pub fn generate(self, width: u32, height: u32, seed: u64) -> ReportResult<RgbGrid> {
        match self {
            ImageKind::Person => generate_person(width, height),
            ImageKind::Object => generate_object(width, height),
            ImageKind::Document => generate_document(width, height, seed),
        }
    }
}

impl fmt::Display for ImageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where a report image came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Decoded from this file name in the input directory
    File(String),
    /// Drawn by the synthetic generator
    Synthetic,
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageSource::File(name) => write!(f, "photo ({name})"),
            ImageSource::Synthetic => f.write_str("synthetic"),
        }
    }
}

/// Technical description of a report image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageMetadata {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub channels: u32,
    pub bit_depth: u32,
    pub palette: &'static str,
    pub gamut: &'static str,
    pub source: ImageSource,
}

impl ImageMetadata {
    /// Describe an RGB grid; all report images are 3 x 8-bit.
    pub fn new(name: &str, rgb: &RgbGrid, source: ImageSource) -> Self {
        ImageMetadata {
            name: name.to_string(),
            width: rgb.width(),
            height: rgb.height(),
            channels: 3,
            bit_depth: 24,
            palette: "RGB 24 bits",
            gamut: "sRGB (approx.)",
            source,
        }
    }
}

/// Load `<input_dir>/<name>.<ext>` for the first existing extension, or
/// synthesize the image.
///
/// An existing file that fails to decode is logged and replaced by the
/// synthetic image; later extensions are not tried.
pub fn load_or_generate(
    kind: ImageKind,
    input_dir: &Path,
    width: u32,
    height: u32,
    seed: u64,
) -> ReportResult<(RgbGrid, ImageSource)> {
    let candidate = INPUT_EXTENSIONS
        .iter()
        .map(|ext| input_dir.join(format!("{}.{}", kind.name(), ext)))
        .find(|path| path.is_file());

    if let Some(path) = candidate {
        match read_image(&path) {
            Ok(rgb) => {
                let file_name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                log::info!("{kind}: using {}", path.display());
                return Ok((rgb, ImageSource::File(file_name)));
            }
            Err(e) => {
                log::warn!(
                    "{kind}: cannot decode {} ({e}), using a synthetic image",
                    path.display()
                );
            }
        }
    }

    log::info!("{kind}: generating {width}x{height} synthetic image");
    Ok((kind.generate(width, height, seed)?, ImageSource::Synthetic))
}

/// Files written for one report image
#[derive(Debug, Clone)]
pub struct ImageArtifacts {
    pub metadata: ImageMetadata,
    pub original: PathBuf,
    pub channels: Vec<(Channel, PathBuf)>,
    pub histogram: PathBuf,
    pub morphology: Vec<(MorphOp, PathBuf)>,
    pub combined: PathBuf,
}

impl ImageArtifacts {
    /// Every written path, original first.
    pub fn paths(&self) -> Vec<&Path> {
        let mut paths = vec![self.original.as_path()];
        paths.extend(self.channels.iter().map(|(_, p)| p.as_path()));
        paths.push(&self.histogram);
        paths.extend(self.morphology.iter().map(|(_, p)| p.as_path()));
        paths.push(&self.combined);
        paths
    }
}

fn plot_color(channel: Channel) -> Rgb {
    match channel {
        Channel::Red => (255, 0, 0),
        Channel::Green => (0, 128, 0),
        Channel::Blue => (0, 0, 255),
    }
}

/// Run the full per-image chain and export every intermediate.
pub fn process_image(
    name: &str,
    rgb: &RgbGrid,
    source: ImageSource,
    sel: &StructuringElement,
    weights: GrayWeights,
    ctx: &ExportContext,
) -> ReportResult<ImageArtifacts> {
    let metadata = ImageMetadata::new(name, rgb, source);
    let original = ctx.save_rgb(name, rgb)?;

    let set = split_channels(rgb, Channel::BGR);
    let mut channels = Vec::with_capacity(3);
    for (channel, view) in isolated_views(&set)? {
        let path = ctx.save_rgb(&format!("{name}_{}", channel.letter()), &view)?;
        channels.push((channel, path));
    }

    let tables: Vec<(Channel, HistogramTable)> = set
        .iter()
        .map(|(ch, grid)| (*ch, HistogramTable::from_grid(grid)))
        .collect();
    let series: Vec<(&HistogramTable, Rgb)> = tables
        .iter()
        .map(|(ch, table)| (table, plot_color(*ch)))
        .collect();
    let plot = render_histogram_plot(&series, HISTOGRAM_PLOT_HEIGHT)?;
    let histogram = ctx.save_rgb(&format!("{name}_histograma"), &plot)?;

    let gray = rgb.to_gray(weights)?;
    let results = MorphSet::compute(&gray, sel)?;
    let mut morphology = Vec::with_capacity(MorphOp::REPORT.len());
    for (op, grid) in results.iter() {
        let path = ctx.save_gray(&format!("{name}_{}", op.stem()), grid)?;
        morphology.push((op, path));
    }

    // B, G, R = erosion, dilation, gradient
    let merged = RgbGrid::from_channels(&results.gradient, &results.dilation, &results.erosion)?;
    let combined = ctx.save_rgb(&format!("{name}_morfologia"), &merged)?;

    let artifacts = ImageArtifacts {
        metadata,
        original,
        channels,
        histogram,
        morphology,
        combined,
    };
    log::debug!("{name}: exported {} artifacts", artifacts.paths().len());
    Ok(artifacts)
}

/// Outcome of a complete run
#[derive(Debug, Clone)]
pub struct ReportSummary {
    pub images: Vec<ImageArtifacts>,
    pub element: ElementShape,
    /// Element size actually used, after normalization
    pub element_size: u32,
    pub output_dir: PathBuf,
}

impl ReportSummary {
    /// Total number of files written.
    pub fn artifact_count(&self) -> usize {
        self.images.iter().map(|a| a.paths().len()).sum()
    }
}

impl fmt::Display for ReportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for image in &self.images {
            let m = &image.metadata;
            writeln!(
                f,
                "{}: {}x{}, {} bits, {}, {} files",
                m.name,
                m.width,
                m.height,
                m.bit_depth,
                m.source,
                image.paths().len()
            )?;
        }
        writeln!(f, "Element: {} of size {}", self.element, self.element_size)?;
        write!(
            f,
            "Artifacts: {} files in {}",
            self.artifact_count(),
            self.output_dir.display()
        )
    }
}

/// Produce the whole report.
///
/// Any failure aborts the run; no partial summary is returned.
pub fn run(config: &ReportConfig) -> ReportResult<ReportSummary> {
    config.validate()?;

    let size = normalize_size(config.kernel_size);
    if size != config.kernel_size {
        log::info!("kernel size {} is even, using {}", config.kernel_size, size);
    }
    let sel = StructuringElement::new(config.element, size)?;
    let ctx = ExportContext::new(&config.output_dir)?;
    log::info!(
        "running report: {} element of size {}, output in {}",
        config.element,
        size,
        ctx.output_dir().display()
    );

    let images = ImageKind::ALL
        .par_iter()
        .map(|&kind| {
            let (rgb, source) = load_or_generate(
                kind,
                &config.input_dir,
                config.width,
                config.height,
                config.seed,
            )?;
            process_image(kind.name(), &rgb, source, &sel, config.gray_weights, &ctx)
        })
        .collect::<ReportResult<Vec<_>>>()?;

    let summary = ReportSummary {
        images,
        element: config.element,
        element_size: size,
        output_dir: ctx.output_dir().to_path_buf(),
    };
    log::info!("report complete: {} files", summary.artifact_count());
    Ok(summary)
}
