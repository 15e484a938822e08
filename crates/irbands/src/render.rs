//! Drawing a [ResultTable] as a bar chart. Everything with side effects lives
//! here so that the band computation itself stays pure.

use std::{io::Write, path::PathBuf};

use plotters::{coord::Shift, prelude::*};

use crate::{
    Band, BandKind, Error, Result, ResultTable,
    consts::{BAR_WIDTH_DIVISOR, UNITS},
};

/// something that can display a [ResultTable]
pub trait Render {
    fn render(&mut self, table: &ResultTable) -> Result<()>;
}

/// renders nothing, for when only the table is wanted
#[derive(Clone, Copy, Debug, Default)]
pub struct NoRender;

impl Render for NoRender {
    fn render(&mut self, _: &ResultTable) -> Result<()> {
        Ok(())
    }
}

/// render with each renderer in turn, stopping at the first failure
impl Render for Vec<Box<dyn Render>> {
    fn render(&mut self, table: &ResultTable) -> Result<()> {
        for r in self.iter_mut() {
            r.render(table)?;
        }
        Ok(())
    }
}

/// a bar chart written to an SVG file
#[derive(Clone, Debug)]
pub struct SvgChart {
    pub path: PathBuf,

    /// width and height in pixels
    pub size: (u32, u32),
}

impl SvgChart {
    /// 15 x 10 cm at 100 dpi
    pub const DEFAULT_SIZE: (u32, u32) = (591, 394);

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            size: Self::DEFAULT_SIZE,
        }
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    /// render `table` into an in-memory SVG document
    pub fn render_to_string(
        table: &ResultTable,
        size: (u32, u32),
    ) -> Result<String> {
        let mut buf = String::new();
        {
            let root = SVGBackend::with_string(&mut buf, size).into_drawing_area();
            draw(root, table).map_err(|e| Error::Render(e.to_string()))?;
        }
        Ok(buf)
    }
}

impl Render for SvgChart {
    fn render(&mut self, table: &ResultTable) -> Result<()> {
        let root = SVGBackend::new(&self.path, self.size).into_drawing_area();
        draw(root, table).map_err(|e| {
            Error::Render(format!("{}: {e}", self.path.display()))
        })?;
        log::info!("wrote chart to {}", self.path.display());
        Ok(())
    }
}

/// the x-axis limits: the requested window if there is one, otherwise the
/// bands themselves with a little padding. a window too wide for its width to
/// be finite is clamped to the padded bands
pub(crate) fn x_bounds(table: &ResultTable) -> (f64, f64) {
    let padded = table.wavelength_bounds().map(|(lo, hi)| {
        let pad = 0.05 * (hi - lo);
        (lo - pad, hi + pad)
    });
    let (lo, hi) = match (table.range, padded) {
        (Some(r), _) if (r.max - r.min).is_finite() => (r.min, r.max),
        (Some(r), Some((lo, hi))) => (f64::max(r.min, lo), f64::min(r.max, hi)),
        (None, Some(b)) => b,
        (_, None) => (0.0, 1.0),
    };
    if hi > lo {
        (lo, hi)
    } else {
        // a single band or a zero-width window
        let pad = if lo.abs() > 0.0 { 0.05 * lo.abs() } else { 0.5 };
        (lo - pad, hi + pad)
    }
}

fn bar(band: &Band) -> Rectangle<(f64, f64)> {
    let half = band.wavelength / BAR_WIDTH_DIVISOR / 2.0;
    Rectangle::new(
        [
            (band.wavelength - half, 0.0),
            (band.wavelength + half, band.kind.level()),
        ],
        Palette99::pick(band.kind as usize).filled(),
    )
}

fn draw<DB: DrawingBackend>(
    root: DrawingArea<DB, Shift>,
    table: &ResultTable,
) -> std::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;
    let (x0, x1) = x_bounds(table);
    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("{} Absorption Features", table.molecule),
            ("sans-serif", 18),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(90)
        .build_cartesian_2d(x0..x1, 0.0..1.1)?;

    chart
        .configure_mesh()
        .x_desc(format!("Wavelength ({UNITS})"))
        .y_desc("Combination Type")
        .y_labels(12)
        .y_label_formatter(&|v| {
            BandKind::from_level(*v)
                .map(|k| k.short().to_owned())
                .unwrap_or_default()
        })
        .draw()?;

    chart.draw_series(table.iter().map(bar))?;
    chart.draw_series(table.iter().map(|b| {
        Text::new(
            b.label.clone(),
            (b.wavelength, b.kind.level() + 0.02),
            ("sans-serif", 10).into_font(),
        )
    }))?;

    root.present()?;
    Ok(())
}

/// writes the table itself as text
#[derive(Debug)]
pub struct TableWriter<W>(pub W);

impl<W: Write> Render for TableWriter<W> {
    fn render(&mut self, table: &ResultTable) -> Result<()> {
        write!(self.0, "{table}")
            .and_then(|_| self.0.flush())
            .map_err(|e| Error::io("table", e))
    }
}

/// a horizontal bar chart for the terminal. bands are listed in ascending
/// wavelength order, each bar `width * level` characters long
#[derive(Debug)]
pub struct TextChart<W> {
    w: W,
    width: usize,
}

impl<W: Write> TextChart<W> {
    pub fn new(w: W) -> Self {
        Self { w, width: 40 }
    }

    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn into_inner(self) -> W {
        self.w
    }

    fn write_chart(&mut self, table: &ResultTable) -> std::io::Result<()> {
        writeln!(
            self.w,
            "{} Absorption Features ({UNITS})",
            table.molecule
        )?;
        let mut bands: Vec<_> = table.iter().collect();
        bands.sort_by(|a, b| a.wavelength.total_cmp(&b.wavelength));
        for band in bands {
            let n = (band.kind.level() * self.width as f64).round() as usize;
            writeln!(
                self.w,
                "{:>9.4} {:<12}|{}",
                band.wavelength,
                band.label,
                "#".repeat(n)
            )?;
        }
        self.w.flush()
    }
}

impl<W: Write> Render for TextChart<W> {
    fn render(&mut self, table: &ResultTable) -> Result<()> {
        self.write_chart(table).map_err(|e| Error::io("text chart", e))
    }
}
