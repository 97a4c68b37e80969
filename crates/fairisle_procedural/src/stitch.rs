//! # Stitch Renderer
//!
//! Turns a color grid into an SVG document of shaded knit stitches.
//!
//! Each 8x8 cell is drawn as:
//!
//! ```text
//! base rect ─ left highlight curve (x1.28) ─ right shadow curve (x0.70)
//!           ─ top strip (x0.52, 45%) ─ bottom ellipse (x0.52, 40%)
//!           ─ diagonal stroke (highlight x1.12, 50%)
//! ```
//!
//! The markup, whitespace included, is fixed. Coordinates print as the
//! shortest decimal that round-trips, computed in the same operation order
//! as issued artwork, so output is byte-stable.

use std::fmt::{self, Write};

use crate::color::StitchShades;
use crate::grid::{Grid, COLS, ROWS};
use crate::palette::Palette;

/// Canvas edge length in SVG units.
pub const CANVAS_SIZE: u32 = 800;

/// Stitch edge length in SVG units.
pub const STITCH_SIZE: u32 = 8;

/// Approximate bytes emitted per stitch, used to pre-size the output.
const STITCH_BYTES_HINT: usize = 840;

/// Renders grids to SVG.
#[derive(Debug, Clone, Copy)]
pub struct StitchRenderer {
    stitch: f64,
}

impl Default for StitchRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl StitchRenderer {
    /// Renderer with the standard 8-unit stitch.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            stitch: STITCH_SIZE as f64,
        }
    }

    /// Renders a full document.
    #[must_use]
    pub fn render(&self, grid: &Grid, palette: &Palette) -> String {
        let mut out = String::with_capacity(COLS * ROWS * STITCH_BYTES_HINT);
        // fmt::Write for String never fails
        let _ = self.render_to(&mut out, grid, palette);
        out
    }

    /// Streams a full document into `out`.
    ///
    /// # Errors
    ///
    /// Propagates errors from the underlying writer.
    #[allow(clippy::cast_precision_loss)]
    pub fn render_to<W: Write>(&self, out: &mut W, grid: &Grid, palette: &Palette) -> fmt::Result {
        let shades: [StitchShades; 5] = std::array::from_fn(|i| StitchShades::for_base(palette.colors[i]));

        write!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {CANVAS_SIZE} {CANVAS_SIZE}" width="{CANVAS_SIZE}" height="{CANVAS_SIZE}">"#
        )?;

        for (row, cells) in grid.rows().enumerate() {
            let y = row as f64 * self.stitch;
            for (col, &index) in cells.iter().enumerate() {
                let x = col as f64 * self.stitch;
                let slot = usize::from(index.min(4));
                self.write_stitch(out, x, y, palette.colors[slot], &shades[slot])?;
            }
        }

        out.write_str("</svg>")
    }

    /// Writes one stitch at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Propagates errors from the underlying writer.
    pub fn write_stitch<W: Write>(
        &self,
        out: &mut W,
        x: f64,
        y: f64,
        base: &str,
        shades: &StitchShades,
    ) -> fmt::Result {
        let w = self.stitch;
        let h = self.stitch;
        let cx = x + w / 2.0;

        write!(
            out,
            concat!(
                "\n    <rect x=\"{x}\" y=\"{y}\" width=\"{w}\" height=\"{h}\" fill=\"{base}\"/>",
                "\n    <path d=\"",
                "\n      M {l_mx} {top}",
                "\n      C {l_mx} {c1y},",
                "\n        {l_c2x} {c2y},",
                "\n        {cx} {tip}",
                "\n      L {cx} {tip}",
                "\n      C {l_c3x} {c3y},",
                "\n        {l_c4x} {c4y},",
                "\n        {l_endx} {top}",
                "\n      Z",
                "\n    \" fill=\"{highlight}\"/>",
            ),
            x = x,
            y = y,
            w = w,
            h = h,
            base = base,
            l_mx = x + w * 0.06,
            top = y + h * 0.04,
            c1y = y + h * 0.38,
            l_c2x = cx - w * 0.12,
            c2y = y + h * 0.68,
            cx = cx,
            tip = y + h * 0.94,
            l_c3x = cx - w * 0.18,
            c3y = y + h * 0.58,
            l_c4x = x + w * 0.20,
            c4y = y + h * 0.32,
            l_endx = x + w * 0.30,
            highlight = shades.highlight,
        )?;

        write!(
            out,
            concat!(
                "\n    <path d=\"",
                "\n      M {r_mx} {top}",
                "\n      C {r_mx} {c1y},",
                "\n        {r_c2x} {c2y},",
                "\n        {cx} {tip}",
                "\n      L {cx} {tip}",
                "\n      C {r_c3x} {c3y},",
                "\n        {r_c4x} {c4y},",
                "\n        {r_endx} {top}",
                "\n      Z",
                "\n    \" fill=\"{shadow}\"/>",
            ),
            r_mx = x + w * 0.94,
            top = y + h * 0.04,
            c1y = y + h * 0.38,
            r_c2x = cx + w * 0.12,
            c2y = y + h * 0.68,
            cx = cx,
            tip = y + h * 0.94,
            r_c3x = cx + w * 0.18,
            c3y = y + h * 0.58,
            r_c4x = x + w * 0.80,
            c4y = y + h * 0.32,
            r_endx = x + w * 0.70,
            shadow = shades.shadow,
        )?;

        write!(
            out,
            concat!(
                "\n    <rect x=\"{x}\" y=\"{y}\" width=\"{w}\" height=\"{strip}\" fill=\"{deep}\" opacity=\"0.45\"/>",
                "\n    <ellipse cx=\"{cx}\" cy=\"{ecy}\" rx=\"{rx}\" ry=\"{ry}\" fill=\"{deep}\" opacity=\"0.4\"/>",
                "\n    <path d=\"",
                "\n      M {sx} {sy}",
                "\n      Q {qx} {qy},",
                "\n        {ex} {ey}",
                "\n    \" stroke=\"{bright}\" stroke-width=\"1\" fill=\"none\" opacity=\"0.5\" stroke-linecap=\"round\"/>",
                "\n  ",
            ),
            x = x,
            y = y,
            w = w,
            strip = h * 0.12,
            deep = shades.deep_shadow,
            cx = cx,
            ecy = y + h * 0.88,
            rx = w * 0.14,
            ry = h * 0.08,
            sx = x + w * 0.12,
            sy = y + h * 0.16,
            qx = x + w * 0.16,
            qy = y + h * 0.42,
            ex = cx - w * 0.10,
            ey = y + h * 0.70,
            bright = shades.bright_highlight,
        )
    }
}
