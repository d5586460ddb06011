//! Forward transform: every foreground pixel votes for all lines through it.

use hough_lines_core::{GrayImage, GrayImageView};
use log::{debug, warn};

use crate::accumulator::Accumulator;
use crate::polar::{AngleTable, PolarFrame};
use crate::{HoughError, HoughParams, HoughSpace};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Populate an accumulator from `image`.
///
/// `is_foreground` selects edge pixels. The returned space has empty
/// `maxima` and `lines`. Fails on zero-sized images, on a buffer whose
/// length does not match the dimensions and on `theta_bins == 0`.
///
/// With the `parallel` feature rows are split across rayon workers, each
/// with its own accumulator, and the partial tables are summed. The result
/// is identical to the sequential pass.
#[cfg_attr(
    feature = "tracing",
    instrument(
        level = "info",
        skip(image, params, is_foreground),
        fields(width = image.width, height = image.height, theta_bins = params.theta_bins)
    )
)]
pub fn vote<F>(
    image: &GrayImageView<'_>,
    params: &HoughParams,
    is_foreground: F,
) -> Result<HoughSpace, HoughError>
where
    F: Fn(u8) -> bool + Sync,
{
    params.validate()?;
    let frame = PolarFrame::new(image.width, image.height)?;
    let image = GrayImageView::new(image.width, image.height, image.data)?;

    let angles = AngleTable::new(params.theta_bins);
    let (accumulator, visualization, foreground_pixels) =
        run_vote(&image, frame, &angles, params.visual_step, &is_foreground)?;

    if foreground_pixels == 0 {
        warn!(
            "no foreground pixels in {}x{} image, accumulator is empty",
            image.width, image.height
        );
    }
    debug!(
        "{foreground_pixels} foreground pixels, {} votes into {}x{} cells",
        accumulator.total_votes(),
        accumulator.theta_bins(),
        accumulator.rho_bins()
    );

    Ok(HoughSpace {
        accumulator,
        visualization,
        foreground_pixels,
        maxima: Vec::new(),
        lines: Vec::new(),
    })
}

/// Render vote counts as a white image darkened by `step` per vote.
///
/// Pixel `(theta_index, rho_bin)` shows that cell.
pub fn render_visualization(accumulator: &Accumulator, step: u8) -> GrayImage {
    let (tb, rb) = (accumulator.theta_bins(), accumulator.rho_bins());
    let mut img = GrayImage::filled(tb, rb, u8::MAX);
    for t in 0..tb {
        for r in 0..rb {
            img.set(t, r, darken(accumulator.get(t, r), step));
        }
    }
    img
}

#[inline]
fn darken(votes: u32, step: u8) -> u8 {
    let drop = u64::from(votes) * u64::from(step);
    u8::MAX - drop.min(u64::from(u8::MAX)) as u8
}

/// Votes of one image row into `acc`; returns the number of foreground pixels.
#[inline]
fn vote_row<F>(
    row: &[u8],
    y: usize,
    frame: &PolarFrame,
    angles: &AngleTable,
    acc: &mut Accumulator,
    mut on_vote: impl FnMut(usize, usize),
    is_foreground: &F,
) -> usize
where
    F: Fn(u8) -> bool,
{
    let mut count = 0;
    for (x, &value) in row.iter().enumerate() {
        if !is_foreground(value) {
            continue;
        }
        count += 1;
        for (t, &(cos_t, sin_t)) in angles.as_slice().iter().enumerate() {
            if let Some(bin) = acc.increment(frame.rho(x, y, cos_t, sin_t), t) {
                on_vote(t, bin);
            }
        }
    }
    count
}

#[cfg(not(feature = "parallel"))]
fn run_vote<F>(
    image: &GrayImageView<'_>,
    frame: PolarFrame,
    angles: &AngleTable,
    step: u8,
    is_foreground: &F,
) -> Result<(Accumulator, GrayImage, usize), HoughError>
where
    F: Fn(u8) -> bool + Sync,
{
    let mut acc = Accumulator::new(frame, angles.len())?;
    let mut vis = GrayImage::filled(angles.len(), frame.rho_bins(), u8::MAX);
    let mut foreground = 0;

    for y in 0..image.height {
        let Some(row) = image.row(y) else {
            break;
        };
        foreground += vote_row(
            row,
            y,
            &frame,
            angles,
            &mut acc,
            |t, bin| {
                vis.update(t, bin, |p| p.saturating_sub(step));
            },
            is_foreground,
        );
    }

    Ok((acc, vis, foreground))
}

#[cfg(feature = "parallel")]
fn run_vote<F>(
    image: &GrayImageView<'_>,
    frame: PolarFrame,
    angles: &AngleTable,
    step: u8,
    is_foreground: &F,
) -> Result<(Accumulator, GrayImage, usize), HoughError>
where
    F: Fn(u8) -> bool + Sync,
{
    use rayon::prelude::*;

    let empty = Accumulator::new(frame, angles.len())?;
    let (acc, foreground) = (0..image.height)
        .into_par_iter()
        .fold(
            || (empty.clone(), 0usize),
            |(mut acc, count), y| {
                let n = image.row(y).map_or(0, |row| {
                    vote_row(row, y, &frame, angles, &mut acc, |_, _| {}, is_foreground)
                });
                (acc, count + n)
            },
        )
        .map(Ok::<_, HoughError>)
        .try_reduce(
            || (empty.clone(), 0usize),
            |(mut a, na), (b, nb)| {
                a.merge(&b)?;
                Ok((a, na + nb))
            },
        )?;

    let vis = render_visualization(&acc, step);
    Ok((acc, vis, foreground))
}
