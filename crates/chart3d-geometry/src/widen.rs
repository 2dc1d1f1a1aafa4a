//! Stroke widening.
//!
//! Hit regions for lines and outlines need an area, not a centre line. The
//! path is stroked with lyon and every produced triangle becomes a closed
//! sub-path of the result.

use crate::{LineCap, LineJoin, Path, PathBuilder, PathCommand, Vec2};
use lyon::lyon_tessellation::{
    BuffersBuilder, StrokeOptions, StrokeTessellator, StrokeVertex, VertexBuffers,
};
use lyon::math::{Point, point};
use lyon::path::PathEvent;
use thiserror::Error;

/// Minimum width used for widening; thinner lines are not hittable.
pub const MIN_WIDEN_WIDTH: f32 = 1.0;

/// Failure of [`widen`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WidenError {
    /// Nothing to widen.
    #[error("cannot widen an empty path")]
    EmptyPath,
    /// The tessellator rejected the path.
    #[error("stroke tessellation failed: {0}")]
    Tessellation(String),
}

/// Outline of `path` stroked with `width`, as closed triangles.
pub fn widen(path: &Path, width: f32) -> Result<Path, WidenError> {
    widen_with(path, width, LineCap::Butt, LineJoin::Miter)
}

/// [`widen`] with explicit cap and join styles.
pub fn widen_with(
    path: &Path,
    width: f32,
    cap: LineCap,
    join: LineJoin,
) -> Result<Path, WidenError> {
    if path.is_empty() {
        return Err(WidenError::EmptyPath);
    }
    tracing::trace!(commands = path.len(), width, ?cap, ?join, "widening path");

    let mut buffers: VertexBuffers<Point, u32> = VertexBuffers::new();
    let options = StrokeOptions::default()
        .with_tolerance(0.25)
        .with_line_width(width.max(MIN_WIDEN_WIDTH))
        .with_line_cap(convert_line_cap(cap))
        .with_line_join(convert_line_join(join));

    let mut tessellator = StrokeTessellator::new();
    tessellator
        .tessellate(
            path_to_events(path),
            &options,
            &mut BuffersBuilder::new(&mut buffers, |vertex: StrokeVertex| vertex.position()),
        )
        .map_err(|err| {
            tracing::debug!(?err, "stroke tessellation rejected path");
            WidenError::Tessellation(format!("{err:?}"))
        })?;

    if buffers.indices.is_empty() {
        tracing::trace!("widening produced no triangles");
        return Err(WidenError::EmptyPath);
    }

    let mut builder = PathBuilder::new();
    for triangle in buffers.indices.chunks_exact(3) {
        let corners: Vec<Vec2> = triangle
            .iter()
            .map(|&i| {
                let p = buffers.vertices[i as usize];
                Vec2::new(p.x, p.y)
            })
            .collect();
        builder.polygon(&corners);
    }
    Ok(builder.build())
}

/// Convert a path to lyon path events.
///
/// Every sub-path started with `Begin` gets a matching `End`, open or closed.
pub(crate) fn path_to_events(path: &Path) -> Vec<PathEvent> {
    let mut events = Vec::new();
    let mut current = point(0.0, 0.0);
    let mut subpath_start = current;
    let mut in_subpath = false;

    for cmd in path.commands() {
        match cmd {
            PathCommand::MoveTo(to) => {
                if in_subpath {
                    events.push(PathEvent::End {
                        last: current,
                        first: subpath_start,
                        close: false,
                    });
                }
                current = point(to.x, to.y);
                subpath_start = current;
                events.push(PathEvent::Begin { at: current });
                in_subpath = true;
            }
            PathCommand::LineTo(to) => {
                let from = current;
                current = point(to.x, to.y);
                events.push(PathEvent::Line { from, to: current });
            }
            PathCommand::CubicTo {
                control1,
                control2,
                to,
            } => {
                let from = current;
                current = point(to.x, to.y);
                events.push(PathEvent::Cubic {
                    from,
                    ctrl1: point(control1.x, control1.y),
                    ctrl2: point(control2.x, control2.y),
                    to: current,
                });
            }
            PathCommand::Close => {
                if in_subpath {
                    events.push(PathEvent::End {
                        last: current,
                        first: subpath_start,
                        close: true,
                    });
                }
                current = subpath_start;
                in_subpath = false;
            }
        }
    }

    if in_subpath {
        events.push(PathEvent::End {
            last: current,
            first: subpath_start,
            close: false,
        });
    }

    events
}

fn convert_line_cap(cap: LineCap) -> lyon::lyon_tessellation::LineCap {
    match cap {
        LineCap::Butt => lyon::lyon_tessellation::LineCap::Butt,
        LineCap::Round => lyon::lyon_tessellation::LineCap::Round,
        LineCap::Square => lyon::lyon_tessellation::LineCap::Square,
    }
}

fn convert_line_join(join: LineJoin) -> lyon::lyon_tessellation::LineJoin {
    match join {
        LineJoin::Miter => lyon::lyon_tessellation::LineJoin::Miter,
        LineJoin::Round => lyon::lyon_tessellation::LineJoin::Round,
        LineJoin::Bevel => lyon::lyon_tessellation::LineJoin::Bevel,
    }
}
