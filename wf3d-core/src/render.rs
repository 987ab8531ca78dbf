/// Turn a wireframe model into drawing commands
use crate::canvas::{CanvasTransform, PixelPos};
use crate::config::{RenderOptions, BACKGROUND_COLOR, LINE_COLOR, TEXT_COLOR};
use crate::error::{GeometryError, Result};
use crate::format::node_label;
use crate::model::WireframeModel;
use crate::projection::ObliqueProjection;
use crate::surface::{Color, DrawSurface};

/// A single instruction for a drawing surface.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line {
        from: PixelPos,
        to: PixelPos,
        color: Color,
        width: u32,
    },
    Text {
        at: PixelPos,
        text: String,
        color: Color,
    },
}

/// Canvas size plus the ordered commands that paint a model onto it.
#[derive(Debug, Clone, PartialEq)]
pub struct Drawing {
    pub width: u32,
    pub height: u32,
    pub background: Color,
    pub commands: Vec<DrawCommand>,
}

impl Drawing {
    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
    }

    pub fn texts(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Text { .. }))
    }

    /// Replay every command onto an existing surface.
    pub fn replay<S: DrawSurface>(&self, surface: &mut S) {
        for command in &self.commands {
            match command {
                DrawCommand::Line {
                    from,
                    to,
                    color,
                    width,
                } => surface.draw_line(*from, *to, *color, *width),
                DrawCommand::Text { at, text, color } => surface.draw_text(*at, text, *color),
            }
        }
    }

    /// Allocate a blank surface of the drawing's size and paint onto it.
    pub fn paint<S: DrawSurface>(&self) -> S {
        let mut surface = S::blank(self.width, self.height, self.background);
        self.replay(&mut surface);
        surface
    }
}

/// Render with the fixed cabinet projection.
pub fn render(model: &WireframeModel, options: &RenderOptions) -> Result<Drawing> {
    render_with(model, &ObliqueProjection::cabinet(), options)
}

/// Render with any oblique projection.
///
/// Lines come first, one per link in link order, followed by one label per
/// node in node order.
pub fn render_with(
    model: &WireframeModel,
    projection: &ObliqueProjection,
    options: &RenderOptions,
) -> Result<Drawing> {
    let projected = model.project_with(projection);
    if let Some(node) = projected
        .points()
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        return Err(GeometryError::NonFiniteNode { node });
    }
    let bbox = projected
        .bounding_box()
        .ok_or(GeometryError::DegenerateBoundingBox {
            width: 0.0,
            height: 0.0,
        })?;
    let transform = CanvasTransform::fit(&bbox, options.target_height)?;

    let pixels: Vec<PixelPos> = projected
        .points()
        .iter()
        .map(|p| transform.to_pixel(p))
        .collect();

    let mut commands = Vec::with_capacity(model.links().len() + model.node_count());
    commands.extend(model.links().iter().map(|link| DrawCommand::Line {
        from: pixels[link.a],
        to: pixels[link.b],
        color: LINE_COLOR,
        width: options.line_width,
    }));
    commands.extend(model.nodes().iter().zip(&pixels).map(|(node, &at)| {
        log::trace!("node {:?} -> pixel ({}, {})", node, at.x, at.y);
        DrawCommand::Text {
            at,
            text: node_label(node),
            color: TEXT_COLOR,
        }
    }));

    log::debug!(
        "rendered {} lines and {} labels on {}x{}",
        model.links().len(),
        model.node_count(),
        transform.canvas_width,
        transform.canvas_height
    );

    Ok(Drawing {
        width: transform.canvas_width,
        height: transform.canvas_height,
        background: BACKGROUND_COLOR,
        commands,
    })
}
