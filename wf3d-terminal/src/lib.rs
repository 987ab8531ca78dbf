/// Terminal viewer for oblique wireframe drawings
use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use std::io::{stdout, Write};
use wf3d_core::{render_with, Drawing, ObliqueProjection, RenderOptions, WireframeModel};

pub mod renderer;

pub use renderer::{AsciiCanvas, CELL_ASPECT};

/// Rows reserved above the drawing for the status line.
const STATUS_ROWS: u16 = 1;

/// Shows one wireframe model in the terminal until the user quits.
pub struct TerminalApp {
    model: WireframeModel,
    projection: ObliqueProjection,
    running: bool,
}

impl TerminalApp {
    pub fn new(model: WireframeModel, projection: ObliqueProjection) -> Self {
        Self {
            model,
            projection,
            running: true,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> Result<()> {
        let (columns, rows) = terminal::size()?;
        self.render(columns, rows)?;

        while self.running {
            match event::read()? {
                Event::Key(KeyEvent { code, .. }) => {
                    if matches!(code, KeyCode::Char('q') | KeyCode::Esc) {
                        self.running = false;
                    }
                }
                Event::Resize(columns, rows) => self.render(columns, rows)?,
                _ => {}
            }
        }

        Ok(())
    }

    fn render(&self, columns: u16, rows: u16) -> Result<()> {
        let drawing = fit_drawing(&self.model, &self.projection, columns, rows)?;
        let canvas: AsciiCanvas = drawing.paint();

        let mut stdout = stdout();
        queue!(stdout, terminal::Clear(ClearType::All))?;
        canvas.draw(&mut stdout, STATUS_ROWS)?;

        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "WF3D Terminal Viewer | {} nodes, {} links | Q=Quit",
                self.model.node_count(),
                self.model.links().len()
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}

/// Render `model` as large as fits in a `columns` x `rows` terminal.
///
/// The drawing height starts at the rows left under the status line and
/// shrinks when the derived width would overflow the columns.
pub fn fit_drawing(
    model: &WireframeModel,
    projection: &ObliqueProjection,
    columns: u16,
    rows: u16,
) -> wf3d_core::Result<Drawing> {
    let height = u32::from(rows.saturating_sub(STATUS_ROWS)).max(1);
    let drawing = render_with(model, projection, &RenderOptions::new(height, 1))?;

    let max_width = u32::from(columns) / CELL_ASPECT as u32;
    if drawing.width <= max_width || max_width == 0 {
        return Ok(drawing);
    }

    let shrunk = (u64::from(height) * u64::from(max_width) / u64::from(drawing.width)).max(1);
    log::debug!(
        "drawing {} cells wide does not fit {} columns, height {} -> {}",
        drawing.width,
        columns,
        height,
        shrunk
    );
    render_with(model, projection, &RenderOptions::new(shrunk as u32, 1))
}
