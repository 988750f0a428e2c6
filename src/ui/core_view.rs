use crate::scene::{Mesh, Star};
use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Line as CanvasLine, Points},
        Widget,
    },
};

/// Braille rendering of the rotating core over the starfield.
pub struct CoreView<'a> {
    pub mesh: &'a Mesh,
    pub stars: &'a [Star],
    pub elapsed: f64,
}

impl<'a> Widget for CoreView<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        // Terminal cells are roughly twice as tall as they are wide.
        let aspect = area.width as f64 / (area.height as f64 * 2.0);

        let (lit, dim): (Vec<&Star>, Vec<&Star>) =
            self.stars.iter().partition(|s| s.is_lit(self.elapsed));
        let lit: Vec<(f64, f64)> = lit.iter().map(|s| (s.x * aspect, s.y)).collect();
        let dim: Vec<(f64, f64)> = dim.iter().map(|s| (s.x * aspect, s.y)).collect();
        let segments = self.mesh.frame_at(self.elapsed);

        Canvas::default()
            .background_color(theme::BRAND_DARK)
            .marker(Marker::Braille)
            .x_bounds([-aspect, aspect])
            .y_bounds([-1.0, 1.0])
            .paint(|ctx| {
                ctx.draw(&Points {
                    coords: &dim,
                    color: theme::STAR_DIM,
                });
                ctx.draw(&Points {
                    coords: &lit,
                    color: theme::STAR_LIT,
                });
                ctx.layer();
                for &((x1, y1), (x2, y2)) in &segments {
                    ctx.draw(&CanvasLine {
                        x1,
                        y1,
                        x2,
                        y2,
                        color: theme::CORE_WIRE,
                    });
                }
            })
            .render(area, buf);
    }
}
