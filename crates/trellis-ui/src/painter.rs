use trellis_engine::coords::{Rect, Vec2};
use trellis_engine::paint::Color;
use trellis_engine::scene::{DrawList, ZIndex};
use trellis_engine::text::{FontId, TextMeasure};

/// Drawing surface passed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Wraps the engine's `DrawList` with the primitive set widgets need and the
/// text metrics used to place labels. All coordinates are logical pixels.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    measure: &'a dyn TextMeasure,
    font: FontId,
    font_size: f32,
    layer: ZIndex,
}

impl<'a> Painter<'a> {
    pub fn new(
        draw_list: &'a mut DrawList,
        measure: &'a dyn TextMeasure,
        font: FontId,
        font_size: f32,
    ) -> Self {
        Self { draw_list, measure, font, font_size, layer: ZIndex::BASE }
    }

    // ── layers ────────────────────────────────────────────────────────────

    #[inline]
    pub fn layer(&self) -> ZIndex {
        self.layer
    }

    /// Runs `f` with every draw routed to `layer`, then restores the previous one.
    pub fn with_layer(&mut self, layer: ZIndex, f: impl FnOnce(&mut Painter<'a>)) {
        let prev = self.layer;
        self.layer = layer;
        f(self);
        self.layer = prev;
    }

    // ── text measurement ──────────────────────────────────────────────────

    #[inline]
    pub fn text_width(&self, text: &str) -> f32 {
        self.measure.measure_width(text, self.font, self.font_size)
    }

    #[inline]
    pub fn line_height(&self) -> f32 {
        self.measure.line_height(self.font, self.font_size)
    }

    // ── drawing ───────────────────────────────────────────────────────────

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.draw_list.push_fill_rect(self.layer, rect, color);
    }

    /// Rectangle outline drawn inside `rect`.
    pub fn stroke_rect(&mut self, rect: Rect, thickness: f32, color: Color) {
        self.draw_list.push_stroke_rect(self.layer, rect, thickness, color);
    }

    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.draw_list.push_fill_circle(self.layer, center, radius, color);
    }

    pub fn stroke_circle(&mut self, center: Vec2, radius: f32, thickness: f32, color: Color) {
        self.draw_list.push_stroke_circle(self.layer, center, radius, thickness, color);
    }

    pub fn line(&mut self, from: Vec2, to: Vec2, thickness: f32, color: Color) {
        self.draw_list.push_line(self.layer, from, to, thickness, color);
    }

    /// Label text with its top-left corner at `origin`.
    pub fn text(&mut self, text: &str, origin: Vec2, color: Color) {
        self.draw_list
            .push_text(self.layer, text, self.font, self.font_size, color, origin);
    }

    /// Label text starting at `x`, vertically centered in the band `[y, y + h)`.
    pub fn text_v_centered(&mut self, text: &str, x: f32, y: f32, h: f32, color: Color) {
        let ty = y + (h - self.line_height()) / 2.0;
        self.text(text, Vec2::new(x, ty), color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_engine::scene::DrawCmd;
    use trellis_engine::text::MonospaceMetrics;

    #[test]
    fn with_layer_restores_previous_layer() {
        let mut list = DrawList::new();
        let metrics = MonospaceMetrics::default();
        let mut p = Painter::new(&mut list, &metrics, FontId::DEFAULT, 13.0);
        p.with_layer(ZIndex::OVERLAY, |p| p.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::WHITE));
        p.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::WHITE);
        assert_eq!(p.layer(), ZIndex::BASE);
        let zs: Vec<ZIndex> = list.items().iter().map(|i| i.key.z).collect();
        assert_eq!(zs, vec![ZIndex::OVERLAY, ZIndex::BASE]);
    }

    #[test]
    fn centered_text_uses_line_height() {
        let mut list = DrawList::new();
        let metrics = MonospaceMetrics::new(7.0, 13.0);
        let mut p = Painter::new(&mut list, &metrics, FontId::DEFAULT, 13.0);
        p.text_v_centered("ok", 4.0, 10.0, 33.0, Color::WHITE);
        match &list.items()[0].cmd {
            DrawCmd::Text(t) => assert_eq!(t.origin, Vec2::new(4.0, 20.0)),
            other => panic!("unexpected {other:?}"),
        }
    }
}
