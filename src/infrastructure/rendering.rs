use crate::domain::{
    logging::{LogComponent, get_logger},
    stocks::SectorBreakdown,
    stocks::services::{MARKET_CLOSED_MESSAGE, SECTOR_CHART_TITLE},
};
use std::f64::consts::PI;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Slice palette, cycled when there are more sectors than colors.
const SLICE_COLORS: [&str; 10] = [
    "#4e79a7", "#f28e2b", "#e15759", "#76b7b2", "#59a14f", "#edc948", "#b07aa1", "#ff9da7",
    "#9c755f", "#bab0ac",
];

/// Precomputed geometry for one pie slice.
#[derive(Debug, Clone, PartialEq)]
pub struct SliceRenderData {
    pub label: String,
    pub fraction: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub color: &'static str,
}

/// Pure slice layout: fractions of the total volume mapped onto a full
/// circle starting at 12 o'clock.
pub fn calculate_slices(breakdown: &SectorBreakdown) -> Vec<SliceRenderData> {
    let total = breakdown.total();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut slices = Vec::with_capacity(breakdown.count());
    let mut angle = -PI / 2.0;
    for (i, (label, value)) in breakdown.sectors().enumerate() {
        let fraction = value / total;
        let end_angle = angle + fraction * 2.0 * PI;
        slices.push(SliceRenderData {
            label: label.to_string(),
            fraction,
            start_angle: angle,
            end_angle,
            color: SLICE_COLORS[i % SLICE_COLORS.len()],
        });
        angle = end_angle;
    }

    slices
}

/// Canvas 2D renderer for the sector pie - Infrastructure implementation
pub struct SectorPieRenderer {
    canvas_id: String,
    width: u32,
    height: u32,
}

impl SectorPieRenderer {
    pub fn new(canvas_id: String, width: u32, height: u32) -> Self {
        Self {
            canvas_id,
            width,
            height,
        }
    }

    /// Get canvas element and context
    fn get_canvas_context(&self) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("No document"))?;
        let canvas = document
            .get_element_by_id(&self.canvas_id)
            .ok_or_else(|| JsValue::from_str("Canvas element not found"))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str("Failed to get canvas element"))?;

        canvas.set_width(self.width);
        canvas.set_height(self.height);

        let context = canvas
            .get_context("2d")
            .map_err(|_| JsValue::from_str("Failed to get 2D context"))?
            .ok_or_else(|| JsValue::from_str("2D context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("Failed to cast to 2D context"))?;

        Ok((canvas, context))
    }

    /// Render the sector breakdown as a labeled pie chart.
    pub fn render(&self, breakdown: &SectorBreakdown) -> Result<(), JsValue> {
        let (_canvas, context) = self.get_canvas_context()?;

        context.clear_rect(0.0, 0.0, self.width as f64, self.height as f64);
        context.set_fill_style(&JsValue::from("#ffffff"));
        context.fill_rect(0.0, 0.0, self.width as f64, self.height as f64);

        self.render_title(&context)?;

        if !breakdown.has_slices() {
            return self.render_no_data_message(&context, breakdown);
        }

        let slices = calculate_slices(breakdown);
        get_logger().info(
            LogComponent::Infrastructure("SectorPieRenderer"),
            &format!("Rendering {} pie slices", slices.len()),
        );

        let cx = self.width as f64 / 2.0;
        let cy = (self.height as f64 + 40.0) / 2.0; // Leave room for the title
        let radius = (self.width.min(self.height) as f64 / 2.0 - 60.0).max(40.0);

        for slice in &slices {
            self.render_slice(&context, cx, cy, radius, slice)?;
        }
        for slice in &slices {
            self.render_slice_label(&context, cx, cy, radius, slice)?;
        }

        Ok(())
    }

    fn render_slice(
        &self,
        context: &CanvasRenderingContext2d,
        cx: f64,
        cy: f64,
        radius: f64,
        slice: &SliceRenderData,
    ) -> Result<(), JsValue> {
        context.set_fill_style(&JsValue::from(slice.color));
        context.begin_path();
        context.move_to(cx, cy);
        context.arc(cx, cy, radius, slice.start_angle, slice.end_angle)?;
        context.close_path();
        context.fill();

        context.set_stroke_style(&JsValue::from("#ffffff"));
        context.set_line_width(1.0);
        context.stroke();

        Ok(())
    }

    fn render_slice_label(
        &self,
        context: &CanvasRenderingContext2d,
        cx: f64,
        cy: f64,
        radius: f64,
        slice: &SliceRenderData,
    ) -> Result<(), JsValue> {
        // Tiny slivers would only smear text over their neighbors
        if slice.fraction < 0.02 {
            return Ok(());
        }

        let mid_angle = (slice.start_angle + slice.end_angle) / 2.0;
        let label_radius = radius * 0.7;
        let x = cx + mid_angle.cos() * label_radius;
        let y = cy + mid_angle.sin() * label_radius;

        let text = format!("{} ({:.1}%)", slice.label, slice.fraction * 100.0);
        context.set_fill_style(&JsValue::from("#222222"));
        context.set_font("12px Arial");
        context.fill_text(&text, x, y)?;

        Ok(())
    }

    fn render_no_data_message(
        &self,
        context: &CanvasRenderingContext2d,
        breakdown: &SectorBreakdown,
    ) -> Result<(), JsValue> {
        let message = if breakdown.is_market_closed() {
            MARKET_CLOSED_MESSAGE
        } else {
            "No sector data available"
        };

        context.set_fill_style(&JsValue::from("#666666"));
        context.set_font("16px Arial");
        context.fill_text(message, 50.0, self.height as f64 / 2.0)?;

        get_logger().warn(
            LogComponent::Infrastructure("SectorPieRenderer"),
            "No sector slices to render",
        );

        Ok(())
    }

    fn render_title(&self, context: &CanvasRenderingContext2d) -> Result<(), JsValue> {
        context.set_fill_style(&JsValue::from("#222222"));
        context.set_font("16px Arial");
        context.fill_text(SECTOR_CHART_TITLE, 20.0, 28.0)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn breakdown(pairs: &[(&str, f64)]) -> SectorBreakdown {
        let volumes: BTreeMap<String, f64> = pairs
            .iter()
            .map(|(name, value)| (name.to_string(), *value))
            .collect();
        SectorBreakdown::from(volumes)
    }

    #[test]
    fn slices_cover_the_full_circle() {
        let slices = calculate_slices(&breakdown(&[("Banking", 3.0), ("IT", 1.0)]));
        assert_eq!(slices.len(), 2);
        assert!((slices[0].start_angle - (-PI / 2.0)).abs() < 1e-9);
        assert!((slices[0].end_angle - slices[1].start_angle).abs() < 1e-9);
        let sweep: f64 = slices.iter().map(|s| s.end_angle - s.start_angle).sum();
        assert!((sweep - 2.0 * PI).abs() < 1e-9);
    }

    #[test]
    fn fractions_match_volumes() {
        let slices = calculate_slices(&breakdown(&[("Banking", 3.0), ("IT", 1.0)]));
        assert!((slices[0].fraction - 0.75).abs() < 1e-9);
        assert!((slices[1].fraction - 0.25).abs() < 1e-9);
        assert_eq!(slices[0].label, "Banking");
        assert_eq!(slices[1].label, "IT");
    }

    #[test]
    fn zero_total_yields_no_slices() {
        assert!(calculate_slices(&breakdown(&[("IT", 0.0)])).is_empty());
        assert!(calculate_slices(&SectorBreakdown::market_closed()).is_empty());
    }

    #[test]
    fn palette_cycles_past_ten_sectors() {
        let pairs: Vec<(String, f64)> = (0..12).map(|i| (format!("S{i:02}"), 1.0)).collect();
        let volumes: BTreeMap<String, f64> = pairs.into_iter().collect();
        let slices = calculate_slices(&SectorBreakdown::from(volumes));
        assert_eq!(slices.len(), 12);
        assert_eq!(slices[10].color, slices[0].color);
    }
}
