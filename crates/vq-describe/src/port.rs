//! Render ports
//!
//! The only seams between the derivation logic and a presentation
//! technology. Implementations paint descriptors however they like; the
//! builder side never sees them.

use crate::descriptor::SectionView;
use vq_model::QueryResult;

/// Paints one About Data section from its derived view
pub trait RenderPort {
    /// Render a section: its pills, or its empty-state marker
    fn render_section(&mut self, view: &SectionView);
}

/// Redraws the chart for the canonical result
pub trait ChartPort {
    /// Render the chart for the current result
    fn render_chart(&mut self, result: &QueryResult);
}
