//! Plot context: the theme and the active figure.

use crate::clipboard::SystemClipboard;
use crate::export::{self, ExportReport, ExportRequest};
use crate::plot::Chart;
use crate::theme::{configure_theme, ThemeSettings};

/// Holds the theme every figure is drawn with and the figure that exports act on.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotContext {
    /// Current theme.
    pub theme: ThemeSettings,
    figure: Option<Chart>,
}

impl PlotContext {
    /// Create a context configured with the grid off.
    ///
    /// Call once at startup.
    pub fn init() -> Self {
        Self::with_theme(configure_theme(false))
    }

    /// Create a context with explicit settings.
    pub fn with_theme(theme: ThemeSettings) -> Self {
        Self {
            theme,
            figure: None,
        }
    }

    /// Re-apply the configured theme.
    pub fn configure_theme(&mut self, grid_set: bool) {
        self.theme = configure_theme(grid_set);
    }

    /// Make `chart` the active figure, returning the previous one.
    pub fn set_figure(&mut self, chart: Chart) -> Option<Chart> {
        self.figure.replace(chart)
    }

    /// The active figure.
    pub fn figure(&self) -> Option<&Chart> {
        self.figure.as_ref()
    }

    /// Mutable access to the active figure.
    pub fn figure_mut(&mut self) -> Option<&mut Chart> {
        self.figure.as_mut()
    }

    /// Drop the active figure.
    pub fn close_figure(&mut self) -> Option<Chart> {
        self.figure.take()
    }

    /// Export the active figure, copying to the system clipboard.
    pub fn save_plot(&self, request: &ExportRequest) -> ExportReport {
        export::save_plot(self, request, &mut SystemClipboard)
    }
}

impl Default for PlotContext {
    fn default() -> Self {
        Self::init()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_applies_theme_without_grid() {
        let ctx = PlotContext::init();
        assert_eq!(ctx.theme, configure_theme(false));
        assert!(!ctx.theme.grid);
        assert!(ctx.figure().is_none());
    }

    #[test]
    fn contexts_are_isolated() {
        let mut a = PlotContext::init();
        let b = PlotContext::init();
        a.configure_theme(true);
        assert!(a.theme.grid);
        assert!(!b.theme.grid);
    }

    #[test]
    fn set_figure_replaces_active() {
        let mut ctx = PlotContext::default();
        assert!(ctx.set_figure(Chart::new().title("a")).is_none());
        let previous = ctx.set_figure(Chart::new().title("b"));
        assert_eq!(previous.and_then(|c| c.title).as_deref(), Some("a"));
        assert_eq!(ctx.figure().and_then(|c| c.title.as_deref()), Some("b"));
        if let Some(chart) = ctx.figure_mut() {
            chart.x_label = Some("time".to_string());
        }
        assert_eq!(ctx.figure().and_then(|c| c.x_label.as_deref()), Some("time"));
        assert!(ctx.close_figure().is_some());
        assert!(ctx.figure().is_none());
    }
}
