//! Plot configuration shared across visualization functions
//!
//! Profile plots (φ against position) and convergence plots (error against
//! grid size) use the same [`PlotConfig`]; the constructors only differ in
//! their axis labels and default titles.

use plotters::prelude::*;

/// Configuration for customizing plots
///
/// # Fields
///
/// - `width`, `height`: Dimensions in pixels
/// - `title`: Plot title
/// - `xlabel`, `ylabel`: Axis labels
/// - `line_color`: Colour of the numerical profile in single-record plots
/// - `reference_color`: Colour of the analytical profile
/// - `series_colors`: Optional colours for comparison plots (one per series)
/// - `background`: Background colour
/// - `line_width`: Line thickness in pixels
/// - `show_grid`: Whether to show grid lines
///
/// # Example
///
/// ```rust
/// use convdiff_rs::output::visualization::PlotConfig;
/// use plotters::prelude::*;
///
/// let mut config = PlotConfig::profile("UDS, u = 2 m/s");
/// config.line_color = BLUE;
/// config.width = 1920;
///
/// assert_eq!(config.xlabel, "x (m)");
/// ```
#[derive(Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    /// Plot title (default: "Plot")
    pub title: String,

    /// X-axis label (default: auto-set by plot type)
    pub xlabel: String,

    /// Y-axis label (default: "φ")
    pub ylabel: String,

    /// Numerical profile colour (default: RED)
    pub line_color: RGBColor,

    /// Analytical profile colour (default: BLACK)
    pub reference_color: RGBColor,

    /// Optional colours for comparison plots
    ///
    /// If None, uses the default palette: [RED, BLUE, GREEN, MAGENTA, ...]
    pub series_colors: Option<Vec<RGBColor>>,

    /// Background colour (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Plot".to_string(),
            xlabel: String::new(), // Set by specific plot type
            ylabel: "φ".to_string(),
            line_color: RED,
            reference_color: BLACK,
            series_colors: None,
            background: WHITE,
            line_width: 2,
            show_grid: true,
        }
    }
}

/// Helper trait to accept both `String` and `None` for optional titles
pub trait IntoOptionalTitle {
    fn into_optional_title(self) -> Option<String>;
}

impl IntoOptionalTitle for &str {
    fn into_optional_title(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoOptionalTitle for String {
    fn into_optional_title(self) -> Option<String> {
        Some(self)
    }
}

impl<T: IntoOptionalTitle> IntoOptionalTitle for Option<T> {
    fn into_optional_title(self) -> Option<String> {
        self.and_then(|t| t.into_optional_title())
    }
}

/// Constant for no title (default title will be used)
///
/// # Example
///
/// ```rust,ignore
/// let config = PlotConfig::profile(NO_TITLE);
/// ```
pub const NO_TITLE: Option<&str> = None;

impl PlotConfig {
    /// Config for φ(x) profiles
    ///
    /// Sets xlabel to "x (m)" and title to the custom value or
    /// "Numerical vs Analytical"
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let config = PlotConfig::profile("CDS");
    /// let config = PlotConfig::profile(format!("{} at u = {}", scheme, velocity));
    /// let config = PlotConfig::profile(NO_TITLE);
    /// ```
    pub fn profile(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::default();
        config.xlabel = "x (m)".to_string();
        config.title = title
            .into_optional_title()
            .unwrap_or_else(|| "Numerical vs Analytical".to_string());
        config
    }

    /// Config for error against grid size
    ///
    /// Sets xlabel to "Gridpoints N", ylabel to "Relative error (%)" and
    /// title to the custom value or "Error Convergence"
    pub fn convergence(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::default();
        config.xlabel = "Gridpoints N".to_string();
        config.ylabel = "Relative error (%)".to_string();
        config.title = title
            .into_optional_title()
            .unwrap_or_else(|| "Error Convergence".to_string());
        config
    }

    /// Config with custom comparison colours
    pub fn series_colors(colors: Vec<RGBColor>) -> Self {
        let mut config = Self::default();
        config.series_colors = Some(colors);
        config
    }

    /// Colour of series `index`
    ///
    /// Uses custom colours if provided, otherwise falls back to the default
    /// palette
    pub(crate) fn get_series_color(&self, index: usize) -> RGBColor {
        if let Some(ref colors) = self.series_colors {
            if index < colors.len() {
                return colors[index];
            }
        }

        let default_colors = [
            RED,
            BLUE,
            GREEN,
            MAGENTA,
            CYAN,
            RGBColor(255, 165, 0), // Orange
            RGBColor(128, 0, 128), // Purple
            RGBColor(165, 42, 42), // Brown
        ];

        default_colors[index % default_colors.len()]
    }
}

// =================================================================================================
// Tests
// =================================================================================================
