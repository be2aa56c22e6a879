//! Plot configuration shared across visualization functions

use plotters::prelude::*;

/// Configuration for customizing plots
///
/// # Fields
///
/// - `width`, `height`: Dimensions in pixels
/// - `title`: Plot title
/// - `xlabel`, `ylabel`: Axis labels
/// - `line_color`: Curve color
/// - `background`: Background color
/// - `line_width`: Line thickness in pixels
/// - `show_grid`: Whether to show grid lines
///
/// # Example
///
/// ```rust,ignore
/// use rnr_rs::output::visualization::PlotConfig;
/// use plotters::prelude::*;
///
/// let mut config = PlotConfig::default();
/// config.title = "Graphite dust, 5 um".to_string();
/// config.line_color = BLUE;
/// config.width = 1920;  // Full HD
/// config.height = 1080;
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

    /// Y-axis label (default: auto-set by plot type)
    pub ylabel: String,

    /// Curve color (default: RED)
    pub line_color: RGBColor,

    /// Background color (default: WHITE)
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
            ylabel: String::new(),
            line_color: RED,
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

/// Constant for no title (the default title will be used)
pub const NO_TITLE: Option<&str> = None;

impl PlotConfig {
    /// Create config for depletion curves with optional custom title
    ///
    /// Sets xlabel to "Time (s)", ylabel to "Remaining fraction (-)" and
    /// title to the custom value or "Particle Depletion".
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let config = PlotConfig::depletion("Graphite, u* = 2 m/s");
    /// let config = PlotConfig::depletion(None::<&str>);
    /// ```
    pub fn depletion(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::default();
        config.xlabel = "Time (s)".to_string();
        config.ylabel = "Remaining fraction (-)".to_string();
        config.title = title
            .into_optional_title()
            .unwrap_or_else(|| "Particle Depletion".to_string());
        config
    }

    /// Create config for detachment-rate curves with optional custom title
    ///
    /// Sets xlabel to "Time (s)", ylabel to "Detachment rate (1/step)" and
    /// title to the custom value or "Detachment Rate".
    pub fn rate(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::default();
        config.xlabel = "Time (s)".to_string();
        config.ylabel = "Detachment rate (1/step)".to_string();
        config.title = title
            .into_optional_title()
            .unwrap_or_else(|| "Detachment Rate".to_string());
        config
    }

    /// Create config for adhesion-force histograms with optional custom title
    ///
    /// Sets xlabel to "Normalized adhesion force (-)", ylabel to "Particle
    /// count (-)" and title to the custom value or "Adhesion Distribution".
    pub fn distribution(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::default();
        config.xlabel = "Normalized adhesion force (-)".to_string();
        config.ylabel = "Particle count (-)".to_string();
        config.title = title
            .into_optional_title()
            .unwrap_or_else(|| "Adhesion Distribution".to_string());
        config
    }
}

// =================================================================================================
// Tests
// =================================================================================================
