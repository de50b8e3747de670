//! Presentation environment: device, windowing state, and effective viewport.
//!
//! The effective viewport width is resolved once, here. Downstream
//! calculators only ever see the width that is actually available for
//! layout and never need to know whether it came from an external monitor,
//! a split-view pane, or a resized Stage Manager window.
//!
//! # Example
//!
//! ```
//! use zenarrange::{DeviceContext, DeviceType, LayoutContext, ScreenSize};
//!
//! // A phone driving a 4K monitor lays out for the monitor.
//! let ctx = LayoutContext::new(DeviceType::Phone, 390.0).external_display(3840.0);
//!
//! assert_eq!(ctx.device_context, DeviceContext::ExternalDisplay);
//! assert_eq!(ctx.effective_viewport_width(), 3840.0);
//! assert_eq!(ctx.screen_size(), ScreenSize::XXLarge);
//! ```

use core::fmt;

use crate::screen::ScreenSize;

/// Width substituted for non-finite or non-positive viewport widths.
pub const MIN_VIEWPORT_WIDTH: f64 = 1.0;

/// Kind of device presenting the content.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeviceType {
    /// Handheld phone.
    Phone,
    /// Tablet.
    Pad,
    /// Desktop-class computer.
    Mac,
    /// Television, viewed from a distance.
    Tv,
    /// Wrist-worn watch.
    Watch,
    /// Head-mounted spatial display. Per-eye viewports are narrow.
    Vision,
    /// In-car head unit.
    Car,
}

impl DeviceType {
    /// Every device type.
    pub const ALL: [Self; 7] = [
        Self::Phone,
        Self::Pad,
        Self::Mac,
        Self::Tv,
        Self::Watch,
        Self::Vision,
        Self::Car,
    ];

    /// Lowercase name used in reasoning text.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::Pad => "pad",
            Self::Mac => "mac",
            Self::Tv => "tv",
            Self::Watch => "watch",
            Self::Vision => "vision",
            Self::Car => "car",
        }
    }

    /// Nominal full-screen width used when no viewport is known.
    pub const fn nominal_width(self) -> f64 {
        match self {
            Self::Phone => 390.0,
            Self::Pad => 1024.0,
            Self::Mac => 1440.0,
            Self::Tv => 1920.0,
            Self::Watch => 198.0,
            Self::Vision => 1280.0,
            Self::Car => 800.0,
        }
    }
}

/// Where the content is being shown relative to the device.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeviceContext {
    /// On the device's own screen.
    #[default]
    Standard,
    /// On an attached or wirelessly connected monitor. The monitor's width
    /// governs the layout, not the device's class.
    ExternalDisplay,
}

/// OS-level multitasking state constraining the viewport.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WindowState {
    /// Full-screen or an ordinary window.
    #[default]
    None,
    /// Side-by-side split screen.
    SplitView,
    /// Narrow floating panel over another app.
    SlideOver,
    /// Freely resized window.
    StageManager,
}

impl WindowState {
    /// Every window state.
    pub const ALL: [Self; 4] = [
        Self::None,
        Self::SplitView,
        Self::SlideOver,
        Self::StageManager,
    ];
}

/// Operating system family.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Platform {
    MacOs,
    Ios,
    TvOs,
    WatchOs,
    VisionOs,
    Android,
    Windows,
    Linux,
    Other,
}

impl Platform {
    /// Every platform.
    pub const ALL: [Self; 9] = [
        Self::MacOs,
        Self::Ios,
        Self::TvOs,
        Self::WatchOs,
        Self::VisionOs,
        Self::Android,
        Self::Windows,
        Self::Linux,
        Self::Other,
    ];

    /// Platform of the compilation target.
    pub const fn current() -> Self {
        if cfg!(target_os = "macos") {
            Self::MacOs
        } else if cfg!(target_os = "ios") {
            Self::Ios
        } else if cfg!(target_os = "tvos") {
            Self::TvOs
        } else if cfg!(target_os = "watchos") {
            Self::WatchOs
        } else if cfg!(target_os = "visionos") {
            Self::VisionOs
        } else if cfg!(target_os = "android") {
            Self::Android
        } else if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "linux") {
            Self::Linux
        } else {
            Self::Other
        }
    }

    /// Device type assumed when nothing better is known.
    pub const fn default_device(self) -> DeviceType {
        match self {
            Self::Ios | Self::Android => DeviceType::Phone,
            Self::TvOs => DeviceType::Tv,
            Self::WatchOs => DeviceType::Watch,
            Self::VisionOs => DeviceType::Vision,
            Self::MacOs | Self::Windows | Self::Linux | Self::Other => DeviceType::Mac,
        }
    }
}

/// Read-only view of the platform's current presentation capabilities.
///
/// Implemented by the host UI layer. Queried once per decision.
pub trait CapabilityProbe {
    /// Current device type.
    fn device_type(&self) -> DeviceType;
    /// Width currently available for layout.
    fn viewport_width(&self) -> f64;
    /// Whether content is on an external display.
    fn device_context(&self) -> DeviceContext {
        DeviceContext::Standard
    }
    /// Current multitasking state.
    fn window_state(&self) -> WindowState {
        WindowState::None
    }
    /// Operating system family.
    fn platform(&self) -> Platform {
        Platform::current()
    }
}

/// Everything the decision engine needs to know about the environment.
///
/// Constructed with [`new`](Self::new) and refined with builder methods.
/// Methods that change the available width rewrite the effective viewport;
/// everything downstream reads [`effective_viewport_width`](Self::effective_viewport_width).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LayoutContext {
    pub device_type: DeviceType,
    pub device_context: DeviceContext,
    pub window_state: WindowState,
    pub platform: Platform,
    effective_width: f64,
}

impl LayoutContext {
    /// Create a context for a device with the given viewport width.
    ///
    /// A non-finite or non-positive width is replaced by
    /// [`MIN_VIEWPORT_WIDTH`].
    pub fn new(device_type: DeviceType, viewport_width: f64) -> Self {
        Self {
            device_type,
            device_context: DeviceContext::Standard,
            window_state: WindowState::None,
            platform: Platform::current(),
            effective_width: sanitize_width(viewport_width),
        }
    }

    /// Like [`new`](Self::new), but rejects invalid widths.
    pub fn try_new(device_type: DeviceType, viewport_width: f64) -> Result<Self, ContextError> {
        if !viewport_width.is_finite() || viewport_width <= 0.0 {
            return Err(ContextError::InvalidViewportWidth);
        }
        Ok(Self::new(device_type, viewport_width))
    }

    /// Default context for the compilation target: its platform, that
    /// platform's usual device, and the device's nominal width.
    pub fn detect() -> Self {
        let platform = Platform::current();
        let device = platform.default_device();
        Self::new(device, device.nominal_width()).platform(platform)
    }

    /// Read a capability probe once.
    pub fn from_probe<P: CapabilityProbe + ?Sized>(probe: &P) -> Self {
        Self::new(probe.device_type(), probe.viewport_width())
            .device_context(probe.device_context())
            .window_state(probe.window_state())
            .platform(probe.platform())
    }

    /// Set where the content is shown. Does not change the width.
    pub fn device_context(mut self, device_context: DeviceContext) -> Self {
        self.device_context = device_context;
        self
    }

    /// Set the multitasking state. Does not change the width.
    pub fn window_state(mut self, window_state: WindowState) -> Self {
        self.window_state = window_state;
        self
    }

    /// Set the operating system family.
    pub fn platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Present on an external monitor of the given width.
    pub fn external_display(mut self, monitor_width: f64) -> Self {
        self.device_context = DeviceContext::ExternalDisplay;
        self.effective_width = sanitize_width(monitor_width);
        self
    }

    /// Present in one pane of a split view of the given width.
    pub fn split_view(self, pane_width: f64) -> Self {
        self.windowed(WindowState::SplitView, pane_width)
    }

    /// Present in a slide-over panel of the given width.
    pub fn slide_over(self, panel_width: f64) -> Self {
        self.windowed(WindowState::SlideOver, panel_width)
    }

    /// Present in a Stage Manager window resized to the given width.
    pub fn stage_manager(self, window_width: f64) -> Self {
        self.windowed(WindowState::StageManager, window_width)
    }

    fn windowed(mut self, state: WindowState, width: f64) -> Self {
        self.window_state = state;
        self.effective_width = sanitize_width(width);
        self
    }

    /// Width actually available for layout. Always finite and positive.
    pub fn effective_viewport_width(&self) -> f64 {
        self.effective_width
    }

    /// Screen size category of the effective viewport.
    pub fn screen_size(&self) -> ScreenSize {
        ScreenSize::classify(self.effective_width)
    }

    /// Whether content is on an external monitor.
    pub fn is_external_display(&self) -> bool {
        match self.device_context {
            DeviceContext::ExternalDisplay => true,
            DeviceContext::Standard => false,
        }
    }
}

impl Default for LayoutContext {
    fn default() -> Self {
        Self::detect()
    }
}

fn sanitize_width(width: f64) -> f64 {
    if width.is_finite() && width > 0.0 {
        width
    } else {
        MIN_VIEWPORT_WIDTH
    }
}

/// Layout context construction error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ContextError {
    /// Viewport width is NaN, infinite, zero, or negative.
    InvalidViewportWidth,
}

impl fmt::Display for ContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidViewportWidth => {
                f.write_str("viewport width must be finite and greater than zero")
            }
        }
    }
}

impl core::error::Error for ContextError {}
