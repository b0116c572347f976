use std::fmt;

/// Autofocus speed picked in the Navigate panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AutofocusSpeed {
    Fast,
    Medium,
    Fine,
}

impl AutofocusSpeed {
    pub const ALL: &[Self] = &[Self::Fast, Self::Medium, Self::Fine];
}

impl fmt::Display for AutofocusSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fast => write!(f, "FAST"),
            Self::Medium => write!(f, "MEDIUM"),
            Self::Fine => write!(f, "FINE"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScanOption {
    #[default]
    Default,
    Custom,
    Advanced,
}

impl ScanOption {
    pub const ALL: &[Self] = &[Self::Default, Self::Custom, Self::Advanced];
}

impl fmt::Display for ScanOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "Default"),
            Self::Custom => write!(f, "Custom"),
            Self::Advanced => write!(f, "Advanced"),
        }
    }
}

/// Autofocus run before each scan position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScanAutofocus {
    #[default]
    None,
    Fast,
    Accurate,
}

impl ScanAutofocus {
    pub const ALL: &[Self] = &[Self::None, Self::Fast, Self::Accurate];
}

impl fmt::Display for ScanAutofocus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Fast => write!(f, "Fast"),
            Self::Accurate => write!(f, "Accurate"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScanStyle {
    #[default]
    Raster,
    Snake,
    Spiral,
}

impl ScanStyle {
    pub const ALL: &[Self] = &[Self::Raster, Self::Snake, Self::Spiral];
}

impl fmt::Display for ScanStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raster => write!(f, "Raster"),
            Self::Snake => write!(f, "Snake"),
            Self::Spiral => write!(f, "Spiral"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HomingStyle {
    #[default]
    None,
    Center,
    Corner,
}

impl HomingStyle {
    pub const ALL: &[Self] = &[Self::None, Self::Center, Self::Corner];
}

impl fmt::Display for HomingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Center => write!(f, "Center"),
            Self::Corner => write!(f, "Corner"),
        }
    }
}

/// Form state of the Navigate and Capture control columns. Nothing here
/// talks to hardware; the buttons only log what they would send.
#[derive(Clone, Debug, PartialEq)]
pub struct ControlsState {
    /// Stage target in steps, x/y/z.
    pub move_to: [i64; 3],
    pub autofocus: Option<AutofocusSpeed>,

    pub filename: String,
    pub temporary: bool,
    pub full_resolution: bool,
    pub store_raw: bool,
    pub resize_capture: bool,
    /// Width and height, only used with `resize_capture`.
    pub resize: [u32; 2],
    pub notes: String,
    pub tags: String,

    pub scan_capture: bool,
    pub scan_option: ScanOption,
    /// Step size per axis, x/y/z.
    pub step_size: [u32; 3],
    /// Number of steps per axis, x/y/z.
    pub steps: [u32; 3],
    pub scan_autofocus: ScanAutofocus,
    pub scan_style: ScanStyle,
    pub homing: HomingStyle,
}

impl Default for ControlsState {
    fn default() -> Self {
        Self {
            move_to: [-6160, 16194, 7952],
            autofocus: None,
            filename: "spinal_section_1".to_string(),
            temporary: false,
            full_resolution: false,
            store_raw: false,
            resize_capture: false,
            resize: [640, 480],
            notes: String::new(),
            tags: String::new(),
            scan_capture: false,
            scan_option: ScanOption::default(),
            step_size: [1000; 3],
            steps: [5; 3],
            scan_autofocus: ScanAutofocus::default(),
            scan_style: ScanStyle::default(),
            homing: HomingStyle::default(),
        }
    }
}

impl ControlsState {
    /// Comma-separated tags, trimmed, empties dropped.
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }

    pub fn move_summary(&self) -> String {
        let [x, y, z] = self.move_to;
        format!("Move to x={x} y={y} z={z}")
    }

    pub fn capture_summary(&self) -> String {
        let mut summary = format!("Capture '{}'", self.filename);
        if self.resize_capture {
            let [w, h] = self.resize;
            summary.push_str(&format!(" at {w}x{h}"));
        }
        if self.full_resolution {
            summary.push_str(", full resolution");
        }
        if self.store_raw {
            summary.push_str(", raw");
        }
        if self.temporary {
            summary.push_str(", temporary");
        }
        let tags = self.tag_list();
        if !tags.is_empty() {
            summary.push_str(&format!(" [{}]", tags.join(", ")));
        }
        summary
    }

    pub fn scan_summary(&self) -> String {
        let [sx, sy, sz] = self.step_size;
        let [nx, ny, nz] = self.steps;
        format!(
            "Scan {} ({}): step {sx}/{sy}/{sz}, steps {nx}/{ny}/{nz}, autofocus {}, homing {}",
            self.scan_style, self.scan_option, self.scan_autofocus, self.homing
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_stage_presets() {
        let c = ControlsState::default();
        assert_eq!(c.move_to, [-6160, 16194, 7952]);
        assert_eq!(c.autofocus, None);
        assert_eq!(c.filename, "spinal_section_1");
        assert_eq!(c.resize, [640, 480]);
        assert!(!c.scan_capture);
        assert_eq!(c.step_size, [1000; 3]);
    }

    #[test]
    fn tag_list_skips_blanks() {
        let c = ControlsState {
            tags: " spine, ,cortex,, ".to_string(),
            ..ControlsState::default()
        };
        assert_eq!(c.tag_list(), vec!["spine", "cortex"]);
    }

    #[test]
    fn capture_summary_mentions_resize_only_when_enabled() {
        let mut c = ControlsState::default();
        assert_eq!(c.capture_summary(), "Capture 'spinal_section_1'");
        c.resize_capture = true;
        c.store_raw = true;
        c.tags = "a,b".to_string();
        assert_eq!(c.capture_summary(), "Capture 'spinal_section_1' at 640x480, raw [a, b]");
    }

    #[test]
    fn move_summary_lists_axes() {
        assert_eq!(
            ControlsState::default().move_summary(),
            "Move to x=-6160 y=16194 z=7952"
        );
    }
}
