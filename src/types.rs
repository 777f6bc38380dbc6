use chrono::NaiveTime;

/// The four Waugh angles of one dial, with the inputs they came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialGeometry {
    pub latitude: f64,
    pub declination: f64,
    pub sub_style_distance: f64,
    pub style_height: f64,
    pub longitude_difference: f64,
    pub angle_av: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourLine {
    pub time: NaiveTime,
    pub hour_angle: f64,
    /// `None` while the sun is behind the wall.
    pub angle_from_substyle: Option<f64>,
    /// Measured from the vertical noon line, positive on the afternoon side.
    pub angle_from_noon: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourLineConfig {
    pub latitude: f64,
    pub declination: f64,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub interval_minutes: u32,
}

impl Default for HourLineConfig {
    fn default() -> Self {
        Self {
            latitude: 51.5,
            declination: 20.0,
            start: NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
            end: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            interval_minutes: 60,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HourLineLayout {
    pub config: HourLineConfig,
    pub geometry: DialGeometry,
    pub lines: Vec<HourLine>,
}

impl HourLineLayout {
    /// Lines that actually receive a shadow.
    pub fn lit_lines(&self) -> impl Iterator<Item = &HourLine> {
        self.lines.iter().filter(|l| l.angle_from_noon.is_some())
    }
}
