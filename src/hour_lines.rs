use chrono::{Duration, NaiveTime, Timelike};

use crate::angles;
use crate::error::{SundialError, SundialResult};
use crate::types::{DialGeometry, HourLine, HourLineConfig, HourLineLayout};

pub const DEGREES_PER_HOUR: f64 = 15.0;

/// Hour angle of local apparent time, negative in the morning.
pub fn hour_angle_for_time(time: NaiveTime) -> f64 {
    let hours = time.num_seconds_from_midnight() as f64 / 3600.0
        + time.nanosecond() as f64 / 3.6e12;
    DEGREES_PER_HOUR * (hours - 12.0)
}

/// Hour angle at which the sun stands square to the wall. Same tangent as the
/// longitude difference, but in the quadrant the wall actually faces.
fn substyle_meridian(geometry: &DialGeometry) -> f64 {
    let decl_rad = angles::deg_to_rad(geometry.declination);
    let lat_rad = angles::deg_to_rad(geometry.latitude);
    angles::rad_to_deg(decl_rad.sin().atan2(decl_rad.cos() * lat_rad.sin()))
}

/// Places the line for `time` on the dial described by `geometry`.
///
/// The line makes an angle θ with the substyle where
/// tan θ = sin SH · tan(HA − DL). Adding the sub-style distance moves the
/// origin to the noon line. More than 90° from the substyle meridian the sun
/// is behind the wall and no shadow falls.
pub fn hour_line_at(geometry: &DialGeometry, time: NaiveTime) -> HourLine {
    let hour_angle = hour_angle_for_time(time);
    let from_substyle_meridian =
        angles::normalize_hour_angle(hour_angle - substyle_meridian(geometry));

    let angle_from_substyle = if from_substyle_meridian.abs() < 90.0 {
        let sin_sh = angles::deg_to_rad(geometry.style_height).sin();
        let tan_rel = angles::deg_to_rad(from_substyle_meridian).tan();
        Some(angles::rad_to_deg((sin_sh * tan_rel).atan()))
    } else {
        None
    };
    let angle_from_noon = angle_from_substyle.map(|theta| theta + geometry.sub_style_distance);

    log::trace!(
        "{} HA={:.3} substyle={:?} noon={:?}",
        time,
        hour_angle,
        angle_from_substyle,
        angle_from_noon
    );

    HourLine {
        time,
        hour_angle,
        angle_from_substyle,
        angle_from_noon,
    }
}

fn validate(config: &HourLineConfig) -> SundialResult<()> {
    if config.interval_minutes == 0 {
        return Err(SundialError::invalid_config("interval_minutes must be positive"));
    }
    if config.start > config.end {
        return Err(SundialError::invalid_config(format!(
            "start {} is after end {}",
            config.start, config.end
        )));
    }
    Ok(())
}

pub fn generate_hour_lines(config: &HourLineConfig) -> SundialResult<HourLineLayout> {
    validate(config)?;
    let geometry = angles::dial_geometry(config.latitude, config.declination)?;

    let step = Duration::minutes(i64::from(config.interval_minutes));
    let mut lines = Vec::new();
    let mut time = config.start;
    loop {
        lines.push(hour_line_at(&geometry, time));
        let (next, wrapped_secs) = time.overflowing_add_signed(step);
        if wrapped_secs != 0 || next > config.end {
            break;
        }
        time = next;
    }

    log::debug!(
        "Hour lines for latitude={}, declination={}: {} lines, {} lit",
        config.latitude,
        config.declination,
        lines.len(),
        lines.iter().filter(|l| l.angle_from_noon.is_some()).count()
    );

    Ok(HourLineLayout {
        config: *config,
        geometry,
        lines,
    })
}

pub fn layout_to_compact(layout: &HourLineLayout) -> Vec<(NaiveTime, Option<f64>)> {
    layout
        .lines
        .iter()
        .map(|l| (l.time, l.angle_from_noon))
        .collect()
}
