use crate::error::{Quantity, Singularity, SundialError, SundialResult};
use crate::types::DialGeometry;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

/// Wraps an angle into (-180, 180].
pub fn normalize_hour_angle(angle: f64) -> f64 {
    let wrapped = (angle + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped == -180.0 {
        180.0
    } else {
        wrapped
    }
}

fn is_multiple_of_180(deg: f64) -> bool {
    deg.rem_euclid(180.0) == 0.0
}

fn is_odd_multiple_of_90(deg: f64) -> bool {
    (deg - 90.0).rem_euclid(180.0) == 0.0
}

fn check_finite(quantity: Quantity, latitude: f64, declination: f64) -> SundialResult<()> {
    if latitude.is_finite() && declination.is_finite() {
        Ok(())
    } else {
        Err(SundialError::domain(
            quantity,
            latitude,
            declination,
            Singularity::NonFiniteInput,
        ))
    }
}

/// Sub-style distance SD, Eq. (1): tan SD = sin D · cot φ.
pub fn sub_style_distance(latitude: f64, declination: f64) -> SundialResult<f64> {
    let quantity = Quantity::SubStyleDistance;
    check_finite(quantity, latitude, declination)?;
    if is_multiple_of_180(latitude) {
        return Err(SundialError::domain(
            quantity,
            latitude,
            declination,
            Singularity::UndefinedCotangent,
        ));
    }

    let sin_decl = deg_to_rad(declination).sin();
    let cot_lat = 1.0 / deg_to_rad(latitude).tan();
    let tan_sd = sin_decl * cot_lat;
    Ok(rad_to_deg(tan_sd.atan()))
}

/// Style height SH, Eq. (2): sin SH = cos D · cos φ.
pub fn style_height(latitude: f64, declination: f64) -> SundialResult<f64> {
    let quantity = Quantity::StyleHeight;
    check_finite(quantity, latitude, declination)?;

    let sin_sh = deg_to_rad(declination).cos() * deg_to_rad(latitude).cos();
    if !(-1.0..=1.0).contains(&sin_sh) {
        return Err(SundialError::domain(
            quantity,
            latitude,
            declination,
            Singularity::ArcsineOutOfRange,
        ));
    }
    Ok(rad_to_deg(sin_sh.asin()))
}

/// Longitude difference DL, Eq. (3): cot DL = cot D · sin φ.
pub fn longitude_difference(latitude: f64, declination: f64) -> SundialResult<f64> {
    let quantity = Quantity::LongitudeDifference;
    check_finite(quantity, latitude, declination)?;
    if is_multiple_of_180(declination) {
        return Err(SundialError::domain(
            quantity,
            latitude,
            declination,
            Singularity::UndefinedCotangent,
        ));
    }

    let cot_decl = 1.0 / deg_to_rad(declination).tan();
    let cot_dl = cot_decl * deg_to_rad(latitude).sin();
    if is_odd_multiple_of_90(declination) || is_multiple_of_180(latitude) || cot_dl == 0.0 {
        return Err(SundialError::domain(
            quantity,
            latitude,
            declination,
            Singularity::ZeroReciprocal,
        ));
    }
    Ok(rad_to_deg((1.0 / cot_dl).atan()))
}

/// Angle AV between the XII and VI lines, Eq. (4): cot AV = sin D · tan φ.
pub fn angle_av(latitude: f64, declination: f64) -> SundialResult<f64> {
    let quantity = Quantity::AngleAv;
    check_finite(quantity, latitude, declination)?;
    if is_odd_multiple_of_90(latitude) {
        return Err(SundialError::domain(
            quantity,
            latitude,
            declination,
            Singularity::UndefinedTangent,
        ));
    }

    let cot_av = deg_to_rad(declination).sin() * deg_to_rad(latitude).tan();
    if is_multiple_of_180(declination) || is_multiple_of_180(latitude) || cot_av == 0.0 {
        return Err(SundialError::domain(
            quantity,
            latitude,
            declination,
            Singularity::ZeroReciprocal,
        ));
    }
    Ok(rad_to_deg((1.0 / cot_av).atan()))
}

pub fn dial_geometry(latitude: f64, declination: f64) -> SundialResult<DialGeometry> {
    Ok(DialGeometry {
        latitude,
        declination,
        sub_style_distance: sub_style_distance(latitude, declination)?,
        style_height: style_height(latitude, declination)?,
        longitude_difference: longitude_difference(latitude, declination)?,
        angle_av: angle_av(latitude, declination)?,
    })
}
