pub mod angles;
pub mod error;
pub mod hour_lines;
pub mod types;

pub use angles::{
    angle_av, deg_to_rad, dial_geometry, longitude_difference, normalize_hour_angle, rad_to_deg,
    style_height, sub_style_distance,
};

pub use error::{Quantity, Singularity, SundialError, SundialResult};

pub use hour_lines::{
    generate_hour_lines, hour_angle_for_time, hour_line_at, layout_to_compact, DEGREES_PER_HOUR,
};

pub use types::{DialGeometry, HourLine, HourLineConfig, HourLineLayout};
