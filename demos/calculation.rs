use declining_dial::angles::dial_geometry;
use declining_dial::error::SundialResult;
use declining_dial::hour_lines::generate_hour_lines;
use declining_dial::types::HourLineConfig;

fn main() -> SundialResult<()> {
    let config = HourLineConfig {
        latitude: 51.5,
        declination: 20.0,
        ..HourLineConfig::default()
    };

    let g = dial_geometry(config.latitude, config.declination)?;

    println!("=== Vertical Declining Dial ===");
    println!(
        "Latitude: {:.1}°, wall declination: {:.1}° {}",
        g.latitude,
        g.declination.abs(),
        if g.declination >= 0.0 { "W" } else { "E" }
    );
    println!();
    println!("--- Dial Geometry ---");
    println!("Sub-style distance: {:.2}°", g.sub_style_distance);
    println!("Style height: {:.2}°", g.style_height);
    println!("Longitude difference: {:.2}°", g.longitude_difference);
    println!("Angle XII-VI (AV): {:.2}°", g.angle_av);
    println!();

    let layout = generate_hour_lines(&config)?;
    println!("--- Hour Lines (from noon line, + = afternoon side) ---");
    for line in &layout.lines {
        match line.angle_from_noon {
            Some(angle) => println!("{}  {:>8.2}°", line.time.format("%H:%M"), angle),
            None => println!("{}  (sun behind wall)", line.time.format("%H:%M")),
        }
    }
    Ok(())
}
