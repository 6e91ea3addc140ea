//! Headless soak run of the particle field.
//! Drives the simulator for a fixed number of frames at several surface
//! sizes, with a scripted pointer orbit, and reports population, link and
//! displacement statistics. Useful for eyeballing tuning changes without
//! opening a window.

use plexus_core::FieldConfig;
use plexus_sim::FieldState;

const FRAMES: u64 = 600;
const SEED: u64 = 7;

struct SoakReport {
    width: f32,
    height: f32,
    particles: usize,
    mean_links: f64,
    max_links: usize,
    mean_offset: f32,
    max_offset: f32,
}

fn soak(width: f32, height: f32) -> SoakReport {
    let config = FieldConfig {
        seed: SEED,
        ..FieldConfig::default()
    };

    let mut field = FieldState::new(config);
    field.handle_resize(width, height);
    let particles = field.particles.len();
    eprintln!("Soaking {width:.0}x{height:.0}: {particles} particles...");

    let mut link_total = 0usize;
    let mut max_links = 0usize;

    for frame in 0..FRAMES {
        // Pointer orbits the surface center, crossing the field twice
        let t = frame as f32 * 0.05;
        field.handle_pointer_move(
            width * 0.5 + t.cos() * width * 0.25,
            height * 0.5 + t.sin() * height * 0.25,
        );
        field.tick();

        let links = field.links().len();
        link_total += links;
        max_links = max_links.max(links);
    }

    let offsets: Vec<f32> = field.particles.iter().map(|p| p.offset_from_base()).collect();
    let mean_offset = if offsets.is_empty() {
        0.0
    } else {
        offsets.iter().sum::<f32>() / offsets.len() as f32
    };
    let max_offset = offsets.iter().copied().fold(0.0, f32::max);

    SoakReport {
        width,
        height,
        particles,
        mean_links: link_total as f64 / FRAMES as f64,
        max_links,
        mean_offset,
        max_offset,
    }
}

fn main() {
    let sizes = [
        (640.0, 480.0),
        (900.0, 900.0),
        (1280.0, 720.0),
        (1920.0, 1080.0),
        (2560.0, 1440.0),
    ];

    let reports: Vec<SoakReport> = sizes.iter().map(|&(w, h)| soak(w, h)).collect();
    eprintln!("Done. {FRAMES} frames per surface, seed {SEED}.");

    println!();
    println!(
        "{:>11} {:>10} {:>11} {:>10} {:>12} {:>11}",
        "surface", "particles", "mean links", "max links", "mean offset", "max offset"
    );
    for r in &reports {
        println!(
            "{:>11} {:>10} {:>11.1} {:>10} {:>12.2} {:>11.2}",
            format!("{:.0}x{:.0}", r.width, r.height),
            r.particles,
            r.mean_links,
            r.max_links,
            r.mean_offset,
            r.max_offset,
        );
    }
    println!();
    println!(
        "Population scales with area: {}",
        reports
            .iter()
            .map(|r| format!("{:.0}px^2/particle", r.width * r.height / r.particles.max(1) as f32))
            .collect::<Vec<_>>()
            .join(", ")
    );
}
