use auto_keepout::config::load_config;
use auto_keepout::image::io::{
    load_intensity_grid, save_cluster_overlay, save_edge_overlay, save_grayscale_grid,
    save_hull_overlay, write_json_file,
};
use auto_keepout::KeepoutDetector;
use log::info;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))
        .map_err(|e| format!("Failed to load config {config_path}: {e}"))?;

    let grid = load_intensity_grid(&config.input)
        .map_err(|e| format!("Failed to load {}: {e}", config.input.display()))?;
    let detector = KeepoutDetector::new(config.params);
    let out = detector
        .process(&grid)
        .map_err(|e| format!("Keepout detection failed: {e}"))?;

    let saved = |what: &str, path: &Path| info!("Saved {what} to {}", path.display());
    let failed = |path: &Path, e: auto_keepout::KeepoutError| {
        format!("Failed to write {}: {e}", path.display())
    };

    let output = &config.output;
    if let Some(path) = &output.flood_fill_image {
        save_grayscale_grid(&out.flood_filled, path).map_err(|e| failed(path, e))?;
        saved("flood fill image", path);
    }
    if let Some(path) = &output.smoothed_image {
        save_grayscale_grid(&out.smoothed, path).map_err(|e| failed(path, e))?;
        saved("smoothed image", path);
    }
    if let Some(path) = &output.edges_image {
        save_edge_overlay(&out.smoothed, &out.field, path).map_err(|e| failed(path, e))?;
        saved("edge overlay", path);
    }
    if let Some(path) = &output.clusters_image {
        save_cluster_overlay(&out.smoothed, &out.field, path).map_err(|e| failed(path, e))?;
        saved("cluster overlay", path);
    }
    if let Some(path) = &output.hull_image {
        save_hull_overlay(&out.smoothed, &out.field, &out.hulls, path)
            .map_err(|e| failed(path, e))?;
        saved("hull overlay", path);
    }
    if let Some(path) = &output.report_json {
        write_json_file(path, &out.report).map_err(|e| failed(path, e))?;
        saved("report", path);
    }

    let report = &out.report;
    println!(
        "{}x{}: {} local maxima, {} keepout zones, {} hull vertices in {:.3} ms",
        report.input.width,
        report.input.height,
        report.local_max_count,
        report.cluster_count,
        report.vertex_count(),
        report.timings.total_ms
    );
    for zone in &report.zones {
        println!(
            "  zone {:>3}: {:>5} points, {:>3} vertices",
            zone.cluster_id,
            zone.point_count,
            zone.vertices.len()
        );
    }

    Ok(())
}

fn usage() -> String {
    "Usage: auto_keepout <config.json>".to_string()
}
