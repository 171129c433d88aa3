use clap::Parser;
use cyclone_sim_core::{
    IrImage, SimulationEngine, Trend, UnknownArchetypePolicy,
};
use std::path::PathBuf;

/// Cyclone evolution simulation demo with configurable parameters
#[derive(Parser, Debug)]
#[command(name = "cyclone-sim-demo")]
#[command(about = "Synthetic tropical cyclone evolution demo", long_about = None)]
struct Args {
    /// Simulation archetype (developing_cyclone, rapid_intensification,
    /// eye_formation, weakening_system)
    #[arg(short, long, default_value = "developing_cyclone")]
    archetype: String,

    /// Number of frames to generate (2-8)
    #[arg(short = 'n', long, default_value_t = 4)]
    frames: u32,

    /// Random seed for reproducible output (fresh entropy seed if omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Directory of real sample images to prefer over procedural synthesis
    #[arg(long)]
    dataset: Option<PathBuf>,

    /// Write the generated PNG frames into this directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Run a comparison against a second archetype
    #[arg(long)]
    compare: Option<String>,

    /// Print the detailed analysis of one frame (1-based id)
    #[arg(long)]
    frame: Option<u32>,

    /// Resolve unknown archetype ids to developing_cyclone instead of
    /// rejecting them
    #[arg(long)]
    lenient: bool,

    /// List the available archetypes and exit
    #[arg(short, long)]
    list: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut engine = match args.seed {
        Some(seed) => SimulationEngine::seeded(seed),
        None => SimulationEngine::new(),
    };
    if args.lenient {
        engine = engine.with_unknown_archetype_policy(UnknownArchetypePolicy::Fallback);
    }
    if let Some(dataset) = &args.dataset {
        engine = engine.with_sample_dataset(dataset);
    }

    if args.list {
        println!("=== Available archetypes ===\n");
        for info in engine.list_archetypes() {
            println!(
                "{:<24} {} ({}h, {:?})",
                info.id, info.name, info.duration_hours, info.difficulty
            );
            println!("{:<24} {}", "", info.description);
            println!("{:<24} key features: {}\n", "", info.key_features.join(", "));
        }
        return;
    }

    println!("=== Cyclone Evolution Simulation ===\n");

    let simulation = match engine.generate(&args.archetype, args.frames) {
        Ok(simulation) => simulation,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    println!("{} ({})", simulation.template.name, simulation.template.id);
    println!("{}", simulation.template.description);
    println!(
        "Frames: {}, duration: {} minutes, start: {}\n",
        simulation.frame_count,
        simulation.total_duration_minutes,
        simulation.template.base_timestamp.format("%Y-%m-%d %H:%MZ")
    );

    println!(
        "{:<3} {:<18} {:>9} {:>10} {:>9} {:>6} {:<9} {:>5}",
        "#", "timestamp", "coverage", "area", "temp", "risk", "level", "conf"
    );
    for frame in &simulation.frames {
        let m = &frame.metrics;
        println!(
            "{:<3} {:<18} {:>9} {:>10} {:>9} {:>6} {:<9} {:>4}%",
            frame.frame_id,
            frame.timestamp.format("%m-%d %H:%M"),
            m.coverage_percent.to_string(),
            m.cluster_area_km2.to_string(),
            m.cloud_top_temp_c.to_string(),
            m.risk_score,
            m.risk_level.to_string(),
            m.model_confidence
        );
        println!("    {}", frame.analysis);
    }

    // Per-frame trend summary after the first frame
    println!("\nTrend:");
    for index in 1..simulation.frames.len() {
        let report = cyclone_sim_core::trend::trend(&simulation.frames, index);
        if report.trend != Trend::Stable {
            println!(
                "  frame {}: {:?} (risk {:+}, area {:+} km²)",
                index + 1,
                report.trend,
                report.risk_change,
                report.area_change
            );
        }
    }

    if let Some(frame_id) = args.frame {
        match engine.analyze_frame(&args.archetype, args.frames, frame_id) {
            Ok(analysis) => {
                println!("\n=== Frame {frame_id} detailed analysis ===");
                let detail = &analysis.detailed_analysis;
                println!("Stage: {}", detail.development_stage);
                println!("  {}", detail.temperature_analysis);
                println!("  {}", detail.coverage_analysis);
                println!("  {}", detail.size_analysis);
                for indicator in &detail.intensity_indicators {
                    println!("  - {indicator}");
                }
                let risk = &analysis.risk_assessment;
                println!("Threat: {}", risk.immediate_threat);
                println!("Horizon: {}", risk.time_horizon);
                println!("Next steps: {}", analysis.next_steps);
            }
            Err(err) => eprintln!("error: {err}"),
        }
    }

    if let Some(other) = &args.compare {
        let ids = [args.archetype.as_str(), other.as_str()];
        match engine.compare(&ids, args.frames) {
            Ok(result) => {
                println!("\n=== Comparison ===");
                for entry in &result.per_simulation {
                    let s = &entry.summary_metrics;
                    println!(
                        "{:<24} peak risk {:>2}, risk change {:+}, area growth {:+} km², avg rate {:.1}/frame",
                        entry.archetype_id, s.peak_risk, s.risk_increase, s.area_growth,
                        s.avg_intensification_rate
                    );
                }
                for insight in &result.insights {
                    println!("  * {insight}");
                }
            }
            Err(err) => eprintln!("error: {err}"),
        }
    }

    if let Some(output) = &args.output {
        if let Err(err) = write_frames(output, &simulation) {
            eprintln!("error: failed to write frames: {err}");
            std::process::exit(1);
        }
        println!("\nWrote frame images to {}", output.display());
    }
}

fn write_frames(
    dir: &std::path::Path,
    simulation: &cyclone_sim_core::Simulation,
) -> std::io::Result<()> {
    std::fs::create_dir_all(dir)?;
    for frame in &simulation.frames {
        match &frame.ir_image {
            IrImage::Synthetic { png } => {
                std::fs::write(dir.join(format!("frame_{:02}_ir.png", frame.frame_id)), png)?;
            }
            IrImage::Sample { file_name } => {
                println!("  frame {} uses dataset sample {file_name}", frame.frame_id);
            }
        }
        std::fs::write(
            dir.join(format!("frame_{:02}_mask.png", frame.frame_id)),
            &frame.mask_overlay,
        )?;
    }
    Ok(())
}
