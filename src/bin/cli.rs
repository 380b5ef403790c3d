//! CLI application for body measurement and size recommendation.
//!
//! Usage:
//!   fitscan <landmarks.json> --height-cm 175              # Human-readable output
//!   fitscan <landmarks.json> --paper-px 410 --json        # JSON output
//!   fitscan <landmarks.json> --height-cm 175 -o out.json  # Save to file

use clap::Parser;
use fitscan::{analyze, Analysis, Calibration, Garment, Point};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fitscan")]
#[command(author, version, about = "Body measurements and garment size recommendation from pose landmarks", long_about = None)]
struct Args {
    /// JSON file with the pose landmark sequence: [{"x": .., "y": ..}, ...]
    #[arg(required = true)]
    landmarks: PathBuf,

    /// Declared standing height in centimeters
    #[arg(long, value_name = "CM", conflicts_with = "paper_px")]
    height_cm: Option<f32>,

    /// Vertical pixel span of an A4 reference sheet in the photo
    #[arg(long, value_name = "PX")]
    paper_px: Option<f32>,

    /// Garment category: t-shirt, hoodie, oversized hoodie, jacket
    #[arg(short, long, default_value = "t-shirt")]
    garment: String,

    /// Output as JSON
    #[arg(short, long)]
    json: bool,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    if args.verbose {
        eprintln!("Loading landmarks from {:?}...", args.landmarks);
    }
    let raw = std::fs::read_to_string(&args.landmarks)?;
    let points: Vec<Point> = serde_json::from_str(&raw)?;

    if args.verbose {
        eprintln!("Loaded {} landmark point(s)", points.len());
    }

    let calibration = match (args.height_cm, args.paper_px) {
        (Some(cm), _) => Calibration::Height { value_cm: cm },
        (None, Some(px)) => Calibration::PaperReference { pixel_height: px },
        (None, None) => return Err("either --height-cm or --paper-px is required".into()),
    };

    let garment = Garment::from_label(&args.garment);
    let analysis = analyze(&points, &calibration, garment)?;

    let output_str = if args.json {
        serde_json::to_string_pretty(&analysis)?
    } else {
        format_human_readable(&analysis, garment)
    };

    if let Some(ref path) = args.output {
        std::fs::write(path, &output_str)?;
        if args.verbose {
            eprintln!("Output written to {:?}", path);
        }
    } else {
        println!("{}", output_str);
    }

    Ok(())
}

fn format_human_readable(analysis: &Analysis, garment: Garment) -> String {
    let mut s = String::new();

    s.push_str(&format!("Garment: {}\n", garment));
    s.push_str(&format!("Recommended size: {}\n", analysis.recommended_size));
    s.push_str(&format!("Body type: {}\n", analysis.body_type));
    s.push_str(&format!("Arm type: {}\n", analysis.arm_type));

    let m = &analysis.measurements;
    let r = &analysis.reference;
    s.push_str(&format!(
        "\nMeasurements (vs size {} reference):\n",
        analysis.recommended_size
    ));
    s.push_str(&format!(
        "  Shoulder: {:>5.1} in  (ref {:.1})\n",
        m.shoulder, r.shoulder
    ));
    s.push_str(&format!(
        "  Chest:    {:>5.1} in  (ref {:.1})\n",
        m.chest, r.chest
    ));
    s.push_str(&format!("  Arm:      {:>5.1} in  (ref {:.1})\n", m.arm, r.arm));
    s.push_str(&format!(
        "  Length:   {:>5.1} in  (ref {:.1})\n",
        m.length, r.length
    ));

    if let Some(ratios) = m.ratios {
        s.push_str("\nProportions:\n");
        s.push_str(&format!(
            "  Shoulder/torso: {:.3}\n",
            ratios.shoulder_to_torso
        ));
        s.push_str(&format!("  Hip/torso:      {:.3}\n", ratios.hip_to_torso));
        s.push_str(&format!("  Arm/torso:      {:.3}\n", ratios.arm_to_torso));
    }

    if let Some(cmp) = analysis.comparison {
        s.push_str("\nFit against the charted cut:\n");
        s.push_str(&format!(
            "  Shoulder/torso: {} ({:+.3} vs ideal {:.2})\n",
            cmp.shoulder_to_torso.status,
            cmp.shoulder_to_torso.difference,
            cmp.shoulder_to_torso.ideal
        ));
        s.push_str(&format!(
            "  Arm/torso:      {} ({:+.3} vs ideal {:.2})\n",
            cmp.arm_to_torso.status, cmp.arm_to_torso.difference, cmp.arm_to_torso.ideal
        ));
    }

    if !analysis.warnings.is_empty() {
        s.push_str("\nWarnings:\n");
        for warning in &analysis.warnings {
            s.push_str(&format!("  - {}\n", warning));
        }
    }

    s
}
