use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use dunjia_base::{Direction, calendar_indices, pillar_name};
use dunjia_chart::{AnimationCoefficients, PatternFlag, score_facing};
use dunjia_rs::{
    ChartInput, ChartOutput, GeoPoint, ScorePrecision, Settings, compute, load_profile,
    parse_civil, sample_display_score,
};
use dunjia_time::{NaiveDateTime, format_civil, true_solar_time};

#[derive(Parser)]
#[command(name = "dunjia", about = "Directional chart CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full chart: plate, scores, facing and personal overlay
    Chart {
        /// Civil time (YYYY-MM-DDThh:mm:ss)
        #[arg(long)]
        time: String,
        /// Latitude in degrees
        #[arg(long, default_value = "37.5665", allow_negative_numbers = true)]
        lat: f64,
        /// Longitude in degrees
        #[arg(long, default_value = "126.978", allow_negative_numbers = true)]
        lng: f64,
        /// Compass heading in degrees
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        heading: f64,
        /// Settings JSON file
        #[arg(long)]
        settings: Option<PathBuf>,
        /// User profile JSON file (guest mode when omitted)
        #[arg(long)]
        profile: Option<PathBuf>,
        /// Show whole-number scores instead of open/closed wording
        #[arg(long)]
        high_precision: bool,
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
    /// True solar time for a civil time and longitude
    Solar {
        /// Civil time (YYYY-MM-DDThh:mm:ss)
        #[arg(long)]
        time: String,
        /// Longitude in degrees
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,
        /// Time zone offset in whole hours
        #[arg(long, default_value = "9", allow_negative_numbers = true)]
        tz: i32,
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
    /// Day/hour calendar indices for a timestamp (no solar correction)
    Calendar {
        /// Timestamp (YYYY-MM-DDThh:mm:ss)
        #[arg(long)]
        time: String,
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
    /// Facing score for a heading and two-hour period
    Facing {
        /// Compass heading in degrees
        #[arg(allow_negative_numbers = true)]
        heading: f64,
        /// Two-hour period index (0-11)
        #[arg(long)]
        period: u8,
        /// Apply magnetic declination
        #[arg(long)]
        magnetic: bool,
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
    /// Displayed score at one instant for given animation coefficients
    Sample {
        /// Base score
        #[arg(long)]
        score: f64,
        /// Direction label (N, NE, ... NW)
        #[arg(long, default_value = "N")]
        direction: String,
        #[arg(long, default_value = "1.0")]
        frequency: f64,
        #[arg(long, default_value = "2.5")]
        amplitude: f64,
        /// Sample time (YYYY-MM-DDThh:mm:ss[.fff])
        #[arg(long)]
        time: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Chart {
            time,
            lat,
            lng,
            heading,
            settings,
            profile,
            high_precision,
            json,
        } => {
            let mut settings = match settings {
                Some(path) => Settings::from_file(&path).unwrap_or_else(|e| {
                    eprintln!("Failed to load settings: {e}");
                    std::process::exit(1);
                }),
                None => Settings::default(),
            };
            if high_precision {
                settings.score_precision = ScorePrecision::High;
            }
            let user = profile.map(|path| {
                load_profile(&path).unwrap_or_else(|e| {
                    eprintln!("Failed to load profile: {e}");
                    std::process::exit(1);
                })
            });
            let input = ChartInput {
                time: require_time(&time),
                location: GeoPoint { lat, lng },
                heading_deg: heading,
                user,
                settings,
            };
            let out = compute(&input);
            if json {
                print_json(&out);
            } else {
                print_chart(&out);
            }
        }

        Commands::Solar {
            time,
            lng,
            tz,
            json,
        } => {
            let s = true_solar_time(require_time(&time), lng, tz);
            if json {
                print_json(&s);
            } else {
                println!("Standard:   {}", format_civil(&s.standard));
                println!("True solar: {}", format_civil(&s.true_solar));
                println!("Longitude correction: {:+.2} min", s.longitude_correction_min);
                println!("Equation of time:     {:+.2} min", s.equation_of_time_min);
            }
        }

        Commands::Calendar { time, json } => {
            let idx = calendar_indices(&require_time(&time));
            if json {
                print_json(&idx);
            } else {
                println!("Day pillar:  {}", pillar_name(idx.day_stem(), idx.day_branch()));
                println!("Hour pillar: {}", pillar_name(idx.hour_stem(), idx.hour_branch()));
                println!("Period:      {}", idx.period);
                match idx.void_branches {
                    Some([a, b]) => println!("Void:        {a}, {b}"),
                    None => println!("Void:        none"),
                }
                println!("Clash:       {}", idx.clash_branch);
            }
        }

        Commands::Facing {
            heading,
            period,
            magnetic,
            json,
        } => {
            if period > 11 {
                eprintln!("Invalid period: {period} (0-11)");
                std::process::exit(1);
            }
            let f = score_facing(heading, period, magnetic);
            if json {
                print_json(&f);
            } else {
                println!("{}", f.summary());
                println!("Heading: {:.1} deg, octant {}", f.heading_deg, f.octant.name());
                println!("Score: {}", f.score);
                let details = f.details();
                if !details.is_empty() {
                    println!("{details}");
                }
            }
        }

        Commands::Sample {
            score,
            direction,
            frequency,
            amplitude,
            time,
        } => {
            let direction = Direction::parse(&direction).unwrap_or_else(|| {
                eprintln!("Invalid direction: {direction} (N, NE, E, SE, S, SW, W, NW)");
                std::process::exit(1);
            });
            let coeff = AnimationCoefficients {
                direction,
                frequency,
                amplitude,
            };
            let shown = sample_display_score(score, &coeff, &require_time(&time));
            println!("{shown:.3}");
        }
    }
}

fn require_time(s: &str) -> NaiveDateTime {
    parse_civil(s).unwrap_or_else(|e| {
        eprintln!("Invalid time: {e}");
        std::process::exit(1);
    })
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("Failed to serialize: {e}");
            std::process::exit(1);
        }
    }
}

fn print_chart(out: &ChartOutput) {
    println!("{}", out.summary.chart);
    println!("{}", out.summary.subject);
    if let Some(notice) = &out.summary.notice {
        println!("{notice}");
    }
    println!(
        "Day {}  Hour {}",
        pillar_name(out.indices.day_stem(), out.indices.day_branch()),
        pillar_name(out.indices.hour_stem(), out.indices.hour_branch())
    );
    println!();
    println!("Dir  Palace Gate     Star   Score  State         Personal  Flags");
    for p in &out.palaces {
        let cell = out.chart.cell(p.direction);
        let mut flags = Vec::new();
        if cell.is_void {
            flags.push("void");
        }
        if cell.is_clash {
            flags.push("clash");
        }
        if let Some(sp) = cell.counted_pattern() {
            flags.push(sp.key);
        }
        flags.push(cell.pattern.name());
        println!(
            "{:<4} {:<6} {:<5}{}  {:<6} {:>5.1}  {:<13} {:>8}  {}",
            p.direction.name(),
            p.palace,
            cell.gate.name(),
            p.gate_hanja,
            cell.star.name(),
            p.score,
            p.label,
            p.personal,
            flags.join(",")
        );
    }
    println!();
    for (label, flag) in [
        ("Favorable", PatternFlag::Favorable),
        ("Unfavorable", PatternFlag::Unfavorable),
    ] {
        let dirs: Vec<&str> = out
            .chart
            .directions_with(flag)
            .into_iter()
            .map(|d| d.name())
            .collect();
        if !dirs.is_empty() {
            println!("{label}: {}", dirs.join(", "));
        }
    }
    println!("Best direction: {}", out.best_direction().name());
    println!(
        "Facing: {} - score {} {}",
        out.summary.facing,
        out.facing.score,
        out.facing.details()
    );
}
