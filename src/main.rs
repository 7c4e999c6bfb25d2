use std::time::{Duration, Instant};

use clap::Parser;
use kurbo::{Point, Rect};
use tracing_subscriber::EnvFilter;

use tooltip_sim::config::TipConfig;
use tooltip_sim::page::Page;
use tooltip_sim::session::ViewerSession;
use tooltip_sim::viewport::Viewport;

/// Replay a scripted pointer path over a demo annotated page and print
/// the tooltip panel timeline.
#[derive(Parser)]
#[command(name = "tip-sim", about = "Hover tooltip overlay simulator")]
struct Args {
    /// Viewport width in pixels.
    #[arg(long, default_value_t = 1024.0)]
    width: f64,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = 768.0)]
    height: f64,

    /// Disable follow-mouse mode: the panel reveals immediately and
    /// stays where the hover began.
    #[arg(long)]
    no_follow: bool,

    /// Override the auto-hide delay in seconds.
    #[arg(long)]
    hide_after: Option<f64>,

    /// Load settings from a JSON config file instead of the defaults.
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    /// Replay speed multiplier (10 = ten times faster than real time).
    #[arg(long, default_value_t = 10.0)]
    speed: f64,
}

fn main() -> tooltip_sim::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => TipConfig::load_from(path)?,
        None => TipConfig::default(),
    };
    if args.no_follow {
        config.follow_mouse = false;
    }
    if let Some(secs) = args.hide_after {
        config.hide_after_secs = secs;
    }

    let session = ViewerSession::new(config, demo_page(), Viewport::new(args.width, args.height));

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    runtime.block_on(replay(session, args.speed.max(0.01)));
    Ok(())
}

/// A page fragment with entity mentions, the kind of document the
/// overlay sits on.
fn demo_page() -> Page {
    let mut page = Page::new(1400.0, 2200.0);
    page.add_region(
        Rect::new(100.0, 80.0, 240.0, 100.0),
        "Geneva: city in Switzerland, pop. 203,856",
    );
    page.add_region(
        Rect::new(400.0, 80.0, 520.0, 100.0),
        "WHO: World Health Organization, United Nations agency",
    );
    page.add_rich_region(
        Rect::new(100.0, 140.0, 320.0, 160.0),
        "<b>Margaret Chan</b>: Director-General, 2007&#8211;2017",
    );
    // Short annotation: exercises the tight-panel rule.
    page.add_region(Rect::new(560.0, 140.0, 640.0, 160.0), "Founded 1863");
    // Mention near the right viewport edge: exercises the edge flip.
    page.add_region(
        Rect::new(900.0, 300.0, 1080.0, 320.0),
        "ICRC: International Committee of the Red Cross, Geneva",
    );
    page
}

async fn replay(mut session: ViewerSession, speed: f64) {
    // (ms, x, y) pointer path over the demo page
    const PATH: &[(u64, f64, f64)] = &[
        (0, 40.0, 30.0),
        (150, 150.0, 90.0),
        (400, 170.0, 95.0),
        (1300, 175.0, 95.0),
        (1600, 450.0, 90.0),
        (2700, 460.0, 95.0),
        (3000, 200.0, 150.0),
        (4100, 210.0, 152.0),
        (4400, 950.0, 310.0),
        (5500, 955.0, 312.0),
        (5800, 580.0, 150.0),
        (6900, 585.0, 152.0),
        (12000, 40.0, 600.0),
    ];

    println!(
        "Replaying {} pointer steps over {} regions (speed {}x)",
        PATH.len(),
        session.page().regions().len(),
        speed
    );

    let start = Instant::now();
    let mut sim_now = start;
    let mut last_line = String::new();
    report(0, &session, &mut last_line);

    for &(ms, x, y) in PATH {
        let event_at = start + Duration::from_millis(ms);

        // Let pending timers fire at their own moments first.
        while let Some(deadline) = session.next_deadline().filter(|&d| d <= event_at) {
            pace(sim_now, deadline, speed).await;
            sim_now = deadline;
            session.advance(deadline);
            report(millis_since(start, deadline), &session, &mut last_line);
        }

        pace(sim_now, event_at, speed).await;
        sim_now = event_at;
        session.pointer_moved(Point::new(x, y), event_at);
        report(ms, &session, &mut last_line);
    }

    println!("Replay done");
}

/// Sleep out the simulated gap, scaled down by the speed factor.
async fn pace(from: Instant, to: Instant, speed: f64) {
    let gap = to.saturating_duration_since(from);
    if gap > Duration::ZERO {
        tokio::time::sleep(gap.div_f64(speed)).await;
    }
}

fn millis_since(start: Instant, at: Instant) -> u64 {
    at.saturating_duration_since(start).as_millis() as u64
}

fn report(ms: u64, session: &ViewerSession, last_line: &mut String) {
    let line = session.describe();
    if line != *last_line {
        println!("[{ms:>6} ms] {line}");
        *last_line = line;
    }
}
