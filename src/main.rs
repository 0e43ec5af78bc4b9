//! Terminal front for the Drip City browse engine.
//!
//! A line-command demo driver around the library: stdin lines are translated
//! into reducer events, fetch actions are spawned as tokio tasks, and their
//! completions flow back into the same event channel. Because each search
//! keystroke issues its own fetch, typing `search wax` puts several requests
//! in flight at once and the stale-response guard is exercised for real.
//!
//! # Event Flow
//!
//! ```text
//! stdin thread ──parse──▶ mpsc channel ──▶ reducers ──▶ actions
//!      ▲                        ▲                          │
//!      │                        └── spawned fetch tasks ◀──┘
//! ```
//!
//! # Commands
//!
//! - `search <text>`: replay the text as search keystrokes (refetch each)
//! - `esc`: leave search mode and clear the query
//! - `cat <label>`: toggle a category chip (exact label)
//! - `verified` / `v`: toggle the verified-vendors filter
//! - `filters` / `f`: open or close the filter panel
//! - `clear` / `c`: reset all filters and refetch
//! - `j` / `k`: move the selection
//! - `home`: show the landing-page banner (stats + testimonial)
//! - `subscribe <email>`: newsletter signup flow
//! - `join vendor` / `join buyer` / `explore` / `start`: engagement flows
//! - `q`: quit
//!
//! # Configuration
//!
//! Environment variables, all optional: `DRIPCITY_CATALOG_FILE`,
//! `DRIPCITY_THEME`, `DRIPCITY_THEME_FILE`, `DRIPCITY_TRACE_LEVEL`,
//! `DRIPCITY_LATENCY_MS`. `DRIPCITY_LATENCY_MS=0` makes the demo instant.

use std::io::{BufRead, Write};

use dripcity::app::{handle_event, Action, BrowseState, Event};
use dripcity::domain::EngagementKind;
use dripcity::fetch::FetchCoordinator;
use dripcity::landing::{self, LandingState};
use dripcity::{build_source, initialize, observability, Config};
use futures_util::future;
use tokio::sync::mpsc::{self, UnboundedSender};

/// Events flowing through the front-end channel.
#[derive(Debug, Clone, PartialEq)]
enum FrontEvent {
    /// Browse-page reducer event.
    Browse(Event),
    /// Landing-page reducer event.
    Landing(landing::Event),
    /// Print the landing banner from current state.
    ShowLanding,
    /// Repaint the browse page.
    Redraw,
}

fn main() -> dripcity::Result<()> {
    let config = Config::from_env();
    observability::init_tracing(&config);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run(&config))
}

/// Builds the engine, performs the bootstrap fetches, and runs the loop.
async fn run(config: &Config) -> dripcity::Result<()> {
    let source = build_source(config)?;
    let api = FetchCoordinator::with_latency(source, config.latency());
    let mut browse = initialize(config);
    let mut landing_state = LandingState::default();

    let (tx, mut rx) = mpsc::unbounded_channel::<FrontEvent>();
    spawn_stdin_reader(tx.clone());

    // Bootstrap: products and categories load together, like the page does.
    let seq = browse.begin_fetch();
    redraw(&browse);
    let (categories, items) = future::join(api.fetch_categories(), api.fetch_items(&browse.filter)).await;
    handle_event(
        &mut browse,
        &Event::CategoriesFetched {
            result: categories.map_err(|e| e.to_string()),
        },
    )?;
    handle_event(
        &mut browse,
        &Event::ItemsFetched {
            seq,
            result: items.map_err(|e| e.to_string()),
        },
    )?;
    redraw(&browse);

    // Landing content loads in the background and announces itself when done.
    execute_landing_action(&api, &tx, landing::Action::FetchContent);

    // Testimonial carousel: advance every five seconds, same cadence as the
    // web page. The reducer ignores ticks until content arrives.
    {
        let tx = tx.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(std::time::Duration::from_secs(5));
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let tick = FrontEvent::Landing(landing::Event::TestimonialTick);
                if tx.send(tick).is_err() {
                    break;
                }
            }
        });
    }

    while let Some(front_event) = rx.recv().await {
        match front_event {
            FrontEvent::Browse(event) => {
                let (should_render, actions) = handle_event(&mut browse, &event)?;
                let mut quit = false;
                for action in actions {
                    quit |= execute_browse_action(&api, &tx, action);
                }
                if should_render {
                    redraw(&browse);
                }
                if quit {
                    break;
                }
            }
            FrontEvent::Landing(event) => {
                let (changed, actions) = landing::handle_event(&mut landing_state, &event)?;
                for action in actions {
                    execute_landing_action(&api, &tx, action);
                }
                if changed {
                    print_landing_status(&landing_state, &event);
                }
            }
            FrontEvent::ShowLanding => print_landing_banner(&landing_state),
            FrontEvent::Redraw => redraw(&browse),
        }
    }

    Ok(())
}

/// Executes a browse action; returns `true` when the loop should stop.
///
/// Fetches are spawned, not awaited: the loop keeps accepting input while
/// they run, which is what allows them to overlap and resolve out of order.
fn execute_browse_action(
    api: &FetchCoordinator,
    tx: &UnboundedSender<FrontEvent>,
    action: Action,
) -> bool {
    match action {
        Action::FetchItems { seq, filter } => {
            let api = api.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let result = api.fetch_items(&filter).await.map_err(|e| e.to_string());
                let _ = tx.send(FrontEvent::Browse(Event::ItemsFetched { seq, result }));
            });
            false
        }
        Action::FetchCategories => {
            let api = api.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let result = api.fetch_categories().await.map_err(|e| e.to_string());
                let _ = tx.send(FrontEvent::Browse(Event::CategoriesFetched { result }));
            });
            false
        }
        Action::Quit => true,
    }
}

/// Executes a landing action by spawning the matching endpoint call.
fn execute_landing_action(
    api: &FetchCoordinator,
    tx: &UnboundedSender<FrontEvent>,
    action: landing::Action,
) {
    match action {
        landing::Action::FetchContent => {
            let api = api.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let result = future::try_join(api.fetch_stats(), api.fetch_testimonials())
                    .await
                    .map_err(|e| e.to_string());
                let _ = tx.send(FrontEvent::Landing(landing::Event::ContentLoaded { result }));
            });
        }
        landing::Action::SubmitNewsletter { email } => {
            let api = api.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let result = api.submit_newsletter(&email).await.map_err(|e| e.to_string());
                let _ = tx.send(FrontEvent::Landing(landing::Event::NewsletterResult { result }));
            });
        }
        landing::Action::Engage(kind) => {
            let api = api.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let result = api.engage(kind).await.map_err(|e| e.to_string());
                let _ = tx.send(FrontEvent::Landing(landing::Event::EngageResult { result }));
            });
        }
    }
}

/// Reads stdin lines on a dedicated thread and feeds parsed events into the
/// channel. EOF quits, so piped scripts terminate cleanly.
fn spawn_stdin_reader(tx: UnboundedSender<FrontEvent>) {
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            for event in parse_command(line.trim()) {
                if tx.send(event).is_err() {
                    return;
                }
            }
        }
        let _ = tx.send(FrontEvent::Browse(Event::Quit));
    });
}

/// Translates one input line into front events.
///
/// `search <text>` expands into one keystroke event per character, which is
/// what makes the demo reproduce the page's fetch-per-keystroke behavior.
fn parse_command(line: &str) -> Vec<FrontEvent> {
    let (head, rest) = match line.split_once(' ') {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    match (head, rest) {
        ("", "") => vec![FrontEvent::Redraw],
        ("q" | "quit", _) => vec![FrontEvent::Browse(Event::Quit)],
        ("j", _) => vec![FrontEvent::Browse(Event::KeyDown)],
        ("k", _) => vec![FrontEvent::Browse(Event::KeyUp)],
        ("esc", _) => vec![FrontEvent::Browse(Event::ExitSearch)],
        ("filters" | "f", _) => vec![FrontEvent::Browse(Event::ToggleFilterPanel)],
        ("verified" | "v", _) => vec![FrontEvent::Browse(Event::ToggleVerified)],
        ("clear" | "c", _) => vec![FrontEvent::Browse(Event::ClearFilters)],
        ("cat", label) if !label.is_empty() => {
            vec![FrontEvent::Browse(Event::ToggleCategory(label.to_string()))]
        }
        ("search", text) => {
            let mut events = vec![FrontEvent::Browse(Event::SearchMode)];
            events.extend(text.chars().map(|c| FrontEvent::Browse(Event::Char(c))));
            if !text.is_empty() {
                events.push(FrontEvent::Browse(Event::FocusResults));
            }
            events
        }
        ("home", _) => vec![FrontEvent::ShowLanding],
        ("subscribe", email) if !email.is_empty() => vec![
            FrontEvent::Landing(landing::Event::EmailChanged(email.to_string())),
            FrontEvent::Landing(landing::Event::NewsletterSubmitted),
        ],
        ("join", "vendor") => engage(EngagementKind::JoinVendor),
        ("join", "buyer") => engage(EngagementKind::JoinBuyer),
        ("explore", _) => engage(EngagementKind::ExploreVendors),
        ("start", _) => engage(EngagementKind::GetStarted),
        _ => {
            eprintln!("unknown command: {line}");
            vec![]
        }
    }
}

fn engage(kind: EngagementKind) -> Vec<FrontEvent> {
    vec![FrontEvent::Landing(landing::Event::EngageRequested(kind))]
}

/// Clears the screen and repaints the browse page.
fn redraw(state: &BrowseState) {
    let (rows, cols) = terminal_size();
    print!("\u{1b}[2J\u{1b}[H");
    dripcity::ui::render(state, rows, cols);
    let _ = std::io::stdout().flush();
}

/// Terminal dimensions from `LINES`/`COLUMNS`, with an 24x80 fallback.
fn terminal_size() -> (usize, usize) {
    let rows = std::env::var("LINES").ok().and_then(|v| v.parse().ok()).unwrap_or(24);
    let cols = std::env::var("COLUMNS").ok().and_then(|v| v.parse().ok()).unwrap_or(80);
    (rows, cols)
}

/// Prints the landing banner: counters plus the active testimonial.
fn print_landing_banner(state: &LandingState) {
    match &state.stats {
        Some(stats) => {
            println!(
                "Drip City: {} vendors · {} products · {} users · {}% satisfaction",
                stats.vendors, stats.products, stats.users, stats.satisfaction
            );
        }
        None => println!("Drip City: landing content still loading..."),
    }
    if let Some(t) = state.active_testimonial() {
        println!("  \"{}\" - {}, {}", t.content, t.name, t.role);
    }
    if let Some(error) = &state.error {
        println!("  ! {error}");
    }
    let _ = std::io::stdout().flush();
}

/// Prints a one-line status for landing-page results.
fn print_landing_status(state: &LandingState, event: &landing::Event) {
    use dripcity::landing::SubmitStatus;

    match event {
        landing::Event::NewsletterResult { .. } => match &state.newsletter.status {
            SubmitStatus::Succeeded => println!("Subscribed. Welcome to Drip City!"),
            SubmitStatus::Failed(message) => println!("Subscription failed: {message}"),
            _ => {}
        },
        landing::Event::EngageResult { .. } => {
            if let Some(banner) = &state.banner {
                println!("{banner}");
            }
            if let Some(error) = &state.error {
                println!("{error}");
            }
        }
        landing::Event::ContentLoaded { .. } => print_landing_banner(state),
        _ => {}
    }
    let _ = std::io::stdout().flush();
}
