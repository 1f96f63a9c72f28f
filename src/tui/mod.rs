// TUI runtime: terminal lifecycle, event loop, frame rendering.
//
// One task owns the terminal and the `PortalState`. The loop multiplexes
// keyboard input with a render tick; every key event is applied to the
// state synchronously before the next event is read.

pub mod input;
pub mod layout;
pub mod widgets;

use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use ratatui::Frame;

use crate::app::{Focus, PortalState};
use layout::build_layout;

/// Run the TUI event loop until the user quits.
///
/// 1. Initializes the terminal (raw mode, alternate screen).
/// 2. Installs a panic hook to restore the terminal on crash.
/// 3. Runs an async select loop over keyboard input and render ticks.
/// 4. Restores the terminal on clean exit.
pub async fn run(mut state: PortalState, tick_rate: Duration) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();

    // Restore the terminal before unwinding; chain the original hook after.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = ratatui::restore();
        original_hook(panic_info);
    }));

    let mut event_stream = EventStream::new();

    let mut render_tick = tokio::time::interval(tick_rate);
    render_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) => {
                        if input::handle_key(key_event, &mut state) {
                            break;
                        }
                    }
                    Some(Ok(_)) => {
                        // Resize and the like: the next tick redraws anyway.
                    }
                    Some(Err(_)) => break,
                    None => break,
                }
            }

            _ = render_tick.tick() => {
                terminal.draw(|frame| render_frame(frame, &state))?;
            }
        }
    }

    ratatui::restore();

    Ok(())
}

/// Render the complete portal frame.
pub fn render_frame(frame: &mut Frame, state: &PortalState) {
    let sidebar_open = !state.nav.sidebar_suppressed();
    let layout = build_layout(frame.area(), sidebar_open);

    widgets::title_bar::render(frame, layout.title_bar, state);
    widgets::menu_bar::render(frame, layout.menu_bar, state.nav.active_section);
    if sidebar_open {
        widgets::sidebar::render(
            frame,
            layout.sidebar,
            state,
            state.focus == Focus::Sidebar,
        );
    }
    widgets::content::render(frame, layout.content, state, state.focus == Focus::Content);
    widgets::comments::render(
        frame,
        layout.comments,
        state,
        state.focus == Focus::Comments,
    );
    widgets::help_bar::render(frame, layout.help_bar, state);

    if state.confirm_quit {
        widgets::quit_confirm::render(frame, frame.area());
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
