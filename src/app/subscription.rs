// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! This module handles routing of native keyboard events to application
//! shortcuts based on the current screen, and drives the periodic tick
//! used for notification auto-dismiss.

use super::{Message, Screen};
use crate::ui::generator;
use crate::ui::navbar;
use iced::keyboard;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Creates the appropriate event subscription based on the current screen.
///
/// Different screens have different shortcut needs:
/// - Generator: Ctrl+Enter generates, Ctrl+S exports, Escape closes the menu
/// - Settings/Help/About: Escape returns to the generator
///
/// Shortcuts only fire when no widget captured the event, so typing in a
/// text input never triggers them.
pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Generator => event::listen_with(|event, status, _window_id| {
            if let event::Event::Keyboard(keyboard::Event::KeyPressed {
                key, modifiers, ..
            }) = event
            {
                match status {
                    event::Status::Ignored => generator_shortcut(&key, modifiers),
                    event::Status::Captured => None,
                }
            } else {
                None
            }
        }),
        Screen::Settings | Screen::Help | Screen::About => {
            event::listen_with(|event, status, _window_id| {
                if let event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = event {
                    match status {
                        event::Status::Ignored => secondary_screen_shortcut(&key),
                        event::Status::Captured => None,
                    }
                } else {
                    None
                }
            })
        }
    }
}

/// Maps a key press on the generator screen to a shortcut message.
fn generator_shortcut(key: &keyboard::Key, modifiers: keyboard::Modifiers) -> Option<Message> {
    match key {
        keyboard::Key::Named(keyboard::key::Named::Enter) if modifiers.command() => {
            Some(Message::Generator(generator::Message::Generate))
        }
        keyboard::Key::Character(c) if c.as_str() == "s" && modifiers.command() => {
            Some(Message::DownloadShortcut)
        }
        keyboard::Key::Named(keyboard::key::Named::Escape) => {
            Some(Message::Navbar(navbar::Message::CloseMenu))
        }
        _ => None,
    }
}

/// Maps a key press on the settings/help/about screens to a shortcut message.
fn secondary_screen_shortcut(key: &keyboard::Key) -> Option<Message> {
    match key {
        keyboard::Key::Named(keyboard::key::Named::Escape) => {
            Some(Message::SwitchScreen(Screen::Generator))
        }
        _ => None,
    }
}

/// Creates a periodic tick subscription for notification auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
