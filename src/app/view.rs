// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state, with the toast overlay stacked on top.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::about::{self, ViewContext as AboutViewContext};
use crate::ui::generator::{State as GeneratorState, ViewContext as GeneratorViewContext};
use crate::ui::help::{self, ViewContext as HelpViewContext};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{Manager, Toast};
use crate::ui::settings::{State as SettingsState, ViewContext as SettingsViewContext};
use iced::{
    widget::{Container, Stack},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub generator: &'a GeneratorState,
    pub settings: &'a SettingsState,
    pub help_state: &'a help::State,
    pub menu_open: bool,
    pub notifications: &'a Manager,
    pub is_dark_theme: bool,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Generator => view_generator(
            ctx.generator,
            ctx.i18n,
            ctx.menu_open,
            ctx.is_dark_theme,
        ),
        Screen::Settings => view_settings(ctx.settings, ctx.i18n),
        Screen::Help => view_help(ctx.help_state, ctx.i18n, ctx.is_dark_theme),
        Screen::About => view_about(ctx.i18n),
    };

    let base = Container::new(current_view)
        .width(Length::Fill)
        .height(Length::Fill);

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .push(base)
        .push(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_generator<'a>(
    generator: &'a GeneratorState,
    i18n: &'a I18n,
    menu_open: bool,
    is_dark_theme: bool,
) -> Element<'a, Message> {
    let navbar_view = navbar::view(NavbarViewContext { i18n, menu_open }).map(Message::Navbar);

    let generator_content = generator
        .view(GeneratorViewContext {
            i18n,
            is_dark_theme,
        })
        .map(Message::Generator);

    iced::widget::Column::new()
        .push(navbar_view)
        .push(generator_content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_settings<'a>(settings: &'a SettingsState, i18n: &'a I18n) -> Element<'a, Message> {
    settings
        .view(SettingsViewContext { i18n })
        .map(Message::Settings)
}

fn view_help<'a>(
    help_state: &'a help::State,
    i18n: &'a I18n,
    is_dark_theme: bool,
) -> Element<'a, Message> {
    help::view(HelpViewContext {
        i18n,
        state: help_state,
        is_dark_theme,
    })
    .map(Message::Help)
}

fn view_about(i18n: &I18n) -> Element<'_, Message> {
    about::view(AboutViewContext { i18n }).map(Message::About)
}
