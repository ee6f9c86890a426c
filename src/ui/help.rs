// SPDX-License-Identifier: MPL-2.0
//! Help screen module providing in-app documentation.
//!
//! This module displays documentation for the generator organized by
//! functionality with collapsible sections. Each section explains the role,
//! available controls, and usage instructions.

use crate::i18n::fluent::I18n;
use crate::ui::action_icons;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use iced::{
    alignment::{Horizontal, Vertical},
    font::Weight,
    widget::{button, container, image, scrollable, text, Column, Container, Row, Text},
    Border, Element, Font, Length, Theme,
};

/// Help sections that can be expanded/collapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HelpSection {
    Generator,
    Styling,
    Export,
}

impl HelpSection {
    /// All available sections in display order.
    pub const ALL: [HelpSection; 3] = [
        HelpSection::Generator,
        HelpSection::Styling,
        HelpSection::Export,
    ];
}

/// State for the help screen (tracks which sections are expanded).
#[derive(Debug, Clone)]
pub struct State {
    /// Set of expanded sections.
    expanded: std::collections::HashSet<HelpSection>,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    /// Create a new help state with all sections collapsed.
    pub fn new() -> Self {
        Self {
            expanded: std::collections::HashSet::new(),
        }
    }

    /// Check if a section is expanded.
    pub fn is_expanded(&self, section: HelpSection) -> bool {
        self.expanded.contains(&section)
    }

    /// Toggle a section's expanded state.
    pub fn toggle(&mut self, section: HelpSection) {
        if self.expanded.contains(&section) {
            self.expanded.remove(&section);
        } else {
            self.expanded.insert(section);
        }
    }
}

/// Contextual data needed to render the help screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub is_dark_theme: bool,
}

/// Messages emitted by the help screen.
#[derive(Debug, Clone)]
pub enum Message {
    Back,
    ToggleSection(HelpSection),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Back,
}

/// Process a help screen message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::Back => Event::Back,
        Message::ToggleSection(section) => {
            state.toggle(section);
            Event::None
        }
    }
}

/// Render the help screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let back_button = button(
        text(format!("← {}", ctx.i18n.tr("help-back-button"))).size(typography::BODY),
    )
    .on_press(Message::Back);

    let title = Text::new(ctx.i18n.tr("help-title")).size(typography::TITLE_LG);

    // Build collapsible sections
    let generator_section = build_collapsible_section(
        &ctx,
        HelpSection::Generator,
        action_icons::sections::generator(),
        ctx.i18n.tr("help-section-generator"),
        build_generator_content(&ctx),
    );

    let styling_section = build_collapsible_section(
        &ctx,
        HelpSection::Styling,
        action_icons::sections::styling(),
        ctx.i18n.tr("help-section-styling"),
        build_styling_content(&ctx),
    );

    let export_section = build_collapsible_section(
        &ctx,
        HelpSection::Export,
        action_icons::sections::export(),
        ctx.i18n.tr("help-section-export"),
        build_export_content(&ctx),
    );

    let content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::SM)
        .align_x(Horizontal::Left)
        .padding(spacing::MD)
        .push(back_button)
        .push(title)
        .push(generator_section)
        .push(styling_section)
        .push(export_section);

    scrollable(content).into()
}

/// Build a collapsible section with header and content.
fn build_collapsible_section<'a>(
    ctx: &ViewContext<'a>,
    section: HelpSection,
    icon: image::Image<image::Handle>,
    title: String,
    content: Element<'a, Message>,
) -> Element<'a, Message> {
    let is_expanded = ctx.state.is_expanded(section);
    let icon_sized = action_icons::sized(icon, sizing::ICON_MD);

    // Expand/collapse indicator
    let indicator = Text::new(if is_expanded { "▼" } else { "▶" }).size(typography::BODY);

    let header_content = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(indicator)
        .push(icon_sized)
        .push(Text::new(title).size(typography::TITLE_SM));

    let header = button(header_content)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(|theme: &Theme, status| {
            let palette = theme.extended_palette();
            match status {
                button::Status::Hovered | button::Status::Pressed => button::Style {
                    background: Some(palette.background.strong.color.into()),
                    text_color: palette.background.base.text,
                    border: Border {
                        radius: radius::MD.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                },
                _ => button::Style {
                    background: Some(palette.background.weak.color.into()),
                    text_color: palette.background.base.text,
                    border: Border {
                        radius: radius::MD.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                },
            }
        })
        .on_press(Message::ToggleSection(section));

    let mut section_column = Column::new().spacing(spacing::XS).push(header);

    if is_expanded {
        let content_container = Container::new(content)
            .padding(spacing::MD)
            .width(Length::Fill)
            .style(|theme: &Theme| container::Style {
                background: Some(theme.extended_palette().background.weak.color.into()),
                border: Border {
                    radius: radius::MD.into(),
                    ..Default::default()
                },
                ..Default::default()
            });
        section_column = section_column.push(content_container);
    }

    section_column.into()
}

// ─────────────────────────────────────────────────────────────────────────────
// Section content builders
// ─────────────────────────────────────────────────────────────────────────────

/// Build the generator form section content.
fn build_generator_content<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let role = build_paragraph(ctx.i18n.tr("help-generator-role"));

    let controls_title = build_subsection_title(ctx.i18n.tr("help-controls-title"));
    let controls_content = Column::new()
        .spacing(spacing::XS)
        .push(build_control_item(
            ctx.i18n.tr("help-generator-control-text"),
            ctx.i18n.tr("help-generator-control-text-desc"),
        ))
        .push(build_control_item(
            ctx.i18n.tr("help-generator-control-size"),
            ctx.i18n.tr("help-generator-control-size-desc"),
        ))
        .push(build_control_item(
            ctx.i18n.tr("help-generator-control-error-correction"),
            ctx.i18n.tr("help-generator-control-error-correction-desc"),
        ));

    let snapshot = build_paragraph(ctx.i18n.tr("help-generator-snapshot"));

    let shortcuts_title = build_subsection_title(ctx.i18n.tr("help-shortcuts-title"));
    let shortcuts_content = Column::new()
        .spacing(spacing::XXS)
        .push(build_shortcut_row(
            "Ctrl+Enter",
            ctx.i18n.tr("help-generator-key-generate"),
        ))
        .push(build_shortcut_row(
            "Esc",
            ctx.i18n.tr("help-generator-key-back"),
        ));

    Column::new()
        .spacing(spacing::SM)
        .push(role)
        .push(controls_title)
        .push(controls_content)
        .push(snapshot)
        .push(shortcuts_title)
        .push(shortcuts_content)
        .into()
}

/// Build the styling section content.
fn build_styling_content<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let role = build_paragraph(ctx.i18n.tr("help-styling-role"));

    // Solid colors
    let colors_title = build_tool_title(ctx.i18n.tr("help-styling-colors-title"));
    let colors_content = Column::new()
        .spacing(spacing::XXS)
        .push(build_paragraph(ctx.i18n.tr("help-styling-colors-desc")))
        .push(build_bullet(ctx.i18n.tr("help-styling-colors-hex")))
        .push(build_bullet(ctx.i18n.tr("help-styling-colors-sliders")));

    // Gradient fill
    let gradient_title = build_tool_title(ctx.i18n.tr("help-styling-gradient-title"));
    let gradient_content = Column::new()
        .spacing(spacing::XXS)
        .push(build_paragraph(ctx.i18n.tr("help-styling-gradient-desc")))
        .push(build_bullet(ctx.i18n.tr("help-styling-gradient-linear")))
        .push(build_bullet(ctx.i18n.tr("help-styling-gradient-radial")));

    let contrast = build_paragraph(ctx.i18n.tr("help-styling-contrast"));

    Column::new()
        .spacing(spacing::SM)
        .push(role)
        .push(colors_title)
        .push(colors_content)
        .push(gradient_title)
        .push(gradient_content)
        .push(contrast)
        .into()
}

/// Build the export section content.
fn build_export_content<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let role = build_paragraph(ctx.i18n.tr("help-export-role"));

    let usage_title = build_subsection_title(ctx.i18n.tr("help-usage-title"));
    let usage_content = Column::new()
        .spacing(spacing::XXS)
        .push(build_numbered_step("1", ctx.i18n.tr("help-export-step1")))
        .push(build_numbered_step("2", ctx.i18n.tr("help-export-step2")))
        .push(build_numbered_step("3", ctx.i18n.tr("help-export-step3")));

    let formats = build_paragraph(ctx.i18n.tr("help-export-formats"));

    let copy_item = build_bullet_with_icon(
        action_icons::generator::copy(ctx.is_dark_theme),
        ctx.i18n.tr("help-export-copy"),
    );

    let shortcuts_title = build_subsection_title(ctx.i18n.tr("help-shortcuts-title"));
    let shortcuts_content = Column::new().spacing(spacing::XXS).push(build_shortcut_row(
        "Ctrl+S",
        ctx.i18n.tr("help-export-key-download"),
    ));

    Column::new()
        .spacing(spacing::SM)
        .push(role)
        .push(usage_title)
        .push(usage_content)
        .push(formats)
        .push(copy_item)
        .push(shortcuts_title)
        .push(shortcuts_content)
        .into()
}

// ─────────────────────────────────────────────────────────────────────────────
// Helper functions for building UI elements
// ─────────────────────────────────────────────────────────────────────────────

/// Build a paragraph of text.
fn build_paragraph<'a>(content: String) -> Element<'a, Message> {
    Text::new(content).size(typography::BODY).into()
}

/// Build a subsection title (e.g., "Controls", "Keyboard Shortcuts").
fn build_subsection_title<'a>(title: String) -> Element<'a, Message> {
    Text::new(title)
        .size(typography::BODY)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.strong.text),
        })
        .into()
}

/// Build a tool title (e.g., "Solid colors", "Gradient fill").
fn build_tool_title<'a>(title: String) -> Element<'a, Message> {
    Text::new(title)
        .size(typography::BODY)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().primary.strong.color),
        })
        .into()
}

/// Build a control item with name and description.
fn build_control_item<'a>(name: String, description: String) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::SM)
        .push(
            Text::new(format!("• {}:", name))
                .size(typography::BODY)
                .font(Font {
                    weight: Weight::Bold,
                    ..Font::default()
                }),
        )
        .push(Text::new(description).size(typography::BODY))
        .into()
}

/// Size for inline icons in help text.
const HELP_ICON_SIZE: f32 = 18.0;

/// Build a bullet point with an icon.
fn build_bullet_with_icon<'a>(
    icon: image::Image<image::Handle>,
    content: String,
) -> Element<'a, Message> {
    let icon_widget = action_icons::sized(icon, HELP_ICON_SIZE);

    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new("  •").size(typography::BODY))
        .push(icon_widget)
        .push(Text::new(content).size(typography::BODY))
        .into()
}

/// Build a bullet point.
fn build_bullet<'a>(content: String) -> Element<'a, Message> {
    Text::new(format!("  • {}", content))
        .size(typography::BODY)
        .into()
}

/// Build a numbered step (for instructions).
fn build_numbered_step<'a>(number: &'a str, content: String) -> Element<'a, Message> {
    let badge = Container::new(Text::new(number).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().primary.base.color.into()),
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            text_color: Some(theme.extended_palette().primary.base.text),
            ..Default::default()
        });

    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(badge)
        .push(Text::new(content).size(typography::BODY))
        .into()
}

/// Build a single shortcut row with key badge and description.
fn build_shortcut_row<'a>(key: &'a str, description: String) -> Element<'a, Message> {
    let key_badge = Container::new(Text::new(key).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.strong.color.into()),
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        });

    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Container::new(key_badge).width(Length::Fixed(90.0)))
        .push(Text::new(description).size(typography::BODY))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    #[test]
    fn help_view_renders() {
        let i18n = I18n::default();
        let state = State::new();
        let ctx = ViewContext {
            i18n: &i18n,
            state: &state,
            is_dark_theme: false,
        };
        let _element = view(ctx);
    }

    #[test]
    fn back_emits_event() {
        let mut state = State::new();
        let event = update(&mut state, Message::Back);
        assert!(matches!(event, Event::Back));
    }

    #[test]
    fn toggle_section_expands_and_collapses() {
        let mut state = State::new();
        assert!(!state.is_expanded(HelpSection::Generator));

        update(&mut state, Message::ToggleSection(HelpSection::Generator));
        assert!(state.is_expanded(HelpSection::Generator));

        update(&mut state, Message::ToggleSection(HelpSection::Generator));
        assert!(!state.is_expanded(HelpSection::Generator));
    }

    #[test]
    fn multiple_sections_can_be_expanded() {
        let mut state = State::new();

        update(&mut state, Message::ToggleSection(HelpSection::Generator));
        update(&mut state, Message::ToggleSection(HelpSection::Export));

        assert!(state.is_expanded(HelpSection::Generator));
        assert!(state.is_expanded(HelpSection::Export));
        assert!(!state.is_expanded(HelpSection::Styling));
    }
}
