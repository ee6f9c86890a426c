// SPDX-License-Identifier: MPL-2.0
//! View composition for the generator screen.
//!
//! Two-panel layout: the form on the left at a fixed width, the preview and
//! export actions filling the rest. Export buttons are disabled rather than
//! hidden before the first generation to keep the layout stable.

use crate::i18n::fluent::I18n;
use crate::qr::export::ExportFormat;
use crate::qr::form::{ErrorCorrection, GradientType, RgbColor};
use crate::ui::action_icons;
use crate::ui::design_tokens::{border, palette, radius, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::image::Handle;
use iced::widget::{
    button, checkbox, container, image, scrollable, slider, text, text_input, Column, Container,
    Image, Row,
};
use iced::{alignment, Color, Element, Length, Theme};

use super::{Channel, ColorField, Message, State};

/// Width reserved for the one-letter channel label next to each slider.
const CHANNEL_LABEL_WIDTH: f32 = 16.0;

/// Width reserved for the numeric channel value after each slider.
const CHANNEL_VALUE_WIDTH: f32 = 32.0;

/// Contextual data needed to render the generator view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub is_dark_theme: bool,
}

impl State {
    /// Render the generator screen.
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        Row::new()
            .spacing(spacing::MD)
            .padding(spacing::MD)
            .push(self.form_panel(&ctx))
            .push(self.preview_panel(&ctx))
            .into()
    }

    fn form_panel<'a>(&'a self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let mut fields = Column::new()
            .spacing(spacing::SM)
            .padding(spacing::SM)
            .push(self.text_section(ctx))
            .push(self.size_section(ctx))
            .push(self.error_correction_section(ctx))
            .push(self.color_section(ctx, ColorField::Foreground))
            .push(self.color_section(ctx, ColorField::Background))
            .push(
                checkbox(self.form.gradient_enabled)
                    .label(ctx.i18n.tr("generator-gradient-label"))
                    .on_toggle(Message::GradientToggled),
            );

        if self.form.gradient_enabled {
            fields = fields
                .push(self.gradient_type_section(ctx))
                .push(self.color_section(ctx, ColorField::GradientStart))
                .push(self.color_section(ctx, ColorField::GradientEnd));
        }

        let generate_button = button(
            text(ctx.i18n.tr("generator-generate"))
                .size(typography::BODY_LG)
                .center(),
        )
        .on_press(Message::Generate)
        .padding(spacing::SM)
        .width(Length::Fill)
        .style(styles::button::primary);

        fields = fields.push(generate_button);

        Container::new(scrollable(fields).height(Length::Fill))
            .width(Length::Fixed(sizing::FORM_WIDTH))
            .height(Length::Fill)
            .style(styles::container::panel)
            .into()
    }

    fn text_section<'a>(&'a self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let placeholder = ctx.i18n.tr("generator-text-placeholder");
        let input = text_input(placeholder.as_str(), &self.form.text)
            .on_input(Message::TextChanged)
            .on_submit(Message::Generate)
            .padding(spacing::XXS)
            .size(typography::BODY)
            .width(Length::Fill);

        Column::new()
            .spacing(spacing::XXS)
            .push(text(ctx.i18n.tr("generator-text-label")).size(typography::BODY_SM))
            .push(input)
            .into()
    }

    fn size_section<'a>(&'a self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let placeholder = ctx.i18n.tr("generator-size-placeholder");
        let input = text_input(placeholder.as_str(), &self.size_input)
            .on_input(Message::SizeInputChanged)
            .on_submit(Message::SizeInputSubmitted)
            .padding(spacing::XXS)
            .size(typography::BODY)
            .width(Length::Fill);

        let mut section = Column::new()
            .spacing(spacing::XXS)
            .push(text(ctx.i18n.tr("generator-size-label")).size(typography::BODY_SM))
            .push(input);

        if let Some(key) = self.size_error_key {
            section = section.push(field_error(ctx, key));
        }

        section.into()
    }

    fn error_correction_section<'a>(&'a self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let mut row = Row::new().spacing(spacing::XS);
        for level in ErrorCorrection::ALL {
            let style = if self.form.error_correction == level {
                styles::button::selected
            } else {
                styles::button::unselected
            };
            row = row.push(
                button(
                    text(ctx.i18n.tr(level.label_key()))
                        .size(typography::BODY_SM)
                        .center(),
                )
                .on_press(Message::ErrorCorrectionSelected(level))
                .padding([spacing::XXS, spacing::XS])
                .width(Length::Fill)
                .style(style),
            );
        }

        Column::new()
            .spacing(spacing::XXS)
            .push(text(ctx.i18n.tr("generator-error-correction-label")).size(typography::BODY_SM))
            .push(row)
            .into()
    }

    fn gradient_type_section<'a>(&'a self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let mut row = Row::new().spacing(spacing::XS);
        for kind in GradientType::ALL {
            let style = if self.form.gradient_type == kind {
                styles::button::selected
            } else {
                styles::button::unselected
            };
            row = row.push(
                button(
                    text(ctx.i18n.tr(kind.label_key()))
                        .size(typography::BODY_SM)
                        .center(),
                )
                .on_press(Message::GradientTypeSelected(kind))
                .padding([spacing::XXS, spacing::XS])
                .width(Length::Fill)
                .style(style),
            );
        }

        Column::new()
            .spacing(spacing::XXS)
            .push(text(ctx.i18n.tr("generator-gradient-type-label")).size(typography::BODY_SM))
            .push(row)
            .into()
    }

    /// Label, swatch + hex input row, and the three channel sliders for one
    /// color field.
    fn color_section<'a>(
        &'a self,
        ctx: &ViewContext<'a>,
        field: ColorField,
    ) -> Element<'a, Message> {
        let color = self.color(field);
        let hex = self.hex_input(field);

        let swatch = Container::new(text(""))
            .width(Length::Fixed(sizing::SWATCH_SIZE))
            .height(Length::Fixed(sizing::SWATCH_SIZE))
            .style(move |theme: &Theme| swatch_style(theme, color));

        let placeholder = ctx.i18n.tr("generator-color-placeholder");
        let input = text_input(placeholder.as_str(), &hex.buffer)
            .on_input(move |value| Message::HexInputChanged(field, value))
            .padding(spacing::XXS)
            .size(typography::BODY)
            .width(Length::Fill);

        let mut section = Column::new()
            .spacing(spacing::XXS)
            .push(text(ctx.i18n.tr(field.label_key())).size(typography::BODY_SM))
            .push(
                Row::new()
                    .spacing(spacing::XS)
                    .align_y(alignment::Vertical::Center)
                    .push(swatch)
                    .push(input),
            );

        if let Some(key) = hex.error_key {
            section = section.push(field_error(ctx, key));
        }

        section
            .push(channel_slider(field, Channel::Red, color.r))
            .push(channel_slider(field, Channel::Green, color.g))
            .push(channel_slider(field, Channel::Blue, color.b))
            .into()
    }

    fn preview_panel<'a>(&'a self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let preview: Element<'a, Message> = if let Some(artifact) = &self.artifact {
            let size = artifact.size;
            Column::new()
                .spacing(spacing::XS)
                .align_x(iced::Alignment::Center)
                .push(image(artifact.handle.clone()))
                .push(
                    text(format!("{size}\u{d7}{size} px"))
                        .size(typography::CAPTION)
                        .style(caption),
                )
                .push(
                    text(artifact.background_style())
                        .size(typography::CAPTION)
                        .style(caption),
                )
                .into()
        } else {
            Column::new()
                .spacing(spacing::XS)
                .align_x(iced::Alignment::Center)
                .push(icons::sized(
                    action_icons::generator::placeholder(ctx.is_dark_theme),
                    sizing::ICON_XL,
                ))
                .push(
                    text(ctx.i18n.tr("generator-preview-empty"))
                        .size(typography::BODY_SM)
                        .style(caption),
                )
                .into()
        };

        let content = Column::new()
            .spacing(spacing::MD)
            .align_x(iced::Alignment::Center)
            .width(Length::Fill)
            .push(
                Container::new(preview)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .center(Length::Fill),
            )
            .push(self.action_row(ctx));

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::MD)
            .into()
    }

    /// Export and copy actions shown under the preview.
    fn action_row<'a>(&'a self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let has_artifact = self.artifact.is_some();

        Row::new()
            .spacing(spacing::SM)
            .push(action_button(
                action_icons::generator::download(ctx.is_dark_theme),
                ctx.i18n.tr("generator-download-png"),
                has_artifact.then(|| Message::Download(ExportFormat::Png)),
            ))
            .push(action_button(
                action_icons::generator::download(ctx.is_dark_theme),
                ctx.i18n.tr("generator-download-svg"),
                has_artifact.then(|| Message::Download(ExportFormat::Svg)),
            ))
            .push(action_button(
                action_icons::generator::copy(ctx.is_dark_theme),
                ctx.i18n.tr("generator-copy-text"),
                has_artifact.then_some(Message::CopyText),
            ))
            .into()
    }
}

/// One labeled slider row for a single RGB channel.
fn channel_slider<'a>(field: ColorField, channel: Channel, value: u8) -> Element<'a, Message> {
    let label = match channel {
        Channel::Red => "R",
        Channel::Green => "G",
        Channel::Blue => "B",
    };

    Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(
            text(label)
                .size(typography::CAPTION)
                .width(Length::Fixed(CHANNEL_LABEL_WIDTH)),
        )
        .push(slider(0..=255, value, move |v| {
            Message::ChannelChanged(field, channel, v)
        }))
        .push(
            text(value.to_string())
                .size(typography::CAPTION)
                .width(Length::Fixed(CHANNEL_VALUE_WIDTH)),
        )
        .into()
}

/// Icon + label button, disabled while `on_press` is `None`.
fn action_button<'a>(
    icon: Image<Handle>,
    label: String,
    on_press: Option<Message>,
) -> Element<'a, Message> {
    let content = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(icons::sized(icon, sizing::ICON_SM))
        .push(text(label).size(typography::BODY_SM));

    let btn = button(content).padding([spacing::XXS, spacing::SM]);
    match on_press {
        Some(message) => btn
            .on_press(message)
            .style(styles::button::unselected)
            .into(),
        None => btn.style(styles::button::disabled()).into(),
    }
}

/// Inline validation message shown under an input.
fn field_error<'a>(ctx: &ViewContext<'a>, key: &'static str) -> Element<'a, Message> {
    text(ctx.i18n.tr(key))
        .size(typography::CAPTION)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::ERROR_500),
        })
        .into()
}

/// Muted style for captions and hints.
fn caption(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(palette::GRAY_400),
    }
}

/// Style for the color preview square, filled with the committed color.
fn swatch_style(theme: &Theme, color: RgbColor) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(Color::from_rgb8(
            color.r, color.g, color.b,
        ))),
        border: iced::Border {
            color: theme.extended_palette().background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}
