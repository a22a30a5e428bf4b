// SPDX-License-Identifier: MPL-2.0
//! Full-size image viewer stacked above the gallery.
//!
//! The viewer owns the selected image: opening sets it and every close path
//! (backdrop click, Escape, close button) clears it.
//!
//! The Escape listener is a subscription derived from state, so it only
//! exists while the viewer is visible and disappears on every exit path.

use crate::domain::error::FetchError;
use crate::domain::gallery::{ImageId, ImageRecord};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::thumbnails::{Thumbnail, ThumbnailCache};
use iced::keyboard::{self, key::Named, Key};
use iced::widget::image::Handle;
use iced::widget::{button, image, mouse_area, Column, Container, Row, Space, Stack, Text};
use iced::{event, mouse, ContentFit, Element, Length, Subscription};

/// Download the caller should start after [`ModalViewer::open`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullImageRequest {
    pub id: ImageId,
    pub url: String,
}

/// Messages emitted by the viewer.
#[derive(Debug, Clone)]
pub enum Message {
    BackdropPressed,
    /// Press on the image card; captured so it never reaches the backdrop.
    ContentPressed,
    ClosePressed,
    EscapePressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    Closed,
}

#[derive(Debug, Default)]
pub struct ModalViewer {
    image: Option<ImageRecord>,
    full_image: Option<Handle>,
}

impl ModalViewer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `image`, replacing whatever was displayed.
    pub fn open(&mut self, image: ImageRecord) -> FullImageRequest {
        tracing::debug!(id = %image.id(), "opening image viewer");
        let request = FullImageRequest {
            id: image.id(),
            url: image.full_url().to_string(),
        };
        self.image = Some(image);
        self.full_image = None;
        request
    }

    pub fn close(&mut self) {
        if let Some(image) = self.image.take() {
            tracing::debug!(id = %image.id(), "closing image viewer");
        }
        self.full_image = None;
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.image.is_some()
    }

    #[must_use]
    pub fn image(&self) -> Option<&ImageRecord> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn full_image(&self) -> Option<&Handle> {
        self.full_image.as_ref()
    }

    /// Applies a finished full-size download.
    ///
    /// Returns `false` when the result belongs to an image that is no longer
    /// displayed; such results are dropped.
    pub fn full_image_loaded(&mut self, id: ImageId, result: Result<Vec<u8>, FetchError>) -> bool {
        if self.image.as_ref().map(ImageRecord::id) != Some(id) {
            tracing::debug!(%id, "discarding full-size image for a closed viewer");
            return false;
        }
        match result {
            Ok(bytes) => self.full_image = Some(Handle::from_bytes(bytes)),
            // The thumbnail stays on screen.
            Err(error) => tracing::warn!(%id, %error, "full-size image failed to load"),
        }
        true
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::ContentPressed => Event::None,
            Message::BackdropPressed | Message::ClosePressed | Message::EscapePressed => {
                if !self.is_visible() {
                    return Event::None;
                }
                self.close();
                Event::Closed
            }
        }
    }

    /// Escape listener, present only while the viewer is visible.
    pub fn subscription(&self) -> Subscription<Message> {
        if !self.is_visible() {
            return Subscription::none();
        }
        event::listen_with(|event, _status, _window| match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: Key::Named(Named::Escape),
                ..
            }) => Some(Message::EscapePressed),
            _ => None,
        })
    }

    /// Renders the backdrop and image card, or nothing when closed.
    pub fn view<'a>(
        &'a self,
        i18n: &'a I18n,
        thumbnails: &'a ThumbnailCache,
    ) -> Option<Element<'a, Message>> {
        let record = self.image.as_ref()?;

        let handle = self
            .full_image
            .clone()
            .or_else(|| match thumbnails.peek(record.thumbnail_url()) {
                Thumbnail::Ready(handle) => Some(handle),
                Thumbnail::Loading | Thumbnail::Failed => None,
            });

        let picture: Element<'a, Message> = match handle {
            Some(handle) => image(handle)
                .content_fit(ContentFit::Contain)
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into(),
            None => Container::new(Text::new(i18n.tr("modal-loading")).size(typography::BODY))
                .padding(spacing::XXL)
                .into(),
        };

        let close = button(Text::new("\u{2715}").size(typography::BODY_LG))
            .on_press(Message::ClosePressed)
            .padding(spacing::XS)
            .style(styles::button::overlay(
                palette::WHITE,
                opacity::OVERLAY_MEDIUM,
                opacity::OVERLAY_HOVER,
            ));

        let header = Row::new()
            .push(Space::new().width(Length::Fill))
            .push(close);

        let caption = Container::new(Text::new(record.description()).size(typography::BODY_SM))
            .padding([spacing::XXS, spacing::XS])
            .max_width(sizing::MODAL_CAPTION_MAX_WIDTH)
            .style(styles::overlay::indicator(radius::SM));

        let card = Column::new()
            .spacing(spacing::XS)
            .align_x(iced::alignment::Horizontal::Center)
            .push(header)
            .push(picture)
            .push(caption);

        let card = mouse_area(
            Container::new(card)
                .padding(spacing::SM)
                .style(styles::container::panel),
        )
        .interaction(mouse::Interaction::Idle)
        .on_press(Message::ContentPressed);

        let backdrop = mouse_area(
            Container::new(Space::new())
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::overlay::backdrop),
        )
        .interaction(mouse::Interaction::Idle)
        .on_press(Message::BackdropPressed);

        let centered = Container::new(card)
            .padding(spacing::XXL)
            .center(Length::Fill);

        Some(Stack::new().push(backdrop).push(centered).into())
    }
}
