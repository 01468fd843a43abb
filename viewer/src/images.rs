use iced::widget::{container, image, Space};
use iced::{Element, Length};
use log::warn;
use std::collections::HashMap;

use crate::style;

/// Decorative pictures fetched once at start-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageSlot {
    LoginHero,
    CctvFrame,
}

#[derive(Debug, Default)]
pub struct Gallery {
    handles: HashMap<ImageSlot, image::Handle>,
}

impl Gallery {
    pub fn store(&mut self, slot: ImageSlot, fetched: Result<Vec<u8>, String>) {
        match fetched {
            Ok(bytes) => {
                self.handles.insert(slot, image::Handle::from_bytes(bytes));
            }
            Err(err) => warn!("{slot:?} image unavailable, using placeholder: {err}"),
        }
    }

    /// The picture for `slot`, or a flat placeholder of the same size.
    pub fn view<'a, Message: 'a>(&self, slot: ImageSlot, height: f32) -> Element<'a, Message> {
        match self.handles.get(&slot) {
            Some(handle) => image(handle.clone())
                .width(Length::Fill)
                .height(Length::Fixed(height))
                .into(),
            None => container(Space::new())
                .width(Length::Fill)
                .height(Length::Fixed(height))
                .style(|_| container::Style {
                    background: Some(style::STROKE_DIM.into()),
                    ..Default::default()
                })
                .into(),
        }
    }
}

pub async fn fetch(url: String) -> Result<Vec<u8>, String> {
    let response = reqwest::get(&url).await.map_err(|e| e.to_string())?;
    let response = response.error_for_status().map_err(|e| e.to_string())?;
    let bytes = response.bytes().await.map_err(|e| e.to_string())?;
    Ok(bytes.to_vec())
}
