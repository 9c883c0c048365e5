/// One row of the character list
///
/// Layout, left to right: name (bold), species, id, status (green when
/// exactly "Alive", red otherwise), species again, circular avatar.
use iced::font::{self, Font};
use iced::widget::{row, text};
use iced::{Alignment, Color, Element};

use super::avatar::{self, Avatar};
use crate::state::data::Character;
use crate::Message;

/// Status color for living characters
pub const ALIVE_COLOR: Color = Color { r: 0.0, g: 0.8, b: 0.0, a: 1.0 };
/// Status color for everything that is not exactly "Alive"
pub const NOT_ALIVE_COLOR: Color = Color { r: 0.9, g: 0.1, b: 0.1, a: 1.0 };

const HEADLINE: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};

/// Color for a status string. Exact, case-sensitive match on "Alive".
pub fn status_color(status: &str) -> Color {
    if status == "Alive" {
        ALIVE_COLOR
    } else {
        NOT_ALIVE_COLOR
    }
}

/// Everything a row shows, borrowed from its character
#[derive(Debug, Clone, PartialEq)]
pub struct RowModel<'a> {
    pub name: &'a str,
    pub species: &'a str,
    pub id_label: String,
    pub status: &'a str,
    pub status_color: Color,
}

impl<'a> From<&'a Character> for RowModel<'a> {
    fn from(character: &'a Character) -> Self {
        Self {
            name: &character.name,
            species: &character.species,
            id_label: character.id.to_string(),
            status: &character.status,
            status_color: status_color(&character.status),
        }
    }
}

/// Build the widget for one row. Species is shown twice.
pub fn row_view<'a>(model: RowModel<'a>, avatar: Option<&'a Avatar>) -> Element<'a, Message> {
    row![
        text(model.name).font(HEADLINE),
        text(model.species),
        text(model.id_label),
        text(model.status).color(model.status_color),
        text(model.species),
        avatar::avatar_view(avatar),
    ]
    .spacing(10)
    .padding(16)
    .align_y(Alignment::Center)
    .into()
}
