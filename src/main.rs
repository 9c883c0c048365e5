use iced::widget::image::Handle;
use iced::widget::{container, scrollable, Column};
use iced::{Element, Length, Task, Theme};
use std::collections::HashMap;
use std::sync::Arc;

mod api;
mod logging;
mod state;
mod ui;

use api::{ClientConfig, DefaultCharacterClient, FetchError};
use state::data::Character;
use state::roster::Roster;
use ui::avatar::{Avatar, AvatarError};
use ui::row::RowModel;

/// Main application state
struct CharacterBrowser {
    /// Shared HTTP client (None if it could not be built)
    client: Option<Arc<DefaultCharacterClient>>,
    /// The displayed character list
    roster: Roster,
    /// Per-row avatar state, keyed by character id
    avatars: HashMap<i64, Avatar>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// The one list fetch for this activation finished
    CharactersLoaded(Result<Vec<Character>, Arc<FetchError>>),
    /// One row's avatar finished loading
    AvatarLoaded(i64, Result<Handle, Arc<AvatarError>>),
}

impl CharacterBrowser {
    /// Create the application and kick off the list fetch
    fn new() -> (Self, Task<Message>) {
        tracing::info!("🚀 Character browser starting");

        let client = match DefaultCharacterClient::new(ClientConfig::default()) {
            Ok(client) => Some(Arc::new(client)),
            Err(e) => {
                tracing::error!("❌ {e}");
                None
            }
        };

        let task = match &client {
            Some(client) => fetch_characters_task(Arc::clone(client)),
            None => Task::none(),
        };

        (Self::with_client(client), task)
    }

    fn with_client(client: Option<Arc<DefaultCharacterClient>>) -> Self {
        Self {
            client,
            roster: Roster::Empty,
            avatars: HashMap::new(),
        }
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CharactersLoaded(result) => {
                if !self.roster.apply(result) {
                    return Task::none();
                }

                // New list: drop old avatars and load one per row
                self.avatars.clear();
                let Some(client) = &self.client else {
                    return Task::none();
                };

                let mut loads = Vec::with_capacity(self.roster.characters().len());
                for character in self.roster.characters() {
                    self.avatars.insert(character.id, Avatar::Pending);
                    loads.push(load_avatar_task(
                        Arc::clone(client),
                        character.id,
                        character.image_url.clone(),
                    ));
                }

                Task::batch(loads)
            }
            Message::AvatarLoaded(id, result) => {
                // Stale result for a row that is gone
                if !self.roster.contains(id) {
                    return Task::none();
                }

                let avatar = match result {
                    Ok(handle) => Avatar::Ready(handle),
                    Err(e) => {
                        tracing::debug!("🖼️  Avatar for character {id} unavailable: {e}");
                        Avatar::Failed
                    }
                };
                self.avatars.insert(id, avatar);

                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let rows = self
            .roster
            .characters()
            .iter()
            .map(|character| ui::row::row_view(RowModel::from(character), self.avatars.get(&character.id)));

        let list = Column::with_children(rows).width(Length::Fill);

        container(scrollable(list).width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(20)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    logging::init();

    iced::application(
        "Rick and Morty Characters",
        CharacterBrowser::update,
        CharacterBrowser::view,
    )
    .theme(CharacterBrowser::theme)
    .centered()
    .run_with(CharacterBrowser::new)
}

/// Fetch the character list in the background
fn fetch_characters_task(client: Arc<DefaultCharacterClient>) -> Task<Message> {
    Task::perform(
        async move { client.fetch_characters().await.map_err(Arc::new) },
        Message::CharactersLoaded,
    )
}

/// Load one row's avatar in the background
fn load_avatar_task(client: Arc<DefaultCharacterClient>, id: i64, image_url: String) -> Task<Message> {
    Task::perform(
        async move { ui::avatar::load_avatar(client, image_url).await.map_err(Arc::new) },
        move |result| Message::AvatarLoaded(id, result),
    )
}
