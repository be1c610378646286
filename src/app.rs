//! The iced front end

use crate::config::Config;
use crate::item::{Item, ItemId};
use crate::store::ListStore;
use iced::widget::{Column, button, column, container, row, scrollable, text, text_input};
use iced::{Element, Length, Task};
use shopping_list_storage::SlotStorage;

/// Application state
pub struct App {
    store: ListStore<Box<dyn SlotStorage>>,
    input: String,
}

#[derive(Debug, Clone)]
pub enum Message {
    InputChanged(String),
    Submit,
    Toggle(ItemId),
    Delete(ItemId),
}

impl App {
    /// Open the configured storage and restore the saved list
    pub fn new() -> (App, Task<Message>) {
        let config = Config::from_env();
        let store = ListStore::open(config.open_storage(), config.slot);
        (App::with_store(store), Task::none())
    }

    pub fn with_store(store: ListStore<Box<dyn SlotStorage>>) -> Self {
        Self {
            store,
            input: String::new(),
        }
    }

    pub fn store(&self) -> &ListStore<Box<dyn SlotStorage>> {
        &self.store
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Footer line describing whether changes are being saved
    pub fn status_line(&self) -> String {
        if let Some(warning) = self.store.warning() {
            format!("Changes are not being saved: {warning}")
        } else if !self.store.storage().is_persistent() {
            "Your list will be lost when the app closes".to_string()
        } else {
            "Your list is automatically saved".to_string()
        }
    }

    pub fn title(&self) -> String {
        format!("Shopping List - {}", self.store.list().remaining_label())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::InputChanged(value) => {
                self.input = value;
            }

            Message::Submit => {
                let before = self.store.list().len();
                // Rejected names stay in the box so they can be fixed
                if self.store.add(&self.input).len() > before {
                    self.input.clear();
                }
            }

            Message::Toggle(id) => {
                self.store.toggle(&id);
            }

            Message::Delete(id) => {
                self.store.delete(&id);
            }
        }

        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let list = self.store.list();

        let header = column![
            text("Shopping List App").size(32),
            text(list.remaining_label()).size(14).style(text::secondary),
        ]
        .spacing(4);

        let form = row![
            text_input("Add a new item...", &self.input)
                .on_input(Message::InputChanged)
                .on_submit(Message::Submit)
                .padding(10),
            button("Add").on_press(Message::Submit).padding(10),
        ]
        .spacing(8);

        let items: Element<'_, Message> = if list.is_empty() {
            column![
                text("Your shopping list is empty").size(18),
                text("Add your first item to get started")
                    .size(14)
                    .style(text::secondary),
            ]
            .spacing(4)
            .into()
        } else {
            Column::with_children(list.iter().map(item_row))
                .spacing(8)
                .into()
        };

        let footer = text(self.status_line()).size(12);
        let footer = if self.store.warning().is_some() {
            footer.style(text::danger)
        } else {
            footer.style(text::secondary)
        };

        let content = column![header, form, items, footer]
            .spacing(20)
            .padding(24)
            .max_width(600);

        scrollable(container(content).center_x(Length::Fill))
            .height(Length::Fill)
            .into()
    }
}

fn item_row(item: &Item) -> Element<'_, Message> {
    let purchased = item.is_purchased();

    let toggle_style = if purchased {
        button::success
    } else {
        button::secondary
    };
    let toggle = button(text(if purchased { "✓" } else { " " }).width(16))
        .on_press(Message::Toggle(item.id().clone()))
        .style(toggle_style);

    let name = text(item.name().as_str()).width(Length::Fill);
    let name = if purchased {
        name.style(text::secondary)
    } else {
        name
    };

    let delete = button("Delete")
        .on_press(Message::Delete(item.id().clone()))
        .style(button::danger);

    row![toggle, name, delete].spacing(12).into()
}
