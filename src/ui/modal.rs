use iced::widget::{
    button, center, column, container, horizontal_space, mouse_area, opaque, row, stack, text,
};
use iced::{Color, Element};

use crate::state::data::LoadedImage;
use crate::state::viewer::ModalClick;
use crate::ui::picture;
use crate::Message;

/// Lay the lightbox over `base`.
///
/// Clicks on the dimmed background report `ModalClick::Background`; the
/// enlarged image captures clicks on the drawn picture only, so the
/// letterbox bars beside it count as background.
pub fn lightbox<'a>(base: Element<'a, Message>, enlarged: &LoadedImage) -> Element<'a, Message> {
    let close = button(text("✕").size(24))
        .on_press(Message::Modal(ModalClick::CloseButton))
        .style(button::text);

    let picture = picture::clickable(enlarged, 1.0, Message::Modal(ModalClick::Image));

    let file_name = enlarged
        .path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let caption = text(format!("{}  {}x{}", file_name, enlarged.width, enlarged.height))
        .size(14)
        .color(Color::from_rgb(0.8, 0.8, 0.8));

    let content = column![
        row![horizontal_space(), close],
        picture,
        caption,
    ]
    .spacing(8)
    .padding(24);

    stack![
        base,
        opaque(
            mouse_area(center(content).style(|_theme| container::Style {
                background: Some(Color { a: 0.85, ..Color::BLACK }.into()),
                ..container::Style::default()
            }))
            .on_press(Message::Modal(ModalClick::Background))
        )
    ]
    .into()
}
