use iced::widget::{button, row, text, Row};

use crate::state::data::ViewMode;
use crate::state::viewer::ShopViewer;
use crate::Message;

/// The item shop / OG toggle.
///
/// The active button is derived from the viewer's current mode, so at
/// most one can ever be highlighted. Both stay clickable; clicking the
/// active one is a no-op in the viewer.
pub fn mode_toggle(viewer: &ShopViewer) -> Row<'static, Message> {
    ViewMode::ALL
        .into_iter()
        .fold(row![].spacing(10), |toggle, mode| {
            toggle.push(mode_button(mode, viewer.is_active(mode)))
        })
}

fn mode_button(mode: ViewMode, active: bool) -> button::Button<'static, Message> {
    let style = if active {
        button::primary
    } else {
        button::secondary
    };

    button(text(mode.label()).size(18))
        .on_press(Message::SelectMode(mode))
        .padding([8, 20])
        .style(style)
}
