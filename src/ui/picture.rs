use iced::widget::{center, image, mouse_area, responsive};
use iced::{Element, Length, Size};

use crate::state::data::LoadedImage;
use crate::Message;

/// Size a picture takes when scaled to fit `available`, keeping its aspect ratio
pub fn fitted_size(picture: Size, available: Size) -> Size {
    if picture.width <= 0.0
        || picture.height <= 0.0
        || available.width <= 0.0
        || available.height <= 0.0
    {
        return Size::ZERO;
    }

    let scale = (available.width / picture.width).min(available.height / picture.height);
    Size::new(picture.width * scale, picture.height * scale)
}

/// A picture scaled to fit and centered in the available space.
///
/// The `image` widget is given exactly the fitted size, so the click area
/// covers the drawn picture and not the letterbox bars around it. Clicks
/// on the bars fall through to whatever lies underneath.
pub fn clickable<'a>(loaded: &LoadedImage, opacity: f32, on_press: Message) -> Element<'a, Message> {
    let handle = loaded.handle.clone();
    let natural = Size::new(loaded.width as f32, loaded.height as f32);

    responsive(move |available: Size| {
        let fitted = fitted_size(natural, available);

        center(
            mouse_area(
                image(handle.clone())
                    .width(Length::Fixed(fitted.width))
                    .height(Length::Fixed(fitted.height))
                    .opacity(opacity),
            )
            .on_press(on_press.clone()),
        )
        .into()
    })
    .into()
}
