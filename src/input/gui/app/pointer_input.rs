use winit::event::{ElementState, MouseButton};

use crate::core::data::point::Point;

/// A left-button edge, in board coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Down(Point),
    Up(Point),
}

/// Turns raw mouse button events into press/release pairs.
///
/// A release is only reported after a press was, so a click that started on
/// an egui widget never ends as a drop on the board.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PointerInputState {
    left_held: bool,
}

impl PointerInputState {
    pub fn handle_button(
        &mut self,
        button: MouseButton,
        state: ElementState,
        at: Point,
    ) -> Option<PointerEvent> {
        if button != MouseButton::Left {
            return None;
        }

        match (state, self.left_held) {
            (ElementState::Pressed, false) => {
                self.left_held = true;
                Some(PointerEvent::Down(at))
            }
            (ElementState::Released, true) => {
                self.left_held = false;
                Some(PointerEvent::Up(at))
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn left_held(&self) -> bool {
        self.left_held
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_then_release_yields_down_and_up() {
        let mut input = PointerInputState::default();

        assert_eq!(
            input.handle_button(MouseButton::Left, ElementState::Pressed, Point::new(1, 2)),
            Some(PointerEvent::Down(Point::new(1, 2)))
        );
        assert!(input.left_held());
        assert_eq!(
            input.handle_button(MouseButton::Left, ElementState::Released, Point::new(3, 4)),
            Some(PointerEvent::Up(Point::new(3, 4)))
        );
        assert!(!input.left_held());
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut input = PointerInputState::default();

        assert_eq!(
            input.handle_button(MouseButton::Left, ElementState::Released, Point::new(0, 0)),
            None
        );
    }

    #[test]
    fn repeated_press_is_reported_once() {
        let mut input = PointerInputState::default();

        input.handle_button(MouseButton::Left, ElementState::Pressed, Point::new(0, 0));

        assert_eq!(
            input.handle_button(MouseButton::Left, ElementState::Pressed, Point::new(5, 5)),
            None
        );
    }

    #[test]
    fn other_buttons_are_ignored() {
        let mut input = PointerInputState::default();

        assert_eq!(
            input.handle_button(MouseButton::Right, ElementState::Pressed, Point::new(0, 0)),
            None
        );
        assert!(!input.left_held());
    }

    #[test]
    fn reset_forgets_held_button() {
        let mut input = PointerInputState::default();
        input.handle_button(MouseButton::Left, ElementState::Pressed, Point::new(0, 0));

        input.reset();

        assert!(!input.left_held());
    }
}
